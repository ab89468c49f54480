pub mod net_chip;
pub mod summary_panel;
pub mod team_editor;
pub mod toast;
