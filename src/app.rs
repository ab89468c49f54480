use dioxus::prelude::*;
use tracing::{info, warn};

use crate::{
    config::AppConfig,
    domain::{BoardError, PersistedBoard, TradeBoard},
    ui::{
        components::toast::{Toast, ToastMessage, Toasts},
        pages::TradePage,
        shell::Shell,
    },
    util::{
        assets,
        persistence::{
            clear_saved_teams, load_saved_teams, save_teams, state_file, PersistSaveError,
        },
    },
};

#[component]
pub fn App() -> Element {
    let config = use_signal(AppConfig::from_env);
    let board = use_signal(move || load_board(&config.peek()));

    let toasts = Toasts::new(use_signal(Vec::<ToastMessage>::new));
    use_context_provider(|| toasts);
    use_context_provider(|| TradeContext {
        board,
        config,
        toasts,
    });

    rsx! {
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        Shell { TradePage {} }
        Toast {}
    }
}

/// Handle shared with the pages: the board plus everything a change needs
/// to persist itself and report failures.
#[derive(Clone, Copy)]
pub struct TradeContext {
    pub board: Signal<TradeBoard>,
    pub config: Signal<AppConfig>,
    pub toasts: Toasts,
}

impl TradeContext {
    /// Applies one change to the board and saves it. Errors leave the board
    /// untouched and surface as a toast.
    pub fn mutate<R>(
        self,
        change: impl FnOnce(&mut TradeBoard) -> Result<R, BoardError>,
    ) -> Option<R> {
        let mut board = self.board;
        match board.with_mut(change) {
            Ok(result) => {
                self.persist();
                Some(result)
            }
            Err(err) => {
                warn!("rejected board change: {err}");
                self.toasts.push(&err);
                None
            }
        }
    }

    /// Restores the default teams and forgets the saved ones.
    pub fn reset(self) {
        let mut board = self.board;
        board.with_mut(|b| b.reset());
        let cleared = self
            .config
            .with(|cfg| state_file(cfg))
            .map(|path| clear_saved_teams(&path))
            .unwrap_or(Err(PersistSaveError::StorageUnavailable));
        if let Err(err) = cleared {
            warn!("failed to clear saved teams: {err}");
        }
        self.toasts.info("Restored the default trade.");
    }

    fn persist(self) {
        let config = self.config.with(|cfg| cfg.clone());
        if !config.autosave {
            return;
        }
        let snapshot = self.board.with(|b| b.to_persisted());
        if let Err(err) = persist_board(&config, &snapshot) {
            warn!("failed to persist teams: {err}");
            self.toasts.push(&err);
        }
    }
}

/// Saved teams when there are any, otherwise the default trade.
fn load_board(config: &AppConfig) -> TradeBoard {
    let mut board = TradeBoard::default();
    match state_file(config).and_then(|path| load_saved_teams(&path)) {
        Some(teams) => board.apply_persisted(PersistedBoard { teams }),
        None => info!("no saved teams; starting from the default trade"),
    }
    board
}

fn persist_board(config: &AppConfig, snapshot: &PersistedBoard) -> Result<(), PersistSaveError> {
    let path = state_file(config).ok_or(PersistSaveError::StorageUnavailable)?;
    save_teams(&path, &snapshot.teams)
}
