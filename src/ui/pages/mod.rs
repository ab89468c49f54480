pub mod trade;

pub use trade::TradePage;
