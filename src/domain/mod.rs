//! Domain logic for trade valuation lives here.

pub mod board;
pub mod entities;
pub mod schema;
pub mod valuation;

pub use board::{BoardError, PersistedBoard, PlayerPatch, TradeBoard};
pub use entities::{
    default_teams, Player, PlayerId, ReceiverValues, Team, TeamId, PLAYER_NAME_MAX_CHARS,
    TEAM_NAME_MAX_CHARS,
};
pub use schema::{parse_saved_teams, upgrade_teams_schema};
pub use valuation::{
    compute_summary, net_indicator, NetIndicator, NetStatus, TradeDirection, TradeEntry,
    TradeSummary,
};
