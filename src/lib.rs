//! Multi-team trade analyzer: team/player model with asymmetric values,
//! saved-data upgrades and the per-team trade balance.

pub mod config;
pub mod domain;
pub mod util;
