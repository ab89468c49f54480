use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde_json::Error as SerdeError;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::domain::{parse_saved_teams, Team};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "TradeAnalyzer";
const APP_NAME: &str = "TradeAnalyzer";

pub const STATE_FILE_NAME: &str = "three_way_trade_analyzer.v2.json";

/// Location of the saved teams: the configured override, else the platform
/// config directory.
pub fn state_file(config: &AppConfig) -> Option<PathBuf> {
    if let Some(path) = &config.state_file {
        return Some(path.clone());
    }
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(STATE_FILE_NAME))
}

/// Reads and upgrades saved teams. Missing, unreadable or invalid files all
/// yield `None` so the caller seeds the defaults.
pub fn load_saved_teams(path: &Path) -> Option<Vec<Team>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("no saved teams at {}", path.display());
            return None;
        }
        Err(err) => {
            warn!("failed to read saved teams from {}: {err}", path.display());
            return None;
        }
    };
    let teams = parse_saved_teams(&data)?;
    info!(teams = teams.len(), "loaded saved teams from {}", path.display());
    Some(teams)
}

pub fn save_teams(path: &Path, teams: &[Team]) -> Result<(), PersistSaveError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(teams)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    debug!(teams = teams.len(), "saved teams to {}", path.display());
    Ok(())
}

/// Removes the saved teams. A file that is already gone is not an error.
pub fn clear_saved_teams(path: &Path) -> Result<(), PersistSaveError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(err) => Err(err.into()),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PersistSaveError {
    #[error("storage directory unavailable")]
    StorageUnavailable,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] SerdeError),
}
