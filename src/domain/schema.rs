//! Upgrades saved team data into the current shape.
//!
//! Older saves carried a single symmetric `value` per player; the current
//! shape splits it into `senderValue` and per-destination `receiverValues`.
//! Anything the upgrader cannot make sense of at the team level yields
//! `None`, which tells the caller to fall back to the default teams.

use serde_json::{Map, Number, Value};
use tracing::{debug, warn};

use super::entities::{Player, ReceiverValues, Team, TeamId, DEFAULT_PLAYER_NAME};
use crate::util::number::json_number;

/// Converts an arbitrary deserialized value into canonical teams.
pub fn upgrade_teams_schema(raw: &Value) -> Option<Vec<Team>> {
    let Value::Array(items) = raw else {
        debug!("saved teams are not a list; ignoring");
        return None;
    };

    let mut migrated = 0_usize;
    let mut teams = Vec::with_capacity(items.len());
    for item in items {
        let Value::Object(fields) = item else {
            warn!("saved team entry is not an object; discarding saved state");
            return None;
        };
        let Some(id) = fields.get("id").and_then(scalar_to_string) else {
            warn!("saved team entry has no usable id; discarding saved state");
            return None;
        };
        teams.push(upgrade_team(id, fields, &mut migrated));
    }

    if migrated > 0 {
        debug!(migrated, "migrated legacy player values");
    }
    Some(teams)
}

/// Parses saved JSON text and upgrades it. Parse failures yield `None`.
pub fn parse_saved_teams(text: &str) -> Option<Vec<Team>> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => upgrade_teams_schema(&value),
        Err(err) => {
            warn!("failed to parse saved teams: {err}");
            None
        }
    }
}

fn upgrade_team(id: TeamId, fields: &Map<String, Value>, migrated: &mut usize) -> Team {
    let name = fields
        .get("name")
        .and_then(scalar_to_string)
        .unwrap_or_else(|| format!("Team {id}"));

    let players = match fields.get("players") {
        Some(Value::Array(entries)) => entries
            .iter()
            .enumerate()
            // Non-object players are dropped on their own rather than
            // discarding the whole save.
            .filter_map(|(index, entry)| match entry {
                Value::Object(player) => Some(upgrade_player(&id, index, player, migrated)),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };

    let extra = fields
        .iter()
        .filter(|(key, _)| !matches!(key.as_str(), "id" | "name" | "players"))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Team {
        id,
        name,
        players,
        extra,
    }
}

fn upgrade_player(
    team_id: &str,
    index: usize,
    fields: &Map<String, Value>,
    migrated: &mut usize,
) -> Player {
    let sender_value = match fields.get("senderValue").and_then(json_number) {
        Some(value) => value,
        None => match fields.get("value").and_then(json_number) {
            Some(legacy) => {
                *migrated += 1;
                legacy
            }
            None => 0.0,
        },
    };

    let receiver_values: ReceiverValues = match fields.get("receiverValues") {
        Some(Value::Object(entries)) => entries
            .iter()
            .filter_map(|(team, value)| json_number(value).map(|number| (team.clone(), number)))
            .collect(),
        _ => ReceiverValues::new(),
    };

    Player {
        id: fields
            .get("id")
            .and_then(scalar_to_string)
            .unwrap_or_else(|| format!("{team_id}-p{index}")),
        name: fields
            .get("name")
            .and_then(scalar_to_string)
            .unwrap_or_else(|| DEFAULT_PLAYER_NAME.to_string()),
        sender_value,
        receiver_values,
        enabled: !matches!(fields.get("enabled"), Some(Value::Bool(false))),
        to_team_id: fields
            .get("toTeamId")
            .and_then(scalar_to_string)
            .unwrap_or_else(|| team_id.to_string()),
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number_to_string(number)),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

/// Whole-valued floats print without a fraction so `1.0` and `1` name the
/// same team.
fn number_to_string(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() && float.fract() == 0.0 && float.abs() < 1e15 => {
            format!("{}", float as i64)
        }
        _ => number.to_string(),
    }
}
