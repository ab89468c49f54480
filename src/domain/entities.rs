use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::util::number::finite_or_zero;

/// Short team identifier, e.g. `"A"` or `"T27"`.
pub type TeamId = String;

pub type PlayerId = String;

/// Value of a player as perceived by each prospective destination team.
/// Missing entries mean "not valued yet" and count as 0.
pub type ReceiverValues = BTreeMap<TeamId, f64>;

pub const TEAM_NAME_MAX_CHARS: usize = 32;
pub const PLAYER_NAME_MAX_CHARS: usize = 48;

pub const DEFAULT_PLAYER_NAME: &str = "Player";
pub const NEW_PLAYER_NAME: &str = "New Player";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub players: Vec<Player>,
    /// Fields this version does not know about; kept so saves round-trip.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Team {
    pub fn new(id: impl Into<TeamId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            players: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|player| player.id == player_id)
    }
}

/// An offered player. The edge it describes runs from the owning team to
/// `to_team_id`; pointing at the owner means "not part of the trade".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub sender_value: f64,
    #[serde(default)]
    pub receiver_values: ReceiverValues,
    pub enabled: bool,
    pub to_team_id: TeamId,
}

impl Player {
    /// Value the given team assigns to this player, 0 when not set.
    pub fn receiver_value_for(&self, team_id: &str) -> f64 {
        self.receiver_values
            .get(team_id)
            .copied()
            .map(finite_or_zero)
            .unwrap_or(0.0)
    }

    /// Receiver value for the currently proposed destination.
    pub fn current_receiver_value(&self) -> f64 {
        self.receiver_value_for(&self.to_team_id)
    }

    pub fn is_self_directed(&self, owner: &str) -> bool {
        self.to_team_id.is_empty() || self.to_team_id == owner
    }
}

/// Truncates to at most `max` characters.
pub fn clamp_chars(input: &str, max: usize) -> String {
    input.chars().take(max).collect()
}

/// Seed shown on first launch and after a reset: two teams swapping one
/// player each, valued differently on each side.
pub fn default_teams() -> Vec<Team> {
    let mut team_a = Team::new("A", "Team A");
    team_a.players.push(Player {
        id: "a1".to_string(),
        name: "Player A1".to_string(),
        sender_value: 32.0,
        receiver_values: BTreeMap::from([("B".to_string(), 35.0)]),
        enabled: true,
        to_team_id: "B".to_string(),
    });

    let mut team_b = Team::new("B", "Team B");
    team_b.players.push(Player {
        id: "b1".to_string(),
        name: "Player B1".to_string(),
        sender_value: 27.0,
        receiver_values: BTreeMap::from([("A".to_string(), 31.0)]),
        enabled: true,
        to_team_id: "A".to_string(),
    });

    vec![team_a, team_b]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_saved_field_names() {
        let teams = default_teams();
        let value = serde_json::to_value(&teams).unwrap();
        assert_eq!(
            value[0]["players"][0],
            json!({
                "id": "a1",
                "name": "Player A1",
                "senderValue": 32.0,
                "receiverValues": { "B": 35.0 },
                "enabled": true,
                "toTeamId": "B"
            })
        );
        assert_eq!(value[1]["id"], "B");
    }

    #[test]
    fn unknown_team_fields_survive_a_round_trip() {
        let raw = json!([{ "id": "A", "name": "Team A", "players": [], "color": "red" }]);
        let teams: Vec<Team> = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(teams[0].extra.get("color"), Some(&json!("red")));
        assert_eq!(serde_json::to_value(&teams).unwrap(), raw);
    }

    #[test]
    fn missing_receiver_value_reads_as_zero() {
        let player = &default_teams()[0].players[0];
        assert_eq!(player.current_receiver_value(), 35.0);
        assert_eq!(player.receiver_value_for("C"), 0.0);
        assert!(!player.is_self_directed("A"));
        assert!(player.is_self_directed("B"));
    }

    #[test]
    fn names_are_clamped_by_characters() {
        assert_eq!(clamp_chars("abcdef", 3), "abc");
        assert_eq!(clamp_chars("ééé", 2), "éé");
        assert_eq!(clamp_chars("ab", 32), "ab");
    }
}
