//! The teams collection and the only operations allowed to change it.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::entities::{
    clamp_chars, default_teams, Player, PlayerId, ReceiverValues, Team, TeamId, NEW_PLAYER_NAME,
    PLAYER_NAME_MAX_CHARS, TEAM_NAME_MAX_CHARS,
};
use super::valuation::{compute_summary, TradeSummary};
use crate::util::ids::{new_player_id, other_team_ids, suggest_team_id};
use crate::util::number::finite_or_zero;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("no team with id {0}")]
    UnknownTeam(TeamId),
    #[error("team {team_id} has no player with id {player_id}")]
    UnknownPlayer { team_id: TeamId, player_id: PlayerId },
}

/// Field-level update for a player. `None` leaves the field untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerPatch {
    pub name: Option<String>,
    pub sender_value: Option<f64>,
    pub receiver_values: Option<ReceiverValues>,
    pub enabled: Option<bool>,
    pub to_team_id: Option<TeamId>,
}

impl PlayerPatch {
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn sender_value(value: f64) -> Self {
        Self {
            sender_value: Some(value),
            ..Self::default()
        }
    }

    pub fn enabled(enabled: bool) -> Self {
        Self {
            enabled: Some(enabled),
            ..Self::default()
        }
    }

    pub fn to_team(team_id: impl Into<TeamId>) -> Self {
        Self {
            to_team_id: Some(team_id.into()),
            ..Self::default()
        }
    }

    fn apply(self, player: &mut Player) {
        if let Some(name) = self.name {
            player.name = name;
        }
        if let Some(value) = self.sender_value {
            player.sender_value = value;
        }
        if let Some(values) = self.receiver_values {
            player.receiver_values = values;
        }
        if let Some(enabled) = self.enabled {
            player.enabled = enabled;
        }
        if let Some(team_id) = self.to_team_id {
            player.to_team_id = team_id;
        }
    }
}

/// Saved form of the board: the bare teams array.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersistedBoard {
    pub teams: Vec<Team>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TradeBoard {
    teams: Vec<Team>,
}

impl Default for TradeBoard {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl TradeBoard {
    pub fn new(teams: Vec<Team>) -> Self {
        Self { teams }
    }

    pub fn with_defaults() -> Self {
        Self::new(default_teams())
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, team_id: &str) -> Option<&Team> {
        self.teams.iter().find(|team| team.id == team_id)
    }

    pub fn summary(&self) -> TradeSummary {
        compute_summary(&self.teams)
    }

    pub fn reset(&mut self) {
        debug!("restoring default teams");
        self.teams = default_teams();
    }

    pub fn apply_persisted(&mut self, persisted: PersistedBoard) {
        self.teams = persisted.teams;
    }

    pub fn to_persisted(&self) -> PersistedBoard {
        PersistedBoard {
            teams: self.teams.clone(),
        }
    }

    /// Appends an empty team and returns its id.
    pub fn add_team(&mut self) -> TeamId {
        let id = suggest_team_id(&self.teams);
        debug!(team = %id, "adding team");
        self.teams.push(Team::new(id.clone(), format!("Team {id}")));
        id
    }

    pub fn set_team_name(&mut self, team_id: &str, name: &str) -> Result<(), BoardError> {
        let team = self.team_mut(team_id)?;
        team.name = clamp_chars(name, TEAM_NAME_MAX_CHARS);
        Ok(())
    }

    /// Adds a blank player aimed at the first other team, or at its own team
    /// when it is alone.
    pub fn add_player(&mut self, team_id: &str) -> Result<PlayerId, BoardError> {
        if self.team(team_id).is_none() {
            return Err(BoardError::UnknownTeam(team_id.to_string()));
        }
        let destination = other_team_ids(team_id, &self.teams)
            .into_iter()
            .next()
            .unwrap_or_else(|| team_id.to_string());
        let id = new_player_id(team_id, |candidate| self.player_id_taken(candidate));

        let team = self.team_mut(team_id)?;
        team.players.push(Player {
            id: id.clone(),
            name: NEW_PLAYER_NAME.to_string(),
            sender_value: 0.0,
            receiver_values: ReceiverValues::new(),
            enabled: true,
            to_team_id: destination,
        });
        debug!(team = %team_id, player = %id, "added player");
        Ok(id)
    }

    pub fn delete_player(&mut self, team_id: &str, player_id: &str) -> Result<(), BoardError> {
        let team = self.team_mut(team_id)?;
        let before = team.players.len();
        team.players.retain(|player| player.id != player_id);
        if team.players.len() == before {
            return Err(unknown_player(team_id, player_id));
        }
        debug!(team = %team_id, player = %player_id, "deleted player");
        Ok(())
    }

    /// Merges a field-level patch into the player.
    pub fn apply_patch(
        &mut self,
        team_id: &str,
        player_id: &str,
        patch: PlayerPatch,
    ) -> Result<(), BoardError> {
        let player = self.player_mut(team_id, player_id)?;
        patch.apply(player);
        normalize_player(player);
        Ok(())
    }

    /// Replaces the player with whatever `transform` builds from it.
    pub fn apply_transform<F>(
        &mut self,
        team_id: &str,
        player_id: &str,
        transform: F,
    ) -> Result<(), BoardError>
    where
        F: FnOnce(&Player) -> Player,
    {
        let player = self.player_mut(team_id, player_id)?;
        let mut next = transform(player);
        normalize_player(&mut next);
        *player = next;
        Ok(())
    }

    /// Sets the value the player's current destination assigns to it,
    /// keeping values stored for other destinations.
    pub fn set_receiver_value(
        &mut self,
        team_id: &str,
        player_id: &str,
        value: f64,
    ) -> Result<(), BoardError> {
        self.apply_transform(team_id, player_id, |current| {
            let mut next = current.clone();
            next.receiver_values.insert(current.to_team_id.clone(), value);
            next
        })
    }

    fn player_id_taken(&self, candidate: &str) -> bool {
        self.teams
            .iter()
            .flat_map(|team| team.players.iter())
            .any(|player| player.id == candidate)
    }

    fn team_mut(&mut self, team_id: &str) -> Result<&mut Team, BoardError> {
        self.teams
            .iter_mut()
            .find(|team| team.id == team_id)
            .ok_or_else(|| BoardError::UnknownTeam(team_id.to_string()))
    }

    fn player_mut(&mut self, team_id: &str, player_id: &str) -> Result<&mut Player, BoardError> {
        self.team_mut(team_id)?
            .players
            .iter_mut()
            .find(|player| player.id == player_id)
            .ok_or_else(|| unknown_player(team_id, player_id))
    }
}

fn unknown_player(team_id: &str, player_id: &str) -> BoardError {
    BoardError::UnknownPlayer {
        team_id: team_id.to_string(),
        player_id: player_id.to_string(),
    }
}

fn non_negative(value: f64) -> f64 {
    finite_or_zero(value).max(0.0)
}

fn normalize_player(player: &mut Player) {
    player.name = clamp_chars(&player.name, PLAYER_NAME_MAX_CHARS);
    player.sender_value = non_negative(player.sender_value);
    for value in player.receiver_values.values_mut() {
        *value = non_negative(*value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_team_uses_next_letter() {
        let mut board = TradeBoard::with_defaults();
        assert_eq!(board.add_team(), "C");
        let team = board.team("C").unwrap();
        assert_eq!(team.name, "Team C");
        assert!(team.players.is_empty());
        assert_eq!(board.summary().net("C"), 0.0);
    }

    #[test]
    fn new_player_targets_first_other_team() {
        let mut board = TradeBoard::with_defaults();
        board.add_team();
        let id = board.add_player("B").unwrap();
        let player = board.team("B").unwrap().player(&id).unwrap();
        assert_eq!(player.to_team_id, "A");
        assert_eq!(player.name, "New Player");
        assert_eq!(player.sender_value, 0.0);
        assert!(player.receiver_values.is_empty());
        assert!(player.enabled);
        assert!(id.starts_with("B-"));
    }

    #[test]
    fn lone_team_player_points_at_itself() {
        let mut board = TradeBoard::new(vec![Team::new("A", "Solo")]);
        let id = board.add_player("A").unwrap();
        assert_eq!(board.team("A").unwrap().player(&id).unwrap().to_team_id, "A");
        assert!(board.summary().outgoing("A").is_empty());
    }

    #[test]
    fn player_ids_stay_unique_within_the_same_millisecond() {
        let mut board = TradeBoard::new(vec![Team::new("A", "A"), Team::new("B", "B")]);
        let ids: Vec<PlayerId> = (0..5).map(|_| board.add_player("A").unwrap()).collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn unknown_targets_are_reported_and_leave_state_alone() {
        let mut board = TradeBoard::with_defaults();
        let before = board.clone();
        assert_eq!(
            board.add_player("Z"),
            Err(BoardError::UnknownTeam("Z".to_string()))
        );
        assert!(matches!(
            board.delete_player("A", "nope"),
            Err(BoardError::UnknownPlayer { .. })
        ));
        assert!(board
            .apply_patch("B", "a1", PlayerPatch::enabled(false))
            .is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn patch_updates_only_given_fields() {
        let mut board = TradeBoard::with_defaults();
        board
            .apply_patch("A", "a1", PlayerPatch::sender_value(40.0))
            .unwrap();
        let player = board.team("A").unwrap().player("a1").unwrap();
        assert_eq!(player.sender_value, 40.0);
        assert_eq!(player.name, "Player A1");
        assert_eq!(player.receiver_value_for("B"), 35.0);
        assert_eq!(board.summary().net("A"), 31.0 - 40.0);
    }

    #[test]
    fn patched_numbers_are_normalized() {
        let mut board = TradeBoard::with_defaults();
        board
            .apply_patch("A", "a1", PlayerPatch::sender_value(f64::NAN))
            .unwrap();
        assert_eq!(board.team("A").unwrap().players[0].sender_value, 0.0);
        board
            .apply_patch("A", "a1", PlayerPatch::sender_value(-5.0))
            .unwrap();
        assert_eq!(board.team("A").unwrap().players[0].sender_value, 0.0);
    }

    #[test]
    fn receiver_value_update_keeps_other_destinations() {
        let mut board = TradeBoard::with_defaults();
        board.add_team();
        board
            .apply_patch("A", "a1", PlayerPatch::to_team("C"))
            .unwrap();
        board.set_receiver_value("A", "a1", 50.0).unwrap();

        let player = board.team("A").unwrap().player("a1").unwrap();
        assert_eq!(player.receiver_value_for("B"), 35.0);
        assert_eq!(player.receiver_value_for("C"), 50.0);

        let summary = board.summary();
        assert_eq!(summary.net("C"), 50.0);
        assert!(summary.incoming("B").is_empty());
    }

    #[test]
    fn transform_replaces_the_player() {
        let mut board = TradeBoard::with_defaults();
        board
            .apply_transform("B", "b1", |current| Player {
                name: "x".repeat(60),
                enabled: false,
                ..current.clone()
            })
            .unwrap();
        let player = board.team("B").unwrap().player("b1").unwrap();
        assert!(!player.enabled);
        assert_eq!(player.name.chars().count(), PLAYER_NAME_MAX_CHARS);
        assert_eq!(board.summary().net("B"), 35.0);
    }

    #[test]
    fn deleting_the_only_player_empties_the_trade() {
        let mut board = TradeBoard::with_defaults();
        board.delete_player("A", "a1").unwrap();
        let summary = board.summary();
        assert!(summary.outgoing("A").is_empty());
        assert!(summary.incoming("B").is_empty());
        assert!(board.team("A").unwrap().players.is_empty());
    }

    #[test]
    fn team_names_are_bounded() {
        let mut board = TradeBoard::with_defaults();
        board.set_team_name("A", &"n".repeat(40)).unwrap();
        assert_eq!(board.team("A").unwrap().name.len(), TEAM_NAME_MAX_CHARS);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut board = TradeBoard::with_defaults();
        board.add_team();
        board.delete_player("B", "b1").unwrap();
        board.reset();
        assert_eq!(board.teams(), default_teams().as_slice());
    }

    #[test]
    fn persisted_form_is_the_bare_team_list() {
        let board = TradeBoard::with_defaults();
        let json = serde_json::to_value(board.to_persisted()).unwrap();
        assert!(json.is_array());
        let restored: PersistedBoard = serde_json::from_value(json).unwrap();
        let mut other = TradeBoard::new(Vec::new());
        other.apply_persisted(restored);
        assert_eq!(other, board);
    }
}
