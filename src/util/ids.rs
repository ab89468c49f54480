use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use time::OffsetDateTime;

use crate::domain::entities::{PlayerId, Team, TeamId};

static ID_COUNTER: AtomicUsize = AtomicUsize::new(1);

const TEAM_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Process-unique id for transient UI records such as toasts.
pub fn generate_id(prefix: &str) -> String {
    let value = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{value}")
}

/// First single letter A-Z not used by any team, else `T{count + 1}`.
pub fn suggest_team_id(teams: &[Team]) -> TeamId {
    let existing: HashSet<&str> = teams.iter().map(|team| team.id.as_str()).collect();
    TEAM_LETTERS
        .chars()
        .map(String::from)
        .find(|letter| !existing.contains(letter.as_str()))
        .unwrap_or_else(|| format!("T{}", teams.len() + 1))
}

/// Ids of every team except `current`, in collection order.
pub fn other_team_ids(current: &str, teams: &[Team]) -> Vec<TeamId> {
    teams
        .iter()
        .filter(|team| team.id != current)
        .map(|team| team.id.clone())
        .collect()
}

/// Player id derived from the owning team and the current clock.
pub fn new_player_id(team_id: &str, taken: impl Fn(&str) -> bool) -> PlayerId {
    let millis = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
    player_id_for(team_id, millis.max(0) as u128, taken)
}

/// `{team}-{base36 millis}`; a numeric suffix is appended while the
/// candidate is already taken.
pub fn player_id_for(team_id: &str, millis: u128, taken: impl Fn(&str) -> bool) -> PlayerId {
    let base = format!("{team_id}-{}", to_base36(millis));
    if !taken(&base) {
        return base;
    }
    let mut suffix = 2_usize;
    loop {
        let candidate = format!("{base}-{suffix}");
        if !taken(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

pub fn to_base36(mut value: u128) -> String {
    const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if value == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while value > 0 {
        out.push(DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    out.reverse();
    String::from_utf8(out).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams_with_ids(ids: &[&str]) -> Vec<Team> {
        ids.iter()
            .map(|id| Team::new(*id, format!("Team {id}")))
            .collect()
    }

    #[test]
    fn suggests_next_free_letter() {
        assert_eq!(suggest_team_id(&teams_with_ids(&["A", "B"])), "C");
        assert_eq!(suggest_team_id(&teams_with_ids(&["B", "C"])), "A");
        assert_eq!(suggest_team_id(&[]), "A");
    }

    #[test]
    fn falls_back_to_numbered_id_when_alphabet_is_used_up() {
        let letters: Vec<String> = TEAM_LETTERS.chars().map(String::from).collect();
        let ids: Vec<&str> = letters.iter().map(String::as_str).collect();
        assert_eq!(suggest_team_id(&teams_with_ids(&ids)), "T27");
    }

    #[test]
    fn other_ids_keep_collection_order() {
        let teams = teams_with_ids(&["C", "A", "B"]);
        assert_eq!(other_team_ids("A", &teams), vec!["C", "B"]);
        assert!(other_team_ids("A", &teams_with_ids(&["A"])).is_empty());
    }

    #[test]
    fn base36_encoding() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "loyw3v28");
    }

    #[test]
    fn player_ids_avoid_collisions() {
        let first = player_id_for("A", 36, |_| false);
        assert_eq!(first, "A-10");
        let second = player_id_for("A", 36, |candidate| candidate == "A-10");
        assert_eq!(second, "A-10-2");
    }

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(generate_id("toast"), generate_id("toast"));
    }
}
