use std::fs;
use std::path::PathBuf;

use trade_analyzer::domain::{compute_summary, parse_saved_teams, upgrade_teams_schema};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn upgrades_symmetric_value_saves() {
    let teams = parse_saved_teams(&read_fixture("legacy_v1.json")).expect("fixture should upgrade");
    assert_eq!(teams.len(), 3);

    let forward = &teams[0].players[0];
    assert_eq!(forward.sender_value, 40.0);
    assert!(forward.receiver_values.is_empty());
    assert!(forward.enabled);

    assert!(!teams[0].players[1].enabled);
    assert!(teams[1].players[0].enabled);

    let unnamed = &teams[2].players[1];
    assert_eq!(unnamed.name, "Player");
    assert_eq!(unnamed.sender_value, 0.0);
    assert_eq!(unnamed.to_team_id, "C");
}

#[test]
fn upgraded_saves_value_incoming_players_at_zero_until_edited() {
    let teams = parse_saved_teams(&read_fixture("legacy_v1.json")).expect("fixture should upgrade");
    let summary = compute_summary(&teams);

    assert_eq!(summary.outgoing_total("A"), 40.0);
    assert_eq!(summary.incoming_total("A"), 0.0);
    assert_eq!(summary.net("A"), -40.0);

    assert_eq!(summary.incoming("B").len(), 1);
    assert_eq!(summary.net("B"), -25.0);

    assert_eq!(summary.incoming("C").len(), 1);
    assert_eq!(summary.net("C"), -18.0);
}

#[test]
fn upgrading_twice_changes_nothing() {
    let once = parse_saved_teams(&read_fixture("legacy_v1.json")).expect("fixture should upgrade");
    let canonical = serde_json::to_value(&once).expect("teams serialize");
    let twice = upgrade_teams_schema(&canonical).expect("canonical shape upgrades");
    assert_eq!(once, twice);
}
