use std::collections::HashMap;

use tracing::debug;

use super::entities::{Player, Team, TeamId};
use crate::util::number::{finite_or_zero, format_value};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TradeDirection {
    Outgoing,
    Incoming,
}

impl TradeDirection {
    fn key_segment(&self) -> &'static str {
        match self {
            TradeDirection::Outgoing => "out",
            TradeDirection::Incoming => "in",
        }
    }
}

/// One appearance of a player in a team's incoming or outgoing list.
///
/// The same player shows up twice (once per side) with different values,
/// so `row_key` carries the direction to keep list keys distinct.
#[derive(Clone, Debug, PartialEq)]
pub struct TradeEntry {
    pub row_key: String,
    pub direction: TradeDirection,
    pub from_team_id: TeamId,
    pub player: Player,
    pub value: f64,
}

impl TradeEntry {
    fn new(
        direction: TradeDirection,
        from_team_id: &str,
        side_team_id: &str,
        player: &Player,
        value: f64,
    ) -> Self {
        Self {
            row_key: format!("{}-{}-{}", player.id, direction.key_segment(), side_team_id),
            direction,
            from_team_id: from_team_id.to_string(),
            player: player.clone(),
            value,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TradeSummary {
    pub incoming_by_team: HashMap<TeamId, Vec<TradeEntry>>,
    pub outgoing_by_team: HashMap<TeamId, Vec<TradeEntry>>,
    pub net_by_team: HashMap<TeamId, f64>,
}

impl TradeSummary {
    pub fn incoming(&self, team_id: &str) -> &[TradeEntry] {
        self.incoming_by_team
            .get(team_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn outgoing(&self, team_id: &str) -> &[TradeEntry] {
        self.outgoing_by_team
            .get(team_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn net(&self, team_id: &str) -> f64 {
        self.net_by_team.get(team_id).copied().unwrap_or(0.0)
    }

    pub fn incoming_total(&self, team_id: &str) -> f64 {
        sum_values(self.incoming(team_id))
    }

    pub fn outgoing_total(&self, team_id: &str) -> f64 {
        sum_values(self.outgoing(team_id))
    }

    pub fn team_ids(&self) -> impl Iterator<Item = &TeamId> {
        self.net_by_team.keys()
    }

    pub fn log_digest(&self, teams: &[Team]) {
        for team in teams {
            debug!(
                team = %team.id,
                incoming = self.incoming(&team.id).len(),
                outgoing = self.outgoing(&team.id).len(),
                net = self.net(&team.id),
                "trade balance"
            );
        }
    }
}

/// Builds the per-team incoming/outgoing lists and net balance.
///
/// Disabled players and players pointing at their own team are skipped.
/// Offers to a team id that is not in `teams` still count as outgoing for
/// the sender but land in no incoming list. Lists follow team order, then
/// player order.
pub fn compute_summary(teams: &[Team]) -> TradeSummary {
    let mut summary = TradeSummary::default();
    for team in teams {
        summary.incoming_by_team.insert(team.id.clone(), Vec::new());
        summary.outgoing_by_team.insert(team.id.clone(), Vec::new());
        summary.net_by_team.insert(team.id.clone(), 0.0);
    }

    for from in teams {
        for player in &from.players {
            if !player.enabled || player.is_self_directed(&from.id) {
                continue;
            }
            let to = player.to_team_id.as_str();

            let outgoing = TradeEntry::new(
                TradeDirection::Outgoing,
                &from.id,
                &from.id,
                player,
                finite_or_zero(player.sender_value),
            );
            summary
                .outgoing_by_team
                .entry(from.id.clone())
                .or_default()
                .push(outgoing);

            if let Some(incoming) = summary.incoming_by_team.get_mut(to) {
                incoming.push(TradeEntry::new(
                    TradeDirection::Incoming,
                    &from.id,
                    to,
                    player,
                    player.receiver_value_for(to),
                ));
            }
        }
    }

    for team in teams {
        let net = summary.incoming_total(&team.id) - summary.outgoing_total(&team.id);
        summary.net_by_team.insert(team.id.clone(), net);
    }

    summary
}

fn sum_values(entries: &[TradeEntry]) -> f64 {
    entries.iter().map(|entry| finite_or_zero(entry.value)).sum()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NetStatus {
    Gain,
    Loss,
    Even,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NetIndicator {
    pub status: NetStatus,
    pub label: String,
}

pub fn net_indicator(net: f64) -> NetIndicator {
    let net = finite_or_zero(net);
    let status = if net > 0.0 {
        NetStatus::Gain
    } else if net < 0.0 {
        NetStatus::Loss
    } else {
        NetStatus::Even
    };
    NetIndicator {
        status,
        label: format!("Net {}", format_value(net)),
    }
}
