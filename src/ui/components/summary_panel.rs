use dioxus::prelude::*;

use super::net_chip::NetChip;
use crate::domain::{net_indicator, Team, TradeEntry, TradeSummary};
use crate::util::number::format_value;

#[component]
pub fn SummaryPanel(summary: TradeSummary, teams: Vec<Team>) -> Element {
    rsx! {
        section { class: "summary-panel",
            h2 { "Trade Summary" }
            p { class: "summary-hint",
                "Enabled players only. Net = incoming (their value to you) − outgoing (your value)."
            }
            div { class: "team-grid",
                for team in teams.iter() {
                    SummaryCard {
                        key: "{team.id}",
                        team_name: team.name.clone(),
                        net: summary.net(&team.id),
                        incoming: summary.incoming(&team.id).to_vec(),
                        outgoing: summary.outgoing(&team.id).to_vec(),
                    }
                }
            }
        }
    }
}

#[component]
fn SummaryCard(
    team_name: String,
    net: f64,
    incoming: Vec<TradeEntry>,
    outgoing: Vec<TradeEntry>,
) -> Element {
    rsx! {
        div { class: "summary-card",
            div { class: "summary-head",
                strong { "{team_name}" }
                NetChip { indicator: net_indicator(net) }
            }
            span { class: "entry-caption", "Incoming (their value to you)" }
            EntryList { entries: incoming }
            span { class: "entry-caption", "Outgoing (your value)" }
            EntryList { entries: outgoing }
        }
    }
}

#[component]
fn EntryList(entries: Vec<TradeEntry>) -> Element {
    if entries.is_empty() {
        return rsx! {
            div { class: "entry-empty", "—" }
        };
    }

    let rows = entries
        .into_iter()
        .map(|entry| (entry.row_key, entry.player.name, format_value(entry.value)))
        .collect::<Vec<_>>();

    rsx! {
        div { class: "entry-list",
            for (row_key, name, value) in rows {
                div { key: "{row_key}", class: "entry-row",
                    span { class: "entry-name", "{name}" }
                    span { class: "entry-value", "{value}" }
                }
            }
        }
    }
}
