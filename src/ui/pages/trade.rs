use dioxus::prelude::*;

use crate::{
    app::TradeContext,
    domain::BoardError,
    ui::components::{summary_panel::SummaryPanel, team_editor::TeamEditor},
};

#[component]
pub fn TradePage() -> Element {
    let ctx = use_context::<TradeContext>();

    let teams = ctx.board.with(|board| board.teams().to_vec());
    let summary = ctx.board.with(|board| board.summary());
    summary.log_digest(&teams);

    let on_add_team = move |_| {
        if let Some(id) = ctx.mutate(|board| Ok::<_, BoardError>(board.add_team())) {
            ctx.toasts.success(format!("Added Team {id}."));
        }
    };

    let on_reset = move |_| ctx.reset();

    rsx! {
        div { class: "page-actions",
            button {
                class: "danger",
                title: "Restore the example trade and forget saved changes",
                onclick: on_reset,
                "Reset"
            }
            button {
                class: "primary",
                onclick: on_add_team,
                "Add Team"
            }
        }

        div { class: "team-grid",
            for team in teams.iter() {
                TeamEditor {
                    key: "{team.id}",
                    team: team.clone(),
                    all_teams: teams.clone(),
                }
            }
        }

        SummaryPanel { summary, teams: teams.clone() }
    }
}
