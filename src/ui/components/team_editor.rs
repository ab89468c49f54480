use dioxus::prelude::*;

use crate::{
    app::TradeContext,
    domain::{Player, PlayerPatch, Team, TeamId, PLAYER_NAME_MAX_CHARS, TEAM_NAME_MAX_CHARS},
    util::number::num_or_zero,
};

#[component]
pub fn TeamEditor(team: Team, all_teams: Vec<Team>) -> Element {
    let ctx = use_context::<TradeContext>();

    let destinations: Vec<(TeamId, String)> = all_teams
        .iter()
        .map(|t| (t.id.clone(), t.name.clone()))
        .collect();
    let is_empty = team.players.is_empty();

    let on_rename = {
        let team_id = team.id.clone();
        move |evt: FormEvent| {
            ctx.mutate(|board| board.set_team_name(&team_id, &evt.value()));
        }
    };

    let on_add_player = {
        let team_id = team.id.clone();
        move |_| {
            ctx.mutate(|board| board.add_player(&team_id));
        }
    };

    rsx! {
        div { class: "team-card",
            input {
                class: "team-name",
                value: "{team.name}",
                maxlength: "{TEAM_NAME_MAX_CHARS}",
                placeholder: "Team name",
                oninput: on_rename,
            }
            for player in team.players.iter() {
                PlayerRow {
                    key: "{player.id}",
                    team_id: team.id.clone(),
                    player: player.clone(),
                    destinations: destinations.clone(),
                }
            }
            if is_empty {
                p { class: "player-empty", "No players offered yet." }
            }
            button {
                onclick: on_add_player,
                "Add Player"
            }
        }
    }
}

#[component]
fn PlayerRow(team_id: TeamId, player: Player, destinations: Vec<(TeamId, String)>) -> Element {
    let ctx = use_context::<TradeContext>();

    let mut options: Vec<(TeamId, String, bool)> = destinations
        .iter()
        .map(|(id, name)| (id.clone(), name.clone(), *id == team_id))
        .collect();
    let destination_known = destinations.iter().any(|(id, _)| *id == player.to_team_id);
    if !destination_known && !player.to_team_id.is_empty() {
        // The destination team no longer exists; keep it selectable so the row
        // shows what it still points at.
        options.push((
            player.to_team_id.clone(),
            format!("{} (removed)", player.to_team_id),
            true,
        ));
    }
    let destination_name = destinations
        .iter()
        .find(|(id, _)| *id == player.to_team_id)
        .map(|(_, name)| name.clone())
        .unwrap_or_else(|| player.to_team_id.clone());

    let row_class = if player.enabled {
        "player-row"
    } else {
        "player-row disabled"
    };
    let sender_value = player.sender_value.to_string();
    let receiver_value = player.current_receiver_value().to_string();
    let receiver_title = format!("Value to {destination_name}");

    let on_toggle = {
        let team_id = team_id.clone();
        let player_id = player.id.clone();
        move |evt: FormEvent| {
            let patch = PlayerPatch::enabled(evt.checked());
            ctx.mutate(|board| board.apply_patch(&team_id, &player_id, patch));
        }
    };

    let on_rename = {
        let team_id = team_id.clone();
        let player_id = player.id.clone();
        move |evt: FormEvent| {
            let patch = PlayerPatch::name(evt.value());
            ctx.mutate(|board| board.apply_patch(&team_id, &player_id, patch));
        }
    };

    let on_sender_value = {
        let team_id = team_id.clone();
        let player_id = player.id.clone();
        move |evt: FormEvent| {
            let patch = PlayerPatch::sender_value(num_or_zero(&evt.value()));
            ctx.mutate(|board| board.apply_patch(&team_id, &player_id, patch));
        }
    };

    let on_destination = {
        let team_id = team_id.clone();
        let player_id = player.id.clone();
        move |evt: FormEvent| {
            let patch = PlayerPatch::to_team(evt.value());
            ctx.mutate(|board| board.apply_patch(&team_id, &player_id, patch));
        }
    };

    let on_receiver_value = {
        let team_id = team_id.clone();
        let player_id = player.id.clone();
        move |evt: FormEvent| {
            let value = num_or_zero(&evt.value());
            ctx.mutate(|board| board.set_receiver_value(&team_id, &player_id, value));
        }
    };

    let on_delete = {
        let team_id = team_id.clone();
        let player_id = player.id.clone();
        let name = player.name.clone();
        move |_| {
            if ctx
                .mutate(|board| board.delete_player(&team_id, &player_id))
                .is_some()
            {
                ctx.toasts.info(format!("Removed {name}."));
            }
        }
    };

    rsx! {
        div { class: "{row_class}",
            input {
                r#type: "checkbox",
                title: "Include in trade",
                checked: player.enabled,
                onchange: on_toggle,
            }
            input {
                value: "{player.name}",
                maxlength: "{PLAYER_NAME_MAX_CHARS}",
                placeholder: "Player",
                oninput: on_rename,
            }
            input {
                r#type: "number",
                min: "0",
                step: "1",
                title: "Your value",
                value: "{sender_value}",
                oninput: on_sender_value,
            }
            select {
                title: "Send to",
                onchange: on_destination,
                for (id, name, disabled) in options {
                    option {
                        key: "{id}",
                        value: "{id}",
                        selected: id == player.to_team_id,
                        disabled: disabled,
                        "{name}"
                    }
                }
            }
            input {
                r#type: "number",
                min: "0",
                step: "1",
                title: "{receiver_title}",
                value: "{receiver_value}",
                oninput: on_receiver_value,
            }
            button {
                class: "danger",
                title: "Remove player",
                onclick: on_delete,
                "✕"
            }
        }
    }
}
