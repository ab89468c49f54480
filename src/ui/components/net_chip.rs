use dioxus::prelude::*;

use crate::domain::{NetIndicator, NetStatus};

#[component]
pub fn NetChip(indicator: NetIndicator) -> Element {
    let theme = match indicator.status {
        NetStatus::Gain => "net-chip gain",
        NetStatus::Loss => "net-chip loss",
        NetStatus::Even => "net-chip",
    };

    rsx! {
        span { class: "{theme}", "{indicator.label}" }
    }
}
