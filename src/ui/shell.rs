use dioxus::prelude::*;

use crate::util::version::{version_label, APP_NAME, APP_REPO_URL};

#[component]
pub fn Shell(children: Element) -> Element {
    let version = version_label();

    rsx! {
        header { class: "app-header",
            h1 { class: "app-title", "{APP_NAME}" }
            span { class: "app-version", "{version}" }
            a {
                class: "app-link",
                href: APP_REPO_URL,
                target: "_blank",
                rel: "noopener noreferrer",
                title: "View on GitHub",
                "GitHub"
            }
        }
        main { class: "app-main",
            {children}
        }
    }
}
