use std::time::Duration;

use dioxus::prelude::*;

use crate::domain::BoardError;
use crate::util::generate_id;
use crate::util::persistence::PersistSaveError;

const TOAST_AUTO_DISMISS: Duration = Duration::from_secs(4);
const TOAST_LIMIT: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast info",
            ToastKind::Success => "toast success",
            ToastKind::Warning => "toast warning",
            ToastKind::Error => "toast error",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            ToastKind::Info => "ℹ️",
            ToastKind::Success => "✅",
            ToastKind::Warning => "⚠️",
            ToastKind::Error => "⛔",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastMessage {
    pub id: String,
    pub kind: ToastKind,
    pub text: String,
}

impl ToastMessage {
    pub fn new(kind: ToastKind, text: impl Into<String>) -> Self {
        Self {
            id: generate_id("toast"),
            kind,
            text: text.into(),
        }
    }
}

impl From<&BoardError> for ToastMessage {
    fn from(err: &BoardError) -> Self {
        ToastMessage::new(ToastKind::Error, err.to_string())
    }
}

impl From<&PersistSaveError> for ToastMessage {
    fn from(err: &PersistSaveError) -> Self {
        ToastMessage::new(ToastKind::Warning, format!("Changes were not saved: {err}"))
    }
}

/// Bounded notification queue shared through context. The oldest message
/// is dropped once `TOAST_LIMIT` are showing.
#[derive(Clone, Copy, PartialEq)]
pub struct Toasts {
    queue: Signal<Vec<ToastMessage>>,
}

impl Toasts {
    pub fn new(queue: Signal<Vec<ToastMessage>>) -> Self {
        Self { queue }
    }

    pub fn push(self, message: impl Into<ToastMessage>) {
        let mut queue = self.queue;
        let message = message.into();
        queue.with_mut(|entries| enqueue(entries, message));
    }

    pub fn info(self, text: impl Into<String>) {
        self.push(ToastMessage::new(ToastKind::Info, text));
    }

    pub fn success(self, text: impl Into<String>) {
        self.push(ToastMessage::new(ToastKind::Success, text));
    }

    fn dismiss(self, id: &str) {
        let mut queue = self.queue;
        queue.with_mut(|entries| entries.retain(|toast| toast.id != id));
    }

    fn snapshot(self) -> Vec<ToastMessage> {
        self.queue.read().clone()
    }
}

fn enqueue(entries: &mut Vec<ToastMessage>, message: ToastMessage) {
    if entries.len() >= TOAST_LIMIT {
        entries.remove(0);
    }
    entries.push(message);
}

#[component]
pub fn Toast() -> Element {
    let toasts = use_context::<Toasts>();
    let messages = toasts.snapshot();

    if messages.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div { class: "toast-stack",
            ul {
                for message in messages {
                    ToastCard { key: "{message.id}", message: message.clone(), toasts }
                }
            }
        }
    }
}

#[component]
fn ToastCard(message: ToastMessage, toasts: Toasts) -> Element {
    let timer_id = message.id.clone();
    let _auto_dismiss = use_future(move || {
        let id = timer_id.clone();
        async move {
            tokio::time::sleep(TOAST_AUTO_DISMISS).await;
            toasts.dismiss(&id);
        }
    });

    let dismiss_id = message.id.clone();
    rsx! {
        li { class: message.kind.class(),
            span { "{message.kind.icon()}" }
            span { "{message.text}" }
            button {
                onclick: move |_| toasts.dismiss(&dismiss_id),
                "Dismiss"
            }
        }
    }
}
