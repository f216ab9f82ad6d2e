use dioxus::prelude::*;

/// Visual tone for a [`StatusBadge`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BadgeTone {
    Positive,
    Neutral,
    Pending,
}

/// A small colored pill, e.g. "Approved" or "Past Event".
#[component]
pub fn StatusBadge(label: String, tone: BadgeTone) -> Element {
    let tone_class = match tone {
        BadgeTone::Positive => "badge badge--positive",
        BadgeTone::Neutral => "badge badge--neutral",
        BadgeTone::Pending => "badge badge--pending",
    };
    rsx! {
        span { class: "{tone_class}", "{label}" }
    }
}
