use dioxus::prelude::*;

/// Centered loading spinner.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        div { class: "spinner-wrap",
            div { class: "spinner" }
        }
    }
}
