use dioxus::prelude::*;

/// Title banner at the top of every public page.
#[component]
pub fn PageHero(title: String, subtitle: String) -> Element {
    rsx! {
        section { class: "page-hero",
            h1 { "{title}" }
            p { "{subtitle}" }
        }
    }
}
