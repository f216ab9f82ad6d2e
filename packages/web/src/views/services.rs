//! Public services catalogue.

use dioxus::prelude::*;

use api::models::Service;
use ui::{use_public_collection, PageHero, Spinner};

#[component]
pub fn Services() -> Element {
    let (services, loading) = use_public_collection::<Service>();

    rsx! {
        PageHero {
            title: "Our Services",
            subtitle: "End-to-end AI capability, from first workshop to running system.",
        }

        section { class: "section",
            div { class: "section-inner",
                if loading() {
                    Spinner {}
                } else {
                    div { class: "card-grid card-grid--3",
                        for service in services() {
                            div { class: "content-card", key: "{service.id}",
                                img { class: "card-image", src: "{service.image}", alt: "{service.name}" }
                                div { class: "card-body",
                                    h3 { "{service.name}" }
                                    p { "{service.description}" }
                                    ul { class: "feature-list",
                                        for feature in service.features.iter() {
                                            li { "{feature}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
