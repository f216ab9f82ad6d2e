//! Public project portfolio with category chips.

use dioxus::prelude::*;

use api::models::Project;
use api::query;
use ui::{format, use_public_collection, PageHero, Spinner};

#[component]
pub fn Projects() -> Element {
    let (projects, loading) = use_public_collection::<Project>();
    let mut category = use_signal(|| query::ALL_CATEGORIES.to_string());

    let visible = query::with_category(&projects(), &category());

    rsx! {
        PageHero {
            title: "Our Projects",
            subtitle: "A selection of the AI systems we have delivered for our clients.",
        }

        section { class: "section",
            div { class: "section-inner",
                if loading() {
                    Spinner {}
                } else {
                    div { class: "chip-row",
                        for option in query::categories(&projects()) {
                            button {
                                class: if option == category() { "chip chip--active" } else { "chip" },
                                onclick: {
                                    let option = option.clone();
                                    move |_| category.set(option.clone())
                                },
                                "{option}"
                            }
                        }
                    }
                    div { class: "card-grid card-grid--3",
                        for project in visible {
                            div { class: "content-card", key: "{project.id}",
                                img { class: "card-image", src: "{project.image}", alt: "{project.name}" }
                                div { class: "card-body",
                                    span { class: "card-tag", "{project.category}" }
                                    h3 { "{project.name}" }
                                    p { "{project.description}" }
                                    div { class: "tag-row",
                                        for tech in project.technologies.iter() {
                                            span { class: "tag", "{tech}" }
                                        }
                                    }
                                    div { class: "card-meta",
                                        span { "Client: {project.client}" }
                                        span { "Completed {format::long_date(&project.completion_date)}" }
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
