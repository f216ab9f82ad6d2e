//! Public articles listing with category chips.

use dioxus::prelude::*;

use api::models::Article;
use api::query;
use ui::{format, use_public_collection, PageHero, Spinner};

#[component]
pub fn Articles() -> Element {
    let (articles, loading) = use_public_collection::<Article>();
    let mut category = use_signal(|| query::ALL_CATEGORIES.to_string());

    let visible = query::with_category(&articles(), &category());

    rsx! {
        PageHero {
            title: "Articles & Insights",
            subtitle: "Thinking from our consultants on applied artificial intelligence.",
        }

        section { class: "section",
            div { class: "section-inner",
                if loading() {
                    Spinner {}
                } else {
                    div { class: "chip-row",
                        for option in query::categories(&articles()) {
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
                        for article in visible {
                            div { class: "content-card", key: "{article.id}",
                                img { class: "card-image", src: "{article.image}", alt: "{article.title}" }
                                div { class: "card-body",
                                    span { class: "card-tag", "{article.category}" }
                                    h3 { "{article.title}" }
                                    p { "{article.description}" }
                                    div { class: "card-meta",
                                        span { "By {article.author}" }
                                        span { "{article.read_time}" }
                                    }
                                    div { class: "card-meta",
                                        span { "{format::long_date(&article.publish_date)}" }
                                        if let Some(link) = article.external_link.as_ref() {
                                            a { class: "card-link", href: "{link}", target: "_blank", "Read More →" }
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
