//! Public image gallery with category chips and a lightbox.

use dioxus::prelude::*;

use api::models::GalleryItem;
use api::query;
use ui::{format, use_public_collection, Modal, PageHero, Spinner};

#[component]
pub fn Gallery() -> Element {
    let (items, loading) = use_public_collection::<GalleryItem>();
    let mut category = use_signal(|| query::ALL_CATEGORIES.to_string());
    let mut lightbox = use_signal(|| Option::<GalleryItem>::None);

    let visible = query::with_category(&items(), &category());

    rsx! {
        PageHero {
            title: "Gallery",
            subtitle: "Moments from our events, our offices, and our work.",
        }

        section { class: "section",
            div { class: "section-inner",
                if loading() {
                    Spinner {}
                } else {
                    div { class: "chip-row",
                        for option in query::categories(&items()) {
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
                    div { class: "gallery-grid",
                        for item in visible {
                            button {
                                class: "gallery-tile",
                                key: "{item.id}",
                                onclick: {
                                    let item = item.clone();
                                    move |_| lightbox.set(Some(item.clone()))
                                },
                                img { src: "{item.image}", alt: "{item.filename}" }
                                span { class: "gallery-caption", "{item.category}" }
                            }
                        }
                    }
                }
            }
        }

        if let Some(item) = lightbox() {
            Modal {
                on_close: move |_| lightbox.set(None),
                img { class: "lightbox-image", src: "{item.image}", alt: "{item.filename}" }
                h3 { "{item.filename}" }
                p { "{item.description}" }
                div { class: "card-meta",
                    span { "{item.category}" }
                    span { "Uploaded {format::long_date(&item.upload_date)}" }
                }
                a {
                    class: "btn btn--primary",
                    href: "{item.image}",
                    download: "{item.filename}",
                    "Download"
                }
            }
        }
    }
}
