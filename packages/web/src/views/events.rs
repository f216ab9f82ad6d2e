//! Public events page with upcoming/past tabs.

use dioxus::prelude::*;

use api::models::{Event, EventKind};
use api::query;
use ui::{format, use_public_collection, BadgeTone, PageHero, Spinner, StatusBadge};

#[component]
pub fn Events() -> Element {
    let (events, loading) = use_public_collection::<Event>();
    let mut tab = use_signal(|| EventKind::Upcoming);

    let visible = query::of_kind(&events(), tab());

    rsx! {
        PageHero {
            title: "Events",
            subtitle: "Workshops, webinars, and conferences from the AI-Solutions team.",
        }

        section { class: "section",
            div { class: "section-inner",
                div { class: "tab-row",
                    button {
                        class: if tab() == EventKind::Upcoming { "tab tab--active" } else { "tab" },
                        onclick: move |_| tab.set(EventKind::Upcoming),
                        "Upcoming Events"
                    }
                    button {
                        class: if tab() == EventKind::Past { "tab tab--active" } else { "tab" },
                        onclick: move |_| tab.set(EventKind::Past),
                        "Past Events"
                    }
                }

                if loading() {
                    Spinner {}
                } else {
                    div { class: "card-grid card-grid--3",
                        for event in visible {
                            div { class: "content-card", key: "{event.id}",
                                img { class: "card-image", src: "{event.image}", alt: "{event.title}" }
                                div { class: "card-body",
                                    StatusBadge {
                                        label: if event.kind == EventKind::Upcoming { "Upcoming".to_string() } else { "Past Event".to_string() },
                                        tone: if event.kind == EventKind::Upcoming { BadgeTone::Positive } else { BadgeTone::Neutral },
                                    }
                                    h3 { "{event.title}" }
                                    p { "{event.description}" }
                                    div { class: "card-meta card-meta--stack",
                                        span { "{format::long_date(&event.date)} · {event.time}" }
                                        span { "{event.location}" }
                                        if let Some(seats) = event.max_attendees {
                                            span { "Up to {seats} attendees" }
                                        }
                                    }
                                    if event.kind == EventKind::Upcoming {
                                        if let Some(link) = event.registration_link.as_ref() {
                                            a { class: "btn btn--primary", href: "{link}", "Register Now" }
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
