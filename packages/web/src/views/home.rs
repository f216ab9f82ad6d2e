//! Landing page. Static marketing content only; nothing here talks to the
//! backend.

use dioxus::prelude::*;

use crate::Route;

const FEATURES: &[(&str, &str)] = &[
    (
        "AI Strategy Consulting",
        "Roadmaps that connect machine learning investment to measurable business outcomes.",
    ),
    (
        "Custom Model Development",
        "Production-grade models for vision, language, and forecasting, built on your data.",
    ),
    (
        "Intelligent Automation",
        "Workflow automation that removes repetitive work without removing human oversight.",
    ),
    (
        "Data Engineering",
        "Pipelines and platforms that make your data ready for machine learning at scale.",
    ),
];

const STATS: &[(&str, &str)] = &[
    ("150+", "Projects Delivered"),
    ("50+", "Enterprise Clients"),
    ("98%", "Client Satisfaction"),
    ("12", "Industry Awards"),
];

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "hero",
            div { class: "hero-inner",
                h1 { "Intelligent Solutions for a Smarter Business" }
                p {
                    "AI-Solutions partners with organisations to design, build, and run "
                    "artificial intelligence that delivers real results."
                }
                div { class: "hero-actions",
                    Link { class: "btn btn--primary", to: Route::Contact {}, "Get Started" }
                    Link { class: "btn btn--ghost", to: Route::Services {}, "Our Services" }
                }
            }
        }

        section { class: "section",
            div { class: "section-inner",
                h2 { class: "section-title", "What We Do" }
                div { class: "card-grid card-grid--4",
                    for (title, blurb) in FEATURES.iter().copied() {
                        div { class: "feature-card",
                            h3 { "{title}" }
                            p { "{blurb}" }
                        }
                    }
                }
            }
        }

        section { class: "stats-strip",
            div { class: "stats-inner",
                for (value, label) in STATS.iter().copied() {
                    div { class: "stat",
                        span { class: "stat-value", "{value}" }
                        span { class: "stat-label", "{label}" }
                    }
                }
            }
        }

        section { class: "cta",
            h2 { "Ready to put AI to work?" }
            p { "Tell us about your project and we will get back to you within one business day." }
            Link { class: "btn btn--primary", to: Route::Contact {}, "Contact Us" }
        }
    }
}
