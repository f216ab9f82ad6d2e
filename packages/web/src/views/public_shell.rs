//! Navigation chrome around every public page: top navbar and footer.

use dioxus::prelude::*;

use crate::Route;

const NAV_LINKS: &[(&str, fn() -> Route)] = &[
    ("Home", || Route::Home {}),
    ("Services", || Route::Services {}),
    ("Projects", || Route::Projects {}),
    ("Articles", || Route::Articles {}),
    ("Feedback", || Route::FeedbackPage {}),
    ("Gallery", || Route::Gallery {}),
    ("Events", || Route::Events {}),
    ("Contact", || Route::Contact {}),
];

#[component]
pub fn PublicShell() -> Element {
    let current = use_route::<Route>();
    let mut menu_open = use_signal(|| false);

    rsx! {
        header { class: "navbar",
            div { class: "navbar-inner",
                Link { class: "navbar-brand", to: Route::Home {}, "AI-Solutions" }
                button {
                    class: "navbar-toggle",
                    onclick: move |_| {
                        let open = menu_open();
                        menu_open.set(!open);
                    },
                    "☰"
                }
                nav {
                    class: if menu_open() { "navbar-links navbar-links--open" } else { "navbar-links" },
                    for (label, route) in NAV_LINKS.iter().copied() {
                        Link {
                            class: if current == route() { "navbar-link navbar-link--active" } else { "navbar-link" },
                            to: route(),
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                }
            }
        }

        main { class: "public-main",
            Outlet::<Route> {}
        }

        footer { class: "footer",
            div { class: "footer-inner",
                div { class: "footer-col",
                    h3 { "AI-Solutions" }
                    p { "We help organisations put artificial intelligence to work, from strategy to production systems." }
                }
                div { class: "footer-col",
                    h4 { "Quick Links" }
                    Link { to: Route::Services {}, "Services" }
                    Link { to: Route::Projects {}, "Projects" }
                    Link { to: Route::Events {}, "Events" }
                    Link { to: Route::Contact {}, "Contact" }
                }
                div { class: "footer-col",
                    h4 { "Get in Touch" }
                    p { "1 Innovation Way, Sunderland, UK" }
                    p { "info@ai-solutions.com" }
                    p { "+44 191 555 0134" }
                }
            }
            div { class: "footer-bottom",
                p { "© 2025 AI-Solutions. All rights reserved." }
            }
        }
    }
}
