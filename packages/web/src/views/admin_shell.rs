//! Layout guarding the back-office: spinner while the session restores, a
//! redirect to the login screen when nobody is signed in, and the sidebar
//! around every admin screen otherwise.

use dioxus::prelude::*;

use ui::{use_session, use_session_state, SessionState, Spinner};

use crate::Route;

const ADMIN_LINKS: &[(&str, fn() -> Route)] = &[
    ("Dashboard", || Route::AdminDashboard {}),
    ("Events", || Route::AdminEvents {}),
    ("Projects", || Route::AdminProjects {}),
    ("Articles", || Route::AdminArticles {}),
    ("Services", || Route::AdminServices {}),
    ("Feedback", || Route::AdminFeedback {}),
    ("Gallery", || Route::AdminGallery {}),
    ("Contacts", || Route::AdminContacts {}),
];

#[component]
pub fn AdminShell() -> Element {
    let state = use_session_state();
    let nav = use_navigator();

    // Nothing is protected content until the credential check finishes
    if state().loading {
        return rsx! {
            div { class: "admin-loading", Spinner {} }
        };
    }
    if state().user.is_none() {
        nav.replace(Route::AdminLogin {});
        return rsx! {};
    }

    rsx! {
        div { class: "admin-layout",
            AdminSidebar {}
            main { class: "admin-main",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn AdminSidebar() -> Element {
    let session = use_session();
    let mut state = use_session_state();
    let nav = use_navigator();
    let current = use_route::<Route>();

    let email = state()
        .user
        .map(|user| user.email)
        .unwrap_or_default();

    let sign_out = move |_| {
        spawn(async move {
            session().logout().await;
            state.set(SessionState {
                user: None,
                loading: false,
            });
            nav.replace(Route::AdminLogin {});
        });
    };

    rsx! {
        aside { class: "admin-sidebar",
            div { class: "admin-brand",
                span { class: "admin-brand-name", "AI-Solutions" }
                span { class: "admin-brand-sub", "Admin Panel" }
            }
            nav { class: "admin-nav",
                for (label, route) in ADMIN_LINKS.iter().copied() {
                    Link {
                        class: if current == route() { "admin-nav-link admin-nav-link--active" } else { "admin-nav-link" },
                        to: route(),
                        "{label}"
                    }
                }
            }
            div { class: "admin-sidebar-footer",
                p { class: "admin-user", "{email}" }
                Link { class: "admin-nav-link", to: Route::Home {}, "View Website" }
                button { class: "btn btn--ghost btn--block", onclick: sign_out, "Sign Out" }
            }
        }
    }
}
