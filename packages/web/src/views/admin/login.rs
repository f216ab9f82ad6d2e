//! Admin login page with email/password.

use dioxus::prelude::*;

use ui::{use_session, use_session_state, SessionState};

use crate::Route;

/// Login page component for the back-office.
#[component]
pub fn AdminLogin() -> Element {
    let session = use_session();
    let mut state = use_session_state();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, redirect to the dashboard
    if !state().loading && state().user.is_some() {
        nav.replace(Route::AdminDashboard {});
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let e = email().trim().to_string();
            let p = password();

            if e.is_empty() {
                error.set(Some("Please enter your email".to_string()));
                return;
            }
            if p.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            loading.set(true);
            let signed_in = session().login(&e, &p).await;
            loading.set(false);

            if signed_in {
                state.set(SessionState {
                    user: session().user(),
                    loading: false,
                });
                nav.replace(Route::AdminDashboard {});
            } else {
                // Failed attempts leave the form editable with what was typed
                error.set(Some("Invalid email or password".to_string()));
            }
        });
    };

    rsx! {
        div { class: "login-page",
            div { class: "login-card",
                h1 { "AI-Solutions" }
                p { class: "login-sub", "Sign in to the admin panel" }

                form { class: "login-form", onsubmit: handle_login,
                    if let Some(err) = error() {
                        div { class: "login-error", "{err}" }
                    }

                    input {
                        class: "form-input",
                        r#type: "email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                    input {
                        class: "form-input",
                        r#type: "password",
                        placeholder: "Password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn--primary btn--block",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign In" }
                    }
                }

                Link { class: "login-back", to: Route::Home {}, "← Back to website" }
            }
        }
    }
}
