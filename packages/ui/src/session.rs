//! Session context and hooks for the UI.

use api::{ApiConfig, Session, UserInfo};
use dioxus::prelude::*;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::WebStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// The session type every view works with.
pub type AppSession = Session<PlatformStore>;

/// Build a session against the configured backend, persisting tokens in the
/// platform store.
pub fn make_session() -> AppSession {
    Session::new(ApiConfig::default(), PlatformStore::new())
}

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub user: Option<UserInfo>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            loading: true,
        }
    }
}

/// Get the shared session handle.
pub fn use_session() -> Signal<AppSession> {
    use_context::<Signal<AppSession>>()
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_session_state() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provider component that owns the session and its auth state.
/// Wrap the app with this component before using any hook in this crate.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let session = use_signal(make_session);
    let mut state = use_signal(SessionState::default);

    // Restore a persisted session on mount
    let _ = use_resource(move || async move {
        let user = session().restore().await;
        state.set(SessionState {
            user,
            loading: false,
        });
    });

    use_context_provider(|| session);
    use_context_provider(|| state);

    rsx! {
        {children}
    }
}
