//! Thin wrappers over the browser dialogs, so shared code can call them from
//! any platform. Outside the browser they log instead, with `confirm`
//! answering yes.

/// Blocking yes/no prompt.
#[cfg(target_arch = "wasm32")]
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Blocking yes/no prompt.
#[cfg(not(target_arch = "wasm32"))]
pub fn confirm(message: &str) -> bool {
    tracing::debug!("confirm: {message}");
    true
}

/// Fire-and-forget notification.
#[cfg(target_arch = "wasm32")]
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Fire-and-forget notification.
#[cfg(not(target_arch = "wasm32"))]
pub fn alert(message: &str) {
    tracing::info!("{message}");
}
