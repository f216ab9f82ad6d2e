//! # localStorage key/value store
//!
//! [`WebStore`] is the [`KeyValueStore`] implementation used on the **web platform**.
//! It persists session state into the browser's `localStorage` via [`web_sys`], so an
//! admin stays signed in across page reloads.
//!
//! ## Stored keys
//!
//! | Key | Value | Written by |
//! |-----|-------|-----------|
//! | `"access_token"` | JWT access token | login, token refresh |
//! | `"refresh_token"` | JWT refresh token | login |
//! | `"user_data"` | JSON-serialised user record | login |
//!
//! ## Handle management
//!
//! `WebStore` is a zero-size struct (`Clone`-friendly) that looks up
//! `window.localStorage` on every operation instead of holding a `Storage` handle.
//! The lookup is a cheap property access, and `Storage` itself is not `Clone`.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads, doing
//! nothing for writes). A browser with storage disabled degrades to "signed out on
//! every load" rather than crashing; the authoritative session state always lives
//! on the backend.

use crate::kv::KeyValueStore;

/// Browser localStorage implementation of [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct WebStore;

impl WebStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for WebStore {
    async fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    async fn set(&self, key: &str, value: String) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, &value);
        }
    }

    async fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
