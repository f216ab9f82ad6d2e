//! # KeyValueStore
//!
//! The session layer persists its tokens and the signed-in user through this trait,
//! so the same logic works against browser `localStorage` on the web build and an
//! in-memory map in tests. Implementations live in sibling modules
//! ([`crate::memory`], and `web` on wasm).

/// Async interface over a flat string key/value store.
pub trait KeyValueStore {
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Option<String>>;
    fn set(
        &self,
        key: &str,
        value: String,
    ) -> impl std::future::Future<Output = ()>;
    fn remove(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = ()>;
}
