use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::kv::KeyValueStore;

/// In-memory KeyValueStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    async fn set(&self, key: &str, value: String) {
        self.entries.lock().unwrap().insert(key.to_string(), value);
    }

    async fn remove(&self, key: &str) {
        self.entries.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_and_get() {
        let store = MemoryStore::new();

        // Missing key reads as None
        assert!(store.get("access_token").await.is_none());

        store.set("access_token", "abc123".to_string()).await;
        assert_eq!(store.get("access_token").await.as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_overwrite() {
        let store = MemoryStore::new();

        store.set("refresh_token", "first".to_string()).await;
        store.set("refresh_token", "second".to_string()).await;

        assert_eq!(store.get("refresh_token").await.as_deref(), Some("second"));
    }

    #[tokio::test]
    async fn test_remove() {
        let store = MemoryStore::new();

        store.set("user_data", "{}".to_string()).await;
        store.remove("user_data").await;

        assert!(store.get("user_data").await.is_none());

        // Removing a missing key is a no-op
        store.remove("user_data").await;
        assert!(store.get("user_data").await.is_none());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryStore::new();
        let clone = store.clone();

        store.set("key", "value".to_string()).await;

        assert_eq!(clone.get("key").await.as_deref(), Some("value"));
    }
}
