use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

#[derive(Debug, Clone)]
pub struct Session {
    pub account_id: i64,
    pub issued_at: String,
}

/// Process-wide session registry with an explicit lifecycle: created once
/// at startup, updated on every auth event, individual sessions removed
/// on sign-out. Handed to consumers via `web::Data`, never as a global.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read_guard(&self) -> RwLockReadGuard<'_, HashMap<String, Session>> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_guard(&self) -> RwLockWriteGuard<'_, HashMap<String, Session>> {
        self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn insert(&self, token: &str, account_id: i64) {
        self.write_guard().insert(
            token.to_string(),
            Session {
                account_id,
                issued_at: Utc::now().to_rfc3339(),
            },
        );
    }

    pub fn resolve(&self, token: &str) -> Option<i64> {
        self.read_guard().get(token).map(|s| s.account_id)
    }

    pub fn remove(&self, token: &str) -> bool {
        self.write_guard().remove(token).is_some()
    }

    /// Drops every session.
    pub fn clear(&self) {
        self.write_guard().clear();
    }

    pub fn len(&self) -> usize {
        self.read_guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_guard().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_resolve_remove_lifecycle() {
        let sessions = SessionStore::new();
        assert!(sessions.is_empty());

        sessions.insert("token-1", 7);
        assert_eq!(sessions.resolve("token-1"), Some(7));
        assert_eq!(sessions.resolve("token-2"), None);

        assert!(sessions.remove("token-1"));
        assert!(!sessions.remove("token-1"));
        assert_eq!(sessions.resolve("token-1"), None);
    }

    #[test]
    fn clones_share_the_same_registry() {
        let sessions = SessionStore::new();
        let alias = sessions.clone();

        sessions.insert("token-1", 1);
        assert_eq!(alias.resolve("token-1"), Some(1));
        assert_eq!(alias.len(), 1);

        alias.clear();
        assert!(sessions.is_empty());
    }
}
