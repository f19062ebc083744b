// gift-client/src/session.rs
// Session-scoped storage: order draft handoff and auth token

use dashmap::DashMap;
use shared::OrderDraft;
use std::sync::Arc;
use tracing::warn;

/// Key of the staged order draft
pub const DRAFT_KEY: &str = "orderHistory";
/// Key of the bearer token
pub const TOKEN_KEY: &str = "authToken";

/// String key/value storage that lives as long as one session
pub trait SessionStorage: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: String);
    fn remove(&self, key: &str);
}

/// In-memory session storage, dropped with the process
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    entries: DashMap<String, String>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).map(|v| v.value().clone())
    }

    fn set(&self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn remove(&self, key: &str) {
        self.entries.remove(key);
    }
}

/// Typed view over session storage
///
/// Holds at most one draft and one token. Writes overwrite; the last writer
/// wins.
#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn SessionStorage>,
}

impl Session {
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        Self { storage }
    }

    /// Session backed by a fresh [`MemorySessionStorage`]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemorySessionStorage::new()))
    }

    // ========== Order Draft ==========

    /// Stage a draft, replacing any previous one
    pub fn set_draft(&self, draft: &OrderDraft) {
        match serde_json::to_string(draft) {
            Ok(json) => self.storage.set(DRAFT_KEY, json),
            Err(e) => warn!(error = %e, "Failed to encode order draft"),
        }
    }

    /// Read the staged draft
    ///
    /// `None` when nothing was staged or the stored record is unreadable.
    pub fn get_draft(&self) -> Option<OrderDraft> {
        let json = self.storage.get(DRAFT_KEY)?;
        match serde_json::from_str(&json) {
            Ok(draft) => Some(draft),
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable order draft");
                None
            }
        }
    }

    pub fn clear_draft(&self) {
        self.storage.remove(DRAFT_KEY);
    }

    // ========== Auth Token ==========

    pub fn set_token(&self, token: impl Into<String>) {
        self.storage.set(TOKEN_KEY, token.into());
    }

    /// Current bearer token; an empty stored value counts as absent
    pub fn token(&self) -> Option<String> {
        self.storage.get(TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn clear_token(&self) {
        self.storage.remove(TOKEN_KEY);
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("has_draft", &self.storage.get(DRAFT_KEY).is_some())
            .field("has_token", &self.token().is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_absent_before_set() {
        let session = Session::in_memory();
        assert_eq!(session.get_draft(), None);
    }

    #[test]
    fn test_draft_set_then_get() {
        let session = Session::in_memory();
        let draft = OrderDraft::new(42, 2).unwrap();
        session.set_draft(&draft);

        let loaded = session.get_draft().unwrap();
        assert_eq!(loaded.product_id(), 42);
        assert_eq!(loaded.quantity(), 2);
    }

    #[test]
    fn test_draft_overwrite() {
        let session = Session::in_memory();
        session.set_draft(&OrderDraft::new(1, 1).unwrap());
        session.set_draft(&OrderDraft::new(2, 5).unwrap());
        assert_eq!(session.get_draft(), Some(OrderDraft::new(2, 5).unwrap()));

        session.clear_draft();
        assert_eq!(session.get_draft(), None);
    }

    #[test]
    fn test_draft_stored_layout() {
        let storage = Arc::new(MemorySessionStorage::new());
        let session = Session::new(storage.clone());
        session.set_draft(&OrderDraft::new(42, 2).unwrap());

        let raw: serde_json::Value =
            serde_json::from_str(&storage.get(DRAFT_KEY).unwrap()).unwrap();
        assert_eq!(raw, serde_json::json!({ "id": 42, "count": 2 }));
    }

    #[test]
    fn test_corrupt_draft_reads_as_absent() {
        let storage = Arc::new(MemorySessionStorage::new());
        storage.set(DRAFT_KEY, "not json".to_string());
        let session = Session::new(storage.clone());
        assert_eq!(session.get_draft(), None);

        storage.set(DRAFT_KEY, r#"{"id":1,"count":0}"#.to_string());
        assert_eq!(session.get_draft(), None);
    }

    #[test]
    fn test_token_lifecycle() {
        let session = Session::in_memory();
        assert!(session.token().is_none());

        session.set_token("abc");
        assert_eq!(session.token().as_deref(), Some("abc"));

        session.set_token("");
        assert!(session.token().is_none());

        session.set_token("def");
        session.clear_token();
        assert!(session.token().is_none());
    }

    #[test]
    fn test_sessions_share_storage() {
        let storage: Arc<dyn SessionStorage> = Arc::new(MemorySessionStorage::new());
        let detail_page = Session::new(storage.clone());
        let order_page = Session::new(storage);

        detail_page.set_draft(&OrderDraft::new(7, 3).unwrap());
        assert_eq!(order_page.get_draft(), Some(OrderDraft::new(7, 3).unwrap()));
    }
}
