//! Session-store seam for per-user progress state.

use std::collections::HashMap;

/// Per-user string key/value store supplied by the embedding layer.
///
/// The progress service reads and writes exactly one key in it. Passing
/// the store explicitly keeps session transport (cookies, server-side
/// stores) out of the core.
pub trait SessionStore {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<&str>;

    /// Store `value` under `key`, replacing any previous value.
    fn insert(&mut self, key: &str, value: String);
}

impl SessionStore for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }

    fn insert(&mut self, key: &str, value: String) {
        HashMap::insert(self, key.to_string(), value);
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashmap_store_round_trips() {
        let mut session: HashMap<String, String> = HashMap::new();
        assert_eq!(SessionStore::get(&session, "k"), None);

        SessionStore::insert(&mut session, "k", "v1".to_string());
        assert_eq!(SessionStore::get(&session, "k"), Some("v1"));

        SessionStore::insert(&mut session, "k", "v2".to_string());
        assert_eq!(SessionStore::get(&session, "k"), Some("v2"));
    }
}
