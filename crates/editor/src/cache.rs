//! Keyed cache of fetched form lists.
//!
//! Keys are the API paths the lists were fetched from, so invalidating
//! `/api/forms/user/{sub}` drops exactly that user's list.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use db::models::FormRecord;

/// Cache key for a user's form list.
pub fn user_forms_key(sub: &str) -> String {
    format!("/api/forms/user/{sub}")
}

#[derive(Clone, Default)]
pub struct FormsCache {
    entries: Arc<Mutex<HashMap<String, Vec<FormRecord>>>>,
}

impl FormsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<Vec<FormRecord>> {
        self.lock().get(key).cloned()
    }

    pub fn insert(&self, key: impl Into<String>, forms: Vec<FormRecord>) {
        self.lock().insert(key.into(), forms);
    }

    /// Drop the entry so the next read refetches. Returns the stale value.
    pub fn invalidate(&self, key: &str) -> Option<Vec<FormRecord>> {
        self.lock().remove(key)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<FormRecord>>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
