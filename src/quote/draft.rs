use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::forms::simple::HONEYPOT_FIELD;
use crate::forms::storage::{KeyStore, StorageError};

#[derive(Debug, Error)]
pub enum DraftError {
    #[error("stored draft is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("stored draft is not a JSON object")]
    NotAnObject,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Field values collected across the wizard steps.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Draft(BTreeMap<String, String>);

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// The honeypot never makes it in.
    pub fn insert(&mut self, field: &str, value: impl Into<String>) {
        if field == HONEYPOT_FIELD {
            return;
        }
        self.0.insert(field.to_string(), value.into());
    }

    pub fn remove(&mut self, field: &str) {
        self.0.remove(field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// Lenient parse. String and number entries are kept, anything else is dropped.
    pub fn from_json(raw: &str) -> Result<Self, DraftError> {
        let Value::Object(map) = serde_json::from_str::<Value>(raw)? else {
            return Err(DraftError::NotAnObject);
        };

        let mut draft = Draft::new();
        for (field, value) in map {
            match value {
                Value::String(s) => draft.insert(&field, s),
                Value::Number(n) => draft.insert(&field, n.to_string()),
                _ => {}
            }
        }
        Ok(draft)
    }

    pub fn load(store: &dyn KeyStore) -> Result<Option<Self>, DraftError> {
        match store.read()? {
            Some(raw) => Ok(Some(Self::from_json(&raw)?)),
            None => Ok(None),
        }
    }

    pub fn save(&self, store: &dyn KeyStore) -> Result<(), DraftError> {
        store.write(&self.to_json())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::storage::memory::MemoryKey;
    use pretty_assertions::assert_eq;

    #[test]
    fn honeypot_is_never_stored() {
        let mut draft = Draft::new();
        draft.insert("website", "http://spam.example");
        draft.insert("name", "Ada");
        assert_eq!(draft.get("website"), None);
        assert!(!draft.to_json().contains("website"));
    }

    #[test]
    fn save_then_load_returns_same_fields() {
        let store = MemoryKey::default();
        let mut draft = Draft::new();
        draft.insert("category", "wedding");
        draft.insert("quantity", "10");
        draft.insert("details", "gold foil, \"quoted\"");
        draft.save(&store).unwrap();

        let loaded = Draft::load(&store).unwrap().unwrap();
        assert_eq!(loaded, draft);
    }

    #[test]
    fn shape_mismatches_are_tolerated() {
        let draft = Draft::from_json(r#"{"quantity": 25, "flags": [1,2], "name": "Bo", "x": null}"#).unwrap();
        assert_eq!(draft.get("quantity"), Some("25"));
        assert_eq!(draft.get("name"), Some("Bo"));
        assert_eq!(draft.get("flags"), None);
        assert_eq!(draft.get("x"), None);
    }

    #[test]
    fn non_object_payloads_are_errors() {
        assert!(matches!(Draft::from_json("[1]"), Err(DraftError::NotAnObject)));
        assert!(matches!(Draft::from_json("{"), Err(DraftError::Json(_))));
    }

    #[test]
    fn missing_key_loads_nothing() {
        let store = MemoryKey::default();
        assert_eq!(Draft::load(&store).unwrap(), None);
    }
}
