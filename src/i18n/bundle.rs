//! Resource bundles: the translation strings for a single locale.
//!
//! Bundles are written as i18next-style `translation.json` documents. Nested
//! objects are flattened into dotted keys, so
//! `{"tabs": {"home": "Home"}}` is looked up as `tabs.home`.

use crate::i18n::I18nError;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// Separator used when flattening nested JSON objects into keys.
pub const KEY_SEPARATOR: char = '.';

/// One node of a `translation.json` document.
///
/// Anything other than strings and objects of strings (numbers, arrays,
/// `null`) fails to deserialize.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BundleNode {
    Text(String),
    Nested(BTreeMap<String, BundleNode>),
}

/// Immutable mapping from translation key to display string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceBundle {
    entries: HashMap<String, String>,
}

impl ResourceBundle {
    /// Parse a bundle from a `translation.json` document.
    ///
    /// # Arguments
    /// * `locale` - Locale code the document belongs to (used in errors only)
    /// * `json` - The document itself; the top level must be an object
    ///
    /// # Returns
    /// * `Ok(ResourceBundle)` with every string leaf under its dotted key
    /// * `Err(I18nError::InvalidBundle)` if the document is malformed
    pub fn from_json(locale: &str, json: &str) -> Result<Self, I18nError> {
        let invalid = |reason: String| I18nError::InvalidBundle {
            locale: locale.to_string(),
            reason,
        };

        let root: BundleNode = serde_json::from_str(json).map_err(|e| invalid(e.to_string()))?;
        let BundleNode::Nested(children) = root else {
            return Err(invalid("top level must be an object".to_string()));
        };

        let mut entries = HashMap::new();
        flatten(String::new(), children, &mut entries);
        Ok(Self { entries })
    }

    /// Look up a translation by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the bundle has a translation for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of translations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the bundle has no translations.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for ResourceBundle
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn flatten(prefix: String, children: BTreeMap<String, BundleNode>, out: &mut HashMap<String, String>) {
    for (name, node) in children {
        let key = if prefix.is_empty() {
            name
        } else {
            format!("{prefix}{KEY_SEPARATOR}{name}")
        };

        match node {
            BundleNode::Text(text) => {
                out.insert(key, text);
            }
            BundleNode::Nested(grandchildren) => flatten(key, grandchildren, out),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== from_json Tests ====================

    #[test]
    fn test_from_json_flat() {
        let bundle = ResourceBundle::from_json("en", r#"{"hello": "Hello"}"#).expect("Should parse");
        assert_eq!(bundle.get("hello"), Some("Hello"));
        assert_eq!(bundle.len(), 1);
    }

    #[test]
    fn test_from_json_nested_keys_are_dotted() {
        let json = r#"{"tabs": {"home": "Home", "about": "About"}, "deep": {"a": {"b": "c"}}}"#;
        let bundle = ResourceBundle::from_json("en", json).expect("Should parse");

        assert_eq!(bundle.get("tabs.home"), Some("Home"));
        assert_eq!(bundle.get("tabs.about"), Some("About"));
        assert_eq!(bundle.get("deep.a.b"), Some("c"));
        assert_eq!(bundle.get("tabs"), None);
        assert_eq!(bundle.len(), 3);
    }

    #[test]
    fn test_from_json_empty_object() {
        let bundle = ResourceBundle::from_json("en", "{}").expect("Should parse");
        assert!(bundle.is_empty());
    }

    #[test]
    fn test_from_json_rejects_number_leaf() {
        let result = ResourceBundle::from_json("ko", r#"{"count": 3}"#);
        match result {
            Err(I18nError::InvalidBundle { locale, .. }) => assert_eq!(locale, "ko"),
            other => panic!("Expected InvalidBundle, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_rejects_top_level_string() {
        let result = ResourceBundle::from_json("en", r#""just text""#);
        assert!(matches!(result, Err(I18nError::InvalidBundle { .. })));
    }

    #[test]
    fn test_from_json_rejects_malformed_json() {
        let result = ResourceBundle::from_json("en", r#"{"hello": "#);
        assert!(matches!(result, Err(I18nError::InvalidBundle { .. })));
    }

    // ==================== Accessor Tests ====================

    #[test]
    fn test_from_iterator() {
        let bundle: ResourceBundle = [("a", "1"), ("b", "2")].into_iter().collect();
        assert!(bundle.contains_key("a"));
        assert!(!bundle.contains_key("c"));

        let mut keys: Vec<_> = bundle.keys().collect();
        keys.sort();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_default_is_empty() {
        let bundle = ResourceBundle::default();
        assert!(bundle.is_empty());
        assert_eq!(bundle.get("anything"), None);
    }
}
