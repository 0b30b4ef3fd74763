use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{MailplateError, Result};

/// Immutable template key to template source mapping.
///
/// Cloning is cheap; clones share the same underlying map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct TemplateMap(Arc<BTreeMap<String, String>>);

impl TemplateMap {
    /// Parse a bundle produced by the bundler.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| MailplateError::BundleParse { source: e })
    }

    /// Read and parse a bundle file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| MailplateError::Io {
            context: format!("reading {}", path.display()),
            source: e,
        })?;
        Self::from_json_str(&content)
    }

    /// Serialize as a pretty-printed (2-space) JSON object.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| MailplateError::BundleSerialize { source: e })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TemplateMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(Arc::new(
            iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        ))
    }
}

impl From<BTreeMap<String, String>> for TemplateMap {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self(Arc::new(map))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_key() {
        let map: TemplateMap = [("welcome/body.jinja", "Hi"), ("welcome/subject.jinja", "Hey")]
            .into_iter()
            .collect();
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("welcome/body.jinja"));
        assert_eq!(map.get("welcome/subject.jinja"), Some("Hey"));
        assert_eq!(map.get("missing"), None);
    }

    #[test]
    fn clones_share_storage() {
        let map: TemplateMap = [("a", "1")].into_iter().collect();
        let clone = map.clone();
        assert!(Arc::ptr_eq(&map.0, &clone.0));
    }

    #[test]
    fn parse_bundle_json() {
        let map = TemplateMap::from_json_str(r#"{"a.jinja": "C", "sub/b.jinja": "D\n  E"}"#).unwrap();
        assert_eq!(map.get("a.jinja"), Some("C"));
        assert_eq!(map.get("sub/b.jinja"), Some("D\n  E"));
    }

    #[test]
    fn reject_non_string_values() {
        let result = TemplateMap::from_json_str(r#"{"a.jinja": 1}"#);
        assert!(matches!(result, Err(MailplateError::BundleParse { .. })));
    }

    #[test]
    fn empty_map_serializes_to_empty_object() {
        let map = TemplateMap::default();
        assert!(map.is_empty());
        assert_eq!(map.to_json_pretty().unwrap(), "{}");
    }

    #[test]
    fn pretty_json_uses_two_space_indent() {
        let map: TemplateMap = [("test.jinja", "Test")].into_iter().collect();
        assert_eq!(
            map.to_json_pretty().unwrap(),
            "{\n  \"test.jinja\": \"Test\"\n}"
        );
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = TemplateMap::load(&dir.path().join("nope.json"));
        assert!(matches!(result, Err(MailplateError::Io { .. })));
    }
}
