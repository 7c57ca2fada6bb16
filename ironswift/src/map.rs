/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Flat field map produced by the parser.
//!
//! Keys are unique. Two write rules coexist and are kept as separate
//! operations:
//! - [`FieldMap::insert`]: last write wins (headers, block 3/4 labels)
//! - [`FieldMap::insert_if_absent`]: first write wins (generic trailer tags)

use serde::Serialize;
use std::collections::HashMap;
use std::collections::hash_map;

/// Normalizes a field name: every ASCII non-alphanumeric character becomes
/// `_` and the result is lowercased.
///
/// Normalization is idempotent.
#[must_use]
pub fn normalize_field_name(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Mapping from normalized field name to value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldMap {
    fields: HashMap<String, String>,
}

impl FieldMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a value, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Inserts a value only if the key is not present yet.
    ///
    /// # Returns
    /// `true` if the value was inserted.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        match self.fields.entry(key.into()) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(slot) => {
                slot.insert(value.into());
                true
            }
        }
    }

    /// Value of a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Returns true if the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the map has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries sorted by key.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_unstable_by_key(|&(k, _)| k);
        entries
    }

    /// Consumes the map, returning the underlying `HashMap`.
    #[must_use]
    pub fn into_inner(self) -> HashMap<String, String> {
        self.fields
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, String);
    type IntoIter = hash_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

impl From<FieldMap> for HashMap<String, String> {
    fn from(map: FieldMap) -> Self {
        map.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_field_name() {
        assert_eq!(
            normalize_field_name("Value Date/Currency/Amount"),
            "value_date_currency_amount"
        );
        assert_eq!(normalize_field_name("Sender's Reference"), "sender_s_reference");
        assert_eq!(normalize_field_name("Field 99Z"), "field_99z");
        assert_eq!(normalize_field_name(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for name in [
            "Value Date/Currency/Amount",
            "Closing Balance (Booked Funds)",
            "Été  Straße",
            "already_normal_1",
        ] {
            let once = normalize_field_name(name);
            assert_eq!(normalize_field_name(&once), once);
        }
    }

    #[test]
    fn test_insert_last_write_wins() {
        let mut map = FieldMap::new();
        map.insert("k", "first");
        map.insert("k", "second");
        assert_eq!(map.get("k"), Some("second"));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_insert_if_absent_first_write_wins() {
        let mut map = FieldMap::new();
        assert!(map.insert_if_absent("k", "first"));
        assert!(!map.insert_if_absent("k", "second"));
        assert_eq!(map.get("k"), Some("first"));
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let mut map = FieldMap::new();
        map.insert("block5_mac", "88B4F929");
        let json = serde_json::to_value(&map).unwrap();
        assert_eq!(json, serde_json::json!({ "block5_mac": "88B4F929" }));
    }

    #[test]
    fn test_sorted_and_into_inner() {
        let mut map = FieldMap::new();
        map.insert("b", "2");
        map.insert("a", "1");
        assert_eq!(map.sorted(), vec![("a", "1"), ("b", "2")]);
        let inner = map.into_inner();
        assert_eq!(inner.get("a").map(String::as_str), Some("1"));
    }
}
