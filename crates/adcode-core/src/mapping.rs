//! Insertion-ordered code → name map.

use std::collections::HashMap;
use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Division codes mapped to names, iterated in first-insertion order.
///
/// Re-inserting a code replaces its name but keeps the code's position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DivisionMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl DivisionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `code → name`, returning the replaced name if the code existed.
    pub fn insert(&mut self, code: String, name: String) -> Option<String> {
        if let Some(&slot) = self.index.get(&code) {
            return Some(std::mem::replace(&mut self.entries[slot].1, name));
        }
        self.index.insert(code.clone(), self.entries.len());
        self.entries.push((code, name));
        None
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.index
            .get(code)
            .map(|&slot| self.entries[slot].1.as_str())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.index.contains_key(code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(code, name)| (code.as_str(), name.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DivisionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (code, name) in iter {
            map.insert(code.into(), name.into());
        }
        map
    }
}

impl Serialize for DivisionMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (code, name) in &self.entries {
            map.serialize_entry(code, name)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for DivisionMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(DivisionMapVisitor)
    }
}

struct DivisionMapVisitor;

impl<'de> Visitor<'de> for DivisionMapVisitor {
    type Value = DivisionMap;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object mapping division codes to names")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = DivisionMap::new();
        while let Some((code, name)) = access.next_entry::<String, String>()? {
            map.insert(code, name);
        }
        Ok(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrite_keeps_first_position() {
        let mut map = DivisionMap::new();
        assert_eq!(map.insert("A".into(), "X".into()), None);
        assert_eq!(map.insert("B".into(), "Z".into()), None);
        assert_eq!(map.insert("A".into(), "Y".into()), Some("X".to_string()));

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("A"), Some("Y"));
        let codes: Vec<&str> = map.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["A", "B"]);
    }

    #[test]
    fn serializes_in_insertion_order() {
        let map: DivisionMap = [("330000", "浙江省"), ("110000", "北京市")]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"330000":"浙江省","110000":"北京市"}"#);
    }

    #[test]
    fn deserializes_in_document_order() {
        let map: DivisionMap =
            serde_json::from_str(r#"{"b": "second", "a": "first", "b": "again"}"#).unwrap();
        let entries: Vec<(&str, &str)> = map.iter().collect();
        assert_eq!(entries, vec![("b", "again"), ("a", "first")]);
    }

    #[test]
    fn rejects_non_string_values() {
        assert!(serde_json::from_str::<DivisionMap>(r#"{"110000": 1}"#).is_err());
        assert!(serde_json::from_str::<DivisionMap>(r#"["110000"]"#).is_err());
    }
}
