use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use std::collections::BTreeMap;
use std::fmt;

use super::record::normalize_key;

/// The value held by one field slot of a [`Record`](super::record::Record).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Scalar(String),
    List(Vec<FieldValue>),
    /// Sub-fields keyed by canonical (lowercase, underscore) identifiers.
    NestedMap(BTreeMap<String, FieldValue>),
    /// Pre-formatted multi-line text, emitted line by line without re-wrapping.
    RawBlock(String),
}

impl FieldValue {
    pub fn scalar(text: impl Into<String>) -> Self {
        FieldValue::Scalar(text.into())
    }

    pub fn raw(text: impl Into<String>) -> Self {
        FieldValue::RawBlock(text.into())
    }

    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<FieldValue>,
    {
        FieldValue::List(items.into_iter().map(Into::into).collect())
    }

    /// Builds a nested map, normalizing every sub-field identifier.
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<FieldValue>,
    {
        FieldValue::NestedMap(
            entries
                .into_iter()
                .map(|(k, v)| (normalize_key(k.as_ref()), v.into()))
                .collect(),
        )
    }

    /// `true` when emitting this value would produce no lines: blank text,
    /// or a collection whose members are all empty.
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Scalar(s) | FieldValue::RawBlock(s) => s.trim().is_empty(),
            FieldValue::List(items) => items.iter().all(FieldValue::is_empty),
            FieldValue::NestedMap(map) => map.values().all(FieldValue::is_empty),
        }
    }

    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// `true` for raw blocks and for scalars that already span several lines.
    pub fn is_preformatted(&self) -> bool {
        match self {
            FieldValue::RawBlock(_) => true,
            FieldValue::Scalar(s) => s.contains('\n'),
            _ => false,
        }
    }

    /// Collapses the value into a single string.
    ///
    /// List members are joined with `separator`; nested maps become
    /// `KEY value` pairs joined by single spaces; empty members are skipped.
    pub fn flatten_text(&self, separator: &str) -> String {
        match self {
            FieldValue::Scalar(s) | FieldValue::RawBlock(s) => s.trim().to_string(),
            FieldValue::List(items) => items
                .iter()
                .filter(|v| !v.is_empty())
                .map(|v| v.flatten_text(separator))
                .collect::<Vec<_>>()
                .join(separator),
            FieldValue::NestedMap(map) => map
                .iter()
                .filter(|(_, v)| !v.is_empty())
                .map(|(k, v)| format!("{} {}", k.to_uppercase(), v.flatten_text(separator)))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Scalar(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Scalar(s)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(items: Vec<T>) -> Self {
        FieldValue::list(items)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.flatten_text("; "))
    }
}

struct FieldValueVisitor;

impl<'de> Visitor<'de> for FieldValueVisitor {
    type Value = FieldValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, number, boolean, sequence or map")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<FieldValue, E> {
        Ok(FieldValue::Scalar(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<FieldValue, E> {
        Ok(FieldValue::Scalar(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<FieldValue, E> {
        Ok(FieldValue::Scalar(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<FieldValue, E> {
        Ok(FieldValue::Scalar(v.to_string()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FieldValue, E> {
        Ok(FieldValue::Scalar(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<FieldValue, E> {
        Ok(FieldValue::Scalar(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<FieldValue, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element::<Option<FieldValue>>()? {
            items.extend(item);
        }
        Ok(FieldValue::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<FieldValue, A::Error> {
        let mut entries = BTreeMap::new();
        while let Some((key, value)) = map.next_entry::<String, Option<FieldValue>>()? {
            if let Some(value) = value {
                entries.insert(normalize_key(&key), value);
            }
        }
        Ok(FieldValue::NestedMap(entries))
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FieldValueVisitor)
    }
}
