use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use std::collections::BTreeMap;
use std::fmt;

use super::types::RecordType;
use super::value::FieldValue;

/// Canonical identifier of the distinguished record-type field.
pub const RECORD_TYPE_FIELD: &str = "record_type";

/// Normalizes a field identifier to its canonical internal form:
/// trimmed, lowercase, with `-` replaced by `_`.
pub fn normalize_key(id: &str) -> String {
    id.trim()
        .chars()
        .map(|c| if c == '-' { '_' } else { c })
        .flat_map(char::to_lowercase)
        .collect()
}

/// One structured database entry: a record type plus its field values.
///
/// Field identifiers are normalized on the way in, so `MOL-WEIGHT`,
/// `mol_weight` and `Mol-Weight` all address the same slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    record_type: RecordType,
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new(record_type: RecordType) -> Self {
        Self {
            record_type,
            fields: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn record_type(&self) -> RecordType {
        self.record_type
    }

    pub fn set_record_type(&mut self, record_type: RecordType) {
        self.record_type = record_type;
    }

    /// Stores `value` under the normalized form of `id`, returning the
    /// previous value of that slot.
    ///
    /// Writing the `record_type` field sets the record type instead; a
    /// value that does not name a supported type resolves to
    /// [`RecordType::Unknown`].
    pub fn insert(&mut self, id: &str, value: impl Into<FieldValue>) -> Option<FieldValue> {
        let key = normalize_key(id);
        let value = value.into();
        if key == RECORD_TYPE_FIELD {
            let name = value.flatten_text(" ");
            self.record_type = RecordType::from_name_lossy(&name);
            if !self.record_type.is_known() && !name.is_empty() {
                log::warn!("unrecognized record type '{name}', rendering as unknown");
            }
            return None;
        }
        self.fields.insert(key, value)
    }

    pub fn with_field(mut self, id: &str, value: impl Into<FieldValue>) -> Self {
        self.insert(id, value);
        self
    }

    pub fn get(&self, id: &str) -> Option<&FieldValue> {
        self.fields.get(&normalize_key(id))
    }

    pub fn remove(&mut self, id: &str) -> Option<FieldValue> {
        self.fields.remove(&normalize_key(id))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.fields.contains_key(&normalize_key(id))
    }

    /// Canonical field identifiers in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<FieldValue>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::default();
        for (k, v) in iter {
            record.insert(k.as_ref(), v);
        }
        record
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of field identifiers to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Record, A::Error> {
        let mut record = Record::default();
        while let Some((key, value)) = map.next_entry::<String, Option<FieldValue>>()? {
            if let Some(value) = value {
                record.insert(&key, value);
            }
        }
        Ok(record)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RecordVisitor)
    }
}
