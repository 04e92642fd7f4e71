use serde::Deserialize;
use serde_json::Value;
use std::io::Read;

use super::error::Error;
use crate::model::record::Record;

/// Reads one JSON object or a JSON array of objects as records.
pub fn read<R: Read>(reader: R) -> Result<Vec<Record>, Error> {
    let document: Value = serde_json::from_reader(reader)?;
    match document {
        Value::Object(_) => Ok(vec![Record::deserialize(document)?]),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(_) => Ok(Record::deserialize(item)?),
                other => Err(Error::RecordShape(kind(&other))),
            })
            .collect(),
        other => Err(Error::RecordShape(kind(&other))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
