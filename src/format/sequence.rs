use super::config::RenderConfig;
use super::field::emit_field;
use super::text::{blank_label, normalize_label, pad_label};
use crate::model::value::FieldValue;

/// Emits an amino-acid or nucleotide sequence.
///
/// The header line carries the residue count of the whitespace-free
/// sequence; the residues follow in blank-labelled lines of exactly
/// `sequence_width` characters (the last one may be shorter).
///
/// Only text counts as residues; a nested map is not a sequence and is
/// emitted as a standard field.
pub fn emit_sequence(id: &str, value: &FieldValue, config: &RenderConfig) -> Vec<String> {
    if let FieldValue::NestedMap(_) = value {
        log::debug!("{id} holds sub-fields, not residues; emitting as a standard field");
        return emit_field(id, value, config);
    }

    let mut residues = Vec::new();
    collect_residues(value, &mut residues);
    if residues.is_empty() {
        return Vec::new();
    }

    let label = normalize_label(id);
    let blank = blank_label(config.label_width());
    let mut lines = Vec::with_capacity(1 + residues.len().div_ceil(config.sequence_width()));
    lines.push(format!("{}{}", pad_label(&label, config.label_width()), residues.len()));
    for chunk in residues.chunks(config.sequence_width()) {
        let mut line = blank.clone();
        line.extend(chunk);
        lines.push(line);
    }
    lines
}

fn collect_residues(value: &FieldValue, residues: &mut Vec<char>) {
    match value {
        FieldValue::Scalar(text) | FieldValue::RawBlock(text) => {
            residues.extend(text.chars().filter(|c| !c.is_whitespace()))
        }
        FieldValue::List(items) => {
            for item in items {
                collect_residues(item, residues);
            }
        }
        FieldValue::NestedMap(_) => {}
    }
}
