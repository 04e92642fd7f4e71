use std::collections::BTreeMap;

use super::block;
use super::config::RenderConfig;
use super::text::{label_lines, normalize_label, wrap_text};
use crate::model::record::normalize_key;
use crate::model::value::FieldValue;

/// Sub-fields that lead a nested map, in this order; the rest follow sorted.
pub(crate) const LEADING_SUB_FIELDS: [&str; 3] = ["authors", "title", "journal"];

const NUMERIC_FIELDS: &[&str] = &["exact_mass", "mol_weight", "mass"];

const SUB_FIELD_INDENT: &str = "  ";

/// Emits one standard field, choosing the layout from the value's shape.
pub fn emit_field(id: &str, value: &FieldValue, config: &RenderConfig) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    let label = normalize_label(id);
    match value {
        FieldValue::Scalar(text) if NUMERIC_FIELDS.contains(&normalize_key(id).as_str()) => {
            emit_scalar(&label, checked_numeric(text), config)
        }
        _ => emit_value(&label, value, 0, config),
    }
}

pub(crate) fn emit_value(
    label: &str,
    value: &FieldValue,
    depth: usize,
    config: &RenderConfig,
) -> Vec<String> {
    match value {
        FieldValue::Scalar(text) => emit_scalar(label, text, config),
        FieldValue::List(items) => emit_list(label, items, config),
        FieldValue::NestedMap(map) => emit_nested(label, map, depth, config),
        FieldValue::RawBlock(text) => {
            label_lines(label, block::block_lines(text), config.label_width())
        }
    }
}

pub(crate) fn emit_scalar(label: &str, text: &str, config: &RenderConfig) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    label_lines(label, wrap_text(text, config.content_width()), config.label_width())
}

fn emit_list(label: &str, items: &[FieldValue], config: &RenderConfig) -> Vec<String> {
    let mut lines = Vec::new();
    for item in items {
        push_list_item(&mut lines, item, config);
    }
    label_lines(label, lines, config.label_width())
}

fn push_list_item(lines: &mut Vec<String>, item: &FieldValue, config: &RenderConfig) {
    if item.is_empty() {
        return;
    }
    match item {
        FieldValue::Scalar(text) => lines.extend(wrap_text(text, config.content_width())),
        FieldValue::RawBlock(text) => lines.extend(block::block_lines(text)),
        FieldValue::List(nested) => {
            for inner in nested {
                push_list_item(lines, inner, config);
            }
        }
        FieldValue::NestedMap(_) => {
            lines.extend(wrap_text(&item.flatten_text(" "), config.content_width()))
        }
    }
}

fn emit_nested(
    label: &str,
    map: &BTreeMap<String, FieldValue>,
    depth: usize,
    config: &RenderConfig,
) -> Vec<String> {
    let mut lines = label_lines(label, [String::new()], config.label_width());
    let indent = nested_indent(depth + 1, config.label_width());
    for (key, value) in ordered_sub_fields(map, &[]) {
        let sub_label = format!("{indent}{}", normalize_label(key));
        lines.extend(emit_value(&sub_label, value, depth + 1, config));
    }
    lines
}

/// Non-empty sub-fields of `map` in canonical order, leaving out `skip`.
pub(crate) fn ordered_sub_fields<'a>(
    map: &'a BTreeMap<String, FieldValue>,
    skip: &[&str],
) -> Vec<(&'a str, &'a FieldValue)> {
    let leading = LEADING_SUB_FIELDS
        .iter()
        .filter_map(|&key| map.get_key_value(key));
    let rest = map
        .iter()
        .filter(|(key, _)| !LEADING_SUB_FIELDS.contains(&key.as_str()));
    leading
        .chain(rest)
        .filter(|(key, value)| !skip.contains(&key.as_str()) && !value.is_empty())
        .map(|(key, value)| (key.as_str(), value))
        .collect()
}

/// Sub-label indent for `level`, capped so at least one character of the
/// label column is left for the sub-field name.
fn nested_indent(level: usize, label_width: usize) -> String {
    let width = (SUB_FIELD_INDENT.len() * level).min(label_width.saturating_sub(1));
    " ".repeat(width)
}

/// Numbers are emitted exactly as written; the parse only flags values that
/// are not finite numbers.
fn checked_numeric(text: &str) -> &str {
    let trimmed = text.trim();
    if !trimmed.parse::<f64>().is_ok_and(f64::is_finite) {
        log::debug!("non-numeric value '{trimmed}' kept verbatim");
    }
    trimmed
}
