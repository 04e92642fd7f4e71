use std::collections::BTreeMap;

use super::config::RenderConfig;
use super::field::{emit_scalar, ordered_sub_fields};
use super::text::{label_lines, normalize_label, wrap_text};
use crate::model::value::FieldValue;

const PUBMED_FIELD: &str = "pmid";
const PUBMED_PREFIX: &str = "PMID:";
const SUB_LABEL_INDENT: &str = "  ";

/// Emits one reference or an ordered list of references.
///
/// Each reference is a `REFERENCE` header carrying its PubMed id (if any)
/// followed by indented `AUTHORS`, `TITLE` and `JOURNAL` lines and any
/// further identifiers such as `DOI`.
pub fn emit_reference(id: &str, value: &FieldValue, config: &RenderConfig) -> Vec<String> {
    let label = normalize_label(id);
    let mut lines = Vec::new();
    push_reference(&mut lines, &label, value, config);
    lines
}

fn push_reference(lines: &mut Vec<String>, label: &str, value: &FieldValue, config: &RenderConfig) {
    if value.is_empty() {
        return;
    }
    match value {
        FieldValue::List(items) => {
            for item in items {
                push_reference(lines, label, item, config);
            }
        }
        FieldValue::NestedMap(map) => lines.extend(single_reference(label, map, config)),
        FieldValue::Scalar(text) | FieldValue::RawBlock(text) => {
            lines.extend(emit_scalar(label, text, config))
        }
    }
}

fn single_reference(
    label: &str,
    map: &BTreeMap<String, FieldValue>,
    config: &RenderConfig,
) -> Vec<String> {
    let header = map
        .get(PUBMED_FIELD)
        .map(|pmid| pubmed_id(&pmid.flatten_text(" ")))
        .unwrap_or_default();
    let mut lines = label_lines(
        label,
        wrap_text(&header, config.content_width()),
        config.label_width(),
    );

    for (key, value) in ordered_sub_fields(map, &[PUBMED_FIELD]) {
        let sub_label = format!("{SUB_LABEL_INDENT}{}", normalize_label(key));
        lines.extend(emit_scalar(&sub_label, &value.flatten_text(", "), config));
    }
    lines
}

fn pubmed_id(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() || raw.to_ascii_uppercase().starts_with(PUBMED_PREFIX) {
        raw.to_string()
    } else {
        format!("{PUBMED_PREFIX}{raw}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water_paper() -> FieldValue {
        FieldValue::map([
            ("pmid", FieldValue::scalar("9334165")),
            ("authors", FieldValue::list(["Doe J", "Roe R"])),
            ("title", FieldValue::scalar("Water in cells")),
            ("journal", FieldValue::scalar("J Biol Chem 272:1-2 (1997)")),
        ])
    }

    #[test]
    fn single_reference_layout() {
        let lines = emit_reference("reference", &water_paper(), &RenderConfig::default());
        assert_eq!(
            lines,
            vec![
                "REFERENCE   PMID:9334165",
                "  AUTHORS   Doe J, Roe R",
                "  TITLE     Water in cells",
                "  JOURNAL   J Biol Chem 272:1-2 (1997)",
            ]
        );
    }

    #[test]
    fn reference_without_pmid_has_blank_header() {
        let value = FieldValue::map([("title", "Untitled"), ("doi", "10.1/abc")]);
        let lines = emit_reference("reference", &value, &RenderConfig::default());
        assert_eq!(
            lines,
            vec![
                "REFERENCE   ",
                "  TITLE     Untitled",
                "  DOI       10.1/abc",
            ]
        );
    }

    #[test]
    fn prefixed_pmid_is_not_doubled() {
        let value = FieldValue::map([("pmid", "pmid:42"), ("title", "T")]);
        let lines = emit_reference("reference", &value, &RenderConfig::default());
        assert_eq!(lines[0], "REFERENCE   pmid:42");
    }

    #[test]
    fn multiple_references_render_in_order() {
        let second = FieldValue::map([("pmid", "1"), ("title", "Second")]);
        let value = FieldValue::List(vec![water_paper(), second]);
        let lines = emit_reference("reference", &value, &RenderConfig::default());
        let headers: Vec<_> = lines.iter().filter(|l| l.starts_with("REFERENCE")).collect();
        assert_eq!(headers, vec!["REFERENCE   PMID:9334165", "REFERENCE   PMID:1"]);
        assert_eq!(lines.last().unwrap(), "  TITLE     Second");
    }

    #[test]
    fn long_titles_wrap_under_sub_label() {
        let title = vec!["molecular"; 12].join(" ");
        let value = FieldValue::map([("title", title.as_str())]);
        let lines = emit_reference("reference", &value, &RenderConfig::default());
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("  TITLE     molecular"));
        assert!(lines[2].starts_with("            molecular"));
    }

    #[test]
    fn scalar_reference_is_header_text() {
        let value = FieldValue::scalar("PMID:123");
        let lines = emit_reference("reference", &value, &RenderConfig::default());
        assert_eq!(lines, vec!["REFERENCE   PMID:123"]);
    }

    #[test]
    fn empty_references_emit_nothing() {
        let value = FieldValue::List(vec![FieldValue::map([("title", " ")])]);
        assert!(emit_reference("reference", &value, &RenderConfig::default()).is_empty());
    }
}
