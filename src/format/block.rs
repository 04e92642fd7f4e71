use super::config::RenderConfig;
use super::field::emit_scalar;
use super::text::{label_lines, normalize_label};
use crate::model::value::FieldValue;

/// Emits a chemical-structure or hierarchy block.
///
/// Pre-rendered text is re-labelled line by line and never re-wrapped.
/// Structured values are not laid out column by column; they fall back to a
/// wrapped scalar of their flattened text.
pub fn emit_block(id: &str, value: &FieldValue, config: &RenderConfig) -> Vec<String> {
    if value.is_empty() {
        return Vec::new();
    }
    let label = normalize_label(id);
    match value {
        FieldValue::RawBlock(text) | FieldValue::Scalar(text) if value.is_preformatted() => {
            label_lines(&label, block_lines(text), config.label_width())
        }
        _ => {
            log::debug!("{label} is not pre-rendered, emitting as plain text");
            emit_scalar(&label, &value.flatten_text(" "), config)
        }
    }
}

/// Splits pre-rendered text into lines, keeping leading indentation and
/// dropping trailing whitespace and surrounding blank lines.
pub(crate) fn block_lines(text: &str) -> Vec<String> {
    let lines: Vec<&str> = text.lines().map(str::trim_end).collect();
    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    let end = lines.iter().rposition(|l| !l.is_empty()).map_or(start, |i| i + 1);
    lines[start..end].iter().map(|l| l.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const KCF_ATOMS: &str = "3\n    1   O0  O     0.0000   0.0000\n    2   H0  H     1.0000   0.0000\n    3   H0  H    -1.0000   0.0000\n";

    #[test]
    fn raw_block_is_relabelled_without_rewrap() {
        let lines = emit_block("atom", &FieldValue::raw(KCF_ATOMS), &RenderConfig::default());
        assert_eq!(
            lines,
            vec![
                "ATOM        3",
                "                1   O0  O     0.0000   0.0000",
                "                2   H0  H     1.0000   0.0000",
                "                3   H0  H    -1.0000   0.0000",
            ]
        );
    }

    #[test]
    fn multi_line_scalar_counts_as_preformatted() {
        let tree = "A Metabolism\n  B Carbohydrate\n    C Glycolysis";
        let lines = emit_block("brite", &FieldValue::scalar(tree), &RenderConfig::default());
        assert_eq!(
            lines,
            vec![
                "BRITE       A Metabolism",
                "              B Carbohydrate",
                "                C Glycolysis",
            ]
        );
    }

    #[test]
    fn overlong_block_lines_are_not_wrapped() {
        let long = "x".repeat(100);
        let lines = emit_block("bond", &FieldValue::raw(long.clone()), &RenderConfig::default());
        assert_eq!(lines, vec![format!("BOND        {long}")]);
    }

    #[test]
    fn structured_value_falls_back_to_scalar() {
        let value = FieldValue::list(["1 O", "2 H"]);
        let lines = emit_block("node", &value, &RenderConfig::default());
        assert_eq!(lines, vec!["NODE        1 O 2 H"]);
    }

    #[test]
    fn empty_block_emits_nothing() {
        assert!(emit_block("edge", &FieldValue::raw(" \n \n"), &RenderConfig::default()).is_empty());
    }

    #[test]
    fn block_lines_trims_surrounding_blank_lines() {
        assert_eq!(block_lines("\n\n  a  \n\n b\n\n"), vec!["  a", "", " b"]);
        assert!(block_lines("").is_empty());
        assert!(block_lines("\n  \n").is_empty());
    }
}
