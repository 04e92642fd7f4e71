use super::config::RenderConfig;
use super::{block, field, reference, sequence};
use crate::model::record::Record;
use crate::model::types::{FieldClass, RecordType};
use crate::model::value::FieldValue;
use crate::registry;

/// Final line of every rendered record.
pub const RECORD_TERMINATOR: &str = "///";

/// Emits one field through the emitter selected by its class.
///
/// Absent, empty and blank values produce no lines.
pub fn emit(id: &str, value: Option<&FieldValue>, config: &RenderConfig) -> Vec<String> {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return Vec::new();
    };
    let class = registry::classify(id);
    log::trace!("emitting {id} as {class}");
    match class {
        FieldClass::Reference => reference::emit_reference(id, value, config),
        FieldClass::Sequence => sequence::emit_sequence(id, value, config),
        FieldClass::Structure | FieldClass::Hierarchy => block::emit_block(id, value, config),
        FieldClass::Standard => field::emit_field(id, value, config),
    }
}

/// Renders `record` as `record_type` into lines, ending with [`RECORD_TERMINATOR`].
///
/// Known types emit their registered field order; fields outside that order
/// are not emitted. Unknown types emit the record's own fields in sorted
/// identifier order.
pub fn assemble_record(
    record: &Record,
    record_type: RecordType,
    config: &RenderConfig,
) -> Vec<String> {
    let mut lines = Vec::new();

    match registry::field_order(record_type) {
        Some(order) => {
            for id in order {
                lines.extend(emit(id, record.get(id), config));
            }
            for id in record.keys().filter(|id| !order.contains(id)) {
                log::debug!("{record_type} has no slot for field '{id}', skipping");
            }
        }
        None => {
            log::debug!("no field order for {record_type}, using the record's own fields");
            for (id, value) in record.iter() {
                lines.extend(emit(id, Some(value), config));
            }
        }
    }

    lines.push(RECORD_TERMINATOR.to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> Record {
        Record::new(RecordType::Compound)
            .with_field("formula", "H2O")
            .with_field("name", "H2O; Water")
            .with_field("entry", "C00001")
    }

    #[test]
    fn emits_in_registry_order() {
        let lines = assemble_record(&water(), RecordType::Compound, &RenderConfig::default());
        assert_eq!(
            lines,
            vec![
                "ENTRY       C00001",
                "NAME        H2O; Water",
                "FORMULA     H2O",
                "///",
            ]
        );
    }

    #[test]
    fn empty_record_still_terminates() {
        let lines = assemble_record(&Record::default(), RecordType::Unknown, &RenderConfig::default());
        assert_eq!(lines, vec!["///"]);
        let lines = assemble_record(&Record::default(), RecordType::Drug, &RenderConfig::default());
        assert_eq!(lines, vec!["///"]);
    }

    #[test]
    fn unknown_type_falls_back_to_sorted_keys() {
        let record = Record::default()
            .with_field("zeta", "last")
            .with_field("alpha", "first");
        let lines = assemble_record(&record, RecordType::Unknown, &RenderConfig::default());
        assert_eq!(lines, vec!["ALPHA       first", "ZETA        last", "///"]);
    }

    #[test]
    fn fields_outside_the_order_are_skipped() {
        let record = water().with_field("favourite_colour", "blue");
        let lines = assemble_record(&record, RecordType::Compound, &RenderConfig::default());
        assert!(!lines.iter().any(|l| l.starts_with("FAVOURITE")));
    }

    #[test]
    fn dispatch_selects_emitter_by_class() {
        let config = RenderConfig::default();
        let seq = emit("aaseq", Some(&FieldValue::scalar("MKV")), &config);
        assert_eq!(seq, vec!["AASEQ       3", "            MKV"]);

        let reference = emit("reference", Some(&FieldValue::map([("pmid", "7")])), &config);
        assert_eq!(reference, vec!["REFERENCE   PMID:7"]);

        let block = emit("atom", Some(&FieldValue::raw("1\n  a")), &config);
        assert_eq!(block, vec!["ATOM        1", "              a"]);

        assert!(emit("name", None, &config).is_empty());
        assert!(emit("name", Some(&FieldValue::scalar("")), &config).is_empty());
    }
}
