//! Canonical field orders and special-block classification.
//!
//! Each supported [`RecordType`] owns a fixed, ordered list of canonical field
//! identifiers that drives emission order. Field identifiers are also
//! classified into [`FieldClass`]es that select the emitter used for them.
//! Both tables are immutable literals; supporting a new record type is a
//! table edit.

mod tables;

use crate::model::record::normalize_key;
use crate::model::types::{FieldClass, RecordType};

/// Returns the canonical field order of `record_type`, or `None` for
/// [`RecordType::Unknown`].
pub fn field_order(record_type: RecordType) -> Option<&'static [&'static str]> {
    match record_type {
        RecordType::Pathway => Some(tables::PATHWAY),
        RecordType::Brite => Some(tables::BRITE),
        RecordType::Module => Some(tables::MODULE),
        RecordType::Orthology => Some(tables::ORTHOLOGY),
        RecordType::Genome => Some(tables::GENOME),
        RecordType::Genes => Some(tables::GENES),
        RecordType::Compound => Some(tables::COMPOUND),
        RecordType::Glycan => Some(tables::GLYCAN),
        RecordType::Reaction => Some(tables::REACTION),
        RecordType::Rclass => Some(tables::RCLASS),
        RecordType::Enzyme => Some(tables::ENZYME),
        RecordType::Network => Some(tables::NETWORK),
        RecordType::Variant => Some(tables::VARIANT),
        RecordType::Disease => Some(tables::DISEASE),
        RecordType::Drug => Some(tables::DRUG),
        RecordType::Dgroup => Some(tables::DGROUP),
        RecordType::Unknown => None,
    }
}

/// Looks up a field order by type name, ignoring case and `-`/`_` separators.
pub fn field_order_by_name(name: &str) -> Option<&'static [&'static str]> {
    name.parse::<RecordType>().ok().and_then(field_order)
}

pub fn is_known_type(name: &str) -> bool {
    field_order_by_name(name).is_some()
}

pub fn all_record_types() -> &'static [RecordType] {
    &RecordType::ALL
}

/// Classifies a field identifier. Every identifier has exactly one class;
/// anything not listed as special is [`FieldClass::Standard`].
pub fn classify(field_id: &str) -> FieldClass {
    let key = normalize_key(field_id);
    let key = key.as_str();
    if tables::SEQUENCE_FIELDS.contains(&key) {
        FieldClass::Sequence
    } else if tables::STRUCTURE_FIELDS.contains(&key) {
        FieldClass::Structure
    } else if tables::HIERARCHY_FIELDS.contains(&key) {
        FieldClass::Hierarchy
    } else if tables::REFERENCE_FIELDS.contains(&key) {
        FieldClass::Reference
    } else {
        FieldClass::Standard
    }
}

pub fn is_special_block(field_id: &str) -> bool {
    classify(field_id).is_special()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_known_type_has_an_order() {
        for &ty in all_record_types() {
            let order = field_order(ty).expect("registered order");
            assert_eq!(order.first(), Some(&"entry"), "{ty} must start with entry");
        }
        assert!(field_order(RecordType::Unknown).is_none());
    }

    #[test]
    fn field_orders_have_unique_identifiers() {
        for &ty in all_record_types() {
            let order = field_order(ty).unwrap();
            let unique: HashSet<_> = order.iter().collect();
            assert_eq!(unique.len(), order.len(), "duplicate field in {ty}");
        }
    }

    #[test]
    fn field_orders_use_canonical_identifiers() {
        for &ty in all_record_types() {
            for id in field_order(ty).unwrap() {
                assert_eq!(normalize_key(id), *id);
            }
        }
    }

    #[test]
    fn lookup_by_name_normalizes() {
        assert_eq!(field_order_by_name("COMPOUND"), field_order(RecordType::Compound));
        assert_eq!(field_order_by_name("d_group"), field_order(RecordType::Dgroup));
        assert!(field_order_by_name("unknown").is_none());
        assert!(field_order_by_name("spaceship").is_none());
    }

    #[test]
    fn known_type_predicate() {
        assert!(is_known_type("pathway"));
        assert!(is_known_type("R-CLASS"));
        assert!(!is_known_type("unknown"));
        assert!(!is_known_type(""));
        assert_eq!(all_record_types().len(), 16);
    }

    #[test]
    fn compound_order_starts_with_entry_name_formula() {
        let order = field_order(RecordType::Compound).unwrap();
        assert_eq!(&order[..3], &["entry", "name", "formula"]);
    }

    #[test]
    fn classification_is_total_and_case_insensitive() {
        assert_eq!(classify("aaseq"), FieldClass::Sequence);
        assert_eq!(classify("NTSEQ"), FieldClass::Sequence);
        assert_eq!(classify("Atom"), FieldClass::Structure);
        assert_eq!(classify("bracket"), FieldClass::Structure);
        assert_eq!(classify("brite"), FieldClass::Hierarchy);
        assert_eq!(classify("REFERENCE"), FieldClass::Reference);
        assert_eq!(classify("formula"), FieldClass::Standard);
        assert_eq!(classify(""), FieldClass::Standard);
    }

    #[test]
    fn special_block_tables_are_disjoint() {
        let all: Vec<&str> = tables::SEQUENCE_FIELDS
            .iter()
            .chain(tables::STRUCTURE_FIELDS)
            .chain(tables::HIERARCHY_FIELDS)
            .chain(tables::REFERENCE_FIELDS)
            .copied()
            .collect();
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());
        assert!(all.iter().all(|id| is_special_block(id)));
        assert!(!is_special_block("dblinks"));
    }
}
