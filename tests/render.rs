use std::fs;
use std::io::Cursor;

use kegg_flat::format::json;
use kegg_flat::{FieldValue, Record, RecordType, RenderConfig, render, render_batch, write_batch};

const GLUCOSE_JSON: &str = r#"{
    "record_type": "compound",
    "entry": "C00031",
    "name": ["D-Glucose", "Grape sugar"],
    "formula": "C6H12O6",
    "exact_mass": 180.0634,
    "mol_weight": "180.156",
    "reference": [
        {"pmid": "1", "authors": ["A B"], "title": "T1", "journal": "J1"},
        {"pmid": "PMID:2", "title": "T2", "journal": "J2", "doi": "10.1/x"}
    ],
    "dblinks": ["PubChem: 3333", "ChEBI: 4167"],
    "extra_field": "not part of a compound",
    "remark": null
}"#;

const GLUCOSE_FLAT: &str = "\
ENTRY       C00031
NAME        D-Glucose
            Grape sugar
FORMULA     C6H12O6
EXACT_MASS  180.0634
MOL_WEIGHT  180.156
REFERENCE   PMID:1
  AUTHORS   A B
  TITLE     T1
  JOURNAL   J1
REFERENCE   PMID:2
  TITLE     T2
  JOURNAL   J2
  DOI       10.1/x
DBLINKS     PubChem: 3333
            ChEBI: 4167
///";

fn read_one(json_text: &str) -> Record {
    let mut records = json::read(Cursor::new(json_text)).expect("valid record JSON");
    assert_eq!(records.len(), 1);
    records.remove(0)
}

#[test]
fn compound_from_json_renders_in_canonical_order() {
    let record = read_one(GLUCOSE_JSON);
    assert_eq!(record.record_type(), RecordType::Compound);
    assert_eq!(render(&record, &RenderConfig::default()), GLUCOSE_FLAT);
}

#[test]
fn gene_sequence_and_hierarchy_blocks() {
    let record = Record::new(RecordType::Genes)
        .with_field("entry", "b0001")
        .with_field("symbol", "thrL")
        .with_field(
            "brite",
            FieldValue::raw("KEGG Orthology (KO)\n 09100 Metabolism\n  09101 Carbohydrate\n"),
        )
        .with_field("aaseq", format!("{}\n{}", "M".repeat(70), "K".repeat(50)));

    let text = render(&record, &RenderConfig::default());
    let lines: Vec<&str> = text.lines().collect();

    let expected_seq_1 = format!("{}{}", " ".repeat(12), "M".repeat(60));
    let expected_seq_2 = format!("{}{}{}", " ".repeat(12), "M".repeat(10), "K".repeat(50));
    assert_eq!(
        lines,
        vec![
            "ENTRY       b0001",
            "SYMBOL      thrL",
            "BRITE       KEGG Orthology (KO)",
            "             09100 Metabolism",
            "              09101 Carbohydrate",
            "AASEQ       120",
            expected_seq_1.as_str(),
            expected_seq_2.as_str(),
            "///",
        ]
    );
}

#[test]
fn narrow_layout_wraps_to_the_content_column() {
    let config = RenderConfig::new(12, 30, 60).unwrap();
    let record = Record::new(RecordType::Compound)
        .with_field("entry", "C00001")
        .with_field("comment", "the quick brown fox jumps over the lazy dog");

    assert_eq!(
        render(&record, &config),
        "ENTRY       C00001\n\
         COMMENT     the quick brown\n\
         \x20           fox jumps over the\n\
         \x20           lazy dog\n\
         ///"
    );
}

#[test]
fn unknown_type_falls_back_to_sorted_fields() {
    let record = read_one(r#"{"zeta": "z", "alpha": "a", "record_type": "not-a-kegg-db"}"#);
    assert_eq!(record.record_type(), RecordType::Unknown);
    assert_eq!(
        render(&record, &RenderConfig::default()),
        "ALPHA       a\nZETA        z\n///"
    );
}

#[test]
fn empty_record_is_only_the_terminator() {
    let record = Record::new(RecordType::Pathway).with_field("name", "   ");
    assert_eq!(render(&record, &RenderConfig::default()), "///");
}

#[test]
fn batch_from_json_array_keeps_input_order() {
    let records = json::read(Cursor::new(
        r#"[
            {"record_type": "compound", "entry": "C00002", "name": "ATP"},
            {"record_type": "drug", "entry": "D00001", "name": "Water (JP18)"}
        ]"#,
    ))
    .unwrap();

    let batch = render_batch(&records, &RenderConfig::default());
    assert_eq!(
        batch,
        "ENTRY       C00002\nNAME        ATP\n///\n\n\
         ENTRY       D00001\nNAME        Water (JP18)\n///"
    );
}

#[test]
fn batch_written_to_file_matches_rendered_text() {
    let config = RenderConfig::default();
    let records = vec![
        read_one(GLUCOSE_JSON),
        Record::new(RecordType::Compound).with_field("entry", "C00001"),
    ];

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.kegg");
    write_batch(fs::File::create(&path).unwrap(), &records, &config).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, format!("{}\n", render_batch(&records, &config)));
    assert!(written.starts_with(GLUCOSE_FLAT));
}

#[test]
fn non_object_input_is_rejected() {
    let err = json::read(Cursor::new("[1, 2]")).unwrap_err();
    assert!(matches!(err, kegg_flat::Error::RecordShape("a number")));
    assert!(json::read(Cursor::new("{not json")).is_err());
}

#[test]
fn render_inputs_are_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Record>();
    assert_send_sync::<FieldValue>();
    assert_send_sync::<RenderConfig>();
}

#[test]
fn numeric_fields_are_emitted_as_written() {
    let record = read_one(
        r#"{"record_type": "compound", "entry": "C00001",
            "exact_mass": "18.0100", "mol_weight": "12345678901234567891"}"#,
    );
    assert_eq!(
        render(&record, &RenderConfig::default()),
        "ENTRY       C00001\nEXACT_MASS  18.0100\nMOL_WEIGHT  12345678901234567891\n///"
    );
}
