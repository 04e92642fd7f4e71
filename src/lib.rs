//! A pure Rust serializer for KEGG flat-file records.
//! It turns structured database entries (compounds, pathways, genes, drugs, ...)
//! into the fixed-column, line-oriented text KEGG distributes, byte for byte.
//!
//! # Features
//!
//! - **Field registry**: Canonical field order for sixteen KEGG record types,
//!   plus the classification of fields needing special layouts
//! - **Word wrapping**: Greedy wrapping to the content column with blank-label
//!   continuation lines
//! - **Special blocks**: Bibliographic references, fixed-width sequence
//!   chunking, and pass-through of pre-rendered structure and BRITE blocks
//! - **Explicit configuration**: Label, line and sequence widths travel with
//!   every call in a validated [`RenderConfig`]
//!
//! # Quick Start
//!
//! ```
//! use kegg_flat::{FieldValue, Record, RecordType, RenderConfig, render};
//!
//! let water = Record::new(RecordType::Compound)
//!     .with_field("entry", "C00001")
//!     .with_field("name", FieldValue::list(["H2O", "Water"]))
//!     .with_field("formula", "H2O")
//!     .with_field("MOL-WEIGHT", "18.015");
//!
//! let text = render(&water, &RenderConfig::default());
//! assert_eq!(
//!     text,
//!     "ENTRY       C00001\n\
//!      NAME        H2O\n\
//!      \x20           Water\n\
//!      FORMULA     H2O\n\
//!      MOL_WEIGHT  18.015\n\
//!      ///"
//! );
//! ```
//!
//! # Module Organization
//!
//! - [`model`] - Records, field values, record types and field classes
//! - [`registry`] - Per-type field orders and special-block classification
//! - [`format`] - Primitive formatters, field emitters and the record renderer

pub mod format;
pub mod model;
pub mod registry;

pub use model::record::{RECORD_TYPE_FIELD, Record, normalize_key};
pub use model::types::{FieldClass, ParseRecordTypeError, RecordType};
pub use model::value::FieldValue;

pub use format::config::{
    DEFAULT_LABEL_WIDTH, DEFAULT_LINE_WIDTH, DEFAULT_SEQUENCE_WIDTH, RenderConfig, RenderOverrides,
};
pub use format::text::{blank_label, normalize_label, pad_label, wrap_text};
pub use format::{RECORD_TERMINATOR, assemble_record, render, render_as, render_batch, write_batch};

#[cfg(feature = "parallel")]
pub use format::render_batch_parallel;

pub use format::error::Error;
