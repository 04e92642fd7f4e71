//! Core data structures for records on their way to the flat-file renderer.
//!
//! - [`types`] – The closed set of record types and the field classes.
//! - [`value`] – The polymorphic value held by one field slot.
//! - [`record`] – A typed mapping from canonical field identifiers to values.
//!
//! Field identifiers are normalized once, when they enter a [`Record`], so the
//! registry and the emitters only ever see the canonical lowercase form.
//!
//! [`Record`]: record::Record

pub mod record;
pub mod types;
pub mod value;
