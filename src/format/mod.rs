//! Rendering of [`Record`]s into KEGG flat-file text.
//!
//! A rendered record is a sequence of lines, each starting with a label column
//! of [`RenderConfig::label_width`] characters, terminated by a `///` line.
//! Records in a batch are separated by one blank line.

use std::io::Write;

pub mod config;
pub mod error;
pub mod json;
pub mod text;

mod block;
mod field;
mod record;
mod reference;
mod sequence;

pub use block::emit_block;
pub use config::{RenderConfig, RenderOverrides};
pub use field::emit_field;
pub use record::{RECORD_TERMINATOR, assemble_record, emit};
pub use reference::emit_reference;
pub use sequence::emit_sequence;

use crate::model::record::Record;
use crate::model::types::RecordType;
use error::Error;

/// Renders one record using the type it carries.
pub fn render(record: &Record, config: &RenderConfig) -> String {
    render_as(record, record.record_type(), config)
}

/// Renders one record as `record_type`, regardless of the type it carries.
pub fn render_as(record: &Record, record_type: RecordType, config: &RenderConfig) -> String {
    assemble_record(record, record_type, config).join("\n")
}

/// Renders records in order, separated by one blank line.
pub fn render_batch<'a, I>(records: I, config: &RenderConfig) -> String
where
    I: IntoIterator<Item = &'a Record>,
{
    records
        .into_iter()
        .map(|record| render(record, config))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Renders records on the rayon thread pool; output is identical to
/// [`render_batch`].
#[cfg(feature = "parallel")]
pub fn render_batch_parallel(records: &[Record], config: &RenderConfig) -> String {
    use rayon::prelude::*;

    records
        .par_iter()
        .map(|record| render(record, config))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Writes a batch to `writer`, followed by a final newline.
pub fn write_batch<W: Write>(
    mut writer: W,
    records: &[Record],
    config: &RenderConfig,
) -> Result<(), Error> {
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        for line in assemble_record(record, record.record_type(), config) {
            writeln!(writer, "{line}")?;
        }
    }
    writer.flush()?;
    Ok(())
}
