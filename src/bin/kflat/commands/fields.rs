use anyhow::Result;

use kegg_flat::RecordType;

use crate::cli::FieldsArgs;
use crate::display::{print_field_order, print_record_types};

pub fn run_fields(args: FieldsArgs) -> Result<()> {
    let record_type: RecordType = args.record_type.into();
    log::debug!("describing field order of {record_type}");
    print_field_order(record_type);
    Ok(())
}

pub fn run_types() -> Result<()> {
    print_record_types();
    Ok(())
}
