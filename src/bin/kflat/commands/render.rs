use anyhow::{Context, Result, bail};

use kegg_flat::format::json;
use kegg_flat::{Record, RecordType, RenderConfig, write_batch};

use crate::cli::RenderArgs;
use crate::config::build_render_config;
use crate::display::{Context as DisplayContext, Progress, print_batch_summary};
use crate::io::{create_output, display_name, open_input, stdin_is_tty};

const TOTAL_STEPS: u8 = 3;

pub fn run_render(args: RenderArgs, ctx: DisplayContext) -> Result<()> {
    if args.io.input.is_none() && stdin_is_tty() {
        bail!(
            "No input file specified and stdin is a terminal.\n\nUsage: kflat render -i <INPUT> or pipe JSON via stdin."
        );
    }

    let config = build_render_config(&args.layout)?;
    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading records");
    let input_name = display_name(args.io.input.as_deref(), "stdin");
    let source = open_input(args.io.input.as_deref())?;
    let mut records = json::read(source)
        .with_context(|| format!("Failed to read records from {input_name}"))?;
    log::info!("read {} record(s) from {input_name}", records.len());
    progress.complete_step(
        "Reading records",
        &[format!("Parse JSON from {input_name}"), record_count(records.len())],
    );

    progress.step("Resolving record types");
    if let Some(forced) = args.record_type {
        retype(&mut records, forced.into());
    }
    let unknown = records
        .iter()
        .filter(|r| !r.record_type().is_known())
        .count();
    if unknown > 0 {
        log::warn!("{unknown} record(s) have no known type; fields are emitted in key order");
    }
    progress.complete_step("Resolving record types", &type_details(&records, unknown));

    if ctx.interactive && !records.is_empty() {
        print_batch_summary(&records);
    }

    progress.step("Writing output");
    let output_name = display_name(args.io.output.as_deref(), "stdout");
    let sink = create_output(args.io.output.as_deref())?;
    write_batch(sink, &records, &config)
        .with_context(|| format!("Failed to write flat-file output to {output_name}"))?;
    progress.complete_step(
        "Writing output",
        &[
            format!("Write KEGG flat file → {output_name}"),
            layout_detail(&config),
        ],
    );

    progress.finish("Render complete");

    Ok(())
}

fn retype(records: &mut [Record], record_type: RecordType) {
    log::debug!("forcing record type {record_type} on {} record(s)", records.len());
    for record in records {
        record.set_record_type(record_type);
    }
}

fn record_count(n: usize) -> String {
    match n {
        1 => "1 record".to_string(),
        n => format!("{n} records"),
    }
}

fn type_details(records: &[Record], unknown: usize) -> Vec<String> {
    let mut names: Vec<&str> = records
        .iter()
        .map(|r| r.record_type())
        .filter(|ty| ty.is_known())
        .map(|ty| ty.name())
        .collect();
    names.sort_unstable();
    names.dedup();

    let mut details = Vec::new();
    if !names.is_empty() {
        details.push(format!("Types: {}", names.join(", ")));
    }
    if unknown > 0 {
        details.push(format!("{} without a known type", record_count(unknown)));
    }
    details
}

fn layout_detail(config: &RenderConfig) -> String {
    format!(
        "Layout: label {}, line {}, sequence {}",
        config.label_width(),
        config.line_width(),
        config.sequence_width()
    )
}
