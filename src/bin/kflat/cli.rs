use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use kegg_flat::RecordType;

#[derive(Parser)]
#[command(
    name = "kflat",
    about = "KEGG flat-file record serializer",
    version,
    author,
    before_help = crate::display::banner_for_help(),
    propagate_version = true
)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render JSON records as KEGG flat-file text
    #[command(visible_alias = "r")]
    Render(RenderArgs),

    /// Show the canonical field order of a record type
    #[command(visible_alias = "f")]
    Fields(FieldsArgs),

    /// List the supported record types
    #[command(visible_alias = "t")]
    Types,
}

/// I/O options for the render command.
#[derive(Args)]
pub struct IoOptions {
    /// Input JSON file: one record object or an array of them (stdin if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Layout options; flags override values from --config.
#[derive(Args)]
#[command(next_help_heading = "Layout")]
pub struct LayoutOptions {
    /// TOML file with label_width, line_width and sequence_width
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Width of the label column
    #[arg(long, value_name = "N")]
    pub label_width: Option<usize>,

    /// Total line width, label column included
    #[arg(long, value_name = "N")]
    pub line_width: Option<usize>,

    /// Residues per sequence line
    #[arg(long, value_name = "N")]
    pub sequence_width: Option<usize>,
}

#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub io: IoOptions,

    /// Render every record as this type instead of its own record_type
    #[arg(long = "type", value_name = "TYPE")]
    pub record_type: Option<RecordTypeArg>,

    #[command(flatten)]
    pub layout: LayoutOptions,
}

#[derive(Args)]
pub struct FieldsArgs {
    /// Record type to describe
    #[arg(value_name = "TYPE")]
    pub record_type: RecordTypeArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum RecordTypeArg {
    Pathway,
    Brite,
    Module,
    #[value(alias = "ko")]
    Orthology,
    Genome,
    Genes,
    Compound,
    Glycan,
    Reaction,
    Rclass,
    Enzyme,
    Network,
    Variant,
    Disease,
    Drug,
    Dgroup,
}

impl From<RecordTypeArg> for RecordType {
    fn from(arg: RecordTypeArg) -> Self {
        match arg {
            RecordTypeArg::Pathway => RecordType::Pathway,
            RecordTypeArg::Brite => RecordType::Brite,
            RecordTypeArg::Module => RecordType::Module,
            RecordTypeArg::Orthology => RecordType::Orthology,
            RecordTypeArg::Genome => RecordType::Genome,
            RecordTypeArg::Genes => RecordType::Genes,
            RecordTypeArg::Compound => RecordType::Compound,
            RecordTypeArg::Glycan => RecordType::Glycan,
            RecordTypeArg::Reaction => RecordType::Reaction,
            RecordTypeArg::Rclass => RecordType::Rclass,
            RecordTypeArg::Enzyme => RecordType::Enzyme,
            RecordTypeArg::Network => RecordType::Network,
            RecordTypeArg::Variant => RecordType::Variant,
            RecordTypeArg::Disease => RecordType::Disease,
            RecordTypeArg::Drug => RecordType::Drug,
            RecordTypeArg::Dgroup => RecordType::Dgroup,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
