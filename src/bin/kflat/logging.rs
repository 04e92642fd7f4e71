use log::LevelFilter;

const LOGGED_CRATES: [&str; 2] = ["kflat", "kegg_flat"];

/// Installs the stderr logger. `RUST_LOG` wins over `--verbose` when set.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let filter = default_filter(level);

    let env = env_logger::Env::default().default_filter_or(filter);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(verbose)
        .try_init();
}

fn default_filter(level: LevelFilter) -> String {
    let level = level.as_str().to_lowercase();
    LOGGED_CRATES
        .iter()
        .map(|name| format!("{name}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}
