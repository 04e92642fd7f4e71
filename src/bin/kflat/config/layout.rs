use std::fs;

use anyhow::{Context, Result};

use kegg_flat::{RenderConfig, RenderOverrides};

use crate::cli::LayoutOptions;

/// Layers defaults, the optional TOML file, then explicit flags.
pub fn build_render_config(opts: &LayoutOptions) -> Result<RenderConfig> {
    let from_file = match &opts.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let overrides = RenderOverrides::from_toml_str(&text)
                .with_context(|| format!("Invalid config file: {}", path.display()))?;
            log::debug!("loaded layout overrides from {}: {overrides:?}", path.display());
            overrides
        }
        None => RenderOverrides::default(),
    };

    let from_flags = RenderOverrides {
        label_width: opts.label_width,
        line_width: opts.line_width,
        sequence_width: opts.sequence_width,
    };

    RenderConfig::default()
        .apply(&from_file.merge(from_flags))
        .context("Invalid layout settings")
}
