use serde::Deserialize;

use super::error::Error;

pub const DEFAULT_LABEL_WIDTH: usize = 12;
pub const DEFAULT_LINE_WIDTH: usize = 80;
pub const DEFAULT_SEQUENCE_WIDTH: usize = 60;

/// Layout parameters for one render call.
///
/// A `RenderConfig` is always valid: every width is positive and the label
/// column is narrower than the line. It is a plain `Copy` value, passed
/// explicitly to every entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    label_width: usize,
    line_width: usize,
    sequence_width: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            label_width: DEFAULT_LABEL_WIDTH,
            line_width: DEFAULT_LINE_WIDTH,
            sequence_width: DEFAULT_SEQUENCE_WIDTH,
        }
    }
}

impl RenderConfig {
    pub fn new(label_width: usize, line_width: usize, sequence_width: usize) -> Result<Self, Error> {
        if label_width == 0 {
            return Err(Error::zero_width("label_width"));
        }
        if line_width == 0 {
            return Err(Error::zero_width("line_width"));
        }
        if sequence_width == 0 {
            return Err(Error::zero_width("sequence_width"));
        }
        if label_width >= line_width {
            return Err(Error::LabelTooWide {
                label_width,
                line_width,
            });
        }
        Ok(Self {
            label_width,
            line_width,
            sequence_width,
        })
    }

    /// Parses a TOML document with optional `label_width`, `line_width` and
    /// `sequence_width` keys; missing keys keep their defaults.
    pub fn from_toml_str(toml: &str) -> Result<Self, Error> {
        Self::default().apply(&RenderOverrides::from_toml_str(toml)?)
    }

    /// Applies the set fields of `overrides` and re-validates.
    pub fn apply(self, overrides: &RenderOverrides) -> Result<Self, Error> {
        Self::new(
            overrides.label_width.unwrap_or(self.label_width),
            overrides.line_width.unwrap_or(self.line_width),
            overrides.sequence_width.unwrap_or(self.sequence_width),
        )
    }

    pub fn with_label_width(self, label_width: usize) -> Result<Self, Error> {
        Self::new(label_width, self.line_width, self.sequence_width)
    }

    pub fn with_line_width(self, line_width: usize) -> Result<Self, Error> {
        Self::new(self.label_width, line_width, self.sequence_width)
    }

    pub fn with_sequence_width(self, sequence_width: usize) -> Result<Self, Error> {
        Self::new(self.label_width, self.line_width, sequence_width)
    }

    #[inline]
    pub fn label_width(&self) -> usize {
        self.label_width
    }

    #[inline]
    pub fn line_width(&self) -> usize {
        self.line_width
    }

    #[inline]
    pub fn sequence_width(&self) -> usize {
        self.sequence_width
    }

    /// Width available to field content after the label column.
    #[inline]
    pub fn content_width(&self) -> usize {
        self.line_width - self.label_width
    }
}

/// Partial layout settings, as read from a configuration file or command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOverrides {
    pub label_width: Option<usize>,
    pub line_width: Option<usize>,
    pub sequence_width: Option<usize>,
}

impl RenderOverrides {
    /// Reads overrides from a TOML document; unknown keys are rejected.
    pub fn from_toml_str(toml: &str) -> Result<Self, Error> {
        Ok(toml::from_str(toml)?)
    }

    /// Layers `other` on top of `self`; set fields in `other` win.
    pub fn merge(self, other: RenderOverrides) -> Self {
        Self {
            label_width: other.label_width.or(self.label_width),
            line_width: other.line_width.or(self.line_width),
            sequence_width: other.sequence_width.or(self.sequence_width),
        }
    }
}
