use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("invalid render configuration: {setting} must be greater than zero")]
    ZeroWidth { setting: &'static str },

    #[error(
        "invalid render configuration: label width ({label_width}) must be smaller than line width ({line_width})"
    )]
    LabelTooWide {
        label_width: usize,
        line_width: usize,
    },

    #[error("failed to parse render configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("failed to parse record input: {0}")]
    RecordParse(#[from] serde_json::Error),

    #[error("record input must be a JSON object or an array of objects, found {0}")]
    RecordShape(&'static str),
}

impl Error {
    pub fn zero_width(setting: &'static str) -> Self {
        Self::ZeroWidth { setting }
    }

    /// `true` for invalid widths and unparsable configuration documents.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::ZeroWidth { .. } | Error::LabelTooWide { .. } | Error::ConfigParse(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_setting() {
        assert_eq!(
            Error::zero_width("sequence_width").to_string(),
            "invalid render configuration: sequence_width must be greater than zero"
        );
        let err = Error::LabelTooWide {
            label_width: 80,
            line_width: 80,
        };
        assert!(err.to_string().contains("label width (80)"));
        assert!(err.is_config_error());
    }

    #[test]
    fn unparsable_config_counts_as_config_error() {
        let source = toml::from_str::<toml::Value>("line_width = ").unwrap_err();
        assert!(Error::from(source).is_config_error());
    }

    #[test]
    fn io_errors_convert() {
        let err: Error = std::io::Error::other("disk full").into();
        assert!(matches!(err, Error::Io { .. }));
        assert!(!err.is_config_error());
    }
}
