use std::io::{self, Write};

use anyhow::Error;

use kegg_flat::wrap_text;

const PANEL_RULE: &str = "──────────────────────────────────────────────────────────────";
const PANEL_BORDER: &str = "══════════════════════════════════════════════════════════════";

pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();
    let _ = writeln!(stderr);
    for line in error_panel(err) {
        let _ = writeln!(stderr, "{line}");
    }
    let _ = writeln!(stderr);
}

#[rustfmt::skip]
fn error_panel(err: &Error) -> Vec<String> {
    let mut out = vec![
        format!("   ╔{PANEL_BORDER}╗"),
        format!("   ║  {:<59} ║", "✗ Error"),
        format!("   ╟{PANEL_RULE}╢"),
    ];

    for line in wrap_text(&err.to_string(), 59) {
        out.push(format!("   ║  {:<59} ║", line));
    }

    for cause in err.chain().skip(1) {
        out.push(format!("   ╟{PANEL_RULE}╢"));
        out.push(format!("   ║  {:<59} ║", "Caused by:"));
        for line in wrap_text(&cause.to_string(), 57) {
            out.push(format!("   ║    {:<57} ║", line));
        }
    }

    if let Some(hints) = HintCollector::collect(err) {
        out.push(format!("   ╟{PANEL_RULE}╢"));
        out.push(format!("   ║  {:<59} ║", "Hints:"));
        for hint in hints {
            let wrapped = wrap_text(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                out.push(format!("   ║    • {:<55} ║", first));
                for line in rest {
                    out.push(format!("   ║      {:<55} ║", line));
                }
            }
        }
    }

    out.push(format!("   ╚{PANEL_BORDER}╝"));
    out
}

struct HintCollector {
    hints: Vec<String>,
    has_typed_hints: bool,
}

impl HintCollector {
    fn new() -> Self {
        Self {
            hints: Vec::new(),
            has_typed_hints: false,
        }
    }

    fn collect(err: &Error) -> Option<Vec<String>> {
        let mut collector = Self::new();

        collector.collect_render_hints(err);
        collector.collect_std_io_hints(err);

        if !collector.has_typed_hints {
            collector.collect_fallback_hints(err);
        }

        if collector.hints.is_empty() {
            None
        } else {
            Some(collector.hints)
        }
    }

    fn add(&mut self, hint: impl Into<String>) {
        self.hints.push(hint.into());
    }

    fn mark_typed(&mut self) {
        self.has_typed_hints = true;
    }

    fn collect_render_hints(&mut self, err: &Error) {
        use kegg_flat::Error as FlatError;

        let Some(flat_err) = err.downcast_ref::<FlatError>() else {
            return;
        };

        self.mark_typed();

        match flat_err {
            FlatError::Io { source } => self.add_io_kind_hints(source.kind()),

            FlatError::ZeroWidth { setting } => {
                self.add(format!("Set {setting} to a positive number"));
                self.add("Defaults: label 12, line 80, sequence 60");
            }

            FlatError::LabelTooWide {
                label_width,
                line_width,
            } => {
                self.add(format!(
                    "The label column ({label_width}) leaves no room for content in a {line_width}-column line"
                ));
                self.add("Lower --label-width or raise --line-width");
            }

            FlatError::ConfigParse(_) => {
                self.add("The config file must be TOML with optional keys:");
                self.add("label_width, line_width, sequence_width (positive integers)");
            }

            FlatError::RecordParse(_) => {
                self.add("Input must be valid JSON");
                self.add("Check for trailing commas and unquoted keys near the reported line");
            }

            FlatError::RecordShape(_) => {
                self.add("Provide one record object, e.g. {\"entry\": \"C00001\", ...}");
                self.add("Or an array of record objects for a batch");
            }
        }
    }

    fn collect_std_io_hints(&mut self, err: &Error) {
        if let Some(source) = err.downcast_ref::<std::io::Error>() {
            self.mark_typed();
            self.add_io_kind_hints(source.kind());
        }
    }

    fn add_io_kind_hints(&mut self, kind: std::io::ErrorKind) {
        use std::io::ErrorKind;

        match kind {
            ErrorKind::NotFound => {
                self.add("File or directory not found");
                self.add("Check the path spelling and ensure the file exists");
            }

            ErrorKind::PermissionDenied => {
                self.add("Permission denied accessing the file");
                self.add("Check file permissions with `ls -la`");
            }

            ErrorKind::WriteZero => {
                self.add("Failed to write data (disk full?)");
                self.add("Check available disk space");
            }

            ErrorKind::BrokenPipe => {
                self.add("Broken pipe: the output consumer terminated");
                self.add("This may occur when piping to commands like `head`");
            }

            _ => {
                self.add("I/O operation failed");
                self.add("Check file path, permissions, and disk space");
            }
        }
    }

    fn collect_fallback_hints(&mut self, err: &Error) {
        let msg = error_chain_text(err);

        if msg.contains("terminal") || msg.contains("stdin") {
            self.add("Input appears to be from a terminal");
            self.add("Provide input via -i/--input or pipe JSON to stdin");
            return;
        }

        if msg.contains("no such file") || msg.contains("not found") {
            self.add("Check that the file path is correct");
            self.add("Verify the file exists and is readable");
        }
    }
}

fn error_chain_text(err: &Error) -> String {
    err.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join("\n")
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn panel_lines_have_equal_width() {
        let err = anyhow::anyhow!("a fairly long message that is going to need wrapping inside the panel");
        let panel = error_panel(&err);
        let widths: Vec<_> = panel.iter().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|&w| w == widths[0]), "{panel:#?}");
    }

    #[test]
    fn typed_hints_for_layout_errors() {
        let err = Error::new(kegg_flat::Error::LabelTooWide {
            label_width: 40,
            line_width: 30,
        })
        .context("Invalid layout settings");
        let hints = HintCollector::collect(&err).expect("hints");
        assert!(hints.iter().any(|h| h.contains("--label-width")));
    }

    #[test]
    fn fallback_hints_for_terminal_input() {
        let err = anyhow::anyhow!("No input file specified and stdin is a terminal.");
        let hints = HintCollector::collect(&err).expect("hints");
        assert!(hints[0].contains("terminal"));
    }

    #[test]
    fn causes_are_listed() {
        let err: Result<(), _> = Err(kegg_flat::Error::RecordShape("a number"));
        let err = err.context("Failed to read records").unwrap_err();
        let panel = error_panel(&err).join("\n");
        assert!(panel.contains("Caused by:"));
        assert!(panel.contains("found a number"));
    }
}
