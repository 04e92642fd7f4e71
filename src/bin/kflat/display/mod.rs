mod banner;
mod error;
mod progress;
mod tables;

pub use banner::{banner_for_help, print_banner};
pub use error::print_error;
pub use progress::Progress;
pub use tables::{print_batch_summary, print_field_order, print_record_types};

/// Whether decorations (banner, spinners, summaries) go to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Context {
    pub interactive: bool,
}

impl Context {
    /// Decorations are drawn only for a terminal stderr and a command that
    /// has not been asked to stay quiet.
    pub fn new(quiet: bool) -> Self {
        Self {
            interactive: !quiet && crate::io::stderr_is_tty(),
        }
    }
}
