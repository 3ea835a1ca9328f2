//! Terminal display module
//!
//! Prints chat threads with role headers, rendered bodies, and citations.
//! Colors follow NO_COLOR / CLICOLOR conventions and TTY detection.

mod formatter;
mod printer;
mod terminal;
mod wrap;

pub use printer::ThreadPrinter;
pub use terminal::{should_use_colors, ColorChoice};
