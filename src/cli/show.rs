use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::config::{self, RenderMode};
use crate::display::{should_use_colors, ColorChoice, ThreadPrinter};
use crate::error::{Result, ThreadPrintError};
use crate::models::MessageList;

/// Print a thread read from a JSON file (or stdin)
pub fn run(
    input: Option<PathBuf>,
    config_path: Option<PathBuf>,
    mode: Option<RenderMode>,
    width: Option<usize>,
    banner: bool,
    color: ColorChoice,
) -> Result<()> {
    let mut config = config::load_or_default(config_path.as_deref())?;

    // Command-line flags win over the config file
    if let Some(mode) = mode {
        config.display.mode = mode;
    }
    if let Some(width) = width {
        config.display.width = width;
    }
    if banner {
        config.display.show_banner = true;
    }
    config::validate(&config)?;

    let json = read_input(input.as_deref())?;
    let messages = MessageList::from_json(&json)?;
    tracing::debug!(messages = messages.len(), "loaded thread");

    // The banner, when enabled, is printed even for an empty thread
    let printer = ThreadPrinter::new(&config.display, should_use_colors(color));
    printer.print_thread(&messages)?;

    if messages.is_empty() {
        println!("No messages to show.");
    }

    Ok(())
}

/// Read the whole input, treating a missing path or "-" as stdin
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path).map_err(|e| {
            ThreadPrintError::Input(format!("Cannot read '{}': {}", path.display(), e))
        }),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}
