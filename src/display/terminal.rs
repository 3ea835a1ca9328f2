//! Color decision from `--color`, environment, and TTY status

use std::io::IsTerminal;

/// When to emit ANSI styles
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorChoice {
    /// Follow NO_COLOR / CLICOLOR_FORCE / CLICOLOR, then TTY detection
    #[default]
    Auto,
    Always,
    Never,
}

/// Color-related environment snapshot
#[derive(Debug, Clone, Default)]
struct ColorEnv {
    no_color: bool,
    clicolor_force: Option<String>,
    clicolor: Option<String>,
}

impl ColorEnv {
    fn from_process() -> Self {
        Self {
            no_color: std::env::var_os("NO_COLOR").is_some(),
            clicolor_force: std::env::var("CLICOLOR_FORCE").ok(),
            clicolor: std::env::var("CLICOLOR").ok(),
        }
    }

    /// NO_COLOR (https://no-color.org/) wins, then CLICOLOR_FORCE, then CLICOLOR=0
    fn decide(&self, is_tty: bool) -> bool {
        if self.no_color {
            return false;
        }
        if self.clicolor_force.as_deref().is_some_and(|v| v != "0") {
            return true;
        }
        if self.clicolor.as_deref() == Some("0") {
            return false;
        }
        is_tty
    }
}

/// Resolve whether stdout output should carry colors
pub fn should_use_colors(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => ColorEnv::from_process().decide(std::io::stdout().is_terminal()),
    }
}
