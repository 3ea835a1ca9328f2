use serde::{Deserialize, Serialize};

/// Narrowest body width accepted from configuration
pub const MIN_WIDTH: usize = 20;

/// Threadprint configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display settings
    pub display: Display,
}

/// How message bodies are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Word-wrapped plain text
    Plain,
    /// Markdown rendered with terminal styles
    Markdown,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Display {
    /// Body rendering strategy
    pub mode: RenderMode,

    /// Column width for message bodies
    pub width: usize,

    /// Width of the role separator and banner rules
    pub separator_width: usize,

    /// Print a "Thread Messages" banner before the first message
    pub show_banner: bool,
}

impl Default for Display {
    fn default() -> Self {
        Self {
            mode: RenderMode::Markdown,
            width: 80,
            separator_width: 60,
            show_banner: false,
        }
    }
}
