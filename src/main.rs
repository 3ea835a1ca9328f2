mod cli;
mod config;
mod display;
mod error;
mod footnotes;
mod models;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::RenderMode;
use crate::display::ColorChoice;

#[derive(Parser)]
#[command(name = "threadprint")]
#[command(about = "Pretty-print chat thread messages with footnoted citations", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a thread from a JSON message list
    Show {
        /// JSON file with the messages, newest first (reads stdin if omitted or "-")
        input: Option<PathBuf>,

        /// Path to config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// How to render message bodies
        #[arg(long, value_enum)]
        mode: Option<RenderMode>,

        /// Column width for message bodies
        #[arg(long)]
        width: Option<usize>,

        /// Print a "Thread Messages" banner first
        #[arg(long)]
        banner: bool,

        /// When to use colors
        #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
        color: ColorChoice,
    },
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize threadprint.toml configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("threadprint=warn")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show {
            input,
            config,
            mode,
            width,
            banner,
            color,
        } => cli::show::run(input, config, mode, width, banner, color),
        Commands::Config { command } => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
