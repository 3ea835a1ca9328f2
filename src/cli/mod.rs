//! Command-line interface module
//!
//! Implements all CLI commands using clap:
//! - show: Print a thread from a JSON file or stdin
//! - config init: Initialize configuration file

pub mod config;
pub mod show;
