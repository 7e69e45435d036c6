//! Command-line argument definitions for the Gantry CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. A bare invocation renders the full default pipeline
//! diagram; every argument only adjusts output location, format, topology
//! toggles, configuration, or logging.

use clap::Parser;

/// Command-line arguments for the Gantry diagram tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output file
    #[arg(short, long, default_value = "docs/architecture.png")]
    pub output: String,

    /// Output format (png, svg, dot)
    #[arg(short, long, default_value = "png")]
    pub format: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Omit the Terraform-state storage account
    #[arg(long)]
    pub no_state_storage: bool,

    /// Omit the application-runtime node
    #[arg(long)]
    pub no_runtime_node: bool,

    /// Override the diagram title
    #[arg(long)]
    pub title: Option<String>,

    /// Override the Azure resource group name
    #[arg(long)]
    pub resource_group: Option<String>,
}
