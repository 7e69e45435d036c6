//! CLI logic for the Gantry diagram tool.
//!
//! This module contains the core CLI logic for the Gantry diagram tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::str::FromStr;

use log::info;

use gantry::{
    DiagramRenderer, GantryError, OutputFormat,
    pipeline::{PipelineOptions, build_pipeline},
};

/// Run the Gantry CLI application
///
/// This function builds the pipeline diagram selected by the arguments
/// and renders it to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `GantryError` for:
/// - Configuration loading errors
/// - Unsupported output formats
/// - Rendering errors (including a missing Graphviz engine)
pub fn run(args: &Args) -> Result<(), GantryError> {
    info!(
        output_path = args.output,
        format = args.format;
        "Generating pipeline diagram"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    let format = OutputFormat::from_str(&args.format).map_err(GantryError::Config)?;

    // Apply topology toggles and overrides
    let mut options = PipelineOptions {
        state_storage: !args.no_state_storage,
        runtime_node: !args.no_runtime_node,
        ..PipelineOptions::default()
    };
    if let Some(title) = &args.title {
        options.title = title.clone();
    }
    if let Some(resource_group) = &args.resource_group {
        options.resource_group = resource_group.clone();
    }

    // Build and render the diagram
    let diagram = build_pipeline(&options)?;
    let renderer = DiagramRenderer::new(app_config);
    renderer.render_to_file(&diagram, &args.output, format)?;

    info!(output_file = args.output; "Diagram exported successfully");

    Ok(())
}
