//! Gantry - declarative architecture diagrams rendered through Graphviz.
//!
//! A diagram is described in memory (nodes, nested clusters, styled edges),
//! translated to DOT, and handed to the Graphviz `dot` engine for layout
//! and rasterization. The built-in [`pipeline`] module declares the CI/CD
//! deployment diagram this tool ships for.

pub mod config;
pub mod pipeline;

mod dot;
mod error;

pub use gantry_core::{color, graph, icon, style};

pub use error::GantryError;

use std::{fs, path::Path, str::FromStr};

use log::{debug, info};

use graphviz_rust::{
    cmd::{CommandArg, Format},
    printer::PrinterContext,
};

use config::AppConfig;
use graph::Diagram;

/// Output format of a rendered diagram file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Rasterized PNG (the default; requires the Graphviz `dot` binary).
    #[default]
    Png,
    /// SVG (requires the Graphviz `dot` binary).
    Svg,
    /// The DOT source itself, written without invoking Graphviz.
    Dot,
}

impl OutputFormat {
    /// The conventional file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Dot => "dot",
        }
    }

    /// The Graphviz output format, or `None` for formats that do not
    /// invoke Graphviz.
    fn graphviz_format(self) -> Option<Format> {
        match self {
            OutputFormat::Png => Some(Format::Png),
            OutputFormat::Svg => Some(Format::Svg),
            OutputFormat::Dot => None,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            "dot" => Ok(OutputFormat::Dot),
            other => Err(format!(
                "unsupported output format `{other}` (expected png, svg, or dot)"
            )),
        }
    }
}

/// Renderer for Gantry diagrams.
///
/// This turns a diagram description into DOT and renders it to a file
/// through the Graphviz engine.
///
/// # Examples
///
/// ```rust,no_run
/// use gantry::{DiagramRenderer, OutputFormat, config::AppConfig};
/// use gantry::pipeline::{PipelineOptions, build_pipeline};
///
/// let diagram = build_pipeline(&PipelineOptions::default())
///     .expect("Failed to build diagram");
///
/// // With custom config
/// let config = AppConfig::default();
/// let renderer = DiagramRenderer::new(config);
///
/// renderer
///     .render_to_file(&diagram, "docs/architecture.png", OutputFormat::Png)
///     .expect("Failed to render");
///
/// // Or use default config
/// let renderer = DiagramRenderer::default();
/// ```
#[derive(Default)]
pub struct DiagramRenderer {
    config: AppConfig,
}

impl DiagramRenderer {
    /// Create a new renderer with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration with graph and style settings
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Emit the DOT source for a diagram.
    ///
    /// This is the exact text handed to Graphviz when rendering, and is
    /// also what [`OutputFormat::Dot`] writes to disk.
    ///
    /// # Errors
    ///
    /// Returns `GantryError` if the configuration holds an invalid
    /// background color.
    pub fn emit_dot(&self, diagram: &Diagram) -> Result<String, GantryError> {
        let graph = dot::to_dot_graph(diagram, &self.config)?;
        Ok(graphviz_rust::print(graph, &mut PrinterContext::default()))
    }

    /// Render a diagram to a single file at `path`.
    ///
    /// PNG and SVG formats execute the external Graphviz `dot` engine;
    /// the DOT format writes the generated source directly. Exactly one
    /// file is written on success, overwriting any previous run's output.
    /// The parent directory must already exist; it is not created.
    ///
    /// # Arguments
    ///
    /// * `diagram` - The diagram description to render
    /// * `path` - Output file path
    /// * `format` - Output format
    ///
    /// # Errors
    ///
    /// Returns `GantryError` if the output path is not writable, or if the
    /// Graphviz engine is unavailable or fails to lay out the graph. No
    /// retries or fallbacks are attempted.
    pub fn render_to_file(
        &self,
        diagram: &Diagram,
        path: impl AsRef<Path>,
        format: OutputFormat,
    ) -> Result<(), GantryError> {
        let path = path.as_ref();
        info!(
            output_path = path.display().to_string(),
            format = format.extension();
            "Rendering diagram"
        );

        let graph = dot::to_dot_graph(diagram, &self.config)?;

        match format.graphviz_format() {
            None => {
                let source = graphviz_rust::print(graph, &mut PrinterContext::default());
                fs::write(path, source)?;
            }
            Some(graphviz_format) => {
                let output = path.to_str().ok_or_else(|| {
                    GantryError::Render(format!(
                        "output path is not valid UTF-8: {}",
                        path.display()
                    ))
                })?;

                graphviz_rust::exec(
                    graph,
                    &mut PrinterContext::default(),
                    vec![
                        CommandArg::Format(graphviz_format),
                        CommandArg::Output(output.to_string()),
                    ],
                )
                .map_err(|err| {
                    GantryError::Render(format!("graphviz `dot` execution failed: {err}"))
                })?;
            }
        }

        debug!(output_path = path.display().to_string(); "Diagram rendered");
        Ok(())
    }
}
