//! Error types for Gantry operations.
//!
//! This module provides the main error type [`GantryError`] which wraps
//! the error conditions that can occur while building and rendering a
//! diagram.

use std::io;

use thiserror::Error;

use gantry_core::graph::GraphError;

/// The main error type for Gantry operations.
///
/// Rendering failures originate in the external Graphviz engine (missing
/// `dot` binary, layout failure, unwritable output) and are surfaced as
/// [`GantryError::Render`] without local recovery.
#[derive(Debug, Error)]
pub enum GantryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Render error: {0}")]
    Render(String),
}
