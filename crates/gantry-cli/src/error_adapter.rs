//! Error adapter for converting GantryError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. Gantry
//! errors carry no source spans, so the adapter only contributes an error
//! code and, for rendering failures, an installation hint for Graphviz.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use gantry::GantryError;

/// Adapter wrapping a [`GantryError`] for graphical reporting.
pub struct Reportable<'a> {
    err: &'a GantryError,
}

/// Wrap an error for rendering with a miette report handler.
pub fn to_reportable(err: &GantryError) -> Reportable<'_> {
    Reportable { err }
}

impl fmt::Debug for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reportable").field("err", &self.err).finish()
    }
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.err)
    }
}

impl std::error::Error for Reportable<'_> {}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.err {
            GantryError::Io(_) => "gantry::io",
            GantryError::Graph(_) => "gantry::graph",
            GantryError::Config(_) => "gantry::config",
            GantryError::Render(_) => "gantry::render",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.err {
            GantryError::Render(_) => Some(Box::new(
                "check that Graphviz is installed and its `dot` binary is on PATH, \
                 and that the output directory exists and is writable",
            )),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_errors_get_a_graphviz_hint() {
        let err = GantryError::Render("exec failed".to_string());
        let reportable = to_reportable(&err);

        assert_eq!(reportable.to_string(), "Render error: exec failed");
        assert!(reportable.help().unwrap().to_string().contains("Graphviz"));
        assert_eq!(reportable.code().unwrap().to_string(), "gantry::render");
    }

    #[test]
    fn test_config_errors_have_no_hint() {
        let err = GantryError::Config("bad color".to_string());
        let reportable = to_reportable(&err);

        assert!(reportable.help().is_none());
        assert_eq!(reportable.code().unwrap().to_string(), "gantry::config");
    }
}
