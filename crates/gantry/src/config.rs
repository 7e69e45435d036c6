//! Configuration types for Gantry diagram rendering.
//!
//! This module provides configuration structures that control the global
//! Graphviz attributes of a rendered diagram. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining graph and style settings.
//! - [`GraphConfig`] - Global layout attributes (font size, padding, splines, direction).
//! - [`StyleConfig`] - Visual styling options such as background color.
//!
//! # Example
//!
//! ```
//! # use gantry::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::Deserialize;

use gantry_core::color::Color;

/// Top-level application configuration combining graph and style settings.
///
/// Groups [`GraphConfig`] and [`StyleConfig`] into a single configuration
/// root.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Graph attribute configuration section.
    #[serde(default)]
    graph: GraphConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Returns the graph attribute configuration.
    pub fn graph(&self) -> &GraphConfig {
        &self.graph
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Layout direction of the rendered diagram, mapped to Graphviz `rankdir`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// Left to right (`rankdir=LR`).
    #[default]
    LeftToRight,
    /// Top to bottom (`rankdir=TB`).
    TopToBottom,
    /// Right to left (`rankdir=RL`).
    RightToLeft,
    /// Bottom to top (`rankdir=BT`).
    BottomToTop,
}

impl Direction {
    /// The Graphviz `rankdir` attribute value.
    pub fn as_dot_str(self) -> &'static str {
        match self {
            Direction::LeftToRight => "LR",
            Direction::TopToBottom => "TB",
            Direction::RightToLeft => "RL",
            Direction::BottomToTop => "BT",
        }
    }
}

/// Global Graphviz graph attributes.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphConfig {
    /// Title font size in points.
    #[serde(default = "default_fontsize")]
    fontsize: u32,

    /// Padding around the drawing, in inches.
    #[serde(default = "default_pad")]
    pad: f64,

    /// Edge routing style (Graphviz `splines` attribute).
    #[serde(default = "default_splines")]
    splines: String,

    /// Layout direction.
    #[serde(default)]
    direction: Direction,
}

fn default_fontsize() -> u32 {
    20
}

fn default_pad() -> f64 {
    0.5
}

fn default_splines() -> String {
    "spline".to_string()
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            fontsize: default_fontsize(),
            pad: default_pad(),
            splines: default_splines(),
            direction: Direction::default(),
        }
    }
}

impl GraphConfig {
    /// Returns the title font size in points.
    pub fn fontsize(&self) -> u32 {
        self.fontsize
    }

    /// Returns the padding around the drawing, in inches.
    pub fn pad(&self) -> f64 {
        self.pad
    }

    /// Returns the edge routing style.
    pub fn splines(&self) -> &str {
        &self.splines
    }

    /// Returns the layout direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

/// Visual styling configuration for rendered diagrams.
///
/// Controls appearance options such as background color. Fields that are
/// not set fall back to renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Default background [`Color`] for diagrams, as a color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_ref()
            .map(|color| Color::new(color))
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_original_graph_attrs() {
        let config = AppConfig::default();
        assert_eq!(config.graph().fontsize(), 20);
        assert_eq!(config.graph().pad(), 0.5);
        assert_eq!(config.graph().splines(), "spline");
        assert_eq!(config.graph().direction(), Direction::LeftToRight);
        assert_eq!(config.style().background_color().unwrap(), None);
    }

    #[test]
    fn test_partial_toml_uses_field_defaults() {
        let config: AppConfig = toml::from_str(
            r##"
            [graph]
            fontsize = 14

            [style]
            background_color = "#fafafa"
            "##,
        )
        .unwrap();

        assert_eq!(config.graph().fontsize(), 14);
        assert_eq!(config.graph().splines(), "spline");
        let background = config.style().background_color().unwrap().unwrap();
        assert_eq!(background.as_str(), "#fafafa");
    }

    #[test]
    fn test_direction_deserializes_kebab_case() {
        let config: AppConfig = toml::from_str(
            r#"
            [graph]
            direction = "top-to-bottom"
            "#,
        )
        .unwrap();
        assert_eq!(config.graph().direction(), Direction::TopToBottom);
        assert_eq!(config.graph().direction().as_dot_str(), "TB");
    }

    #[test]
    fn test_invalid_background_color_is_reported() {
        let config: AppConfig = toml::from_str(
            r#"
            [style]
            background_color = "no-such-color"
            "#,
        )
        .unwrap();
        let err = config.style().background_color().unwrap_err();
        assert!(err.contains("no-such-color"));
    }
}
