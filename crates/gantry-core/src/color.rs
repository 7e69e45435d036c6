//! Color handling for Gantry diagrams
//!
//! This module provides the [`Color`] type which validates CSS color strings
//! through the `DynamicColor` type from the color crate while preserving the
//! original spelling for the Graphviz attribute output.

use std::{fmt, str::FromStr};

use color::DynamicColor;

/// A validated color, kept in its original CSS spelling.
///
/// Graphviz accepts color names and `#rrggbb` values directly, so the
/// original string is what ends up in the emitted DOT attributes. Parsing
/// through the color crate up front means an invalid color fails at
/// construction time rather than surfacing as a Graphviz layout error.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Color {
    spelling: String,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "blue", "darkgreen", etc.
    ///
    /// # Errors
    ///
    /// Returns an error message if the string is not a valid CSS color.
    ///
    /// # Examples
    ///
    /// ```
    /// use gantry_core::color::Color;
    ///
    /// let red = Color::new("#ff0000").unwrap();
    /// let blue = Color::new("blue").unwrap();
    /// assert!(Color::new("not-a-color").is_err());
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        match DynamicColor::from_str(color_str) {
            Ok(_) => Ok(Self {
                spelling: color_str.to_string(),
            }),
            Err(err) => Err(format!("invalid color `{color_str}`: {err}")),
        }
    }

    /// Returns the color as it was written, suitable for a DOT attribute value.
    pub fn as_str(&self) -> &str {
        &self.spelling
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.spelling)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("black").expect("'black' is a valid CSS color")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_color() {
        let color = Color::new("darkgreen").unwrap();
        assert_eq!(color.as_str(), "darkgreen");
        assert_eq!(color.to_string(), "darkgreen");
    }

    #[test]
    fn test_hex_color_preserves_spelling() {
        let color = Color::new("#0078D4").unwrap();
        assert_eq!(color.as_str(), "#0078D4");
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let err = Color::new("definitely-not-a-color").unwrap_err();
        assert!(err.contains("definitely-not-a-color"));
    }

    #[test]
    fn test_default_is_black() {
        assert_eq!(Color::default().as_str(), "black");
    }
}
