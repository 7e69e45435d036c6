//! Edge line-style definitions.
//!
//! Follows Graphviz terminology for edge `style` attribute values.

/// Line pattern for a diagram edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EdgeStyle {
    /// A continuous line (the Graphviz default).
    #[default]
    Solid,
    /// A dashed line, used for asynchronous or out-of-band interactions.
    Dashed,
    /// A dotted line, used for weak associations.
    Dotted,
}

impl EdgeStyle {
    /// The Graphviz `style` attribute value for this pattern.
    pub fn as_dot_str(self) -> &'static str {
        match self {
            EdgeStyle::Solid => "solid",
            EdgeStyle::Dashed => "dashed",
            EdgeStyle::Dotted => "dotted",
        }
    }
}
