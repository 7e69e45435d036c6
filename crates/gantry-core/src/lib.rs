//! Gantry Core Types and Definitions
//!
//! This crate provides the foundational types for describing Gantry
//! architecture diagrams. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Icons**: Provider icon categories and their visual styling ([`icon::Icon`])
//! - **Styles**: Edge line-style definitions ([`style::EdgeStyle`])
//! - **Graph**: The node/cluster/edge diagram model ([`graph::Diagram`])

pub mod color;
pub mod graph;
pub mod icon;
pub mod style;
