//! Translation of a [`Diagram`] into a Graphviz DOT graph.
//!
//! The emitter walks the diagram description and produces a
//! [`dot_structures::Graph`]: one `digraph` whose global attributes come
//! from [`AppConfig`], whose clusters become nested `subgraph cluster_N`
//! blocks, and whose nodes carry shape and palette attributes derived
//! from their [`Icon`](gantry_core::icon::Icon) category.
//!
//! Node identifiers are synthesized from the diagram's arena indices
//! (`n0`, `n1`, …), so only label text ever needs escaping.

use dot_generator::{attr, id};
use dot_structures::{
    Attribute, Edge as DotEdge, EdgeTy, Graph, GraphAttributes, Id, Node as DotNode,
    NodeId as DotNodeId, Stmt, Subgraph, Vertex,
};

use gantry_core::graph::{ClusterId, Diagram, Edge, Node, NodeId};

use crate::{config::AppConfig, error::GantryError};

/// Builds the DOT graph for a diagram under the given configuration.
///
/// # Errors
///
/// Returns [`GantryError::Config`] if the configured background color is
/// not a valid color string.
pub(crate) fn to_dot_graph(diagram: &Diagram, config: &AppConfig) -> Result<Graph, GantryError> {
    let background = config
        .style()
        .background_color()
        .map_err(GantryError::Config)?
        .map(|color| color.as_str().to_string())
        .unwrap_or_else(|| "white".to_string());

    let mut stmts = vec![
        Stmt::GAttribute(GraphAttributes::Graph(vec![
            quoted("label", diagram.title()),
            attr!("labelloc", "t"),
            plain("fontsize", config.graph().fontsize().to_string()),
            quoted("bgcolor", &background),
            plain("pad", config.graph().pad().to_string()),
            quoted("splines", config.graph().splines()),
            plain("rankdir", config.graph().direction().as_dot_str()),
        ])),
        Stmt::GAttribute(GraphAttributes::Node(vec![
            quoted("fontname", "Helvetica"),
            attr!("style", "filled"),
        ])),
        Stmt::GAttribute(GraphAttributes::Edge(vec![attr!("fontsize", "12")])),
    ];

    for cluster_id in diagram.root_clusters() {
        stmts.push(Stmt::Subgraph(cluster_subgraph(diagram, cluster_id)));
    }

    for node_id in diagram.unclustered_nodes() {
        stmts.push(node_stmt(diagram, node_id));
    }

    for edge in diagram.edges() {
        stmts.push(Stmt::Edge(dot_edge(edge)));
    }

    Ok(Graph::DiGraph {
        id: id!("gantry"),
        strict: false,
        stmts,
    })
}

/// Recursively builds the `subgraph cluster_N` block for a cluster.
fn cluster_subgraph(diagram: &Diagram, cluster_id: ClusterId) -> Subgraph {
    // Cluster handles are produced by the diagram being walked, so the
    // lookup cannot fail.
    let cluster = diagram
        .cluster(cluster_id)
        .expect("cluster handle belongs to this diagram");

    let mut stmts = vec![
        Stmt::Attribute(quoted("label", cluster.title())),
        Stmt::Attribute(attr!("style", "rounded")),
        Stmt::Attribute(attr!("color", "gray60")),
        Stmt::Attribute(plain("fontsize", "14")),
    ];

    for node_id in cluster.nodes() {
        stmts.push(node_stmt(diagram, *node_id));
    }

    for child_id in cluster.children() {
        stmts.push(Stmt::Subgraph(cluster_subgraph(diagram, *child_id)));
    }

    Subgraph {
        id: Id::Plain(format!("cluster_{}", cluster_id.index())),
        stmts,
    }
}

fn node_stmt(diagram: &Diagram, node_id: NodeId) -> Stmt {
    let node = diagram
        .node(node_id)
        .expect("node handle belongs to this diagram");
    Stmt::Node(dot_node(node_id, node))
}

fn dot_node(node_id: NodeId, node: &Node) -> DotNode {
    let icon = node.icon();
    DotNode {
        id: dot_node_id(node_id),
        attributes: vec![
            quoted("label", node.label()),
            plain("shape", icon.shape()),
            quoted("fillcolor", icon.fill_color()),
            plain("fontcolor", icon.font_color()),
        ],
    }
}

fn dot_edge(edge: &Edge) -> DotEdge {
    let mut attributes = Vec::new();
    if let Some(label) = edge.label() {
        attributes.push(quoted("label", label));
    }
    if let Some(style) = edge.style() {
        attributes.push(plain("style", style.as_dot_str()));
    }
    if let Some(color) = edge.color() {
        attributes.push(quoted("color", color.as_str()));
    }

    DotEdge {
        ty: EdgeTy::Pair(
            Vertex::N(dot_node_id(edge.source())),
            Vertex::N(dot_node_id(edge.target())),
        ),
        attributes,
    }
}

fn dot_node_id(node_id: NodeId) -> DotNodeId {
    DotNodeId(Id::Plain(format!("n{}", node_id.index())), None)
}

/// An attribute whose value is a plain DOT identifier (no quoting needed).
fn plain(key: &str, value: impl Into<String>) -> Attribute {
    Attribute(Id::Plain(key.to_string()), Id::Plain(value.into()))
}

/// An attribute whose value is a quoted, escaped DOT string.
fn quoted(key: &str, value: &str) -> Attribute {
    Attribute(
        Id::Plain(key.to_string()),
        Id::Escaped(format!("\"{}\"", escape(value))),
    )
}

/// Escapes text for a DOT double-quoted string: backslashes, quotes, and
/// newlines (newlines become the `\n` line-break escape Graphviz expects
/// in multi-line labels).
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
