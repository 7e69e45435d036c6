//! The diagram graph model.
//!
//! This module provides the in-memory description of a diagram: labeled
//! nodes with provider icons, directed styled edges, and named clusters
//! that group nodes into nested organizational boundaries.
//!
//! # Architecture
//!
//! The model is arena-based. A [`Diagram`] owns all nodes and clusters and
//! hands out index handles ([`NodeId`], [`ClusterId`]) when they are added.
//! Because a handle can only be obtained by adding the element first, an
//! edge cannot reference a node that was not declared earlier, and cluster
//! nesting forms a tree by construction: a child cluster is attached to an
//! already existing parent and is never re-parented afterwards.
//!
//! Elements are added once and never mutated; the diagram is a write-once
//! description consumed by the DOT emitter.

use std::collections::HashMap;

use thiserror::Error;

use crate::{color::Color, icon::Icon, style::EdgeStyle};

/// Errors raised by checked [`Diagram`] operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("unknown node id {0}")]
    UnknownNode(usize),

    #[error("unknown cluster id {0}")]
    UnknownCluster(usize),

    #[error("node `{0}` is already placed in a cluster")]
    NodeAlreadyPlaced(String),
}

/// Handle to a node owned by a [`Diagram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// The arena index of this node, stable for the lifetime of the diagram.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle to a cluster owned by a [`Diagram`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClusterId(usize);

impl ClusterId {
    /// The arena index of this cluster, stable for the lifetime of the diagram.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A labeled graphical symbol representing one actor or resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    label: String,
    icon: Icon,
}

impl Node {
    /// The display label. May contain newlines for multi-line labels.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The provider icon category of this node.
    pub fn icon(&self) -> Icon {
        self.icon
    }
}

/// A named grouping of nodes and nested clusters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    title: String,
    nodes: Vec<NodeId>,
    children: Vec<ClusterId>,
}

impl Cluster {
    fn new(title: impl Into<String>) -> Self {
        Cluster {
            title: title.into(),
            nodes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The cluster title rendered on its bounding box.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Member nodes, in placement order.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Nested child clusters, in creation order.
    pub fn children(&self) -> &[ClusterId] {
        &self.children
    }
}

/// A directed, optionally labeled and styled connection between two nodes.
///
/// Edges are built with a fluent API and then handed to
/// [`Diagram::connect`]:
///
/// ```
/// use gantry_core::color::Color;
/// use gantry_core::graph::{Diagram, Edge};
/// use gantry_core::icon::Icon;
/// use gantry_core::style::EdgeStyle;
///
/// let mut diagram = Diagram::new("example");
/// let ci = diagram.add_node("CI", Icon::Pipeline);
/// let app = diagram.add_node("App", Icon::WebApp);
///
/// diagram
///     .connect(
///         Edge::new(ci, app)
///             .with_label("Deploy")
///             .with_style(EdgeStyle::Dashed)
///             .with_color(Color::new("blue").unwrap()),
///     )
///     .unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    label: Option<String>,
    style: Option<EdgeStyle>,
    color: Option<Color>,
}

impl Edge {
    /// Creates an unlabeled solid edge from `source` to `target`.
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Edge {
            source,
            target,
            label: None,
            style: None,
            color: None,
        }
    }

    /// Sets the edge label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the line style.
    pub fn with_style(mut self, style: EdgeStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the line color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// The source node handle.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// The target node handle.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// The label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// The line style, if one was set.
    pub fn style(&self) -> Option<EdgeStyle> {
        self.style
    }

    /// The line color, if one was set.
    pub fn color(&self) -> Option<&Color> {
        self.color.as_ref()
    }
}

/// The root container of a diagram description.
///
/// Holds the title, all nodes and clusters, the edge list, and the
/// root-level cluster order. See the module documentation for the
/// ownership model.
#[derive(Debug, Default)]
pub struct Diagram {
    title: String,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    clusters: Vec<Cluster>,
    roots: Vec<ClusterId>,
    placements: HashMap<NodeId, ClusterId>,
}

impl Diagram {
    /// Creates an empty diagram with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Diagram {
            title: title.into(),
            ..Diagram::default()
        }
    }

    /// The diagram title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Adds a node and returns its handle.
    pub fn add_node(&mut self, label: impl Into<String>, icon: Icon) -> NodeId {
        self.nodes.push(Node {
            label: label.into(),
            icon,
        });
        NodeId(self.nodes.len() - 1)
    }

    /// Adds a root-level cluster and returns its handle.
    pub fn add_cluster(&mut self, title: impl Into<String>) -> ClusterId {
        let id = ClusterId(self.clusters.len());
        self.clusters.push(Cluster::new(title));
        self.roots.push(id);
        id
    }

    /// Adds a cluster nested inside `parent` and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownCluster`] if `parent` does not belong
    /// to this diagram.
    pub fn add_child_cluster(
        &mut self,
        parent: ClusterId,
        title: impl Into<String>,
    ) -> Result<ClusterId, GraphError> {
        if parent.0 >= self.clusters.len() {
            return Err(GraphError::UnknownCluster(parent.0));
        }

        let id = ClusterId(self.clusters.len());
        self.clusters.push(Cluster::new(title));
        self.clusters[parent.0].children.push(id);
        Ok(id)
    }

    /// Places a node inside a cluster.
    ///
    /// A node belongs to at most one cluster; nodes never placed stay at
    /// the diagram's top level.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownCluster`] or [`GraphError::UnknownNode`]
    /// for handles that do not belong to this diagram, and
    /// [`GraphError::NodeAlreadyPlaced`] if the node is already a member of
    /// some cluster.
    pub fn place(&mut self, cluster: ClusterId, node: NodeId) -> Result<(), GraphError> {
        if cluster.0 >= self.clusters.len() {
            return Err(GraphError::UnknownCluster(cluster.0));
        }
        if node.0 >= self.nodes.len() {
            return Err(GraphError::UnknownNode(node.0));
        }
        if self.placements.contains_key(&node) {
            return Err(GraphError::NodeAlreadyPlaced(
                self.nodes[node.0].label.clone(),
            ));
        }

        self.placements.insert(node, cluster);
        self.clusters[cluster.0].nodes.push(node);
        Ok(())
    }

    /// Adds a directed edge between two previously declared nodes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if either endpoint handle does
    /// not belong to this diagram.
    pub fn connect(&mut self, edge: Edge) -> Result<(), GraphError> {
        for endpoint in [edge.source, edge.target] {
            if endpoint.0 >= self.nodes.len() {
                return Err(GraphError::UnknownNode(endpoint.0));
            }
        }

        self.edges.push(edge);
        Ok(())
    }

    /// Returns the node for the given handle, if it belongs to this diagram.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Returns an iterator over all nodes with their handles, in declaration order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }

    /// The total number of nodes.
    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    /// All edges in declaration order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Returns the cluster for the given handle, if it belongs to this diagram.
    pub fn cluster(&self, id: ClusterId) -> Option<&Cluster> {
        self.clusters.get(id.0)
    }

    /// The total number of clusters, at any nesting depth.
    pub fn clusters_count(&self) -> usize {
        self.clusters.len()
    }

    /// Root-level cluster handles, in creation order.
    pub fn root_clusters(&self) -> impl Iterator<Item = ClusterId> + '_ {
        self.roots.iter().copied()
    }

    /// The cluster a node is placed in, or `None` for top-level nodes.
    pub fn cluster_of(&self, node: NodeId) -> Option<ClusterId> {
        self.placements.get(&node).copied()
    }

    /// Handles of nodes not placed in any cluster, in declaration order.
    pub fn unclustered_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len())
            .map(NodeId)
            .filter(|id| !self.placements.contains_key(id))
    }
}
