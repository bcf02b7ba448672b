//! Diagram output types
//!
//! Nodes and edges in the shape the editor's graph canvas consumes.

use serde::{Deserialize, Serialize};

/// Unique identifier for a node
pub type NodeId = String;

/// Unique identifier for an edge
pub type EdgeId = String;

/// What a node represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Task,
    Agent,
    Tool,
}

/// Position on the canvas
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Display data attached to a node
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    /// Text shown on the node. `None` for a manager whose agent record is missing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Underlying entity name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Set on the manager node only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager: Option<bool>,
    /// Encoded icon payload; empty when no icon is known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_data: Option<String>,
}

impl NodeData {
    /// Whether this node is the manager agent
    pub fn is_manager(&self) -> bool {
        self.manager.unwrap_or(false)
    }
}

/// A positioned node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagramNode {
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub id: NodeId,
    pub position: Position,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub draggable: Option<bool>,
    pub data: NodeData,
}

/// An edge between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiagramEdge {
    pub id: EdgeId,
    pub source: NodeId,
    pub target: NodeId,
}

impl DiagramEdge {
    /// Create an edge with the conventional `e-{source}-{target}` id
    pub fn between(source: impl Into<String>, target: impl Into<String>) -> Self {
        let source = source.into();
        let target = target.into();
        Self {
            id: format!("e-{}-{}", source, target),
            source,
            target,
        }
    }
}

/// A laid-out diagram
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramState {
    pub nodes: Vec<DiagramNode>,
    pub edges: Vec<DiagramEdge>,
}

impl DiagramState {
    /// Find a node by ID
    pub fn find_node(&self, id: &str) -> Option<&DiagramNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Find an edge by ID
    pub fn find_edge(&self, id: &str) -> Option<&DiagramEdge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Get edges going out of a node
    pub fn outgoing_edges<'a>(
        &'a self,
        node_id: &'a str,
    ) -> impl Iterator<Item = &'a DiagramEdge> + 'a {
        self.edges.iter().filter(move |e| e.source == node_id)
    }

    /// Get edges coming into a node
    pub fn incoming_edges<'a>(
        &'a self,
        node_id: &'a str,
    ) -> impl Iterator<Item = &'a DiagramEdge> + 'a {
        self.edges.iter().filter(move |e| e.target == node_id)
    }

    /// Nodes of one kind, in placement order
    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &DiagramNode> + '_ {
        self.nodes.iter().filter(move |n| n.kind == kind)
    }
}
