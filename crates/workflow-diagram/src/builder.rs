//! Fluent builder for diagram output
//!
//! Accumulates nodes and edges in placement order and applies the
//! per-kind labeling conventions.

use crate::constants::labels;
use crate::types::{DiagramEdge, DiagramNode, DiagramState, NodeData, NodeKind, Position};

/// Fluent builder for constructing diagrams
///
/// # Example
///
/// ```ignore
/// let diagram = DiagramBuilder::new()
///     .add_task("t1", Position::new(0.0, 0.0), "Summarize...")
///     .add_agent("a1", Position::new(0.0, 150.0), "Writer", "")
///     .connect("t1", "a1")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct DiagramBuilder {
    nodes: Vec<DiagramNode>,
    edges: Vec<DiagramEdge>,
}

impl DiagramBuilder {
    /// Create a new empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task node; `name` mirrors the label
    pub fn add_task(
        mut self,
        id: impl Into<String>,
        position: Position,
        label: impl Into<String>,
    ) -> Self {
        let label = label.into();
        self.nodes.push(DiagramNode {
            kind: NodeKind::Task,
            id: id.into(),
            position,
            draggable: None,
            data: NodeData {
                label: Some(label.clone()),
                name: Some(label),
                manager: None,
                icon_data: None,
            },
        });
        self
    }

    /// Add the manager agent node
    ///
    /// `name` is `None` when the configured manager has no agent record.
    pub fn add_manager(
        mut self,
        id: impl Into<String>,
        position: Position,
        name: Option<String>,
    ) -> Self {
        self.nodes.push(DiagramNode {
            kind: NodeKind::Agent,
            id: id.into(),
            position,
            draggable: Some(true),
            data: NodeData {
                label: name.clone(),
                name,
                manager: Some(true),
                icon_data: Some(String::new()),
            },
        });
        self
    }

    /// Add a worker agent node
    pub fn add_agent(
        mut self,
        id: impl Into<String>,
        position: Position,
        name: impl Into<String>,
        icon_data: impl Into<String>,
    ) -> Self {
        let name = name.into();
        self.nodes.push(DiagramNode {
            kind: NodeKind::Agent,
            id: id.into(),
            position,
            draggable: Some(true),
            data: NodeData {
                label: Some(name.clone()),
                name: Some(name),
                manager: None,
                icon_data: Some(icon_data.into()),
            },
        });
        self
    }

    /// Add a tool node, labeled `Tool: {name}`
    pub fn add_tool(
        mut self,
        id: impl Into<String>,
        position: Position,
        name: impl Into<String>,
        icon_data: impl Into<String>,
    ) -> Self {
        let name = name.into();
        self.nodes.push(DiagramNode {
            kind: NodeKind::Tool,
            id: id.into(),
            position,
            draggable: None,
            data: NodeData {
                label: Some(format!("{}{}", labels::TOOL_PREFIX, name)),
                name: Some(name),
                manager: None,
                icon_data: Some(icon_data.into()),
            },
        });
        self
    }

    /// Connect two nodes with an `e-{source}-{target}` edge
    pub fn connect(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        self.edges.push(DiagramEdge::between(source, target));
        self
    }

    /// Number of nodes added so far
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of edges added so far
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Finish the diagram
    pub fn build(self) -> DiagramState {
        DiagramState {
            nodes: self.nodes,
            edges: self.edges,
        }
    }
}
