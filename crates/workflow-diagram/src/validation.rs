//! Diagnostics over a laid-out diagram
//!
//! The layout never rejects input, so a diagram can carry edges whose
//! target was not placed or repeated ids when the metadata repeats them.
//! These checks report such cases for callers that want to surface them.

use std::collections::HashSet;

use crate::types::DiagramState;

/// A structural problem found in a diagram
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// An edge starts at a node that is not in the diagram
    UnknownSource { edge_id: String, node_id: String },
    /// An edge ends at a node that is not in the diagram
    DanglingTarget { edge_id: String, node_id: String },
    /// More than one node uses the same id
    DuplicateNodeId { node_id: String },
    /// More than one edge uses the same id
    DuplicateEdgeId { edge_id: String },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownSource { edge_id, node_id } => {
                write!(
                    f,
                    "Edge '{}' starts at unknown node '{}'",
                    edge_id, node_id
                )
            }
            Self::DanglingTarget { edge_id, node_id } => {
                write!(f, "Edge '{}' ends at unknown node '{}'", edge_id, node_id)
            }
            Self::DuplicateNodeId { node_id } => {
                write!(f, "Node id '{}' is used more than once", node_id)
            }
            Self::DuplicateEdgeId { edge_id } => {
                write!(f, "Edge id '{}' is used more than once", edge_id)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a diagram
///
/// Returns all validation errors found (not just the first).
pub fn validate_diagram(diagram: &DiagramState) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    validate_unique_ids(diagram, &mut errors);
    validate_edge_references(diagram, &mut errors);

    errors
}

/// Report each repeated node or edge id once
fn validate_unique_ids(diagram: &DiagramState, errors: &mut Vec<ValidationError>) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for node in &diagram.nodes {
        if !seen.insert(node.id.as_str()) && reported.insert(node.id.as_str()) {
            errors.push(ValidationError::DuplicateNodeId {
                node_id: node.id.clone(),
            });
        }
    }

    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    for edge in &diagram.edges {
        if !seen.insert(edge.id.as_str()) && reported.insert(edge.id.as_str()) {
            errors.push(ValidationError::DuplicateEdgeId {
                edge_id: edge.id.clone(),
            });
        }
    }
}

/// Check that all edge source/target nodes exist
fn validate_edge_references(diagram: &DiagramState, errors: &mut Vec<ValidationError>) {
    let node_ids: HashSet<&str> = diagram.nodes.iter().map(|n| n.id.as_str()).collect();

    for edge in &diagram.edges {
        if !node_ids.contains(edge.source.as_str()) {
            errors.push(ValidationError::UnknownSource {
                edge_id: edge.id.clone(),
                node_id: edge.source.clone(),
            });
        }
        if !node_ids.contains(edge.target.as_str()) {
            errors.push(ValidationError::DanglingTarget {
                edge_id: edge.id.clone(),
                node_id: edge.target.clone(),
            });
        }
    }
}
