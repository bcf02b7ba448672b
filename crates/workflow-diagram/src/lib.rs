//! Workflow Diagram - canvas layout for agent workflows
//!
//! Turns a workflow's task, agent and tool metadata into positioned
//! nodes and edges for the editor's graph canvas:
//!
//! - Tasks on the top row, each linked to its agent (or to the manager)
//! - An optional manager row for hierarchical workflows
//! - Agents centered on the next row, their tools directly beneath
//!
//! Layout is a pure function of its input. Records that cannot be
//! resolved are left out of the diagram rather than reported as errors.
//!
//! # Example
//!
//! ```ignore
//! use workflow_diagram::{create_diagram_state, DiagramSnapshot};
//!
//! let snapshot = DiagramSnapshot::load("editor-state.json")?;
//! let diagram = create_diagram_state(&snapshot.as_input());
//! println!("{}", serde_json::to_string_pretty(&diagram)?);
//! ```

pub mod builder;
pub mod config;
pub mod constants;
pub mod error;
pub mod layout;
pub mod metadata;
pub mod types;
pub mod validation;

// Re-export key types
pub use builder::DiagramBuilder;
pub use config::LayoutConfig;
pub use error::{DiagramError, Result};
pub use layout::{create_diagram_state, create_diagram_state_with_config};
pub use metadata::{
    Agent, DiagramInput, DiagramSnapshot, IconLookup, Task, ToolInstance, ToolTemplate,
    WorkflowMetadata, WorkflowState,
};
pub use types::{DiagramEdge, DiagramNode, DiagramState, NodeData, NodeKind, Position};
pub use validation::{validate_diagram, ValidationError};
