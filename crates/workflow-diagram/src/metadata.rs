//! Workflow metadata consumed by the diagram builder
//!
//! These records mirror what the studio backend hands to the editor.
//! Field names follow the backend's wire names so a snapshot of the
//! editor state can be deserialized directly.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::process;
use crate::error::Result;

/// Mapping from image reference to encoded image payload
pub type IconLookup = HashMap<String, String>;

/// Workflow-level metadata driving the layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkflowMetadata {
    /// Task ids in display order
    pub task_ids: Vec<String>,
    /// Agent ids in display order
    pub agent_ids: Vec<String>,
    /// Configured manager agent, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_agent_id: Option<String>,
    /// Process mode (e.g. "sequential", "hierarchical")
    pub process: String,
}

impl WorkflowMetadata {
    /// Whether this workflow is coordinated by a manager agent
    pub fn is_hierarchical(&self) -> bool {
        self.process == process::HIERARCHICAL
    }

    /// The configured manager id, or `None` when absent or blank
    pub fn configured_manager_id(&self) -> Option<&str> {
        self.manager_agent_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
    }
}

/// Editor-side state of a workflow
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkflowState {
    pub workflow_metadata: WorkflowMetadata,
    /// Conversational workflows show a single "Conversation" label per task
    pub is_conversational: bool,
}

/// A task assigned to an agent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Task {
    pub task_id: String,
    pub description: String,
    pub assigned_agent_id: String,
}

/// An agent and the tool instances it can call
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Agent {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_image_uri: Option<String>,
    /// Tool instance ids in display order
    pub tools_id: Vec<String>,
}

/// A tool instance configured for the workflow
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolInstance {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_image_uri: Option<String>,
}

/// A tool template from the catalogue
///
/// Carried through for callers that pass the full catalogue; the layout
/// only places tool instances.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolTemplate {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_image_uri: Option<String>,
}

/// Borrowed view of everything the builder reads
#[derive(Debug, Clone, Copy)]
pub struct DiagramInput<'a> {
    pub workflow_state: &'a WorkflowState,
    pub icons: &'a IconLookup,
    pub tasks: &'a [Task],
    pub tool_instances: &'a [ToolInstance],
    pub tool_templates: &'a [ToolTemplate],
    pub agents: &'a [Agent],
}

/// Owned bundle of diagram inputs, as captured from the editor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiagramSnapshot {
    pub workflow_state: WorkflowState,
    pub icons_data: IconLookup,
    pub tasks: Vec<Task>,
    pub tool_instances: Vec<ToolInstance>,
    pub tool_templates: Vec<ToolTemplate>,
    pub agents: Vec<Agent>,
}

impl DiagramSnapshot {
    /// Parse a snapshot from JSON
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        match Self::from_json_str(&content) {
            Ok(snapshot) => {
                log::info!(
                    "Loaded diagram snapshot from {:?} ({} tasks, {} agents)",
                    path,
                    snapshot.tasks.len(),
                    snapshot.agents.len()
                );
                Ok(snapshot)
            }
            Err(e) => {
                log::warn!("Failed to parse diagram snapshot from {:?}: {}", path, e);
                Err(e)
            }
        }
    }

    /// Borrow the snapshot as builder input
    pub fn as_input(&self) -> DiagramInput<'_> {
        DiagramInput {
            workflow_state: &self.workflow_state,
            icons: &self.icons_data,
            tasks: &self.tasks,
            tool_instances: &self.tool_instances,
            tool_templates: &self.tool_templates,
            agents: &self.agents,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiagramError;
    use std::io::Write;

    const SNAPSHOT: &str = r#"{
        "workflowState": {
            "workflowMetadata": {
                "taskIds": ["t1"],
                "agentIds": ["a1"],
                "managerAgentId": "",
                "process": "hierarchical"
            },
            "isConversational": false
        },
        "iconsData": {"icons/writer.png": "data:image/png;base64,AAAA"},
        "tasks": [{"task_id": "t1", "description": "Summarize", "assigned_agent_id": "a1"}],
        "agents": [{"id": "a1", "name": "Writer", "agent_image_uri": "icons/writer.png", "tools_id": []}]
    }"#;

    #[test]
    fn test_snapshot_parses_wire_names() {
        let snapshot = DiagramSnapshot::from_json_str(SNAPSHOT).unwrap();
        let metadata = &snapshot.workflow_state.workflow_metadata;
        assert_eq!(metadata.task_ids, vec!["t1"]);
        assert_eq!(metadata.agent_ids, vec!["a1"]);
        assert!(metadata.is_hierarchical());
        assert_eq!(snapshot.tasks[0].assigned_agent_id, "a1");
        assert_eq!(
            snapshot.agents[0].agent_image_uri.as_deref(),
            Some("icons/writer.png")
        );
        assert!(snapshot.tool_instances.is_empty());
        assert!(snapshot.tool_templates.is_empty());
    }

    #[test]
    fn test_blank_manager_id_is_not_configured() {
        let mut metadata = WorkflowMetadata {
            manager_agent_id: Some("   ".to_string()),
            ..WorkflowMetadata::default()
        };
        assert_eq!(metadata.configured_manager_id(), None);

        metadata.manager_agent_id = None;
        assert_eq!(metadata.configured_manager_id(), None);

        metadata.manager_agent_id = Some("boss".to_string());
        assert_eq!(metadata.configured_manager_id(), Some("boss"));
    }

    #[test]
    fn test_only_hierarchical_process_has_manager() {
        let mut metadata = WorkflowMetadata::default();
        for process in ["sequential", "Hierarchical", ""] {
            metadata.process = process.to_string();
            assert!(!metadata.is_hierarchical(), "{:?}", process);
        }
        metadata.process = "hierarchical".to_string();
        assert!(metadata.is_hierarchical());
    }

    #[test]
    fn test_as_input_borrows_snapshot() {
        let snapshot = DiagramSnapshot::from_json_str(SNAPSHOT).unwrap();
        let input = snapshot.as_input();
        assert_eq!(input.tasks.len(), 1);
        assert_eq!(input.agents[0].name, "Writer");
        assert_eq!(input.icons.len(), 1);
    }

    #[test]
    fn test_load_snapshot_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SNAPSHOT.as_bytes()).unwrap();

        let snapshot = DiagramSnapshot::load(file.path()).unwrap();
        assert_eq!(snapshot.agents.len(), 1);
    }

    #[test]
    fn test_load_malformed_snapshot() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"tasks\": 3}").unwrap();

        let err = DiagramSnapshot::load(file.path()).unwrap_err();
        assert!(matches!(err, DiagramError::Serialization(_)));
    }
}
