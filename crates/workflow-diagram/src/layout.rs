//! Row/column layout of a workflow diagram
//!
//! Tasks go on the top row. In hierarchical workflows a manager row sits
//! beneath them. Agents follow, centered horizontally, each with its tools
//! one row further down. One agent column is `column_width` wide per
//! configured tool (minimum one column).
//!
//! Records that cannot be found are skipped: the editor renders partial
//! diagrams while metadata is still loading.

use std::collections::HashMap;

use crate::builder::DiagramBuilder;
use crate::config::LayoutConfig;
use crate::constants::{ids, labels};
use crate::metadata::{Agent, DiagramInput, IconLookup, Task, WorkflowMetadata};
use crate::types::{DiagramState, Position};

/// The agent coordinating a hierarchical workflow
#[derive(Debug, Clone)]
struct Manager<'a> {
    id: &'a str,
    name: Option<String>,
}

/// Lay out a workflow diagram with the default spacing
pub fn create_diagram_state(input: &DiagramInput<'_>) -> DiagramState {
    create_diagram_state_with_config(input, &LayoutConfig::default())
}

/// Lay out a workflow diagram with explicit spacing
pub fn create_diagram_state_with_config(
    input: &DiagramInput<'_>,
    config: &LayoutConfig,
) -> DiagramState {
    let metadata = &input.workflow_state.workflow_metadata;
    let tasks = index_by_id(input.tasks, |t| t.task_id.as_str());
    let agents = index_by_id(input.agents, |a| a.id.as_str());
    let tools = index_by_id(input.tool_instances, |t| t.id.as_str());
    let manager = resolve_manager(metadata, &agents);

    let mut builder = DiagramBuilder::new();
    let mut y = 0.0;

    // Task row. The index counts every listed id, found or not.
    for (index, task_id) in metadata.task_ids.iter().enumerate() {
        let Some(task) = tasks.get(task_id.as_str()) else {
            log::trace!("Task '{}' not found, skipping", task_id);
            continue;
        };

        let label = task_label(task, input.workflow_state.is_conversational, config);
        let target = manager
            .as_ref()
            .map_or(task.assigned_agent_id.as_str(), |m| m.id);

        builder = builder
            .add_task(
                &task.task_id,
                Position::new(index as f64 * config.task_spacing, y),
                label,
            )
            .connect(&task.task_id, target);
    }
    y += config.row_spacing;

    if let Some(manager) = &manager {
        builder = builder.add_manager(
            manager.id,
            Position::new(0.0, y),
            manager.name.clone(),
        );
        y += config.row_spacing;
    }

    // Agent row with tools beneath
    let mut x = -0.5 * agent_row_width(metadata, &agents, config) + 0.5 * config.column_width;
    for agent_id in &metadata.agent_ids {
        let Some(agent) = agents.get(agent_id.as_str()) else {
            log::trace!("Agent '{}' not found, skipping", agent_id);
            continue;
        };

        builder = builder.add_agent(
            &agent.id,
            Position::new(x, y),
            &agent.name,
            icon_for(input.icons, agent.agent_image_uri.as_deref()),
        );
        if let Some(manager) = &manager {
            builder = builder.connect(manager.id, &agent.id);
        }

        for tool_id in &agent.tools_id {
            let Some(tool) = tools.get(tool_id.as_str()) else {
                log::trace!(
                    "Tool instance '{}' of agent '{}' not found, skipping",
                    tool_id,
                    agent.id
                );
                continue;
            };

            builder = builder
                .add_tool(
                    &tool.id,
                    Position::new(x, y + config.row_spacing),
                    &tool.name,
                    icon_for(input.icons, tool.tool_image_uri.as_deref()),
                )
                .connect(&agent.id, &tool.id);
            x += config.column_width;
        }

        // Keep the column of an agent without tools
        if agent.tools_id.is_empty() {
            x += config.column_width;
        }
    }

    log::debug!(
        "Laid out diagram with {} nodes and {} edges",
        builder.node_count(),
        builder.edge_count()
    );
    builder.build()
}

/// Index records by id; the first record wins on duplicates
fn index_by_id<'a, T>(
    records: &'a [T],
    id: impl Fn(&'a T) -> &'a str,
) -> HashMap<&'a str, &'a T> {
    let mut index = HashMap::with_capacity(records.len());
    for record in records {
        index.entry(id(record)).or_insert(record);
    }
    index
}

fn resolve_manager<'a>(
    metadata: &'a WorkflowMetadata,
    agents: &HashMap<&str, &Agent>,
) -> Option<Manager<'a>> {
    if !metadata.is_hierarchical() {
        return None;
    }

    match metadata.configured_manager_id() {
        None => Some(Manager {
            id: ids::DEFAULT_MANAGER,
            name: Some(labels::DEFAULT_MANAGER.to_string()),
        }),
        Some(id) => {
            let name = agents.get(id).map(|agent| agent.name.clone());
            if name.is_none() {
                log::trace!("Manager agent '{}' not found, leaving it unnamed", id);
            }
            Some(Manager { id, name })
        }
    }
}

/// Description prefix plus an ellipsis, which is appended even to short descriptions
fn task_label(task: &Task, is_conversational: bool, config: &LayoutConfig) -> String {
    if is_conversational {
        return labels::CONVERSATION.to_string();
    }

    let mut label: String = task
        .description
        .chars()
        .take(config.label_max_chars)
        .collect();
    label.push_str(labels::ELLIPSIS);
    label
}

/// Total width of the agent row, counting only agents that resolve
///
/// Tool instances are counted as configured, whether or not they resolve.
fn agent_row_width(
    metadata: &WorkflowMetadata,
    agents: &HashMap<&str, &Agent>,
    config: &LayoutConfig,
) -> f64 {
    metadata
        .agent_ids
        .iter()
        .filter_map(|id| agents.get(id.as_str()))
        .map(|agent| {
            let extra_columns = agent.tools_id.len().saturating_sub(1);
            config.column_width * extra_columns as f64 + config.column_width
        })
        .sum()
}

/// Icon payload for an image reference, or `""`
///
/// A missing image reference yields `""` without consulting the table, so an
/// entry keyed by the empty string is never used.
fn icon_for(icons: &IconLookup, image_ref: Option<&str>) -> String {
    image_ref
        .and_then(|key| icons.get(key))
        .cloned()
        .unwrap_or_default()
}
