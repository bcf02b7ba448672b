//! Layout constants
//!
//! Single source of truth for the spacing numbers and fixed labels used
//! when placing diagram nodes.

/// Default geometry, in canvas units
pub mod defaults {
    /// Horizontal distance between consecutive task nodes
    pub const TASK_SPACING: f64 = 300.0;
    /// Vertical distance between rows
    pub const ROW_SPACING: f64 = 150.0;
    /// Width of one agent/tool column
    pub const COLUMN_WIDTH: f64 = 220.0;
    /// Number of description characters kept in a task label
    pub const LABEL_MAX_CHARS: usize = 50;
}

/// Fixed node labels
pub mod labels {
    /// Appended to every truncated task description
    pub const ELLIPSIS: &str = "...";
    /// Task label used for conversational workflows
    pub const CONVERSATION: &str = "Conversation";
    /// Prefix for tool node labels
    pub const TOOL_PREFIX: &str = "Tool: ";
    /// Label of the synthetic manager
    pub const DEFAULT_MANAGER: &str = "Default Manager";
}

/// Reserved identifiers
pub mod ids {
    /// Node id of the synthetic manager
    pub const DEFAULT_MANAGER: &str = "manager-agent";
}

/// Process modes
pub mod process {
    /// Process mode in which a manager agent coordinates the others
    pub const HIERARCHICAL: &str = "hierarchical";
}
