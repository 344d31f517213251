use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{core::Todo, render::Format};

// ============================================================
// Parameters
// ============================================================

/// Parameters of `scan_todos`
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanTodosParams {
    /// Absolute path of the file or directory to scan
    pub path: String,
    /// Extra paths or glob patterns to exclude, on top of the config file
    pub excludes: Option<Vec<String>>,
    /// Only return TODOs assigned to one of these names
    pub assignees: Option<Vec<String>>,
    /// Maximum number of items to return (default 50, max 200)
    pub limit: Option<u32>,
    /// Number of items to skip
    pub offset: Option<u32>,
}

/// Parameters of `render_todos`
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RenderTodosParams {
    /// Absolute path of the file or directory to scan
    pub path: String,
    pub format: Format,
    /// Extra paths or glob patterns to exclude, on top of the config file
    pub excludes: Option<Vec<String>>,
    /// Only render TODOs assigned to one of these names
    pub assignees: Option<Vec<String>>,
}

// ============================================================
// Results
// ============================================================

/// Result of `scan_todos`
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScanTodosResult {
    pub path: String,
    /// Number of TODOs after assignee filtering, before pagination
    pub total_count: usize,
    /// Distinct non-empty assignees among the matching TODOs, sorted
    pub assignees: Vec<String>,
    pub items: Vec<TodoItem>,
    pub pagination: Pagination,
}

/// One TODO as returned to the agent
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub assignee: String,
    pub file_path: String,
    pub line: usize,
    pub message: Vec<String>,
}

impl From<Todo> for TodoItem {
    fn from(todo: Todo) -> Self {
        Self {
            assignee: todo.assignee,
            file_path: todo.location.file_path,
            line: todo.location.line,
            message: todo.message,
        }
    }
}

/// Pagination information
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub offset: usize,
    pub limit: usize,
    pub has_more: bool,
}
