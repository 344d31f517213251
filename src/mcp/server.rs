use std::{collections::BTreeSet, path::Path};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

use crate::{
    config::load_config,
    core::{ScanOptions, TodoContainer, extract_path},
    render::Render,
};

use super::types::{Pagination, RenderTodosParams, ScanTodosParams, ScanTodosResult, TodoItem};

const DEFAULT_LIMIT: usize = 50;
const MAX_LIMIT: usize = 200;

#[derive(Clone)]
pub struct TodoMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for TodoMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TodoMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// List TODO/FIXME annotations under a path
    #[tool(
        description = "Extract TODO and FIXME comments from JavaScript/TypeScript files under a path. Returns paginated list with assignee, location and message."
    )]
    pub async fn scan_todos(
        &self,
        params: Parameters<ScanTodosParams>,
    ) -> Result<CallToolResult, McpError> {
        let ScanTodosParams {
            path,
            excludes,
            assignees,
            limit,
            offset,
        } = params.0;
        let limit = limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let offset = offset.map(|v| v as usize).unwrap_or(0);

        let container = scan(&path, excludes, assignees)?;

        let total_count = container.len();
        let assignees: Vec<String> = container
            .todos
            .iter()
            .filter(|todo| todo.is_assigned())
            .map(|todo| todo.assignee.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        // Apply pagination
        let items: Vec<TodoItem> = container
            .todos
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(TodoItem::from)
            .collect();
        let has_more = offset + items.len() < total_count;

        let scan_result = ScanTodosResult {
            path,
            total_count,
            assignees,
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        };

        let json_str = serde_json::to_string_pretty(&scan_result).map_err(|e| {
            McpError::internal_error(format!("JSON serialization failed: {}", e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(json_str)]))
    }

    /// Render TODO/FIXME annotations in one of the output formats
    #[tool(
        description = "Extract TODO and FIXME comments under a path and render them as text, csv, json, md or html."
    )]
    pub async fn render_todos(
        &self,
        params: Parameters<RenderTodosParams>,
    ) -> Result<CallToolResult, McpError> {
        let RenderTodosParams {
            path,
            format,
            excludes,
            assignees,
        } = params.0;

        let container = scan(&path, excludes, assignees)?;
        let rendered = format.renderer().render_to_string(&container).map_err(|e| {
            McpError::internal_error(format!("Failed to render {} output: {}", format, e), None)
        })?;

        Ok(CallToolResult::success(vec![Content::text(rendered)]))
    }
}

/// Scan `path` with the config file found from it, plus the extra excludes.
fn scan(
    path: &str,
    excludes: Option<Vec<String>>,
    assignees: Option<Vec<String>>,
) -> Result<TodoContainer, McpError> {
    let loaded = load_config(Path::new(path))
        .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?;

    let mut options = ScanOptions::from(&loaded.config);
    options.excludes.extend(excludes.unwrap_or_default());

    let container = extract_path(path, &options)
        .map_err(|e| McpError::internal_error(format!("Scan failed: {:#}", e), None))?;

    Ok(container.select_assignees(&assignees.unwrap_or_default()))
}

#[tool_handler]
impl ServerHandler for TodoMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "todoctl MCP lists the TODO and FIXME comments of JavaScript/TypeScript projects.\n\n\
                 Available tools:\n\
                 1. scan_todos - Get TODOs with assignee, file and line (paginated, filterable by assignee)\n\
                 2. render_todos - Get TODOs rendered as text, csv, json, md or html\n\n\
                 Use scan_todos first: its assignees list shows who TODOs are assigned to."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TodoMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
