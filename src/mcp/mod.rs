//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes TODO extraction to AI assistants over stdio.
//!
//! ## Module Structure
//!
//! - `server`: MCP server and its tools
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{TodoMcpServer, run_server};
