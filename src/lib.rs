//! todoctl - TODO and FIXME extractor for JavaScript/TypeScript projects
//!
//! todoctl is a CLI tool and library that walks a source tree, parses every
//! JavaScript/TypeScript file with swc, and extracts the `TODO` and `FIXME`
//! annotations found in its comments, with their assignee and message. The
//! result can be rendered as text, CSV, JSON, Markdown or HTML.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction engine (comment supplier, extractor, tree walker)
//! - `mcp`: Model Context Protocol server implementation
//! - `render`: Output formats

pub mod cli;
pub mod config;
pub mod core;
pub mod mcp;
pub mod render;
