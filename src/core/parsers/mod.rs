//! Source file parsers.
//!
//! - `comments`: JS/TS comment extraction and grouping (uses swc)

pub mod comments;
