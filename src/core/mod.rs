//! Core extraction engine.
//!
//! - `parsers`: swc-backed comment supplier (comment groups per file)
//! - `extract`: TODO/FIXME recognition over comment groups
//! - `file_scanner`: directory walk feeding files to the extractor
//! - `todo`: extracted records and their per-root container

pub mod extract;
pub mod file_scanner;
pub mod parsers;
pub mod todo;

pub use extract::extract_todos;
pub use file_scanner::{DEFAULT_EXTENSIONS, ScanOptions, extract_path};
pub use parsers::comments::{CommentGroup, CommentToken, parse_comment_groups};
pub use todo::{Location, Todo, TodoContainer};
