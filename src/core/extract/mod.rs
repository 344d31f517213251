//! TODO extraction from comment groups.
//!
//! Each comment group is processed by its own small state machine. A marker
//! line opens a new [`Todo`]; the following non-empty comment lines of the same
//! group are appended to it until an empty line, a new marker, or the end of
//! the group ends the run.
//!
//! ```text
//! // TODO(alice): Here is a      -> Todo { assignee: "alice", message: ["Here is a",
//! // multi line todo             ->                              "multi line todo"] }
//! //
//! // not part of it anymore
//! ```

pub mod marker;

use crate::core::{
    parsers::comments::{CommentGroup, CommentToken},
    todo::Todo,
};

pub use marker::{MARKER_KEYWORDS, Marker, parse_marker, strip_decoration};

/// Extract all TODOs from one file's comment groups, in source order.
pub fn extract_todos(file_path: &str, groups: &[CommentGroup]) -> Vec<Todo> {
    let mut todos = Vec::new();
    for group in groups {
        GroupExtractor::new(file_path, &mut todos).process(group);
    }
    todos
}

/// Continuation state for a single comment group.
///
/// Never outlives the group: a TODO cannot continue into the next one.
struct GroupExtractor<'a> {
    file_path: &'a str,
    todos: &'a mut Vec<Todo>,
    /// Index in `todos` of the TODO receiving continuation lines.
    active: Option<usize>,
}

impl<'a> GroupExtractor<'a> {
    fn new(file_path: &'a str, todos: &'a mut Vec<Todo>) -> Self {
        Self {
            file_path,
            todos,
            active: None,
        }
    }

    fn process(mut self, group: &CommentGroup) {
        for token in &group.tokens {
            self.process_token(token);
        }
    }

    fn process_token(&mut self, token: &CommentToken) {
        for (offset, raw) in token.text.split('\n').enumerate() {
            self.process_line(token.start_line + offset, strip_decoration(raw));
        }
    }

    fn process_line(&mut self, line: usize, text: &str) {
        if let Some(Marker { assignee, text }) = parse_marker(text) {
            self.todos
                .push(Todo::new(self.file_path, line, assignee, text));
            self.active = Some(self.todos.len() - 1);
            return;
        }

        match self.active {
            Some(index) if !text.is_empty() => self.todos[index].message.push(text.to_string()),
            _ => self.active = None,
        }
    }
}
