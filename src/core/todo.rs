use serde::{Deserialize, Serialize};

/// Where a TODO marker line starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(rename = "filename")]
    pub file_path: String,
    /// 1-based line of the marker.
    pub line: usize,
}

/// A single TODO (or FIXME) annotation extracted from a comment.
///
/// `message` always holds at least one line: the text following the marker on
/// its own line, possibly empty. Continuation lines follow in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Empty when the TODO is not assigned to anyone.
    pub assignee: String,
    #[serde(flatten)]
    pub location: Location,
    pub message: Vec<String>,
}

impl Todo {
    pub fn new(file_path: &str, line: usize, assignee: String, first_line: String) -> Self {
        Self {
            assignee,
            location: Location {
                file_path: file_path.to_string(),
                line,
            },
            message: vec![first_line],
        }
    }

    pub fn is_assigned(&self) -> bool {
        !self.assignee.is_empty()
    }

    /// `<file>:<line>`, used as heading and anchor by the document renderers.
    pub fn position(&self) -> String {
        format!("{}:{}", self.location.file_path, self.location.line)
    }
}

/// All TODOs found under one scanned root, in discovery order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoContainer {
    pub path: String,
    pub todos: Vec<Todo>,
}

impl TodoContainer {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            todos: Vec::new(),
        }
    }

    /// Keep only the TODOs whose assignee exactly equals one of `assignees`.
    ///
    /// Matching is case-sensitive. An empty `assignees` slice keeps nothing;
    /// callers that treat "no names" as "no filtering" must skip the call.
    pub fn assigned_to<S: AsRef<str>>(&self, assignees: &[S]) -> TodoContainer {
        let todos = self
            .todos
            .iter()
            .filter(|todo| assignees.iter().any(|a| a.as_ref() == todo.assignee))
            .cloned()
            .collect();

        TodoContainer {
            path: self.path.clone(),
            todos,
        }
    }

    /// [`assigned_to`](Self::assigned_to), except that no names means no filtering.
    pub fn select_assignees(self, assignees: &[String]) -> TodoContainer {
        if assignees.is_empty() {
            self
        } else {
            self.assigned_to(assignees)
        }
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }
}
