use std::io::{self, Write};

use super::Render;
use crate::core::TodoContainer;

/// Markdown document: title, table of contents, then one section per TODO.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkdownRenderer;

impl Render for MarkdownRenderer {
    fn render(&self, container: &TodoContainer, writer: &mut dyn Write) -> io::Result<()> {
        write!(writer, "# TODOs for {}\n\n", container.path)?;

        if container.is_empty() {
            return write!(writer, " - NONE");
        }

        let mut toc = String::new();
        let mut content = String::new();
        for todo in &container.todos {
            let header = todo.position();
            toc.push_str(&format!(" - [{header}](#{header})\n"));

            content.push_str(&format!("## {header}\n\n"));
            if todo.is_assigned() {
                content.push_str(&format!("Assignee: `{}`\n", todo.assignee));
            }
            content.push_str("```\n");
            for line in &todo.message {
                content.push_str(line);
                content.push('\n');
            }
            content.push_str("```\n");
            content.push_str("\n---\n");
        }

        write!(writer, "{toc}\n\n---\n\n{content}")
    }
}
