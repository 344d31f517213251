use std::io::{self, Write};

use super::Render;
use crate::core::TodoContainer;

/// Plain text, one block per TODO separated by a blank line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextRenderer;

impl Render for TextRenderer {
    fn render(&self, container: &TodoContainer, writer: &mut dyn Write) -> io::Result<()> {
        for todo in &container.todos {
            if todo.is_assigned() {
                writeln!(writer, "Assignee: {}", todo.assignee)?;
            }
            write!(
                writer,
                "Message: {}\nFile:{}:{}\n\n",
                todo.message.join("\n"),
                todo.location.file_path,
                todo.location.line
            )?;
        }
        Ok(())
    }
}
