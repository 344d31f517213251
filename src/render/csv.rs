use std::{
    borrow::Cow,
    io::{self, Write},
};

use super::Render;
use crate::core::TodoContainer;

const HEADER: [&str; 5] = ["Path", "Filename", "Line", "Assignee", "Message"];

/// CSV with a header row. Multi-line messages stay in one quoted cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CsvRenderer;

impl Render for CsvRenderer {
    fn render(&self, container: &TodoContainer, writer: &mut dyn Write) -> io::Result<()> {
        write_row(writer, &HEADER)?;
        for todo in &container.todos {
            let line = todo.location.line.to_string();
            let message = todo.message.join("\n");
            write_row(
                writer,
                &[
                    container.path.as_str(),
                    todo.location.file_path.as_str(),
                    line.as_str(),
                    todo.assignee.as_str(),
                    message.as_str(),
                ],
            )?;
        }
        Ok(())
    }
}

fn write_row(writer: &mut dyn Write, fields: &[&str]) -> io::Result<()> {
    let row: Vec<Cow<'_, str>> = fields.iter().map(|f| escape_field(f)).collect();
    writeln!(writer, "{}", row.join(","))
}

/// Quote a field when it holds a separator, a quote, a line break, or starts
/// with whitespace. Inner quotes are doubled.
fn escape_field(field: &str) -> Cow<'_, str> {
    let needs_quotes = field.contains([',', '"', '\r', '\n'])
        || field.chars().next().is_some_and(char::is_whitespace);

    if needs_quotes {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
