use std::io::{self, Write};

use super::Render;
use crate::core::TodoContainer;

/// A JSON array of TODO objects followed by a newline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonRenderer;

impl Render for JsonRenderer {
    fn render(&self, container: &TodoContainer, writer: &mut dyn Write) -> io::Result<()> {
        serde_json::to_writer(&mut *writer, &container.todos)?;
        writeln!(writer)
    }
}
