//! Output renderers.
//!
//! Every output format is a variant of the closed [`Format`] set, backed by a
//! renderer implementing [`Render`]. Renderers are pure: they only fail when
//! the writer does.
//!
//! - `text`: human readable list
//! - `csv`: one row per TODO
//! - `json`: array of TODO objects
//! - `markdown`: document with a table of contents
//! - `html`: html page with a table of contents

mod csv;
mod html;
mod json;
mod markdown;
mod text;

use std::{fmt, io};

use clap::ValueEnum;
use enum_dispatch::enum_dispatch;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::TodoContainer;

pub use self::csv::CsvRenderer;
pub use html::HtmlRenderer;
pub use json::JsonRenderer;
pub use markdown::MarkdownRenderer;
pub use text::TextRenderer;

/// Output format selector.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Text,
    Csv,
    Json,
    /// Markdown
    Md,
    Html,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Text => "text",
            Format::Csv => "csv",
            Format::Json => "json",
            Format::Md => "md",
            Format::Html => "html",
        }
    }

    pub fn renderer(self) -> Renderer {
        match self {
            Format::Text => TextRenderer.into(),
            Format::Csv => CsvRenderer.into(),
            Format::Json => JsonRenderer.into(),
            Format::Md => MarkdownRenderer.into(),
            Format::Html => HtmlRenderer.into(),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializes a [`TodoContainer`] to a writer.
///
/// Uses `enum_dispatch` for zero-cost dispatch on the [`Renderer`] enum.
#[enum_dispatch]
pub trait Render {
    fn render(&self, container: &TodoContainer, writer: &mut dyn io::Write) -> io::Result<()>;

    /// Render into a string (used by the MCP server and tests).
    fn render_to_string(&self, container: &TodoContainer) -> io::Result<String> {
        let mut buf = Vec::new();
        self.render(container, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[enum_dispatch(Render)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Renderer {
    Text(TextRenderer),
    Csv(CsvRenderer),
    Json(JsonRenderer),
    Markdown(MarkdownRenderer),
    Html(HtmlRenderer),
}

impl From<Format> for Renderer {
    fn from(format: Format) -> Self {
        format.renderer()
    }
}
