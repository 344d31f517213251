use std::io::{self, Write};

use super::Render;
use crate::core::TodoContainer;

/// HTML page: title, table of contents, then one `<li>` per TODO.
///
/// Paths, assignees and messages are escaped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HtmlRenderer;

impl Render for HtmlRenderer {
    fn render(&self, container: &TodoContainer, writer: &mut dyn Write) -> io::Result<()> {
        let path = escape_html(&container.path);
        write!(writer, "<h1>TODOs for {path}</h1>\n\n")?;

        if container.is_empty() {
            return write!(writer, "<ul><li>NONE</li></ul>");
        }

        let mut toc = String::from("\n<ul id=\"toc\">\n");
        let mut content = String::from("\n<ul id=\"content\">\n");
        for (index, todo) in container.todos.iter().enumerate() {
            let id = index + 1;
            let header = escape_html(&todo.position());

            toc.push_str(&format!("<li><a href=\"#{id}\">{header}</a></li>\n"));

            content.push_str("<li>");
            content.push_str(&format!("<h2><a id=\"{id}\">{header}</a></h2>\n"));
            if todo.is_assigned() {
                content.push_str(&format!(
                    "<div class=\"assignee\">Assignee: {}</div>\n",
                    escape_html(&todo.assignee)
                ));
            }
            content.push_str("<pre class=\"todo\">\n");
            for line in &todo.message {
                content.push_str(&escape_html(line));
                content.push('\n');
            }
            content.push_str("</pre>\n");
            content.push_str("</li>");
        }
        toc.push_str("\n</ul>\n");
        content.push_str("\n</ul>\n");

        write!(
            writer,
            "<html><head><title>Todos for {path}</title>\
             <link rel=\"stylesheet\" type=\"text/css\" href=\"todos.css\" /></head>\
             <body>{toc}<hr>{content}</body></html>"
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}
