//! Comment supplier backed by swc.
//!
//! Parses a JavaScript/TypeScript file and returns its comments grouped the
//! way a standard parser groups them: comments separated by code or by a blank
//! line belong to different groups, and a comment trailing code on its line
//! only groups with further comments on that same line.

use std::{fs, path::Path, sync::Arc};

use anyhow::{Context, Result, anyhow};
use swc_common::{
    FileName, Globals, SourceFile, SourceMap, Spanned,
    comments::{Comment, SingleThreadedComments},
};
use swc_ecma_parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax, error::Error};

/// A raw comment token, delimiters included, with the line it starts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentToken {
    /// Exact source text of the comment, e.g. `// TODO` or `/* a\n b */`.
    pub text: String,
    /// 1-based line of the first character of the comment.
    pub start_line: usize,
}

/// Adjacent comments with no code and no blank line between them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentGroup {
    pub tokens: Vec<CommentToken>,
}

/// Read and parse `path`, returning its comment groups in source order.
pub fn parse_comment_groups(path: &Path) -> Result<Vec<CommentGroup>> {
    let code = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    let file_path = path.to_string_lossy();
    parse_comment_groups_from_source(code, &file_path, syntax_for(path))
}

/// Parse source code and return its comment groups.
///
/// Any syntax error, including the ones swc recovers from, fails the whole
/// file: no partial result is returned.
pub fn parse_comment_groups_from_source(
    code: String,
    file_path: &str,
    syntax: Syntax,
) -> Result<Vec<CommentGroup>> {
    use swc_common::GLOBALS;

    GLOBALS.set(&Globals::new(), || {
        let source_map = Arc::new(SourceMap::default());
        let source_file =
            source_map.new_source_file(FileName::Real(file_path.into()).into(), code);

        let comments = SingleThreadedComments::default();
        let mut parser = Parser::new(syntax, StringInput::from(&*source_file), Some(&comments));

        let result = parser.parse_program();
        let recovered = parser.take_errors();
        if let Err(error) = result {
            return Err(parse_error(&source_map, file_path, &error));
        }
        if let Some(error) = recovered.first() {
            return Err(parse_error(&source_map, file_path, error));
        }

        let (leading, trailing) = comments.borrow_all();
        let mut all: Vec<Comment> = leading
            .values()
            .chain(trailing.values())
            .flatten()
            .cloned()
            .collect();
        all.sort_by_key(|cmt| cmt.span.lo);
        all.dedup_by_key(|cmt| cmt.span.lo);

        Ok(group_comments(&source_map, &source_file, &all))
    })
}

/// Pick the swc syntax from the file extension.
pub fn syntax_for(path: &Path) -> Syntax {
    match path.extension().and_then(|e| e.to_str()) {
        Some("ts" | "mts" | "cts") => Syntax::Typescript(TsSyntax::default()),
        Some("tsx") => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
    }
}

fn parse_error(source_map: &SourceMap, file_path: &str, error: &Error) -> anyhow::Error {
    let line = source_map.lookup_char_pos(error.span().lo).line;
    anyhow!(
        "Failed to parse {}:{}: {}",
        file_path,
        line,
        error.kind().msg()
    )
}

/// How the current group accepts further comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GroupMode {
    /// Started after code on the same line: only same-line comments join.
    Trailing,
    /// Own-line comments: the next comment may start on the following line.
    Leading,
}

fn group_comments(
    source_map: &SourceMap,
    source_file: &SourceFile,
    comments: &[Comment],
) -> Vec<CommentGroup> {
    let src: &str = &source_file.src;
    let offset = |pos: swc_common::BytePos| (pos.0 - source_file.start_pos.0) as usize;

    let mut groups: Vec<CommentGroup> = Vec::new();
    let mut mode = GroupMode::Leading;
    let mut end_line = 0;
    let mut prev_end = 0;

    for cmt in comments {
        let start = offset(cmt.span.lo);
        let end = offset(cmt.span.hi);
        let start_line = source_map.lookup_char_pos(cmt.span.lo).line;

        // Code on this line before the comment (ignoring earlier comments).
        let line_start = src[..start].rfind('\n').map_or(0, |i| i + 1);
        let after_code = has_code(&src[line_start.max(prev_end)..start]);
        let code_between = groups.is_empty() || has_code(&src[prev_end..start]);

        let joins = !code_between
            && !after_code
            && match mode {
                GroupMode::Trailing => start_line <= end_line,
                GroupMode::Leading => start_line <= end_line + 1,
            };

        let token = CommentToken {
            text: src[start..end].to_string(),
            start_line,
        };

        match groups.last_mut() {
            Some(group) if joins => group.tokens.push(token),
            _ => {
                mode = if after_code {
                    GroupMode::Trailing
                } else {
                    GroupMode::Leading
                };
                groups.push(CommentGroup {
                    tokens: vec![token],
                });
            }
        }

        end_line = source_map.lookup_char_pos(cmt.span.hi).line;
        prev_end = end;
    }

    groups
}

fn has_code(text: &str) -> bool {
    !text.trim().is_empty()
}
