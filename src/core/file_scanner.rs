use std::path::{Component, Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::core::{extract::extract_todos, parsers::comments::parse_comment_groups, todo::TodoContainer};

/// Extensions parsed when nothing else is configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["ts", "tsx", "js", "jsx", "mjs", "cjs", "mts", "cts"];

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as exact paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// What to skip while walking a root.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Exact paths, or glob patterns when they contain `*` or `?`.
    pub excludes: Vec<String>,
    /// File extensions to parse, without the leading dot.
    pub extensions: Vec<String>,
    /// Walk into `vendor` and hidden directories too.
    pub no_skip: bool,
    pub verbose: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            excludes: Vec::new(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            no_skip: false,
            verbose: false,
        }
    }
}

/// Compiled exclusion list.
struct Excludes {
    paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl Excludes {
    fn new(excludes: &[String]) -> Result<Self> {
        let mut paths = Vec::new();
        let mut patterns = Vec::new();
        for exclude in excludes {
            if is_glob_pattern(exclude) {
                let pattern = Pattern::new(exclude)
                    .with_context(|| format!("Invalid exclude pattern: \"{}\"", exclude))?;
                patterns.push(pattern);
            } else {
                paths.push(without_cur_dir(Path::new(exclude)));
            }
        }
        Ok(Self { paths, patterns })
    }

    fn matches(&self, path: &Path) -> bool {
        let path = without_cur_dir(path);
        self.paths.iter().any(|p| *p == path)
            || self.patterns.iter().any(|p| p.matches_path(&path))
    }
}

/// `./src/app.ts` and `src/app.ts` name the same entry.
fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Walk `root` and extract the TODOs of every source file below it.
///
/// Entries are visited in file name order. The first traversal or parse
/// error aborts the walk and nothing is returned for this root.
pub fn extract_path(root: &str, options: &ScanOptions) -> Result<TodoContainer> {
    let excludes = Excludes::new(&options.excludes)?;
    let mut container = TodoContainer::new(root);

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| !should_skip(entry, &excludes, options));

    for entry in walker {
        let entry = entry.with_context(|| format!("Failed to walk {}", root))?;
        if entry.file_type().is_dir() || !has_extension(entry.path(), &options.extensions) {
            continue;
        }

        if options.verbose {
            eprintln!("{} {}", "Processing".dimmed(), entry.path().display());
        }

        let file_path = entry.path().to_string_lossy();
        let groups = parse_comment_groups(entry.path())?;
        container.todos.extend(extract_todos(&file_path, &groups));
    }

    Ok(container)
}

fn should_skip(entry: &DirEntry, excludes: &Excludes, options: &ScanOptions) -> bool {
    if excludes.matches(entry.path()) {
        if options.verbose {
            eprintln!("{} {}", "Excluding".dimmed(), entry.path().display());
        }
        return true;
    }

    // The root is always walked, even when given as `..` or `.hidden`.
    if options.no_skip || entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }

    let skip = is_skipped_dir_name(&entry.file_name().to_string_lossy());
    if skip && options.verbose {
        eprintln!(
            "{} {}",
            "Skipping directory".dimmed(),
            entry.path().display()
        );
    }
    skip
}

/// `vendor` and hidden directories (but not `.` itself).
fn is_skipped_dir_name(name: &str) -> bool {
    name == "vendor" || (name.len() > 1 && name.starts_with('.'))
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e == ext))
}
