//! Status messages printed after a command.
//!
//! Rendered TODOs may go to stdout, so scan status lines only ever go to
//! stderr and only with `--verbose`.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{CommandResult, CommandSummary, InitSummary, ScanSummary};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult, verbose: bool) {
    match &result.summary {
        CommandSummary::Scan(summary) => {
            if verbose {
                print_scan_to(summary, &mut io::stderr().lock());
            }
        }
        CommandSummary::Init(summary) => print_init_to(summary, &mut io::stdout().lock()),
    }
}

fn print_scan_to<W: Write>(summary: &ScanSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Found {} {} in {} {}",
            summary.todo_count,
            if summary.todo_count == 1 { "TODO" } else { "TODOs" },
            summary.root_count,
            if summary.root_count == 1 { "path" } else { "paths" }
        )
        .green()
    );
}

fn print_init_to<W: Write>(summary: &InitSummary, writer: &mut W) {
    if summary.created {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
