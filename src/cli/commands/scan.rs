use std::{env, io::Write, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use super::{CommandResult, CommandSummary, ScanSummary};
use crate::{
    cli::args::{ScanArgs, ScanCommand},
    config::{Config, load_config},
    core::{ScanOptions, extract_path},
    render::Render,
};

pub fn scan(cmd: ScanCommand) -> Result<CommandResult> {
    let cwd = env::current_dir().context("Failed to get current directory")?;
    scan_from(cmd, &cwd)
}

/// Run `scan` with `cwd` as the directory the config file search starts from.
pub fn scan_from(cmd: ScanCommand, cwd: &Path) -> Result<CommandResult> {
    let ScanCommand { paths, args } = cmd;

    let loaded = load_config(cwd)?;
    if args.verbose
        && let Some(path) = &loaded.path
    {
        eprintln!("{} {}", "Using config".dimmed(), path.display());
    }

    let options = scan_options(&args, &loaded.config);
    let format = args.format.unwrap_or(loaded.config.format);
    let renderer = format.renderer();

    let mut writer = args.output.open()?;
    let mut todo_count = 0;

    for path in &paths {
        let container = extract_path(path, &options)?.select_assignees(&args.assignees);
        todo_count += container.len();

        renderer
            .render(&container, &mut writer)
            .with_context(|| format!("Failed to write {} output", format))?;
    }
    writer.flush().context("Failed to flush output")?;

    Ok(CommandResult {
        summary: CommandSummary::Scan(ScanSummary {
            root_count: paths.len(),
            todo_count,
            config_path: loaded.path,
        }),
    })
}

/// Merge CLI flags over the config file: excludes add up, `--ext` replaces.
fn scan_options(args: &ScanArgs, config: &Config) -> ScanOptions {
    let mut options = ScanOptions::from(config);

    options.excludes.extend(args.excludes.iter().cloned());
    if !args.extensions.is_empty() {
        options.extensions = args
            .extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.').to_string())
            .collect();
    }
    options.no_skip |= args.no_skip;
    options.verbose = args.verbose;

    options
}
