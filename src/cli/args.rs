//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Extract TODO/FIXME annotations and render them
//! - `init`: Initialize todoctl configuration file
//! - `serve`: Start MCP server for AI integration

use clap::{Args, CommandFactory, Parser, Subcommand};

use super::output::OutputTarget;
use crate::render::Format;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.args.verbose,
            Some(Command::Init) | Some(Command::Serve) | None => false,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    /// Only keep TODOs assigned to these names
    /// Can be repeated or comma-separated: -a alice -a bob, -a alice,bob
    #[arg(short = 'a', long = "assignee", value_name = "NAME", value_delimiter = ',')]
    pub assignees: Vec<String>,

    /// Paths to exclude (glob patterns when they contain * or ?)
    #[arg(short = 'e', long = "exclude", value_name = "PATH")]
    pub excludes: Vec<String>,

    /// Output format (overrides config file)
    #[arg(short, long, value_enum, env = "TODOCTL_FORMAT")]
    pub format: Option<Format>,

    /// Where to write the output: stdout, stderr or a file path
    #[arg(short, long, value_name = "DEST", default_value = "stdout")]
    pub output: OutputTarget,

    /// File extensions to scan (overrides config file)
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Also walk vendor and hidden directories
    #[arg(long)]
    pub no_skip: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    /// Files or directories to scan
    #[arg(value_name = "PATH", default_value = ".")]
    pub paths: Vec<String>,

    #[command(flatten)]
    pub args: ScanArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract TODO and FIXME comments from source files
    Scan(ScanCommand),
    /// Initialize a new .todoctlrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
