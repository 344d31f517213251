use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandSummary {
    Scan(ScanSummary),
    Init(InitSummary),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSummary {
    /// Number of roots scanned.
    pub root_count: usize,
    /// TODOs written to the output, after assignee filtering.
    pub todo_count: usize,
    /// Config file in use, `None` when running on defaults.
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running todoctl commands
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}
