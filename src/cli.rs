// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::store::TaskDraft;
use crate::types::Strategy;

/// Command-line arguments for `taskviz`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "taskviz",
    version,
    about = "Rank tasks with a scoring service and draw their dependency graph.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// If omitted, `Taskviz.toml` in the working directory is used when it
    /// exists, otherwise built-in defaults.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TASKVIZ_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the task list as a table.
    List {
        #[command(flatten)]
        source: TaskSource,
    },

    /// Draw the unscored dependency graph of the task list.
    Graph {
        #[command(flatten)]
        source: TaskSource,

        /// Where to write the SVG. Defaults to stdout.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Send tasks to the scoring service and show the ranking.
    Analyze {
        #[command(flatten)]
        source: TaskSource,

        /// Overrides `[analysis].strategy` from the config.
        #[arg(long, value_name = "NAME")]
        strategy: Option<Strategy>,

        /// Also write the ranked dependency graph as SVG here.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Ask the scoring service for its top recommendations.
    Suggest {
        #[arg(long, value_name = "NAME")]
        strategy: Option<Strategy>,

        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

/// Where a command's task list comes from.
#[derive(Debug, Clone, Default, Args)]
pub struct TaskSource {
    /// JSON file holding an array of tasks. Replaces the list.
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Add one task by hand, after `--input` is loaded. Repeatable.
    ///
    /// Fields are `key=value` pairs separated by `;`, with keys `id`,
    /// `title`, `due`, `hours`, `importance` and `deps`, e.g.
    /// `--task "title=Review;importance=8;deps=T1,T2"`.
    #[arg(long = "task", value_name = "FIELDS", value_parser = parse_task_fields)]
    pub drafts: Vec<TaskDraft>,
}

/// Parse a `--task` value into the raw form fields it stands for.
///
/// Only the syntax is checked here; field validation happens when the
/// draft is added to the store.
pub fn parse_task_fields(raw: &str) -> Result<TaskDraft, String> {
    let mut draft = TaskDraft::default();

    for pair in raw.split(';').filter(|p| !p.trim().is_empty()) {
        let (key, value) = pair
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, got '{}'", pair.trim()))?;

        let slot = match key.trim() {
            "id" => &mut draft.id,
            "title" => &mut draft.title,
            "due" => &mut draft.due_date,
            "hours" => &mut draft.estimated_hours,
            "importance" => &mut draft.importance,
            "deps" => &mut draft.dependencies,
            other => {
                return Err(format!(
                    "unknown task field '{other}' (expected id, title, due, hours, importance or deps)"
                ));
            }
        };
        *slot = value.to_string();
    }

    Ok(draft)
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
