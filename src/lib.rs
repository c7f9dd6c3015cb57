// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod graph;
pub mod logging;
pub mod scoring;
pub mod store;
pub mod types;
pub mod view;

use std::fs;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::cli::{CliArgs, Command, TaskSource};
use crate::config::resolve_config;
use crate::engine::{AnalysisView, Workbench};
use crate::graph::render_svg;
use crate::scoring::{HttpScoringBackend, ScoringBackend};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - the HTTP scoring backend
/// - the workbench holding the task store
/// - table / SVG output for the chosen command
///
/// Setup failures (config, HTTP client) come back as `Err`. Once the
/// workbench exists, every outcome is reported through its status line and
/// only the exit code tells success from failure.
pub async fn run(args: CliArgs) -> Result<ExitCode> {
    let cfg = resolve_config(args.config.as_deref())?;
    debug!(base_url = %cfg.api.base_url, strategy = %cfg.analysis.strategy, "configuration resolved");

    let backend = HttpScoringBackend::new(&cfg.api)?;
    let mut workbench = Workbench::new(backend, cfg.analysis.strategy);

    let outcome = dispatch(&mut workbench, args.command).await;
    eprintln!("{}", workbench.status().message);

    Ok(if outcome.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Run one command against `workbench`.
///
/// On failure the status line always describes the failure: workbench
/// actions set it themselves, anything else (unreadable input, unwritable
/// output) is recorded here.
pub async fn dispatch<B: ScoringBackend>(workbench: &mut Workbench<B>, command: Command) -> Result<()> {
    let outcome = execute(workbench, command).await;
    if let Err(err) = &outcome {
        if !workbench.status().is_error {
            let detail = format!("{err:#}");
            warn!(error = %detail, "command failed");
            workbench.report_error(detail);
        }
    }
    outcome
}

async fn execute<B: ScoringBackend>(workbench: &mut Workbench<B>, command: Command) -> Result<()> {
    match command {
        Command::List { source } => {
            load_tasks(workbench, &source)?;
            println!("{}", view::task_table(workbench.store().list()));
        }
        Command::Graph { source, output } => {
            load_tasks(workbench, &source)?;
            let svg = render_svg(&workbench.preview_graph());
            write_svg(output.as_deref(), &svg)?;
        }
        Command::Analyze {
            source,
            strategy,
            output,
        } => {
            load_tasks(workbench, &source)?;
            if let Some(strategy) = strategy {
                workbench.set_strategy(strategy);
            }
            let analysis = workbench.analyze().await?;
            print_analysis(&analysis);
            if output.is_some() {
                write_svg(output.as_deref(), &render_svg(&analysis.graph))?;
            }
        }
        Command::Suggest { strategy, output } => {
            if let Some(strategy) = strategy {
                workbench.set_strategy(strategy);
            }
            let analysis = workbench.suggest().await?;
            print_analysis(&analysis);
            if output.is_some() {
                write_svg(output.as_deref(), &render_svg(&analysis.graph))?;
            }
        }
    }

    Ok(())
}

/// Bulk-load `--input` (replacing the list), then append each `--task`.
fn load_tasks<B: ScoringBackend>(workbench: &mut Workbench<B>, source: &TaskSource) -> Result<()> {
    if let Some(path) = &source.input {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading task payload {}", path.display()))?;
        let count = workbench.load_json(&raw)?;
        info!(count, path = %path.display(), "tasks loaded");
    }

    for draft in &source.drafts {
        workbench.add_task(draft)?;
    }
    Ok(())
}

fn print_analysis(analysis: &AnalysisView) {
    println!("{}", view::strategy_pill(Some(analysis)));
    println!("{}", analysis.subtitle());
    if !analysis.tasks.is_empty() {
        println!("{}", view::analysis_table(&analysis.tasks));
    }
}

/// Write SVG to `path`, or to stdout when no path is given.
fn write_svg(path: Option<&Path>, svg: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, svg).with_context(|| format!("writing SVG to {}", path.display()))?;
            info!(path = %path.display(), "graph written");
        }
        None => print!("{svg}"),
    }
    Ok(())
}
