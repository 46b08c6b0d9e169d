// ABOUTME: Entry point for the docktree CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;

use clap::Parser;
use cli::{Cli, Commands};
use docktree::config::{self, Config};
use docktree::descriptor::RawDescriptor;
use docktree::diagnostics::Diagnostics;
use docktree::error::{Error, Result};
use docktree::output::{Output, OutputMode, render_keys};
use docktree::{ResourceKind, build_tree_with_diagnostics};
use std::env;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let result = run(cli);

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render {
            kind,
            descriptors,
            settings,
            now,
            json,
            quiet,
        } => {
            let mode = if json {
                OutputMode::Json
            } else if quiet {
                OutputMode::Quiet
            } else {
                OutputMode::Normal
            };
            render(kind, &descriptors, settings, now, mode)
        }
        Commands::Keys { kind } => {
            print!("{}", render_keys(kind.adapter()));
            Ok(())
        }
        Commands::Init { force } => {
            let cwd = env::current_dir()?;
            let path = config::init_config(&cwd, force)?;
            println!("Created {}", path.display());
            Ok(())
        }
    }
}

fn render(
    kind: ResourceKind,
    descriptors: &Path,
    settings: Option<PathBuf>,
    now: Option<i64>,
    mode: OutputMode,
) -> Result<()> {
    let descriptors =
        RawDescriptor::list_from_json(&read_input(descriptors)?).map_err(Error::Descriptors)?;

    let config = match settings {
        Some(path) => Config::load(&path)?,
        None => Config::discover_or_default(&env::current_dir()?)?,
    };

    let now = now.unwrap_or_else(|| chrono::Utc::now().timestamp());
    let mut diagnostics = Diagnostics::default();
    let nodes = build_tree_with_diagnostics(
        kind,
        &descriptors,
        config.settings_for(kind),
        now,
        &mut diagnostics,
    );
    tracing::debug!(
        warnings = diagnostics.warnings().len(),
        "built {} tree",
        kind
    );

    Output::new(mode).print(&nodes)
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}
