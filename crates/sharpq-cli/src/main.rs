use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sharpq_config::SharpqConfig;
use sharpq_query::SourceForest;

mod cli;
mod commands;
mod output;

fn main() {
    if let Err(error) = run() {
        eprintln!("sharpq error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let flags = cli.global_flags();
    init_tracing(flags.quiet, flags.verbose)?;

    let project_root = resolve_project_root(flags.project.as_deref())?;

    let config = SharpqConfig::load_for(&project_root)
        .context("failed to load sharpq configuration")?;
    let entry_path = config.forest.entry_path_for(&project_root);

    let forest = SourceForest::load(&entry_path, &config.forest.load_options())
        .with_context(|| format!("failed to load C# sources under {}", entry_path.display()))?;
    if forest.is_empty() {
        tracing::warn!(entry = %entry_path.display(), "no C# files found");
    }

    let render = flags.render_options(&config.output);
    commands::dispatch::dispatch(&cli.command, &forest, &render)
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("SHARPQ_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

fn resolve_project_root(project_override: Option<&str>) -> anyhow::Result<PathBuf> {
    if let Some(path) = project_override {
        let explicit = PathBuf::from(path);
        if explicit.is_dir() {
            return Ok(explicit);
        }
        anyhow::bail!(
            "invalid --project '{}': directory does not exist",
            explicit.display()
        );
    }

    std::env::current_dir().context("failed to read current directory")
}
