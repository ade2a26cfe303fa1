//! tago: writes an Emacs TAGS file for Go sources.

mod commands_tags;

use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};
use tago_core::{LineErrorPolicy, RecordLayout, TagoConfig, WritePolicy};

#[derive(Parser)]
#[command(name = "tago", about = "Emacs etags for Go")]
#[command(version)]
struct Cli {
    /// Go source files, or directories to search for them
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Directory to save the tags file in (defaults to the current directory)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Name of the tags file (defaults to TAGS)
    #[arg(short, long)]
    name: Option<String>,

    /// Append to an existing tags file
    #[arg(short, long, conflicts_with = "overwrite")]
    append: bool,

    /// Replace an existing tags file
    #[arg(short, long)]
    overwrite: bool,

    /// Fail instead of skipping a tag whose source line can't be read
    #[arg(long)]
    strict: bool,

    /// Separate line text, name and position with the etags DEL/SOH bytes
    #[arg(long)]
    etags_delimiters: bool,

    /// Config file (defaults to ~/.tago/config.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Layer command-line flags over the loaded configuration.
    fn apply(&self, mut config: TagoConfig) -> TagoConfig {
        if let Some(dir) = &self.dir {
            config.output.dir = Some(dir.clone());
        }
        if let Some(name) = &self.name {
            config.output.file_name = name.clone();
        }
        if self.append {
            config.output.policy = WritePolicy::Append;
        } else if self.overwrite {
            config.output.policy = WritePolicy::Overwrite;
        }
        if self.strict {
            config.index.line_errors = LineErrorPolicy::Abort;
        }
        if self.etags_delimiters {
            config.index.layout = RecordLayout::Etags;
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the summary line only
    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();

    let config = cli.apply(load_config(cli.config.as_deref())?);
    let outcome = commands_tags::cmd_tags(&cli.paths, &config)?;

    println!(
        "{} {} tags from {} files to {}",
        "Wrote".green().bold(),
        outcome.tags,
        outcome.files,
        outcome.report.path.display()
    );
    if outcome.dropped > 0 {
        println!(
            "{} {} tags skipped (source line unreadable)",
            "Warning:".yellow().bold(),
            outcome.dropped
        );
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> anyhow::Result<TagoConfig> {
    match explicit {
        Some(path) => TagoConfig::load(path)
            .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", path.display(), e)),
        None => Ok(TagoConfig::load_or_default()),
    }
}
