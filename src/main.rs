//! `icm` - map one Methode source document from the command line.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

use icm::{build_mapper, init_logging, map_json, AppConfig};

#[derive(Parser)]
#[command(name = "icm")]
#[command(version)]
#[command(about = "Methode article internal components mapper")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    #[command(
        about = "Map a JSON-encoded source document to internal components",
        after_help = "Example:\n    icm map --document story.json --config icm.yaml --preview"
    )]
    Map(MapArgs),
}

#[derive(Args)]
struct MapArgs {
    /// JSON source document (`-` reads stdin).
    #[arg(long)]
    document: PathBuf,

    /// YAML configuration file. Defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Transaction id; generated when omitted.
    #[arg(long)]
    transaction_id: Option<String>,

    /// RFC 3339 last-modified timestamp; now when omitted.
    #[arg(long)]
    last_modified: Option<DateTime<Utc>>,

    /// Map for preview instead of publication.
    #[arg(long)]
    preview: bool,
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Command::Map(args) => map(args),
    }
}

fn map(args: MapArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => AppConfig::default(),
    };
    init_logging(&config.logging)?;

    let source = if args.document.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin()).context("reading stdin")?
    } else {
        fs::read_to_string(&args.document)
            .with_context(|| format!("reading {}", args.document.display()))?
    };

    let transaction_id = args
        .transaction_id
        .unwrap_or_else(|| format!("tid_{}", Uuid::new_v4().simple()));
    let last_modified = args.last_modified.unwrap_or_else(Utc::now);

    let mapper = build_mapper(&config)?;
    let json = map_json(&mapper, &source, &transaction_id, last_modified, args.preview)?;
    println!("{json}");
    Ok(())
}
