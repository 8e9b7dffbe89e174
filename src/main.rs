//! repo-indexer - CLI entry point
//!
//! Indexes a local repository directory and writes the structural index
//! as JSON for downstream documentation generation.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use repo_indexer::{Grammar, IndexConfig, RepoIndexer};

#[derive(Parser, Debug)]
#[command(author, version, about = "Structural source-code indexer", long_about = None)]
struct Cli {
    /// Repository directory to index
    root: PathBuf,

    /// Additional directory names to ignore (repeatable)
    #[arg(long = "ignore")]
    ignore: Vec<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "repo_indexer=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let mut config = IndexConfig::from_env();
    config.extra_ignore_dirs.extend(cli.ignore.iter().cloned());

    info!("Starting repo-indexer v{}", env!("CARGO_PKG_VERSION"));

    // Grammar construction happens once, before any file is touched
    let grammar = Grammar::python();
    let mut indexer = RepoIndexer::new(&grammar, &config)?;
    let index = indexer.index(&cli.root)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&index)?
    } else {
        serde_json::to_string(&index)?
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, json)?;
            info!("Wrote index to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
