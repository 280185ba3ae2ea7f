//! hashroot CLI - integrity digests over line-oriented record files
//!
//! Builds the hash tree for a file, prints its root digest and compares it
//! against the digest stored by the previous run.

use anyhow::Context;
use clap::{Parser, Subcommand};
use hashroot::input::read_records_from;
use hashroot::tree::{node_views, render};
use hashroot::{check, Config, FileStore, HashConfig, MerkleTree, Status, TreeBuilder, TreeShape};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Exit code reported when the stored digest does not match
const EXIT_TAMPERED: i32 = 2;

#[derive(Parser)]
#[command(name = "hashroot")]
#[command(about = "Detect changes to an ordered record file via a hash-tree root digest")]
#[command(version)]
struct Cli {
    /// Output format (json or text)
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hash algorithm: blake3 or sha256 (overrides config)
    #[arg(short, long)]
    algorithm: Option<String>,

    /// Tree shape: halving or compat (overrides config)
    #[arg(long)]
    shape: Option<TreeShape>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare the file's root digest with the stored one and update the store
    Check {
        /// Record file, one record per line
        input: PathBuf,
        /// Digest file (default: <input>.root)
        #[arg(short, long)]
        store: Option<PathBuf>,
        /// Also print every tree node
        #[arg(long)]
        show_tree: bool,
    },

    /// Print the root digest without touching any store
    Root {
        /// Record file, one record per line
        input: PathBuf,
    },

    /// Print every tree node, depth-first
    Tree {
        /// Record file, one record per line
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = Config::discover(cli.config.as_deref())?;
    let hash_config = match &cli.algorithm {
        Some(name) => HashConfig::from_name(name)?,
        None => config.hash_config()?,
    };
    let hasher = hash_config.resolve();
    let shape = cli.shape.unwrap_or(config.shape);
    let builder = TreeBuilder::new(hasher.as_ref()).with_shape(shape);

    match &cli.command {
        Commands::Check {
            input,
            store,
            show_tree,
        } => {
            let (records, tree) = build_tree(&builder, input)?;
            let store = match store.as_ref().or(config.store_path.as_ref()) {
                Some(path) => FileStore::new(path),
                None => FileStore::beside(input),
            };
            let verdict = check(tree.root_digest(), &store)
                .with_context(|| format!("checking against {}", store.path().display()))?;

            match cli.format {
                OutputFormat::Json => {
                    let mut value = serde_json::json!({
                        "status": verdict.status,
                        "root": verdict.computed,
                        "previous": verdict.previous,
                        "store": store.path().display().to_string(),
                        "records": tree.record_count(),
                        "algorithm": hasher.name(),
                        "shape": shape.as_str()
                    });
                    if *show_tree {
                        value["nodes"] = serde_json::to_value(node_views(&tree))?;
                    }
                    output(&value)?;
                }
                OutputFormat::Text => {
                    if *show_tree {
                        println!("Input: [{}]", records.join(", "));
                        print!("{}", render(&tree));
                    }
                    println!("Records: {}", tree.record_count());
                    println!("Root: {}", verdict.computed);
                    if let Some(previous) = &verdict.previous {
                        println!("Stored: {}", previous);
                    }
                    println!("Status: {}", verdict.status);
                }
            }

            if verdict.status == Status::Tampered {
                std::process::exit(EXIT_TAMPERED);
            }
        }

        Commands::Root { input } => {
            let (_, tree) = build_tree(&builder, input)?;
            match cli.format {
                OutputFormat::Json => output(&serde_json::json!({
                    "root": tree.root_digest(),
                    "records": tree.record_count(),
                    "algorithm": hasher.name(),
                    "shape": shape.as_str()
                }))?,
                OutputFormat::Text => println!("{}", tree.root_digest()),
            }
        }

        Commands::Tree { input } => {
            let (_, tree) = build_tree(&builder, input)?;
            match cli.format {
                OutputFormat::Json => output(&serde_json::json!({
                    "root": tree.root_digest(),
                    "nodes": node_views(&tree)
                }))?,
                OutputFormat::Text => print!("{}", render(&tree)),
            }
        }
    }

    Ok(())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn build_tree(builder: &TreeBuilder<'_>, input: &Path) -> anyhow::Result<(Vec<String>, MerkleTree)> {
    let records = read_records_from(input)
        .with_context(|| format!("reading records from {}", input.display()))?;
    let tree = builder
        .build(&records)
        .with_context(|| format!("building tree for {}", input.display()))?;
    Ok((records, tree))
}

fn output(value: &serde_json::Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
