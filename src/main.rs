//! chunktree CLI - inspect and compare merkle trees over files
//!
//! Every command builds trees in memory from the given files; nothing is
//! persisted between invocations.

use anyhow::Context;
use chunktree::{DepthFirstOrder, HashAlgorithm, MerkleTree, Node, TreeBuilder, TreeConfig};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "chunktree")]
#[command(about = "Build, walk and diff content-addressed merkle trees over files")]
#[command(version)]
struct Cli {
    /// Maximum bytes per chunk
    #[arg(short, long, env = "CHUNKTREE_LEAF_SIZE", default_value_t = chunktree::tree::DEFAULT_LEAF_SIZE)]
    leaf_size: usize,

    /// Hash algorithm (blake3 or sha256)
    #[arg(short, long, env = "CHUNKTREE_ALGORITHM", default_value = "blake3")]
    algorithm: HashAlgorithm,

    /// Output format (json or text)
    #[arg(short, long, default_value = "json")]
    format: OutputFormat,

    /// Log level for diagnostics on stderr (overridden by CHUNKTREE_LOG)
    #[arg(long, default_value = "warn")]
    log_level: Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
enum WalkOrder {
    Pre,
    In,
    Post,
    Level,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the root digest and shape of a file's tree
    Root {
        /// Input file
        file: PathBuf,
    },

    /// Show the root node with its immediate children
    Show {
        /// Input file
        file: PathBuf,
    },

    /// List the chunks a file is split into
    Chunks {
        /// Input file
        file: PathBuf,
    },

    /// List the leaves of a file's tree, padding included
    Leaves {
        /// Input file
        file: PathBuf,
    },

    /// Walk every node of a file's tree
    Walk {
        /// Input file
        file: PathBuf,
        /// Visit order
        #[arg(short, long, default_value = "pre")]
        order: WalkOrder,
    },

    /// Compare two files and report differing chunks
    Diff {
        /// Old version
        old: PathBuf,
        /// New version
        new: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env("CHUNKTREE_LOG")
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_string().to_lowercase()));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(filter)
        .init();

    let builder = TreeBuilder::new(
        TreeConfig::default()
            .with_leaf_size(cli.leaf_size)
            .with_algorithm(cli.algorithm),
    )?;

    match cli.command {
        Commands::Root { file } => {
            let tree = build_file(&builder, &file)?;
            output(
                &cli.format,
                &serde_json::json!({
                    "file": file.display().to_string(),
                    "root": tree.root_digest().to_hex(),
                    "algorithm": tree.algorithm(),
                    "leaf_size": tree.leaf_size(),
                    "content_len": tree.content_len(),
                    "chunks": tree.chunk_count(),
                    "height": tree.height(),
                    "node_count": tree.node_count()
                }),
            );
        }

        Commands::Show { file } => {
            let tree = build_file(&builder, &file)?;
            match cli.format {
                OutputFormat::Text => print!("{}", tree.root()),
                OutputFormat::Json => output(
                    &cli.format,
                    &serde_json::to_value(tree.root().summary())?,
                ),
            }
        }

        Commands::Chunks { file } => {
            let tree = build_file(&builder, &file)?;
            let chunks: Vec<_> = tree
                .real_leaves()
                .iter()
                .enumerate()
                .map(|(index, leaf)| {
                    let range = tree.chunk_range(index);
                    serde_json::json!({
                        "index": index,
                        "start": range.start,
                        "end": range.end,
                        "digest": leaf.digest().to_hex()
                    })
                })
                .collect();
            output(
                &cli.format,
                &serde_json::json!({
                    "count": chunks.len(),
                    "chunks": chunks
                }),
            );
        }

        Commands::Leaves { file } => {
            let tree = build_file(&builder, &file)?;
            let leaves = summaries(&tree.leaves());
            output(
                &cli.format,
                &serde_json::json!({
                    "count": leaves.len(),
                    "leaves": leaves
                }),
            );
        }

        Commands::Walk { file, order } => {
            let tree = build_file(&builder, &file)?;
            let nodes = match order {
                WalkOrder::Pre => tree.depth_first(DepthFirstOrder::Pre),
                WalkOrder::In => tree.depth_first(DepthFirstOrder::In),
                WalkOrder::Post => tree.depth_first(DepthFirstOrder::Post),
                WalkOrder::Level => tree.breadth_first(),
            };
            let nodes = summaries(&nodes);
            output(
                &cli.format,
                &serde_json::json!({
                    "order": format!("{:?}", order).to_lowercase(),
                    "count": nodes.len(),
                    "nodes": nodes
                }),
            );
        }

        Commands::Diff { old, new } => {
            let old_tree = build_file(&builder, &old)?;
            let new_tree = build_file(&builder, &new)?;
            let diff = old_tree.diff(&new_tree)?;
            let ranges: Vec<_> = old_tree
                .changed_ranges(&new_tree)?
                .into_iter()
                .map(|r| serde_json::json!({ "start": r.start, "end": r.end }))
                .collect();
            info!(changed = diff.len(), "diff complete");
            output(
                &cli.format,
                &serde_json::json!({
                    "old": old_tree.root_digest().to_hex(),
                    "new": new_tree.root_digest().to_hex(),
                    "equal": old_tree.equal(&new_tree),
                    "changed": diff.len(),
                    "indices": diff.indices(),
                    "ranges": ranges
                }),
            );
        }
    }

    Ok(())
}

fn build_file(builder: &TreeBuilder, path: &Path) -> anyhow::Result<MerkleTree> {
    let content =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let tree = builder
        .build(content)
        .with_context(|| format!("Failed to build tree for {}", path.display()))?;
    info!(file = %path.display(), root = %tree.root_digest().short(), "built tree");
    Ok(tree)
}

fn summaries(nodes: &[&Node]) -> Vec<chunktree::NodeSummary> {
    nodes.iter().map(|n| n.summary()).collect()
}

fn output(format: &OutputFormat, value: &serde_json::Value) {
    match format {
        OutputFormat::Json => {
            println!("{}", value);
        }
        OutputFormat::Text => {
            println!(
                "{}",
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            );
        }
    }
}
