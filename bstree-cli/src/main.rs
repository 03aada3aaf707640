//! bstree-cli - demonstration driver for the `bstree` container
//!
//! Usage:
//!   bstree-cli demo [--order pre|in|post] [--remove KEY] [--search KEY]
//!   bstree-cli run <script|->
//!
//! Logging is configured through `RUST_LOG`; `--verbose` raises the default
//! filter to `debug`.

mod demo;
mod script;

use anyhow::Result;
use bstree::{BinarySearchTree, DuplicatePolicy, TreeConfig};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bstree-cli")]
#[command(about = "Ordered key-value container backed by an unbalanced binary search tree")]
struct Cli {
    /// Refuse to insert a key that is already present
    #[arg(long, global = true)]
    reject_duplicates: bool,

    /// Log debug diagnostics unless RUST_LOG says otherwise
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay the canonical insert/remove/search scenario
    Demo(demo::DemoArgs),
    /// Execute an operation script, one command per line
    Run(script::RunArgs),
}

impl Cli {
    fn tree(&self) -> BinarySearchTree<i32, i32> {
        let policy = if self.reject_duplicates {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::Allow
        };
        BinarySearchTree::with_config(TreeConfig::new().duplicates(policy))
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose {
        "bstree=debug,bstree_cli=debug"
    } else {
        "bstree=info,bstree_cli=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut tree = cli.tree();
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Commands::Demo(args) => demo::run(&args, &mut tree, &mut stdout),
        Commands::Run(args) => script::run(&args, &mut tree, &mut stdout),
    }
}
