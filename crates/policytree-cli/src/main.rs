//! CLI entry point for policytree.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, logging setup, and
//! exit codes. All behavior lives in the `policytree-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use policytree_app::{
    LoadInput, Loaded, OutputFormat, SchemaKind, load, render_policy, render_summary, run_hash,
    run_list, run_select, run_summary, schema_json,
};
use policytree_settings::Overrides;
use tracing_subscriber::EnvFilter;

/// Exit code when a path selects nothing.
const EXIT_NO_MATCH: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "policytree",
    version,
    about = "Select, summarize, and hash hierarchical policy trees"
)]
struct Cli {
    /// Path to the policy document (TOML).
    #[arg(long, global = true, default_value = "policy.toml")]
    policy: Utf8PathBuf,

    /// Path to policytree config TOML (optional; defaults apply when missing).
    #[arg(long, global = true, default_value = "policytree.toml")]
    config: Utf8PathBuf,

    /// Path to a provenance index (JSON) mapping policy names to their origin.
    #[arg(long, global = true)]
    meta: Option<Utf8PathBuf>,

    /// Override hash mode (structural|full).
    #[arg(long, global = true)]
    hash: Option<String>,

    /// Override the deepest sub-policy level expanded when rendering.
    #[arg(long, global = true)]
    depth: Option<u32>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List top-level policies.
    List,

    /// Print the policy (or check) selected by a slash-separated path.
    Select {
        /// Path such as `aws/ec2/no-public-ip`; the first segment names a top-level policy.
        path: String,

        /// Output format (json|markdown|tree).
        #[arg(long, default_value = "tree")]
        format: String,
    },

    /// Summarize totals, hashes, and provenance for every top-level policy.
    Summary {
        /// Output format (json|markdown).
        #[arg(long, default_value = "markdown")]
        format: String,
    },

    /// Print content hashes of every top-level policy, or of the node at a path.
    Hash {
        path: Option<String>,
    },

    /// Print a JSON schema (config|document).
    Schema {
        kind: String,
    },
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.cmd {
        Commands::List => cmd_list(&cli),
        Commands::Select { path, format } => cmd_select(&cli, path, format),
        Commands::Summary { format } => cmd_summary(&cli, format),
        Commands::Hash { path } => cmd_hash(&cli, path.as_deref()),
        Commands::Schema { kind } => cmd_schema(kind),
    }
}

/// Logs go to stderr, filtered by `POLICYTREE_LOG` (default `warn`).
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("POLICYTREE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}

fn load_inputs(cli: &Cli) -> anyhow::Result<Loaded> {
    let document_text = read_text(&cli.policy).context("read policy document")?;
    // Missing config file is allowed; defaults apply.
    let config_text = std::fs::read_to_string(&cli.config).unwrap_or_default();
    let meta_text = match &cli.meta {
        Some(path) => Some(read_text(path).context("read provenance index")?),
        None => None,
    };

    load(LoadInput {
        document_text: &document_text,
        config_text: &config_text,
        meta_text: meta_text.as_deref(),
        overrides: Overrides {
            hash: cli.hash.clone(),
            depth: cli.depth,
        },
    })
}

fn read_text(path: &Utf8Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read {}", path))
}

fn cmd_list(cli: &Cli) -> anyhow::Result<()> {
    let loaded = load_inputs(cli)?;
    for entry in run_list(&loaded) {
        println!("{}\t{}", entry.display, entry.version);
    }
    Ok(())
}

fn cmd_select(cli: &Cli, path: &str, format: &str) -> anyhow::Result<()> {
    let format: OutputFormat = format.parse()?;
    let loaded = load_inputs(cli)?;

    match run_select(&loaded, path) {
        Some(policy) => {
            print!("{}", render_policy(&policy, &loaded.config, format)?);
            Ok(())
        }
        None => {
            eprintln!("policytree: nothing matches `{path}`");
            std::process::exit(EXIT_NO_MATCH);
        }
    }
}

fn cmd_summary(cli: &Cli, format: &str) -> anyhow::Result<()> {
    let format: OutputFormat = format.parse()?;
    let loaded = load_inputs(cli)?;
    let report = run_summary(&loaded);
    print!("{}", render_summary(&report, format)?);
    Ok(())
}

fn cmd_hash(cli: &Cli, path: Option<&str>) -> anyhow::Result<()> {
    let loaded = load_inputs(cli)?;

    match run_hash(&loaded, path) {
        Some(entries) => {
            for entry in entries {
                println!("{}  {}", entry.hash, entry.name);
            }
            Ok(())
        }
        None => {
            eprintln!("policytree: nothing matches `{}`", path.unwrap_or_default());
            std::process::exit(EXIT_NO_MATCH);
        }
    }
}

fn cmd_schema(kind: &str) -> anyhow::Result<()> {
    let kind: SchemaKind = kind.parse()?;
    print!("{}", schema_json(kind)?);
    Ok(())
}
