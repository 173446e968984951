//! `jsontree` CLI: render, check and filter JSON documents from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Re-render JSON (stdin -> stdout)
//! echo '{"name":"PA","credits":6}' | jsontree render
//!
//! # Pretty-print objects from file to file
//! jsontree render --pretty -i course.json -o course.txt
//!
//! # Report type uniformity and key uniqueness
//! jsontree check -i course.json
//!
//! # Keep only scalar entries named "name" whose value is "PA" or "André"
//! jsontree filter --key name --value PA,André -i course.json
//!
//! # Log traversal details to stderr
//! jsontree -v check -i course.json
//! ```

mod document;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use document::Document;
use jsontree::JsonValue;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "jsontree",
    version,
    about = "Render, check and filter JSON value trees"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log traversal details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render JSON in the tree's own text format
    Render {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Put object entries on their own tab-indented lines
        #[arg(long)]
        pretty: bool,
    },
    /// Report whether the document is type-uniform and free of duplicate keys
    Check {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
    /// Keep scalars matching the given keys and values, pruning empty containers
    Filter {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Comma-separated keys allowed for scalar object entries
        #[arg(long)]
        key: Option<String>,
        /// Comma-separated scalar texts to keep (strings without quotes)
        #[arg(long)]
        value: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Render {
            input,
            output,
            pretty,
        } => {
            let tree = read_tree(input.as_deref())?;
            write_output(output.as_deref(), &tree.render(pretty))?;
        }
        Commands::Check { input } => {
            let tree = read_tree(input.as_deref())?;
            println!("uniform: {}", tree.is_uniform());
            println!("unique-keys: {}", tree.has_unique_keys());
        }
        Commands::Filter {
            input,
            output,
            key,
            value,
        } => {
            let tree = read_tree(input.as_deref())?;
            let keys = split_list(key.as_deref());
            let values = split_list(value.as_deref());
            debug!(?keys, ?values, "filter lists");

            let accept_value = |v: &JsonValue| match &values {
                Some(values) => values.iter().any(|wanted| *wanted == scalar_text(v)),
                None => true,
            };
            let accept_key = |k: &str| match &keys {
                Some(keys) => keys.iter().any(|wanted| wanted == k),
                None => true,
            };

            let filtered = match &tree {
                JsonValue::Array(array) => {
                    JsonValue::Array(array.filter(accept_value, accept_key))
                }
                JsonValue::Object(object) => {
                    JsonValue::Object(object.filter(accept_value, accept_key))
                }
                other => bail!(
                    "Cannot filter a {} document: the root must be an array or an object",
                    other.kind().name()
                ),
            };
            write_output(output.as_deref(), &filtered.render(false))?;
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `--verbose` forces `debug`; otherwise
/// `RUST_LOG` applies, defaulting to `warn`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Split a comma-separated list. `None` means "accept everything"; empty
/// items are dropped.
///
/// - `--key name,office` produces `Some(["name", "office"])`
/// - an omitted `--key` produces `None`
fn split_list(raw: Option<&str>) -> Option<Vec<String>> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    })
}

/// Compact text of a scalar, with strings left unquoted.
fn scalar_text(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.render(false),
    }
}

/// Parse the input into a tree, keeping repeated object keys.
fn read_tree(path: Option<&str>) -> Result<JsonValue> {
    let text = read_input(path)?;
    let Document(tree) =
        serde_json::from_str(&text).context("Failed to parse input as JSON")?;
    info!(kind = tree.kind().name(), bytes = text.len(), "read document");
    Ok(tree)
}

fn read_input(path: Option<&str>) -> Result<String> {
    let mut buf = String::new();
    match path {
        Some(path) => {
            File::open(path)
                .and_then(|mut file| file.read_to_string(&mut buf))
                .with_context(|| format!("Failed to read file: {}", path))?;
        }
        None => {
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
        }
    }
    Ok(buf)
}

/// Write `rendered` followed by a newline to the file, or to stdout.
fn write_output(path: Option<&str>, rendered: &str) -> Result<()> {
    let target = path.unwrap_or("stdout");
    let mut out: BufWriter<Box<dyn Write>> = match path {
        Some(path) => BufWriter::new(Box::new(
            File::create(path).with_context(|| format!("Failed to write file: {}", path))?,
        )),
        None => BufWriter::new(Box::new(io::stdout().lock())),
    };
    writeln!(out, "{}", rendered)
        .and_then(|()| out.flush())
        .with_context(|| format!("Failed to write to {}", target))?;
    Ok(())
}
