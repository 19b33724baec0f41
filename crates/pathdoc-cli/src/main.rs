//! `pathdoc` CLI — read and write JSON documents by path from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Set values (stdin → stdout)
//! echo '{"name":"Alice"}' | pathdoc set 'tags[1]=admin' 'age=30'
//!
//! # Values are parsed as JSON, falling back to a plain string
//! pathdoc set -i data.json -o data.json 'meta.flags={"beta":true}'
//!
//! # Replace the whole document
//! pathdoc set '$=[]' < data.json
//!
//! # Reject malformed input instead of starting from null
//! pathdoc set --strict -i data.json 'a.b=1'
//!
//! # Read a value
//! pathdoc get -i data.json users.0.name
//!
//! # Pretty-print
//! pathdoc fmt -i data.json
//! ```
//!
//! Logging goes to stderr; `-v` enables debug output, otherwise `RUST_LOG`
//! applies (default `warn`).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pathdoc::{parse_path, Document, Section};
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pathdoc",
    version,
    about = "Read and write JSON documents by path"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply PATH=VALUE assignments to a JSON document
    Set {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Fail on malformed input instead of starting from null
        #[arg(long)]
        strict: bool,
        /// Pretty-print the resulting JSON
        #[arg(long)]
        pretty: bool,
        /// Assignments applied in order, e.g. `a.b[2]=true`
        #[arg(required = true)]
        assignments: Vec<String>,
    },
    /// Print the value at PATH as JSON
    Get {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Path to read, e.g. `users.0.name` (`$` for the whole document)
        path: String,
    },
    /// Pretty-print a JSON document
    Fmt {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Set {
            input,
            output,
            strict,
            pretty,
            assignments,
        } => {
            let mut doc = load_document(input.as_deref(), strict)?;
            for raw in &assignments {
                let (sections, value) = parse_assignment(raw)?;
                tracing::debug!(path = %pathdoc::format_path(&sections), "applying assignment");
                doc.sets(value, sections);
            }
            let encoded = if pretty {
                doc.to_json_string_pretty()
            } else {
                doc.to_json_string()
            };
            let json = encoded.context("Failed to encode document")?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::Get { input, path } => {
            let doc = load_document(input.as_deref(), true)?;
            let sections = path_sections(&path);
            let value = doc
                .gets(&sections)
                .with_context(|| format!("No value at path: {}", path))?;
            write_output(None, &serde_json::to_string(value)?)?;
        }
        Commands::Fmt { input, output } => {
            let doc = load_document(input.as_deref(), true)?;
            let pretty = doc
                .to_json_string_pretty()
                .context("Failed to encode document")?;
            write_output(output.as_deref(), &pretty)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Split `PATH=VALUE` on the first `=`.
///
/// - VALUE is parsed as JSON; anything that is not valid JSON is taken as a
///   string, so `name=Alice` and `name="Alice"` are equivalent
/// - a PATH of `$` or an empty PATH addresses the root
fn parse_assignment(raw: &str) -> Result<(Vec<Section>, Value)> {
    let (path, value) = raw
        .split_once('=')
        .with_context(|| format!("Invalid assignment '{}': expected PATH=VALUE", raw))?;
    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((path_sections(path), value))
}

fn path_sections(path: &str) -> Vec<Section> {
    match path {
        "" | "$" => Vec::new(),
        _ => parse_path(path),
    }
}

fn load_document(path: Option<&str>, strict: bool) -> Result<Document> {
    let reader: Box<dyn Read> = match path {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to read file: {}", path))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    if strict {
        Document::parse_reader(reader).context("Failed to decode JSON input")
    } else {
        Ok(Document::from_reader(reader))
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, format!("{}\n", content))
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn assignment_values_parse_as_json_or_string() {
        let (sections, value) = parse_assignment("a.b=1").unwrap();
        assert_eq!(sections, vec![Section::key("a"), Section::key("b")]);
        assert_eq!(value, json!(1));

        let (_, value) = parse_assignment("name=Alice").unwrap();
        assert_eq!(value, json!("Alice"));

        let (_, value) = parse_assignment("x={\"k\":[1]}").unwrap();
        assert_eq!(value, json!({"k": [1]}));
    }

    #[test]
    fn assignment_splits_on_first_equals() {
        let (sections, value) = parse_assignment("expr=a=b").unwrap();
        assert_eq!(sections, vec![Section::key("expr")]);
        assert_eq!(value, json!("a=b"));
    }

    #[test]
    fn root_assignment_has_no_sections() {
        let (sections, value) = parse_assignment("$=[1]").unwrap();
        assert!(sections.is_empty());
        assert_eq!(value, json!([1]));
        assert!(parse_assignment("=null").unwrap().0.is_empty());
    }

    #[test]
    fn assignment_without_equals_is_rejected() {
        assert!(parse_assignment("a.b").is_err());
    }
}
