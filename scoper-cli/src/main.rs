use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use scoper_reflector::{corrections, ReferenceMap, Reflector, SymbolKind, STUBS_MAP_ENV};
use serde::Serialize;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scoper-reflect")]
#[command(version)]
#[command(about = "Classify PHP symbols as built-in or user code", long_about = None)]
struct Cli {
    /// Generated phpstorm-stubs-map.json (default: $SCOPER_STUBS_MAP)
    #[arg(long, global = true, value_name = "PATH")]
    stubs: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify class, interface, trait or enum names
    Class {
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
    },

    /// Classify function names (case-insensitive)
    Function {
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
    },

    /// Classify constant names
    Constant {
        #[arg(value_name = "NAME", required = true)]
        names: Vec<String>,
    },

    /// Show table sizes and correction counts
    Stats,
}

#[derive(Debug, Serialize, PartialEq)]
struct Verdict<'a> {
    kind: &'static str,
    name: &'a str,
    internal: bool,
}

#[derive(Debug, Serialize)]
struct TableStats {
    kind: &'static str,
    names: usize,
    corrections: usize,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let stubs = resolve_stubs_path(cli.stubs, std::env::var_os(STUBS_MAP_ENV));
    let reflector = load_reflector(stubs)?;

    let (kind, names) = match cli.command {
        Commands::Class { names } => (SymbolKind::Class, names),
        Commands::Function { names } => (SymbolKind::Function, names),
        Commands::Constant { names } => (SymbolKind::Constant, names),
        Commands::Stats => {
            let stats = collect_stats(&reflector);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                for row in &stats {
                    println!(
                        "{:<9} {:>6} names ({} corrections)",
                        row.kind, row.names, row.corrections
                    );
                }
            }
            return Ok(());
        }
    };

    let verdicts = classify(&reflector, kind, &names);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&verdicts)?);
    } else {
        for verdict in &verdicts {
            println!("{}", render_verdict(verdict));
        }
    }

    Ok(())
}

/// --stubs wins over the environment; an empty variable counts as unset
fn resolve_stubs_path(flag: Option<PathBuf>, env: Option<OsString>) -> Option<PathBuf> {
    flag.or_else(|| env.filter(|value| !value.is_empty()).map(PathBuf::from))
}

fn load_reflector(stubs: Option<PathBuf>) -> Result<Reflector> {
    match stubs {
        Some(path) => {
            log::debug!("Loading stubs map {}", path.display());
            let reference = ReferenceMap::from_file(&path)
                .with_context(|| format!("Failed to load stubs map {}", path.display()))?;
            Ok(Reflector::from_reference(&reference))
        }
        // Fails with a hint to set SCOPER_STUBS_MAP
        None => Reflector::new().context("Failed to load stubs map"),
    }
}

fn classify<'a>(reflector: &Reflector, kind: SymbolKind, names: &'a [String]) -> Vec<Verdict<'a>> {
    names
        .iter()
        .map(|name| Verdict {
            kind: kind.as_str(),
            name,
            internal: reflector.is_internal(kind, name),
        })
        .collect()
}

fn render_verdict(verdict: &Verdict<'_>) -> String {
    let label = if verdict.internal { "internal" } else { "user" };
    format!("{}\t{}", label, verdict.name)
}

fn collect_stats(reflector: &Reflector) -> Vec<TableStats> {
    SymbolKind::ALL
        .iter()
        .map(|&kind| TableStats {
            kind: kind.as_str(),
            names: reflector.len(kind),
            corrections: corrections(kind).len(),
        })
        .collect()
}
