#![deny(unsafe_code)]
//! CLI binary for the palette service.
//!
//! Subcommands:
//! - `list` — print every stored color record
//! - `colors` — print every record with its derived channels, HSV and luma
//! - `find` — exact-match lookup by id, hex or name
//! - `add <hex> <name>` — store a new color

mod error;
mod output;

use clap::{Args, Parser, Subcommand};
use error::CliError;
use palette_core::{sort_objects, transform_all, transform_each, ColorRecord, Order, SortKey};
use palette_store::config::DEFAULT_STORE_PATH;
use palette_store::{ColorStore, Filter, NewColor, StoreConfig};
use std::path::PathBuf;
use std::process;

/// Batches at least this large are transformed across worker threads.
const PARALLEL_THRESHOLD: usize = 1024;

#[derive(Parser)]
#[command(name = "palette", about = "Palette service CLI")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Path to the color store file.
    #[arg(long, global = true, env = "PALETTE_STORE", default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,

    /// Log at debug level (overrides RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all stored color records.
    List,
    /// List all colors with derived RGB, HSV and luma values.
    Colors {
        /// Order the output by this attribute (hue, saturation, value, chroma, luma, name).
        #[arg(long)]
        sort: Option<SortKey>,

        /// Sort in descending order.
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Report malformed records per item instead of failing the whole batch.
        #[arg(long, conflicts_with = "sort")]
        partial: bool,
    },
    /// Find colors by exact id, hex value or name. Without a filter, lists all.
    Find(FindArgs),
    /// Add a color to the store.
    Add {
        /// Hex value, e.g. "#C0FFEE".
        hex: String,
        /// Display name.
        name: String,
    },
}

#[derive(Args)]
#[group(multiple = false)]
struct FindArgs {
    /// Match the record id.
    #[arg(long)]
    id: Option<String>,

    /// Match the hex value exactly (case sensitive).
    #[arg(long)]
    hex: Option<String>,

    /// Match the name exactly.
    #[arg(long)]
    name: Option<String>,
}

impl FindArgs {
    fn into_filter(self) -> Filter {
        match (self.id, self.hex, self.name) {
            (Some(id), _, _) => Filter::ById(id),
            (_, Some(hex), _) => Filter::ByHex(hex),
            (_, _, Some(name)) => Filter::ByName(name),
            _ => Filter::All,
        }
    }
}

fn describe(filter: &Filter) -> String {
    match filter {
        Filter::All => "no colors in store".to_string(),
        Filter::ById(id) => format!("no color with id {id:?}"),
        Filter::ByHex(hex) => format!("no color with hex {hex:?}"),
        Filter::ByName(name) => format!("no color named {name:?}"),
    }
}

fn init_logging(verbose: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn load_all(store: &ColorStore) -> Result<Vec<ColorRecord>, CliError> {
    let records = store.find(&Filter::All);
    if records.is_empty() {
        return Err(CliError::NotFound(describe(&Filter::All)));
    }
    Ok(records)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config = StoreConfig::new(cli.store);
    let mut store = ColorStore::open(config)?;

    match cli.command {
        Command::List => {
            let records = load_all(&store)?;
            println!("{}", output::records(&records, cli.json)?);
        }
        Command::Colors {
            sort,
            desc,
            partial,
        } => {
            let records = load_all(&store)?;
            if partial {
                let results = transform_each(&records);
                let failed = results.iter().filter(|r| r.is_err()).count();
                if failed > 0 {
                    log::warn!("{failed} of {} records could not be transformed", records.len());
                }
                println!("{}", output::outcomes(&records, &results, cli.json)?);
            } else {
                let mut objects = if records.len() >= PARALLEL_THRESHOLD {
                    palette_core::par_transform_all(&records)?
                } else {
                    transform_all(&records)?
                };
                if let Some(key) = sort {
                    let order = if desc {
                        Order::Descending
                    } else {
                        Order::Ascending
                    };
                    sort_objects(&mut objects, key, order);
                }
                println!("{}", output::objects(&objects, cli.json)?);
            }
        }
        Command::Find(args) => {
            let filter = args.into_filter();
            let records = store.find(&filter);
            if records.is_empty() {
                return Err(CliError::NotFound(describe(&filter)));
            }
            println!("{}", output::records(&records, cli.json)?);
        }
        Command::Add { hex, name } => {
            let receipt = store.insert(NewColor { hex, name })?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&receipt)?);
            } else {
                println!("{}", receipt.inserted_id);
            }
        }
    }

    Ok(())
}

/// Formats an error for stderr, as JSON in `--json` mode. Falls back to the
/// plain line if the JSON cannot be produced.
fn error_report(e: &CliError, json_mode: bool) -> String {
    let plain = format!("error: {e}");
    if !json_mode {
        return plain;
    }
    let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
    serde_json::to_string_pretty(&j).unwrap_or(plain)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        eprintln!("{}", error_report(&e, json_mode));
        process::exit(e.exit_code());
    }
}
