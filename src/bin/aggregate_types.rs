//! Writes `../types.json` from every pallet's `../pallets/<name>/types.json`.
//!
//! Run from the node repository's `scripts/` directory. Takes no arguments;
//! set `RUST_LOG=debug` to see each pallet as it is merged.

use anyhow::{Context, Result, bail};
use pallet_types::aggregate;
use std::env;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    if let Err(err) = run() {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    match parse_args()? {
        Command::Help => {
            print_usage();
            Ok(())
        }
        Command::Aggregate => {
            aggregate().context("aggregating pallet types")?;
            Ok(())
        }
    }
}

enum Command {
    Aggregate,
    Help,
}

fn parse_args() -> Result<Command> {
    let mut args = env::args_os().skip(1);
    let Some(arg) = args.next() else {
        return Ok(Command::Aggregate);
    };
    match arg.to_str() {
        Some("--help") | Some("-h") => Ok(Command::Help),
        Some(other) => bail!("unexpected argument: {other}\n\n{}", usage()),
        None => bail!("argument is not valid UTF-8"),
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn usage() -> &'static str {
    "Usage: aggregate-types\n\nMerges ../pallets/<pallet>/types.json for every runtime pallet into ../types.json.\n"
}

fn print_usage() {
    print!("{}", usage());
}
