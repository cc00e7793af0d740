use std::fs::File;
use std::io::{stdin, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SequenceCheckArg {
    Before,
    After,
}

#[derive(Parser, Debug)]
#[command(
    name = "omitempty",
    about = "Strip empty fields (null, blank strings, zeros, empty objects) from JSON",
    version
)]
struct Args {
    /// Also drop `false` booleans
    #[arg(long)]
    omit_false: bool,

    /// When to test sequence elements for emptiness: before or after pruning them
    #[arg(long, value_enum, default_value_t = SequenceCheckArg::Before)]
    sequence_check: SequenceCheckArg,

    /// Fail when containers nest deeper than this
    #[arg(long)]
    max_depth: Option<usize>,

    /// Single-line JSON output (default is two-space indented)
    #[arg(long, default_value_t = false)]
    compact: bool,

    /// Increase log verbosity on stderr (-v, -vv, -vvv); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let value = match &args.input {
        Some(path) => {
            let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
            omitempty::json::from_reader(f)
        }
        None => omitempty::json::from_reader(stdin().lock()),
    }
    .context("parsing input JSON")?;
    debug!(top_level = ?value.len_entries(), "decoded input");

    let sequence_check = match args.sequence_check {
        SequenceCheckArg::Before => omitempty::SequenceCheck::BeforePrune,
        SequenceCheckArg::After => omitempty::SequenceCheck::AfterPrune,
    };
    let options = omitempty::Options {
        omit_false_booleans: args.omit_false,
        sequence_check,
        max_depth: args.max_depth,
    };

    let pruned = omitempty::try_prune(&value, &options)?;
    info!(
        before = value.len_entries(),
        after = pruned.len_entries(),
        "pruned top-level entries"
    );

    omitempty::json::to_writer(stdout().lock(), &pruned, !args.compact)?;

    Ok(())
}
