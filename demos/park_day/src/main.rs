//! park_day — scenario driver for the park ride simulator.
//!
//! Runs a fixed set of scenarios against fresh rides, each built with
//! `RideBuilder` so no state leaks between them.  The import scenario reads
//! back the file written by the export scenario when both run together.
//!
//! Status lines go through `log`; set `RUST_LOG=debug` to see individual
//! boarding events.

mod scenarios;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};

use scenarios::ScenarioCtx;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scenario {
    /// Queue management: enqueue five, remove two
    Queue,
    /// Ride history with duplicate detection
    History,
    /// Sorted ride history
    Sorted,
    /// Two boarding cycles at capacity 4
    Cycle,
    /// Export ride history to a dated file
    Export,
    /// Import the exported file into a fresh ride
    Import,
    /// Seeded crowd drained over many cycles
    Crowd,
    /// Every scenario above, in order
    All,
}

#[derive(Debug, Parser)]
#[command(name = "park_day")]
#[command(about = "Run amusement-ride queue, cycle, and history scenarios")]
struct Args {
    /// Scenario to run
    #[arg(long, value_enum, default_value_t = Scenario::All)]
    scenario: Scenario,

    /// Directory that exported history files are written to
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// History file for the import scenario (defaults to the export's output)
    #[arg(long)]
    import_file: Option<PathBuf>,

    /// Seed for the crowd scenario
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Visitors generated for the crowd scenario
    #[arg(long, default_value_t = 25)]
    crowd: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let mut ctx = ScenarioCtx {
        out_dir:     args.out_dir,
        import_file: args.import_file,
        seed:        args.seed,
        crowd:       args.crowd,
    };

    scenarios::run(args.scenario, &mut ctx)
}
