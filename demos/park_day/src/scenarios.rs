//! Scenario bodies.  Each builds its own ride; only the exported file path
//! is carried between scenarios through [`ScenarioCtx`].

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use log::{info, warn};

use park_core::{CrowdRng, Employee, Visitor};
use park_ride::{CycleReport, RideBuilder, RideError, RideObserver, RideState};

use crate::Scenario;

/// Inputs and hand-over state shared by the scenarios of one run.
pub struct ScenarioCtx {
    pub out_dir:     PathBuf,
    pub import_file: Option<PathBuf>,
    pub seed:        u64,
    pub crowd:       usize,
}

/// Order used by `--scenario all`.  Import follows export so it can read
/// the file just written.
const ALL: [Scenario; 7] = [
    Scenario::Queue,
    Scenario::History,
    Scenario::Sorted,
    Scenario::Cycle,
    Scenario::Export,
    Scenario::Import,
    Scenario::Crowd,
];

pub fn run(scenario: Scenario, ctx: &mut ScenarioCtx) -> Result<()> {
    match scenario {
        Scenario::Queue   => queue_management(),
        Scenario::History => ride_history(),
        Scenario::Sorted  => sorted_history(),
        Scenario::Cycle   => ride_cycles(),
        Scenario::Export  => export(ctx)?,
        Scenario::Import  => import(ctx),
        Scenario::Crowd   => crowd(ctx),
        Scenario::All     => {
            for one in ALL {
                run(one, ctx)?;
            }
        }
    }
    Ok(())
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Tallies boarding across cycles and logs each completed cycle.
#[derive(Default)]
struct CycleTally {
    cycles:   u64,
    boarded:  usize,
    rejected: usize,
}

impl RideObserver for CycleTally {
    fn on_cycle_end(&mut self, report: &CycleReport) {
        self.cycles += 1;
        self.boarded += report.boarded;
        info!(
            "cycle {}: boarded {} ({} new to history), {} still waiting",
            report.cycle, report.boarded, report.recorded, report.remaining
        );
    }

    fn on_cycle_rejected(&mut self, _error: &RideError) {
        self.rejected += 1;
    }
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

fn queue_management() {
    info!("=== queue management ===");
    let operator = Employee::new("Mike Johnson", 40, "555-1234", "EMP002", "Water Ride");
    let mut ride = RideState::new("Splash Mountain", 3, Some(operator));

    for v in [
        Visitor::new("Alice Brown", 18, "555-5678", "TICKET002", "2025-11-21"),
        Visitor::new("Bob Wilson", 22, "555-9012", "TICKET003", "2025-11-21"),
        Visitor::new("Charlie Davis", 30, "555-3456", "TICKET004", "2025-11-21"),
        Visitor::new("Diana Evans", 25, "555-7890", "TICKET005", "2025-11-21"),
        Visitor::new("Ethan Foster", 19, "555-2345", "TICKET006", "2025-11-21"),
    ] {
        if let Err(e) = ride.enqueue(v) {
            warn!("enqueue failed: {e}");
        }
    }
    ride.log_queue();

    info!("--- after removing 2 visitors ---");
    for _ in 0..2 {
        if let Err(e) = ride.dequeue_front() {
            warn!("remove failed: {e}");
        }
    }
    ride.log_queue();
}

fn ride_history() {
    info!("=== ride history ===");
    let frank = Visitor::new("Frank Green", 28, "555-6789", "TICKET007", "2025-11-22");
    let ride = RideBuilder::new("Speed Demon")
        .capacity(4)
        .history([
            frank.clone(),
            Visitor::new("Grace Hall", 33, "555-0123", "TICKET008", "2025-11-22"),
            Visitor::new("Henry Hughes", 24, "555-4567", "TICKET009", "2025-11-22"),
            Visitor::new("Ivy Jones", 29, "555-8901", "TICKET010", "2025-11-22"),
            Visitor::new("Jack King", 31, "555-2345", "TICKET011", "2025-11-22"),
        ])
        .build();

    info!("is {} already in history? {}", frank.name(), ride.contains_in_history(Some(&frank)));
    info!("total visitors in history: {}", ride.history_size());
    ride.log_history();
}

fn sorted_history() {
    info!("=== sorted ride history ===");
    let mut ride = RideBuilder::new("Giant Ferris Wheel")
        .capacity(6)
        .history([
            Visitor::new("Luna Moore", 22, "555-1111", "TICKET012", "2025-11-23"),
            Visitor::new("Mason Nelson", 45, "555-2222", "TICKET013", "2025-11-22"),
            Visitor::new("Nora Ortiz", 30, "555-3333", "TICKET014", "2025-11-23"),
            Visitor::new("Oscar Perez", 35, "555-4444", "TICKET015", "2025-11-23"),
            Visitor::new("Penelope Quinn", 28, "555-5555", "TICKET016", "2025-11-21"),
        ])
        .build();

    info!("--- before sorting ---");
    ride.log_history();
    if ride.sort_history().is_ok() {
        info!("--- after sorting ---");
        ride.log_history();
    }
}

fn ride_cycles() {
    info!("=== ride cycles ===");
    let operator = Employee::new("Sarah Lee", 32, "555-6666", "EMP003", "Roller Coaster");
    let mut ride = RideBuilder::new("Velocity X")
        .capacity(4)
        .operator(operator)
        .queue([
            Visitor::new("Quinn Reed", 25, "555-7777", "TICKET017", "2025-11-24"),
            Visitor::new("Ryan Scott", 27, "555-8888", "TICKET018", "2025-11-24"),
            Visitor::new("Stella Taylor", 23, "555-9999", "TICKET019", "2025-11-24"),
            Visitor::new("Tyler Walker", 30, "555-0000", "TICKET020", "2025-11-24"),
            Visitor::new("Uma Young", 26, "555-1111", "TICKET021", "2025-11-24"),
            Visitor::new("Victor Zhang", 29, "555-2234", "TICKET022", "2025-11-24"),
        ])
        .build();

    info!("--- initial queue ---");
    ride.log_queue();

    let mut tally = CycleTally::default();
    for label in ["first", "second"] {
        if let Err(e) = ride.run_cycle_observed(&mut tally) {
            warn!("{label} cycle refused: {e}");
        }
        info!("--- after {label} cycle ---");
        ride.log_queue();
        ride.log_history();
    }

    // Queue is drained: this one is refused and leaves the count alone.
    match ride.run_cycle_observed(&mut tally) {
        Ok(report) => warn!("unexpected extra cycle {}", report.cycle),
        Err(e) => info!("extra cycle refused as expected: {e}"),
    }
    info!("total cycles run: {} (rejected attempts: {})", ride.cycle_count(), tally.rejected);
}

fn export(ctx: &mut ScenarioCtx) -> Result<()> {
    info!("=== export ride history ===");
    std::fs::create_dir_all(&ctx.out_dir)
        .with_context(|| format!("creating {}", ctx.out_dir.display()))?;

    let operator = Employee::new("David Clark", 38, "555-4444", "EMP004", "Ferris Wheel");
    let mut ride = RideBuilder::new("Giant Ferris Wheel")
        .capacity(6)
        .operator(operator)
        .history([
            Visitor::new("Olivia Martinez", 24, "555-5555", "TICKET023", "2025-11-25"),
            Visitor::new("Liam Anderson", 31, "555-6666", "TICKET024", "2025-11-25"),
            Visitor::new("Emma Thomas", 27, "555-7777", "TICKET025", "2025-11-26"),
            Visitor::new("Noah Hernandez", 29, "555-8888", "TICKET026", "2025-11-26"),
            Visitor::new("Ava Moore", 22, "555-9999", "TICKET027", "2025-11-26"),
        ])
        .build();
    if let Err(e) = ride.sort_history() {
        warn!("sort failed: {e}");
    }

    match park_history::export_history(&ride, &ctx.out_dir) {
        Ok(path) => {
            info!("export result: success ({})", path.display());
            ctx.import_file.get_or_insert(path);
        }
        Err(e) => warn!("export result: failed ({e})"),
    }
    Ok(())
}

fn import(ctx: &ScenarioCtx) {
    info!("=== import ride history ===");
    let Some(path) = ctx.import_file.as_ref() else {
        warn!("no history file to import; run the export scenario first or pass --import-file");
        return;
    };

    let operator = Employee::new("Sophia Wilson", 33, "555-1122", "EMP005", "Carousel");
    let mut carousel = RideState::new("Merry-Go-Round", 8, Some(operator));

    match park_history::import_history(&mut carousel, path) {
        Ok(report) if report.imported > 0 => {
            info!("total imported visitors: {}", carousel.history_size());
            if let Err(e) = carousel.sort_history() {
                warn!("sort failed: {e}");
            }
            info!("--- imported ride history ---");
            carousel.log_history();
        }
        Ok(_) => warn!("no valid records in {}", path.display()),
        Err(e) => warn!("error importing file: {e}"),
    }
}

fn crowd(ctx: &ScenarioCtx) {
    info!("=== crowd (seed {}, {} visitors) ===", ctx.seed, ctx.crowd);
    let today = Local::now().date_naive();
    let first_day = today.pred_opt().unwrap_or(NaiveDate::MIN);

    let operator = Employee::new("Rosa Diaz", 36, "555-3030", "EMP006", "Log Flume");
    let mut ride = RideBuilder::new("Log Flume")
        .capacity(5)
        .operator(operator)
        .queue(CrowdRng::new(ctx.seed).crowd(ctx.crowd, first_day, 2))
        .build();

    let mut tally = CycleTally::default();
    while ride.queue_len() > 0 {
        if ride.run_cycle_observed(&mut tally).is_err() {
            break;
        }
    }
    if let Err(e) = ride.sort_history() {
        warn!("sort failed: {e}");
    }
    info!(
        "crowd drained in {} cycles, {} boarded, {} in history",
        tally.cycles,
        tally.boarded,
        ride.history_size()
    );
}
