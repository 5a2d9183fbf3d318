use clap::Parser;
use log::*;
use screeps_arena_ctf::arena::scenario::*;
use screeps_arena_ctf::arena::*;
use screeps_arena_ctf::game_loop::*;
use screeps_arena_ctf::logging;
use screeps_arena_ctf::settings::*;
use std::path::PathBuf;

/// Runs the capture-the-flag controller against the simulated arena.
#[derive(Parser, Debug)]
#[command(name = "arena-run", version)]
struct Args {
    /// Ticks to simulate, defaults to the tick limit.
    #[arg(long)]
    ticks: Option<u32>,

    /// Scenario JSON, defaults to the built-in mirrored match.
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Settings JSON overriding the default thresholds.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Log every decision, not just posture changes.
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: Args) -> Result<(), String> {
    let settings = match &args.settings {
        Some(path) => TacticsSettings::load(path)?,
        None => TacticsSettings::default(),
    };

    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::capture_the_flag(),
    };

    let ticks = args.ticks.unwrap_or(settings.tick_limit);

    let mut arena = Arena::new(&scenario);
    let mut controller = Controller::new(settings);

    while arena.tick() <= ticks {
        let report = arena.run_tick(&mut controller);

        if let Some(side) = arena.captured() {
            info!("Tick {}: flag captured by {}", report.tick, if side { "us" } else { "the enemy" });
            return Ok(());
        }
    }

    info!("No capture after {} ticks", ticks);

    Ok(())
}

fn main() {
    let args = Args::parse();

    let level = if args.verbose { logging::Debug } else { logging::Info };

    if let Err(err) = logging::setup_logging(level) {
        eprintln!("Failed to set up logging: {}", err);
    }

    if let Err(err) = run(args) {
        error!("{}", err);
        std::process::exit(1);
    }
}
