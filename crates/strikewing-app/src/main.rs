use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;

use strikewing_app::autopilot;
use strikewing_app::config::load_campaign;
use strikewing_app::game_loop::spawn_game_loop;
use strikewing_app::state::{AppState, GameLoopCommand};
use strikewing_core::types::Arena;

#[derive(Parser, Debug)]
#[command(name = "strikewing")]
#[command(about = "Headless STRIKEWING campaign runner")]
struct Cli {
    /// Campaign JSON file (defaults to the stock three-level campaign)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the campaign seed
    #[arg(long)]
    seed: Option<u64>,
    /// Fly this many ticks with the autopilot as fast as possible, then exit
    #[arg(long)]
    ticks: Option<u64>,
    /// Arena width in pixels
    #[arg(long, default_value_t = Arena::default().width)]
    width: f64,
    /// Arena height in pixels
    #[arg(long, default_value_t = Arena::default().height)]
    height: f64,
    /// Wall-clock speed multiplier for the real-time loop
    #[arg(long, default_value_t = 1.0)]
    time_scale: f64,
    /// Seconds to run the real-time loop before shutting down
    #[arg(long, default_value_t = 10)]
    seconds: u64,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match load_campaign(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    let arena = Arena::new(cli.width, cli.height);

    if let Some(ticks) = cli.ticks {
        return match autopilot::fly(config, arena, ticks) {
            Ok(flight) => {
                println!(
                    "ticks={} level={} kills={} deaths={} outcome={:?}",
                    flight.ticks,
                    flight.level_index + 1,
                    flight.total_kills,
                    flight.deaths,
                    flight.outcome
                );
                ExitCode::SUCCESS
            }
            Err(err) => {
                log::error!("{err}");
                ExitCode::FAILURE
            }
        };
    }

    let state = AppState::new();
    match spawn_game_loop(config, arena, cli.time_scale, Arc::clone(&state.latest_snapshot)) {
        Ok(tx) => {
            if let Ok(mut slot) = state.command_tx.lock() {
                *slot = Some(tx);
            }
        }
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    }

    for _ in 0..cli.seconds {
        std::thread::sleep(Duration::from_secs(1));
        if let Some(snap) = state.snapshot() {
            log::info!(
                "{} tick {} phase {:?} kills {}",
                snap.level_name,
                snap.time.tick,
                snap.phase,
                snap.kill_count
            );
        }
    }
    state.send(GameLoopCommand::Shutdown);
    ExitCode::SUCCESS
}
