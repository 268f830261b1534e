//! Game loop thread: runs the campaign at `TICK_RATE` Hz and publishes
//! snapshots.
//!
//! The campaign is created inside this thread since its transition
//! plumbing is single-threaded. Commands arrive via `mpsc` channel and the
//! latest snapshot is stored in shared state for polling.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use strikewing_core::constants::TICK_RATE;
use strikewing_core::state::GameStateSnapshot;
use strikewing_core::types::Arena;
use strikewing_sim::levels::CampaignConfig;
use strikewing_sim::Campaign;

use crate::config::ConfigError;
use crate::state::GameLoopCommand;

/// Nominal duration of one tick at 1x speed.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Spawns the game loop in a new thread.
///
/// The campaign is validated before the thread starts so configuration
/// errors surface to the caller. Returns the command sender.
pub fn spawn_game_loop(
    config: CampaignConfig,
    arena: Arena,
    time_scale: f64,
    latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
) -> Result<mpsc::Sender<GameLoopCommand>, ConfigError> {
    config.validate()?;
    arena.validate()?;
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();

    std::thread::Builder::new()
        .name("strikewing-game-loop".into())
        .spawn(move || match Campaign::new(config, arena) {
            Ok(campaign) => run_game_loop(campaign, time_scale, cmd_rx, &latest_snapshot),
            Err(err) => log::error!("failed to start campaign: {err}"),
        })?;

    Ok(cmd_tx)
}

/// What the loop should do after draining its inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Inbox {
    Continue,
    Stop,
}

/// Apply every pending command without blocking.
fn drain_commands(cmd_rx: &mpsc::Receiver<GameLoopCommand>, campaign: &mut Campaign) -> Inbox {
    loop {
        match cmd_rx.try_recv() {
            Ok(GameLoopCommand::PlayerCommand(cmd)) => {
                if let Err(err) = campaign.queue_command(cmd) {
                    log::error!("command failed: {err}");
                }
            }
            Ok(GameLoopCommand::Resize { width, height }) => {
                if let Err(err) = campaign.update_bounds(width, height) {
                    log::warn!("resize rejected: {err}");
                }
            }
            Ok(GameLoopCommand::Shutdown) => return Inbox::Stop,
            Err(mpsc::TryRecvError::Empty) => return Inbox::Continue,
            Err(mpsc::TryRecvError::Disconnected) => return Inbox::Stop,
        }
    }
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    mut campaign: Campaign,
    time_scale: f64,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<GameStateSnapshot>>,
) {
    let effective_tick_duration = if time_scale > 0.001 {
        TICK_DURATION.div_f64(time_scale)
    } else {
        TICK_DURATION
    };
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        if drain_commands(&cmd_rx, &mut campaign) == Inbox::Stop {
            log::info!("game loop shutting down");
            return;
        }

        // 2. Advance one tick
        let snapshot = match campaign.tick() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                log::error!("campaign stopped: {err}");
                return;
            }
        };

        // 3. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until next tick
        next_tick_time += effective_tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > effective_tick_duration * 2 {
            // Too far behind: reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strikewing_core::commands::PlayerCommand;
    use strikewing_core::constants::PLAYER_SPEED;
    use strikewing_core::enums::{Direction, LevelPhase};

    fn campaign() -> Campaign {
        Campaign::new(CampaignConfig::default(), Arena::default()).unwrap()
    }

    #[test]
    fn test_drain_applies_commands_and_resize() {
        let mut campaign = campaign();
        let (tx, rx) = mpsc::channel();
        tx.send(GameLoopCommand::Resize {
            width: 675.0,
            height: 375.0,
        })
        .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Move {
            direction: Direction::Down,
        }))
        .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Fire))
            .unwrap();

        assert_eq!(drain_commands(&rx, &mut campaign), Inbox::Continue);
        assert!(rx.try_recv().is_err(), "Inbox drained in one pass");

        let snap = campaign.tick().unwrap();
        assert_eq!(snap.arena, Arena::new(675.0, 375.0));
        assert_eq!(snap.phase, LevelPhase::Running);
        assert_eq!(snap.player_projectiles.len(), 1);
        assert_eq!(snap.player.position.y, 365.0 / 2.0 + PLAYER_SPEED);
    }

    #[test]
    fn test_drain_rejects_bad_resize() {
        let mut campaign = campaign();
        let (tx, rx) = mpsc::channel();
        tx.send(GameLoopCommand::Resize {
            width: 0.0,
            height: 100.0,
        })
        .unwrap();

        assert_eq!(drain_commands(&rx, &mut campaign), Inbox::Continue);
        assert_eq!(campaign.level().arena(), Arena::default());
    }

    #[test]
    fn test_drain_stops_on_shutdown_or_disconnect() {
        let mut campaign = campaign();
        let (tx, rx) = mpsc::channel();
        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert_eq!(drain_commands(&rx, &mut campaign), Inbox::Stop);

        drop(tx);
        assert_eq!(drain_commands(&rx, &mut campaign), Inbox::Stop);
    }

    #[test]
    fn test_loop_publishes_snapshots() {
        let latest = Arc::new(Mutex::new(None));
        let tx = spawn_game_loop(
            CampaignConfig::default(),
            Arena::default(),
            4.0,
            Arc::clone(&latest),
        )
        .unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut tick = 0;
        while Instant::now() < deadline {
            if let Some(snap) = latest.lock().unwrap().as_ref() {
                tick = snap.time.tick;
                if tick >= 3 {
                    break;
                }
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        tx.send(GameLoopCommand::Shutdown).unwrap();
        assert!(tick >= 3, "loop only reached tick {tick}");
    }

    #[test]
    fn test_spawn_rejects_invalid_campaign() {
        let config = CampaignConfig {
            levels: Vec::new(),
            seed: 1,
        };
        let result = spawn_game_loop(config, Arena::default(), 1.0, Arc::new(Mutex::new(None)));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }
}
