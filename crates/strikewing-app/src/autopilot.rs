//! Scripted pilot for headless smoke runs.
//!
//! Lines the player's nose up with the closest threat and fires whenever
//! the weapon allows. Good enough to clear the stock first level and
//! exercise every system; not meant to beat bosses reliably.

use strikewing_core::commands::PlayerCommand;
use strikewing_core::enums::{ActorKind, Axis, CampaignOutcome, Direction};
use strikewing_core::error::Result;
use strikewing_core::state::GameStateSnapshot;
use strikewing_core::types::Arena;
use strikewing_sim::levels::CampaignConfig;
use strikewing_sim::Campaign;

/// Vertical slack before the pilot bothers to move.
const DEADZONE: f64 = 6.0;

#[derive(Debug, Default)]
pub struct Autopilot {
    heading: Option<Direction>,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands to queue for the next tick, given the latest snapshot.
    pub fn decide(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        let mut commands = vec![PlayerCommand::Fire];

        let wanted = target_y(snapshot).and_then(|target| {
            let player = &snapshot.player;
            let offset = target - (player.position.y + player.extent.height / 2.0);
            if offset > DEADZONE {
                Some(Direction::Down)
            } else if offset < -DEADZONE {
                Some(Direction::Up)
            } else {
                None
            }
        });

        if wanted != self.heading {
            commands.push(match wanted {
                Some(direction) => PlayerCommand::Move { direction },
                None => PlayerCommand::Stop {
                    axis: Axis::Vertical,
                },
            });
            self.heading = wanted;
        }
        commands
    }

    /// Forget the current heading, e.g. after a level change.
    pub fn reset(&mut self) {
        self.heading = None;
    }
}

/// Summary of a headless run.
#[derive(Debug, Clone, PartialEq)]
pub struct FlightLog {
    pub ticks: u64,
    /// Index of the level being played when the run stopped.
    pub level_index: usize,
    pub total_kills: u32,
    pub deaths: u32,
    pub outcome: Option<CampaignOutcome>,
}

/// Fly a campaign for up to `ticks` ticks without a game loop thread.
///
/// A defeat is retried with `Restart`; a completed campaign ends the run.
pub fn fly(config: CampaignConfig, arena: Arena, ticks: u64) -> Result<FlightLog> {
    let mut campaign = Campaign::new(config, arena)?;
    let mut pilot = Autopilot::new();
    let mut flight = FlightLog {
        ticks: 0,
        level_index: 0,
        total_kills: 0,
        deaths: 0,
        outcome: None,
    };
    let mut level_kills = 0;
    let mut last = GameStateSnapshot::default();

    while flight.ticks < ticks {
        match campaign.outcome() {
            Some(CampaignOutcome::Complete) => break,
            Some(CampaignOutcome::Defeated) => {
                flight.deaths += 1;
                log::info!("pilot down on level {}, retrying", campaign.level_index() + 1);
                flight.total_kills += level_kills;
                level_kills = 0;
                campaign.queue_command(PlayerCommand::Restart)?;
                pilot.reset();
            }
            None => {
                for command in pilot.decide(&last) {
                    campaign.queue_command(command)?;
                }
            }
        }

        let index = campaign.level_index();
        last = campaign.tick()?;
        flight.ticks += 1;

        if campaign.level_index() != index {
            // The final snapshot of a cleared level carries its kill count.
            flight.total_kills += last.kill_count;
            level_kills = 0;
            pilot.reset();
        } else {
            level_kills = last.kill_count;
        }
    }

    flight.total_kills += level_kills;
    flight.level_index = campaign.level_index();
    flight.outcome = campaign.outcome();
    Ok(flight)
}

/// Centre line of the boss, or of the nearest enemy ahead of the player.
fn target_y(snapshot: &GameStateSnapshot) -> Option<f64> {
    let px = snapshot.player.position.x;
    let target = snapshot
        .enemies
        .iter()
        .find(|craft| craft.kind == ActorKind::Boss)
        .or_else(|| {
            snapshot
                .enemies
                .iter()
                .filter(|craft| craft.position.x > px)
                .min_by(|a, b| a.position.x.total_cmp(&b.position.x))
        })?;
    Some(target.position.y + target.extent.height / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strikewing_core::state::CraftView;
    use strikewing_core::types::{Extent, Position};

    fn craft(kind: ActorKind, x: f64, y: f64) -> CraftView {
        CraftView {
            id: 1,
            kind,
            position: Position::new(x, y),
            extent: Extent::new(60.0, 20.0),
            health: 1,
            max_health: 1,
        }
    }

    fn snapshot_with(player_y: f64, enemies: Vec<CraftView>) -> GameStateSnapshot {
        GameStateSnapshot {
            player: craft(ActorKind::Player, 50.0, player_y),
            enemies,
            ..Default::default()
        }
    }

    #[test]
    fn test_always_fires() {
        let mut pilot = Autopilot::new();
        let commands = pilot.decide(&snapshot_with(300.0, Vec::new()));
        assert!(matches!(commands.as_slice(), [PlayerCommand::Fire]));
    }

    #[test]
    fn test_steers_toward_enemy_once() {
        let mut pilot = Autopilot::new();
        let snap = snapshot_with(300.0, vec![craft(ActorKind::Enemy, 600.0, 500.0)]);

        let commands = pilot.decide(&snap);
        assert!(matches!(
            commands.as_slice(),
            [
                PlayerCommand::Fire,
                PlayerCommand::Move {
                    direction: Direction::Down
                }
            ]
        ));

        // Same heading: no repeated move command.
        assert_eq!(pilot.decide(&snap).len(), 1);
    }

    #[test]
    fn test_stops_when_aligned() {
        let mut pilot = Autopilot::new();
        pilot.decide(&snapshot_with(300.0, vec![craft(ActorKind::Enemy, 600.0, 100.0)]));

        let aligned = snapshot_with(300.0, vec![craft(ActorKind::Enemy, 600.0, 300.0)]);
        let commands = pilot.decide(&aligned);
        assert!(matches!(
            commands.as_slice(),
            [
                PlayerCommand::Fire,
                PlayerCommand::Stop {
                    axis: Axis::Vertical
                }
            ]
        ));
    }

    #[test]
    fn test_ignores_enemies_behind() {
        let mut pilot = Autopilot::new();
        let snap = snapshot_with(300.0, vec![craft(ActorKind::Enemy, 10.0, 600.0)]);
        assert_eq!(pilot.decide(&snap).len(), 1);
    }

    #[test]
    fn test_prefers_boss() {
        let mut pilot = Autopilot::new();
        let snap = snapshot_with(
            300.0,
            vec![
                craft(ActorKind::Enemy, 400.0, 310.0),
                craft(ActorKind::Boss, 1000.0, 50.0),
            ],
        );
        let commands = pilot.decide(&snap);
        assert!(matches!(
            commands.last(),
            Some(PlayerCommand::Move {
                direction: Direction::Up
            })
        ));
    }

    #[test]
    fn test_fly_is_deterministic() {
        let first = fly(CampaignConfig::default(), Arena::default(), 600).unwrap();
        let second = fly(CampaignConfig::default(), Arena::default(), 600).unwrap();
        assert_eq!(first, second);
        assert!(first.ticks <= 600);
    }

    #[test]
    fn test_fly_rejects_invalid_campaign() {
        let config = CampaignConfig {
            levels: Vec::new(),
            seed: 1,
        };
        assert!(fly(config, Arena::default(), 10).is_err());
    }
}
