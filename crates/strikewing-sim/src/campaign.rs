//! Campaign sequencer: plays levels in order and reacts to their
//! transitions.
//!
//! `AdvanceLevel` moves to the next level (or completes the run after the
//! last one), `Restart` rebuilds the current level, and `GameOver` ends the
//! run as defeated until the player asks to retry.

use std::cell::Cell;
use std::rc::Rc;

use strikewing_core::commands::PlayerCommand;
use strikewing_core::enums::{CampaignOutcome, Transition};
use strikewing_core::error::Result;
use strikewing_core::state::GameStateSnapshot;
use strikewing_core::types::Arena;

use crate::engine::{LevelSimulation, SimConfig};
use crate::levels::CampaignConfig;

pub struct Campaign {
    config: CampaignConfig,
    arena: Arena,
    index: usize,
    /// Levels built so far, mixed into each level's seed.
    builds: u64,
    level: LevelSimulation,
    pending: Rc<Cell<Option<Transition>>>,
    outcome: Option<CampaignOutcome>,
}

impl Campaign {
    pub fn new(config: CampaignConfig, arena: Arena) -> Result<Self> {
        config.validate()?;
        let pending = Rc::new(Cell::new(None));
        let level = build_level(&config, 0, 0, arena, &pending)?;
        Ok(Self {
            config,
            arena,
            index: 0,
            builds: 1,
            level,
            pending,
            outcome: None,
        })
    }

    /// Forward a command to the current level. After a defeat, `Restart`
    /// retries the level the run ended on.
    pub fn queue_command(&mut self, command: PlayerCommand) -> Result<()> {
        if self.outcome == Some(CampaignOutcome::Defeated)
            && matches!(command, PlayerCommand::Restart)
        {
            log::info!("retrying level {}", self.index + 1);
            self.outcome = None;
            return self.load(self.index);
        }
        self.level.queue_command(command);
        Ok(())
    }

    /// Tick the current level and apply any transition it reported.
    pub fn tick(&mut self) -> Result<GameStateSnapshot> {
        let snapshot = self.level.tick();
        if let Some(transition) = self.pending.take() {
            self.apply(transition)?;
        }
        Ok(snapshot)
    }

    pub fn update_bounds(&mut self, width: f64, height: f64) -> Result<()> {
        self.level.update_bounds(width, height)?;
        self.arena = Arena::new(width, height);
        Ok(())
    }

    pub fn level(&self) -> &LevelSimulation {
        &self.level
    }

    pub fn level_mut(&mut self) -> &mut LevelSimulation {
        &mut self.level
    }

    /// Zero-based index of the level being played.
    pub fn level_index(&self) -> usize {
        self.index
    }

    pub fn outcome(&self) -> Option<CampaignOutcome> {
        self.outcome
    }

    fn apply(&mut self, transition: Transition) -> Result<()> {
        match transition {
            Transition::AdvanceLevel => {
                let next = self.index + 1;
                if next < self.config.levels.len() {
                    self.load(next)
                } else {
                    log::info!("campaign complete");
                    self.outcome = Some(CampaignOutcome::Complete);
                    Ok(())
                }
            }
            Transition::Restart => self.load(self.index),
            Transition::GameOver => {
                log::info!("campaign lost on level {}", self.index + 1);
                self.outcome = Some(CampaignOutcome::Defeated);
                Ok(())
            }
        }
    }

    fn load(&mut self, index: usize) -> Result<()> {
        self.level = build_level(&self.config, index, self.builds, self.arena, &self.pending)?;
        self.index = index;
        self.builds += 1;
        Ok(())
    }
}

fn build_level(
    config: &CampaignConfig,
    index: usize,
    builds: u64,
    arena: Arena,
    pending: &Rc<Cell<Option<Transition>>>,
) -> Result<LevelSimulation> {
    let sim_config = SimConfig {
        seed: config.seed.wrapping_add(builds),
        arena,
        ..Default::default()
    };
    let mut level = LevelSimulation::new(config.level(index)?.clone(), sim_config)?;
    let pending = Rc::clone(pending);
    level.on_transition(move |transition| pending.set(Some(transition)));
    Ok(level)
}
