//! Level simulation: the fixed-tick driver for one level.
//!
//! `LevelSimulation` owns the entity registry, the player, the level's RNG
//! and the win/lose state machine. Completely headless, so every tick is
//! reproducible from the seed.
//!
//! One tick runs, in order: queued input and player movement, the registry
//! update traversal, queued projectile spawns, out-of-bounds cleanup, the
//! spawn policy, the three collision passes, the reap, and finally the lose
//! and win checks. `Won`, `Lost` and `Restarted` are terminal: later ticks
//! update nothing and the transition observer never fires twice.

use std::collections::VecDeque;

use hecs::Entity;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use strikewing_boss::{BossBrain, PatrolBand};
use strikewing_core::commands::PlayerCommand;
use strikewing_core::components::{Hull, PlayerControl};
use strikewing_core::enums::*;
use strikewing_core::error::Result;
use strikewing_core::events::SimEvent;
use strikewing_core::state::GameStateSnapshot;
use strikewing_core::types::{Arena, Extent, Position, SimTime};

use crate::capabilities::{KillTally, SpawnQueue};
use crate::levels::LevelConfig;
use crate::registry::{is_destroyed, EntityRegistry};
use crate::systems;
use crate::systems::snapshot::SnapshotContext;
use crate::systems::update::UpdateContext;
use crate::world_setup;

/// Configuration for starting a level.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Playable area at level start.
    pub arena: Arena,
    /// Wall-clock speed multiplier applied by the game loop (1.0 = normal).
    pub time_scale: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena: Arena::default(),
            time_scale: 1.0,
        }
    }
}

/// Observer fired once when the level reaches a terminal state.
pub type TransitionListener = Box<dyn FnMut(Transition)>;

pub struct LevelSimulation {
    level: LevelConfig,
    registry: EntityRegistry,
    player: Entity,
    boss: Option<Entity>,
    arena: Arena,
    time: SimTime,
    phase: LevelPhase,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    spawns: SpawnQueue,
    tally: KillTally,
    events: Vec<SimEvent>,
    despawn_buffer: Vec<Entity>,
    transition_listeners: Vec<TransitionListener>,
    transition: Option<Transition>,
}

impl LevelSimulation {
    /// Build a level. Fails if the level or the arena is invalid.
    pub fn new(level: LevelConfig, config: SimConfig) -> Result<Self> {
        level.validate()?;
        config.arena.validate()?;

        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        let mut registry = EntityRegistry::new();
        let player =
            world_setup::spawn_player(registry.world_mut(), config.arena, level.player_health);

        let mut events = Vec::new();
        let boss = level.boss.as_ref().map(|profile| {
            let (boss, position) =
                world_setup::spawn_boss(&mut registry, &mut rng, config.arena, profile);
            events.push(SimEvent::EnemySpawned {
                kind: ActorKind::Boss,
                position,
            });
            boss
        });

        log::info!(
            "level '{}' started (objective {:?}, seed {})",
            level.name,
            level.objective,
            config.seed
        );

        Ok(Self {
            level,
            registry,
            player,
            boss,
            arena: config.arena,
            time: SimTime::default(),
            phase: LevelPhase::Running,
            rng,
            command_queue: VecDeque::new(),
            spawns: SpawnQueue::default(),
            tally: KillTally::default(),
            events,
            despawn_buffer: Vec::new(),
            transition_listeners: Vec::new(),
            transition: None,
        })
    }

    /// Register an observer for the level's terminal transition.
    pub fn on_transition(&mut self, listener: impl FnMut(Transition) + 'static) {
        self.transition_listeners.push(Box::new(listener));
    }

    /// Register an observer for entities joining a registry group.
    pub fn on_entity_added(&mut self, listener: impl FnMut(Entity, Group) + 'static) {
        self.registry.on_entity_added(listener);
    }

    /// Register an observer for entities leaving a registry group.
    pub fn on_entity_removed(&mut self, listener: impl FnMut(Entity, Group) + 'static) {
        self.registry.on_entity_removed(listener);
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    pub fn move_player(&mut self, direction: Direction) {
        self.queue_command(PlayerCommand::Move { direction });
    }

    pub fn stop_player(&mut self, axis: Axis) {
        self.queue_command(PlayerCommand::Stop { axis });
    }

    pub fn player_fire(&mut self) {
        self.queue_command(PlayerCommand::Fire);
    }

    /// Advance the level by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if !self.phase.is_terminal() {
            self.run_systems();
            self.time.advance();
            self.evaluate();
        }

        self.snapshot()
    }

    /// Abandon the level: empty the registry and report `Restart`.
    /// Ignored once the level is already over.
    pub fn restart(&mut self) {
        if self.phase.is_terminal() {
            log::warn!("restart ignored: level already {:?}", self.phase);
            return;
        }
        self.registry.clear();
        self.spawns.clear();
        self.boss = None;
        self.phase = LevelPhase::Restarted;
        self.finish(Transition::Restart);
    }

    /// Resize the arena. Every entity is rescaled by the width and height
    /// ratios, the player is clamped back inside, and the boss gets a patrol
    /// band for the new height.
    pub fn update_bounds(&mut self, width: f64, height: f64) -> Result<()> {
        let arena = Arena::new(width, height);
        arena.validate()?;
        let sx = width / self.arena.width;
        let sy = height / self.arena.height;

        let world = self.registry.world_mut();
        for (_entity, pos) in world.query_mut::<&mut Position>() {
            pos.x *= sx;
            pos.y *= sy;
        }

        if let Ok((pos, extent, _control)) =
            world.query_one_mut::<(&mut Position, &Extent, &PlayerControl)>(self.player)
        {
            *pos = arena.clamp(*pos, *extent);
        }

        let band = PatrolBand::for_height(height);
        for (_entity, (pos, brain)) in world.query_mut::<(&mut Position, &mut BossBrain)>() {
            brain.band = band;
            pos.y = band.clamp(pos.y);
        }

        log::debug!(
            "arena resized {}x{} -> {}x{}",
            self.arena.width,
            self.arena.height,
            width,
            height
        );
        self.arena = arena;
        Ok(())
    }

    pub fn phase(&self) -> LevelPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn arena(&self) -> Arena {
        self.arena
    }

    pub fn level(&self) -> &LevelConfig {
        &self.level
    }

    pub fn kill_count(&self) -> u32 {
        self.tally.kills
    }

    /// Transition reported by this level, if it has finished.
    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    pub fn player(&self) -> Entity {
        self.player
    }

    pub fn player_health(&self) -> i32 {
        self.registry
            .world()
            .get::<&Hull>(self.player)
            .map(|hull| hull.health)
            .unwrap_or(0)
    }

    /// The level's boss while it is still registered.
    pub fn boss(&self) -> Option<Entity> {
        self.boss
            .filter(|&boss| self.registry.contains(boss, Group::Enemies))
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut EntityRegistry {
        &mut self.registry
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if self.phase.is_terminal() {
                log::warn!("{:?} ignored: level already {:?}", command, self.phase);
                continue;
            }
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Move { direction } => {
                if let Ok(mut control) = self
                    .registry
                    .world_mut()
                    .get::<&mut PlayerControl>(self.player)
                {
                    match direction {
                        Direction::Up => control.vertical = -1,
                        Direction::Down => control.vertical = 1,
                        Direction::Left => control.horizontal = -1,
                        Direction::Right => control.horizontal = 1,
                    }
                }
            }
            PlayerCommand::Stop { axis } => {
                if let Ok(mut control) = self
                    .registry
                    .world_mut()
                    .get::<&mut PlayerControl>(self.player)
                {
                    match axis {
                        Axis::Vertical => control.vertical = 0,
                        Axis::Horizontal => control.horizontal = 0,
                    }
                }
            }
            PlayerCommand::Fire => {
                if let Some(request) =
                    systems::fire_control::player_fire(self.registry.world_mut(), self.player)
                {
                    self.spawns.push(request);
                }
            }
            PlayerCommand::Restart => self.restart(),
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        // 1. Player steering
        systems::movement::move_player(self.registry.world_mut(), self.player, self.arena);

        // 2. Entity updates
        let mut ctx = UpdateContext {
            rng: &mut self.rng,
            spawns: &mut self.spawns,
            events: &mut self.events,
        };
        self.registry
            .update_all(|world, entity, _group| systems::update::update_entity(world, entity, &mut ctx));

        // 3. Projectiles requested during the traversal
        for request in self.spawns.drain() {
            world_setup::spawn_projectile(&mut self.registry, &request, Some(self.player));
            self.events.push(SimEvent::ShotFired {
                shooter: request.shooter,
                projectile: match request.weapon {
                    ProjectileKind::Straight => ActorKind::StraightProjectile,
                    ProjectileKind::Homing => ActorKind::HomingProjectile,
                },
            });
        }

        // 4. Anything that left the arena
        systems::cleanup::run(&mut self.registry, self.arena, &mut self.despawn_buffer);

        // 5. Spawn policy
        if let Some(spawn) = &self.level.spawn {
            systems::spawner::run(
                &mut self.registry,
                &mut self.rng,
                self.arena,
                spawn,
                &mut self.events,
            );
        }

        // 6. Collisions
        let player = [self.player];
        let (world, groups) = self.registry.world_and_groups();
        systems::collision::resolve(
            world,
            &groups[Group::EnemyProjectiles.index()],
            &player,
            &mut self.tally,
            &mut self.events,
        );
        systems::collision::resolve(
            world,
            &groups[Group::PlayerProjectiles.index()],
            &groups[Group::Enemies.index()],
            &mut self.tally,
            &mut self.events,
        );
        systems::collision::resolve(
            world,
            &groups[Group::Enemies.index()],
            &player,
            &mut self.tally,
            &mut self.events,
        );

        // A boss fight is over once the boss is down, whoever got the kill.
        if self
            .boss
            .is_some_and(|boss| is_destroyed(self.registry.world(), boss))
        {
            self.tally.boss_defeated = true;
        }

        // 7. Reap
        self.registry.reap_destroyed();
    }

    /// Lose is checked before win: a player who dies on the tick the
    /// objective is met has lost.
    fn evaluate(&mut self) {
        if self.player_health() <= 0 {
            self.phase = LevelPhase::Lost;
            self.finish(Transition::GameOver);
            return;
        }

        let won = match self.level.objective {
            Objective::KillCount { target } => self.tally.kills >= target,
            Objective::DefeatBoss => self.tally.boss_defeated,
        };
        if won {
            if self.tally.boss_defeated {
                log::info!("boss defeated on '{}'", self.level.name);
            }
            self.phase = LevelPhase::Won;
            self.finish(Transition::AdvanceLevel);
        }
    }

    /// Report the terminal transition exactly once.
    fn finish(&mut self, transition: Transition) {
        if self.transition.is_some() {
            return;
        }
        self.transition = Some(transition);
        self.events.push(SimEvent::LevelFinished { transition });
        log::info!(
            "level '{}' finished: {} after {} ticks, {} kills",
            self.level.name,
            transition.as_str(),
            self.time.tick,
            self.tally.kills
        );
        for listener in &mut self.transition_listeners {
            listener(transition);
        }
    }

    fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        let ctx = SnapshotContext {
            time: self.time,
            level_name: &self.level.name,
            phase: self.phase,
            arena: self.arena,
            kill_count: self.tally.kills,
            objective: self.level.objective,
            player: self.player,
            boss: self.boss(),
        };
        systems::snapshot::build_snapshot(&self.registry, &ctx, events)
    }
}
