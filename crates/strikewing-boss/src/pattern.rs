//! Vertical patrol: a shuffled sequence of signed velocities walked one
//! frame at a time, and the band that keeps the boss on screen.

use rand::seq::SliceRandom;
use rand::Rng;

use strikewing_core::constants::{BOSS_Y_LOWER_MARGIN, BOSS_Y_UPPER_BOUND, ORIGINAL_SCREEN_HEIGHT};

/// Shuffled multiset of `{+v, -v, 0}` moves.
#[derive(Debug, Clone)]
pub struct MovementPattern {
    moves: Vec<i32>,
    index: usize,
    frames_on_move: u32,
    max_frames_on_move: u32,
}

impl MovementPattern {
    /// Build a pattern holding `copies` of each of `+velocity`, `-velocity`
    /// and `0`, shuffled once up front.
    pub fn new<R: Rng + ?Sized>(
        velocity: i32,
        copies: usize,
        max_frames_on_move: u32,
        rng: &mut R,
    ) -> Self {
        let mut moves = Vec::with_capacity(copies * 3);
        for _ in 0..copies {
            moves.push(velocity);
            moves.push(-velocity);
            moves.push(0);
        }
        moves.shuffle(rng);
        Self {
            moves,
            index: 0,
            frames_on_move: 0,
            max_frames_on_move,
        }
    }

    /// Velocity for this frame.
    ///
    /// Returns the move at the current index. Once that index has been held
    /// for the configured number of frames the sequence is reshuffled in
    /// place and the index advances, wrapping at the end.
    pub fn next_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> i32 {
        let Some(&current) = self.moves.get(self.index) else {
            return 0;
        };

        self.frames_on_move += 1;
        if self.frames_on_move >= self.max_frames_on_move {
            self.moves.shuffle(rng);
            self.frames_on_move = 0;
            self.index += 1;
        }
        if self.index >= self.moves.len() {
            self.index = 0;
        }
        current
    }

    pub fn moves(&self) -> &[i32] {
        &self.moves
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn frames_on_move(&self) -> u32 {
        self.frames_on_move
    }
}

/// Vertical band the boss's top edge must stay within.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatrolBand {
    pub upper: f64,
    pub lower: f64,
}

impl PatrolBand {
    pub fn new(upper: f64, lower: f64) -> Self {
        Self { upper, lower }
    }

    /// Band for an arena of the given height. The upper bound sits above the
    /// screen and scales with height; the lower bound keeps a fixed margin.
    pub fn for_height(height: f64) -> Self {
        Self {
            upper: BOSS_Y_UPPER_BOUND * height / ORIGINAL_SCREEN_HEIGHT,
            lower: height - BOSS_Y_LOWER_MARGIN,
        }
    }

    pub fn contains(&self, y: f64) -> bool {
        y >= self.upper && y <= self.lower
    }

    pub fn clamp(&self, y: f64) -> f64 {
        y.clamp(self.upper, self.lower.max(self.upper))
    }

    /// Apply `dy` to `y`, reverting to `y` if the result leaves the band.
    pub fn step(&self, y: f64, dy: f64) -> f64 {
        let next = y + dy;
        if self.contains(next) {
            next
        } else {
            y
        }
    }
}
