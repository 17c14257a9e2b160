//! Game state and phase machine
//!
//! `GameState` is the composition root: it owns exactly one copy of the
//! progression fields (score, elapsed time, phase) and wires every
//! producer to them at construction. Single-authority is enforced here,
//! not with statics.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ground::GroundStrip;
use super::obstacle::ObstacleField;
use super::runner::Runner;
use crate::tuning::Tuning;

/// Current phase of gameplay
///
/// Exactly one holder process-wide (the `GameState`). Transitions are
/// one-directional except Playing↔Paused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Frozen; per-tick work halted without destroying state
    Paused,
    /// Run ended; terminal until an external restart rebuilds the world
    GameOver,
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; carried in state so restored runs continue the same
    /// gap sequence
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Elapsed game time in seconds (excludes paused time)
    pub elapsed: f64,
    /// Displayed score: time baseline plus pass bonuses
    pub score: u64,
    /// Accumulated pass bonuses, tracked separately so the per-tick
    /// baseline recompute never discards them
    pub bonus_score: u64,
    /// Game time of the last speed-ramp step
    pub last_speed_increase: f64,
    /// Global time rate: 1 while playing, 0 while paused
    pub time_scale: f32,
    /// Balance sheet for this run
    pub tuning: Tuning,
    pub runner: Runner,
    pub ground: GroundStrip,
    pub obstacles: ObstacleField,
}

impl GameState {
    /// Build and wire a fresh world
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let runner = Runner::new(
            &tuning.runner,
            tuning.ground.surface_y,
            tuning.progression.base_speed,
        );
        let mut ground = GroundStrip::new(&tuning.ground, runner.pos.x);
        ground.prime(runner.pos.x);
        let obstacles = ObstacleField::new(&tuning.obstacles, tuning.ground.surface_y, runner.pos.x);

        log::info!("world built: seed={seed}");

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Playing,
            time_ticks: 0,
            elapsed: 0.0,
            score: 0,
            bonus_score: 0,
            last_speed_increase: 0.0,
            time_scale: 1.0,
            tuning,
            runner,
            ground,
            obstacles,
        }
    }

    /// Distance traveled along the track
    #[inline]
    pub fn distance(&self) -> f32 {
        self.runner.pos.x
    }
}
