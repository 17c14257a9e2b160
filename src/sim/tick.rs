//! Fixed-order per-tick scheduler
//!
//! Components advance once per tick in a fixed dependency order:
//! motion → ground streaming → obstacle generation → obstacle
//! lifecycle/scoring → progression. The order is explicit here instead
//! of relying on an engine's update-hook guarantees.

use super::progression;
use super::state::{GamePhase, GameState};

/// Input commands for a single tick (deterministic)
///
/// The platform layer owns how these were sourced (touch, pointer,
/// keyboard); the sim only sees booleans.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Jump was pressed this tick
    pub jump: bool,
    /// Pause toggle
    pub pause: bool,
    /// Tear down and rebuild the world
    pub restart: bool,
}

/// Advance the simulation by one timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Restart stands in for the external scene reload: full teardown,
    // same seed and balance
    if input.restart {
        *state = GameState::new(state.seed, state.tuning.clone());
        return;
    }

    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                progression::pause(state);
                return;
            }
            GamePhase::Paused => progression::resume(state),
            GamePhase::GameOver => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;
    let dt = dt * state.time_scale;

    // Motion
    {
        let GameState { runner, ground, .. } = state;
        runner.tick(input.jump, ground, dt);
    }
    let runner_x = state.runner.pos.x;

    // Streaming and generation read the fresh runner position
    state.ground.tick(runner_x);

    let view_left = state.tuning.viewport.left_bound(runner_x);
    let elapsed = state.elapsed;
    let points = {
        let GameState {
            obstacles,
            rng,
            tuning,
            ..
        } = state;
        obstacles.tick(runner_x, elapsed, rng, &tuning.obstacles, view_left, dt)
    };
    if points > 0 {
        progression::award_bonus(state, points);
    }

    // Obstacle-tagged collision ends the run; the one-shot runner stop
    // keeps a second hit in the same frame from re-firing side effects
    let runner_box = state.runner.aabb();
    if state.obstacles.iter().any(|o| runner_box.overlaps(&o.aabb())) {
        progression::game_over(state);
    }

    progression::advance(state, dt);
}
