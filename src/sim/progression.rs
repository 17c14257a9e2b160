//! Score accrual, speed ramp, and phase transitions
//!
//! The sole writer of score and phase. Score is a time-based baseline
//! plus separately-tracked pass bonuses:
//! `score = floor(elapsed * score_per_second) + bonus_score`,
//! so the per-tick recompute never discards awarded points.

use super::state::{GamePhase, GameState};

/// Advance progression for one tick: elapsed time, score, speed ramp
///
/// No-op unless the phase is Playing.
pub fn advance(state: &mut GameState, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.elapsed += dt as f64;

    let t = &state.tuning.progression;
    state.score = (state.elapsed * t.score_per_second).floor() as u64 + state.bonus_score;

    if t.speed_ramp_enabled
        && state.elapsed - state.last_speed_increase >= t.speed_increase_interval
    {
        let ramped = (state.runner.speed() + t.speed_increment).min(t.max_speed);
        state.runner.set_speed(ramped);
        // Reset to the current elapsed time, not the interval boundary:
        // tick-granularity jitter is absorbed, not corrected
        state.last_speed_increase = state.elapsed;
        log::debug!("speed ramp at {:.1}s: {} units/s", state.elapsed, ramped);
    }
}

/// Add pass-event points; only counted while Playing
pub fn award_bonus(state: &mut GameState, points: u64) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.bonus_score += points;
    state.score += points;
}

/// End the run: halt the runner and command every producer to stop
///
/// Idempotent — a second call observes GameOver and does nothing.
pub fn game_over(state: &mut GameState) {
    if state.phase == GamePhase::GameOver {
        return;
    }
    state.phase = GamePhase::GameOver;
    state.time_scale = 0.0;
    state.runner.fail();
    state.ground.stop();
    state.obstacles.stop();
    log::info!(
        "game over: score={} distance={:.0} elapsed={:.1}s",
        state.score,
        state.distance(),
        state.elapsed
    );
}

/// Freeze the sim; no-op once the run has ended
pub fn pause(state: &mut GameState) {
    if state.phase != GamePhase::Playing {
        return;
    }
    state.phase = GamePhase::Paused;
    state.time_scale = 0.0;
}

/// Unfreeze a paused sim; no-op once the run has ended
pub fn resume(state: &mut GameState) {
    if state.phase != GamePhase::Paused {
        return;
    }
    state.phase = GamePhase::Playing;
    state.time_scale = 1.0;
}
