//! Dashline entry point
//!
//! Headless demo: runs a few autopiloted runs at a fixed timestep and
//! prints the resulting leaderboard. Useful for balance checks and as a
//! reference embedding of the sim loop.

use std::time::{SystemTime, UNIX_EPOCH};

use dashline::consts::{MAX_SUBSTEPS, SIM_DT};
use dashline::sim::{GamePhase, GameState, TickInput, tick};
use dashline::{Records, Tuning};

/// Demo runs per invocation
const DEMO_RUNS: u64 = 3;
/// Safety cap per run (10 minutes of game time)
const MAX_TICKS: u64 = 10 * 60 * 120;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });
    log::info!("dashline demo starting, seed={seed}");

    let tuning = Tuning::default();
    let mut records = Records::new();

    for run in 0..DEMO_RUNS {
        let mut state = GameState::new(seed.wrapping_add(run), tuning.clone());

        // Frame loop with a fixed-timestep accumulator, as a renderer
        // embedding would drive it
        const FRAME_DT: f32 = 1.0 / 60.0;
        let mut accumulator = 0.0f32;
        let mut ticks = 0u64;
        while state.phase != GamePhase::GameOver && ticks < MAX_TICKS {
            accumulator += FRAME_DT;
            let mut substeps = 0;
            while accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
                let input = autopilot(&state);
                tick(&mut state, &input, SIM_DT);
                accumulator -= SIM_DT;
                substeps += 1;
                ticks += 1;
            }
        }

        println!(
            "run {}: score {} ({} bonus), {:.0} units in {:.1}s at {:.0} units/s",
            run + 1,
            state.score,
            state.bonus_score,
            state.distance(),
            state.elapsed,
            state.runner.speed(),
        );
        records.add_run(state.score, state.distance(), state.elapsed);
    }

    println!("\nbest runs:");
    for (i, entry) in records.entries.iter().enumerate() {
        println!(
            "  {}. {:>6}  {:.0} units, {:.1}s",
            i + 1,
            entry.score,
            entry.distance,
            entry.elapsed
        );
    }
}

/// Trivial demo AI: jump when the next unpassed obstacle is within
/// reaction distance
///
/// Reaction distance scales with speed so the jump arc still clears the
/// obstacle after the ramp has kicked in.
fn autopilot(state: &GameState) -> TickInput {
    let runner_x = state.runner.pos.x;
    let react = state.runner.speed() * 0.55;

    let jump = state.obstacles.iter().any(|o| {
        let ahead = o.pos.x - runner_x;
        !o.scored && ahead > 0.0 && ahead < react
    });

    TickInput {
        jump,
        ..Default::default()
    }
}
