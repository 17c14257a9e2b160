//! Obstacle generation, difficulty ramp, and per-obstacle lifecycle
//!
//! Obstacles spawn at a monotonic cursor a fixed lead ahead of the
//! runner, with the gap to the next spawn drawn uniformly from the
//! current difficulty bounds. The bounds tighten on a timer read from
//! the shared game clock and never widen; both are floored so the run
//! stays clearable.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::tuning::ObstacleTuning;

/// One live obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    /// Body center
    pub pos: Vec2,
    pub size: Vec2,
    /// Points awarded when passed
    pub score_value: u64,
    /// Leftward drift speed; 0 = stationary (recedes only because the
    /// runner moves)
    pub speed: f32,
    /// One-shot guard for the pass event
    pub scored: bool,
}

impl Obstacle {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, self.size)
    }
}

/// Generator state plus the set of live obstacles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleField {
    /// Next spawn position; monotonic except on `clear_all`
    next_spawn_x: f32,
    /// Current inter-obstacle distance bounds (difficulty state)
    gap_min: f32,
    gap_max: f32,
    /// Game time of the last ramp step, against the shared clock
    last_ramp_at: f64,
    surface_y: f32,
    obstacles: Vec<Obstacle>,
    next_id: u32,
    enabled: bool,
}

impl ObstacleField {
    pub fn new(t: &ObstacleTuning, surface_y: f32, runner_x: f32) -> Self {
        let enabled = !t.templates.is_empty();
        if !enabled {
            // Missing dependency: degrade, don't crash — the rest of the
            // sim keeps running without obstacles
            log::warn!("obstacle generator disabled: no templates configured");
        }
        Self {
            next_spawn_x: runner_x + t.spawn_ahead,
            gap_min: t.gap_min,
            gap_max: t.gap_max.max(t.gap_min),
            last_ramp_at: 0.0,
            surface_y,
            obstacles: Vec::new(),
            next_id: 0,
            enabled,
        }
    }

    /// Generate, ramp, and run per-obstacle lifecycle for one tick
    ///
    /// Returns the bonus points earned from pass events this tick.
    pub fn tick(
        &mut self,
        runner_x: f32,
        elapsed: f64,
        rng: &mut Pcg32,
        t: &ObstacleTuning,
        view_left: f32,
        dt: f32,
    ) -> u64 {
        if self.enabled {
            self.apply_ramp(elapsed, t);

            if runner_x + t.spawn_ahead >= self.next_spawn_x {
                let template = &t.templates[rng.random_range(0..t.templates.len())];
                let id = self.next_id;
                self.next_id += 1;
                self.obstacles.push(Obstacle {
                    id,
                    pos: Vec2::new(self.next_spawn_x, self.surface_y + template.size.y / 2.0),
                    size: template.size,
                    score_value: template.score_value,
                    speed: template.speed,
                    scored: false,
                });
                self.next_spawn_x += rng.random_range(self.gap_min..=self.gap_max);
            }
        }

        // Lifecycle runs even when generation is stopped: obstacles
        // already in flight still drift, score, and leave the view
        let mut points = 0;
        for obstacle in &mut self.obstacles {
            if obstacle.speed != 0.0 {
                obstacle.pos.x -= obstacle.speed * dt;
            }
            if !obstacle.scored && runner_x > obstacle.pos.x + t.pass_margin {
                obstacle.scored = true;
                points += obstacle.score_value;
            }
        }

        // Off-view removal is independent of scoring
        self.obstacles
            .retain(|o| o.pos.x + o.size.x / 2.0 >= view_left - t.offview_margin);

        points
    }

    /// Tighten the gap bounds when the ramp interval has elapsed
    ///
    /// The timer reference resets to the current elapsed time, not the
    /// interval boundary — jitter is absorbed, not corrected.
    fn apply_ramp(&mut self, elapsed: f64, t: &ObstacleTuning) {
        if elapsed - self.last_ramp_at < t.gap_decrease_interval {
            return;
        }
        self.gap_min = (self.gap_min - t.gap_decrease_step).max(t.absolute_min_gap);
        self.gap_max = (self.gap_max - t.gap_decrease_step).max(t.absolute_min_gap + 1.0);
        self.last_ramp_at = elapsed;
        log::debug!(
            "difficulty ramp at {:.1}s: gap=[{:.1}, {:.1}]",
            elapsed,
            self.gap_min,
            self.gap_max
        );
    }

    /// Halt generation (commanded on game over)
    pub fn stop(&mut self) {
        self.enabled = false;
    }

    /// Drop every tracked obstacle and reset the cursor relative to the
    /// runner
    pub fn clear_all(&mut self, runner_x: f32, t: &ObstacleTuning) {
        self.obstacles.clear();
        self.next_spawn_x = runner_x + t.spawn_ahead;
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Current difficulty bounds (min, max)
    pub fn gap_bounds(&self) -> (f32, f32) {
        (self.gap_min, self.gap_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;
    use crate::tuning::{ObstacleTemplate, ObstacleTuning};
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    fn single_template() -> ObstacleTuning {
        ObstacleTuning {
            templates: vec![ObstacleTemplate {
                size: Vec2::new(24.0, 40.0),
                score_value: 5,
                speed: 0.0,
            }],
            ..ObstacleTuning::default()
        }
    }

    #[test]
    fn test_spawn_keeps_lead_distance() {
        let t = single_template();
        let mut field = ObstacleField::new(&t, 0.0, 0.0);
        let mut rng = rng();

        field.tick(0.0, 0.0, &mut rng, &t, -1000.0, SIM_DT);
        assert_eq!(field.len(), 1);
        let first = field.iter().next().unwrap();
        assert!((first.pos.x - t.spawn_ahead).abs() < 1e-3);

        // Cursor advanced by a gap within the current bounds
        let mut walk = 0.0;
        while field.len() == 1 {
            walk += 4.0;
            field.tick(walk, 0.0, &mut rng, &t, walk - 2000.0, SIM_DT);
            assert!(walk < 5000.0, "second obstacle never spawned");
        }
        let xs: Vec<f32> = field.iter().map(|o| o.pos.x).collect();
        let gap = xs[1] - xs[0];
        assert!(gap >= t.gap_min && gap <= t.gap_max, "gap {gap} out of bounds");
    }

    #[test]
    fn test_ramp_scenario() {
        let t = ObstacleTuning {
            gap_min: 6.0,
            gap_max: 10.0,
            gap_decrease_step: 0.3,
            gap_decrease_interval: 1.0,
            absolute_min_gap: 2.0,
            ..single_template()
        };
        let mut field = ObstacleField::new(&t, 0.0, 0.0);
        let mut rng = rng();

        // One ramp step
        field.tick(0.0, 1.0, &mut rng, &t, -1000.0, SIM_DT);
        let (min, max) = field.gap_bounds();
        assert!((min - 5.7).abs() < 1e-4);
        assert!((max - 9.7).abs() < 1e-4);
    }

    #[test]
    fn test_ramp_floors() {
        let t = ObstacleTuning {
            gap_min: 6.0,
            gap_max: 10.0,
            gap_decrease_step: 3.0,
            gap_decrease_interval: 1.0,
            absolute_min_gap: 2.0,
            ..single_template()
        };
        let mut field = ObstacleField::new(&t, 0.0, 0.0);
        let mut rng = rng();

        for step in 1..20 {
            field.tick(0.0, step as f64, &mut rng, &t, -1000.0, SIM_DT);
        }
        let (min, max) = field.gap_bounds();
        assert!((min - 2.0).abs() < 1e-4);
        assert!((max - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_pass_event_fires_once() {
        let t = single_template();
        let mut field = ObstacleField::new(&t, 0.0, 0.0);
        let mut rng = rng();

        field.tick(0.0, 0.0, &mut rng, &t, -1000.0, SIM_DT);
        let obstacle_x = field.iter().next().unwrap().pos.x;

        // Runner far past the obstacle: first tick awards, the rest don't
        let runner_x = obstacle_x + t.pass_margin + 1.0;
        let awarded = field.tick(runner_x, 0.0, &mut rng, &t, runner_x - 2000.0, SIM_DT);
        assert_eq!(awarded, 5);
        for _ in 0..10 {
            let again = field.tick(runner_x, 0.0, &mut rng, &t, runner_x - 2000.0, SIM_DT);
            assert_eq!(again, 0);
        }
    }

    #[test]
    fn test_offview_removal_independent_of_scoring() {
        let t = single_template();
        let mut field = ObstacleField::new(&t, 0.0, 0.0);
        let mut rng = rng();

        field.tick(0.0, 0.0, &mut rng, &t, -1000.0, SIM_DT);
        assert_eq!(field.len(), 1);
        let obstacle_x = field.iter().next().unwrap().pos.x;

        // View left bound sweeps past the obstacle while the runner is
        // still behind it (never scored)
        field.stop();
        let view_left = obstacle_x + t.offview_margin + t.spawn_ahead;
        let points = field.tick(0.0, 0.0, &mut rng, &t, view_left, SIM_DT);
        assert_eq!(points, 0);
        assert!(field.is_empty());
    }

    #[test]
    fn test_moving_obstacle_drifts_left() {
        let t = ObstacleTuning {
            templates: vec![ObstacleTemplate {
                size: Vec2::new(24.0, 48.0),
                score_value: 12,
                speed: 120.0,
            }],
            ..ObstacleTuning::default()
        };
        let mut field = ObstacleField::new(&t, 0.0, 0.0);
        let mut rng = rng();

        field.tick(0.0, 0.0, &mut rng, &t, -1000.0, SIM_DT);
        let x0 = field.iter().next().unwrap().pos.x;
        field.stop();
        field.tick(0.0, 0.0, &mut rng, &t, -1000.0, SIM_DT);
        let x1 = field.iter().next().unwrap().pos.x;
        assert!((x0 - x1 - 120.0 * SIM_DT).abs() < 1e-4);
    }

    #[test]
    fn test_no_templates_disables_generator() {
        let t = ObstacleTuning {
            templates: Vec::new(),
            ..ObstacleTuning::default()
        };
        let mut field = ObstacleField::new(&t, 0.0, 0.0);
        let mut rng = rng();

        for i in 0..100 {
            field.tick(i as f32 * 10.0, 0.0, &mut rng, &t, -1000.0, SIM_DT);
        }
        assert!(field.is_empty());
    }

    #[test]
    fn test_clear_all_resets_cursor() {
        let t = single_template();
        let mut field = ObstacleField::new(&t, 0.0, 0.0);
        let mut rng = rng();

        field.tick(0.0, 0.0, &mut rng, &t, -1000.0, SIM_DT);
        assert!(!field.is_empty());

        field.clear_all(800.0, &t);
        assert!(field.is_empty());
        field.tick(800.0, 0.0, &mut rng, &t, -1000.0, SIM_DT);
        let first = field.iter().next().unwrap();
        assert!((first.pos.x - (800.0 + t.spawn_ahead)).abs() < 1e-3);
    }
}
