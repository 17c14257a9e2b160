//! Data-driven game balance
//!
//! Every gameplay knob lives here so balance passes never touch sim code.
//! A `Tuning` can be loaded from a JSON document; missing sections fall
//! back to the shipped defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Score accrual and speed ramp parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionTuning {
    /// Points awarded per second survived
    pub score_per_second: f64,
    /// Runner speed at run start (units/s)
    pub base_speed: f32,
    /// Whether the timed speed ramp is active
    pub speed_ramp_enabled: bool,
    /// Seconds between speed increases
    pub speed_increase_interval: f64,
    /// Speed added per increase (units/s)
    pub speed_increment: f32,
    /// Hard ceiling for runner speed (units/s)
    pub max_speed: f32,
}

impl Default for ProgressionTuning {
    fn default() -> Self {
        Self {
            score_per_second: 10.0,
            base_speed: 240.0,
            speed_ramp_enabled: true,
            speed_increase_interval: 10.0,
            speed_increment: 20.0,
            max_speed: 420.0,
        }
    }
}

/// Runner body and jump parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerTuning {
    /// Body size (width, height)
    pub size: Vec2,
    /// Upward velocity applied on jump (units/s)
    pub jump_impulse: f32,
    /// Downward acceleration while airborne (units/s²)
    pub gravity: f32,
    /// Ground probe center relative to the runner; `None` uses the
    /// default probe just below the feet
    pub probe_offset: Option<Vec2>,
    /// Ground probe radius
    pub probe_radius: f32,
}

impl Default for RunnerTuning {
    fn default() -> Self {
        Self {
            size: Vec2::new(24.0, 48.0),
            jump_impulse: 560.0,
            gravity: 1500.0,
            probe_offset: None,
            probe_radius: 4.0,
        }
    }
}

/// Ground carpet streaming parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundTuning {
    /// Width of one ground tile
    pub tile_width: f32,
    /// How far ahead of the runner the carpet must extend
    pub spawn_ahead: f32,
    /// How far behind the runner a tile may trail before recycling
    pub despawn_behind: f32,
    /// Y of the walkable surface
    pub surface_y: f32,
    /// Tile thickness below the surface
    pub thickness: f32,
}

impl Default for GroundTuning {
    fn default() -> Self {
        Self {
            tile_width: 128.0,
            spawn_ahead: 960.0,
            despawn_behind: 640.0,
            surface_y: 0.0,
            thickness: 32.0,
        }
    }
}

/// One spawnable obstacle shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleTemplate {
    /// Body size (width, height)
    pub size: Vec2,
    /// Points awarded when the runner passes it
    pub score_value: u64,
    /// Leftward drift speed; 0 = stationary
    pub speed: f32,
}

/// Obstacle generation and difficulty ramp parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleTuning {
    /// Spawn lead distance ahead of the runner
    pub spawn_ahead: f32,
    /// Starting minimum gap between obstacles
    pub gap_min: f32,
    /// Starting maximum gap between obstacles
    pub gap_max: f32,
    /// Amount both gap bounds shrink per ramp step
    pub gap_decrease_step: f32,
    /// Seconds of game time between ramp steps
    pub gap_decrease_interval: f64,
    /// Floor for the minimum gap; the maximum floors one unit above
    pub absolute_min_gap: f32,
    /// How far past an obstacle the runner must be to score it
    pub pass_margin: f32,
    /// Extra slack beyond the view's left bound before removal
    pub offview_margin: f32,
    /// Spawnable shapes, chosen uniformly
    pub templates: Vec<ObstacleTemplate>,
}

impl Default for ObstacleTuning {
    fn default() -> Self {
        Self {
            spawn_ahead: 1100.0,
            gap_min: 360.0,
            gap_max: 640.0,
            gap_decrease_step: 12.0,
            gap_decrease_interval: 8.0,
            absolute_min_gap: 160.0,
            pass_margin: 16.0,
            offview_margin: 64.0,
            templates: vec![
                ObstacleTemplate {
                    size: Vec2::new(24.0, 40.0),
                    score_value: 5,
                    speed: 0.0,
                },
                ObstacleTemplate {
                    size: Vec2::new(32.0, 56.0),
                    score_value: 8,
                    speed: 0.0,
                },
                ObstacleTemplate {
                    size: Vec2::new(24.0, 48.0),
                    score_value: 12,
                    speed: 40.0,
                },
            ],
        }
    }
}

/// Camera framing used for the visible-left-bound query
///
/// Camera framing itself is outside the core; the sim only needs to know
/// where the left edge of the view sits relative to the runner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewportTuning {
    /// Visible world width
    pub width: f32,
    /// Fraction of the view width kept behind the runner
    pub runner_frac: f32,
}

impl Default for ViewportTuning {
    fn default() -> Self {
        Self {
            width: 1280.0,
            runner_frac: 0.3,
        }
    }
}

impl ViewportTuning {
    /// World X of the view's left edge for a given runner position
    #[inline]
    pub fn left_bound(&self, runner_x: f32) -> f32 {
        runner_x - self.width * self.runner_frac
    }
}

/// Complete balance sheet for a run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub progression: ProgressionTuning,
    pub runner: RunnerTuning,
    pub ground: GroundTuning,
    pub obstacles: ObstacleTuning,
    pub viewport: ViewportTuning,
}

impl Tuning {
    /// Parse a tuning document; sections absent from the JSON keep their
    /// defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        log::info!(
            "Loaded tuning: base_speed={} gap=[{}, {}]",
            tuning.progression.base_speed,
            tuning.obstacles.gap_min,
            tuning.obstacles.gap_max
        );
        Ok(tuning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_partial_overrides() {
        let tuning =
            Tuning::from_json(r#"{"progression": {"score_per_second": 25.0, "base_speed": 300.0, "speed_ramp_enabled": false, "speed_increase_interval": 5.0, "speed_increment": 10.0, "max_speed": 350.0}}"#)
                .unwrap();
        assert!((tuning.progression.score_per_second - 25.0).abs() < f64::EPSILON);
        assert!(!tuning.progression.speed_ramp_enabled);
        // Untouched sections keep defaults
        assert!((tuning.ground.tile_width - 128.0).abs() < f32::EPSILON);
        assert_eq!(tuning.obstacles.templates.len(), 3);
    }

    #[test]
    fn test_left_bound_tracks_runner() {
        let view = ViewportTuning {
            width: 1000.0,
            runner_frac: 0.25,
        };
        assert!((view.left_bound(0.0) - (-250.0)).abs() < 0.001);
        assert!((view.left_bound(500.0) - 250.0).abs() < 0.001);
    }
}
