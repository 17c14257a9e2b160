//! Runner motion: ground contact, jump intake, failure stop
//!
//! The runner owns its own position and velocity. Horizontal speed is a
//! hard clamp while grounded, not an integrated quantity — the
//! progression ramp writes `speed` and the next grounded tick applies
//! it. Vertical motion is the only integrated axis.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::ground::GroundStrip;
use crate::tuning::RunnerTuning;

/// The player-controlled runner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Runner {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Standing on ground as of the last contact probe
    pub grounded: bool,
    /// Cleared once on failure; a stopped runner ignores everything
    pub active: bool,
    size: Vec2,
    /// Contact probe center relative to `pos`
    probe_offset: Vec2,
    probe_radius: f32,
    jump_impulse: f32,
    gravity: f32,
    /// Configured forward speed; callers clamp, we don't
    speed: f32,
}

impl Runner {
    /// Place a runner standing on the surface at x = 0
    ///
    /// When no probe is configured, a default one is parented at a fixed
    /// offset just below the feet — one-time setup, not a per-tick cost.
    pub fn new(t: &RunnerTuning, surface_y: f32, base_speed: f32) -> Self {
        let probe_offset = t
            .probe_offset
            .unwrap_or(Vec2::new(0.0, -t.size.y / 2.0 - 2.0));
        Self {
            pos: Vec2::new(0.0, surface_y + t.size.y / 2.0),
            vel: Vec2::new(base_speed, 0.0),
            grounded: true,
            active: true,
            size: t.size,
            probe_offset,
            probe_radius: t.probe_radius,
            jump_impulse: t.jump_impulse,
            gravity: t.gravity,
            speed: base_speed,
        }
    }

    /// Advance one tick: probe, jump, integrate
    ///
    /// Jump input is ignored while airborne (no air jump in the base
    /// design — extension point).
    pub fn tick(&mut self, jump: bool, ground: &GroundStrip, dt: f32) {
        if !self.active {
            return;
        }

        // Contact while ascending doesn't count: the probe still grazes
        // the surface on the first ticks of a jump
        self.grounded = self.vel.y <= 0.0
            && ground.contact(self.pos + self.probe_offset, self.probe_radius);

        if jump && self.grounded {
            // Zero vertical velocity before the impulse so a same-tick
            // landing can't dampen the jump
            self.vel.y = 0.0;
            self.vel.y += self.jump_impulse;
            self.grounded = false;
        }

        if self.grounded {
            if self.vel.y < 0.0 {
                // Landed: kill the fall and snap to the surface
                self.vel.y = 0.0;
                self.pos.y = ground.surface_y() + self.size.y / 2.0;
            }
            // Hard clamp, not integration
            self.vel.x = self.speed;
        } else {
            self.vel.y -= self.gravity * dt;
        }

        self.pos += self.vel * dt;
    }

    /// Stop the runner on obstacle collision
    ///
    /// Returns true only the first time; a second collision after the
    /// runner has stopped is a no-op.
    pub fn fail(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.vel = Vec2::ZERO;
        self.active = false;
        true
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_size(self.pos, self.size)
    }
}
