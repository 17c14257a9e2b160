//! Ground streamer and recyclable tile pool
//!
//! Keeps a contiguous carpet of fixed-width tiles covering
//! `[runner_x - despawn_behind, runner_x + spawn_ahead]`. Tiles spawn at
//! a single monotonic cursor, so the active set is always ordered by
//! position and recycling only ever removes the FIFO head. Recycled
//! tiles go back to a free pool and are reused before anything new is
//! allocated.

use std::collections::VecDeque;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Aabb, circle_aabb_overlap};
use crate::tuning::GroundTuning;

/// One pooled ground segment
///
/// A tile is in exactly one of the active FIFO or the free pool; the
/// `active` flag mirrors which.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundTile {
    pub id: u32,
    /// Left edge along the travel axis
    pub x: f32,
    pub active: bool,
}

impl GroundTile {
    fn aabb(&self, t: &GroundTuning) -> Aabb {
        Aabb::new(
            Vec2::new(self.x, t.surface_y - t.thickness),
            Vec2::new(self.x + t.tile_width, t.surface_y),
        )
    }
}

/// Streaming ground carpet with a free-pool of recycled tiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroundStrip {
    tuning: GroundTuning,
    /// Next spawn position; monotonic except on `clear_all`
    next_spawn_x: f32,
    /// Active tiles in spawn (= position) order
    active: VecDeque<GroundTile>,
    /// Deactivated tiles awaiting reuse
    free: Vec<GroundTile>,
    next_id: u32,
    enabled: bool,
}

impl GroundStrip {
    pub fn new(tuning: &GroundTuning, runner_x: f32) -> Self {
        let enabled = tuning.tile_width > 0.0;
        if !enabled {
            log::warn!(
                "ground streamer disabled: tile_width {} is not positive",
                tuning.tile_width
            );
        }
        Self {
            tuning: tuning.clone(),
            next_spawn_x: runner_x - tuning.despawn_behind,
            active: VecDeque::new(),
            free: Vec::new(),
            next_id: 0,
            enabled,
        }
    }

    /// Spawn and recycle for one tick
    ///
    /// Spawns at most one tile, then inspects the FIFO head for
    /// recycling. One tile per tick is plenty: at any playable speed the
    /// runner crosses well under a tile width per tick.
    pub fn tick(&mut self, runner_x: f32) {
        if !self.enabled {
            return;
        }

        if runner_x + self.tuning.spawn_ahead > self.next_spawn_x {
            self.spawn_one();
        }

        let head_expired = self
            .active
            .front()
            .is_some_and(|head| runner_x - head.x > self.tuning.despawn_behind);
        if head_expired {
            if let Some(mut tile) = self.active.pop_front() {
                tile.active = false;
                self.free.push(tile);
            }
        }
    }

    /// Fill the streaming window in one go (run start and restart)
    pub fn prime(&mut self, runner_x: f32) {
        if !self.enabled {
            return;
        }
        while runner_x + self.tuning.spawn_ahead > self.next_spawn_x {
            self.spawn_one();
        }
        log::debug!("ground primed with {} tiles", self.active.len());
    }

    fn spawn_one(&mut self) {
        let mut tile = match self.free.pop() {
            Some(tile) => tile,
            None => {
                let id = self.next_id;
                self.next_id += 1;
                GroundTile {
                    id,
                    x: 0.0,
                    active: false,
                }
            }
        };
        tile.x = self.next_spawn_x;
        tile.active = true;
        self.active.push_back(tile);
        self.next_spawn_x += self.tuning.tile_width;
    }

    /// Deactivate every tile into the pool and reset the cursor relative
    /// to the runner
    pub fn clear_all(&mut self, runner_x: f32) {
        while let Some(mut tile) = self.active.pop_front() {
            tile.active = false;
            self.free.push(tile);
        }
        self.next_spawn_x = runner_x - self.tuning.despawn_behind;
    }

    /// Halt streaming (commanded on game over)
    pub fn stop(&mut self) {
        self.enabled = false;
    }

    /// Ground-classified overlap test for the runner's contact probe
    pub fn contact(&self, probe_center: Vec2, probe_radius: f32) -> bool {
        self.active
            .iter()
            .any(|tile| circle_aabb_overlap(probe_center, probe_radius, &tile.aabb(&self.tuning)))
    }

    /// Y of the walkable surface
    #[inline]
    pub fn surface_y(&self) -> f32 {
        self.tuning.surface_y
    }

    pub fn active_tiles(&self) -> impl Iterator<Item = &GroundTile> {
        self.active.iter()
    }

    pub fn active_len(&self) -> usize {
        self.active.len()
    }

    pub fn free_len(&self) -> usize {
        self.free.len()
    }

    /// Total tiles ever allocated
    pub fn allocated(&self) -> u32 {
        self.next_id
    }

    /// Active tiles must abut exactly, in spawn order
    pub fn is_contiguous(&self) -> bool {
        self.active.iter().zip(self.active.iter().skip(1)).all(|(a, b)| {
            (a.x + self.tuning.tile_width - b.x).abs() < 1e-3
        })
    }
}
