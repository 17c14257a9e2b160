//! Overlap primitives for the flat-world geometry
//!
//! The sim needs exactly two queries: box-vs-box (runner against
//! obstacles) and circle-vs-box (the runner's ground probe against the
//! tile carpet). Which category a hit belongs to is decided by the
//! caller — obstacles fail the run, ground tiles carry it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Build from a center point and full size
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Touching edges count as overlap
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }
}

/// Bounded-region overlap test between a circle and a box
///
/// Used for the runner's small-radius ground probe.
pub fn circle_aabb_overlap(center: Vec2, radius: f32, aabb: &Aabb) -> bool {
    let closest = center.clamp(aabb.min, aabb.max);
    (center - closest).length_squared() <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::from_center_size(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Aabb::from_center_size(Vec2::new(8.0, 0.0), Vec2::new(10.0, 10.0));
        let c = Aabb::from_center_size(Vec2::new(20.0, 0.0), Vec2::new(10.0, 10.0));

        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_aabb_overlap_touching_edge() {
        let a = Aabb::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let b = Aabb::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_aabb_contains() {
        let a = Aabb::new(Vec2::ZERO, Vec2::new(10.0, 10.0));
        assert!(a.contains(Vec2::new(5.0, 5.0)));
        assert!(a.contains(Vec2::new(0.0, 10.0)));
        assert!(!a.contains(Vec2::new(-0.1, 5.0)));
    }

    #[test]
    fn test_circle_aabb_overlap() {
        let tile = Aabb::new(Vec2::new(0.0, -32.0), Vec2::new(128.0, 0.0));

        // Probe just above the surface
        assert!(circle_aabb_overlap(Vec2::new(64.0, 2.0), 4.0, &tile));
        // Probe well above the surface
        assert!(!circle_aabb_overlap(Vec2::new(64.0, 20.0), 4.0, &tile));
        // Probe off the tile's right edge, within radius of the corner
        assert!(circle_aabb_overlap(Vec2::new(130.0, 2.0), 4.0, &tile));
        assert!(!circle_aabb_overlap(Vec2::new(140.0, 2.0), 4.0, &tile));
    }
}
