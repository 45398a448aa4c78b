//! Collision primitives for player movement.
//!
//! This module provides the static obstacle set tested against every
//! movement attempt. The set is small and fixed (one volume per house), so
//! queries are a linear scan with sphere-vs-box tests and no broad phase.

use fogvale_common::Aabb;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Static set of axis-aligned obstacle volumes.
///
/// Built once at scene-construction time and immutable thereafter. Queries
/// are total functions: there is no failure mode, only blocked or clear.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstacleSet {
    volumes: Vec<Aabb>,
}

impl ObstacleSet {
    /// Creates an empty obstacle set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an obstacle set from a list of volumes.
    #[must_use]
    pub fn from_volumes(volumes: Vec<Aabb>) -> Self {
        Self { volumes }
    }

    /// Adds an obstacle volume.
    pub fn push(&mut self, volume: Aabb) {
        self.volumes.push(volume);
    }

    /// Number of obstacle volumes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.volumes.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty()
    }

    /// The obstacle volumes.
    #[must_use]
    pub fn volumes(&self) -> &[Aabb] {
        &self.volumes
    }

    /// Tests whether a sphere at `center` with `radius` intersects any
    /// obstacle.
    #[must_use]
    pub fn blocks(&self, center: Vec3, radius: f32) -> bool {
        self.volumes
            .iter()
            .any(|v| v.intersects_sphere(center, radius))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box_at(x: f32, z: f32) -> Aabb {
        Aabb::from_center_size(Vec3::new(x, 0.5, z), Vec3::ONE)
    }

    #[test]
    fn test_empty_set_never_blocks() {
        let set = ObstacleSet::new();
        assert!(!set.blocks(Vec3::ZERO, 100.0));
    }

    #[test]
    fn test_blocks_linear_scan() {
        let set = ObstacleSet::from_volumes(vec![unit_box_at(5.0, 0.0), unit_box_at(-5.0, 0.0)]);

        assert!(set.blocks(Vec3::new(5.2, 0.5, 0.0), 0.5));
        assert!(set.blocks(Vec3::new(-5.8, 0.5, 0.0), 0.5));
        assert!(!set.blocks(Vec3::new(0.0, 0.5, 0.0), 0.5));
    }

    #[test]
    fn test_radius_margin() {
        let set = ObstacleSet::from_volumes(vec![unit_box_at(0.0, 0.0)]);

        // Box face at x = 0.5; sphere center at 1.1 with radius 0.5 misses,
        // radius 0.7 hits.
        assert!(!set.blocks(Vec3::new(1.1, 0.5, 0.0), 0.5));
        assert!(set.blocks(Vec3::new(1.1, 0.5, 0.0), 0.7));
    }
}
