//! Math primitives for collision and interpolation.
//!
//! This module provides the small set of geometric types the game logic
//! needs: axis-aligned bounding boxes, spheres, and scalar interpolation
//! helpers. Vector math comes from `glam`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Creates a new AABB from two corners.
    ///
    /// Corners are normalized per axis so that `min <= max` always holds.
    #[must_use]
    pub fn new(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates an AABB from a center point and full extents.
    #[must_use]
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self::new(center - half, center + half)
    }

    /// Returns the center of the AABB.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Returns the full extents of the AABB.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Returns the AABB expanded by a margin on all sides.
    #[must_use]
    pub fn expanded(&self, margin: f32) -> Self {
        Self {
            min: self.min - Vec3::splat(margin),
            max: self.max + Vec3::splat(margin),
        }
    }

    /// Returns the point inside the AABB closest to `point`.
    #[must_use]
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    /// Checks if a point lies inside the AABB (inclusive).
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Checks if a sphere intersects this AABB.
    ///
    /// Uses the closest-point distance test: the sphere intersects the box
    /// when the closest point on the box lies within the sphere radius.
    #[must_use]
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.closest_point(center).distance_squared(center) <= radius * radius
    }

    /// Checks if this AABB overlaps another.
    #[must_use]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.cmple(other.max).all() && self.max.cmpge(other.min).all()
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::ONE)
    }
}

/// Sphere in world space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    /// Center of the sphere
    pub center: Vec3,
    /// Radius of the sphere
    pub radius: f32,
}

impl Sphere {
    /// Creates a new sphere.
    #[must_use]
    pub const fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Checks if this sphere intersects an AABB.
    #[must_use]
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        aabb.intersects_sphere(self.center, self.radius)
    }
}

/// Clamps a value to the [0, 1] range.
#[must_use]
pub fn clamp01(value: f32) -> f32 {
    value.clamp(0.0, 1.0)
}

/// Linear interpolation between `a` and `b` by factor `t`.
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Returns where `value` sits between `a` and `b` as a [0, 1] factor.
///
/// Returns 0.0 when `a == b` to keep the function total.
#[must_use]
pub fn inverse_lerp(a: f32, b: f32, value: f32) -> f32 {
    if (b - a).abs() < f32::EPSILON {
        0.0
    } else {
        (value - a) / (b - a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_corner_normalization() {
        let aabb = Aabb::new(Vec3::new(2.0, 3.0, 4.0), Vec3::new(-1.0, 0.0, 1.0));
        assert_eq!(aabb.min, Vec3::new(-1.0, 0.0, 1.0));
        assert_eq!(aabb.max, Vec3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn test_aabb_from_center_size() {
        let aabb = Aabb::from_center_size(Vec3::new(10.0, 4.0, -10.0), Vec3::new(3.0, 8.0, 9.0));
        assert_eq!(aabb.min, Vec3::new(8.5, 0.0, -14.5));
        assert_eq!(aabb.max, Vec3::new(11.5, 8.0, -5.5));
        assert_eq!(aabb.center(), Vec3::new(10.0, 4.0, -10.0));
    }

    #[test]
    fn test_closest_point() {
        let aabb = Aabb::new(Vec3::ZERO, Vec3::ONE);
        assert_eq!(aabb.closest_point(Vec3::new(2.0, 0.5, -1.0)), Vec3::new(1.0, 0.5, 0.0));
        // A point inside maps to itself
        let inside = Vec3::new(0.25, 0.75, 0.5);
        assert_eq!(aabb.closest_point(inside), inside);
    }

    #[test]
    fn test_sphere_face_edge_corner() {
        let aabb = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));

        // Face contact
        assert!(aabb.intersects_sphere(Vec3::new(1.5, 0.0, 0.0), 0.5));
        // Corner contact: closest corner is (1,1,1), distance sqrt(3*0.25) ~ 0.866
        assert!(aabb.intersects_sphere(Vec3::new(1.5, 1.5, 1.5), 0.9));
        assert!(!aabb.intersects_sphere(Vec3::new(1.5, 1.5, 1.5), 0.8));
    }

    #[test]
    fn test_sphere_wrapper() {
        let aabb = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
        let sphere = Sphere::new(Vec3::new(1.4, 0.0, 0.0), 0.5);
        assert!(sphere.intersects_aabb(&aabb));
    }

    #[test]
    fn test_overlaps() {
        let a = Aabb::new(Vec3::ZERO, Vec3::splat(2.0));
        let b = Aabb::new(Vec3::splat(1.0), Vec3::splat(3.0));
        let c = Aabb::new(Vec3::splat(5.0), Vec3::splat(6.0));
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_inverse_lerp() {
        assert_eq!(inverse_lerp(0.0, 10.0, 5.0), 0.5);
        assert_eq!(inverse_lerp(3.0, 3.0, 7.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 0.25), 2.5);
    }
}
