//! Axis-aligned bounding boxes
//!
//! The only collision shape in the game. Everything - player, platforms,
//! enemies - is an axis-aligned box; overlap tests are inclusive so a box
//! resting exactly on another still counts as touching.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// An axis-aligned box given by its min/max corners
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Build a box from its center and half extents
    pub fn from_center_half(center: Vec3, half: Vec3) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Inclusive overlap test on all three axes
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_center_half() {
        let b = Aabb::from_center_half(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.5, 1.0, 1.5));
        assert_eq!(b.min, Vec3::new(0.5, 1.0, 1.5));
        assert_eq!(b.max, Vec3::new(1.5, 3.0, 4.5));
    }

    #[test]
    fn test_intersects_overlap() {
        let a = Aabb::from_center_half(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::from_center_half(Vec3::new(1.5, 0.0, 0.0), Vec3::ONE);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_touching_faces() {
        // Exactly touching faces count as intersecting
        let a = Aabb::from_center_half(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::from_center_half(Vec3::new(2.0, 0.0, 0.0), Vec3::ONE);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_intersects_miss_single_axis() {
        // Separated on y alone is a miss even with full x/z overlap
        let a = Aabb::from_center_half(Vec3::ZERO, Vec3::ONE);
        let b = Aabb::from_center_half(Vec3::new(0.0, 2.5, 0.0), Vec3::ONE);
        assert!(!a.intersects(&b));
    }
}
