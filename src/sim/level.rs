//! Level data
//!
//! The boundary between authored content and the simulation: ordered lists
//! of platform, coin, and enemy placements plus the goal and spawn point.
//! Immutable once loaded. Hosts may deserialize a `LevelSpec` from JSON or
//! use the built-in course.

use serde::{Deserialize, Serialize};

/// A static platform placement: center position and half extents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolidSpec {
    pub pos: [f32; 3],
    pub half: [f32; 3],
}

impl SolidSpec {
    /// Convenience for authoring: full width/height/depth, like a box mesh
    pub fn from_size(x: f32, y: f32, z: f32, w: f32, h: f32, d: f32) -> Self {
        Self {
            pos: [x, y, z],
            half: [w / 2.0, h / 2.0, d / 2.0],
        }
    }
}

/// An enemy placement: patrol center, half-range, and speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpec {
    pub pos: [f32; 3],
    pub range: f32,
    pub speed: f32,
}

/// A complete level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSpec {
    pub solids: Vec<SolidSpec>,
    pub coins: Vec<[f32; 3]>,
    pub enemies: Vec<EnemySpec>,
    pub goal: [f32; 3],
    pub spawn: [f32; 3],
}

impl LevelSpec {
    /// The built-in course: a ground slab, a rising-then-falling path of
    /// ten platforms, a coin above each, two patrollers, and the flag at
    /// the far end.
    pub fn default_course() -> Self {
        let mut solids = vec![SolidSpec::from_size(0.0, -0.5, 0.0, 60.0, 1.0, 18.0)];
        let platforms = [
            [0.0, 1.2, 0.0, 4.0],
            [5.0, 2.3, 0.0, 4.0],
            [9.0, 3.4, 0.0, 3.0],
            [13.0, 4.6, 0.0, 3.0],
            [17.0, 5.2, 0.0, 4.0],
            [22.0, 4.1, 0.0, 4.0],
            [27.0, 3.0, 0.0, 5.0],
            [33.0, 2.2, 0.0, 4.0],
            [38.0, 2.2, 0.0, 4.0],
            [43.0, 3.0, 0.0, 4.0],
        ];
        for [x, y, z, w] in platforms {
            solids.push(SolidSpec::from_size(x, y, z, w, 0.6, 4.0));
        }

        Self {
            solids,
            coins: vec![
                [0.0, 2.2, 0.0],
                [5.0, 3.2, 0.0],
                [9.0, 4.3, 0.0],
                [13.0, 5.5, 0.0],
                [17.0, 6.2, 0.0],
                [22.0, 5.1, 0.0],
                [27.0, 4.0, 0.0],
                [33.0, 3.2, 0.0],
                [38.0, 3.2, 0.0],
                [43.0, 4.0, 0.0],
            ],
            enemies: vec![
                EnemySpec {
                    pos: [9.0, 4.3, 0.0],
                    range: 1.5,
                    speed: 1.0,
                },
                EnemySpec {
                    pos: [27.0, 3.9, 0.0],
                    range: 2.2,
                    speed: 1.3,
                },
            ],
            goal: [47.0, 4.2, 0.0],
            spawn: [-2.0, 1.6, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_course_shape() {
        let level = LevelSpec::default_course();
        assert_eq!(level.solids.len(), 11);
        assert_eq!(level.coins.len(), 10);
        assert_eq!(level.enemies.len(), 2);
        assert_eq!(level.spawn, [-2.0, 1.6, 0.0]);
        assert_eq!(level.goal, [47.0, 4.2, 0.0]);
    }

    #[test]
    fn test_from_size_halves_extents() {
        let s = SolidSpec::from_size(0.0, -0.5, 0.0, 60.0, 1.0, 18.0);
        assert_eq!(s.half, [30.0, 0.5, 9.0]);
    }

    #[test]
    fn test_course_platforms_span_to_goal() {
        // The course should actually lead somewhere: last platform near
        // the goal, every platform above the ground slab.
        let level = LevelSpec::default_course();
        let last = level.solids.last().unwrap();
        assert!((level.goal[0] - last.pos[0]).abs() < 6.0);
        assert!(level.solids[1..].iter().all(|s| s.pos[1] > 0.0));
    }
}
