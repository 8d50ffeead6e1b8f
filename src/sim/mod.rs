//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Same state + same input + same dt => same result
//! - Stable iteration order (level order / entity ID)
//! - No rendering or platform dependencies
//!
//! One frame is one call to [`tick`]: integrate motion, resolve collisions
//! against the static solids, then run the gameplay reactors (coins,
//! enemies, fall-death, goal) against the corrected player position.

pub mod aabb;
pub mod collision;
pub mod level;
pub mod motion;
pub mod state;
pub mod tick;

pub use aabb::Aabb;
pub use collision::resolve_player_solids;
pub use level::{EnemySpec, LevelSpec, SolidSpec};
pub use motion::integrate;
pub use state::{Coin, Enemy, GameEvent, GameState, Goal, Player, RunState, Solid};
pub use tick::{TickInput, tick};
