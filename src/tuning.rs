//! Data-driven game balance
//!
//! Every gameplay constant the simulation consumes, gathered into one
//! serializable record so hosts and tools can override balance without
//! recompiling. Defaults mirror `crate::consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay balance parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Motion ===
    /// Horizontal run speed scale
    pub move_speed: f32,
    /// Acceleration multiplier applied on top of move_speed
    pub accel_scale: f32,
    /// Exponential damping rate for the horizontal axes
    pub damping: f32,
    /// Gravity acceleration (negative is down)
    pub gravity: f32,
    /// Vertical launch velocity of a jump
    pub jump_vel: f32,
    /// Depth band half-width: pos.z is clamped to ±z_limit
    pub z_limit: f32,
    /// Maximum frame delta fed to the integrator (seconds)
    pub max_dt: f32,

    // === Gameplay ===
    /// Coin pickup trigger radius
    pub coin_radius: f32,
    /// Goal trigger radius
    pub goal_radius: f32,
    /// Falling below this y triggers a respawn
    pub kill_floor_y: f32,
    /// Fraction of jump_vel granted as the stomp bounce
    pub stomp_bounce: f32,
    /// Slack above the stompable plane that still counts as "from above"
    pub stomp_tolerance: f32,
    /// Distance below an enemy's top where the stompable plane sits
    pub stomp_top_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
            accel_scale: ACCEL_SCALE,
            damping: DAMPING,
            gravity: GRAVITY,
            jump_vel: JUMP_VEL,
            z_limit: Z_LIMIT,
            max_dt: MAX_DT,
            coin_radius: COIN_RADIUS,
            goal_radius: GOAL_RADIUS,
            kill_floor_y: KILL_FLOOR_Y,
            stomp_bounce: STOMP_BOUNCE,
            stomp_tolerance: STOMP_TOLERANCE,
            stomp_top_margin: STOMP_TOP_MARGIN,
        }
    }
}
