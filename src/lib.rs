//! Coin Dash - a 2.5D platformer simulation core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, input devices, and UI belong to the host. The host feeds
//! `sim::tick` a per-frame input snapshot and a delta time, and consumes
//! the returned event stream plus the public entity state.

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Maximum frame delta fed to the integrator (seconds). Longer frames
    /// are clamped to avoid tunneling through thin platforms.
    pub const MAX_DT: f32 = 0.033;

    /// Gravity acceleration (units/s², negative is down)
    pub const GRAVITY: f32 = -22.0;
    /// Horizontal run speed scale
    pub const MOVE_SPEED: f32 = 7.5;
    /// Acceleration multiplier applied on top of MOVE_SPEED
    pub const ACCEL_SCALE: f32 = 10.0;
    /// Exponential damping rate for the horizontal axes
    pub const DAMPING: f32 = 10.0;
    /// Vertical launch velocity of a jump
    pub const JUMP_VEL: f32 = 9.4;

    /// Play field depth band: `pos.z` is clamped to ±Z_LIMIT (2.5D)
    pub const Z_LIMIT: f32 = 2.0;
    /// Falling below this y triggers a respawn
    pub const KILL_FLOOR_Y: f32 = -10.0;

    /// Player collider half extents (0.9 x 1.2 x 0.9 box)
    pub const PLAYER_HALF: Vec3 = Vec3::new(0.45, 0.6, 0.45);
    /// Enemy collider half extents (0.8 cube)
    pub const ENEMY_HALF: Vec3 = Vec3::new(0.4, 0.4, 0.4);

    /// Coin pickup trigger radius
    pub const COIN_RADIUS: f32 = 0.9;
    /// Cosmetic coin spin rate (radians/s)
    pub const COIN_SPIN_RATE: f32 = 4.0;
    /// Goal trigger radius
    pub const GOAL_RADIUS: f32 = 1.1;

    /// Fraction of JUMP_VEL granted as the stomp bounce
    pub const STOMP_BOUNCE: f32 = 0.75;
    /// Slack above the stompable plane that still counts as "from above"
    pub const STOMP_TOLERANCE: f32 = 0.05;
    /// Distance below an enemy's top where the stompable plane sits
    pub const STOMP_TOP_MARGIN: f32 = 0.35;
}
