//! Motion integration
//!
//! Turns input intent and gravity into a candidate position for the
//! collision resolver. Horizontal response is acceleration plus
//! frame-rate-compensated exponential damping, so the run speed settles
//! near move_speed * accel_scale / damping at any frame rate.

use glam::Vec3;

use super::state::Player;
use crate::tuning::Tuning;

/// The player's abstracted input for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveIntent {
    /// Horizontal axis, -1 | 0 | +1
    pub axis: f32,
    /// Jump requested. Level-triggered: held jump re-fires every frame
    /// the player is grounded.
    pub jump: bool,
}

/// Advance velocity and position by one frame of intent + gravity.
///
/// Returns the pre-integration position; the resolver needs it to decide
/// whether a vertical overlap was entered from above or below. The caller
/// must pass a dt already clamped to `(0, tuning.max_dt]`.
pub fn integrate(player: &mut Player, intent: MoveIntent, tuning: &Tuning, dt: f32) -> Vec3 {
    debug_assert!(player.pos.is_finite(), "non-finite player position");
    debug_assert!(dt > 0.0 && dt <= tuning.max_dt);

    let axis = intent.axis.clamp(-1.0, 1.0);
    player.vel.x += axis * tuning.move_speed * dt * tuning.accel_scale;

    // Damp both horizontal axes. The min(1, ..) clamp keeps the decay
    // stable when dt is large: the velocity can reach zero but never
    // overshoot and flip sign.
    let decay = (tuning.damping * dt).min(1.0);
    player.vel.x -= player.vel.x * decay;
    player.vel.z -= player.vel.z * decay;

    player.vel.y += tuning.gravity * dt;

    if intent.jump && player.on_ground {
        player.vel.y = tuning.jump_vel;
        player.on_ground = false;
    }

    let prev = player.pos;
    player.pos += player.vel * dt;

    // 2.5D: hard clamp to the depth band, not a physical collision
    player.pos.z = player.pos.z.clamp(-tuning.z_limit, tuning.z_limit);

    prev
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_DT;

    const DT: f32 = 1.0 / 60.0;

    fn airborne_player() -> Player {
        Player::at_spawn(Vec3::new(0.0, 5.0, 0.0))
    }

    #[test]
    fn test_gravity_monotonic_in_freefall() {
        let tuning = Tuning::default();
        let mut player = airborne_player();
        let mut last_vy = player.vel.y;
        for _ in 0..30 {
            integrate(&mut player, MoveIntent::default(), &tuning, DT);
            assert!((player.vel.y - (last_vy + tuning.gravity * DT)).abs() < 1e-5);
            assert!(player.vel.y < last_vy);
            last_vy = player.vel.y;
        }
    }

    #[test]
    fn test_run_speed_settles_at_terminal() {
        let tuning = Tuning::default();
        let mut player = airborne_player();
        // Fixed point of one frame's accelerate-then-damp update
        let gain = tuning.move_speed * tuning.accel_scale * DT;
        let decay = (tuning.damping * DT).min(1.0);
        let terminal = gain * (1.0 - decay) / decay;
        for _ in 0..120 {
            integrate(&mut player, MoveIntent { axis: 1.0, jump: false }, &tuning, DT);
        }
        assert!((player.vel.x - terminal).abs() < 1e-3);
        assert!(player.vel.x > 0.8 * tuning.move_speed);
    }

    #[test]
    fn test_damping_never_reverses_velocity() {
        // At the dt cap, damping*dt > 1 would flip sign without the clamp
        let tuning = Tuning {
            damping: 40.0,
            ..Default::default()
        };
        let mut player = airborne_player();
        player.vel.x = 5.0;
        player.vel.z = -3.0;
        integrate(&mut player, MoveIntent::default(), &tuning, MAX_DT);
        assert!(player.vel.x >= 0.0);
        assert!(player.vel.z <= 0.0);
    }

    #[test]
    fn test_jump_requires_ground() {
        let tuning = Tuning::default();
        let mut player = airborne_player();

        integrate(&mut player, MoveIntent { axis: 0.0, jump: true }, &tuning, DT);
        assert!(player.vel.y < 0.0); // airborne jump request ignored

        player.on_ground = true;
        player.vel.y = 0.0;
        integrate(&mut player, MoveIntent { axis: 0.0, jump: true }, &tuning, DT);
        assert!((player.vel.y - tuning.jump_vel).abs() < 1e-6);
        assert!(!player.on_ground);
    }

    #[test]
    fn test_depth_band_clamp() {
        let tuning = Tuning::default();
        let mut player = airborne_player();
        player.vel.z = 500.0;
        integrate(&mut player, MoveIntent::default(), &tuning, DT);
        assert_eq!(player.pos.z, tuning.z_limit);
    }

    #[test]
    fn test_returns_previous_position() {
        let tuning = Tuning::default();
        let mut player = airborne_player();
        let before = player.pos;
        let prev = integrate(&mut player, MoveIntent::default(), &tuning, DT);
        assert_eq!(prev, before);
        assert!(player.pos.y < before.y);
    }
}
