//! Collision resolution against static geometry
//!
//! The tricky part of Coin Dash: reconciling the integrator's candidate
//! position with the solid world, axis by axis. Each overlap is resolved
//! along the axis of least penetration; vertical wins ties so that running
//! across flush platform seams never snags on a phantom wall.

use glam::Vec3;

use super::state::{Player, Solid};

/// Resolve the player's box against every solid, in level order.
///
/// Corrections are cumulative: the player's box is recomputed after each
/// push-out, so a later solid sees the already-corrected position.
/// `on_ground` is recomputed from scratch here every frame.
///
/// Vertical direction is disambiguated by the previous-frame position, not
/// by velocity: a player whose y did not increase this frame entered the
/// overlap from above and is landing; otherwise it is a ceiling hit.
pub fn resolve_player_solids(player: &mut Player, prev_pos: Vec3, solids: &[Solid]) {
    let mut a = player.aabb();
    player.on_ground = false;

    for solid in solids {
        let b = solid.aabb();
        if !a.intersects(&b) {
            continue;
        }

        // Six separating distances collapse to one penetration per axis
        let px = (b.max.x - a.min.x).min(a.max.x - b.min.x);
        let py = (b.max.y - a.min.y).min(a.max.y - b.min.y);
        let pz = (b.max.z - a.min.z).min(a.max.z - b.min.z);

        // Smallest penetration separates; ties prefer Y, then X
        if py <= px && py <= pz {
            if prev_pos.y >= player.pos.y {
                // Landing: descended (or held level) into the box
                let lift = b.max.y - a.min.y;
                if lift > 0.0 {
                    player.pos.y += lift;
                }
                player.vel.y = player.vel.y.max(0.0);
                player.on_ground = true;
            } else {
                // Ceiling hit
                let drop = a.max.y - b.min.y;
                if drop > 0.0 {
                    player.pos.y -= drop;
                }
                player.vel.y = player.vel.y.min(0.0);
            }
        } else if px <= pz {
            player.pos.x += if player.pos.x > solid.pos.x { px } else { -px };
            player.vel.x = 0.0;
        } else {
            player.pos.z += if player.pos.z > solid.pos.z { pz } else { -pz };
            player.vel.z = 0.0;
        }

        a = player.aabb();
    }
}
