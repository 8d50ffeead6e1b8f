//! Per-frame simulation step
//!
//! One call advances the whole world in a fixed order: integrate the
//! player's motion, resolve against the static solids, then run the
//! gameplay reactors (fall-death, coins, enemies, goal) against the
//! corrected position. The ordering is the determinism guarantee: a coin
//! can never be collected from a pre-collision position.

use super::collision::resolve_player_solids;
use super::motion::{MoveIntent, integrate};
use super::state::{Coin, Enemy, GameEvent, GameState, Goal, Player, RunState, respawn_player};
use crate::consts::COIN_SPIN_RATE;
use crate::tuning::Tuning;
use glam::Vec3;

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Horizontal movement intent, -1 | 0 | +1
    pub axis: f32,
    /// Jump held this frame
    pub jump: bool,
}

/// Advance the simulation by one frame.
///
/// `dt` is in seconds and is clamped to `(0, tuning.max_dt]`; a
/// non-positive or non-finite `dt` is a caller bug. Returns the gameplay
/// events of this frame in occurrence order.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    debug_assert!(dt.is_finite() && dt > 0.0, "bad frame delta: {dt}");
    let dt = dt.clamp(f32::MIN_POSITIVE, state.tuning.max_dt);
    let tuning = state.tuning;

    state.time_ticks += 1;
    let mut events = Vec::new();

    let intent = MoveIntent {
        axis: input.axis,
        jump: input.jump,
    };
    let prev_pos = integrate(&mut state.player, intent, &tuning, dt);
    resolve_player_solids(&mut state.player, prev_pos, &state.solids);

    // Fell out of the world
    let mut died = false;
    if state.player.pos.y < tuning.kill_floor_y {
        events.push(state.respawn());
        died = true;
    }

    update_coins(
        &mut state.coins,
        &state.player,
        &mut state.run,
        dt,
        &mut events,
    );
    update_enemies(
        &mut state.enemies,
        &mut state.player,
        &mut state.run,
        state.spawn,
        &tuning,
        dt,
        died,
        &mut events,
    );
    check_goal(&state.goal, &state.player, &mut state.run, &mut events);

    events
}

/// Spin the coins and collect any within pickup range.
fn update_coins(
    coins: &mut Vec<Coin>,
    player: &Player,
    run: &mut RunState,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    for coin in coins.iter_mut() {
        coin.spin += dt * COIN_SPIN_RATE;
        if coin.pos.distance(player.pos) < coin.radius {
            coin.alive = false;
            run.coins += 1;
            events.push(GameEvent::CoinCollected {
                coin: coin.id,
                total: run.coins,
            });
        }
    }
    coins.retain(|c| c.alive);
}

/// Patrol the enemies and settle any overlap with the player: a descent
/// onto the stompable plane defeats the enemy, anything else is lethal.
/// The player dies at most once per frame; patrol always advances.
#[allow(clippy::too_many_arguments)]
fn update_enemies(
    enemies: &mut Vec<Enemy>,
    player: &mut Player,
    run: &mut RunState,
    spawn: Vec3,
    tuning: &Tuning,
    dt: f32,
    mut died: bool,
    events: &mut Vec<GameEvent>,
) {
    for enemy in enemies.iter_mut() {
        enemy.pos.x += enemy.dir * enemy.speed * dt;
        if (enemy.pos.x - enemy.origin_x).abs() > enemy.range {
            enemy.dir = -enemy.dir;
        }

        if died {
            continue;
        }
        let pa = player.aabb();
        let ea = enemy.aabb();
        if !pa.intersects(&ea) {
            continue;
        }

        let stompable_top = ea.max.y - tuning.stomp_top_margin;
        if player.vel.y < 0.0 && pa.min.y + tuning.stomp_tolerance > stompable_top {
            enemy.alive = false;
            player.vel.y = tuning.jump_vel * tuning.stomp_bounce;
            events.push(GameEvent::EnemyDefeated { enemy: enemy.id });
        } else {
            events.push(respawn_player(player, run, spawn));
            died = true;
        }
    }
    enemies.retain(|e| e.alive);
}

/// Once-only goal detection; `finished` is one-way until reset.
fn check_goal(goal: &Goal, player: &Player, run: &mut RunState, events: &mut Vec<GameEvent>) {
    if run.finished {
        return;
    }
    if goal.pos.distance(player.pos) < goal.radius {
        run.finished = true;
        events.push(GameEvent::LevelComplete { coins: run.coins });
    }
}
