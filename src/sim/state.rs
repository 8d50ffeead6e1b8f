//! Game state and core simulation types
//!
//! Entity records, the per-run counters, and the event stream the host
//! consumes. Entity IDs are stable handles for the renderer; removal is
//! announced through events, never inferred from list positions.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::aabb::Aabb;
use super::level::LevelSpec;
use crate::consts::{ENEMY_HALF, PLAYER_HALF};
use crate::tuning::Tuning;

/// Discrete gameplay events produced by one tick, in occurrence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A coin left the active set; `total` is the run's new coin count
    CoinCollected { coin: u32, total: u32 },
    /// An enemy was stomped and left the active set
    EnemyDefeated { enemy: u32 },
    /// The player died and was respawned; `deaths` is the new death count
    PlayerDied { deaths: u32 },
    /// The goal was reached with `coins` collected
    LevelComplete { coins: u32 },
}

/// The player's kinematic state
///
/// Run counters (coins, deaths, finished) live in [`RunState`], not here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec3,
    pub vel: Vec3,
    /// Collider half extents
    pub half: Vec3,
    /// Standing on a solid this frame. Recomputed from scratch by the
    /// collision resolver every frame; never carried forward.
    pub on_ground: bool,
}

impl Player {
    pub fn at_spawn(spawn: Vec3) -> Self {
        Self {
            pos: spawn,
            vel: Vec3::ZERO,
            half: PLAYER_HALF,
            on_ground: false,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_half(self.pos, self.half)
    }
}

/// A static platform: center plus half extents, immutable after level build
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Solid {
    pub pos: Vec3,
    pub half: Vec3,
}

impl Solid {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_half(self.pos, self.half)
    }
}

/// A collectible coin
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    pub pos: Vec3,
    /// Pickup trigger radius
    pub radius: f32,
    /// Cosmetic spin angle (radians); not gameplay-relevant
    pub spin: f32,
    /// Tombstone flag: cleared on pickup, compacted after the pass
    pub alive: bool,
}

/// A patrolling enemy
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec3,
    pub half: Vec3,
    /// Patrol half-range around origin_x
    pub range: f32,
    /// Patrol speed (units/s)
    pub speed: f32,
    /// Patrol direction, +1 or -1
    pub dir: f32,
    /// Patrol center on the x axis
    pub origin_x: f32,
    /// Tombstone flag: cleared on defeat, compacted after the pass
    pub alive: bool,
}

impl Enemy {
    pub fn aabb(&self) -> Aabb {
        Aabb::from_center_half(self.pos, self.half)
    }
}

/// The level's goal marker
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Goal {
    pub pos: Vec3,
    /// Trigger radius
    pub radius: f32,
}

/// Per-run counters and the finished flag
///
/// Reset by [`GameState::reset_run`]; a respawn only bumps `deaths`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct RunState {
    pub coins: u32,
    pub deaths: u32,
    /// One-way per run: set when the goal is reached, cleared only by
    /// respawn or run reset
    pub finished: bool,
}

/// Complete simulation state for one run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Level data, retained for run reset
    level: LevelSpec,
    pub tuning: Tuning,
    pub player: Player,
    pub run: RunState,
    pub spawn: Vec3,
    /// Static platforms, in level order
    pub solids: Vec<Solid>,
    /// Live coins, in level order
    pub coins: Vec<Coin>,
    /// Live enemies, in level order
    pub enemies: Vec<Enemy>,
    pub goal: Goal,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Build a fresh run from level data
    pub fn new(level: LevelSpec, tuning: Tuning) -> Self {
        let spawn = Vec3::from(level.spawn);
        let mut state = Self {
            level,
            tuning,
            player: Player::at_spawn(spawn),
            run: RunState::default(),
            spawn,
            solids: Vec::new(),
            coins: Vec::new(),
            enemies: Vec::new(),
            goal: Goal {
                pos: Vec3::ZERO,
                radius: tuning.goal_radius,
            },
            time_ticks: 0,
            next_id: 1,
        };
        state.build_entities();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// (Re)build world entities from the retained level data
    fn build_entities(&mut self) {
        self.solids = self
            .level
            .solids
            .iter()
            .map(|s| Solid {
                pos: Vec3::from(s.pos),
                half: Vec3::from(s.half),
            })
            .collect();

        self.coins = Vec::with_capacity(self.level.coins.len());
        for pos in self.level.coins.clone() {
            let id = self.next_entity_id();
            self.coins.push(Coin {
                id,
                pos: Vec3::from(pos),
                radius: self.tuning.coin_radius,
                spin: 0.0,
                alive: true,
            });
        }

        self.enemies = Vec::with_capacity(self.level.enemies.len());
        for spec in self.level.enemies.clone() {
            let id = self.next_entity_id();
            self.enemies.push(Enemy {
                id,
                pos: Vec3::from(spec.pos),
                half: ENEMY_HALF,
                range: spec.range,
                speed: spec.speed,
                dir: 1.0,
                origin_x: spec.pos[0],
                alive: true,
            });
        }

        self.goal = Goal {
            pos: Vec3::from(self.level.goal),
            radius: self.tuning.goal_radius,
        };
    }

    /// Kill the player: back to spawn, velocity zeroed, death counted.
    /// Coins and level entities are untouched.
    pub fn respawn(&mut self) -> GameEvent {
        respawn_player(&mut self.player, &mut self.run, self.spawn)
    }

    /// Full run reset: rebuild the level, zero all counters, and place the
    /// player at spawn. Must only be invoked between ticks.
    pub fn reset_run(&mut self) {
        self.build_entities();
        self.run = RunState::default();
        self.player = Player::at_spawn(self.spawn);
        self.time_ticks = 0;
    }

    /// Whether the goal has been reached this run
    pub fn goal_reached(&self) -> bool {
        self.run.finished
    }
}

/// Shared respawn rule, also callable mid-pass under split field borrows
pub(crate) fn respawn_player(player: &mut Player, run: &mut RunState, spawn: Vec3) -> GameEvent {
    player.pos = spawn;
    player.vel = Vec3::ZERO;
    player.on_ground = false;
    run.deaths += 1;
    run.finished = false;
    GameEvent::PlayerDied { deaths: run.deaths }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::LevelSpec;

    fn small_state() -> GameState {
        GameState::new(LevelSpec::default_course(), Tuning::default())
    }

    #[test]
    fn test_build_from_level() {
        let state = small_state();
        assert_eq!(state.solids.len(), 11); // ground + 10 platforms
        assert_eq!(state.coins.len(), 10);
        assert_eq!(state.enemies.len(), 2);
        assert_eq!(state.player.pos, state.spawn);
        assert!(state.coins.iter().all(|c| c.alive));
        assert!(state.enemies.iter().all(|e| e.alive));
    }

    #[test]
    fn test_entity_ids_unique() {
        let state = small_state();
        let mut ids: Vec<u32> = state
            .coins
            .iter()
            .map(|c| c.id)
            .chain(state.enemies.iter().map(|e| e.id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), state.coins.len() + state.enemies.len());
    }

    #[test]
    fn test_respawn_counts_death_and_clears_motion() {
        let mut state = small_state();
        state.player.pos = Vec3::new(5.0, -20.0, 0.0);
        state.player.vel = Vec3::new(3.0, -12.0, 1.0);
        state.player.on_ground = true;
        state.run.finished = true;

        let event = state.respawn();
        assert_eq!(event, GameEvent::PlayerDied { deaths: 1 });
        assert_eq!(state.player.pos, state.spawn);
        assert_eq!(state.player.vel, Vec3::ZERO);
        assert!(!state.player.on_ground);
        assert!(!state.run.finished);
    }

    #[test]
    fn test_reset_run_zeroes_counters_without_a_death() {
        let mut state = small_state();
        state.run.coins = 7;
        state.run.deaths = 3;
        state.run.finished = true;
        state.coins[0].alive = false;
        state.enemies.clear();

        state.reset_run();
        assert_eq!(state.run.coins, 0);
        assert_eq!(state.run.deaths, 0);
        assert!(!state.run.finished);
        assert_eq!(state.coins.len(), 10);
        assert_eq!(state.enemies.len(), 2);
        assert_eq!(state.player.pos, state.spawn);
    }
}
