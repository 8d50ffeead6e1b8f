//! Coin Dash headless demo runner
//!
//! Drives the simulation with scripted input (hold right, hop whenever
//! grounded) and logs the gameplay event stream. Stands in for a real
//! rendering host; contains no simulation logic.
//!
//! Usage: `coin-dash [LEVEL.json] [FRAMES]`

use std::env;
use std::fs;

use coin_dash::Tuning;
use coin_dash::sim::{GameEvent, GameState, LevelSpec, TickInput, tick};

const DEMO_DT: f32 = 1.0 / 60.0;
const DEFAULT_FRAMES: u64 = 3600; // one minute of simulated time

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);

    let level = match args.next() {
        Some(path) => {
            let level = serde_json::from_str(&fs::read_to_string(&path)?)?;
            log::info!("Loaded level from {path}");
            level
        }
        None => {
            log::info!("Using built-in course");
            LevelSpec::default_course()
        }
    };
    let frames: u64 = match args.next() {
        Some(n) => n.parse()?,
        None => DEFAULT_FRAMES,
    };

    let mut state = GameState::new(level, Tuning::default());
    log::info!(
        "Course: {} solids, {} coins, {} enemies",
        state.solids.len(),
        state.coins.len(),
        state.enemies.len()
    );

    for _ in 0..frames {
        let input = TickInput {
            axis: 1.0,
            jump: state.player.on_ground,
        };
        for event in tick(&mut state, &input, DEMO_DT) {
            match event {
                GameEvent::CoinCollected { coin, total } => {
                    log::info!("Coin {coin} collected ({total} total)");
                }
                GameEvent::EnemyDefeated { enemy } => {
                    log::info!("Enemy {enemy} stomped");
                }
                GameEvent::PlayerDied { deaths } => {
                    log::info!("Player died ({deaths} deaths)");
                }
                GameEvent::LevelComplete { coins } => {
                    log::info!("Level complete with {coins} coins!");
                }
            }
        }
        if state.goal_reached() {
            break;
        }
    }

    log::info!(
        "Run over after {} ticks: {} coins, {} deaths, finished: {}",
        state.time_ticks,
        state.run.coins,
        state.run.deaths,
        state.run.finished
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Coin Dash starting...");
    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}
