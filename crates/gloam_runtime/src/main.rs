//! Gloam Runtime
//!
//! Headless driver for the gloam gameplay scripts. Boots a session from
//! a JSON config (or the built-in demo maze), plays the host engine's
//! role for a bounded round, and logs every event the session emits.
//!
//! Run with: cargo run -p gloam_runtime
//!       or: cargo run --bin gloam -- path/to/config.json

mod config;
mod player;
mod session;

use config::GameConfig;
use session::{GameEvent, GameSession, SessionError};

use gloam_items::{BreakerHit, ItemKind};
use gloam_nav::{Cell, Path, PathFinder, Waypoint};

/// Fixed timestep shared by logical and physics frames
const FRAME_DT: f32 = 0.02;

/// The demo round runs at most this many frames
const FRAME_BUDGET: u64 = 1200;

/// Frame at which the demo fires the starting laser
const LASER_FRAME: u64 = 100;

/// Frame at which the demo picks up and throws a wall breaker
const BREAKER_FRAME: u64 = 220;

/// Frames the thrown breaker flies before the host reports its hit
const BREAKER_FLIGHT_FRAMES: u64 = 30;

/// Host-side player walk cadence, frames per cell
const PLAYER_STEP_FRAMES: u64 = 15;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    ).init();

    // Print banner
    println!();
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║                    GLOAM RUNTIME v0.1.0                   ║");
    println!("║                                                           ║");
    println!("║  Headless maze chase: scripted ghosts vs. one player.     ║");
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();

    let config = match std::env::args().nth(1) {
        Some(path) => match GameConfig::load_from_file(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(e) => {
                log::error!("Failed to load {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => {
            log::info!("No config given, using the built-in demo maze");
            GameConfig::default()
        }
    };
    config.print_summary();

    if let Err(e) = run_round(&config) {
        log::error!("Session failed to start: {}", e);
        std::process::exit(1);
    }
}

/// Play the host engine's role for one bounded round.
///
/// The host owns the player's body and all collision, so this loop walks
/// the player toward pellets, reports cell entries, and flags ghost
/// contact by cell overlap. Partway through it throws a wall breaker at
/// the nearest ghost. A real engine would do the same through its
/// physics layer.
fn run_round(config: &GameConfig) -> Result<(), SessionError> {
    let mut session = GameSession::new(config)?;
    let mut finder = PathFinder::new();
    let mut walk = Path::new();

    while session.frame() < FRAME_BUDGET {
        session.logical_tick(FRAME_DT);
        session.physics_tick();

        if session.frame() % PLAYER_STEP_FRAMES == 0 {
            step_player(&mut session, &mut finder, &mut walk);
        }

        if session.frame() == LASER_FRAME {
            session.use_item(0);
        }

        if session.frame() == BREAKER_FRAME {
            if let Some(slot) = session.grant_item(ItemKind::WallBreaker) {
                session.use_item(slot);
            }
        }

        if session.frame() == BREAKER_FRAME + BREAKER_FLIGHT_FRAMES
            && session.player().is_using_item()
        {
            let hit = match nearest_living_ghost(&session) {
                Some(ghost) => BreakerHit::Ghost { ghost },
                None => BreakerHit::Other,
            };
            session.breaker_collided(hit);
        }

        for i in 0..session.ghost_count() {
            let contact = session
                .ghost(i)
                .map(|g| g.is_alive() && g.current_cell() == session.player().cell)
                .unwrap_or(false);
            if contact {
                session.ghost_touched_player(i);
            }
        }

        for event in session.drain_events() {
            match event {
                GameEvent::LaserBeamRequested { .. } => log::debug!("{:?}", event),
                _ => log::info!("{:?}", event),
            }
        }

        if session.frame() % 300 == 1 {
            log::info!(
                "Frame {}: {} pellets left, player energy {}, player at ({}, {})",
                session.frame(),
                session.pellets_remaining(),
                session.player().energy(),
                session.player().cell.x,
                session.player().cell.z
            );
        }

        if session.is_player_caught() || session.is_cleared() {
            break;
        }
    }

    log::info!(
        "Round over after {} frames: caught={} cleared={} energy={} belt={}",
        session.frame(),
        session.is_player_caught(),
        session.is_cleared(),
        session.player().energy(),
        session.player().belt().owned()
    );
    Ok(())
}

/// Move the player one cell toward the nearest pellet, facing the step
fn step_player(session: &mut GameSession, finder: &mut PathFinder, walk: &mut Path) {
    if walk.is_empty() {
        let goal = match nearest_pellet(session) {
            Some(goal) => goal,
            None => return,
        };
        let maze = session.maze();
        let grid = maze.read();
        *walk = finder.find_path(session.player().cell, goal, &*grid);
    }
    if let Some(waypoint) = walk.pop_next() {
        let next = Cell::from_waypoint(&waypoint);
        let from = session.player().cell;
        if next != from {
            session.set_player_facing(Waypoint::new(
                (next.x - from.x) as f32,
                0.0,
                (next.z - from.z) as f32,
            ));
        }
        session.player_entered_cell(next);
    }
}

fn nearest_pellet(session: &GameSession) -> Option<Cell> {
    let from = session.player().cell;
    session
        .pellet_cells()
        .into_iter()
        .min_by_key(|cell| (cell.manhattan_distance(&from), cell.z, cell.x))
}

fn nearest_living_ghost(session: &GameSession) -> Option<usize> {
    let from = session.player().cell;
    (0..session.ghost_count())
        .filter_map(|i| session.ghost(i).map(|ghost| (i, ghost)))
        .filter(|(_, ghost)| ghost.is_alive())
        .min_by_key(|(_, ghost)| ghost.current_cell().manhattan_distance(&from))
        .map(|(i, _)| i)
}
