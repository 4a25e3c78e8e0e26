//! Game Configuration
//!
//! Session settings loaded from a JSON file: the ASCII maze layout, one
//! entry per ghost spawn, and player tuning. Every field has a default,
//! so a partial config (or no file at all) still yields a playable
//! session.
//!
//! # Example Config File
//!
//! ```json
//! {
//!   "layout": "#####\n#P.G#\n#####",
//!   "ghosts": [
//!     { "behavior": "Chase" },
//!     { "behavior": { "Wander": { "seed": 7 } }, "move_speed": 0.04 }
//!   ],
//!   "player": { "belt_capacity": 8, "laser_max_time": 3.0 }
//! }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use gloam_ghost::BehaviorKind;
use gloam_nav::DEFAULT_ARRIVAL_EPSILON;

/// Built-in demo maze used when no config file is given
pub const DEMO_LAYOUT: &str = "\
#############
#P..*...*..G#
#.##.###.##.#
#*..........#
#.#.##*##.#.#
#...*...*...#
#.##.###.##.#
#G....*....*#
#############";

/// Error raised while loading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid JSON for [`GameConfig`]
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Per-ghost spawn settings.
///
/// Ghost positions come from the layout's `G` markers; this struct decides
/// what each spawned ghost does once it wakes up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GhostSpawnConfig {
    /// Goal-selection strategy
    #[serde(default = "default_behavior")]
    pub behavior: BehaviorKind,

    /// Distance moved per physics tick
    #[serde(default = "default_move_speed")]
    pub move_speed: f32,

    /// Per-axis waypoint arrival window
    #[serde(default = "default_arrival_epsilon")]
    pub arrival_epsilon: f32,

    /// Seconds to hold at spawn before the first pursuit
    #[serde(default)]
    pub sleep_on_spawn: f32,
}

fn default_behavior() -> BehaviorKind { BehaviorKind::Chase }
fn default_move_speed() -> f32 { 0.05 }
fn default_arrival_epsilon() -> f32 { DEFAULT_ARRIVAL_EPSILON }

impl Default for GhostSpawnConfig {
    fn default() -> Self {
        Self {
            behavior: default_behavior(),
            move_speed: default_move_speed(),
            arrival_epsilon: default_arrival_epsilon(),
            sleep_on_spawn: 0.0,
        }
    }
}

/// Player tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Item slots on the belt
    #[serde(default = "default_belt_capacity")]
    pub belt_capacity: usize,

    /// Seconds the laser stays up once fired
    #[serde(default = "default_laser_max_time")]
    pub laser_max_time: f32,

    /// Energy granted per pellet
    #[serde(default = "default_pellet_energy")]
    pub pellet_energy: i32,
}

fn default_belt_capacity() -> usize { 8 }
fn default_laser_max_time() -> f32 { 3.0 }
fn default_pellet_energy() -> i32 { 1 }

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            belt_capacity: default_belt_capacity(),
            laser_max_time: default_laser_max_time(),
            pellet_energy: default_pellet_energy(),
        }
    }
}

/// Root session configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// ASCII maze layout, parsed by [`gloam_maze::MazeLayout`]
    #[serde(default = "default_layout")]
    pub layout: String,

    /// One entry per ghost, applied to `G` markers in layout order.
    /// Fewer entries than markers cycles the list; an empty list gives
    /// every marker a default chase ghost.
    #[serde(default)]
    pub ghosts: Vec<GhostSpawnConfig>,

    /// Player tuning
    #[serde(default)]
    pub player: PlayerConfig,
}

fn default_layout() -> String { DEMO_LAYOUT.to_string() }

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            layout: default_layout(),
            ghosts: vec![
                GhostSpawnConfig::default(),
                GhostSpawnConfig {
                    behavior: BehaviorKind::Wander { seed: Some(7) },
                    ..GhostSpawnConfig::default()
                },
            ],
            player: PlayerConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load a session config from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }

    /// Parse a session config from a JSON string
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Log the effective settings at startup
    pub fn print_summary(&self) {
        let rows = self.layout.lines().filter(|l| !l.trim().is_empty()).count();
        log::info!("Session configuration:");
        log::info!("  Layout: {} rows", rows);
        log::info!("  Ghosts: {} configured", self.ghosts.len());
        log::info!(
            "  Player: belt={} laser={}s pellet_energy={}",
            self.player.belt_capacity,
            self.player.laser_max_time,
            self.player.pellet_energy
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloam_maze::MazeLayout;

    #[test]
    fn test_demo_layout_parses() {
        let config = GameConfig::default();
        let layout = MazeLayout::parse(&config.layout).unwrap();
        assert!(layout.player_spawn.is_some());
        assert_eq!(layout.ghost_spawns.len(), 2);
        assert_eq!(layout.pellets.len(), 8);
    }

    #[test]
    fn test_empty_json_takes_defaults() {
        let config = GameConfig::from_json("{}").unwrap();
        assert_eq!(config.layout, DEMO_LAYOUT);
        assert!(config.ghosts.is_empty());
        assert_eq!(config.player.belt_capacity, 8);
        assert_eq!(config.player.pellet_energy, 1);
    }

    #[test]
    fn test_ghost_entry_fills_missing_fields() {
        let config = GameConfig::from_json(
            r#"{ "ghosts": [ { "behavior": "Scatter" } ] }"#,
        )
        .unwrap();
        assert_eq!(config.ghosts.len(), 1);
        assert_eq!(config.ghosts[0].behavior, BehaviorKind::Scatter);
        assert_eq!(config.ghosts[0].move_speed, 0.05);
        assert_eq!(config.ghosts[0].sleep_on_spawn, 0.0);
    }

    #[test]
    fn test_wander_seed_from_json() {
        let config = GameConfig::from_json(
            r#"{ "ghosts": [ { "behavior": { "Wander": { "seed": 7 } } } ] }"#,
        )
        .unwrap();
        assert_eq!(
            config.ghosts[0].behavior,
            BehaviorKind::Wander { seed: Some(7) }
        );
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameConfig::load_from_file("/nonexistent/gloam.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
