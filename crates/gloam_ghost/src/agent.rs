//! The per-frame ghost driver

use std::sync::Arc;

use gloam_maze::MazeGrid;
use gloam_nav::{Cell, Mover, Path, PathFinder, Waypoint, DEFAULT_ARRIVAL_EPSILON};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::behavior::{BehaviorContext, GhostBehavior};
use crate::events::GhostEvent;

/// Euler rotation (degrees) for the death burst, facing it up at the camera
const DEATH_EFFECT_ROTATION: [f32; 3] = [-90.0, 0.0, 0.0];

/// Agent construction errors
#[derive(Debug, Error, PartialEq)]
pub enum GhostError {
    /// Speed must be positive
    #[error("move speed must be positive, got {0}")]
    InvalidMoveSpeed(f32),
    /// Arrival window must be positive
    #[error("arrival epsilon must be positive, got {0}")]
    InvalidArrivalEpsilon(f32),
    /// Spawn cell must lie inside the maze
    #[error("spawn cell ({x}, {z}) is outside the maze")]
    SpawnOutOfBounds { x: i32, z: i32 },
    /// Spawn cell must be open floor
    #[error("spawn cell ({x}, {z}) is blocked")]
    SpawnBlocked { x: i32, z: i32 },
}

/// Ghost tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GhostConfig {
    pub spawn_cell: Cell,
    /// Distance covered per physics tick
    pub move_speed: f32,
    /// Per-axis arrival window
    pub arrival_epsilon: f32,
    /// Prefab the host instantiates when the ghost dies
    pub effect_prefab: String,
}

impl Default for GhostConfig {
    fn default() -> Self {
        Self {
            spawn_cell: Cell::new(0, 0),
            move_speed: 0.05,
            arrival_epsilon: DEFAULT_ARRIVAL_EPSILON,
            effect_prefab: "ghost_death_burst".to_string(),
        }
    }
}

impl GhostConfig {
    /// Config spawning at `spawn_cell` with default tuning
    pub fn new(spawn_cell: Cell) -> Self {
        Self {
            spawn_cell,
            ..Default::default()
        }
    }

    /// Set the per-tick movement speed
    pub fn with_move_speed(mut self, move_speed: f32) -> Self {
        self.move_speed = move_speed;
        self
    }

    /// Set the arrival window
    pub fn with_arrival_epsilon(mut self, epsilon: f32) -> Self {
        self.arrival_epsilon = epsilon;
        self
    }

    /// Set the death effect prefab name
    pub fn with_effect_prefab(mut self, prefab: impl Into<String>) -> Self {
        self.effect_prefab = prefab.into();
        self
    }
}

/// A ghost: planner, mover, and goal strategy behind two tick methods.
///
/// The driver alternates between two effective states. With an empty path
/// it is planning-needed: the next logical tick asks the behavior for a
/// goal and replans. With a non-empty path it is following: each physics
/// tick advances the mover one step. There is no terminal state; a ghost
/// keeps planning and walking until it is killed.
pub struct GhostAgent {
    maze: Arc<RwLock<MazeGrid>>,
    behavior: Box<dyn GhostBehavior>,
    finder: PathFinder,
    mover: Mover,
    path: Path,
    effect_prefab: String,
    /// Animation flag, not a motion guarantee. A failed search leaves it
    /// set, matching the shipped game: a walled-in ghost keeps its walk
    /// cycle playing while it stands in place.
    is_moving: bool,
    sleep_remaining: f32,
    alive: bool,
    initialized: bool,
    events: Vec<GhostEvent>,
}

impl GhostAgent {
    /// Create an agent at its spawn cell.
    ///
    /// Fails when the tuning is unusable or the spawn cell is outside the
    /// maze or blocked.
    pub fn new(
        config: GhostConfig,
        behavior: Box<dyn GhostBehavior>,
        maze: Arc<RwLock<MazeGrid>>,
    ) -> Result<Self, GhostError> {
        if config.move_speed <= 0.0 {
            return Err(GhostError::InvalidMoveSpeed(config.move_speed));
        }
        if config.arrival_epsilon <= 0.0 {
            return Err(GhostError::InvalidArrivalEpsilon(config.arrival_epsilon));
        }

        let spawn = config.spawn_cell;
        {
            let grid = maze.read();
            if !grid.in_bounds(spawn.x, spawn.z) {
                return Err(GhostError::SpawnOutOfBounds {
                    x: spawn.x,
                    z: spawn.z,
                });
            }
            if grid.is_blocked(spawn.x, spawn.z) {
                return Err(GhostError::SpawnBlocked {
                    x: spawn.x,
                    z: spawn.z,
                });
            }
        }

        let mover = Mover::new(spawn.to_waypoint(), config.move_speed)
            .with_arrival_epsilon(config.arrival_epsilon);

        Ok(Self {
            maze,
            behavior,
            finder: PathFinder::new(),
            mover,
            path: Path::new(),
            effect_prefab: config.effect_prefab,
            is_moving: false,
            sleep_remaining: 0.0,
            alive: true,
            initialized: false,
            events: Vec::new(),
        })
    }

    /// Logical-frame update: replan when the path has run out.
    ///
    /// `player_cell` is the player position the host last reported; `dt`
    /// only feeds the sleep timer. The moving flag is refreshed on every
    /// replan: a goal equal to the current cell clears it, any other goal
    /// sets it, route or no route.
    pub fn on_logical_tick(&mut self, player_cell: Cell, dt: f32) {
        if !self.alive {
            return;
        }
        if self.sleep_remaining > 0.0 {
            self.sleep_remaining = (self.sleep_remaining - dt).max(0.0);
            return;
        }
        if !self.path.is_empty() {
            return;
        }

        let guard = self.maze.read();
        let maze: &MazeGrid = &guard;
        let ghost_cell = Cell::from_waypoint(&self.mover.position);
        let ctx = BehaviorContext {
            ghost_cell,
            player_cell,
            maze,
        };

        if !self.initialized {
            self.behavior.initialize(&ctx);
            self.initialized = true;
        }

        let goal = self.behavior.next_goal_cell(&ctx);
        self.is_moving = goal != ghost_cell;
        self.path = self.finder.find_path(ghost_cell, goal, maze);
    }

    /// Physics-tick update: walk the path one step
    pub fn on_physics_tick(&mut self) {
        if !self.alive || self.sleep_remaining > 0.0 {
            return;
        }
        if !self.path.is_empty() {
            self.mover.advance(&mut self.path);
        }
    }

    /// Suspend planning and movement for `seconds` of logical time.
    ///
    /// The current path survives the nap; the moving flag is untouched, so
    /// the walk animation freezes mid-cycle the way the shipped game's
    /// sleep mode left it.
    pub fn sleep(&mut self, seconds: f32) {
        self.sleep_remaining = seconds.max(0.0);
    }

    /// Kill the ghost: queue the death effect, then the despawn, and stop
    /// reacting to ticks. Killing twice is a no-op.
    pub fn kill(&mut self) {
        if !self.alive {
            return;
        }
        self.alive = false;
        self.events.push(GhostEvent::EffectRequested {
            prefab: self.effect_prefab.clone(),
            position: self.mover.position,
            rotation: DEATH_EFFECT_ROTATION,
        });
        self.events.push(GhostEvent::Despawned);
    }

    /// Take all queued scene notifications, oldest first
    pub fn drain_events(&mut self) -> Vec<GhostEvent> {
        self.events.drain(..).collect()
    }

    /// Whether the walk animation should play
    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    pub fn is_sleeping(&self) -> bool {
        self.sleep_remaining > 0.0
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Continuous position on the movement plane
    pub fn position(&self) -> Waypoint {
        self.mover.position
    }

    /// Cell the ghost currently occupies
    pub fn current_cell(&self) -> Cell {
        Cell::from_waypoint(&self.mover.position)
    }

    /// Steps left on the current path
    pub fn remaining_steps(&self) -> usize {
        self.path.len()
    }
}
