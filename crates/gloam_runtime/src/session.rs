//! Game Session
//!
//! One running maze-chase round. The session owns the shared maze, the
//! ghost roster, the player, and the remaining pellets, and exposes the
//! seams a host engine drives: tick entry points, collision reports, and
//! item button presses. Everything observable flows back out through
//! [`GameEvent`]s drained once per frame.
//!
//! Ghost indices are stable for the life of the session. A destroyed
//! ghost keeps its slot so later collision reports still name the right
//! agent.

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;
use thiserror::Error;

use gloam_ghost::{GhostAgent, GhostConfig, GhostError, GhostEvent};
use gloam_items::{BeltEvent, BreakerHit, BreakerOutcome, ItemKind};
use gloam_maze::{LayoutError, MazeGrid, MazeLayout};
use gloam_nav::{Cell, Waypoint};

use crate::config::{GameConfig, GhostSpawnConfig};
use crate::player::PlayerState;

/// Error raised while assembling a session
#[derive(Debug, Error)]
pub enum SessionError {
    /// The layout text did not parse
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    /// A ghost could not be spawned
    #[error("ghost spawn error: {0}")]
    Ghost(#[from] GhostError),

    /// The layout has no `P` marker
    #[error("layout has no player spawn")]
    MissingPlayerSpawn,
}

/// Observable session output, drained once per frame by the host
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A ghost body reached the player
    PlayerCaught { ghost: usize },

    /// The player picked up a pellet
    PelletEaten { cell: Cell, energy: i32 },

    /// A breakable wall was knocked out
    WallBroken { cell: Cell },

    /// A ghost asked for a one-shot visual at its death spot
    EffectRequested {
        prefab: String,
        position: Waypoint,
        rotation: [f32; 3],
    },

    /// A ghost left the session for good
    GhostDespawned { ghost: usize },

    /// A pickup landed on the belt
    ItemGranted { slot: usize, kind: ItemKind },

    /// A belt item was deployed
    ItemDeployed { slot: usize, kind: ItemKind },

    /// A pickup bounced off a full belt
    ItemLost { kind: ItemKind },

    /// The laser is up this physics tick
    LaserBeamRequested { origin: Waypoint, facing: Waypoint },
}

/// One running round
pub struct GameSession {
    maze: Arc<RwLock<MazeGrid>>,
    ghosts: Vec<GhostAgent>,
    player: PlayerState,
    pellets: HashSet<Cell>,
    pellet_energy: i32,
    events: Vec<GameEvent>,
    frame: u64,
    player_caught: bool,
}

impl GameSession {
    /// Assemble a session from a config.
    ///
    /// Ghosts spawn on the layout's `G` markers in scan order. Spawn
    /// settings come from `config.ghosts`, cycled when there are more
    /// markers than entries; an empty list gives every marker a default
    /// chase ghost.
    pub fn new(config: &GameConfig) -> Result<Self, SessionError> {
        let layout = MazeLayout::parse(&config.layout)?;
        let player_spawn = layout
            .player_spawn
            .ok_or(SessionError::MissingPlayerSpawn)?;

        let maze = Arc::new(RwLock::new(layout.grid));
        let player = PlayerState::new(&config.player, player_spawn);

        let fallback = GhostSpawnConfig::default();
        let mut ghosts = Vec::with_capacity(layout.ghost_spawns.len());
        for spawn in &layout.ghost_spawns {
            let spawn_config = if config.ghosts.is_empty() {
                &fallback
            } else {
                &config.ghosts[ghosts.len() % config.ghosts.len()]
            };
            let mut agent = GhostAgent::new(
                GhostConfig::new(*spawn)
                    .with_move_speed(spawn_config.move_speed)
                    .with_arrival_epsilon(spawn_config.arrival_epsilon),
                spawn_config.behavior.build(),
                Arc::clone(&maze),
            )?;
            if spawn_config.sleep_on_spawn > 0.0 {
                agent.sleep(spawn_config.sleep_on_spawn);
            }
            ghosts.push(agent);
        }

        let pellets: HashSet<Cell> = layout.pellets.iter().copied().collect();

        {
            let grid = maze.read();
            log::info!(
                "Session up: {}x{} maze, {} ghosts, {} pellets",
                grid.width(),
                grid.height(),
                ghosts.len(),
                pellets.len()
            );
        }

        let mut session = Self {
            maze,
            ghosts,
            player,
            pellets,
            pellet_energy: config.player.pellet_energy,
            events: Vec::new(),
            frame: 0,
            player_caught: false,
        };
        session.sync_belt_events();
        Ok(session)
    }

    /// Advance scripted logic by one logical frame.
    ///
    /// Ghost replanning and the laser timer live here; translation does
    /// not, call [`physics_tick`](Self::physics_tick) for that.
    pub fn logical_tick(&mut self, dt: f32) {
        self.frame += 1;
        self.player.tick(dt);
        let player_cell = self.player.cell;
        for ghost in &mut self.ghosts {
            ghost.on_logical_tick(player_cell, dt);
        }
    }

    /// Advance movement by one fixed physics step
    pub fn physics_tick(&mut self) {
        for ghost in &mut self.ghosts {
            ghost.on_physics_tick();
        }
        if self.player.laser().is_active() {
            self.events.push(GameEvent::LaserBeamRequested {
                origin: self.player.cell.to_waypoint(),
                facing: self.player.facing,
            });
        }
    }

    /// Report that the player's body arrived in a new cell.
    ///
    /// Pellet pickup happens here, once per pellet.
    pub fn player_entered_cell(&mut self, cell: Cell) {
        self.set_player_cell(cell);
        if self.pellets.remove(&cell) {
            let energy = self.pellet_energy;
            self.player.add_energy(energy);
            log::debug!("Pellet eaten at ({}, {})", cell.x, cell.z);
            self.events.push(GameEvent::PelletEaten { cell, energy });
        }
    }

    /// Position sync without pickup side effects, for teleports and
    /// portal exits
    pub fn set_player_cell(&mut self, cell: Cell) {
        self.player.cell = cell;
    }

    /// Aim sync for laser beams
    pub fn set_player_facing(&mut self, facing: Waypoint) {
        self.player.facing = facing;
    }

    /// Report a ghost body overlapping the player. Dead ghosts and
    /// repeat reports are ignored.
    pub fn ghost_touched_player(&mut self, ghost: usize) {
        if self.player_caught {
            return;
        }
        let alive = self
            .ghosts
            .get(ghost)
            .map(GhostAgent::is_alive)
            .unwrap_or(false);
        if !alive {
            return;
        }
        self.player_caught = true;
        log::info!("Player caught by ghost {}", ghost);
        self.events.push(GameEvent::PlayerCaught { ghost });
    }

    /// Hand a floor pickup to the player. Returns the belt slot it landed
    /// in, or `None` when the belt was full and the pickup was lost.
    pub fn grant_item(&mut self, kind: ItemKind) -> Option<usize> {
        let slot = self.player.grant(kind);
        self.sync_belt_events();
        slot
    }

    /// Press the item button for `slot`. Returns what was deployed, if
    /// anything.
    pub fn use_item(&mut self, slot: usize) -> Option<ItemKind> {
        let deployed = self.player.use_item(slot);
        self.sync_belt_events();
        deployed
    }

    /// Report what a deployed wall breaker ran into.
    ///
    /// Whatever the outcome, the breaker is spent and the player may
    /// deploy again.
    pub fn breaker_collided(&mut self, hit: BreakerHit) {
        match hit.resolve() {
            BreakerOutcome::GhostDestroyed { ghost } => self.kill_ghost(ghost),
            BreakerOutcome::WallBroken { cell } => {
                if self.maze.write().break_wall(cell.x, cell.z) {
                    log::info!("Wall broken at ({}, {})", cell.x, cell.z);
                    self.events.push(GameEvent::WallBroken { cell });
                }
            }
            BreakerOutcome::Spent => {}
        }
        self.player.clear_using_item();
    }

    /// Destroy a ghost and surface its exit events. Unknown indices and
    /// already-dead ghosts are no-ops.
    pub fn kill_ghost(&mut self, ghost: usize) {
        if let Some(agent) = self.ghosts.get_mut(ghost) {
            agent.kill();
            for event in agent.drain_events() {
                match event {
                    GhostEvent::EffectRequested {
                        prefab,
                        position,
                        rotation,
                    } => self.events.push(GameEvent::EffectRequested {
                        prefab,
                        position,
                        rotation,
                    }),
                    GhostEvent::Despawned => {
                        self.events.push(GameEvent::GhostDespawned { ghost })
                    }
                }
            }
        }
    }

    /// Take the events queued since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn is_player_caught(&self) -> bool {
        self.player_caught
    }

    /// True once every pellet is eaten
    pub fn is_cleared(&self) -> bool {
        self.pellets.is_empty()
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn pellets_remaining(&self) -> usize {
        self.pellets.len()
    }

    /// Remaining pellet cells, for hosts placing pickup objects
    pub fn pellet_cells(&self) -> Vec<Cell> {
        self.pellets.iter().copied().collect()
    }

    pub fn ghost_count(&self) -> usize {
        self.ghosts.len()
    }

    pub fn ghost(&self, index: usize) -> Option<&GhostAgent> {
        self.ghosts.get(index)
    }

    /// Shared maze handle, for hosts that embed their own pathing
    pub fn maze(&self) -> Arc<RwLock<MazeGrid>> {
        Arc::clone(&self.maze)
    }

    fn sync_belt_events(&mut self) {
        for event in self.player.belt_mut().drain_events() {
            match event {
                BeltEvent::ItemAdded { slot, kind } => {
                    self.events.push(GameEvent::ItemGranted { slot, kind })
                }
                BeltEvent::ItemUsed { slot, kind } => {
                    self.events.push(GameEvent::ItemDeployed { slot, kind })
                }
                BeltEvent::BeltFull { kind } => {
                    log::debug!("Belt full, {} lost", kind);
                    self.events.push(GameEvent::ItemLost { kind })
                }
            }
        }
    }
}
