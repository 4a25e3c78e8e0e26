//! Goal-picking strategies for ghost agents

use gloam_maze::MazeGrid;
use gloam_nav::Cell;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// What a strategy can see when choosing a goal
pub struct BehaviorContext<'a> {
    /// Cell the ghost currently occupies
    pub ghost_cell: Cell,
    /// Cell the player was last reported in
    pub player_cell: Cell,
    pub maze: &'a MazeGrid,
}

/// Pluggable next-goal policy.
///
/// The driver asks for a goal whenever its path runs out. Returning the
/// ghost's own cell parks the ghost for a frame. Implementations must
/// return an in-bounds cell.
pub trait GhostBehavior: Send {
    /// One-time setup on the agent's first logical tick
    fn initialize(&mut self, _ctx: &BehaviorContext) {}

    /// The next cell to head for
    fn next_goal_cell(&mut self, ctx: &BehaviorContext) -> Cell;
}

/// Heads straight for the player's current cell
#[derive(Debug, Default)]
pub struct ChaseBehavior;

impl GhostBehavior for ChaseBehavior {
    fn next_goal_cell(&mut self, ctx: &BehaviorContext) -> Cell {
        ctx.player_cell
    }
}

/// Cycles the four maze corners, moving on when a corner is reached.
///
/// Each corner is the open cell nearest to it, so walled-off corners still
/// get a reachable stand-in.
#[derive(Debug, Default)]
pub struct ScatterBehavior {
    corners: Vec<Cell>,
    index: usize,
}

impl ScatterBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    fn nearest_open(corner: Cell, open: &[Cell]) -> Option<Cell> {
        open.iter()
            .copied()
            .min_by_key(|cell| cell.manhattan_distance(&corner))
    }
}

impl GhostBehavior for ScatterBehavior {
    fn initialize(&mut self, ctx: &BehaviorContext) {
        let open = ctx.maze.open_cells();
        let width = ctx.maze.width();
        let height = ctx.maze.height();
        let corners = [
            Cell::new(0, 0),
            Cell::new(width - 1, 0),
            Cell::new(width - 1, height - 1),
            Cell::new(0, height - 1),
        ];
        self.corners = corners
            .iter()
            .filter_map(|corner| Self::nearest_open(*corner, &open))
            .collect();
        self.index = 0;
    }

    fn next_goal_cell(&mut self, ctx: &BehaviorContext) -> Cell {
        if self.corners.is_empty() {
            return ctx.ghost_cell;
        }
        if ctx.ghost_cell == self.corners[self.index] {
            self.index = (self.index + 1) % self.corners.len();
        }
        self.corners[self.index]
    }
}

/// Walks a fixed route of cells, advancing on arrival
#[derive(Debug, Clone)]
pub struct PatrolBehavior {
    route: Vec<Cell>,
    index: usize,
}

impl PatrolBehavior {
    pub fn new(route: Vec<Cell>) -> Self {
        Self { route, index: 0 }
    }
}

impl GhostBehavior for PatrolBehavior {
    fn next_goal_cell(&mut self, ctx: &BehaviorContext) -> Cell {
        if self.route.is_empty() {
            return ctx.ghost_cell;
        }
        if ctx.ghost_cell == self.route[self.index] {
            self.index = (self.index + 1) % self.route.len();
        }
        self.route[self.index]
    }
}

/// Picks a uniformly random open cell each time the path runs out
pub struct WanderBehavior {
    rng: StdRng,
}

impl WanderBehavior {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded variant for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for WanderBehavior {
    fn default() -> Self {
        Self::new()
    }
}

impl GhostBehavior for WanderBehavior {
    fn next_goal_cell(&mut self, ctx: &BehaviorContext) -> Cell {
        let open = ctx.maze.open_cells();
        if open.is_empty() {
            return ctx.ghost_cell;
        }
        open[self.rng.gen_range(0..open.len())]
    }
}

/// Config-facing behavior selector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BehaviorKind {
    Chase,
    Scatter,
    Patrol { route: Vec<Cell> },
    Wander { seed: Option<u64> },
}

impl BehaviorKind {
    /// Instantiate the strategy this kind names
    pub fn build(&self) -> Box<dyn GhostBehavior> {
        match self {
            BehaviorKind::Chase => Box::new(ChaseBehavior),
            BehaviorKind::Scatter => Box::new(ScatterBehavior::new()),
            BehaviorKind::Patrol { route } => Box::new(PatrolBehavior::new(route.clone())),
            BehaviorKind::Wander { seed: Some(seed) } => {
                Box::new(WanderBehavior::with_seed(*seed))
            }
            BehaviorKind::Wander { seed: None } => Box::new(WanderBehavior::new()),
        }
    }
}
