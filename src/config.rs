//! Board geometry, fleet composition and generator tuning.

/// Width and height of every grid.
pub const GRID_SIZE: usize = 10;
/// Number of cells on a grid.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

pub const NUM_SHIPS: usize = 10;
/// Ship lengths, longest first. Placement order follows this array.
pub const FLEET: [usize; NUM_SHIPS] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Random placement tries per ship before the board is abandoned.
pub const PLACEMENT_ATTEMPTS: usize = 200;
/// Whole-board random retries before falling back to exhaustive placement.
pub const BOARD_ATTEMPTS: usize = 32;

/// Runtime knobs for board generation and session RNG seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Fixed RNG seed for reproducible boards. `None` seeds from the OS.
    pub seed: Option<u64>,
    pub placement_attempts: usize,
    pub board_attempts: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            placement_attempts: PLACEMENT_ATTEMPTS,
            board_attempts: BOARD_ATTEMPTS,
        }
    }
}

impl EngineConfig {
    /// Same as `Default`, with `seed` taken from `SEABATTLE_SEED` when it
    /// parses as a `u64`.
    #[cfg(feature = "std")]
    pub fn from_env() -> Self {
        let seed = std::env::var("SEABATTLE_SEED")
            .ok()
            .and_then(|s| s.trim().parse().ok());
        Self {
            seed,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
