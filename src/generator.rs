//! Random fleet placement.
//!
//! Ships go down longest first. A placement fits when its footprint and the
//! one-cell ring around it are all water, which keeps ships from touching
//! even diagonally. The grid itself is the only placement state.
//!
//! A random pass can paint itself into a corner, usually on a late long ship.
//! When any ship fails to fit within its attempt budget the whole board is
//! thrown away and regenerated; after [`EngineConfig::board_attempts`] failed
//! boards an exhaustive backtracking placer takes over, so a short fleet never
//! reaches play.

use alloc::vec::Vec;
use core::fmt;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::bitboard::CellMask;
use crate::config::{EngineConfig, CELL_COUNT, FLEET, GRID_SIZE, TOTAL_SHIP_CELLS};
use crate::coord::Coord;
use crate::grid::{CellState, Grid};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A candidate ship position: top-left anchor, direction and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub anchor: Coord,
    pub orientation: Orientation,
    pub length: usize,
}

impl Placement {
    pub fn new(anchor: Coord, orientation: Orientation, length: usize) -> Self {
        Self {
            anchor,
            orientation,
            length,
        }
    }

    /// Cells covered by the ship, `None` if it runs off the grid.
    pub fn footprint(&self) -> Option<CellMask> {
        let vertical = self.orientation == Orientation::Vertical;
        (0..self.length)
            .map(|i| self.anchor.step(i, vertical))
            .collect()
    }

    /// Footprint, if the ship and its surrounding ring are all water.
    pub fn fits(&self, grid: &Grid) -> Option<CellMask> {
        let footprint = self.footprint()?;
        let taken = grid.mask(|s| s != CellState::Empty);
        if footprint.dilate().intersects(taken) {
            None
        } else {
            Some(footprint)
        }
    }
}

fn paint(grid: &mut Grid, cells: CellMask, state: CellState) {
    for at in cells.iter() {
        grid.set(at, state);
    }
}

/// Board generation gave up without seating the full fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationError {
    Exhausted,
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::Exhausted => write!(f, "unable to place the full fleet"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GenerationError {}

/// Generate a fully populated board with the default attempt budgets.
pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Result<Grid, GenerationError> {
    generate_with(rng, &EngineConfig::default())
}

/// Generate a fully populated board.
pub fn generate_with<R: Rng + ?Sized>(
    rng: &mut R,
    config: &EngineConfig,
) -> Result<Grid, GenerationError> {
    for _ in 0..config.board_attempts {
        if let Some(grid) = random_board(rng, config.placement_attempts) {
            return Ok(grid);
        }
    }
    #[cfg(feature = "std")]
    log::debug!(
        "random placement failed {} times, switching to exhaustive placement",
        config.board_attempts
    );
    exhaustive_board(rng).ok_or(GenerationError::Exhausted)
}

/// One random pass; `None` as soon as a ship cannot be seated.
fn random_board<R: Rng + ?Sized>(rng: &mut R, attempts: usize) -> Option<Grid> {
    let mut grid = Grid::new();
    for &length in FLEET.iter() {
        let mut placed = false;
        for _ in 0..attempts {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let Some(anchor) = Coord::new(
                rng.random_range(0..GRID_SIZE),
                rng.random_range(0..GRID_SIZE),
            ) else {
                continue;
            };
            if let Some(cells) = Placement::new(anchor, orientation, length).fits(&grid) {
                paint(&mut grid, cells, CellState::Ship);
                placed = true;
                break;
            }
        }
        if !placed {
            return None;
        }
    }
    Some(grid)
}

fn exhaustive_board<R: Rng + ?Sized>(rng: &mut R) -> Option<Grid> {
    let mut grid = Grid::new();
    if seat(&mut grid, 0, rng) {
        Some(grid)
    } else {
        None
    }
}

/// Depth-first placement of `FLEET[ship..]`, trying every anchor and
/// orientation in shuffled order. Depth is bounded by the fleet size.
fn seat<R: Rng + ?Sized>(grid: &mut Grid, ship: usize, rng: &mut R) -> bool {
    let Some(&length) = FLEET.get(ship) else {
        return true;
    };

    let mut candidates = [(0usize, Orientation::Horizontal); 2 * CELL_COUNT];
    let mut n = 0;
    for index in 0..CELL_COUNT {
        candidates[n] = (index, Orientation::Horizontal);
        n += 1;
        // a single cell reads the same both ways
        if length > 1 {
            candidates[n] = (index, Orientation::Vertical);
            n += 1;
        }
    }
    candidates[..n].shuffle(rng);

    for &(index, orientation) in &candidates[..n] {
        let Some(anchor) = Coord::from_index(index) else {
            continue;
        };
        if let Some(cells) = Placement::new(anchor, orientation, length).fits(grid) {
            paint(grid, cells, CellState::Ship);
            if seat(grid, ship + 1, rng) {
                return true;
            }
            paint(grid, cells, CellState::Empty);
        }
    }
    false
}

/// Ways a grid can break the fleet rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FleetError {
    /// Ship cell count differs from the standard fleet.
    ShipCells(usize),
    /// Ship lengths (longest first) differ from the standard fleet.
    Lengths(Vec<usize>),
    /// A ship is not a straight line.
    Bent(Coord),
    /// Two ships share an edge or a corner.
    Touching(Coord),
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FleetError::ShipCells(n) => {
                write!(f, "expected {} ship cells, found {}", TOTAL_SHIP_CELLS, n)
            }
            FleetError::Lengths(lengths) => write!(f, "unexpected ship lengths {:?}", lengths),
            FleetError::Bent(at) => write!(f, "ship at {} is not straight", at),
            FleetError::Touching(at) => write!(f, "ship at {} touches another ship", at),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FleetError {}

/// Check a grid against the standard fleet layout rules.
pub fn validate_fleet(grid: &Grid) -> Result<(), FleetError> {
    let cells = grid.mask(CellState::is_ship_part).len();
    if cells != TOTAL_SHIP_CELLS {
        return Err(FleetError::ShipCells(cells));
    }

    let ships = grid.ships();
    let mut lengths: Vec<usize> = ships.iter().map(CellMask::len).collect();
    lengths.sort_unstable_by(|a, b| b.cmp(a));
    if lengths != FLEET {
        return Err(FleetError::Lengths(lengths));
    }

    let all = grid.mask(CellState::is_ship_part);
    for ship in &ships {
        let Some(first) = ship.iter().next() else {
            continue;
        };
        let straight = ship.iter().all(|at| at.row() == first.row())
            || ship.iter().all(|at| at.col() == first.col());
        if !straight {
            return Err(FleetError::Bent(first));
        }
        let others = all & !*ship;
        if ship.dilate().intersects(others) {
            return Err(FleetError::Touching(first));
        }
    }
    Ok(())
}
