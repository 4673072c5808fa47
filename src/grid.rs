//! The 10×10 battle grid and its five cell states.
//!
//! Ships are not stored as objects. A ship is any maximal edge-connected group
//! of `Ship`, `Hit` or `Sunk` cells, recovered on demand with [`Grid::ship_at`].

use alloc::vec::Vec;
use core::fmt;

use crate::bitboard::CellMask;
use crate::config::{CELL_COUNT, GRID_SIZE};
use crate::coord::Coord;

/// State of a single cell. The discriminant is the storage ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Empty = 0,
    Ship = 1,
    Miss = 2,
    Hit = 3,
    Sunk = 4,
}

impl CellState {
    pub const ALL: [CellState; 5] = [
        CellState::Empty,
        CellState::Ship,
        CellState::Miss,
        CellState::Hit,
        CellState::Sunk,
    ];

    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Belongs to a ship, whether afloat or damaged.
    pub fn is_ship_part(self) -> bool {
        matches!(self, CellState::Ship | CellState::Hit | CellState::Sunk)
    }

    /// Already fired upon.
    pub fn is_resolved(self) -> bool {
        matches!(self, CellState::Miss | CellState::Hit | CellState::Sunk)
    }
}

impl TryFrom<u8> for CellState {
    type Error = GridError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        CellState::ALL
            .get(value as usize)
            .copied()
            .ok_or(GridError::BadCellState(value))
    }
}

/// Errors from decoding a stored grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Stored grid is not exactly 10 rows of 10 cells.
    BadDimensions { rows: usize, cols: usize },
    /// Cell ordinal outside `0..=4`.
    BadCellState(u8),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::BadDimensions { rows, cols } => write!(
                f,
                "grid must be {}x{}, found a row layout of {}x{}",
                GRID_SIZE, GRID_SIZE, rows, cols
            ),
            GridError::BadCellState(v) => write!(f, "unknown cell state ordinal {}", v),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

/// Fixed 10×10 matrix of cell states, indexed `[row][col]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>"))]
pub struct Grid {
    cells: [[CellState; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// All-water grid.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, at: Coord) -> CellState {
        self.cells[at.row()][at.col()]
    }

    pub fn set(&mut self, at: Coord, state: CellState) {
        self.cells[at.row()][at.col()] = state;
    }

    /// Cells paired with their coordinates, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellState)> + '_ {
        Coord::all().map(move |at| (at, self.get(at)))
    }

    pub fn count(&self, state: CellState) -> usize {
        self.iter().filter(|&(_, s)| s == state).count()
    }

    /// Cells whose state satisfies `pred`.
    pub fn mask(&self, pred: impl Fn(CellState) -> bool) -> CellMask {
        self.iter().filter(|&(_, s)| pred(s)).map(|(at, _)| at).collect()
    }

    /// Ship cells not yet hit.
    pub fn remaining_ship_cells(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&s| s == CellState::Ship)
            .count()
    }

    /// At least one ship cell has not been hit.
    pub fn has_afloat(&self) -> bool {
        self.cells.iter().flatten().any(|&s| s == CellState::Ship)
    }

    /// The ship containing `at`, or an empty mask when `at` is not part of one.
    ///
    /// Iterative fill over edge neighbours; each cell enters the stack at most
    /// once, so the stack never exceeds the cell count.
    pub fn ship_at(&self, at: Coord) -> CellMask {
        let mut ship = CellMask::new();
        if !self.get(at).is_ship_part() {
            return ship;
        }
        let mut stack = [at; CELL_COUNT];
        let mut len = 1;
        ship.insert(at);
        while len > 0 {
            len -= 1;
            let cell = stack[len];
            for next in cell.neighbours() {
                if self.get(next).is_ship_part() && ship.insert(next) {
                    stack[len] = next;
                    len += 1;
                }
            }
        }
        ship
    }

    /// Every ship on the grid, ordered by its first cell in row-major order.
    pub fn ships(&self) -> Vec<CellMask> {
        let mut seen = CellMask::new();
        let mut ships = Vec::new();
        for (at, state) in self.iter() {
            if state.is_ship_part() && !seen.contains(at) {
                let ship = self.ship_at(at);
                seen |= ship;
                ships.push(ship);
            }
        }
        ships
    }

    /// Storage form: 10 rows of 10 cell ordinals.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|s| s.ordinal()).collect())
            .collect()
    }

    /// Inverse of [`Grid::to_rows`]. Anything but 10×10 valid ordinals is rejected.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, GridError> {
        let bad = |cols| GridError::BadDimensions {
            rows: rows.len(),
            cols,
        };
        if rows.len() != GRID_SIZE {
            return Err(bad(rows.first().map_or(0, |r| r.as_ref().len())));
        }
        let mut grid = Grid::new();
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != GRID_SIZE {
                return Err(bad(row.len()));
            }
            for (c, &v) in row.iter().enumerate() {
                grid.cells[r][c] = CellState::try_from(v)?;
            }
        }
        Ok(grid)
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        Grid::from_rows(rows.as_slice())
    }
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{")?;
        for row in &self.cells {
            write!(f, "  ")?;
            for s in row {
                write!(f, "{}", s.ordinal())?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
