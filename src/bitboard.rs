//! A fixed 10×10 cell set packed into a `u128`.
//!
//! Bit `row * GRID_SIZE + col` represents the cell at (`col`, `row`). The
//! set never allocates, so the flood fill and the placement checks stay
//! usable without `std`.

use core::fmt;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

use crate::config::{CELL_COUNT, GRID_SIZE};
use crate::coord::Coord;

const FULL: u128 = (1u128 << CELL_COUNT) - 1;

/// Set of grid cells.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellMask {
    bits: u128,
}

impl CellMask {
    /// Empty set.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Every cell of the grid.
    pub const fn full() -> Self {
        Self { bits: FULL }
    }

    /// Set holding a single cell.
    pub fn single(at: Coord) -> Self {
        Self {
            bits: 1u128 << at.index(),
        }
    }

    pub fn insert(&mut self, at: Coord) -> bool {
        let bit = 1u128 << at.index();
        let fresh = self.bits & bit == 0;
        self.bits |= bit;
        fresh
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.bits & (1u128 << at.index()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn intersects(&self, other: CellMask) -> bool {
        self.bits & other.bits != 0
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        let bits = self.bits;
        (0..CELL_COUNT)
            .filter(move |i| bits & (1u128 << i) != 0)
            .filter_map(Coord::from_index)
    }

    /// The set grown by one cell in all eight directions, clipped to the grid.
    pub fn dilate(&self) -> Self {
        let mut out = *self;
        for at in self.iter() {
            for neighbour in at.ring() {
                out.insert(neighbour);
            }
        }
        out
    }
}

impl BitAnd for CellMask {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self {
            bits: self.bits & rhs.bits,
        }
    }
}

impl BitAndAssign for CellMask {
    fn bitand_assign(&mut self, rhs: Self) {
        self.bits &= rhs.bits;
    }
}

impl BitOr for CellMask {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for CellMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl Not for CellMask {
    type Output = Self;
    fn not(self) -> Self {
        Self {
            bits: !self.bits & FULL,
        }
    }
}

impl FromIterator<Coord> for CellMask {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        let mut mask = CellMask::new();
        for at in iter {
            mask.insert(at);
        }
        mask
    }
}

impl fmt::Debug for CellMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CellMask ({} cells):", self.len())?;
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let set = Coord::new(col, row).is_some_and(|at| self.contains(at));
                write!(f, "{}", if set { '1' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
