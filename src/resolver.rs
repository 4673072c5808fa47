//! Shot resolution: the per-cell state machine plus sunk and win detection.
//!
//! ```text
//!   Empty ──fire──> Miss
//!   Ship  ──fire──> Hit ──(whole ship hit)──> Sunk
//!   Miss | Hit | Sunk ──fire──> unchanged (AlreadyShot)
//! ```
//!
//! Sinking a ship recolours only the ship itself. Water around a sunk ship is
//! left untouched and can still be fired at.

use alloc::format;
use alloc::string::String;

use crate::coord::Coord;
use crate::grid::{CellState, Grid};

/// Result of firing at one cell.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Water.
    Miss { at: Coord },
    /// Damaged a ship that still has intact cells.
    Hit { at: Coord },
    /// Completed a ship of `length` cells.
    Sunk { at: Coord, length: usize },
    /// Eliminated the last ship; `grid` is the final board.
    Win { at: Coord, grid: Grid },
    /// Cell was fired at before. Nothing changed.
    AlreadyShot { at: Coord },
    /// Target is off the grid. Nothing changed.
    OutOfBounds { col: usize, row: usize },
}

/// Payload-free tag of a [`ShotOutcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum OutcomeKind {
    Miss,
    Hit,
    Sunk,
    Win,
    AlreadyShot,
    OutOfBounds,
}

impl ShotOutcome {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            ShotOutcome::Miss { .. } => OutcomeKind::Miss,
            ShotOutcome::Hit { .. } => OutcomeKind::Hit,
            ShotOutcome::Sunk { .. } => OutcomeKind::Sunk,
            ShotOutcome::Win { .. } => OutcomeKind::Win,
            ShotOutcome::AlreadyShot { .. } => OutcomeKind::AlreadyShot,
            ShotOutcome::OutOfBounds { .. } => OutcomeKind::OutOfBounds,
        }
    }

    /// Targeted cell, `None` for off-grid shots.
    pub fn at(&self) -> Option<Coord> {
        match self {
            ShotOutcome::Miss { at }
            | ShotOutcome::Hit { at }
            | ShotOutcome::Sunk { at, .. }
            | ShotOutcome::Win { at, .. }
            | ShotOutcome::AlreadyShot { at } => Some(*at),
            ShotOutcome::OutOfBounds { .. } => None,
        }
    }

    /// The shot changed the board and counts toward the move total.
    pub fn counts_as_move(&self) -> bool {
        matches!(
            self,
            ShotOutcome::Miss { .. }
                | ShotOutcome::Hit { .. }
                | ShotOutcome::Sunk { .. }
                | ShotOutcome::Win { .. }
        )
    }

    pub fn is_win(&self) -> bool {
        matches!(self, ShotOutcome::Win { .. })
    }

    /// Short reply for the player.
    pub fn message(&self) -> String {
        match self {
            ShotOutcome::Miss { .. } => String::from("Miss."),
            ShotOutcome::Hit { .. } => String::from("Hit!"),
            ShotOutcome::Sunk { length, .. } => {
                format!("Sunk! A {}-deck ship goes down.", length)
            }
            ShotOutcome::Win { .. } => String::from("Victory! The whole fleet is sunk."),
            ShotOutcome::AlreadyShot { at } => {
                format!("You already fired at {}. Pick another cell.", at)
            }
            ShotOutcome::OutOfBounds { .. } => {
                String::from("That cell is off the board. Use A-J and 1-10.")
            }
        }
    }
}

/// Fire at zero-based (`col`, `row`), updating `grid` in place.
pub fn resolve(grid: &mut Grid, col: usize, row: usize) -> ShotOutcome {
    match Coord::new(col, row) {
        Some(at) => fire(grid, at),
        None => ShotOutcome::OutOfBounds { col, row },
    }
}

/// Fire at an in-bounds cell, updating `grid` in place.
pub fn fire(grid: &mut Grid, at: Coord) -> ShotOutcome {
    match grid.get(at) {
        CellState::Miss | CellState::Hit | CellState::Sunk => ShotOutcome::AlreadyShot { at },
        CellState::Empty => {
            grid.set(at, CellState::Miss);
            ShotOutcome::Miss { at }
        }
        CellState::Ship => {
            grid.set(at, CellState::Hit);

            let ship = grid.ship_at(at);
            let destroyed = ship.iter().all(|c| grid.get(c) != CellState::Ship);
            if destroyed {
                for c in ship.iter() {
                    grid.set(c, CellState::Sunk);
                }
            }

            if !grid.has_afloat() {
                for c in grid.mask(|s| s == CellState::Hit).iter() {
                    grid.set(c, CellState::Sunk);
                }
                return ShotOutcome::Win { at, grid: *grid };
            }

            if destroyed {
                ShotOutcome::Sunk {
                    at,
                    length: ship.len(),
                }
            } else {
                ShotOutcome::Hit { at }
            }
        }
    }
}
