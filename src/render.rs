//! Text rendering of a grid for operators and players.

use alloc::string::String;
use core::fmt::Write;

use crate::config::GRID_SIZE;
use crate::coord::{Coord, LATIN_COLUMNS};
use crate::grid::{CellState, Grid};

/// Whether intact ships are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    /// Operator view: all five states are distinct.
    All,
    /// Player view: intact ship cells look like water.
    Hidden,
}

/// Display symbol for a cell state.
pub fn symbol(state: CellState) -> char {
    match state {
        CellState::Empty => '.',
        CellState::Ship => 'S',
        CellState::Miss => 'o',
        CellState::Hit => 'X',
        CellState::Sunk => '#',
    }
}

/// Framed board with column letters, row numbers and a legend.
pub fn render(grid: &Grid, reveal: Reveal) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_board(&mut out, grid, reveal);
    out
}

fn write_board(out: &mut String, grid: &Grid, reveal: Reveal) -> core::fmt::Result {
    writeln!(out, "    ╔════════════════════════╗")?;
    write!(out, "    ║   ")?;
    for ch in LATIN_COLUMNS {
        write!(out, " {}", ch)?;
    }
    writeln!(out, " ║")?;
    writeln!(out, "    ╠════════════════════════╣")?;
    for row in 0..GRID_SIZE {
        write!(out, "    ║ {:2}", row + 1)?;
        for col in 0..GRID_SIZE {
            let state = Coord::new(col, row).map_or(CellState::Empty, |at| grid.get(at));
            let shown = match (state, reveal) {
                (CellState::Ship, Reveal::Hidden) => CellState::Empty,
                (s, _) => s,
            };
            write!(out, " {}", symbol(shown))?;
        }
        writeln!(out, " ║")?;
    }
    writeln!(out, "    ╚════════════════════════╝")?;
    match reveal {
        Reveal::All => writeln!(out, "    Legend: S=Ship  X=Hit  #=Sunk  o=Miss  .=Water"),
        Reveal::Hidden => writeln!(out, "    Legend: X=Hit  #=Sunk  o=Miss  .=Unknown"),
    }
}
