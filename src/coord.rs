//! Grid coordinates and the letter+number text protocol.
//!
//! Players address a cell as a column letter followed by a row number, e.g.
//! `A1` or `J10`. Two column alphabets are accepted: Latin `A..J` and the
//! Cyrillic `А..К` sequence used on printed boards (`Й` is skipped). Only the
//! Latin form is ever produced.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::config::{CELL_COUNT, GRID_SIZE};

/// Latin column letters.
pub const LATIN_COLUMNS: [char; GRID_SIZE] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];
/// Alternate column letters, mapped onto the same columns as [`LATIN_COLUMNS`].
pub const ALTERNATE_COLUMNS: [char; GRID_SIZE] = ['А', 'Б', 'В', 'Г', 'Д', 'Е', 'Ж', 'З', 'И', 'К'];

const ORTHOGONAL: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const SURROUNDING: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Errors from decoding coordinate text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CoordError {
    /// Text is not a single letter immediately followed by a number.
    InvalidFormat,
    /// Letter is outside both alphabets, or the number is outside `1..=10`.
    OutOfRange,
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidFormat => {
                write!(f, "expected a column letter followed by a row number, e.g. A1")
            }
            CoordError::OutOfRange => write!(f, "coordinate must be within A-J and 1-10"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CoordError {}

/// A cell on the 10×10 grid. Always in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    col: u8,
    row: u8,
}

impl Coord {
    /// Zero-based column and row, `None` when either is off the grid.
    pub fn new(col: usize, row: usize) -> Option<Self> {
        if col < GRID_SIZE && row < GRID_SIZE {
            Some(Self {
                col: col as u8,
                row: row as u8,
            })
        } else {
            None
        }
    }

    pub fn col(&self) -> usize {
        self.col as usize
    }

    pub fn row(&self) -> usize {
        self.row as usize
    }

    /// Row-major cell index in `0..100`.
    pub fn index(&self) -> usize {
        self.row() * GRID_SIZE + self.col()
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index < CELL_COUNT {
            Self::new(index % GRID_SIZE, index / GRID_SIZE)
        } else {
            None
        }
    }

    /// Every cell of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..CELL_COUNT).filter_map(Coord::from_index)
    }

    fn offset(self, dc: isize, dr: isize) -> Option<Coord> {
        let col = self.col as isize + dc;
        let row = self.row as isize + dr;
        if col < 0 || row < 0 {
            return None;
        }
        Coord::new(col as usize, row as usize)
    }

    /// Up to four edge-sharing neighbours.
    pub fn neighbours(self) -> impl Iterator<Item = Coord> {
        ORTHOGONAL
            .iter()
            .filter_map(move |&(dc, dr)| self.offset(dc, dr))
    }

    /// Up to eight surrounding cells, diagonals included.
    pub fn ring(self) -> impl Iterator<Item = Coord> {
        SURROUNDING
            .iter()
            .filter_map(move |&(dc, dr)| self.offset(dc, dr))
    }

    /// Move `steps` cells right (`vertical == false`) or down.
    pub(crate) fn step(self, steps: usize, vertical: bool) -> Option<Coord> {
        if vertical {
            Coord::new(self.col(), self.row() + steps)
        } else {
            Coord::new(self.col() + steps, self.row())
        }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", LATIN_COLUMNS[self.col()], self.row() + 1)
    }
}

impl FromStr for Coord {
    type Err = CoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

fn column_of(letter: char) -> Option<usize> {
    let mut upper = letter.to_uppercase();
    let letter = match (upper.next(), upper.next()) {
        (Some(c), None) => c,
        _ => return None,
    };
    LATIN_COLUMNS
        .iter()
        .position(|&c| c == letter)
        .or_else(|| ALTERNATE_COLUMNS.iter().position(|&c| c == letter))
}

/// Parse `A1`..`J10` (or the alternate alphabet), case-insensitive, with
/// surrounding whitespace ignored.
pub fn decode(text: &str) -> Result<Coord, CoordError> {
    let text = text.trim();
    let mut chars = text.chars();
    let letter = chars.next().ok_or(CoordError::InvalidFormat)?;
    let digits = chars.as_str();
    if !letter.is_alphabetic()
        || digits.is_empty()
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(CoordError::InvalidFormat);
    }

    let col = column_of(letter).ok_or(CoordError::OutOfRange)?;
    // digits too long for usize are out of range as well
    let number: usize = digits.parse().map_err(|_| CoordError::OutOfRange)?;
    if !(1..=GRID_SIZE).contains(&number) {
        return Err(CoordError::OutOfRange);
    }
    Coord::new(col, number - 1).ok_or(CoordError::OutOfRange)
}

/// Latin text for zero-based (`col`, `row`).
pub fn encode(col: usize, row: usize) -> Result<String, CoordError> {
    Coord::new(col, row)
        .map(|at| at.to_string())
        .ok_or(CoordError::OutOfRange)
}
