//! Naval board grid and the board initialization drill.

use core::fmt;
use log::debug;

use crate::common::BoardError;
use crate::config::{BOARD_SIZE, HORIZONTAL_SHIP_ORIGIN, SHIP, SHIP_LENGTH, WATER};

const N: usize = BOARD_SIZE as usize;

/// Ship reference: every segment carries the ship marker.
pub const SHIP_TEMPLATE: [u8; SHIP_LENGTH] = [SHIP; SHIP_LENGTH];

/// Value held by a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Marker {
    Water = WATER,
    Ship = SHIP,
}

impl Marker {
    pub fn raw(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Marker {
    type Error = BoardError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            WATER => Ok(Marker::Water),
            SHIP => Ok(Marker::Ship),
            other => Err(BoardError::InvalidMarker(other)),
        }
    }
}

/// A fixed `BOARD_SIZE`×`BOARD_SIZE` grid of raw cell markers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[u8; N]; N],
}

impl Grid {
    /// Create a grid with every cell set to water.
    pub fn new() -> Self {
        Grid {
            cells: [[WATER; N]; N],
        }
    }

    /// Side length of the grid.
    pub const fn size(&self) -> usize {
        N
    }

    #[inline]
    fn check(row: usize, col: usize) -> Result<(), BoardError> {
        if row >= N || col >= N {
            return Err(BoardError::IndexOutOfBounds { row, col });
        }
        Ok(())
    }

    /// Raw marker at (`row`, `col`).
    pub fn get(&self, row: usize, col: usize) -> Result<u8, BoardError> {
        Self::check(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Overwrite the cell at (`row`, `col`) with `marker`.
    pub fn set(&mut self, row: usize, col: usize, marker: Marker) -> Result<(), BoardError> {
        Self::check(row, col)?;
        self.cells[row][col] = marker.raw();
        Ok(())
    }

    /// Number of cells holding `marker`.
    pub fn count(&self, marker: Marker) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == marker.raw())
            .count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

/// Column letters across the top, one-based row numbers down the side.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for c in 0..N {
            write!(f, " {}", (b'A' + c as u8) as char)?;
        }
        writeln!(f)?;
        for (r, row) in self.cells.iter().enumerate() {
            write!(f, "{:2} ", r + 1)?;
            for cell in row {
                write!(f, " {}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Grid {{ size: {}, water: {}, ship: {} }}",
            N,
            self.count(Marker::Water),
            self.count(Marker::Ship)
        )
    }
}

/// Everything the board drill sets up before returning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSetup {
    pub grid: Grid,
    pub ship_template: [u8; SHIP_LENGTH],
    pub horizontal_origin: (usize, usize),
}

/// Zero-fill the grid and pick the horizontal ship's origin.
///
/// The template is never stamped onto the grid and no second ship is
/// defined; callers get the untouched water grid back.
pub fn initialize_board() -> BoardSetup {
    let grid = Grid::new();
    let ship_template = SHIP_TEMPLATE;
    let (row, col) = HORIZONTAL_SHIP_ORIGIN;
    debug!(
        "board initialized: {}x{} water, horizontal ship origin ({}, {})",
        N, N, row, col
    );
    BoardSetup {
        grid,
        ship_template,
        horizontal_origin: (row, col),
    }
}
