//! A single grid cell: immutable coordinates plus a mutable visibility state.

use crate::common::BoardError;
use crate::config::{COORD_MAX, COORD_MIN};

/// Visibility state of a cell.
///
/// Transitions are one-directional: `Hidden -> Missed`, `Hidden/Undamaged ->
/// Damaged`, and `Hidden -> Missed` for buffer cells around a sunk ship. A
/// cell never returns to `Hidden` or `Undamaged`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// Unknown to the opponent, never shot.
    Hidden,
    /// Occupied by a live ship segment; shown only to the owner.
    Undamaged,
    /// Shot and hit.
    Damaged,
    /// Shot and empty, or auto-marked around a sunk ship.
    Missed,
}

impl CellState {
    /// Render icon for the state, matching the terminal board view.
    pub fn icon(&self) -> char {
        match self {
            CellState::Hidden => 'O',
            CellState::Undamaged => '■',
            CellState::Damaged => 'X',
            CellState::Missed => 'T',
        }
    }
}

/// One cell of the grid. Coordinates are 1-based and fixed at construction;
/// only the state mutates afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    column: u8,
    row: u8,
    state: CellState,
}

/// Checks a single coordinate pair against the playable range.
pub fn in_bounds(column: u8, row: u8) -> bool {
    (COORD_MIN..=COORD_MAX).contains(&column) && (COORD_MIN..=COORD_MAX).contains(&row)
}

impl Cell {
    /// Create a hidden cell, rejecting out-of-range coordinates.
    pub fn new(column: u8, row: u8) -> Result<Self, BoardError> {
        if !in_bounds(column, row) {
            return Err(BoardError::OutOfBounds { column, row });
        }
        Ok(Cell {
            column,
            row,
            state: CellState::Hidden,
        })
    }

    /// Infallible constructor for coordinates the caller derived from valid
    /// grid indices.
    pub(crate) fn at(column: u8, row: u8) -> Self {
        debug_assert!(in_bounds(column, row));
        Cell {
            column,
            row,
            state: CellState::Hidden,
        }
    }

    pub fn column(&self) -> u8 {
        self.column
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    /// Coordinate pair as `(column, row)`.
    pub fn coords(&self) -> (u8, u8) {
        (self.column, self.row)
    }

    pub fn state(&self) -> CellState {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: CellState) {
        self.state = state;
    }
}

/// Equality is defined by coordinates alone; placement and shot logic compare
/// cells as set members regardless of their current state.
impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.column == other.column && self.row == other.row
    }
}

impl Eq for Cell {}

impl core::hash::Hash for Cell {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.column.hash(state);
        self.row.hash(state);
    }
}

impl core::fmt::Display for Cell {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "cell ({}, {}) [{}]",
            self.column,
            self.row,
            self.state.icon()
        )
    }
}
