//! Ship definitions: a contiguous run of 1-3 cells with its own hit points.

use crate::cell::Cell;
use crate::common::BoardError;
use crate::config::MAX_SHIP_LENGTH;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship anchored at `(column, row)`, extending `length - 1` further cells
/// rightwards (horizontal) or downwards (vertical).
///
/// Construction only proves the ship fits on an empty board; occupancy is the
/// board's concern at placement time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    length: u8,
    orientation: Orientation,
    column: u8,
    row: u8,
    health: u8,
}

impl Ship {
    /// Create a ship, validating its length and that every derived cell lies
    /// within the grid. Each derived coordinate is constructed so the bounds
    /// failure carries the offending pair.
    pub fn new(
        length: u8,
        orientation: Orientation,
        column: u8,
        row: u8,
    ) -> Result<Self, BoardError> {
        if length == 0 || length > MAX_SHIP_LENGTH {
            return Err(BoardError::InvalidLength(length));
        }
        for i in 0..length {
            let (c, r) = match orientation {
                Orientation::Horizontal => (column + i, row),
                Orientation::Vertical => (column, row + i),
            };
            Cell::new(c, r)?;
        }
        Ok(Ship {
            length,
            orientation,
            column,
            row,
            health: length,
        })
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Anchor of the ship as `(column, row)`.
    pub fn anchor(&self) -> (u8, u8) {
        (self.column, self.row)
    }

    /// Segments not yet hit.
    pub fn health(&self) -> u8 {
        self.health
    }

    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }

    /// Ordered coordinates of every occupied cell, anchor first.
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        (0..self.length).map(move |i| match self.orientation {
            Orientation::Horizontal => (self.column + i, self.row),
            Orientation::Vertical => (self.column, self.row + i),
        })
    }

    /// Whether the ship occupies `(column, row)`.
    pub fn contains(&self, column: u8, row: u8) -> bool {
        self.cells().any(|c| c == (column, row))
    }

    /// Register one hit. Hitting a ship that is already at zero health is a
    /// logic error in the caller, not a game event: shot resolution must have
    /// marked every segment of a sunk ship as already resolved.
    pub fn apply_hit(&mut self) -> Result<(), BoardError> {
        if self.health == 0 {
            return Err(BoardError::HealthDepleted);
        }
        self.health -= 1;
        Ok(())
    }
}

impl core::fmt::Display for Ship {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "ship of {} part(s) at ({}, {}), {:?}, health {}",
            self.length, self.column, self.row, self.orientation, self.health
        )
    }
}
