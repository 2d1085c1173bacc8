//! Board state: cell grid, active fleet, placement rules and shot resolution.

use std::collections::{BTreeSet, HashMap};

use log::{debug, info};
use rand::Rng;

use crate::cell::{in_bounds, Cell, CellState};
use crate::common::{BoardError, ShotResult};
use crate::config::{
    BOARD_ATTEMPTS, BOARD_SIZE, COORD_MAX, COORD_MIN, FLEET_LENGTHS, PLACEMENT_ATTEMPTS,
};
use crate::ship::{Orientation, Ship};

const N: usize = BOARD_SIZE as usize;

/// One side's board: a 6×6 grid of cells, the active fleet, the multiset of
/// ship lengths still to be placed, and a coordinate index into the fleet.
///
/// The board exclusively owns its cells and ships. Every operation either
/// completes fully or fails leaving the state untouched.
pub struct Board {
    /// Cells indexed `[row - 1][column - 1]`.
    cells: [[Cell; N]; N],
    /// Placed ships that have not sunk yet. Sunk ships are pruned.
    fleet: Vec<Ship>,
    /// Lengths from [`FLEET_LENGTHS`] not yet consumed by a placement.
    remaining: Vec<u8>,
    /// Occupied coordinate -> position in `fleet`, kept current on placement
    /// and on sink so shot resolution never scans the fleet.
    index: HashMap<(u8, u8), usize>,
}

impl Board {
    /// Create an empty board with the full fleet still to place.
    pub fn new() -> Self {
        let cells = core::array::from_fn(|r| {
            core::array::from_fn(|c| Cell::at(c as u8 + COORD_MIN, r as u8 + COORD_MIN))
        });
        Board {
            cells,
            fleet: Vec::new(),
            remaining: FLEET_LENGTHS.to_vec(),
            index: HashMap::new(),
        }
    }

    /// Read-only view of a cell, for rendering and inspection.
    pub fn cell(&self, column: u8, row: u8) -> Result<&Cell, BoardError> {
        if !in_bounds(column, row) {
            return Err(BoardError::OutOfBounds { column, row });
        }
        Ok(&self.cells[row as usize - 1][column as usize - 1])
    }

    fn cell_mut(&mut self, column: u8, row: u8) -> &mut Cell {
        &mut self.cells[row as usize - 1][column as usize - 1]
    }

    /// Ships currently afloat.
    pub fn fleet(&self) -> &[Ship] {
        &self.fleet
    }

    /// Ship lengths still to be placed.
    pub fn remaining_lengths(&self) -> &[u8] {
        &self.remaining
    }

    /// `true` while at least one ship is afloat. An empty fleet is the loss
    /// signal consumed by the game loop.
    pub fn is_fleet_alive(&self) -> bool {
        !self.fleet.is_empty()
    }

    /// The one-cell buffer around a ship: the 8-neighborhood of every
    /// occupied cell, minus the ship's own cells and anything off the board.
    /// Pure in the ship's placement; other ships play no part.
    pub fn contour(ship: &Ship) -> BTreeSet<(u8, u8)> {
        let mut buffer = BTreeSet::new();
        for (column, row) in ship.cells() {
            for dc in -1i16..=1 {
                for dr in -1i16..=1 {
                    let c = column as i16 + dc;
                    let r = row as i16 + dr;
                    if (COORD_MIN as i16..=COORD_MAX as i16).contains(&c)
                        && (COORD_MIN as i16..=COORD_MAX as i16).contains(&r)
                    {
                        buffer.insert((c as u8, r as u8));
                    }
                }
            }
        }
        for coords in ship.cells() {
            buffer.remove(&coords);
        }
        buffer
    }

    /// Check a ship against the current board without placing it: the ship
    /// may not touch any placed ship (even diagonally) and its length must
    /// still be owed by the fleet composition.
    pub fn can_place(&self, ship: &Ship) -> Result<(), BoardError> {
        let mut excluded = BTreeSet::new();
        for placed in &self.fleet {
            excluded.extend(placed.cells());
            excluded.extend(Self::contour(placed));
        }
        if ship.cells().any(|coords| excluded.contains(&coords)) {
            return Err(BoardError::TooClose);
        }
        if !self.remaining.contains(&ship.length()) {
            return Err(BoardError::FleetComplete {
                length: ship.length(),
            });
        }
        Ok(())
    }

    /// Place a ship, consuming one entry of its length from the remaining
    /// multiset and marking its cells [`CellState::Undamaged`].
    pub fn place(&mut self, ship: Ship) -> Result<(), BoardError> {
        self.can_place(&ship)?;
        if let Some(pos) = self.remaining.iter().position(|&l| l == ship.length()) {
            self.remaining.remove(pos);
        }
        let idx = self.fleet.len();
        for (column, row) in ship.cells() {
            self.cell_mut(column, row).set_state(CellState::Undamaged);
            self.index.insert((column, row), idx);
        }
        self.fleet.push(ship);
        debug!("placed {ship}");
        Ok(())
    }

    /// Resolve a shot at `(column, row)`.
    ///
    /// An undamaged segment becomes damaged and the owning ship loses one
    /// health; sinking it marks the whole contour as missed (no other ship
    /// can live there) and prunes it from the fleet. A hidden cell becomes a
    /// miss. Firing at an already resolved cell is rejected without touching
    /// any state.
    pub fn shoot(&mut self, column: u8, row: u8) -> Result<ShotResult, BoardError> {
        if !in_bounds(column, row) {
            return Err(BoardError::OutOfBounds { column, row });
        }
        match self.cells[row as usize - 1][column as usize - 1].state() {
            CellState::Undamaged => {
                let idx = match self.index.get(&(column, row)) {
                    Some(&idx) => idx,
                    None => return Err(BoardError::UnknownShipHit),
                };
                self.fleet[idx].apply_hit()?;
                self.cell_mut(column, row).set_state(CellState::Damaged);
                if self.fleet[idx].is_sunk() {
                    self.sink(idx);
                }
                Ok(ShotResult::Hit)
            }
            CellState::Hidden => {
                self.cell_mut(column, row).set_state(CellState::Missed);
                Ok(ShotResult::Miss)
            }
            CellState::Damaged | CellState::Missed => Err(BoardError::RepeatShot { column, row }),
        }
    }

    /// Remove a sunk ship: announce its buffer as misses, drop its
    /// coordinates from the index and prune it from the fleet. `swap_remove`
    /// moves the last ship into the hole, so its index entries are re-pointed.
    fn sink(&mut self, idx: usize) {
        let ship = self.fleet[idx];
        for (column, row) in Self::contour(&ship) {
            self.cell_mut(column, row).set_state(CellState::Missed);
        }
        for coords in ship.cells() {
            self.index.remove(&coords);
        }
        let last = self.fleet.len() - 1;
        self.fleet.swap_remove(idx);
        if idx < last {
            let moved = self.fleet[idx];
            for coords in moved.cells() {
                self.index.insert(coords, idx);
            }
        }
        info!("sunk {ship}, {} ship(s) afloat", self.fleet.len());
    }

    /// Propose a placeable ship of `length` at a random spot, trying up to
    /// [`PLACEMENT_ATTEMPTS`] candidates. The anchor range is clamped so the
    /// ship always fits the grid; only occupancy can reject a candidate.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: u8,
    ) -> Result<Ship, BoardError> {
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_c, max_r) = match orientation {
                Orientation::Horizontal => (COORD_MAX - length + 1, COORD_MAX),
                Orientation::Vertical => (COORD_MAX, COORD_MAX - length + 1),
            };
            let column = rng.random_range(COORD_MIN..=max_c);
            let row = rng.random_range(COORD_MIN..=max_r);
            let ship = Ship::new(length, orientation, column, row)?;
            if self.can_place(&ship).is_ok() {
                return Ok(ship);
            }
        }
        Err(BoardError::UnableToPlaceFleet)
    }

    /// Build a board with the whole fleet placed at random, longest ships
    /// first. A board that cannot fit its remaining ships is thrown away and
    /// rebuilt from scratch, up to [`BOARD_ATTEMPTS`] times.
    pub fn generate_random<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, BoardError> {
        'boards: for attempt in 0..BOARD_ATTEMPTS {
            let mut board = Board::new();
            for &length in FLEET_LENGTHS.iter() {
                let ship = match board.random_placement(rng, length) {
                    Ok(ship) => ship,
                    Err(_) => {
                        debug!("discarding board attempt {attempt}, length {length} did not fit");
                        continue 'boards;
                    }
                };
                board.place(ship)?;
            }
            return Ok(board);
        }
        Err(BoardError::UnableToPlaceFleet)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
