//! Fixed game parameters: grid size, coordinate range and fleet composition.

/// Side length of the square grid.
pub const BOARD_SIZE: u8 = 6;

/// Smallest valid column/row value. Coordinates are 1-based.
pub const COORD_MIN: u8 = 1;

/// Largest valid column/row value.
pub const COORD_MAX: u8 = BOARD_SIZE;

/// Number of ships in a complete fleet.
pub const NUM_SHIPS: usize = 7;

/// Fleet composition as ship lengths, consumed longest first during setup.
pub const FLEET_LENGTHS: [u8; NUM_SHIPS] = [3, 2, 2, 1, 1, 1, 1];

/// Longest ship length the rules allow.
pub const MAX_SHIP_LENGTH: u8 = 3;

/// Candidate placements tried per ship before giving up on the board.
pub const PLACEMENT_ATTEMPTS: usize = 100;

/// Fresh boards tried before random fleet generation fails outright.
pub const BOARD_ATTEMPTS: usize = 30;
