//! Common types: board errors and shot outcomes.

/// Result of a resolved shot.
///
/// Sinking a ship is reported as [`ShotResult::Hit`]; the caller observes the
/// sink through the board state. Both outcomes feed the turn policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot struck an undamaged ship segment (possibly sinking the ship).
    Hit,
    /// Shot landed on open water.
    Miss,
}

/// Errors returned by board operations.
///
/// All of these represent caller mistakes; the board never mutates state on a
/// failure path and never recovers internally. Re-prompting belongs to the
/// orchestration layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Column or row falls outside the playable range.
    OutOfBounds { column: u8, row: u8 },
    /// Ship length is not between 1 and 3.
    InvalidLength(u8),
    /// A hit was applied to a ship that already has zero health.
    HealthDepleted,
    /// Placement touches another ship or its one-cell buffer.
    TooClose,
    /// No ship of this length is left to place.
    FleetComplete { length: u8 },
    /// Shot aimed at a cell that was already resolved.
    RepeatShot { column: u8, row: u8 },
    /// Random setup exhausted its attempt budget.
    UnableToPlaceFleet,
    /// A damaged cell had no owning ship in the fleet index.
    UnknownShipHit,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::OutOfBounds { column, row } => {
                write!(f, "coordinates ({column}, {row}) are outside the board")
            }
            BoardError::InvalidLength(len) => {
                write!(f, "ship length must be from 1 to 3, got {len}")
            }
            BoardError::HealthDepleted => write!(f, "health can't go negative"),
            BoardError::TooClose => {
                write!(f, "must leave at least one empty cell between ships")
            }
            BoardError::FleetComplete { length } => {
                write!(f, "fleet already complete for length {length}")
            }
            BoardError::RepeatShot { column, row } => {
                write!(f, "cell ({column}, {row}) was already shot")
            }
            BoardError::UnableToPlaceFleet => {
                write!(f, "unable to place the fleet after all attempts")
            }
            BoardError::UnknownShipHit => {
                write!(f, "no ship found for a hit cell")
            }
        }
    }
}

impl std::error::Error for BoardError {}
