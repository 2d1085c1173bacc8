//! Turn-resolution policy: a hit grants the shooter another shot.

use crate::common::ShotResult;

/// Who shoots next after a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnFlow {
    /// Same actor shoots again.
    Continue,
    /// Control passes to the opponent.
    Pass,
}

/// Map a shot outcome to the next turn. Rejected shots never reach this
/// policy; the game loop re-prompts the same actor without consuming a turn.
pub fn resolve_turn(result: ShotResult) -> TurnFlow {
    match result {
        ShotResult::Hit => TurnFlow::Continue,
        ShotResult::Miss => TurnFlow::Pass,
    }
}
