//! Terminal rendering of a board.

use crate::board::Board;
use crate::cell::CellState;
use crate::config::{COORD_MAX, COORD_MIN};

/// Print a board as a bordered table with a column header and row labels.
/// With `hidden` set, undamaged ship segments render as open water so the
/// enemy view gives nothing away.
pub fn print_board(board: &Board, hidden: bool) {
    print!("\n   | ");
    for c in COORD_MIN..=COORD_MAX {
        print!("{c} | ");
    }
    println!();
    for r in COORD_MIN..=COORD_MAX {
        print!(" {r} | ");
        for c in COORD_MIN..=COORD_MAX {
            let state = match board.cell(c, r) {
                Ok(cell) => cell.state(),
                Err(_) => CellState::Hidden,
            };
            let icon = if hidden && state == CellState::Undamaged {
                CellState::Hidden.icon()
            } else {
                state.icon()
            };
            print!("{icon} | ");
        }
        println!();
    }
    println!();
}

/// Display the enemy board (masked) above the player's own board.
pub fn print_player_view(own: &Board, enemy: &Board) {
    println!("Enemy board:");
    print_board(enemy, true);
    println!("Your board:");
    print_board(own, false);
}
