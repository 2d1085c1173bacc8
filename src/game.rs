//! Match orchestration: two boards, two players, alternating turns.

use log::info;
use rand::rngs::SmallRng;

use crate::board::Board;
use crate::common::BoardError;
use crate::player::Player;
use crate::turn::{resolve_turn, TurnFlow};

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    FirstWon,
    SecondWon,
}

/// A match between two players. The first player moves first.
pub struct Game<P1: Player, P2: Player> {
    first: P1,
    second: P2,
    first_board: Board,
    second_board: Board,
}

/// One actor's turn: shoot until a miss passes control or the enemy fleet
/// dies. A rejected shot re-prompts the same actor without consuming the
/// turn; the opponent observes every resolved shot against their board.
fn play_turn<P: Player, Q: Player>(
    shooter: &mut P,
    opponent: &mut Q,
    own: &Board,
    enemy: &mut Board,
    rng: &mut SmallRng,
) {
    loop {
        shooter.begin_turn(own, enemy);
        let (column, row) = shooter.select_target(rng);
        match enemy.shoot(column, row) {
            Ok(result) => {
                shooter.handle_shot_result((column, row), result);
                opponent.handle_opponent_shot((column, row), result, enemy);
                if !enemy.is_fleet_alive() || resolve_turn(result) == TurnFlow::Pass {
                    return;
                }
            }
            Err(e) => shooter.handle_rejected_shot((column, row), e),
        }
    }
}

impl<P1: Player, P2: Player> Game<P1, P2> {
    /// Create a match with two empty boards.
    pub fn new(first: P1, second: P2) -> Self {
        Game {
            first,
            second,
            first_board: Board::new(),
            second_board: Board::new(),
        }
    }

    /// Let both players place their fleets.
    pub fn setup(&mut self, rng: &mut SmallRng) -> Result<(), BoardError> {
        self.second.place_fleet(rng, &mut self.second_board)?;
        self.first.place_fleet(rng, &mut self.first_board)?;
        Ok(())
    }

    pub fn first_board(&self) -> &Board {
        &self.first_board
    }

    pub fn second_board(&self) -> &Board {
        &self.second_board
    }

    /// A side loses the moment its fleet is empty.
    pub fn status(&self) -> GameStatus {
        if !self.second_board.is_fleet_alive() {
            GameStatus::FirstWon
        } else if !self.first_board.is_fleet_alive() {
            GameStatus::SecondWon
        } else {
            GameStatus::InProgress
        }
    }

    /// Play the match to completion and report the winner.
    pub fn run(&mut self, rng: &mut SmallRng) -> GameStatus {
        let Game {
            first,
            second,
            first_board,
            second_board,
        } = self;
        loop {
            play_turn(first, second, first_board, second_board, rng);
            if !second_board.is_fleet_alive() {
                break;
            }
            play_turn(second, first, second_board, first_board, rng);
            if !first_board.is_fleet_alive() {
                break;
            }
        }
        let status = self.status();
        info!("game over: {status:?}");
        status
    }
}
