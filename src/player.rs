//! Player types: the trait seam between the game loop and whoever aims.

use std::io::{self, Write};

use rand::rngs::SmallRng;
use rand::Rng;

use crate::board::Board;
use crate::common::{BoardError, ShotResult};
use crate::config::{COORD_MAX, COORD_MIN, MAX_SHIP_LENGTH};
use crate::ship::{Orientation, Ship};
use crate::ui::{print_board, print_player_view};

/// Interface implemented by different player types.
pub trait Player {
    /// Place the full fleet onto the provided board.
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError>;

    /// Choose the next target coordinate as `(column, row)`.
    fn select_target(&mut self, rng: &mut SmallRng) -> (u8, u8);

    /// Called before the player's turn with both board views.
    fn begin_turn(&mut self, _own: &Board, _enemy: &Board) {}

    /// Inform the player of the result of their last shot.
    fn handle_shot_result(&mut self, _coord: (u8, u8), _result: ShotResult) {}

    /// Inform the player that their shot was rejected and will be retried.
    fn handle_rejected_shot(&mut self, _coord: (u8, u8), _err: BoardError) {}

    /// Inform the player of an opponent shot against their board.
    fn handle_opponent_shot(&mut self, _coord: (u8, u8), _result: ShotResult, _own: &Board) {}
}

/// Automated opponent: random fleet, uniform-random targeting.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        *board = Board::generate_random(rng)?;
        Ok(())
    }

    fn select_target(&mut self, rng: &mut SmallRng) -> (u8, u8) {
        (
            rng.random_range(COORD_MIN..=COORD_MAX),
            rng.random_range(COORD_MIN..=COORD_MAX),
        )
    }
}

/// Human player prompting on stdin.
pub struct CliPlayer {
    /// Skip the manual placement dialogue and generate the fleet.
    auto_place: bool,
}

impl CliPlayer {
    pub fn new(auto_place: bool) -> Self {
        Self { auto_place }
    }
}

fn prompt(message: &str) -> String {
    print!("{message}");
    io::stdout().flush().unwrap();
    let mut line = String::new();
    io::stdin().read_line(&mut line).unwrap();
    line.trim().to_string()
}

/// Parse "column row" as two whitespace-separated integers.
fn parse_pair(input: &str) -> Option<(u8, u8)> {
    let mut parts = input.split_whitespace();
    let column = parts.next()?.parse().ok()?;
    let row = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((column, row))
}

impl CliPlayer {
    fn place_fleet_manually(&mut self, board: &mut Board) -> Result<(), BoardError> {
        println!("\nHere is your board to place ships on:");
        print_board(board, false);
        while !board.remaining_lengths().is_empty() {
            println!("Ship lengths left to place: {:?}", board.remaining_lengths());
            let length: u8 = match prompt("Enter size of the ship: ").parse() {
                Ok(len) if (1..=MAX_SHIP_LENGTH).contains(&len) => len,
                _ => {
                    println!("Enter a number from 1 to {MAX_SHIP_LENGTH}");
                    continue;
                }
            };
            // A single-cell ship has no meaningful direction.
            let orientation = if length == 1 {
                Orientation::Horizontal
            } else {
                match prompt("Enter direction of the ship (horizontal or vertical): ").as_str() {
                    "horizontal" | "h" => Orientation::Horizontal,
                    "vertical" | "v" => Orientation::Vertical,
                    _ => {
                        println!("Choose between horizontal and vertical");
                        continue;
                    }
                }
            };
            let (column, row) =
                match parse_pair(&prompt("Enter coordinates of the first part (column row): ")) {
                    Some(pair) => pair,
                    None => {
                        println!("Enter 2 numbers with a space between, like: 4 3");
                        continue;
                    }
                };
            let ship = match Ship::new(length, orientation, column, row) {
                Ok(ship) => ship,
                Err(e) => {
                    println!("{e}");
                    continue;
                }
            };
            match board.place(ship) {
                Ok(()) => print_board(board, false),
                Err(e) => println!("{e}"),
            }
        }
        Ok(())
    }
}

impl Player for CliPlayer {
    fn place_fleet(&mut self, rng: &mut SmallRng, board: &mut Board) -> Result<(), BoardError> {
        if self.auto_place {
            *board = Board::generate_random(rng)?;
            println!("\nThis is your automatically generated board:");
            print_board(board, false);
            return Ok(());
        }
        loop {
            let choice = prompt(
                "Enter 1 to automatically generate your board, or 0 to place ships yourself: ",
            );
            match choice.as_str() {
                "1" => {
                    *board = Board::generate_random(rng)?;
                    println!("\nThis is your automatically generated board:");
                    print_board(board, false);
                    return Ok(());
                }
                "0" => return self.place_fleet_manually(board),
                _ => println!("Enter 1 or 0"),
            }
        }
    }

    fn select_target(&mut self, _rng: &mut SmallRng) -> (u8, u8) {
        loop {
            match parse_pair(&prompt("Enter coordinates on the enemy board (column row): ")) {
                Some(pair) => return pair,
                None => println!("Enter 2 numbers with a space between, like: 4 3"),
            }
        }
    }

    fn begin_turn(&mut self, own: &Board, enemy: &Board) {
        println!("\n--- Your turn ---");
        print_player_view(own, enemy);
    }

    fn handle_shot_result(&mut self, coord: (u8, u8), result: ShotResult) {
        match result {
            ShotResult::Hit => println!("You hit at column {}, row {}!", coord.0, coord.1),
            ShotResult::Miss => println!("You missed at column {}, row {}.", coord.0, coord.1),
        }
    }

    fn handle_rejected_shot(&mut self, _coord: (u8, u8), err: BoardError) {
        println!("{err}");
    }

    fn handle_opponent_shot(&mut self, coord: (u8, u8), result: ShotResult, own: &Board) {
        match result {
            ShotResult::Hit => println!(
                "\nThe computer hit your ship at column {}, row {}!",
                coord.0, coord.1
            ),
            ShotResult::Miss => println!(
                "\nThe computer missed at column {}, row {}.",
                coord.0, coord.1
            ),
        }
        println!("Your board:");
        print_board(own, false);
    }
}
