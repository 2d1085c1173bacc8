use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::ui::print_board;
use seabattle::{
    init_logging, AiPlayer, Board, CliPlayer, Game, GameStatus, Orientation, Ship,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Skip the placement dialogue and auto-generate your fleet")]
        auto: bool,
    },
    /// Watch two computer players finish a game.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn greet() -> Result<()> {
    println!("\nWelcome to the sea battle game.\n");
    println!("You're playing against the computer on a 6x6 board.");
    println!("The fleet: 1 ship of 3 parts, 2 ships of 2 parts and 4 ships of 1 part.");
    println!("Ships may not touch, not even diagonally.");
    println!("Coordinates are entered as column and row with a space between, like: 4 3.");
    println!("Here is a ship of length 3, horizontal, starting at 3 2:");
    let mut example = Board::new();
    example.place(Ship::new(3, Orientation::Horizontal, 3, 2)?)?;
    print_board(&example, false);
    println!("A hit grants you another shot; whoever sinks the whole enemy fleet wins.");
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed, auto } => {
            let mut rng = make_rng(seed);
            greet()?;
            let mut game = Game::new(CliPlayer::new(auto), AiPlayer::new());
            game.setup(&mut rng)?;
            match game.run(&mut rng) {
                GameStatus::FirstWon => println!("\nYou won!"),
                GameStatus::SecondWon => println!("\nThe computer won!"),
                GameStatus::InProgress => {}
            }
        }
        Commands::Auto { seed } => {
            let mut rng = make_rng(seed);
            let mut game = Game::new(AiPlayer::new(), AiPlayer::new());
            game.setup(&mut rng)?;
            let status = game.run(&mut rng);
            println!("First player's board:");
            print_board(game.first_board(), false);
            println!("Second player's board:");
            print_board(game.second_board(), false);
            match status {
                GameStatus::FirstWon => println!("First player won."),
                GameStatus::SecondWon => println!("Second player won."),
                GameStatus::InProgress => {}
            }
        }
    }
    Ok(())
}
