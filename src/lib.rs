//! 6×6 sea battle: board engine with placement buffers, shot resolution and
//! a terminal front end.

mod board;
mod cell;
mod common;
mod config;
mod game;
mod logging;
mod player;
mod ship;
mod turn;
pub mod ui;

pub use board::*;
pub use cell::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use player::*;
pub use ship::*;
pub use turn::*;
