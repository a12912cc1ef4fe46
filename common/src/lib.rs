pub mod board;
pub mod game;
pub mod history;
pub mod moves;
pub mod rules;

pub use board::*;
pub use game::*;
pub use history::*;
pub use moves::*;
pub use rules::{check_winner, outcome, winning_line, Outcome, WinningLine, LINES};
