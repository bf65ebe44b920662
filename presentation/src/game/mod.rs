//! Interactive terminal game

pub mod console_game;

pub use console_game::{ConsoleGame, SnapshotPrinter};
