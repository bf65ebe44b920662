//! Presentation layer for show-do-milhao
//!
//! This crate contains CLI definitions, console rendering,
//! progress spinners, and the interactive terminal game.

pub mod cli;
pub mod game;
pub mod input;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, DifficultyArg};
pub use game::{ConsoleGame, SnapshotPrinter};
pub use input::intent::parse_intent;
pub use output::console::{ConsoleRenderer, format_money};
pub use progress::spinner::Spinner;
