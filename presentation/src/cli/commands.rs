//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use milhao_domain::{DEFAULT_GENERATION_AMOUNT, Difficulty};
use std::path::PathBuf;

/// Difficulty band accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    Easy,
    Medium,
    Hard,
    Million,
}

impl From<DifficultyArg> for Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Easy => Difficulty::Easy,
            DifficultyArg::Medium => Difficulty::Medium,
            DifficultyArg::Hard => Difficulty::Hard,
            DifficultyArg::Million => Difficulty::Million,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play a game in the terminal (default)
    Play,

    /// Print the prize ladder
    Ladder {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate questions on a topic with the configured AI generator
    Generate {
        /// Subject of the questions
        #[arg(short, long)]
        topic: String,

        /// How many questions to ask for (1-20)
        #[arg(short, long, default_value_t = DEFAULT_GENERATION_AMOUNT)]
        amount: u8,

        /// Restrict to one difficulty band (default: a mix)
        #[arg(short, long, value_enum)]
        difficulty: Option<DifficultyArg>,

        /// Save the accepted questions to the question store
        #[arg(long)]
        save: bool,
    },

    /// Copy the built-in questions into the question store
    Migrate,
}

/// CLI arguments for show-do-milhao
#[derive(Parser, Debug)]
#[command(name = "show-do-milhao")]
#[command(author, version, about = "Show do Milhão - a 16-level quiz ladder in the terminal")]
#[command(long_about = r#"
Show do Milhão is a quiz ladder: answer 16 multiple-choice questions of
rising difficulty against a 30 second clock. Stop at any time to keep the
stop prize, use lifelines when stuck, and reach the million.

Configuration files are loaded from (in priority order):
1. MILHAO_* environment variables (MILHAO_SUPABASE__KEY=...)
2. --config <path>     Explicit config file
3. ./milhao.toml       Project-level config
4. ~/.config/show-do-milhao/config.toml   Global config

Example:
  show-do-milhao
  show-do-milhao --seed 42 play
  show-do-milhao generate --topic "Reis de Israel" --amount 5 --save
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long, global = true)]
    pub show_config: bool,

    /// Seed the random generator for a reproducible session
    #[arg(long, global = true, value_name = "SEED")]
    pub seed: Option<u64>,
}

impl Cli {
    /// The subcommand to run; `play` when none was given
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Play)
    }
}
