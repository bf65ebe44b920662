//! Domain layer for show-do-milhao
//!
//! Pure game rules: questions and their pool, the prize ladder, lifelines and
//! the session state machine. Nothing here performs I/O or reads the clock
//! for gameplay; randomness is injected through [`rand::Rng`].
//!
//! # Core Concepts
//!
//! ## Session
//!
//! A [`GameSession`] walks a player up a 16-level [`PrizeLadder`]. Each level
//! draws an unused [`Question`] of the level's [`Difficulty`] band. The run
//! ends by winning the last level, answering wrong, running out of time or
//! stopping with the banked prize.
//!
//! ## Lifelines
//!
//! Three single-use aids (eliminate two, crowd vote, expert hint) and a
//! multi-use reroll that swaps the current question for another one.

pub mod core;
pub mod game;
pub mod lifeline;
pub mod prize;
pub mod question;
pub mod util;

// Re-export commonly used types
pub use core::error::DomainError;
pub use game::{
    entities::{DEFAULT_TIME_LIMIT_SECS, GameRules, GameStatus, LossReason, Transition},
    match_result::{DEFAULT_GAME_ID, MatchMetadata, MatchResult},
    session::GameSession,
    snapshot::{AnswerReveal, LifelineView, QuestionView, SessionSnapshot},
};
pub use lifeline::{
    effects::LifelineResult,
    entities::{DEFAULT_REROLL_USES, LifelineCharge, LifelineKind, Lifelines},
};
pub use prize::ladder::{LadderEntry, MAX_LEVEL, NO_LEVEL_TITLE, PrizeLadder, WIN_AMOUNT};
pub use question::{
    builtin::builtin_questions,
    difficulty::Difficulty,
    entities::{OPTION_COUNT, Question, QuestionDraft, QuestionId},
    generation::{
        DEFAULT_GENERATION_AMOUNT, DifficultyPreference, GeneratedBatch, GenerationRequest,
        MAX_GENERATION_AMOUNT,
    },
    pool::QuestionPool,
};
