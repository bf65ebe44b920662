//! Application-level configuration.
//!
//! - [`GameParams`]: session rules, player identity and RNG seeding

pub mod game_params;

pub use game_params::GameParams;
