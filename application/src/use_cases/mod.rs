//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod game_controller;
pub mod generate_questions;
pub mod load_questions;
pub mod migrate_questions;
