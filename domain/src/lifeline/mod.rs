//! Lifelines: use budgets and the effects they produce.

pub mod effects;
pub mod entities;
