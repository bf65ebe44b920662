//! Player input parsing

pub mod intent;
