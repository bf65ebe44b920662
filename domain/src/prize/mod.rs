//! Prize ladder: per-level prize, stop and wrong amounts.

pub mod ladder;
