//! Game session subdomain
//!
//! The session aggregate, its transition results and the read-only views
//! handed to observers.

pub mod entities;
pub mod match_result;
pub mod session;
pub mod snapshot;
