//! Domain model for rosters and job assignments.
//!
//! # Invariants
//! - A `Roster` only ever holds names in input order; duplicates are kept.
//! - An `Assignment` is derived data and is never persisted.

pub mod assignment;
pub mod roster;
