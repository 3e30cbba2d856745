//! Uniform random selection over rosters.
//!
//! Selection has no memory: every round draws from the full pool again.

pub mod picker;
