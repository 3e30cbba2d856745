//! Rendering of assignment results into named display slots.

pub mod slots;
