//! Flutter-facing bindings for the job chart core.

pub mod api;
