//! Persistence layer.
//!
//! # Responsibility
//! - Abstract the durable key-value medium behind `KeyValueStore`.
//! - Encode/decode the roster record stored under one fixed key.
//!
//! # Invariants
//! - Malformed stored data never becomes an error; it reads as empty rosters.
//! - Only transport failures of the medium surface as `StoreError`.

pub mod kv_store;
pub mod roster_store;
