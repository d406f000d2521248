//! Crate-level tests for the arena.
//!
//! - `determinism.rs`: same seed and same agents replay bit-identically
//! - `integration.rs`: whole rounds driven through the [`Arena`](crate::arena::Arena) facade
//! - `helpers.rs`: scripted agents and board builders shared by unit tests

mod helpers;

pub use helpers::*;
