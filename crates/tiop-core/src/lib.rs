//! tiop-core
//!
//! Pure domain types for the target-IOP engine: the risk-factor vocabulary,
//! score and target records, recalculation reasons, and the engine
//! configuration. No I/O — this is the shared vocabulary of the tiop system.

pub mod config;
pub mod error;
pub mod models;
