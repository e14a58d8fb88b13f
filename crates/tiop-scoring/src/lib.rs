//! tiop-scoring
//!
//! The Total Risk Burden Score engine: literal domain score tables, the
//! untreated-baseline estimator, tier mapping, and target derivation with
//! structural-severity safety caps. Everything here is pure and
//! deterministic — identical input always yields an identical result, so
//! calculations can be replayed for audit or testing.

pub mod baseline;
pub mod tables;
pub mod target;
pub mod trbs;

pub use trbs::{EyeScoreResult, TrbsResult, compute_trbs};
