//! tiop-monitor
//!
//! Staleness and clinically-significant-change detection. The monitor is a
//! pure query over the current patient snapshot versus the snapshot frozen
//! in the last target decision: it holds no state, raises nothing for
//! missing history, and returns an ordered list of reasons. Whether and how
//! reasons are surfaced (auto-popup, badge, nothing) is the calling layer's
//! policy, not the monitor's.

pub mod reasons;
pub mod status;
pub mod triggers;

pub use reasons::{RecalculationReason, Severity, TriggerDetail, TriggerKind};
pub use triggers::check_recalculation;
