use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tiop_core::models::eye::Eye;
use tiop_core::models::patient::GlaucomaStage;
use tiop_core::models::risk_factors::{AgeBracket, CdrBracket};

/// Trigger severity. `Ord` follows clinical urgency, lowest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TriggerKind {
    NoTarget,
    StaleMeasurement,
    MeanDeviationShift,
    AgeTierShift,
    StageShift,
    AgingTarget,
}

/// Supporting detail for a fired trigger: previous versus current values,
/// elapsed days — whatever the clinician needs to judge the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum TriggerDetail {
    NoTarget,
    Staleness {
        /// Days since the last measurement; `None` when none exists at all.
        days_since: Option<i64>,
    },
    MeanDeviation {
        eye: Eye,
        previous: f64,
        current: f64,
        /// Whether the shift also crossed a scoring-bracket boundary.
        crossed_bracket: bool,
    },
    AgeTier {
        previous: AgeBracket,
        current: AgeBracket,
    },
    Stage {
        eye: Eye,
        previous: GlaucomaStage,
        current: GlaucomaStage,
    },
    CdrBracket {
        eye: Eye,
        previous: CdrBracket,
        current: CdrBracket,
    },
    TargetAge {
        days_since_set: i64,
    },
}

/// One reason the target should be recomputed. Transient — regenerated on
/// each evaluation, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecalculationReason {
    pub kind: TriggerKind,
    pub severity: Severity,
    pub detail: TriggerDetail,
}
