use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::eye::Eye;
use super::patient::GlaucomaStage;
use super::risk_factors::{AgeBracket, CdrBracket};
use super::score::{AppliedCap, RiskTier};

/// One eye's half of a saved target decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EyeTarget {
    /// Engine-calculated target (mmHg).
    pub calculated: f64,
    /// Clinician-approved target actually in force (mmHg).
    pub final_target: f64,
    pub overridden: bool,
    /// TRBS at save time.
    pub score: u8,
    pub tier: RiskTier,
    /// Safety cap applied during derivation, if any.
    pub cap: Option<AppliedCap>,
}

/// Clinical context frozen at save time. The recalculation monitor compares
/// the live patient state against this snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalSnapshot {
    pub age: AgeBracket,
    pub stage_od: GlaucomaStage,
    pub stage_os: GlaucomaStage,
    pub cdr_od: CdrBracket,
    pub cdr_os: CdrBracket,
}

impl ClinicalSnapshot {
    pub fn stage(&self, eye: Eye) -> GlaucomaStage {
        match eye {
            Eye::Od => self.stage_od,
            Eye::Os => self.stage_os,
        }
    }

    pub fn cdr(&self, eye: Eye) -> CdrBracket {
        match eye {
            Eye::Od => self.cdr_od,
            Eye::Os => self.cdr_os,
        }
    }
}

/// An immutable target decision. Saving again appends a new decision; prior
/// ones are never edited or deleted, so the history doubles as the audit
/// trail and feeds the calculated-versus-overridden trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TargetDecision {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub od: EyeTarget,
    pub os: EyeTarget,
    /// Mandatory whenever either eye is overridden.
    pub justification: Option<String>,
    pub clinical: ClinicalSnapshot,
    pub set_by: String,
    pub set_at: jiff::Timestamp,
}

impl TargetDecision {
    pub fn eye(&self, eye: Eye) -> &EyeTarget {
        match eye {
            Eye::Od => &self.od,
            Eye::Os => &self.os,
        }
    }
}
