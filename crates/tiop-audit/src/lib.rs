//! tiop-audit
//!
//! Clinician override validation and the append-only target-decision
//! history. A save never mutates prior decisions — superseding is modeled by
//! appending — so the history doubles as the audit trail and lets trend
//! charts plot the calculated and overridden lines side by side.

pub mod error;
pub mod events;
pub mod store;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use tiop_core::config::EngineConfig;
use tiop_core::error::ValidationError;
use tiop_core::models::eye::Eye;
use tiop_core::models::score::{AppliedCap, RiskTier};
use tiop_core::models::target::{ClinicalSnapshot, EyeTarget, TargetDecision};

use crate::error::AuditError;
use crate::events::AuditEvent;
use crate::store::DecisionStore;

/// One eye's values as submitted from the target form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EyeTargetInput {
    /// Engine-calculated target (mmHg).
    pub calculated: f64,
    /// Clinician-approved target (mmHg). Usually equal to `calculated`.
    pub final_target: f64,
    /// TRBS snapshot at save time.
    pub score: u8,
    pub tier: RiskTier,
    /// Cap applied during derivation, if any.
    pub cap: Option<AppliedCap>,
}

/// A complete save request for both eyes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SaveTargetRequest {
    pub patient_id: Uuid,
    pub od: EyeTargetInput,
    pub os: EyeTargetInput,
    /// Required whenever either eye's final target overrides the calculation.
    pub justification: Option<String>,
    pub clinical: ClinicalSnapshot,
    pub author: String,
}

/// Whether `final_target` counts as an override of `calculated`.
pub fn is_overridden(calculated: f64, final_target: f64, config: &EngineConfig) -> bool {
    (final_target - calculated).abs() > config.override_tolerance
}

/// Validate and persist a target decision.
///
/// Fails with a [`ValidationError`] when either eye is overridden without a
/// justification, or when a submitted target is out of range — nothing is
/// written in that case. On success the decision is appended to the
/// patient's history and an audit event is emitted.
pub fn save_target(
    store: &dyn DecisionStore,
    request: SaveTargetRequest,
    config: &EngineConfig,
) -> Result<TargetDecision, AuditError> {
    let author = request.author.trim();
    if author.is_empty() {
        return Err(ValidationError::new("author", "author identity is required").into());
    }

    for eye in Eye::BOTH {
        let input = match eye {
            Eye::Od => &request.od,
            Eye::Os => &request.os,
        };
        if input.final_target <= 0.0 || input.final_target > config.max_plausible_iop {
            return Err(ValidationError::new(
                format!("final_target_{}", eye.key()),
                format!(
                    "final target {} mmHg is outside the plausible range",
                    input.final_target
                ),
            )
            .into());
        }
    }

    let od_overridden = is_overridden(request.od.calculated, request.od.final_target, config);
    let os_overridden = is_overridden(request.os.calculated, request.os.final_target, config);

    let justification = request
        .justification
        .as_deref()
        .map(str::trim)
        .filter(|j| !j.is_empty())
        .map(str::to_string);

    if (od_overridden || os_overridden) && justification.is_none() {
        return Err(ValidationError::new(
            "justification",
            "overriding the calculated target requires a justification",
        )
        .into());
    }

    let decision = TargetDecision {
        id: Uuid::new_v4(),
        patient_id: request.patient_id,
        od: EyeTarget {
            calculated: request.od.calculated,
            final_target: request.od.final_target,
            overridden: od_overridden,
            score: request.od.score,
            tier: request.od.tier,
            cap: request.od.cap,
        },
        os: EyeTarget {
            calculated: request.os.calculated,
            final_target: request.os.final_target,
            overridden: os_overridden,
            score: request.os.score,
            tier: request.os.tier,
            cap: request.os.cap,
        },
        justification,
        clinical: request.clinical,
        set_by: author.to_string(),
        set_at: jiff::Timestamp::now(),
    };

    store.append(decision.clone())?;

    AuditEvent::new(
        "target.save",
        "target_decision",
        decision.id.to_string(),
        &decision.set_by,
    )
    .with_details(serde_json::json!({
        "patient_id": decision.patient_id,
        "final_od": decision.od.final_target,
        "final_os": decision.os.final_target,
        "overridden_od": decision.od.overridden,
        "overridden_os": decision.os.overridden,
    }))
    .emit();

    Ok(decision)
}
