//! Measured-IOP-versus-target evaluation for dashboards.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tiop_core::config::EngineConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum IopStatus {
    WithinTarget,
    AboveTarget,
}

/// How a measured IOP sits relative to the target in force.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TargetComparison {
    pub status: IopStatus,
    /// Measured minus target (mmHg); positive means above target.
    pub difference: f64,
    pub measured: f64,
    pub target: f64,
}

/// Compare a measured IOP against a target. The tolerance absorbs tonometry
/// variability (±3 mmHg is typical between devices and sessions); anything
/// beyond it counts as above target.
pub fn evaluate_iop_status(measured: f64, target: f64, config: &EngineConfig) -> TargetComparison {
    let difference = measured - target;
    let status = if difference <= config.iop_tolerance {
        IopStatus::WithinTarget
    } else {
        IopStatus::AboveTarget
    };

    TargetComparison {
        status,
        difference,
        measured,
        target,
    }
}
