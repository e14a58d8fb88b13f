//! Untreated-baseline estimation.
//!
//! A treated measurement understates the pressure the disease actually
//! developed under, so the estimator adds a medication-burden adjustment
//! before any bracket is scored or any reduction is applied.

use tiop_core::config::EngineConfig;
use tiop_core::error::ValidationError;
use tiop_core::models::eye::Eye;
use tiop_core::models::risk_factors::{AgmCount, BaselineIopBracket};
use tiop_core::models::score::{BaselineEstimate, BaselineProvenance};

/// mmHg added to a treated measurement to estimate the untreated baseline.
pub fn agm_adjustment(num_agm: AgmCount) -> f64 {
    match num_agm {
        AgmCount::None => 0.0,
        AgmCount::One => 5.0,
        AgmCount::Two => 8.0,
        AgmCount::ThreeOrMore => 10.0,
    }
}

/// Estimate the untreated baseline IOP for one eye.
///
/// Never skipped: a missing measurement falls back to the configured default
/// baseline, flagged with [`BaselineProvenance::Default`] so downstream
/// display can distinguish it from a measured value. A measurement outside
/// the plausibility range is a validation error, not a silent clamp.
pub fn estimate_baseline(
    eye: Eye,
    measured: Option<f64>,
    num_agm: AgmCount,
    config: &EngineConfig,
) -> Result<BaselineEstimate, ValidationError> {
    let Some(measured) = measured else {
        let value = config.default_baseline_iop;
        return Ok(BaselineEstimate {
            value,
            provenance: BaselineProvenance::Default,
            bracket: BaselineIopBracket::from_iop(value),
        });
    };

    if measured < config.min_plausible_iop || measured > config.max_plausible_iop {
        return Err(ValidationError::new(
            format!("measured_iop_{}", eye.key()),
            format!(
                "measured IOP {measured} mmHg is outside the plausible range {}..={} mmHg",
                config.min_plausible_iop, config.max_plausible_iop
            ),
        ));
    }

    let adjustment = agm_adjustment(num_agm);
    let value = measured + adjustment;
    let provenance = if adjustment == 0.0 {
        BaselineProvenance::Measured
    } else {
        BaselineProvenance::Derived
    };

    Ok(BaselineEstimate {
        value,
        provenance,
        bracket: BaselineIopBracket::from_iop(value),
    })
}
