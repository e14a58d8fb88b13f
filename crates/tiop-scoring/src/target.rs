//! Target derivation and safety-cap enforcement.

use tiop_core::config::EngineConfig;
use tiop_core::models::risk_factors::CdrBracket;
use tiop_core::models::score::{AppliedCap, BaselineEstimate};

/// Estimated baselines above this get a structural-severity ceiling (mmHg).
pub const CAP_BASELINE_THRESHOLD: f64 = 30.0;

/// Safety ceiling for the calculated target, keyed by CDR bracket. The more
/// cupped the disc, the lower the pressure the eye is allowed to sit at.
pub fn cap_ceiling(bracket: CdrBracket) -> f64 {
    match bracket {
        CdrBracket::UpTo05 => 18.0,
        CdrBracket::Point6 => 18.0,
        CdrBracket::Point7 => 16.0,
        CdrBracket::Point8 => 14.0,
        CdrBracket::Point9Plus => 12.0,
    }
}

pub fn round_to_precision(value: f64, precision: f64) -> f64 {
    (value / precision).round() * precision
}

/// Derive one eye's calculated target from its baseline and reduction
/// percentage, then clamp against the safety ceiling when the baseline is
/// high enough to warrant one. A clamp is always reported, never silent.
pub fn derive_target(
    baseline: &BaselineEstimate,
    reduction_pct: u8,
    cdr: CdrBracket,
    config: &EngineConfig,
) -> (f64, Option<AppliedCap>) {
    let raw = baseline.value * (1.0 - f64::from(reduction_pct) / 100.0);
    let target = round_to_precision(raw, config.target_precision);

    if baseline.value > CAP_BASELINE_THRESHOLD {
        let ceiling = cap_ceiling(cdr);
        if target > ceiling {
            return (
                ceiling,
                Some(AppliedCap {
                    bracket: cdr,
                    ceiling,
                    uncapped: target,
                }),
            );
        }
    }

    (target, None)
}
