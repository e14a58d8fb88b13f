//! Total Risk Burden Score calculation and tier mapping.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use tiop_core::config::EngineConfig;
use tiop_core::error::ValidationError;
use tiop_core::models::eye::Eye;
use tiop_core::models::risk_factors::{EyeRiskFactors, RiskFactorInput};
use tiop_core::models::score::{AppliedCap, BaselineEstimate, DomainScores, RiskTier};

use crate::baseline::estimate_baseline;
use crate::tables;
use crate::target::derive_target;

/// TRBS values are clamped to this ceiling.
pub const TRBS_MAX: u8 = 29;

/// Everything the engine derived for one eye. Immutable once computed; a new
/// input always produces a new result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EyeScoreResult {
    pub eye: Eye,
    /// Total Risk Burden Score (shared + eye-specific domains).
    pub score: u8,
    /// The shared-domain portion, identical for both eyes.
    pub shared_score: u8,
    pub domain_scores: DomainScores,
    pub tier: RiskTier,
    /// Reduction-percentage range for the tier.
    pub reduction_min: u8,
    pub reduction_max: u8,
    /// The percentage actually applied (upper bound when aggressive).
    pub reduction_applied: u8,
    pub baseline: BaselineEstimate,
    /// Calculated target IOP (mmHg), after any safety cap.
    pub calculated_target: f64,
    pub cap: Option<AppliedCap>,
}

/// Both eyes' results for one calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TrbsResult {
    pub od: EyeScoreResult,
    pub os: EyeScoreResult,
}

impl TrbsResult {
    pub fn eye(&self, eye: Eye) -> &EyeScoreResult {
        match eye {
            Eye::Od => &self.od,
            Eye::Os => &self.os,
        }
    }
}

/// Tier for a TRBS value. Boundary scores belong to the lower tier.
pub fn tier_for_score(score: u8) -> RiskTier {
    match score {
        0..=6 => RiskTier::Low,
        7..=12 => RiskTier::Moderate,
        13..=18 => RiskTier::High,
        _ => RiskTier::VeryHigh,
    }
}

/// Reduction-percentage range (min, max) for a tier.
pub fn reduction_range(tier: RiskTier) -> (u8, u8) {
    match tier {
        RiskTier::Low => (20, 25),
        RiskTier::Moderate => (30, 35),
        RiskTier::High => (40, 45),
        RiskTier::VeryHigh => (50, 50),
    }
}

/// Compute TRBS, tier, reduction, and calculated target for both eyes.
///
/// `measured_iop_*` is the current (possibly treated) measurement per eye;
/// `None` falls back to the configured default baseline with `default`
/// provenance. The shared baseline-IOP domain is scored once, from the worse
/// of the two estimated baselines, so the shared score is identical for both
/// eyes. Pure: no side effects, deterministic for identical input.
pub fn compute_trbs(
    input: &RiskFactorInput,
    measured_iop_od: Option<f64>,
    measured_iop_os: Option<f64>,
    aggressive: bool,
    config: &EngineConfig,
) -> Result<TrbsResult, ValidationError> {
    let baseline_od = estimate_baseline(Eye::Od, measured_iop_od, input.shared.num_agm, config)?;
    let baseline_os = estimate_baseline(Eye::Os, measured_iop_os, input.shared.num_agm, config)?;

    // Worse eye governs the shared domain.
    let shared_bracket = if baseline_od.value >= baseline_os.value {
        baseline_od.bracket
    } else {
        baseline_os.bracket
    };

    let demographic = tables::demographic_score(&input.shared);
    let baseline_iop = tables::baseline_iop_score(shared_bracket);
    let systemic = tables::systemic_score(&input.shared.systemic_factors);
    let patient = tables::patient_factor_score(&input.shared.patient_factors);
    let shared_score = demographic + baseline_iop + systemic + patient;

    let od = score_eye(
        Eye::Od,
        &input.od,
        shared_score,
        DomainScores {
            demographic,
            baseline_iop,
            structural: 0,
            functional: 0,
            ocular: 0,
            systemic,
            patient,
        },
        baseline_od,
        aggressive,
        config,
    );
    let os = score_eye(
        Eye::Os,
        &input.os,
        shared_score,
        DomainScores {
            demographic,
            baseline_iop,
            structural: 0,
            functional: 0,
            ocular: 0,
            systemic,
            patient,
        },
        baseline_os,
        aggressive,
        config,
    );

    Ok(TrbsResult { od, os })
}

fn score_eye(
    eye: Eye,
    factors: &EyeRiskFactors,
    shared_score: u8,
    mut domain_scores: DomainScores,
    baseline: BaselineEstimate,
    aggressive: bool,
    config: &EngineConfig,
) -> EyeScoreResult {
    domain_scores.structural = tables::structural_score(factors);
    domain_scores.functional = tables::functional_score(factors);
    domain_scores.ocular = tables::ocular_score(factors);

    let eye_specific = domain_scores.structural + domain_scores.functional + domain_scores.ocular;
    let score = (shared_score + eye_specific).min(TRBS_MAX);

    let tier = tier_for_score(score);
    let (reduction_min, reduction_max) = reduction_range(tier);
    let reduction_applied = if aggressive { reduction_max } else { reduction_min };

    let (calculated_target, cap) = derive_target(&baseline, reduction_applied, factors.cdr, config);

    EyeScoreResult {
        eye,
        score,
        shared_score,
        domain_scores,
        tier,
        reduction_min,
        reduction_max,
        reduction_applied,
        baseline,
        calculated_target,
        cap,
    }
}
