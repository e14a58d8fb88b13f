use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::risk_factors::{BaselineIopBracket, CdrBracket};

/// Risk tier selected by the Total Risk Burden Score.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskTier {
    /// Display name used on the target form and in reports.
    pub fn label(self) -> &'static str {
        match self {
            RiskTier::Low => "Low",
            RiskTier::Moderate => "Moderate",
            RiskTier::High => "High",
            RiskTier::VeryHigh => "Very High",
        }
    }
}

/// How the untreated baseline estimate was obtained.
///
/// `Default` baselines carry less clinical weight than measured or derived
/// ones, so the flag travels with every result instead of being discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BaselineProvenance {
    /// Taken directly from a measurement on zero medications.
    Measured,
    /// Measurement plus the medication-burden adjustment.
    Derived,
    /// No measurement on record; the configured default was used.
    Default,
}

/// An estimated untreated baseline IOP for one eye.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BaselineEstimate {
    /// Estimated untreated IOP (mmHg).
    pub value: f64,
    pub provenance: BaselineProvenance,
    pub bracket: BaselineIopBracket,
}

/// Record of a safety ceiling clamping a calculated target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AppliedCap {
    /// Structural severity bracket that selected the ceiling.
    pub bracket: CdrBracket,
    /// Ceiling the target was clamped to (mmHg).
    pub ceiling: f64,
    /// What the target would have been without the clamp (mmHg).
    pub uncapped: f64,
}

/// Per-domain point breakdown for one eye.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DomainScores {
    pub demographic: u8,
    pub baseline_iop: u8,
    pub structural: u8,
    pub functional: u8,
    pub ocular: u8,
    pub systemic: u8,
    pub patient: u8,
}
