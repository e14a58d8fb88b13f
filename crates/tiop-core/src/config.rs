use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Current config version. Bump this when adding fields or changing shape.
const CURRENT_VERSION: u32 = 1;

/// Tunable clinical constants for scoring, derivation, and recalculation.
///
/// Every threshold the engine applies lives here so a site can load its own
/// profile; the defaults are the protocol values. Fields added later must
/// carry a `#[serde(default)]` so older stored configs keep deserializing.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EngineConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Baseline assumed when no IOP measurement is on record (mmHg).
    #[serde(default = "default_baseline_iop")]
    pub default_baseline_iop: f64,
    /// Calculated targets are rounded to this precision (mmHg).
    #[serde(default = "default_target_precision")]
    pub target_precision: f64,
    /// |final − calculated| beyond this counts as an override (mmHg).
    #[serde(default = "default_override_tolerance")]
    pub override_tolerance: f64,
    /// Measured IOP up to target + tolerance still counts as at-target (mmHg).
    #[serde(default = "default_iop_tolerance")]
    pub iop_tolerance: f64,
    /// Measurements older than this trigger recalculation (days).
    #[serde(default = "default_staleness_days")]
    pub staleness_days: i64,
    /// Mean-deviation shift that triggers recalculation (dB).
    #[serde(default = "default_md_change_threshold")]
    pub md_change_threshold: f64,
    /// Decisions older than this trigger a revalidation reminder (days).
    #[serde(default = "default_target_max_age_days")]
    pub target_max_age_days: i64,
    /// Plausibility bounds for measured IOP values (mmHg).
    #[serde(default = "default_min_plausible_iop")]
    pub min_plausible_iop: f64,
    #[serde(default = "default_max_plausible_iop")]
    pub max_plausible_iop: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            default_baseline_iop: default_baseline_iop(),
            target_precision: default_target_precision(),
            override_tolerance: default_override_tolerance(),
            iop_tolerance: default_iop_tolerance(),
            staleness_days: default_staleness_days(),
            md_change_threshold: default_md_change_threshold(),
            target_max_age_days: default_target_max_age_days(),
            min_plausible_iop: default_min_plausible_iop(),
            max_plausible_iop: default_max_plausible_iop(),
        }
    }
}

fn default_baseline_iop() -> f64 {
    21.0
}

fn default_target_precision() -> f64 {
    0.5
}

fn default_override_tolerance() -> f64 {
    0.1
}

fn default_iop_tolerance() -> f64 {
    3.0
}

fn default_staleness_days() -> i64 {
    90
}

fn default_md_change_threshold() -> f64 {
    2.0
}

fn default_target_max_age_days() -> i64 {
    365
}

fn default_min_plausible_iop() -> f64 {
    1.0
}

fn default_max_plausible_iop() -> f64 {
    80.0
}
