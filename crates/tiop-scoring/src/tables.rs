//! Domain score tables.
//!
//! Fixed bracket-to-points mappings, one set per scoring domain. No
//! interpolation anywhere; every categorical option resolves to exactly one
//! literal entry, and each domain sum is clamped to its documented maximum.

use std::collections::BTreeSet;

use tiop_core::models::risk_factors::{
    AgeBracket, BaselineIopBracket, CctBracket, CdrBracket, CentralField, DiscHemorrhage,
    EyeRiskFactors, FamilyHistory, MeanDeviationBracket, MyopiaBracket, Notching, OcularFlag,
    PatientFactor, RnflDefect, SharedRiskFactors, SystemicFlag,
};

pub const DEMOGRAPHIC_MAX: u8 = 4;
pub const BASELINE_IOP_MAX: u8 = 4;
pub const STRUCTURAL_MAX: u8 = 9;
pub const FUNCTIONAL_MAX: u8 = 6;
pub const OCULAR_MAX: u8 = 8;
pub const SYSTEMIC_MAX: u8 = 5;
pub const PATIENT_MAX: u8 = 3;

pub fn age_points(bracket: AgeBracket) -> u8 {
    match bracket {
        AgeBracket::Under50 => 3,
        AgeBracket::FiftyToSeventy => 2,
        AgeBracket::Over70 => 1,
    }
}

pub fn family_history_points(history: FamilyHistory) -> u8 {
    match history {
        FamilyHistory::Absent => 0,
        FamilyHistory::Present => 1,
    }
}

pub fn baseline_bracket_points(bracket: BaselineIopBracket) -> u8 {
    match bracket {
        BaselineIopBracket::LessThan21 => 0,
        BaselineIopBracket::From21To25 => 1,
        BaselineIopBracket::From26To29 => 2,
        BaselineIopBracket::From30To34 => 3,
        BaselineIopBracket::From35OrMore => 4,
    }
}

pub fn cdr_points(bracket: CdrBracket) -> u8 {
    match bracket {
        CdrBracket::UpTo05 => 0,
        CdrBracket::Point6 => 1,
        CdrBracket::Point7 => 2,
        CdrBracket::Point8 => 3,
        CdrBracket::Point9Plus => 4,
    }
}

pub fn notching_points(notching: Notching) -> u8 {
    match notching {
        Notching::Absent => 0,
        Notching::Unipolar => 2,
        Notching::Bipolar => 3,
    }
}

pub fn rnfl_defect_points(defect: RnflDefect) -> u8 {
    match defect {
        RnflDefect::Absent => 0,
        RnflDefect::Present => 1,
    }
}

pub fn disc_hemorrhage_points(hemorrhage: DiscHemorrhage) -> u8 {
    match hemorrhage {
        DiscHemorrhage::Absent => 0,
        DiscHemorrhage::Present => 1,
    }
}

pub fn mean_deviation_points(bracket: MeanDeviationBracket) -> u8 {
    match bracket {
        MeanDeviationBracket::NoDefect => 0,
        MeanDeviationBracket::Early => 1,
        MeanDeviationBracket::Moderate => 2,
        MeanDeviationBracket::Advanced => 3,
        MeanDeviationBracket::Severe => 4,
        MeanDeviationBracket::HfaUnreliable => 2,
        MeanDeviationBracket::HfaNotPossible => 3,
    }
}

pub fn central_field_points(involvement: CentralField) -> u8 {
    match involvement {
        CentralField::Spared => 0,
        CentralField::Involved => 2,
    }
}

pub fn cct_points(bracket: CctBracket) -> u8 {
    match bracket {
        CctBracket::Normal => 0,
        CctBracket::Thin => 1,
    }
}

pub fn myopia_points(bracket: MyopiaBracket) -> u8 {
    match bracket {
        MyopiaBracket::NoneOrLow => 0,
        MyopiaBracket::Moderate => 1,
        MyopiaBracket::High => 2,
    }
}

pub fn patient_factor_points(factor: PatientFactor) -> u8 {
    match factor {
        PatientFactor::OneEyedOrAdvancedFellow => 2,
        PatientFactor::PoorCompliance => 1,
    }
}

/// Demographic risk: age bracket plus family history.
pub fn demographic_score(shared: &SharedRiskFactors) -> u8 {
    let score = age_points(shared.age) + family_history_points(shared.family_history);
    score.min(DEMOGRAPHIC_MAX)
}

/// Baseline-IOP risk, scored from the estimated untreated baseline bracket.
pub fn baseline_iop_score(bracket: BaselineIopBracket) -> u8 {
    baseline_bracket_points(bracket).min(BASELINE_IOP_MAX)
}

/// Structural change: CDR, notching, RNFL/rim defect, disc hemorrhage.
pub fn structural_score(eye: &EyeRiskFactors) -> u8 {
    let score = cdr_points(eye.cdr)
        + notching_points(eye.notching)
        + rnfl_defect_points(eye.rnfl_defect)
        + disc_hemorrhage_points(eye.disc_hemorrhage);
    score.min(STRUCTURAL_MAX)
}

/// Functional change: mean-deviation bracket plus central-field involvement.
pub fn functional_score(eye: &EyeRiskFactors) -> u8 {
    let score = mean_deviation_points(eye.mean_deviation) + central_field_points(eye.central_field);
    score.min(FUNCTIONAL_MAX)
}

/// Ocular modifiers: corneal thickness, myopia, and the boolean flags.
pub fn ocular_score(eye: &EyeRiskFactors) -> u8 {
    let flags = eye.ocular_modifiers.len() as u8;
    let score = cct_points(eye.cct) + myopia_points(eye.myopia) + flags;
    score.min(OCULAR_MAX)
}

/// Systemic modifiers: one point per flag present.
pub fn systemic_score(flags: &BTreeSet<SystemicFlag>) -> u8 {
    (flags.len() as u8).min(SYSTEMIC_MAX)
}

/// Disease/patient factors.
pub fn patient_factor_score(factors: &BTreeSet<PatientFactor>) -> u8 {
    let score: u8 = factors.iter().copied().map(patient_factor_points).sum();
    score.min(PATIENT_MAX)
}
