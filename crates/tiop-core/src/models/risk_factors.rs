//! Categorical risk-factor vocabulary.
//!
//! Every field that scores points is a closed enum whose serde name is the
//! canonical option key from the exam form. An unknown key is a
//! deserialization error — never a silent zero — while an *absent* optional
//! field falls back to the documented default bracket.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Age bracket. Younger onset means more lifetime exposure to the disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AgeBracket {
    #[serde(rename = "under_50")]
    Under50,
    #[serde(rename = "50_to_70")]
    #[default]
    FiftyToSeventy,
    #[serde(rename = "over_70")]
    Over70,
}

impl AgeBracket {
    pub fn from_years(years: u16) -> Self {
        if years < 50 {
            AgeBracket::Under50
        } else if years <= 70 {
            AgeBracket::FiftyToSeventy
        } else {
            AgeBracket::Over70
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FamilyHistory {
    #[default]
    Absent,
    Present,
}

/// Number of anti-glaucoma medications the patient is currently on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum AgmCount {
    #[serde(rename = "0")]
    #[default]
    None,
    #[serde(rename = "1")]
    One,
    #[serde(rename = "2")]
    Two,
    #[serde(rename = "3_or_more")]
    ThreeOrMore,
}

/// Bracket of the estimated untreated baseline IOP (mmHg).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BaselineIopBracket {
    #[serde(rename = "less_than_21")]
    #[default]
    LessThan21,
    #[serde(rename = "21_to_25")]
    From21To25,
    #[serde(rename = "26_to_29")]
    From26To29,
    #[serde(rename = "30_to_34")]
    From30To34,
    #[serde(rename = "35_or_more")]
    From35OrMore,
}

impl BaselineIopBracket {
    /// Classify an estimated untreated baseline. Boundaries match the
    /// baseline-IOP domain table.
    pub fn from_iop(iop: f64) -> Self {
        if iop < 21.0 {
            BaselineIopBracket::LessThan21
        } else if iop <= 25.0 {
            BaselineIopBracket::From21To25
        } else if iop <= 29.0 {
            BaselineIopBracket::From26To29
        } else if iop <= 34.0 {
            BaselineIopBracket::From30To34
        } else {
            BaselineIopBracket::From35OrMore
        }
    }
}

/// Vertical cup-to-disc ratio bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CdrBracket {
    #[serde(rename = "0.5_or_less")]
    #[default]
    UpTo05,
    #[serde(rename = "0.6")]
    Point6,
    #[serde(rename = "0.7")]
    Point7,
    #[serde(rename = "0.8")]
    Point8,
    #[serde(rename = "0.9_or_more")]
    Point9Plus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Notching {
    #[default]
    Absent,
    Unipolar,
    Bipolar,
}

/// Retinal nerve-fiber-layer or neuroretinal rim defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RnflDefect {
    #[default]
    Absent,
    Present,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DiscHemorrhage {
    #[default]
    Absent,
    Present,
}

/// Humphrey visual-field mean-deviation bracket (dB).
///
/// The two `Hfa*` variants cover exams that could not be graded; they carry
/// fixed fallback scores rather than halting the calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MeanDeviationBracket {
    #[serde(rename = "0_to_minus_2")]
    #[default]
    NoDefect,
    #[serde(rename = "minus_2_to_minus_6")]
    Early,
    #[serde(rename = "minus_6_to_minus_12")]
    Moderate,
    #[serde(rename = "minus_12_to_minus_20")]
    Advanced,
    #[serde(rename = "worse_than_minus_20")]
    Severe,
    HfaUnreliable,
    HfaNotPossible,
}

impl MeanDeviationBracket {
    /// Classify a raw mean-deviation reading in dB. MD is negative with
    /// field loss; boundaries are closed on the better side.
    pub fn from_md(md: f64) -> Self {
        if md >= -2.0 {
            MeanDeviationBracket::NoDefect
        } else if md >= -6.0 {
            MeanDeviationBracket::Early
        } else if md >= -12.0 {
            MeanDeviationBracket::Moderate
        } else if md >= -20.0 {
            MeanDeviationBracket::Advanced
        } else {
            MeanDeviationBracket::Severe
        }
    }
}

/// Central (fixation-threatening) field involvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CentralField {
    #[serde(rename = "no")]
    #[default]
    Spared,
    #[serde(rename = "yes")]
    Involved,
}

/// Central corneal thickness. Thin is < 520 µm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CctBracket {
    #[default]
    Normal,
    Thin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum MyopiaBracket {
    #[default]
    NoneOrLow,
    Moderate,
    High,
}

/// Per-eye boolean risk modifiers, one point each.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum OcularFlag {
    AngleRecession,
    Pseudoexfoliation,
    PigmentDispersion,
    SteroidResponder,
}

/// Systemic comorbidities associated with progression, one point each.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SystemicFlag {
    LowOcularPerfusion,
    MigraineVasospasm,
    Raynauds,
    SleepApnea,
    DiabetesMellitus,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PatientFactor {
    OneEyedOrAdvancedFellow,
    PoorCompliance,
}

/// Risk factors that apply once and cover both eyes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SharedRiskFactors {
    #[serde(default)]
    pub age: AgeBracket,
    #[serde(default)]
    pub family_history: FamilyHistory,
    #[serde(default)]
    pub num_agm: AgmCount,
    #[serde(default)]
    pub patient_factors: BTreeSet<PatientFactor>,
    #[serde(default)]
    pub systemic_factors: BTreeSet<SystemicFlag>,
}

/// Risk factors evaluated independently for each eye.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EyeRiskFactors {
    #[serde(default)]
    pub cdr: CdrBracket,
    #[serde(default)]
    pub notching: Notching,
    #[serde(default)]
    pub rnfl_defect: RnflDefect,
    #[serde(default)]
    pub disc_hemorrhage: DiscHemorrhage,
    #[serde(default)]
    pub mean_deviation: MeanDeviationBracket,
    #[serde(default)]
    pub central_field: CentralField,
    #[serde(default)]
    pub cct: CctBracket,
    #[serde(default)]
    pub myopia: MyopiaBracket,
    #[serde(default)]
    pub ocular_modifiers: BTreeSet<OcularFlag>,
}

/// One complete risk-factor submission, as entered on the target-IOP form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskFactorInput {
    #[serde(default)]
    pub shared: SharedRiskFactors,
    #[serde(default)]
    pub od: EyeRiskFactors,
    #[serde(default)]
    pub os: EyeRiskFactors,
}
