use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::eye::Eye;
use super::measurement::{IopMeasurement, VisualFieldExam};
use super::risk_factors::{AgeBracket, CdrBracket};

/// Glaucoma stage from the demographic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GlaucomaStage {
    Early,
    NormalTension,
    Advanced,
    EndStage,
}

/// Everything the recalculation monitor reads about a patient, assembled by
/// the caller from the demographic record and the measurement histories.
/// Histories need not be sorted; the monitor picks readings by timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientState {
    pub patient_id: Uuid,
    pub age: AgeBracket,
    pub stage_od: GlaucomaStage,
    pub stage_os: GlaucomaStage,
    pub cdr_od: CdrBracket,
    pub cdr_os: CdrBracket,
    pub measurements: Vec<IopMeasurement>,
    pub visual_fields: Vec<VisualFieldExam>,
}

impl PatientState {
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
