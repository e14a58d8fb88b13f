use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::eye::Eye;

/// One tonometry visit. Either eye may be missing (e.g. post-evisceration).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IopMeasurement {
    pub taken_at: jiff::Timestamp,
    pub iop_od: Option<f64>,
    pub iop_os: Option<f64>,
    /// Tonometry device (Goldmann, pneumotonometry, ...).
    pub device: Option<String>,
    pub measured_by: Option<String>,
}

impl IopMeasurement {
    pub fn iop(&self, eye: Eye) -> Option<f64> {
        match eye {
            Eye::Od => self.iop_od,
            Eye::Os => self.iop_os,
        }
    }
}

/// One visual-field exam, summarized by mean deviation per eye (dB).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct VisualFieldExam {
    pub taken_at: jiff::Timestamp,
    pub md_od: Option<f64>,
    pub md_os: Option<f64>,
}

impl VisualFieldExam {
    pub fn md(&self, eye: Eye) -> Option<f64> {
        match eye {
            Eye::Od => self.md_od,
            Eye::Os => self.md_os,
        }
    }
}
