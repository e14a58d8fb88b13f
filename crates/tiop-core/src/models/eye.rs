use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Eye laterality. OD = right eye, OS = left eye.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Eye {
    Od,
    Os,
}

impl Eye {
    pub const BOTH: [Eye; 2] = [Eye::Od, Eye::Os];

    /// Clinical shorthand used in charts and audit logs.
    pub fn label(self) -> &'static str {
        match self {
            Eye::Od => "OD",
            Eye::Os => "OS",
        }
    }

    /// Lowercase key used in field names and wire payloads.
    pub fn key(self) -> &'static str {
        match self {
            Eye::Od => "od",
            Eye::Os => "os",
        }
    }
}
