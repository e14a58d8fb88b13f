use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use tiop_core::models::target::TargetDecision;

use crate::error::AuditError;

/// Append-only history of target decisions per patient.
///
/// Implementations must serialize concurrent saves for the same patient so
/// every save lands as its own dated record — last-writer-wins loses data
/// and is not acceptable at this boundary.
pub trait DecisionStore: Send + Sync {
    fn append(&self, decision: TargetDecision) -> Result<(), AuditError>;

    /// All decisions for a patient, newest first.
    fn history(&self, patient_id: Uuid) -> Result<Vec<TargetDecision>, AuditError>;

    /// The decision currently in force, if any.
    fn current(&self, patient_id: Uuid) -> Result<Option<TargetDecision>, AuditError> {
        Ok(self.history(patient_id)?.into_iter().next())
    }
}

/// In-process store backing tests and single-node deployments. A real
/// deployment plugs the EMR's database in behind the same trait.
#[derive(Debug, Default)]
pub struct InMemoryDecisionStore {
    decisions: Mutex<HashMap<Uuid, Vec<TargetDecision>>>,
}

impl InMemoryDecisionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DecisionStore for InMemoryDecisionStore {
    fn append(&self, decision: TargetDecision) -> Result<(), AuditError> {
        let mut decisions = self
            .decisions
            .lock()
            .map_err(|e| AuditError::Store(format!("decision store poisoned: {e}")))?;
        decisions
            .entry(decision.patient_id)
            .or_default()
            .push(decision);
        Ok(())
    }

    fn history(&self, patient_id: Uuid) -> Result<Vec<TargetDecision>, AuditError> {
        let decisions = self
            .decisions
            .lock()
            .map_err(|e| AuditError::Store(format!("decision store poisoned: {e}")))?;
        let mut history = decisions.get(&patient_id).cloned().unwrap_or_default();
        history.reverse();
        Ok(history)
    }
}
