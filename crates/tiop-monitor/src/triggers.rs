//! Trigger evaluation.

use jiff::Timestamp;
use tracing::debug;

use tiop_core::config::EngineConfig;
use tiop_core::models::eye::Eye;
use tiop_core::models::patient::PatientState;
use tiop_core::models::risk_factors::MeanDeviationBracket;
use tiop_core::models::target::TargetDecision;

use crate::reasons::{RecalculationReason, Severity, TriggerDetail, TriggerKind};

/// Evaluate every recalculation trigger for a patient.
///
/// `last` is the decision currently in force, if any; `now` is supplied by
/// the caller so evaluation stays deterministic. Each trigger is independent
/// and several may fire at once. Reasons come back ordered highest severity
/// first; display policy belongs to the caller. Missing history is reported
/// as a condition, never raised as an error — a first visit is an expected
/// state.
pub fn check_recalculation(
    state: &PatientState,
    last: Option<&TargetDecision>,
    now: Timestamp,
    config: &EngineConfig,
) -> Vec<RecalculationReason> {
    let mut reasons = Vec::new();

    match last {
        None => reasons.push(RecalculationReason {
            kind: TriggerKind::NoTarget,
            severity: Severity::High,
            detail: TriggerDetail::NoTarget,
        }),
        Some(decision) => {
            if state.age != decision.clinical.age {
                reasons.push(RecalculationReason {
                    kind: TriggerKind::AgeTierShift,
                    severity: Severity::Medium,
                    detail: TriggerDetail::AgeTier {
                        previous: decision.clinical.age,
                        current: state.age,
                    },
                });
            }

            for eye in Eye::BOTH {
                if state.stage(eye) != decision.clinical.stage(eye) {
                    reasons.push(RecalculationReason {
                        kind: TriggerKind::StageShift,
                        severity: Severity::High,
                        detail: TriggerDetail::Stage {
                            eye,
                            previous: decision.clinical.stage(eye),
                            current: state.stage(eye),
                        },
                    });
                }
                if state.cdr(eye) != decision.clinical.cdr(eye) {
                    reasons.push(RecalculationReason {
                        kind: TriggerKind::StageShift,
                        severity: Severity::High,
                        detail: TriggerDetail::CdrBracket {
                            eye,
                            previous: decision.clinical.cdr(eye),
                            current: state.cdr(eye),
                        },
                    });
                }
            }

            let target_age = days_between(decision.set_at, now);
            if target_age > config.target_max_age_days {
                reasons.push(RecalculationReason {
                    kind: TriggerKind::AgingTarget,
                    severity: Severity::Low,
                    detail: TriggerDetail::TargetAge {
                        days_since_set: target_age,
                    },
                });
            }
        }
    }

    if let Some(staleness) = check_staleness(state, now, config) {
        reasons.push(staleness);
    }

    for eye in Eye::BOTH {
        if let Some(shift) = check_md_shift(state, eye, config) {
            reasons.push(shift);
        }
    }

    // Stable sort: within a severity, insertion order is preserved.
    reasons.sort_by(|a, b| b.severity.cmp(&a.severity));

    debug!(
        patient_id = %state.patient_id,
        reasons = reasons.len(),
        "recalculation check complete"
    );

    reasons
}

fn check_staleness(
    state: &PatientState,
    now: Timestamp,
    config: &EngineConfig,
) -> Option<RecalculationReason> {
    let latest = state.measurements.iter().map(|m| m.taken_at).max();

    match latest {
        None => Some(RecalculationReason {
            kind: TriggerKind::StaleMeasurement,
            severity: Severity::High,
            detail: TriggerDetail::Staleness { days_since: None },
        }),
        Some(taken_at) => {
            let days_since = days_between(taken_at, now);
            (days_since > config.staleness_days).then(|| RecalculationReason {
                kind: TriggerKind::StaleMeasurement,
                severity: Severity::High,
                detail: TriggerDetail::Staleness {
                    days_since: Some(days_since),
                },
            })
        }
    }
}

fn check_md_shift(
    state: &PatientState,
    eye: Eye,
    config: &EngineConfig,
) -> Option<RecalculationReason> {
    // Two most recent graded readings for this eye, in exam order.
    let mut readings: Vec<(Timestamp, f64)> = state
        .visual_fields
        .iter()
        .filter_map(|exam| exam.md(eye).map(|md| (exam.taken_at, md)))
        .collect();
    readings.sort_by_key(|(taken_at, _)| *taken_at);

    let [(_, previous), (_, current)] = readings.last_chunk::<2>()?;
    let (previous, current) = (*previous, *current);

    if (current - previous).abs() < config.md_change_threshold {
        return None;
    }

    let crossed_bracket =
        MeanDeviationBracket::from_md(previous) != MeanDeviationBracket::from_md(current);
    let severity = if crossed_bracket {
        Severity::High
    } else {
        Severity::Medium
    };

    Some(RecalculationReason {
        kind: TriggerKind::MeanDeviationShift,
        severity,
        detail: TriggerDetail::MeanDeviation {
            eye,
            previous,
            current,
            crossed_bracket,
        },
    })
}

fn days_between(from: Timestamp, to: Timestamp) -> i64 {
    (to.as_second() - from.as_second()) / 86_400
}
