use jiff::Timestamp;
use uuid::Uuid;

use tiop_core::config::EngineConfig;
use tiop_core::models::eye::Eye;
use tiop_core::models::measurement::{IopMeasurement, VisualFieldExam};
use tiop_core::models::patient::{GlaucomaStage, PatientState};
use tiop_core::models::risk_factors::{AgeBracket, CdrBracket};
use tiop_core::models::score::RiskTier;
use tiop_core::models::target::{ClinicalSnapshot, EyeTarget, TargetDecision};
use tiop_monitor::{RecalculationReason, Severity, TriggerDetail, TriggerKind, check_recalculation};

const BASE_SECOND: i64 = 1_750_000_000;

fn at_day(day: i64) -> Timestamp {
    Timestamp::from_second(BASE_SECOND + day * 86_400).unwrap()
}

fn measurement(day: i64) -> IopMeasurement {
    IopMeasurement {
        taken_at: at_day(day),
        iop_od: Some(18.0),
        iop_os: Some(17.0),
        device: Some("Goldmann".to_string()),
        measured_by: None,
    }
}

fn field_exam(day: i64, md_od: f64) -> VisualFieldExam {
    VisualFieldExam {
        taken_at: at_day(day),
        md_od: Some(md_od),
        md_os: None,
    }
}

fn patient(measurements: Vec<IopMeasurement>, visual_fields: Vec<VisualFieldExam>) -> PatientState {
    PatientState {
        patient_id: Uuid::new_v4(),
        age: AgeBracket::FiftyToSeventy,
        stage_od: GlaucomaStage::Early,
        stage_os: GlaucomaStage::Early,
        cdr_od: CdrBracket::Point6,
        cdr_os: CdrBracket::UpTo05,
        measurements,
        visual_fields,
    }
}

fn decision_at(day: i64, patient: &PatientState) -> TargetDecision {
    let eye = EyeTarget {
        calculated: 15.0,
        final_target: 15.0,
        overridden: false,
        score: 5,
        tier: RiskTier::Low,
        cap: None,
    };
    TargetDecision {
        id: Uuid::new_v4(),
        patient_id: patient.patient_id,
        od: eye.clone(),
        os: eye,
        justification: None,
        clinical: ClinicalSnapshot {
            age: patient.age,
            stage_od: patient.stage_od,
            stage_os: patient.stage_os,
            cdr_od: patient.cdr_od,
            cdr_os: patient.cdr_os,
        },
        set_by: "Dr. Ilic".to_string(),
        set_at: at_day(day),
    }
}

fn find<'a>(
    reasons: &'a [RecalculationReason],
    kind: TriggerKind,
) -> Option<&'a RecalculationReason> {
    reasons.iter().find(|r| r.kind == kind)
}

#[test]
fn missing_target_fires_high() {
    let state = patient(vec![measurement(0)], vec![]);
    let reasons = check_recalculation(&state, None, at_day(1), &EngineConfig::default());

    let reason = find(&reasons, TriggerKind::NoTarget).unwrap();
    assert_eq!(reason.severity, Severity::High);
}

#[test]
fn measurement_older_than_ninety_days_is_stale() {
    let state = patient(vec![measurement(0)], vec![]);
    let decision = decision_at(0, &state);
    let reasons = check_recalculation(
        &state,
        Some(&decision),
        at_day(91),
        &EngineConfig::default(),
    );

    let reason = find(&reasons, TriggerKind::StaleMeasurement).unwrap();
    assert_eq!(reason.severity, Severity::High);
    assert_eq!(
        reason.detail,
        TriggerDetail::Staleness {
            days_since: Some(91)
        }
    );
}

#[test]
fn recent_measurement_does_not_fire() {
    let state = patient(vec![measurement(0), measurement(2)], vec![]);
    let decision = decision_at(2, &state);
    let reasons = check_recalculation(
        &state,
        Some(&decision),
        at_day(91),
        &EngineConfig::default(),
    );

    assert!(find(&reasons, TriggerKind::StaleMeasurement).is_none());
    assert!(reasons.is_empty());
}

#[test]
fn no_measurement_at_all_is_stale_with_unknown_age() {
    let state = patient(vec![], vec![]);
    let reasons = check_recalculation(&state, None, at_day(0), &EngineConfig::default());

    let reason = find(&reasons, TriggerKind::StaleMeasurement).unwrap();
    assert_eq!(reason.severity, Severity::High);
    assert_eq!(reason.detail, TriggerDetail::Staleness { days_since: None });
}

#[test]
fn md_shift_of_two_decibels_fires() {
    let state = patient(
        vec![measurement(60)],
        vec![field_exam(0, -5.0), field_exam(60, -7.5)],
    );
    let decision = decision_at(60, &state);
    let reasons = check_recalculation(
        &state,
        Some(&decision),
        at_day(61),
        &EngineConfig::default(),
    );

    let reason = find(&reasons, TriggerKind::MeanDeviationShift).unwrap();
    // −5.0 → −7.5 also crosses the −6 dB bracket boundary.
    assert_eq!(reason.severity, Severity::High);
    assert_eq!(
        reason.detail,
        TriggerDetail::MeanDeviation {
            eye: Eye::Od,
            previous: -5.0,
            current: -7.5,
            crossed_bracket: true,
        }
    );
}

#[test]
fn md_shift_below_threshold_does_not_fire() {
    let state = patient(
        vec![measurement(60)],
        vec![field_exam(0, -5.0), field_exam(60, -6.5)],
    );
    let decision = decision_at(60, &state);
    let reasons = check_recalculation(
        &state,
        Some(&decision),
        at_day(61),
        &EngineConfig::default(),
    );

    assert!(find(&reasons, TriggerKind::MeanDeviationShift).is_none());
}

#[test]
fn md_shift_within_one_bracket_is_medium() {
    let state = patient(
        vec![measurement(60)],
        vec![field_exam(0, -13.0), field_exam(60, -15.5)],
    );
    let decision = decision_at(60, &state);
    let reasons = check_recalculation(
        &state,
        Some(&decision),
        at_day(61),
        &EngineConfig::default(),
    );

    let reason = find(&reasons, TriggerKind::MeanDeviationShift).unwrap();
    assert_eq!(reason.severity, Severity::Medium);
}

#[test]
fn md_comparison_uses_the_two_most_recent_exams() {
    // An old big swing followed by two stable exams must not fire.
    let state = patient(
        vec![measurement(90)],
        vec![
            field_exam(0, -2.0),
            field_exam(45, -8.0),
            field_exam(90, -8.5),
        ],
    );
    let decision = decision_at(90, &state);
    let reasons = check_recalculation(
        &state,
        Some(&decision),
        at_day(91),
        &EngineConfig::default(),
    );

    assert!(find(&reasons, TriggerKind::MeanDeviationShift).is_none());
}

#[test]
fn age_tier_shift_fires_medium() {
    let mut state = patient(vec![measurement(0)], vec![]);
    let decision = decision_at(0, &state);
    state.age = AgeBracket::Over70;

    let reasons = check_recalculation(
        &state,
        Some(&decision),
        at_day(1),
        &EngineConfig::default(),
    );

    let reason = find(&reasons, TriggerKind::AgeTierShift).unwrap();
    assert_eq!(reason.severity, Severity::Medium);
    assert_eq!(
        reason.detail,
        TriggerDetail::AgeTier {
            previous: AgeBracket::FiftyToSeventy,
            current: AgeBracket::Over70,
        }
    );
}

#[test]
fn stage_and_cdr_shifts_fire_high_per_eye() {
    let mut state = patient(vec![measurement(0)], vec![]);
    let decision = decision_at(0, &state);
    state.stage_od = GlaucomaStage::Advanced;
    state.cdr_os = CdrBracket::Point7;

    let reasons = check_recalculation(
        &state,
        Some(&decision),
        at_day(1),
        &EngineConfig::default(),
    );

    let shifts: Vec<_> = reasons
        .iter()
        .filter(|r| r.kind == TriggerKind::StageShift)
        .collect();
    assert_eq!(shifts.len(), 2);
    assert!(shifts.iter().all(|r| r.severity == Severity::High));
    assert!(shifts.iter().any(|r| matches!(
        r.detail,
        TriggerDetail::Stage {
            eye: Eye::Od,
            current: GlaucomaStage::Advanced,
            ..
        }
    )));
    assert!(shifts.iter().any(|r| matches!(
        r.detail,
        TriggerDetail::CdrBracket {
            eye: Eye::Os,
            current: CdrBracket::Point7,
            ..
        }
    )));
}

#[test]
fn old_target_fires_low() {
    let state = patient(vec![measurement(399)], vec![]);
    let decision = decision_at(0, &state);

    let reasons = check_recalculation(
        &state,
        Some(&decision),
        at_day(400),
        &EngineConfig::default(),
    );

    let reason = find(&reasons, TriggerKind::AgingTarget).unwrap();
    assert_eq!(reason.severity, Severity::Low);
    assert_eq!(
        reason.detail,
        TriggerDetail::TargetAge {
            days_since_set: 400
        }
    );
}

#[test]
fn reasons_come_back_highest_severity_first() {
    // Stale measurement (high), age shift (medium), aging target (low).
    let mut state = patient(vec![measurement(0)], vec![]);
    let decision = decision_at(0, &state);
    state.age = AgeBracket::Over70;

    let reasons = check_recalculation(
        &state,
        Some(&decision),
        at_day(400),
        &EngineConfig::default(),
    );

    assert_eq!(reasons.len(), 3);
    assert_eq!(reasons[0].severity, Severity::High);
    assert_eq!(reasons[1].severity, Severity::Medium);
    assert_eq!(reasons[2].severity, Severity::Low);
}
