use tiop_core::config::EngineConfig;
use tiop_core::error::ValidationError;
use tiop_core::models::risk_factors::{
    AgeBracket, AgmCount, BaselineIopBracket, CdrBracket, CentralField, MeanDeviationBracket,
    RiskFactorInput,
};

#[test]
fn empty_payload_resolves_to_documented_defaults() {
    let input: RiskFactorInput = serde_json::from_str("{}").unwrap();

    assert_eq!(input.shared.age, AgeBracket::FiftyToSeventy);
    assert_eq!(input.shared.num_agm, AgmCount::None);
    assert!(input.shared.systemic_factors.is_empty());
    assert_eq!(input.od.cdr, CdrBracket::UpTo05);
    assert_eq!(input.od.mean_deviation, MeanDeviationBracket::NoDefect);
    assert_eq!(input.os.central_field, CentralField::Spared);
}

#[test]
fn brackets_use_canonical_form_option_keys() {
    let cases = [
        (
            serde_json::to_value(AgeBracket::FiftyToSeventy).unwrap(),
            "50_to_70",
        ),
        (
            serde_json::to_value(CdrBracket::UpTo05).unwrap(),
            "0.5_or_less",
        ),
        (
            serde_json::to_value(CdrBracket::Point9Plus).unwrap(),
            "0.9_or_more",
        ),
        (
            serde_json::to_value(AgmCount::ThreeOrMore).unwrap(),
            "3_or_more",
        ),
        (
            serde_json::to_value(MeanDeviationBracket::HfaNotPossible).unwrap(),
            "hfa_not_possible",
        ),
        (serde_json::to_value(CentralField::Involved).unwrap(), "yes"),
    ];

    for (value, expected) in cases {
        assert_eq!(value, serde_json::Value::String(expected.to_string()));
    }
}

#[test]
fn unknown_option_key_is_a_deserialization_error() {
    assert!(serde_json::from_value::<CdrBracket>(serde_json::json!("0.95")).is_err());
    assert!(
        serde_json::from_str::<RiskFactorInput>(r#"{"shared": {"age": "ancient"}}"#).is_err()
    );
}

#[test]
fn age_bracket_boundaries() {
    assert_eq!(AgeBracket::from_years(49), AgeBracket::Under50);
    assert_eq!(AgeBracket::from_years(50), AgeBracket::FiftyToSeventy);
    assert_eq!(AgeBracket::from_years(70), AgeBracket::FiftyToSeventy);
    assert_eq!(AgeBracket::from_years(71), AgeBracket::Over70);
}

#[test]
fn baseline_bracket_boundaries() {
    assert_eq!(BaselineIopBracket::from_iop(20.9), BaselineIopBracket::LessThan21);
    assert_eq!(BaselineIopBracket::from_iop(21.0), BaselineIopBracket::From21To25);
    assert_eq!(BaselineIopBracket::from_iop(25.0), BaselineIopBracket::From21To25);
    assert_eq!(BaselineIopBracket::from_iop(26.0), BaselineIopBracket::From26To29);
    assert_eq!(BaselineIopBracket::from_iop(34.0), BaselineIopBracket::From30To34);
    assert_eq!(BaselineIopBracket::from_iop(35.0), BaselineIopBracket::From35OrMore);
}

#[test]
fn mean_deviation_bracket_boundaries() {
    assert_eq!(MeanDeviationBracket::from_md(-1.5), MeanDeviationBracket::NoDefect);
    assert_eq!(MeanDeviationBracket::from_md(-2.0), MeanDeviationBracket::NoDefect);
    assert_eq!(MeanDeviationBracket::from_md(-5.0), MeanDeviationBracket::Early);
    assert_eq!(MeanDeviationBracket::from_md(-6.0), MeanDeviationBracket::Early);
    assert_eq!(MeanDeviationBracket::from_md(-7.5), MeanDeviationBracket::Moderate);
    assert_eq!(MeanDeviationBracket::from_md(-12.5), MeanDeviationBracket::Advanced);
    assert_eq!(MeanDeviationBracket::from_md(-21.0), MeanDeviationBracket::Severe);
}

#[test]
fn validation_error_names_the_field() {
    let err = ValidationError::new("measured_iop_od", "out of range");
    assert_eq!(err.to_string(), "measured_iop_od: out of range");
}

#[test]
fn config_defaults_apply_to_empty_payload() {
    let config: EngineConfig = serde_json::from_str("{}").unwrap();

    assert_eq!(config.staleness_days, 90);
    assert_eq!(config.md_change_threshold, 2.0);
    assert_eq!(config.default_baseline_iop, 21.0);
    assert_eq!(config.target_precision, 0.5);
    assert_eq!(config.override_tolerance, 0.1);
}
