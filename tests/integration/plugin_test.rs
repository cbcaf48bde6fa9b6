use check_prometheus::core::plugin::worst;
use check_prometheus::{format_output, CheckError, Evaluator, PerformanceDataCollection, State, Threshold};

#[test]
fn test_range_forms() {
    let cases = [
        ("10", 10.0, false),
        ("10", 10.1, true),
        ("10", -0.1, true),
        ("10:", 9.9, true),
        ("10:", 1e9, false),
        ("~:10", -1e9, false),
        ("~:10", 10.5, true),
        ("10:20", 15.0, false),
        ("10:20", 20.5, true),
        ("@10:20", 15.0, true),
        ("@10:20", 25.0, false),
        ("-5:-1", -3.0, false),
    ];

    for (spec, value, expected) in cases {
        let threshold = Threshold::parse(spec).unwrap();
        assert_eq!(threshold.matches(value), expected, "{} against {}", spec, value);
    }
}

#[test]
fn test_empty_threshold_never_alerts() {
    let threshold = Threshold::parse("").unwrap();
    assert!(threshold.is_empty());
    for value in [f64::NEG_INFINITY, -1.0, 0.0, 1e300, f64::NAN] {
        assert!(!threshold.matches(value));
    }
}

#[test]
fn test_nan_alerts_for_any_range() {
    for spec in ["10", "~:", "@0:1", "0:"] {
        assert!(Threshold::parse(spec).unwrap().matches(f64::NAN), "{}", spec);
    }
}

#[test]
fn test_malformed_thresholds_rejected() {
    for spec in ["abc", "@", "1:2:3", "20:10", "x:10", "10:y", "inf"] {
        assert!(
            matches!(Threshold::parse(spec), Err(CheckError::ThresholdParse { .. })),
            "{} should be rejected",
            spec
        );
    }
}

#[test]
fn test_threshold_display_keeps_input() {
    for spec in ["10", "~:10", "@10:20", "0.5:", ""] {
        assert_eq!(Threshold::parse(spec).unwrap().to_string(), spec);
    }
}

#[test]
fn test_evaluator_precedence() {
    let evaluator = Evaluator::from_specs("10", "20").unwrap();
    assert_eq!(evaluator.evaluate(5.0), State::Ok);
    assert_eq!(evaluator.evaluate(15.0), State::Warning);
    assert_eq!(evaluator.evaluate(25.0), State::Critical);
    assert_eq!(evaluator.evaluate(f64::NAN), State::Critical);

    let warning_only = Evaluator::from_specs("10", "").unwrap();
    assert_eq!(warning_only.evaluate(f64::NAN), State::Warning);
}

#[test]
fn test_worst_state_ranking() {
    use State::*;
    assert_eq!(worst([Ok, Warning, Ok]).unwrap(), Warning);
    assert_eq!(worst([Critical, Warning]).unwrap(), Critical);
    assert_eq!(worst([Critical, Unknown, Ok]).unwrap(), Unknown);
    assert_eq!(worst([Ok]).unwrap(), Ok);
    assert!(matches!(
        worst(Vec::<State>::new()),
        Err(CheckError::EmptyAggregation)
    ));
}

#[test]
fn test_exit_codes() {
    assert_eq!(State::Ok.exit_code(), 0);
    assert_eq!(State::Warning.exit_code(), 1);
    assert_eq!(State::Critical.exit_code(), 2);
    assert_eq!(State::Unknown.exit_code(), 3);
}

#[test]
fn test_perfdata_quoting_and_placeholders() {
    let mut perf = PerformanceDataCollection::new();
    perf.add("it's", f64::NAN);
    perf.add("plain", 0.25);

    let rendered = perf.render();
    assert_eq!(rendered, "'it''s'=U;;;; 'plain'=0.25;;;;");
    for entry in rendered.split(' ') {
        assert_eq!(entry.matches(';').count(), 4);
    }
}

#[test]
fn test_output_line() {
    let mut perf = PerformanceDataCollection::new();
    perf.add("load", 3.0);
    perf.set_warn("load", &Threshold::parse("2").unwrap());

    assert_eq!(
        format_output(State::Warning, "Load high", &perf.render()),
        "WARNING - Load high|'load'=3;2;;;\n"
    );
    assert_eq!(format_output(State::Ok, "fine", ""), "OK - fine\n");
}
