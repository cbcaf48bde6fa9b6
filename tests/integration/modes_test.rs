use super::support::*;
use assert_matches::assert_matches;
use check_prometheus::core::modes::{ping, query, targets_health, QueryCheck, TargetsHealthCheck};
use check_prometheus::core::prometheus::QueryResult;
use check_prometheus::core::Freshness;
use check_prometheus::{CheckError, State};
use std::time::Duration;

fn fresh() -> Freshness {
    Freshness::new(Some(Duration::from_secs(300)))
}

fn query_check(query: &str, warning: &str, critical: &str) -> QueryCheck {
    QueryCheck {
        warning: warning.to_string(),
        critical: critical.to_string(),
        ..QueryCheck::new(query)
    }
}

fn up_vector() -> QueryResult {
    QueryResult::Vector(vec![
        sample(&[("__name__", "up"), ("instance", "a:9100"), ("job", "node")], 1.0),
        sample(&[("__name__", "up"), ("instance", "b:9090"), ("job", "prometheus")], 0.0),
    ])
}

#[test]
fn test_vector_perfdata_and_worst_state() {
    let api = StubApi::with_result(up_vector());
    let outcome = query::run(&api, &query_check("up", "", "1:"), fresh()).unwrap();

    assert_eq!(outcome.state, State::Critical);
    assert_eq!(
        outcome.to_string(),
        concat!(
            "CRITICAL - Query: 'up'|",
            r#"'{__name__="up", instance="a:9100", job="node"}'=1;;1:;; "#,
            r#"'{__name__="up", instance="b:9090", job="prometheus"}'=0;;1:;;"#,
            "\n"
        )
    );
    assert_eq!(api.queries.borrow().as_slice(), ["up"]);
}

#[test]
fn test_vector_all_ok() {
    let api = StubApi::with_result(up_vector());
    let outcome = query::run(&api, &query_check("up", "", ""), fresh()).unwrap();
    assert_eq!(outcome.state, State::Ok);
    assert_eq!(outcome.perfdata.len(), 2);
}

#[test]
fn test_vector_label_rewrite() {
    let api = StubApi::with_result(up_vector());
    let check = QueryCheck {
        search: r#"^.*job="([^"]*)".*$"#.to_string(),
        replace: "$1".to_string(),
        ..query_check("up", "", "")
    };
    let outcome = query::run(&api, &check, fresh()).unwrap();
    assert_eq!(outcome.perfdata.render(), "'node'=1;;;; 'prometheus'=0;;;;");
}

#[test]
fn test_rewrite_collisions_update_in_place() {
    let api = StubApi::with_result(up_vector());
    let check = QueryCheck {
        search: "^.*$".to_string(),
        replace: "error_state".to_string(),
        ..query_check("up", "0", "0")
    };
    let outcome = query::run(&api, &check, fresh()).unwrap();
    assert_eq!(outcome.perfdata.len(), 1);
    assert_eq!(outcome.perfdata.render(), "'error_state'=0;0;0;;");
    assert_eq!(outcome.state, State::Critical);
}

#[test]
fn test_vector_alias_is_literal() {
    let api = StubApi::with_result(up_vector());
    let check = QueryCheck {
        alias: "Hostname: {{.instance}}".to_string(),
        ..query_check("up", "", "")
    };
    let outcome = query::run(&api, &check, fresh()).unwrap();
    assert_eq!(outcome.message, "Hostname: {{.instance}}");
}

#[test]
fn test_empty_vector_defaults_to_unknown() {
    let api = StubApi::with_result(QueryResult::Vector(vec![]));
    let outcome = query::run(&api, &query_check("alerts", "", ""), fresh()).unwrap();
    assert_eq!(outcome.to_string(), "UNKNOWN - Query 'alerts' returned no data.\n");
}

#[test]
fn test_empty_vector_override() {
    let api = StubApi::with_result(QueryResult::Vector(vec![]));
    let check = QueryCheck {
        empty_message: "All OK".to_string(),
        empty_state: State::Ok,
        ..query_check("alerts", "0", "0")
    };
    let outcome = query::run(&api, &check, fresh()).unwrap();
    assert_eq!(outcome.to_string(), "OK - All OK\n");
    assert_eq!(outcome.exit_code(), 0);
}

#[test]
fn test_scalar_message_and_perfdata() {
    let api = StubApi::with_result(QueryResult::Scalar(point(1.0)));
    let outcome = query::run(&api, &query_check("scalar(up)", "", ""), fresh()).unwrap();
    assert_eq!(
        outcome.to_string(),
        "OK - Query: 'scalar(up)' returned: '1'|'scalar'=1;;;;\n"
    );
}

#[test]
fn test_scalar_with_alias_and_threshold() {
    let api = StubApi::with_result(QueryResult::Scalar(point(12.5)));
    let check = QueryCheck {
        alias: "disk usage".to_string(),
        ..query_check("scalar(x)", "10", "20")
    };
    let outcome = query::run(&api, &check, fresh()).unwrap();
    assert_eq!(outcome.state, State::Warning);
    assert_eq!(outcome.message, "Alias: 'disk usage' returned: '12.5'");
    assert_eq!(outcome.perfdata.render(), "'scalar'=12.5;10;20;;");
}

#[test]
fn test_scalar_nan_is_critical() {
    let api = StubApi::with_result(QueryResult::Scalar(point(f64::NAN)));
    let outcome = query::run(&api, &query_check("scalar(x)", "10", "20"), fresh()).unwrap();
    assert_eq!(outcome.state, State::Critical);
}

#[test]
fn test_scalar_infinity() {
    let api = StubApi::with_result(QueryResult::Scalar(point(f64::INFINITY)));
    let outcome = query::run(&api, &query_check("scalar(x)", "", "10"), fresh()).unwrap();
    assert_eq!(
        outcome.to_string(),
        "CRITICAL - Query: 'scalar(x)' returned: '+Inf'|'scalar'=U;;10;;\n"
    );
}

#[test]
fn test_vector_negative_infinity_perfdata() {
    let api = StubApi::with_result(QueryResult::Vector(vec![sample(&[("job", "a")], f64::NEG_INFINITY)]));
    let outcome = query::run(&api, &query_check("up", "", ""), fresh()).unwrap();
    assert_eq!(outcome.perfdata.render(), r#"'{job="a"}'=U;;;;"#);
}

#[test]
fn test_matrix_evaluates_every_point() {
    let api = StubApi::with_result(QueryResult::Matrix(vec![
        series(&[("job", "a")], &[1.0, 2.0, 3.0]),
        series(&[("job", "b")], &[1.0, 15.0]),
    ]));
    let outcome = query::run(&api, &query_check("rate(x[5m])", "10", "20"), fresh()).unwrap();
    assert_eq!(outcome.to_string(), "WARNING - Query: 'rate(x[5m])'\n");
}

#[test]
fn test_empty_matrix_fails_aggregation() {
    let api = StubApi::with_result(QueryResult::Matrix(vec![]));
    assert_matches!(
        query::run(&api, &query_check("x[5m]", "", ""), fresh()),
        Err(CheckError::EmptyAggregation)
    );
}

#[test]
fn test_stale_sample_aborts() {
    let api = StubApi::with_result(QueryResult::Vector(vec![
        sample(&[("job", "a")], 1.0),
        old_sample(&[("job", "b")], 1.0, 3600),
    ]));
    assert_matches!(
        query::run(&api, &query_check("up", "", ""), fresh()),
        Err(CheckError::Stale(_))
    );
}

#[test]
fn test_disabled_freshness_accepts_old_samples() {
    let api = StubApi::with_result(QueryResult::Vector(vec![old_sample(&[("job", "a")], 1.0, 86_400)]));
    let outcome = query::run(&api, &query_check("up", "", ""), Freshness::disabled()).unwrap();
    assert_eq!(outcome.state, State::Ok);
}

#[test]
fn test_invalid_threshold_fails_before_querying() {
    let api = StubApi::with_result(up_vector());
    assert_matches!(
        query::run(&api, &query_check("up", "abc", ""), fresh()),
        Err(CheckError::ThresholdParse { .. })
    );
    assert!(api.queries.borrow().is_empty());
}

#[test]
fn test_invalid_search_pattern() {
    let api = StubApi::with_result(up_vector());
    let check = QueryCheck {
        search: "(".to_string(),
        ..query_check("up", "", "")
    };
    assert_matches!(query::run(&api, &check, fresh()), Err(CheckError::InvalidPattern(_)));
}

#[test]
fn test_ping_reports_build_info() {
    let api = StubApi::with_result(QueryResult::Vector(vec![sample(
        &[
            ("__name__", "prometheus_build_info"),
            ("instance", "localhost:9090"),
            ("job", "prometheus"),
            ("version", "2.53.0"),
        ],
        1.0,
    )]));
    let outcome = ping::run(&api, fresh()).unwrap();

    assert_eq!(outcome.state, State::Ok);
    assert_eq!(outcome.message, "Version: 2.53.0, Instance localhost:9090");
    let duration = outcome.perfdata.get("duration").unwrap();
    assert_eq!(duration.unit, "s");
    assert_eq!(duration.min, Some(0.0));
    assert!(duration.value >= 0.0);
    assert_eq!(api.queries.borrow().as_slice(), [ping::BUILD_INFO_QUERY]);
}

#[test]
fn test_ping_requires_single_sample() {
    let api = StubApi::with_result(QueryResult::Vector(vec![]));
    assert_matches!(ping::run(&api, fresh()), Err(CheckError::UnexpectedResult(_)));

    let api = StubApi::with_result(QueryResult::Scalar(point(1.0)));
    assert_matches!(ping::run(&api, fresh()), Err(CheckError::UnexpectedResult(_)));
}

#[test]
fn test_ping_stale_build_info() {
    let api = StubApi::with_result(QueryResult::Vector(vec![old_sample(&[("version", "2")], 1.0, 900)]));
    assert_matches!(ping::run(&api, fresh()), Err(CheckError::Stale(_)));
}

fn health_check(label: &str, warning: &str, critical: &str) -> TargetsHealthCheck {
    TargetsHealthCheck {
        label: label.to_string(),
        warning: warning.to_string(),
        critical: critical.to_string(),
    }
}

#[test]
fn test_targets_health_rate() {
    let api = StubApi::with_targets(vec![
        target(&[("instance", "a:9100"), ("job", "node")], "up"),
        target(&[("instance", "b:9100"), ("job", "node")], "down"),
        target(&[("instance", "c:9090"), ("job", "prometheus")], "up"),
    ]);
    let outcome = targets_health::run(&api, &health_check("instance", "0.9:", "0.5:")).unwrap();

    assert_eq!(outcome.state, State::Warning);
    assert_eq!(outcome.message, "There are 2 healthy and 1 unhealthy targets");
    assert_eq!(
        outcome.perfdata.labels().collect::<Vec<_>>(),
        ["a:9100", "b:9100", "c:9090", "health_rate", "targets"]
    );
    assert_eq!(outcome.perfdata.get("b:9100").unwrap().value, 1.0);
    assert_eq!(outcome.perfdata.get("targets").unwrap().value, 3.0);
    let rate = outcome.perfdata.get("health_rate").unwrap();
    assert!((rate.value - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(rate.min, Some(0.0));
    assert_eq!(rate.max, Some(1.0));
}

#[test]
fn test_targets_health_custom_label_falls_back_to_instance() {
    let api = StubApi::with_targets(vec![
        target(&[("instance", "a:9100"), ("job", "node")], "up"),
        target(&[("instance", "b:9100")], "up"),
    ]);
    let outcome = targets_health::run(&api, &health_check("job", "", "")).unwrap();
    assert_eq!(
        outcome.perfdata.render(),
        "'node'=0;;;; 'b:9100'=0;;;; 'health_rate'=1;;;0;1 'targets'=2;;;0;"
    );
    assert_eq!(outcome.state, State::Ok);
}

#[test]
fn test_targets_health_without_targets() {
    let api = StubApi::with_targets(vec![]);
    let outcome = targets_health::run(&api, &health_check("instance", "", "0.5:")).unwrap();
    assert_eq!(
        outcome.to_string(),
        "CRITICAL - There are 0 healthy and 0 unhealthy targets|'health_rate'=0;;0.5:;0;1 'targets'=0;;;0;\n"
    );
}

#[test]
fn test_targets_health_api_failure() {
    let api = StubApi::default();
    assert_matches!(
        targets_health::run(&api, &TargetsHealthCheck::default()),
        Err(CheckError::Api(_))
    );
}
