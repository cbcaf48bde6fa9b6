//! `mode query`: evaluate an arbitrary PromQL result against thresholds.

use crate::core::freshness::Freshness;
use crate::core::label_rewrite::LabelRewrite;
use crate::core::plugin::{
    format_value, CheckOutcome, Evaluator, PerformanceDataCollection, State, States,
};
use crate::core::prometheus::{PrometheusApi, QueryResult, Sample, Series};
use crate::error::Result;
use chrono::Utc;

/// Inputs of a query check, as given on the command line
#[derive(Debug, Clone)]
pub struct QueryCheck {
    pub query: String,
    pub warning: String,
    pub critical: String,
    /// Replaces the query in the status message when set
    pub alias: String,
    pub search: String,
    pub replace: String,
    pub empty_message: String,
    pub empty_state: State,
}

impl QueryCheck {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            warning: String::new(),
            critical: String::new(),
            alias: String::new(),
            search: String::new(),
            replace: String::new(),
            empty_message: String::new(),
            empty_state: State::Unknown,
        }
    }

    fn message(&self) -> String {
        if self.alias.is_empty() {
            format!("Query: '{}'", self.query)
        } else {
            self.alias.clone()
        }
    }

    fn empty_outcome(&self) -> CheckOutcome {
        let message = if self.empty_message.is_empty() {
            format!("Query '{}' returned no data.", self.query)
        } else {
            self.empty_message.clone()
        };
        CheckOutcome::new(self.empty_state, message, PerformanceDataCollection::new())
    }
}

pub fn run(api: &dyn PrometheusApi, check: &QueryCheck, freshness: Freshness) -> Result<CheckOutcome> {
    let evaluator = Evaluator::from_specs(&check.warning, &check.critical)?;
    let rewrite = LabelRewrite::new(&check.search, &check.replace)?;

    let result = api.query(&check.query, Utc::now())?;
    log::debug!("Query '{}' returned a {} result", check.query, result.result_type());

    match result {
        QueryResult::Scalar(point) => {
            freshness.check_now(point.timestamp)?;

            let mut perfdata = PerformanceDataCollection::new();
            let label = rewrite.apply("scalar");
            add_with_thresholds(&mut perfdata, &label, point.value, &evaluator);

            let value = format_value(point.value);
            let message = if check.alias.is_empty() {
                format!("Query: '{}' returned: '{}'", check.query, value)
            } else {
                format!("Alias: '{}' returned: '{}'", check.alias, value)
            };
            Ok(CheckOutcome::new(evaluator.evaluate(point.value), message, perfdata))
        }
        QueryResult::Vector(samples) if samples.is_empty() => Ok(check.empty_outcome()),
        QueryResult::Vector(samples) => evaluate_vector(&samples, check, &evaluator, &rewrite, freshness),
        QueryResult::Matrix(series) => evaluate_matrix(&series, check, &evaluator, freshness),
    }
}

fn evaluate_vector(
    samples: &[Sample],
    check: &QueryCheck,
    evaluator: &Evaluator,
    rewrite: &LabelRewrite,
    freshness: Freshness,
) -> Result<CheckOutcome> {
    let mut perfdata = PerformanceDataCollection::new();
    let mut states = States::new();

    for sample in samples {
        freshness.check_now(sample.timestamp)?;

        let label = rewrite.apply(&sample.labels.to_string());
        add_with_thresholds(&mut perfdata, &label, sample.value, evaluator);
        states.push(evaluator.evaluate(sample.value));
    }

    Ok(CheckOutcome::new(states.worst()?, check.message(), perfdata))
}

fn evaluate_matrix(
    series: &[Series],
    check: &QueryCheck,
    evaluator: &Evaluator,
    freshness: Freshness,
) -> Result<CheckOutcome> {
    let mut states = States::new();

    for stream in series {
        for point in &stream.points {
            freshness.check_now(point.timestamp)?;
            states.push(evaluator.evaluate(point.value));
        }
    }

    Ok(CheckOutcome::new(
        states.worst()?,
        check.message(),
        PerformanceDataCollection::new(),
    ))
}

fn add_with_thresholds(
    perfdata: &mut PerformanceDataCollection,
    label: &str,
    value: f64,
    evaluator: &Evaluator,
) {
    perfdata.add(label, value);
    perfdata.set_warn(label, &evaluator.warning);
    perfdata.set_crit(label, &evaluator.critical);
}
