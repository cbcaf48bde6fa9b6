//! Performance data attached to a plugin result.
//!
//! Entries render as `'label'=value[unit];warn;crit;min;max`, joined by spaces
//! in insertion order. Absent fields stay empty but keep their separators.

use super::threshold::Threshold;
use indexmap::IndexMap;

/// One performance-data record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceDatum {
    pub value: f64,
    pub unit: String,
    pub warn: Option<Threshold>,
    pub crit: Option<Threshold>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PerformanceDatum {
    fn render(&self, label: &str) -> String {
        format!(
            "{}={}{};{};{};{};{}",
            quote_label(label),
            format_number(self.value),
            self.unit,
            self.warn.as_ref().map(Threshold::spec).unwrap_or_default(),
            self.crit.as_ref().map(Threshold::spec).unwrap_or_default(),
            self.min.map(format_number).unwrap_or_default(),
            self.max.map(format_number).unwrap_or_default(),
        )
    }
}

/// Label-unique, insertion-ordered performance data of one check run
#[derive(Debug, Clone, Default)]
pub struct PerformanceDataCollection {
    data: IndexMap<String, PerformanceDatum>,
}

impl PerformanceDataCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `label` or overwrite its value, keeping unit, thresholds and bounds.
    pub fn add(&mut self, label: impl Into<String>, value: f64) -> &mut PerformanceDatum {
        let datum = self.data.entry(label.into()).or_default();
        datum.value = value;
        datum
    }

    pub fn set_unit(&mut self, label: &str, unit: impl Into<String>) {
        self.entry(label).unit = unit.into();
    }

    pub fn set_warn(&mut self, label: &str, threshold: &Threshold) {
        self.entry(label).warn = Some(threshold.clone());
    }

    pub fn set_crit(&mut self, label: &str, threshold: &Threshold) {
        self.entry(label).crit = Some(threshold.clone());
    }

    pub fn set_min(&mut self, label: &str, min: f64) {
        self.entry(label).min = Some(min);
    }

    pub fn set_max(&mut self, label: &str, max: f64) {
        self.entry(label).max = Some(max);
    }

    pub fn get(&self, label: &str) -> Option<&PerformanceDatum> {
        self.data.get(label)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.data.keys().map(String::as_str)
    }

    /// Render every entry; an empty collection renders as an empty string.
    pub fn render(&self) -> String {
        self.data
            .iter()
            .map(|(label, datum)| datum.render(label))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn entry(&mut self, label: &str) -> &mut PerformanceDatum {
        self.data.entry(label.to_string()).or_default()
    }
}

fn quote_label(label: &str) -> String {
    format!("'{}'", label.replace('\'', "''"))
}

/// Shortest decimal form, never exponent notation. NaN and infinities are the
/// `U` placeholder.
fn format_number(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        "U".to_string()
    }
}
