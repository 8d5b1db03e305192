// File: crates/dashboard-core/src/series.rs
// Summary: Labelled metric series (one line or bar dataset), chronological by insertion order.

use serde::Serialize;

use crate::error::{DashboardError, Result};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Point {
    pub label: String,
    pub value: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct MetricSeries {
    pub name: String,
    points: Vec<Point>,
}

impl MetricSeries {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), points: Vec::new() }
    }

    /// Zip parallel label/value arrays into a series; lengths must match.
    pub fn from_parts<S: Into<String>>(
        name: impl Into<String>,
        labels: impl IntoIterator<Item = S>,
        values: &[f64],
    ) -> Result<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        if labels.len() != values.len() {
            return Err(DashboardError::validation(format!(
                "series has {} labels but {} values",
                labels.len(),
                values.len()
            )));
        }
        let points = labels
            .into_iter()
            .zip(values.iter().copied())
            .map(|(label, value)| Point { label, value })
            .collect();
        Ok(Self { name: name.into(), points })
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.points.push(Point { label: label.into(), value });
    }

    pub fn points(&self) -> &[Point] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.points.iter().map(|p| p.label.as_str())
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Value of the latest point, if any.
    pub fn last_value(&self) -> Option<f64> {
        self.points.last().map(|p| p.value)
    }
}
