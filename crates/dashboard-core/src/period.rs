// File: crates/dashboard-core/src/period.rs
// Summary: Period datasets (parallel revenue/expense arrays) and the built-in sample fixtures.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::hex_to_rgb;
use crate::error::{DashboardError, Result};
use crate::series::MetricSeries;

/// Aggregation granularity a dataset is defined over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Year,
    Quarter,
    Month,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Year, Period::Quarter, Period::Month];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Period::Year => "year",
            Period::Quarter => "quarter",
            Period::Month => "month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Revenue, expenses and prior-period revenue over one period.
/// Contract: all four arrays have the same length.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PeriodDataset {
    period: Period,
    labels: Vec<String>,
    revenue: Vec<f64>,
    expenses: Vec<f64>,
    previous_revenue: Vec<f64>,
}

impl PeriodDataset {
    pub fn try_new<S: Into<String>>(
        period: Period,
        labels: impl IntoIterator<Item = S>,
        revenue: Vec<f64>,
        expenses: Vec<f64>,
        previous_revenue: Vec<f64>,
    ) -> Result<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let n = labels.len();
        if revenue.len() != n || expenses.len() != n || previous_revenue.len() != n {
            return Err(DashboardError::validation(format!(
                "{period} dataset lengths differ: labels={n} revenue={} expenses={} previous_revenue={}",
                revenue.len(),
                expenses.len(),
                previous_revenue.len()
            )));
        }
        Ok(Self { period, labels, revenue, expenses, previous_revenue })
    }

    pub fn period(&self) -> Period { self.period }
    pub fn labels(&self) -> &[String] { &self.labels }
    pub fn revenue(&self) -> &[f64] { &self.revenue }
    pub fn expenses(&self) -> &[f64] { &self.expenses }
    pub fn previous_revenue(&self) -> &[f64] { &self.previous_revenue }
    pub fn len(&self) -> usize { self.labels.len() }
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    /// Sum of the prior-period revenue column; the usual KPI baseline.
    pub fn previous_total(&self) -> f64 {
        crate::kpi::sum(&self.previous_revenue)
    }

    pub fn revenue_series(&self) -> MetricSeries {
        self.column_series("Revenue", &self.revenue)
    }

    pub fn expenses_series(&self) -> MetricSeries {
        self.column_series("Expenses", &self.expenses)
    }

    fn column_series(&self, name: &str, values: &[f64]) -> MetricSeries {
        let mut series = MetricSeries::new(name);
        for (label, v) in self.labels.iter().zip(values) {
            series.push(label.clone(), *v);
        }
        series
    }

    /// Built-in demo figures for `period`.
    pub fn sample(period: Period) -> Self {
        match period {
            Period::Year => Self {
                period,
                labels: owned(&["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]),
                revenue: vec![
                    125000.0, 142000.0, 158000.0, 171000.0, 165000.0, 185000.0,
                    198000.0, 215000.0, 225000.0, 238000.0, 252000.0, 275000.0,
                ],
                expenses: vec![
                    85000.0, 92000.0, 98000.0, 105000.0, 102000.0, 115000.0,
                    125000.0, 135000.0, 142000.0, 148000.0, 155000.0, 165000.0,
                ],
                previous_revenue: vec![
                    115000.0, 128000.0, 138000.0, 145000.0, 152000.0, 165000.0,
                    175000.0, 188000.0, 195000.0, 208000.0, 220000.0, 235000.0,
                ],
            },
            Period::Quarter => Self {
                period,
                labels: owned(&["Oct", "Nov", "Dec"]),
                revenue: vec![238000.0, 252000.0, 275000.0],
                expenses: vec![148000.0, 155000.0, 165000.0],
                previous_revenue: vec![208000.0, 220000.0, 235000.0],
            },
            Period::Month => Self {
                period,
                labels: owned(&["Week 1", "Week 2", "Week 3", "Week 4"]),
                revenue: vec![65000.0, 68000.0, 71000.0, 71000.0],
                expenses: vec![40000.0, 41000.0, 42000.0, 42000.0],
                previous_revenue: vec![58000.0, 59000.0, 59000.0, 59000.0],
            },
        }
    }
}

/// Percentage split across categories, for doughnut / polar-area charts.
/// Contract: `labels`, `shares` and `colors` have the same length and every color is a 6-digit hex.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryBreakdown {
    labels: Vec<String>,
    shares: Vec<f64>,
    colors: Vec<String>,
}

impl CategoryBreakdown {
    pub fn try_new<L: Into<String>, C: Into<String>>(
        labels: impl IntoIterator<Item = L>,
        shares: Vec<f64>,
        colors: impl IntoIterator<Item = C>,
    ) -> Result<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let colors: Vec<String> = colors.into_iter().map(Into::into).collect();
        if shares.len() != labels.len() || colors.len() != labels.len() {
            return Err(DashboardError::validation(format!(
                "category lengths differ: labels={} shares={} colors={}",
                labels.len(),
                shares.len(),
                colors.len()
            )));
        }
        for color in &colors {
            hex_to_rgb(color)?;
        }
        Ok(Self { labels, shares, colors })
    }

    pub fn revenue_sample() -> Self {
        Self {
            labels: owned(&["Product Sales", "Services", "Subscriptions", "Licensing", "Other"]),
            shares: vec![45.0, 25.0, 18.0, 8.0, 4.0],
            colors: owned(&["#667eea", "#764ba2", "#f093fb", "#4facfe", "#fee140"]),
        }
    }

    pub fn expenses_sample() -> Self {
        Self {
            labels: owned(&["Salaries", "Marketing", "Operations", "R&D", "Infrastructure", "Other"]),
            shares: vec![35.0, 20.0, 15.0, 18.0, 8.0, 4.0],
            colors: owned(&["#f5576c", "#fa709a", "#ff6b9d", "#ff8fab", "#ffa3b9", "#ffc3d0"]),
        }
    }

    pub fn labels(&self) -> &[String] { &self.labels }
    pub fn shares(&self) -> &[f64] { &self.shares }
    pub fn colors(&self) -> &[String] { &self.colors }
    pub fn len(&self) -> usize { self.labels.len() }
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    /// `(label, share, color)` per slice, in order.
    pub fn slices(&self) -> impl Iterator<Item = (&str, f64, &str)> + '_ {
        self.labels
            .iter()
            .zip(&self.shares)
            .zip(&self.colors)
            .map(|((label, share), color)| (label.as_str(), *share, color.as_str()))
    }

    pub fn total_share(&self) -> f64 {
        crate::kpi::sum(&self.shares)
    }
}

fn owned(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}
