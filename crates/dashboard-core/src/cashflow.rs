// File: crates/dashboard-core/src/cashflow.rs
// Summary: Per-point derivations over revenue/expense columns (net profit, cumulative cash flow) and bridge bars.

use serde::Serialize;

use crate::error::{DashboardError, Result};

fn check_lengths(revenue: &[f64], expenses: &[f64]) -> Result<()> {
    if revenue.len() != expenses.len() {
        return Err(DashboardError::validation(format!(
            "revenue has {} points but expenses has {}",
            revenue.len(),
            expenses.len()
        )));
    }
    Ok(())
}

/// `revenue[i] - expenses[i]` for every point.
pub fn net_series(revenue: &[f64], expenses: &[f64]) -> Result<Vec<f64>> {
    check_lengths(revenue, expenses)?;
    Ok(revenue.iter().zip(expenses).map(|(r, e)| r - e).collect())
}

/// Running total of `revenue[i] - expenses[i]`; same length as the inputs.
pub fn cumulative_cash_flow(revenue: &[f64], expenses: &[f64]) -> Result<Vec<f64>> {
    let net = net_series(revenue, expenses)?;
    let mut running = 0.0;
    Ok(net
        .into_iter()
        .map(|v| {
            running += v;
            running
        })
        .collect())
}

/// Styling bucket for a profit bar. Zero counts as positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ProfitTone {
    Positive,
    Negative,
}

impl ProfitTone {
    pub fn of(value: f64) -> Self {
        if value >= 0.0 { ProfitTone::Positive } else { ProfitTone::Negative }
    }

    /// Bar border color used by the profit chart.
    pub const fn hex(&self) -> &'static str {
        match self {
            ProfitTone::Positive => "#4facfe",
            ProfitTone::Negative => "#f5576c",
        }
    }
}

/// How a waterfall step moves the running total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StepKind {
    /// Sets the running total; every total after the first must equal it.
    Total,
    /// Adds its value (negative for losses) to the running total.
    Change,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WaterfallStep {
    pub label: String,
    pub value: f64,
    pub kind: StepKind,
}

impl WaterfallStep {
    pub fn total(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value, kind: StepKind::Total }
    }

    pub fn change(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value, kind: StepKind::Change }
    }
}

/// One floating bar of a bridge chart, drawn from `start` to `end`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WaterfallBar {
    pub label: String,
    pub start: f64,
    pub end: f64,
    pub kind: StepKind,
}

/// Relative slack allowed when a closing total is checked against the running total.
const TOTAL_TOLERANCE: f64 = 1e-9;

/// Bridge bars from a running total: each bar starts where the previous one ended.
/// A total step sets the running total to its value; once any step has run, a later
/// total has to agree with the computed running total.
pub fn waterfall(steps: &[WaterfallStep]) -> Result<Vec<WaterfallBar>> {
    let mut running: f64 = 0.0;
    let mut bars = Vec::with_capacity(steps.len());
    for (i, step) in steps.iter().enumerate() {
        if !step.value.is_finite() {
            return Err(DashboardError::validation(format!(
                "waterfall step `{}` has non-finite value {}",
                step.label, step.value
            )));
        }
        let start = running;
        match step.kind {
            StepKind::Total => {
                let slack = TOTAL_TOLERANCE * running.abs().max(1.0);
                if i > 0 && (step.value - running).abs() > slack {
                    return Err(DashboardError::validation(format!(
                        "waterfall total `{}` is {} but the steps add up to {running}",
                        step.label, step.value
                    )));
                }
                running = step.value;
            }
            StepKind::Change => running += step.value,
        }
        bars.push(WaterfallBar { label: step.label.clone(), start, end: running, kind: step.kind });
    }
    Ok(bars)
}
