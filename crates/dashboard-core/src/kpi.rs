// File: crates/dashboard-core/src/kpi.rs
// Summary: KPI aggregates (totals, net profit) and period-over-period percent change.
// Notes:
// - Percent changes are rounded to one decimal, the precision the KPI cards show. The
//   exact decimal value of the float is rounded, so 0.44999999999999996 gives 0.4.
// - A zero baseline is a validation error in `percent_change`; `KpiSummary` stores
//   `None` for that figure so the caller can render "N/A".
// - `ChangeBasis::Approximate` keeps the dashboard's legacy arithmetic: expenses are
//   compared against 90% of themselves and profit against (previous revenue - current
//   expenses). `ChangeBasis::Reported` compares against real prior totals instead.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};
use crate::period::PeriodDataset;

/// Fraction of current expenses assumed as last period's expenses by the legacy basis.
pub const LEGACY_EXPENSE_RATIO: f64 = 0.9;

/// Plain summation; empty input yields 0.
pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

/// Round the exact decimal value of `v` to one place, halves away from zero.
pub fn round_to_tenth(v: f64) -> Result<f64> {
    Decimal::from_f64_retain(v)
        .map(|d| d.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|d| d.to_f64())
        .filter(|r| r.is_finite())
        .ok_or_else(|| DashboardError::validation(format!("{v} cannot be rounded to one decimal")))
}

/// `((current - baseline) / baseline) * 100`, rounded to one decimal.
pub fn percent_change(current: f64, baseline: f64) -> Result<f64> {
    if !current.is_finite() || !baseline.is_finite() {
        return Err(DashboardError::validation(format!(
            "percent change needs finite inputs (current={current}, baseline={baseline})"
        )));
    }
    if baseline == 0.0 {
        return Err(DashboardError::validation("percent change against a zero baseline"));
    }
    let pct = (current - baseline) / baseline * 100.0;
    if !pct.is_finite() {
        return Err(DashboardError::validation(format!(
            "percent change of {current} against {baseline} is not finite"
        )));
    }
    round_to_tenth(pct)
}

/// Totals of the period before the one being summarised.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriorTotals {
    pub revenue: f64,
    pub expenses: f64,
}

/// What the change percentages are measured against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChangeBasis {
    /// Legacy dashboard arithmetic; only prior revenue is known.
    Approximate { previous_revenue: f64 },
    Reported(PriorTotals),
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct KpiSummary {
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
    pub revenue_change_pct: Option<f64>,
    pub expenses_change_pct: Option<f64>,
    pub profit_change_pct: Option<f64>,
    /// Half the rounded revenue change, as shown on the growth card.
    pub growth_change_pct: Option<f64>,
}

/// Summary using the legacy approximate basis against `previous_total` revenue.
pub fn derive_kpi_summary(dataset: &PeriodDataset, previous_total: f64) -> KpiSummary {
    derive_kpi_summary_with(dataset, ChangeBasis::Approximate { previous_revenue: previous_total })
}

pub fn derive_kpi_summary_with(dataset: &PeriodDataset, basis: ChangeBasis) -> KpiSummary {
    let total_revenue = sum(dataset.revenue());
    let total_expenses = sum(dataset.expenses());
    let net_profit = total_revenue - total_expenses;

    let (revenue_base, expenses_base, profit_base) = match basis {
        ChangeBasis::Approximate { previous_revenue } => (
            previous_revenue,
            total_expenses * LEGACY_EXPENSE_RATIO,
            previous_revenue - total_expenses,
        ),
        ChangeBasis::Reported(prior) => (prior.revenue, prior.expenses, prior.revenue - prior.expenses),
    };

    let revenue_change_pct = change_or_none("revenue", total_revenue, revenue_base);
    let expenses_change_pct = change_or_none("expenses", total_expenses, expenses_base);
    let profit_change_pct = change_or_none("profit", net_profit, profit_base);
    let growth_change_pct = revenue_change_pct.and_then(|pct| round_to_tenth(pct * 0.5).ok());

    KpiSummary {
        total_revenue,
        total_expenses,
        net_profit,
        revenue_change_pct,
        expenses_change_pct,
        profit_change_pct,
        growth_change_pct,
    }
}

fn change_or_none(metric: &'static str, current: f64, baseline: f64) -> Option<f64> {
    match percent_change(current, baseline) {
        Ok(pct) => Some(pct),
        Err(err) => {
            tracing::warn!(metric, %err, "kpi change unavailable");
            None
        }
    }
}
