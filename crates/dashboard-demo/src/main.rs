// File: crates/dashboard-demo/src/main.rs
// Summary: Demo loads settings, derives KPI cards and chart datasets for one period, and prints them as JSON.

use anyhow::{Context, Result};
use dashboard_core::{
    alpha_suffix, cumulative_cash_flow, derive_kpi_summary_with, generate_month_labels, net_series, waterfall,
    synthesize_monthly_series, to_rgba, with_alpha_suffix, CategoryBreakdown, KpiSummary, MetricSeries,
    PeriodDataset, ProfitTone, RandomSource, RngSource, Settings, SystemClock, WaterfallBar, WaterfallStep,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct Dataset {
    series: MetricSeries,
    border: String,
    fill: String,
}

#[derive(Serialize)]
struct ProfitBar {
    label: String,
    value: f64,
    color: &'static str,
}

#[derive(Serialize)]
struct Bundle {
    period: String,
    palette: &'static str,
    kpis: KpiSummary,
    revenue_vs_expenses: Vec<Dataset>,
    profit: Vec<ProfitBar>,
    cash_flow: MetricSeries,
    arr: MetricSeries,
    revenue_categories: Vec<(String, f64, String)>,
    churn_bridge: Vec<WaterfallBar>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    // Optional settings file from CLI; DASHBOARD_* env vars override it.
    let path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load(path.as_deref())
        .with_context(|| format!("failed to load settings from {:?}", path))?;
    tracing::info!(palette = %settings.palette, period = %settings.period, "settings loaded");

    let palette = settings.palette()?;
    let primary = palette.colors.first().map(|s| s.hex).context("palette has no colors")?;
    let warning = palette.colors.get(3).map_or(primary, |s| s.hex);

    let dataset = PeriodDataset::sample(settings.period);
    let basis = settings.change_basis_for(&dataset)?;
    let kpis = derive_kpi_summary_with(&dataset, basis);

    let revenue_vs_expenses = vec![
        Dataset { series: dataset.revenue_series(), border: primary.to_string(), fill: to_rgba(primary, settings.alpha) },
        Dataset { series: dataset.expenses_series(), border: warning.to_string(), fill: to_rgba(warning, settings.alpha) },
    ];

    let profit = net_series(dataset.revenue(), dataset.expenses())?
        .into_iter()
        .zip(dataset.labels())
        .map(|(value, label)| ProfitBar { label: label.clone(), value, color: ProfitTone::of(value).hex() })
        .collect();

    let flow = cumulative_cash_flow(dataset.revenue(), dataset.expenses())?;
    let cash_flow = MetricSeries::from_parts("Cumulative Cash Flow", dataset.labels().iter().cloned(), &flow)?;

    let months = settings.months()?;
    let mut rng: Box<dyn RandomSource> = match settings.seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::from_entropy()),
    };
    let arr_values = synthesize_monthly_series(settings.arr_base, settings.arr_variance, months, rng.as_mut())?;
    let arr_labels = generate_month_labels(months, &SystemClock, settings.label_style)?;
    let arr = MetricSeries::from_parts("ARR", arr_labels, &arr_values)?;

    // Polar-area slices use the hex-suffix form for their fill.
    let categories = CategoryBreakdown::revenue_sample();
    let suffix = alpha_suffix(0.8)?;
    let revenue_categories = categories
        .slices()
        .map(|(label, share, hex)| -> Result<_> { Ok((label.to_string(), share, with_alpha_suffix(hex, &suffix)?)) })
        .collect::<Result<Vec<_>>>()?;

    let churn_bridge = waterfall(&[
        WaterfallStep::total("Start", 1200.0),
        WaterfallStep::change("Voluntary", -45.0),
        WaterfallStep::change("Involuntary", -18.0),
        WaterfallStep::change("Downgrade", -32.0),
        WaterfallStep::change("Competitor", -25.0),
        WaterfallStep::total("End", 1080.0),
    ])?;

    let bundle = Bundle {
        period: settings.period.to_string(),
        palette: palette.key,
        kpis,
        revenue_vs_expenses,
        profit,
        cash_flow,
        arr,
        revenue_categories,
        churn_bridge,
    };
    println!("{}", serde_json::to_string_pretty(&bundle)?);
    Ok(())
}
