// File: crates/dashboard-core/src/lib.rs
// Summary: Core library entry point; exports palettes, color helpers and KPI/metric derivation.

pub mod error;
pub mod color;
pub mod palette;
pub mod series;
pub mod period;
pub mod kpi;
pub mod cashflow;
pub mod synth;
pub mod labels;
pub mod settings;

pub use error::{DashboardError, Result};
pub use color::{alpha_suffix, hex_to_rgb, to_rgb_string, to_rgba, to_rgba_opaque, with_alpha_suffix, Rgb};
pub use palette::{get_palette, palettes, Palette, Role, Swatch};
pub use series::{MetricSeries, Point};
pub use period::{CategoryBreakdown, Period, PeriodDataset};
pub use kpi::{derive_kpi_summary, derive_kpi_summary_with, percent_change, sum, ChangeBasis, KpiSummary, PriorTotals};
pub use cashflow::{cumulative_cash_flow, net_series, waterfall, ProfitTone, StepKind, WaterfallBar, WaterfallStep};
pub use synth::{scatter_cloud, synthesize_monthly_series, RandomSource, RngSource, Sequence};
pub use labels::{generate_month_labels, Clock, FixedClock, LabelStyle, SystemClock};
pub use settings::{BasisKind, Settings};
