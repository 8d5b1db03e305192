// File: crates/dashboard-core/src/settings.rs
// Summary: Layered settings (optional TOML file, then DASHBOARD_* env vars) for consumers of the core.

use std::path::Path;

use serde::Deserialize;

use crate::error::{DashboardError, Result};
use crate::kpi::{ChangeBasis, PriorTotals};
use crate::labels::LabelStyle;
use crate::palette::{get_palette, Palette};
use crate::period::{Period, PeriodDataset};

pub const ENV_PREFIX: &str = "DASHBOARD";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BasisKind {
    #[default]
    Approximate,
    Reported,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub palette: String,
    pub period: Period,
    pub change_basis: BasisKind,
    /// Required when `change_basis = "reported"`.
    pub prior_expenses: Option<f64>,
    pub label_style: LabelStyle,
    /// Length of synthetic monthly series.
    pub months: i64,
    pub arr_base: f64,
    pub arr_variance: f64,
    /// Fixed seed for synthetic data; entropy when absent.
    pub seed: Option<u64>,
    /// Fill opacity for area datasets.
    pub alpha: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            palette: "financialAuthority".to_string(),
            period: Period::Year,
            change_basis: BasisKind::Approximate,
            prior_expenses: None,
            label_style: LabelStyle::ShortYear,
            months: 24,
            arr_base: 1_200_000.0,
            arr_variance: 150_000.0,
            seed: None,
            alpha: 0.1,
        }
    }
}

impl Settings {
    /// Load from `path` (if given) then environment overrides, and validate.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            tracing::debug!(path = %path.display(), "loading settings file");
            builder = builder.add_source(config::File::from(path));
        }
        builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true));
        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_toml_str(src: &str) -> Result<Self> {
        let settings: Settings = config::Config::builder()
            .add_source(config::File::from_str(src, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        get_palette(&self.palette)?;
        self.months()?;
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(DashboardError::validation(format!("alpha {} outside [0, 1]", self.alpha)));
        }
        if self.change_basis == BasisKind::Reported && self.prior_expenses.is_none() {
            return Err(DashboardError::validation("reported change basis needs prior_expenses"));
        }
        Ok(())
    }

    pub fn months(&self) -> Result<u32> {
        u32::try_from(self.months)
            .map_err(|_| DashboardError::validation(format!("months must be a non-negative count, got {}", self.months)))
    }

    pub fn palette(&self) -> Result<&'static Palette> {
        get_palette(&self.palette)
    }

    /// Baseline for KPI changes on `dataset`, per the configured basis.
    pub fn change_basis_for(&self, dataset: &PeriodDataset) -> Result<ChangeBasis> {
        let previous_revenue = dataset.previous_total();
        match self.change_basis {
            BasisKind::Approximate => Ok(ChangeBasis::Approximate { previous_revenue }),
            BasisKind::Reported => {
                let expenses = self
                    .prior_expenses
                    .ok_or_else(|| DashboardError::validation("reported change basis needs prior_expenses"))?;
                Ok(ChangeBasis::Reported(PriorTotals { revenue: previous_revenue, expenses }))
            }
        }
    }
}
