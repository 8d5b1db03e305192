// File: crates/dashboard-core/src/labels.rs
// Summary: Calendar month axis labels ending at the current month, with an injectable clock.

use chrono::{Datelike, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

/// Source of "today".
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// `Jan 24`
    #[default]
    ShortYear,
    /// `Jan 2024`
    FullYear,
}

impl LabelStyle {
    const fn pattern(&self) -> &'static str {
        match self {
            LabelStyle::ShortYear => "%b %y",
            LabelStyle::FullYear => "%b %Y",
        }
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(self.pattern()).to_string()
    }
}

/// `months` consecutive month labels in ascending order, the last one being the
/// clock's current month.
pub fn generate_month_labels(months: u32, clock: &dyn Clock, style: LabelStyle) -> Result<Vec<String>> {
    if months == 0 {
        return Ok(Vec::new());
    }
    let today = clock.today();
    // Anchor on the 1st so month arithmetic never overflows into the next month.
    let anchor = today
        .with_day(1)
        .ok_or_else(|| DashboardError::validation(format!("no first day for {today}")))?;
    let start = anchor
        .checked_sub_months(Months::new(months - 1))
        .ok_or_else(|| DashboardError::validation(format!("{months} months before {today} is out of range")))?;

    (0..months)
        .map(|i| {
            start
                .checked_add_months(Months::new(i))
                .map(|d| style.format(d))
                .ok_or_else(|| DashboardError::validation("month label out of range"))
        })
        .collect()
}
