//! Year/month selection bounded to the range the backend holds data for.

use chrono::Datelike;

use super::time::now_in_app_tz;

pub const FIRST_YEAR: i32 = 2021;
pub const FIRST_MONTH: u32 = 3;
pub const LAST_YEAR: i32 = 2026;
pub const LAST_MONTH: u32 = 2;

/// Months selectable within `year`. The first and last supported years are partial.
pub fn available_months(year: i32) -> Vec<u32> {
    match year {
        FIRST_YEAR => (FIRST_MONTH..=12).collect(),
        LAST_YEAR => (1..=LAST_MONTH).collect(),
        _ => (1..=12).collect(),
    }
}

pub fn can_go_prev_year(year: i32) -> bool {
    year > FIRST_YEAR
}

pub fn can_go_next_year(year: i32) -> bool {
    year < LAST_YEAR
}

/// Nearest month to `month` that is selectable in `year`.
pub fn clamp_month(year: i32, month: u32) -> u32 {
    let months = available_months(year);
    match (months.first(), months.last()) {
        (Some(&first), Some(&last)) => month.clamp(first, last),
        _ => month,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Self {
        let year = year.clamp(FIRST_YEAR, LAST_YEAR);
        Self {
            year,
            month: clamp_month(year, month),
        }
    }

    /// Current month in the app time zone, pulled into the supported range.
    pub fn current() -> Self {
        let now = now_in_app_tz();
        Self::new(now.year(), now.month())
    }

    pub fn prev_year(self) -> Self {
        if !can_go_prev_year(self.year) {
            return self;
        }
        Self::new(self.year - 1, self.month)
    }

    pub fn next_year(self) -> Self {
        if !can_go_next_year(self.year) {
            return self;
        }
        Self::new(self.year + 1, self.month)
    }

    pub fn with_month(self, month: u32) -> Self {
        if available_months(self.year).contains(&month) {
            Self { month, ..self }
        } else {
            self
        }
    }

    pub fn label(&self) -> String {
        format!("{}年{}月", self.year, self.month)
    }
}
