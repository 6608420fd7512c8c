use chrono::{DateTime, Datelike, Days, Months, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::enums::{DateFormat, NumberFormat, TimeFormat, WeekStart};

/// A company's localization settings. One row per company, created at
/// provisioning and mutated by the settings workflow.
#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Localization {
    pub id: Uuid,
    pub company_id: Uuid,
    pub language: String,
    pub timezone: String,
    pub date_format: DateFormat,
    pub time_format: TimeFormat,
    pub fiscal_year_end_month: i16,
    pub fiscal_year_end_day: i16,
    pub week_start: WeekStart,
    pub number_format: NumberFormat,
    pub percent_first: bool,
    pub created_by: Option<Uuid>,
    pub updated_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Localization {
    /// The end of the fiscal period `today` falls in: this calendar year's
    /// occurrence of the configured month/day, or next year's if it has
    /// already passed.
    pub fn fiscal_year_end_date(&self, today: NaiveDate) -> NaiveDate {
        let this_year = self.fiscal_day_in_year(today.year());
        if today > this_year {
            self.fiscal_day_in_year(today.year() + 1)
        } else {
            this_year
        }
    }

    /// The day after the previous fiscal year's end. Always derived from
    /// [`fiscal_year_end_date`](Self::fiscal_year_end_date) so start and end
    /// bound exactly one 12-month period.
    pub fn fiscal_year_start_date(&self, today: NaiveDate) -> NaiveDate {
        self.fiscal_year_end_date(today) - Months::new(12) + Days::new(1)
    }

    fn fiscal_day_in_year(&self, year: i32) -> NaiveDate {
        let month = self.fiscal_year_end_month as u32;
        let day = self.fiscal_year_end_day as u32;
        // Pairs are validated at save time, so the only combination that can
        // miss for a given year is Feb 29 outside a leap year; it clamps to
        // the last day of February.
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| NaiveDate::from_ymd_opt(year, month, 28))
            .expect("fiscal year end month/day validated at save time")
    }

    /// Combined display format: date pattern, a single space, time pattern.
    pub fn date_time_format(&self) -> String {
        format!("{} {}", self.date_format, self.time_format)
    }
}

/// True when `(month, day)` names a date that exists in at least one year.
/// Feb 29 is accepted (it clamps in non-leap years at computation time);
/// Apr 31 is not.
pub fn valid_fiscal_month_day(month: i16, day: i16) -> bool {
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return false;
    }
    // 2024 is a leap year, so every representable month/day exists in it.
    NaiveDate::from_ymd_opt(2024, month as u32, day as u32).is_some()
}
