use std::fmt;

use serde::{Deserialize, Serialize};

/// Date display formats offered in the localization settings form.
/// `Display` renders the strftime pattern used by the UI layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "text", rename_all = "snake_case")]
pub enum DateFormat {
    DayMonthYear,
    DayMonthYearSlash,
    MonthDayYearSlash,
    YearMonthDayDash,
}

impl DateFormat {
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::DayMonthYear => "%d %b %Y",
            DateFormat::DayMonthYearSlash => "%d/%m/%Y",
            DateFormat::MonthDayYearSlash => "%m/%d/%Y",
            DateFormat::YearMonthDayDash => "%Y-%m-%d",
        }
    }

    pub const ALL: [DateFormat; 4] = [
        DateFormat::DayMonthYear,
        DateFormat::DayMonthYearSlash,
        DateFormat::MonthDayYearSlash,
        DateFormat::YearMonthDayDash,
    ];
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "text", rename_all = "snake_case")]
pub enum TimeFormat {
    TwentyFourHour,
    TwelveHour,
}

impl TimeFormat {
    pub fn pattern(self) -> &'static str {
        match self {
            TimeFormat::TwentyFourHour => "%H:%M",
            TimeFormat::TwelveHour => "%I:%M %p",
        }
    }

    pub const ALL: [TimeFormat; 2] = [TimeFormat::TwentyFourHour, TimeFormat::TwelveHour];
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

/// Digit grouping / decimal separator conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "text", rename_all = "snake_case")]
pub enum NumberFormat {
    CommaDot,
    DotComma,
    SpaceDot,
    SpaceComma,
}

/// First day of the week. Stored per company, defaulted from the locale's
/// calendar convention and overridable by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "text", rename_all = "snake_case")]
pub enum WeekStart {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl WeekStart {
    pub const DEFAULT: WeekStart = WeekStart::Monday;

    /// Map an ISO day-of-week number (1 = Monday .. 7 = Sunday).
    pub fn from_iso(day: u32) -> Option<WeekStart> {
        match day {
            1 => Some(WeekStart::Monday),
            2 => Some(WeekStart::Tuesday),
            3 => Some(WeekStart::Wednesday),
            4 => Some(WeekStart::Thursday),
            5 => Some(WeekStart::Friday),
            6 => Some(WeekStart::Saturday),
            7 => Some(WeekStart::Sunday),
            _ => None,
        }
    }
}
