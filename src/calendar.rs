//! Calendar geometry for a tracker year.
//!
//! Month sheets are laid out from [`MonthLayout`] and the weekly report from
//! [`Week`]. The week partition is a fixed run of 52 seven-day windows that
//! starts on January 1st; it is not ISO-8601 and the last one or two days of
//! the year fall outside every window.

use chrono::{Datelike, Days, NaiveDate};

use crate::error::{Result, TrackerError};

pub const MONTHS_PER_YEAR: u32 = 12;
pub const WEEKS_PER_YEAR: u32 = 52;

/// Rows above the first day row on a month sheet (just the header).
pub const HEADER_ROWS: u32 = 1;

pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 9999;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Geometry of one month sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLayout {
    pub year: i32,
    /// 1-based month number
    pub month: u32,
    /// Display name, also used as the worksheet name
    pub name: &'static str,
    pub days: u32,
    /// 0-based row index of the first day row
    pub first_row: u32,
}

impl MonthLayout {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        let days = days_in_month(year, month).ok_or(TrackerError::InvalidMonth { year, month })?;
        let name = month_name(month).ok_or(TrackerError::InvalidMonth { year, month })?;

        Ok(MonthLayout {
            year,
            month,
            name,
            days,
            first_row: HEADER_ROWS,
        })
    }

    /// 0-based row index of the last day row
    pub fn last_row(&self) -> u32 {
        self.first_row + self.days - 1
    }

    /// Date shown on the given 1-based day of the month
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Every date of the month paired with its 0-based sheet row
    pub fn rows(&self) -> impl Iterator<Item = (u32, NaiveDate)> + '_ {
        (1..=self.days).filter_map(move |day| {
            self.date(day)
                .map(|date| (self.first_row + day - 1, date))
        })
    }
}

/// One window of the weekly report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    /// 1-based week number
    pub number: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

pub fn validate_year(year: i32) -> Result<()> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(TrackerError::InvalidYear(year))
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`, or `None` for a month outside 1-12
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    if !(1..=MONTHS_PER_YEAR).contains(&month) {
        return None;
    }

    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)?
        .pred_opt()
        .map(|last| last.day())
}

pub fn month_name(month: u32) -> Option<&'static str> {
    month
        .checked_sub(1)
        .and_then(|idx| MONTH_NAMES.get(idx as usize))
        .copied()
}

/// Full English weekday name, e.g. "Monday"
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

/// Layouts for all twelve months of a year
pub fn month_layouts(year: i32) -> Result<Vec<MonthLayout>> {
    validate_year(year)?;
    (1..=MONTHS_PER_YEAR)
        .map(|month| MonthLayout::new(year, month))
        .collect()
}

/// The 52 seven-day windows starting on January 1st
///
/// # Arguments
/// * `year` - Calendar year (1900-9999)
///
/// # Returns
/// * `Result<Vec<Week>>` - Exactly 52 weeks. Week `w` starts on
///   `Jan 1 + 7*(w-1)`. The last one or two days of the year are not covered.
pub fn weeks(year: i32) -> Result<Vec<Week>> {
    validate_year(year)?;
    let jan_first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or(TrackerError::InvalidYear(year))?;

    (1..=WEEKS_PER_YEAR)
        .map(|number| {
            let start = jan_first
                .checked_add_days(Days::new(u64::from(number - 1) * 7))
                .ok_or(TrackerError::InvalidYear(year))?;
            let end = start
                .checked_add_days(Days::new(6))
                .ok_or(TrackerError::InvalidYear(year))?;
            Ok(Week { number, start, end })
        })
        .collect()
}
