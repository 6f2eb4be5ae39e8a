//! Formula text for the report sheets.
//!
//! Every report cell is built the same way: one sub-expression per month
//! sheet, all from the same template, joined with `+`. Only the ranges (and
//! for the weekly report the date bounds) change from month to month.

use chrono::NaiveDate;

use crate::calendar::{MonthLayout, Week};
use crate::task::{DATE_COL, DESCRIPTION_COL, HOURS_COL, STATUS_COL, Status};

/// Report columns that aggregate over month sheets, in column order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    Total,
    Status(Status),
    Hours,
}

impl Aggregate {
    pub const ALL: [Aggregate; 5] = [
        Aggregate::Total,
        Aggregate::Status(Status::Done),
        Aggregate::Status(Status::Pending),
        Aggregate::Status(Status::Skipped),
        Aggregate::Hours,
    ];
}

/// Convert a 0-based column index to its letter (0 = A, 26 = AA)
pub fn column_letter(col: u16) -> String {
    let mut name = String::new();
    let mut n = u32::from(col) + 1;

    while n > 0 {
        n -= 1;
        name.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }

    name
}

/// Quote a sheet name for use in a reference, doubling embedded quotes
pub fn quote_sheet_name(name: &str) -> String {
    format!("'{}'", name.replace('\'', "''"))
}

/// Absolute single-column range over rows `first_row..=last_row` (0-based)
pub fn absolute_range(sheet: &str, col: u16, first_row: u32, last_row: u32) -> String {
    let letter = column_letter(col);
    format!(
        "{}!${}${}:${}${}",
        quote_sheet_name(sheet),
        letter,
        first_row + 1,
        letter,
        last_row + 1
    )
}

/// The four month-sheet columns the reports aggregate over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthRanges {
    pub date: String,
    pub description: String,
    pub status: String,
    pub hours: String,
}

impl MonthRanges {
    pub fn new(layout: &MonthLayout) -> Self {
        let range = |col| absolute_range(layout.name, col, layout.first_row, layout.last_row());
        MonthRanges {
            date: range(DATE_COL),
            description: range(DESCRIPTION_COL),
            status: range(STATUS_COL),
            hours: range(HOURS_COL),
        }
    }

    /// SUMPRODUCT over the rows whose date falls inside `start..=end`
    pub fn week_part(&self, aggregate: Aggregate, start: NaiveDate, end: NaiveDate) -> String {
        let window = format!(
            "(--({date}>=DATEVALUE(\"{start}\")))*(--({date}<=DATEVALUE(\"{end}\")))",
            date = self.date,
            start = iso_date(start),
            end = iso_date(end),
        );

        match aggregate {
            Aggregate::Total => {
                format!("SUMPRODUCT({}*(LEN({})>0))", window, self.description)
            }
            Aggregate::Status(status) => format!(
                "SUMPRODUCT({}*(LEN({})>0)*({}=\"{}\"))",
                window,
                self.description,
                self.status,
                status.as_str()
            ),
            Aggregate::Hours => format!("SUMPRODUCT({}*(--({}))*1)", window, self.hours),
        }
    }

    /// Aggregate over the whole month
    pub fn month_part(&self, aggregate: Aggregate) -> String {
        match aggregate {
            Aggregate::Total => format!("COUNTIF({},\"<>\")", self.description),
            Aggregate::Status(status) => format!(
                "COUNTIFS({},\"<>\",{},\"{}\")",
                self.description,
                self.status,
                status.as_str()
            ),
            Aggregate::Hours => format!("SUM({})", self.hours),
        }
    }
}

pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// `=` followed by the parts joined with `+`
pub fn sum_formula<I>(parts: I) -> String
where
    I: IntoIterator<Item = String>,
{
    let parts: Vec<String> = parts.into_iter().collect();
    format!("={}", parts.join("+"))
}

/// Weekly report formula for one aggregate, spanning every month sheet
///
/// Each month contributes the same SUMPRODUCT template bounded by the week's
/// start and end dates. Months outside the week simply count zero, so weeks
/// that cross a month boundary need no special case.
///
/// # Arguments
/// * `months` - Ranges of every month sheet, January first
/// * `week` - The seven-day window to count
/// * `aggregate` - Which report column to build
///
/// # Returns
/// * `String` - Formula text starting with `=`, with one term per month
pub fn week_formula(months: &[MonthRanges], week: &Week, aggregate: Aggregate) -> String {
    sum_formula(
        months
            .iter()
            .map(|ranges| ranges.week_part(aggregate, week.start, week.end)),
    )
}

/// Yearly report formula for one aggregate, spanning every month sheet
pub fn year_formula(months: &[MonthRanges], aggregate: Aggregate) -> String {
    sum_formula(months.iter().map(|ranges| ranges.month_part(aggregate)))
}

/// Monthly report formula for one aggregate over a single month sheet
pub fn month_formula(ranges: &MonthRanges, aggregate: Aggregate) -> String {
    format!("={}", ranges.month_part(aggregate))
}

/// Relative A1 address of a 0-based cell, e.g. `(1, 2)` is `C2`
pub fn cell_address(row: u32, col: u16) -> String {
    format!("{}{}", column_letter(col), row + 1)
}

/// `done / goal`, yielding 0 instead of a division error when the goal is 0
pub fn percent_complete(done: &str, goal: &str) -> String {
    format!("=IF({goal}=0,0,{done}/{goal})")
}

/// Plain reference formula, e.g. `=Goals!B2`
pub fn reference(target: &str) -> String {
    format!("={}", target)
}
