//! Builds a complete tracker workbook for one year.
//!
//! Sheet order is fixed: Goals, the twelve months, then the weekly, monthly
//! and yearly reports. Report formulas address the month sheets by name and
//! the Goals sheet by cell, so both must be laid out before any report is
//! written.

use rust_xlsxwriter::Workbook;
use std::io::{Seek, Write};
use std::path::Path;

use crate::calendar::{month_layouts, validate_year, weeks};
use crate::error::Result;
use crate::formula::MonthRanges;
use crate::goals::GoalSet;
use crate::sheets::{
    create_goals_sheet, create_month_sheet, create_monthly_report_sheet,
    create_weekly_report_sheet, create_yearly_report_sheet,
};
use crate::styles::StyleRegistry;

pub const XLSX_MIME_TYPE: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Download/file name for a year's tracker
pub fn output_filename(year: i32) -> String {
    format!("task_tracker_{}.xlsx", year)
}

/// Lay out every sheet of the tracker without saving it
///
/// Validates the year, then creates the Goals sheet, the twelve month sheets
/// and the weekly, monthly and yearly reports, in that order.
///
/// # Arguments
/// * `year` - Calendar year to lay out (1900-9999)
/// * `goals` - Goal values written to the Goals sheet
///
/// # Returns
/// * `Result<Workbook>` - The unsaved workbook with all 16 sheets, or
///   `TrackerError::InvalidYear` / `TrackerError::Xlsx`
///
/// # Examples
/// ```
/// use task_tracker::{GoalSet, TrackerError, build_workbook};
///
/// assert!(build_workbook(2024, &GoalSet::default()).is_ok());
/// assert!(matches!(
///     build_workbook(1899, &GoalSet::default()),
///     Err(TrackerError::InvalidYear(1899))
/// ));
/// ```
pub fn build_workbook(year: i32, goals: &GoalSet) -> Result<Workbook> {
    validate_year(year)?;
    log::info!("Building task tracker for {}", year);

    let layouts = month_layouts(year)?;
    let weeks = weeks(year)?;
    let styles = StyleRegistry::new();
    let mut workbook = Workbook::new();

    create_goals_sheet(&mut workbook, year, goals, &styles)?;

    for layout in &layouts {
        create_month_sheet(&mut workbook, layout, &styles)?;
    }

    let ranges: Vec<MonthRanges> = layouts.iter().map(MonthRanges::new).collect();
    create_weekly_report_sheet(&mut workbook, &weeks, &ranges, &styles)?;
    create_monthly_report_sheet(&mut workbook, &layouts, &styles)?;
    create_yearly_report_sheet(&mut workbook, year, &ranges, &styles)?;

    Ok(workbook)
}

/// Build the tracker and write it into `sink`
///
/// Save failures are returned as-is. Nothing usable is left in the sink when
/// this errors.
///
/// # Arguments
/// * `year` - Calendar year to lay out (1900-9999)
/// * `goals` - Goal values written to the Goals sheet
/// * `sink` - Any seekable writer, e.g. a `File` or `Cursor<Vec<u8>>`
///
/// # Returns
/// * `Result<()>` - Success, or the validation or write error
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use task_tracker::{GoalSet, generate};
///
/// let mut sink = Cursor::new(Vec::new());
/// generate(2024, &GoalSet::default(), &mut sink).unwrap();
/// assert!(sink.get_ref().starts_with(b"PK"));
/// ```
pub fn generate<W>(year: i32, goals: &GoalSet, sink: &mut W) -> Result<()>
where
    W: Write + Seek + Send,
{
    let mut workbook = build_workbook(year, goals)?;
    workbook.save_to_writer(sink)?;
    log::info!("Task tracker for {} written", year);
    Ok(())
}

pub fn generate_to_buffer(year: i32, goals: &GoalSet) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(year, goals)?;
    let buffer = workbook.save_to_buffer()?;
    log::info!("Task tracker for {} generated ({} bytes)", year, buffer.len());
    Ok(buffer)
}

pub fn generate_to_file(year: i32, goals: &GoalSet, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut workbook = build_workbook(year, goals)?;
    workbook.save(path)?;
    log::info!("Task tracker for {} saved to {}", year, path.display());
    Ok(())
}
