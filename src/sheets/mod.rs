//! Worksheet emitters, one module per kind of sheet

mod goals;
mod month;
mod monthly;
mod weekly;
mod yearly;

pub use goals::create_goals_sheet;
pub use month::create_month_sheet;
pub use monthly::create_monthly_report_sheet;
pub use weekly::create_weekly_report_sheet;
pub use yearly::create_yearly_report_sheet;

use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{
    ConditionalFormatCell, ConditionalFormatCellRule, ExcelDateTime, Formula, Note, Worksheet,
};

use crate::error::Result;
use crate::formula::{cell_address, percent_complete, reference};
use crate::goals::GoalKind;
use crate::styles::StyleRegistry;

pub const WEEKLY_REPORT_SHEET: &str = "Weekly Report";
pub const MONTHLY_REPORT_SHEET: &str = "Monthly Report";
pub const YEARLY_REPORT_SHEET: &str = "Yearly Report";

/// Columns after the first on every report sheet
pub const REPORT_HEADERS: [&str; 7] = [
    "Total Tasks",
    "Done",
    "Pending",
    "Skipped",
    "Total Hours",
    "Goal",
    "% Complete",
];

// 0-based report columns
pub const REPORT_FIRST_AGGREGATE_COL: u16 = 1;
pub const REPORT_DONE_COL: u16 = 2;
pub const REPORT_HOURS_COL: u16 = 5;
pub const REPORT_GOAL_COL: u16 = 6;
pub const REPORT_PERCENT_COL: u16 = 7;

const REPORT_COLUMN_WIDTH: f64 = 15.0;

/// Header row shared by the three report sheets. `first` names column A.
fn write_report_header(sheet: &mut Worksheet, first: &str, styles: &StyleRegistry) -> Result<()> {
    sheet.write_string_with_format(0, 0, first, &styles.header)?;
    for (idx, header) in REPORT_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, idx as u16 + 1, *header, &styles.header)?;
    }
    for col in 0..=REPORT_PERCENT_COL {
        sheet.set_column_width(col, REPORT_COLUMN_WIDTH)?;
    }
    Ok(())
}

fn add_goal_note(sheet: &mut Worksheet, text: &str) -> Result<()> {
    sheet.insert_note(0, REPORT_GOAL_COL, &Note::new(text))?;
    Ok(())
}

/// Write the aggregate formulas, goal link and completion percentage of one
/// report row. `aggregates` follows [`crate::formula::Aggregate::ALL`].
fn write_report_row(
    sheet: &mut Worksheet,
    row: u32,
    aggregates: &[String],
    goal: GoalKind,
    styles: &StyleRegistry,
) -> Result<()> {
    for (idx, formula) in aggregates.iter().enumerate() {
        let col = REPORT_FIRST_AGGREGATE_COL + idx as u16;
        let format = if col == REPORT_HOURS_COL {
            &styles.time
        } else {
            &styles.centered
        };
        sheet.write_formula_with_format(row, col, Formula::new(formula), format)?;
    }

    sheet.write_formula_with_format(
        row,
        REPORT_GOAL_COL,
        Formula::new(reference(&goal.cell_ref())),
        &styles.centered,
    )?;

    let done = cell_address(row, REPORT_DONE_COL);
    let target = cell_address(row, REPORT_GOAL_COL);
    sheet.write_formula_with_format(
        row,
        REPORT_PERCENT_COL,
        Formula::new(percent_complete(&done, &target)),
        &styles.percent,
    )?;

    Ok(())
}

/// Green at or above 100%, amber below
fn add_completion_colours(
    sheet: &mut Worksheet,
    first_row: u32,
    last_row: u32,
    styles: &StyleRegistry,
) -> Result<()> {
    sheet.add_conditional_format(
        first_row,
        REPORT_PERCENT_COL,
        last_row,
        REPORT_PERCENT_COL,
        &ConditionalFormatCell::new()
            .set_rule(ConditionalFormatCellRule::GreaterThanOrEqualTo(1.0))
            .set_format(&styles.done),
    )?;
    sheet.add_conditional_format(
        first_row,
        REPORT_PERCENT_COL,
        last_row,
        REPORT_PERCENT_COL,
        &ConditionalFormatCell::new()
            .set_rule(ConditionalFormatCellRule::LessThan(1.0))
            .set_format(&styles.pending),
    )?;
    Ok(())
}

fn excel_date(date: NaiveDate) -> Result<ExcelDateTime> {
    Ok(ExcelDateTime::from_ymd(
        date.year() as u16,
        date.month() as u8,
        date.day() as u8,
    )?)
}
