use rust_xlsxwriter::Workbook;

use super::{YEARLY_REPORT_SHEET, add_completion_colours, write_report_header, write_report_row};
use crate::error::Result;
use crate::formula::{Aggregate, MonthRanges, year_formula};
use crate::goals::GoalKind;
use crate::styles::StyleRegistry;

const YEAR_ROW: u32 = 1;

/// Yearly report: a single row summing every month sheet
pub fn create_yearly_report_sheet(
    workbook: &mut Workbook,
    year: i32,
    months: &[MonthRanges],
    styles: &StyleRegistry,
) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(YEARLY_REPORT_SHEET)?;

    write_report_header(sheet, "Year", styles)?;
    sheet.write_number(YEAR_ROW, 0, year)?;

    let aggregates: Vec<String> = Aggregate::ALL
        .iter()
        .map(|aggregate| year_formula(months, *aggregate))
        .collect();
    write_report_row(sheet, YEAR_ROW, &aggregates, GoalKind::Yearly, styles)?;
    add_completion_colours(sheet, YEAR_ROW, YEAR_ROW, styles)?;

    log::debug!("Wrote {}", YEARLY_REPORT_SHEET);
    Ok(())
}
