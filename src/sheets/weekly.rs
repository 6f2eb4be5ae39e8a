use rust_xlsxwriter::Workbook;

use super::{
    REPORT_PERCENT_COL, WEEKLY_REPORT_SHEET, add_completion_colours, add_goal_note, excel_date,
    write_report_header, write_report_row,
};
use crate::calendar::Week;
use crate::error::Result;
use crate::formula::{Aggregate, MonthRanges, week_formula};
use crate::goals::GoalKind;
use crate::styles::StyleRegistry;

pub const WEEK_START_COL: u16 = REPORT_PERCENT_COL + 1;
pub const WEEK_END_COL: u16 = REPORT_PERCENT_COL + 2;

/// Weekly report: one row per week, each cell summing over all month sheets
pub fn create_weekly_report_sheet(
    workbook: &mut Workbook,
    weeks: &[Week],
    months: &[MonthRanges],
    styles: &StyleRegistry,
) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(WEEKLY_REPORT_SHEET)?;

    write_report_header(sheet, "Week No", styles)?;
    sheet.write_string_with_format(0, WEEK_START_COL, "Week Start", &styles.header)?;
    sheet.write_string_with_format(0, WEEK_END_COL, "Week End", &styles.header)?;
    sheet.set_column_width(WEEK_START_COL, 15)?;
    sheet.set_column_width(WEEK_END_COL, 15)?;
    add_goal_note(sheet, "Weekly goal: linked from Goals sheet")?;

    for week in weeks {
        let row = week.number;
        sheet.write_number(row, 0, week.number)?;

        let aggregates: Vec<String> = Aggregate::ALL
            .iter()
            .map(|aggregate| week_formula(months, week, *aggregate))
            .collect();
        write_report_row(sheet, row, &aggregates, GoalKind::Weekly, styles)?;

        sheet.write_datetime_with_format(row, WEEK_START_COL, &excel_date(week.start)?, &styles.date)?;
        sheet.write_datetime_with_format(row, WEEK_END_COL, &excel_date(week.end)?, &styles.date)?;
    }

    if let Some(last) = weeks.last() {
        add_completion_colours(sheet, 1, last.number, styles)?;
    }

    log::debug!("Wrote {} with {} weeks", WEEKLY_REPORT_SHEET, weeks.len());
    Ok(())
}
