use rust_xlsxwriter::{
    ConditionalFormatText, ConditionalFormatTextRule, DataValidation, Format, Formula, Workbook,
    Worksheet,
};

use super::excel_date;
use crate::calendar::{MonthLayout, weekday_name};
use crate::error::Result;
use crate::formula::reference;
use crate::goals::GoalKind;
use crate::styles::StyleRegistry;
use crate::task::{
    DAILY_GOAL_COL, DATE_COL, DAY_COL, DESCRIPTION_COL, HOURS_COL, PRIORITY_COL, Priority,
    STATUS_COL, Status, TASK_COLUMN_WIDTHS, TASK_HEADERS,
};

/// Month sheet: a header row and one empty task row per calendar day
pub fn create_month_sheet(
    workbook: &mut Workbook,
    layout: &MonthLayout,
    styles: &StyleRegistry,
) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(layout.name)?;

    for (col, header) in TASK_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &styles.header)?;
    }
    for (col, width) in TASK_COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }

    let daily_goal = reference(&GoalKind::Daily.cell_ref());
    for (row, date) in layout.rows() {
        sheet.write_datetime_with_format(row, DATE_COL, &excel_date(date)?, &styles.date)?;
        sheet.write_string_with_format(row, DAY_COL, weekday_name(date), &styles.centered)?;
        sheet.write_formula_with_format(row, DAILY_GOAL_COL, Formula::new(&daily_goal), &styles.centered)?;

        for col in DESCRIPTION_COL..TASK_HEADERS.len() as u16 {
            let format = if col == HOURS_COL { &styles.time } else { &styles.centered };
            sheet.write_blank(row, col, format)?;
        }
    }

    let (first, last) = (layout.first_row, layout.last_row());

    let priorities: Vec<&str> = Priority::ALL.iter().map(|p| p.as_str()).collect();
    let statuses: Vec<&str> = Status::ALL.iter().map(|s| s.as_str()).collect();
    sheet.add_data_validation(
        first,
        PRIORITY_COL,
        last,
        PRIORITY_COL,
        &DataValidation::new().allow_list_strings(&priorities)?,
    )?;
    sheet.add_data_validation(
        first,
        STATUS_COL,
        last,
        STATUS_COL,
        &DataValidation::new().allow_list_strings(&statuses)?,
    )?;

    let priority_colours = [
        (Priority::High, &styles.high),
        (Priority::Medium, &styles.medium),
        (Priority::Low, &styles.low),
    ];
    for (priority, format) in priority_colours {
        highlight_text(sheet, first, last, PRIORITY_COL, priority.as_str(), format)?;
    }

    let status_colours = [
        (Status::Done, &styles.done),
        (Status::Pending, &styles.pending),
        (Status::Skipped, &styles.skipped),
    ];
    for (status, format) in status_colours {
        highlight_text(sheet, first, last, STATUS_COL, status.as_str(), format)?;
    }

    log::debug!("Wrote {} sheet with {} day rows", layout.name, layout.days);
    Ok(())
}

fn highlight_text(
    sheet: &mut Worksheet,
    first_row: u32,
    last_row: u32,
    col: u16,
    text: &str,
    format: &Format,
) -> Result<()> {
    sheet.add_conditional_format(
        first_row,
        col,
        last_row,
        col,
        &ConditionalFormatText::new()
            .set_rule(ConditionalFormatTextRule::Contains(text.to_string()))
            .set_format(format),
    )?;
    Ok(())
}
