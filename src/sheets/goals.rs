use rust_xlsxwriter::Workbook;

use crate::error::Result;
use crate::goals::{GOALS_SHEET, GoalKind, GoalSet, UNIT_ROW};
use crate::styles::StyleRegistry;

/// Goals sheet: one value per goal in column B, referenced by address from
/// every other sheet
pub fn create_goals_sheet(
    workbook: &mut Workbook,
    year: i32,
    goals: &GoalSet,
    styles: &StyleRegistry,
) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(GOALS_SHEET)?;

    sheet.write_string_with_format(0, 0, format!("Goal ({})", goals.unit), &styles.header)?;
    sheet.write_string_with_format(0, 1, "Value", &styles.header)?;

    for kind in GoalKind::ALL {
        sheet.write_string(kind.row(), 0, kind.label())?;
        sheet.write_number(kind.row(), 1, goals.value(kind))?;
    }
    sheet.write_string(UNIT_ROW, 0, "Unit")?;
    sheet.write_string(UNIT_ROW, 1, &goals.unit)?;

    sheet.set_column_width(0, 20)?;
    sheet.set_column_width(1, 12)?;

    sheet.merge_range(0, 3, 0, 6, &format!("Task Tracker {}", year), &styles.title)?;

    log::debug!("Wrote {} sheet", GOALS_SHEET);
    Ok(())
}
