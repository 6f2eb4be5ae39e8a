use rust_xlsxwriter::Workbook;

use super::{
    MONTHLY_REPORT_SHEET, add_completion_colours, add_goal_note, write_report_header,
    write_report_row,
};
use crate::calendar::MonthLayout;
use crate::error::Result;
use crate::formula::{Aggregate, MonthRanges, month_formula};
use crate::goals::GoalKind;
use crate::styles::StyleRegistry;

/// Monthly report: one row per month sheet, aggregating over its full range
pub fn create_monthly_report_sheet(
    workbook: &mut Workbook,
    layouts: &[MonthLayout],
    styles: &StyleRegistry,
) -> Result<()> {
    let sheet = workbook.add_worksheet();
    sheet.set_name(MONTHLY_REPORT_SHEET)?;

    write_report_header(sheet, "Month Name", styles)?;
    add_goal_note(sheet, "Monthly goal: linked from Goals sheet")?;

    for layout in layouts {
        let row = layout.month;
        let ranges = MonthRanges::new(layout);
        sheet.write_string_with_format(row, 0, layout.name, &styles.centered)?;

        let aggregates: Vec<String> = Aggregate::ALL
            .iter()
            .map(|aggregate| month_formula(&ranges, *aggregate))
            .collect();
        write_report_row(sheet, row, &aggregates, GoalKind::Monthly, styles)?;
    }

    if let Some(last) = layouts.last() {
        add_completion_colours(sheet, 1, last.month, styles)?;
    }

    log::debug!("Wrote {}", MONTHLY_REPORT_SHEET);
    Ok(())
}
