use calamine::{Data, Range, Reader, Xlsx, open_workbook_from_rs};
use chrono::{Datelike, NaiveDate, Weekday};
use std::io::{self, Cursor, Seek, SeekFrom, Write};

use task_tracker::{GoalSet, TrackerError, generate, generate_to_buffer, generate_to_file};

type Book = Xlsx<Cursor<Vec<u8>>>;

const MONTHS: [&str; 12] = [
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

fn open(year: i32, goals: &GoalSet) -> Book {
    let bytes = generate_to_buffer(year, goals).unwrap();
    open_workbook_from_rs(Cursor::new(bytes)).unwrap()
}

fn values(book: &mut Book, sheet: &str) -> Range<Data> {
    book.worksheet_range(sheet).unwrap()
}

fn formulas(book: &mut Book, sheet: &str) -> Range<String> {
    book.worksheet_formula(sheet).unwrap()
}

fn formula_at(range: &Range<String>, row: u32, col: u32) -> String {
    range.get_value((row, col)).cloned().unwrap_or_default()
}

fn text_at(range: &Range<Data>, row: u32, col: u32) -> Option<String> {
    match range.get_value((row, col)) {
        Some(Data::String(s)) => Some(s.clone()),
        _ => None,
    }
}

fn number_at(range: &Range<Data>, row: u32, col: u32) -> Option<f64> {
    match range.get_value((row, col)) {
        Some(Data::Float(f)) => Some(*f),
        Some(Data::Int(i)) => Some(*i as f64),
        Some(Data::DateTime(dt)) => Some(dt.as_f64()),
        _ => None,
    }
}

/// Number of day rows on a month sheet, counted by filled-in weekday names
fn day_rows(range: &Range<Data>) -> u32 {
    (1..=40).filter(|row| text_at(range, *row, 1).is_some()).count() as u32
}

fn excel_serial(date: NaiveDate) -> f64 {
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
    (date - epoch).num_days() as f64
}

fn english_weekday(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Sheet names quoted inside a formula, e.g. `'March'!$A$2` yields `March`
fn quoted_sheet_refs(formula: &str) -> Vec<String> {
    let chunks: Vec<&str> = formula.split("'!").collect();
    chunks[..chunks.len().saturating_sub(1)]
        .iter()
        .filter_map(|chunk| chunk.rfind('\'').map(|idx| chunk[idx + 1..].to_string()))
        .collect()
}

#[test]
fn workbook_has_sixteen_sheets_in_order() {
    let book = open(2024, &GoalSet::default());

    let mut expected = vec!["Goals".to_string()];
    expected.extend(MONTHS.iter().map(|m| m.to_string()));
    expected.extend(
        ["Weekly Report", "Monthly Report", "Yearly Report"]
            .iter()
            .map(|s| s.to_string()),
    );

    assert_eq!(book.sheet_names(), expected);
}

#[test]
fn february_rows_follow_leap_years() {
    let mut leap = open(2024, &GoalSet::default());
    assert_eq!(day_rows(&values(&mut leap, "February")), 29);

    let mut common = open(2023, &GoalSet::default());
    assert_eq!(day_rows(&values(&mut common, "February")), 28);
}

#[test]
fn every_month_has_one_row_per_day() {
    let mut book = open(2023, &GoalSet::default());
    let expected = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

    for (month, days) in MONTHS.iter().zip(expected) {
        let range = values(&mut book, month);
        assert_eq!(day_rows(&range), days, "{}", month);
        assert_eq!(text_at(&range, 0, 0).as_deref(), Some("Date"));
        assert_eq!(text_at(&range, 0, 9).as_deref(), Some("Notes"));
    }
}

#[test]
fn weekday_names_match_their_dates() {
    let mut book = open(2024, &GoalSet::default());

    for (idx, month) in MONTHS.iter().enumerate() {
        let range = values(&mut book, month);
        for row in 1..=day_rows(&range) {
            let date = NaiveDate::from_ymd_opt(2024, idx as u32 + 1, row).unwrap();
            assert_eq!(number_at(&range, row, 0), Some(excel_serial(date)), "{} {}", month, row);
            assert_eq!(
                text_at(&range, row, 1).as_deref(),
                Some(english_weekday(date.weekday())),
                "{} {}",
                month,
                row
            );
        }
    }
}

#[test]
fn goals_sheet_holds_the_configured_values() {
    let mut book = open(2024, &GoalSet::default());
    let goals = values(&mut book, "Goals");
    assert_eq!(text_at(&goals, 0, 0).as_deref(), Some("Goal (Tasks)"));
    assert_eq!(number_at(&goals, 1, 1), Some(2.0));
    assert_eq!(number_at(&goals, 2, 1), Some(20.0));
    assert_eq!(number_at(&goals, 3, 1), Some(80.0));
    assert_eq!(number_at(&goals, 4, 1), Some(1000.0));
    assert_eq!(text_at(&goals, 5, 1).as_deref(), Some("Tasks"));

    let custom = GoalSet {
        weekly: 35,
        unit: "Items".to_string(),
        ..GoalSet::default()
    };
    let mut book = open(2024, &custom);
    let goals = values(&mut book, "Goals");
    assert_eq!(text_at(&goals, 0, 0).as_deref(), Some("Goal (Items)"));
    assert_eq!(number_at(&goals, 1, 1), Some(5.0));
    assert_eq!(number_at(&goals, 2, 1), Some(35.0));
    assert_eq!(text_at(&goals, 5, 1).as_deref(), Some("Items"));
}

#[test]
fn goal_columns_link_to_the_goals_sheet() {
    let mut book = open(2024, &GoalSet::default());

    for month in MONTHS {
        let range = formulas(&mut book, month);
        assert_eq!(formula_at(&range, 1, 2), "Goals!B2", "{}", month);
    }

    let weekly = formulas(&mut book, "Weekly Report");
    for row in 1..=52 {
        assert_eq!(formula_at(&weekly, row, 6), "Goals!B3");
    }

    let monthly = formulas(&mut book, "Monthly Report");
    for row in 1..=12 {
        assert_eq!(formula_at(&monthly, row, 6), "Goals!B4");
    }

    let yearly = formulas(&mut book, "Yearly Report");
    assert_eq!(formula_at(&yearly, 1, 6), "Goals!B5");
}

#[test]
fn completion_percentage_guards_a_zero_goal() {
    let mut book = open(2024, &GoalSet::default());

    let weekly = formulas(&mut book, "Weekly Report");
    assert_eq!(formula_at(&weekly, 1, 7), "IF(G2=0,0,C2/G2)");
    assert_eq!(formula_at(&weekly, 52, 7), "IF(G53=0,0,C53/G53)");

    let monthly = formulas(&mut book, "Monthly Report");
    assert_eq!(formula_at(&monthly, 12, 7), "IF(G13=0,0,C13/G13)");

    let yearly = formulas(&mut book, "Yearly Report");
    assert_eq!(formula_at(&yearly, 1, 7), "IF(G2=0,0,C2/G2)");
}

#[test]
fn weekly_report_has_fifty_two_windows_from_january_first() {
    let mut book = open(2023, &GoalSet::default());
    let range = values(&mut book, "Weekly Report");
    let jan_first = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();

    for week in 1..=52u32 {
        assert_eq!(number_at(&range, week, 0), Some(f64::from(week)));
        let start = jan_first + chrono::Duration::days(i64::from(week - 1) * 7);
        let end = start + chrono::Duration::days(6);
        assert_eq!(number_at(&range, week, 8), Some(excel_serial(start)));
        assert_eq!(number_at(&range, week, 9), Some(excel_serial(end)));
    }
    assert_eq!(number_at(&range, 53, 0), None);

    let weekly = formulas(&mut book, "Weekly Report");
    let total = formula_at(&weekly, 1, 1);
    assert_eq!(total.matches("SUMPRODUCT(").count(), 12);
    assert!(total.contains("DATEVALUE(\"2023-01-01\")"));
    assert!(total.contains("DATEVALUE(\"2023-01-07\")"));
    assert!(formula_at(&weekly, 1, 2).contains("=\"Done\""));
    assert!(formula_at(&weekly, 1, 3).contains("=\"Pending\""));
    assert!(formula_at(&weekly, 1, 4).contains("=\"Skipped\""));
    assert!(formula_at(&weekly, 1, 5).contains("(--('January'!$G$2:$G$32))*1"));
}

#[test]
fn monthly_and_yearly_reports_count_by_status() {
    let mut book = open(2023, &GoalSet::default());

    let monthly = formulas(&mut book, "Monthly Report");
    assert_eq!(formula_at(&monthly, 2, 1), "COUNTIF('February'!$D$2:$D$29,\"<>\")");
    assert_eq!(
        formula_at(&monthly, 2, 2),
        "COUNTIFS('February'!$D$2:$D$29,\"<>\",'February'!$F$2:$F$29,\"Done\")"
    );
    assert_eq!(
        formula_at(&monthly, 2, 3),
        "COUNTIFS('February'!$D$2:$D$29,\"<>\",'February'!$F$2:$F$29,\"Pending\")"
    );
    assert_eq!(
        formula_at(&monthly, 2, 4),
        "COUNTIFS('February'!$D$2:$D$29,\"<>\",'February'!$F$2:$F$29,\"Skipped\")"
    );
    assert_eq!(formula_at(&monthly, 2, 5), "SUM('February'!$G$2:$G$29)");

    let names = values(&mut book, "Monthly Report");
    assert_eq!(text_at(&names, 1, 0).as_deref(), Some("January"));
    assert_eq!(text_at(&names, 12, 0).as_deref(), Some("December"));

    let yearly = formulas(&mut book, "Yearly Report");
    let done = formula_at(&yearly, 1, 2);
    assert_eq!(done.matches("COUNTIFS(").count(), 12);
    assert!(done.starts_with("COUNTIFS('January'!$D$2:$D$32,\"<>\",'January'!$F$2:$F$32,\"Done\")+"));

    let year = values(&mut book, "Yearly Report");
    assert_eq!(number_at(&year, 1, 0), Some(2023.0));
}

#[test]
fn formula_sheet_names_match_created_sheets() {
    let mut book = open(2024, &GoalSet::default());
    let sheets = book.sheet_names();

    for report in ["Weekly Report", "Monthly Report", "Yearly Report"] {
        let range = formulas(&mut book, report);
        for (_, _, formula) in range.cells() {
            for name in quoted_sheet_refs(formula) {
                assert!(sheets.contains(&name), "{} references unknown sheet {}", report, name);
            }
        }
    }
}

#[test]
fn generate_writes_into_any_seekable_sink() {
    let mut sink = Cursor::new(Vec::new());
    generate(2025, &GoalSet::default(), &mut sink).unwrap();

    let bytes = sink.into_inner();
    assert!(bytes.starts_with(b"PK"));
    let book: Book = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
    assert_eq!(book.sheet_names().len(), 16);
}

#[test]
fn generate_to_file_saves_a_workbook() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("task_tracker_2024.xlsx");

    generate_to_file(2024, &GoalSet::default(), &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn unsupported_years_are_rejected() {
    assert!(matches!(
        generate_to_buffer(1850, &GoalSet::default()),
        Err(TrackerError::InvalidYear(1850))
    ));

    let mut sink = Cursor::new(Vec::new());
    assert!(matches!(
        generate(12000, &GoalSet::default(), &mut sink),
        Err(TrackerError::InvalidYear(12000))
    ));
    assert!(sink.into_inner().is_empty());
}

/// Sink that refuses every write, like a full disk
struct FullDisk;

impl Write for FullDisk {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Seek for FullDisk {
    fn seek(&mut self, _pos: SeekFrom) -> io::Result<u64> {
        Ok(0)
    }
}

#[test]
fn sink_write_failures_reach_the_caller() {
    let result = generate(2024, &GoalSet::default(), &mut FullDisk);
    assert!(matches!(result, Err(TrackerError::Xlsx(_))));
}
