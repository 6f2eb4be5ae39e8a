/// Header row of every month sheet
pub const TASK_HEADERS: [&str; 10] = [
    "Date",
    "Day",
    "Daily Goal",
    "Task Description",
    "Priority",
    "Status",
    "Hours Spent",
    "What Went Well",
    "What I Missed",
    "Notes",
];

pub const TASK_COLUMN_WIDTHS: [f64; 10] = [15.0, 15.0, 12.0, 30.0, 12.0, 15.0, 12.0, 25.0, 25.0, 30.0];

// 0-based month sheet columns
pub const DATE_COL: u16 = 0;
pub const DAY_COL: u16 = 1;
pub const DAILY_GOAL_COL: u16 = 2;
pub const DESCRIPTION_COL: u16 = 3;
pub const PRIORITY_COL: u16 = 4;
pub const STATUS_COL: u16 = 5;
pub const HOURS_COL: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Pending,
    Done,
    Skipped,
}

impl Status {
    /// Dropdown order on the month sheets
    pub const ALL: [Status; 3] = [Status::Pending, Status::Done, Status::Skipped];

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::Done => "Done",
            Status::Skipped => "Skipped",
        }
    }
}
