use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Name of the sheet holding the goal values
pub const GOALS_SHEET: &str = "Goals";

/// Task targets written to the Goals sheet
///
/// The daily goal is never stored: it is always `weekly / 7`, rounded down.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GoalSet {
    pub weekly: u32,
    pub monthly: u32,
    pub yearly: u32,
    pub unit: String,
}

impl Default for GoalSet {
    fn default() -> Self {
        GoalSet {
            weekly: 20,
            monthly: 80,
            yearly: 1000,
            unit: "Tasks".to_string(),
        }
    }
}

impl GoalSet {
    pub fn daily(&self) -> u32 {
        self.weekly / 7
    }

    pub fn value(&self, kind: GoalKind) -> u32 {
        match kind {
            GoalKind::Daily => self.daily(),
            GoalKind::Weekly => self.weekly,
            GoalKind::Monthly => self.monthly,
            GoalKind::Yearly => self.yearly,
        }
    }

    /// Parse goal overrides from TOML; omitted keys keep their defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let source = fs::read_to_string(path)?;
        Self::from_toml_str(&source)
    }
}

/// The four goal rows of the Goals sheet, in sheet order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalKind {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl GoalKind {
    pub const ALL: [GoalKind; 4] = [
        GoalKind::Daily,
        GoalKind::Weekly,
        GoalKind::Monthly,
        GoalKind::Yearly,
    ];

    pub fn label(self) -> &'static str {
        match self {
            GoalKind::Daily => "Daily",
            GoalKind::Weekly => "Weekly",
            GoalKind::Monthly => "Monthly",
            GoalKind::Yearly => "Yearly",
        }
    }

    /// 0-based row on the Goals sheet; the value sits in column B
    pub fn row(self) -> u32 {
        match self {
            GoalKind::Daily => 1,
            GoalKind::Weekly => 2,
            GoalKind::Monthly => 3,
            GoalKind::Yearly => 4,
        }
    }

    /// Cross-sheet reference to the goal value, e.g. `Goals!B3`.
    /// Every formula that needs a goal goes through here so the Goals
    /// layout and its references cannot drift apart.
    pub fn cell_ref(self) -> String {
        format!("{}!B{}", GOALS_SHEET, self.row() + 1)
    }
}

/// Row holding the unit label, directly below the yearly goal
pub const UNIT_ROW: u32 = 5;
