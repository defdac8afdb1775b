use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Seven consecutive dates, Monday first.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarWeek(pub [NaiveDate; 7]);

impl CalendarWeek {
    pub fn days(&self) -> &[NaiveDate; 7] {
        &self.0
    }

    pub fn first(&self) -> NaiveDate {
        self.0[0]
    }

    pub fn last(&self) -> NaiveDate {
        self.0[6]
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.first() <= date && date <= self.last()
    }
}

/// Whole weeks covering the populated days of one month. Cells outside
/// `month` are padding and carry no roster data.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<CalendarWeek>,
}

impl MonthGrid {
    pub fn empty(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            weeks: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    pub fn is_current_month(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}
