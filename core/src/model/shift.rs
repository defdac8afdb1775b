use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::Named;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ShiftRow {
    pub name_surname: String,
    pub shifts: BTreeMap<u32, String>,
    pub total_shifts: String,
    pub day_shifts: String,
    pub night_shifts: String,
    pub by_call: String,
}

impl ShiftRow {
    /// Shift code for a day, empty when the roster has none.
    pub fn shift_on(&self, day: u32) -> &str {
        self.shifts.get(&day).map(String::as_str).unwrap_or("")
    }
}

impl Named for ShiftRow {
    fn name_surname(&self) -> &str {
        &self.name_surname
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ShiftData {
    pub month: String,
    pub year: String,
    pub dates: BTreeMap<u32, i64>,
    pub weekdays: BTreeMap<u32, String>,
    pub rows: Vec<ShiftRow>,
}
