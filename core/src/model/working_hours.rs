use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::model::Named;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayNight {
    #[serde(rename = "Day hours")]
    DayHours,
    #[serde(rename = "Night hours")]
    NightHours,
}

impl DayNight {
    /// Exact match on the roster's label; anything else is not an hours row.
    pub fn from_cell(cell: &str) -> Option<Self> {
        match cell.trim() {
            "Day hours" => Some(DayNight::DayHours),
            "Night hours" => Some(DayNight::NightHours),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayNight::DayHours => "Day hours",
            DayNight::NightHours => "Night hours",
        }
    }
}

impl fmt::Display for DayNight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which of the two working-hours exports a file follows.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WHLayout {
    /// Summary columns found by their header text; a `Sum` column is present.
    Labelled,
    /// Summary columns are the last three, read by position.
    #[default]
    Trailing,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WHRow {
    pub name_surname: String,
    pub day_night: DayNight,
    pub hours: BTreeMap<u32, String>,
    pub total_hours: String,
    pub sum: String,
    pub holiday: String,
}

impl WHRow {
    pub fn hours_on(&self, day: u32) -> &str {
        self.hours.get(&day).map(String::as_str).unwrap_or("")
    }
}

impl Named for WHRow {
    fn name_surname(&self) -> &str {
        &self.name_surname
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct WHData {
    pub month: String,
    pub year: String,
    pub dates: BTreeMap<u32, i64>,
    pub weekdays: BTreeMap<u32, String>,
    pub layout: WHLayout,
    pub rows: Vec<WHRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_night_from_cell() {
        assert_eq!(DayNight::from_cell("Day hours"), Some(DayNight::DayHours));
        assert_eq!(DayNight::from_cell(" Night hours "), Some(DayNight::NightHours));
        assert_eq!(DayNight::from_cell("day hours"), None);
        assert_eq!(DayNight::from_cell(""), None);
    }

    #[test]
    fn test_day_night_serializes_as_label() {
        let json = serde_json::to_string(&DayNight::NightHours).unwrap();
        assert_eq!(json, "\"Night hours\"");
    }
}
