use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::model::Named;

/// Severity bucket of an error code, taken from its leading digit.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MistakeCategory {
    One,
    Two,
    Three,
    Four,
    Other,
}

impl MistakeCategory {
    pub const ALL: [MistakeCategory; 5] = [
        MistakeCategory::One,
        MistakeCategory::Two,
        MistakeCategory::Three,
        MistakeCategory::Four,
        MistakeCategory::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MistakeCategory::One => "Category 1",
            MistakeCategory::Two => "Category 2",
            MistakeCategory::Three => "Category 3",
            MistakeCategory::Four => "Category 4",
            MistakeCategory::Other => "Other",
        }
    }
}

impl fmt::Display for MistakeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error codes partitioned by category, each list in header order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MistakeCategories {
    pub category1: Vec<String>,
    pub category2: Vec<String>,
    pub category3: Vec<String>,
    pub category4: Vec<String>,
    /// Codes starting with 5, plus codes without a leading 1-5 digit.
    pub category_other: Vec<String>,
}

impl MistakeCategories {
    pub fn push(&mut self, category: Option<MistakeCategory>, code: String) {
        match category {
            Some(MistakeCategory::One) => self.category1.push(code),
            Some(MistakeCategory::Two) => self.category2.push(code),
            Some(MistakeCategory::Three) => self.category3.push(code),
            Some(MistakeCategory::Four) => self.category4.push(code),
            Some(MistakeCategory::Other) | None => self.category_other.push(code),
        }
    }

    pub fn codes(&self, category: MistakeCategory) -> &[String] {
        match category {
            MistakeCategory::One => &self.category1,
            MistakeCategory::Two => &self.category2,
            MistakeCategory::Three => &self.category3,
            MistakeCategory::Four => &self.category4,
            MistakeCategory::Other => &self.category_other,
        }
    }

    /// Non-empty categories in display order.
    pub fn iter(&self) -> impl Iterator<Item = (MistakeCategory, &[String])> + '_ {
        MistakeCategory::ALL
            .into_iter()
            .map(|category| (category, self.codes(category)))
            .filter(|(_, codes)| !codes.is_empty())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MistakeStatsRow {
    pub name_surname: String,
    pub nickname: String,
    pub total: String,
    pub mistakes: BTreeMap<String, String>,
}

impl MistakeStatsRow {
    pub fn count(&self, code: &str) -> &str {
        self.mistakes.get(code).map(String::as_str).unwrap_or("")
    }
}

impl Named for MistakeStatsRow {
    fn name_surname(&self) -> &str {
        &self.name_surname
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MistakeStatsData {
    pub month: String,
    pub year: String,
    /// Codes in header order.
    pub codes: Vec<String>,
    pub error_codes: BTreeMap<String, String>,
    pub categories: MistakeCategories,
    pub total_row: MistakeStatsRow,
    pub rows: Vec<MistakeStatsRow>,
}

impl MistakeStatsData {
    pub fn description(&self, code: &str) -> &str {
        self.error_codes.get(code).map(String::as_str).unwrap_or("")
    }
}
