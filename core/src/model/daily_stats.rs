use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::Named;

/// One person's (or the totals') mistake counts per day of the month.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DailyStatsRow {
    pub name_surname: String,
    pub nickname: String,
    pub total: String,
    pub days: BTreeMap<u32, String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DailyStatsData {
    pub month: String,
    pub year: String,
    /// Day number -> `M/D/YYYY`.
    pub dates: BTreeMap<u32, String>,
    pub weekdays: BTreeMap<u32, String>,
    pub total_row: DailyStatsRow,
    pub rows: Vec<DailyStatsRow>,
}

impl Named for DailyStatsRow {
    fn name_surname(&self) -> &str {
        &self.name_surname
    }
}
