use serde::Serialize;

use crate::model::working_hours::{DayNight, WHRow};
use crate::model::Named;

/// Name the rosters use for section divider rows.
pub const PLACEHOLDER_NAME: &str = "///";

/// One person's day-hours row and, when the roster has one, the night row
/// directly below it.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct WHPair<'a> {
    pub name: &'a str,
    pub day: &'a WHRow,
    pub night: Option<&'a WHRow>,
}

impl WHPair<'_> {
    /// Day plus night total hours; unreadable totals count as zero.
    pub fn combined_total(&self) -> f64 {
        let hours = |row: &WHRow| row.total_hours.trim().parse::<f64>().unwrap_or(0.0);
        hours(self.day) + self.night.map(hours).unwrap_or(0.0)
    }
}

impl Named for WHPair<'_> {
    fn name_surname(&self) -> &str {
        self.name
    }
}

/// Walk the rows in order, pairing each `Day hours` row with an immediately
/// following `Night hours` row. Night rows without a day row are dropped.
pub fn pair_working_hours(rows: &[WHRow]) -> Vec<WHPair<'_>> {
    let mut pairs = Vec::new();
    let mut i = 0;
    while i < rows.len() {
        let day = &rows[i];
        if day.day_night != DayNight::DayHours {
            i += 1;
            continue;
        }

        let night = rows
            .get(i + 1)
            .filter(|next| next.day_night == DayNight::NightHours);
        pairs.push(WHPair {
            name: &day.name_surname,
            day,
            night,
        });
        i += if night.is_some() { 2 } else { 1 };
    }
    pairs
}

pub fn is_placeholder_name(name: &str) -> bool {
    let name = name.trim();
    name.is_empty() || name == PLACEHOLDER_NAME
}

/// Drop divider and nameless rows.
pub fn drop_placeholders<T: Named>(rows: Vec<T>) -> Vec<T> {
    rows.into_iter()
        .filter(|row| !is_placeholder_name(row.name_surname()))
        .collect()
}

/// Keep only rows whose name equals `full_name`, ignoring case.
pub fn filter_by_person<T: Named>(rows: Vec<T>, full_name: &str) -> Vec<T> {
    let wanted = full_name.trim().to_lowercase();
    rows.into_iter()
        .filter(|row| row.name_surname().trim().to_lowercase() == wanted)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::shift::ShiftRow;
    use std::collections::BTreeMap;

    fn wh(name: &str, day_night: DayNight, total: &str) -> WHRow {
        WHRow {
            name_surname: name.to_string(),
            day_night,
            hours: BTreeMap::new(),
            total_hours: total.to_string(),
            sum: String::new(),
            holiday: String::new(),
        }
    }

    fn shift(name: &str) -> ShiftRow {
        ShiftRow {
            name_surname: name.to_string(),
            ..ShiftRow::default()
        }
    }

    #[test]
    fn test_pairing() {
        let rows = vec![
            wh("A", DayNight::DayHours, "10"),
            wh("", DayNight::NightHours, "4.5"),
            wh("B", DayNight::DayHours, "8"),
        ];
        let pairs = pair_working_hours(&rows);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].name, "A");
        assert_eq!(pairs[0].night, Some(&rows[1]));
        assert_eq!(pairs[1].name, "B");
        assert_eq!(pairs[1].night, None);
        assert_eq!(pairs[0].combined_total(), 14.5);
        assert_eq!(pairs[1].combined_total(), 8.0);
    }

    #[test]
    fn test_orphan_night_and_consecutive_days() {
        let rows = vec![
            wh("A", DayNight::NightHours, "1"),
            wh("A", DayNight::DayHours, "2"),
            wh("B", DayNight::DayHours, "x"),
            wh("B", DayNight::NightHours, "3"),
        ];
        let pairs = pair_working_hours(&rows);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].night, None);
        assert_eq!(pairs[1].night, Some(&rows[3]));
        assert_eq!(pairs[1].combined_total(), 3.0);
    }

    #[test]
    fn test_drop_placeholders_is_idempotent() {
        let rows = vec![shift("Ana"), shift("///"), shift("  "), shift("Bo"), shift(" /// ")];
        let once = drop_placeholders(rows);
        assert_eq!(once.len(), 2);
        let twice = drop_placeholders(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_by_person_is_exact() {
        let rows = vec![shift("Ana Lee"), shift("Anabel Lee"), shift("ana lee "), shift("Bo")];
        let mine = filter_by_person(rows, "ANA LEE");
        assert_eq!(mine.len(), 2);
        assert!(mine.iter().all(|r| r.name_surname.trim().eq_ignore_ascii_case("ana lee")));
    }

    #[test]
    fn test_pairs_filter_like_rows() {
        let rows = vec![
            wh("Ana Lee", DayNight::DayHours, "1"),
            wh("Ana Lee", DayNight::NightHours, "1"),
            wh("Bo", DayNight::DayHours, "1"),
        ];
        let pairs = filter_by_person(pair_working_hours(&rows), "ana lee");
        assert_eq!(pairs.len(), 1);
        assert!(pairs[0].night.is_some());
    }
}
