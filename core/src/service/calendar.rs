use chrono::{Datelike, Duration, NaiveDate};
use tracing::debug;

use crate::model::calendar::{CalendarWeek, MonthGrid};
use crate::model::shift::ShiftData;
use crate::parser::ParseError;
use crate::time::{days_in_month, month_from_name};

/// Lay a month's populated days onto Monday-to-Sunday weeks.
///
/// The grid starts on the Monday on or before the first day in `data.dates`
/// and ends on the Sunday on or after the last one. Day keys outside the
/// month are ignored; with none left the grid is empty.
pub fn build_month_grid(data: &ShiftData, month: u32, year: i32) -> MonthGrid {
    let Some(last_day) = days_in_month(year, month) else {
        return MonthGrid::empty(year, month);
    };

    let mut valid = data.dates.keys().copied().filter(|d| (1..=last_day).contains(d));
    let Some(first) = valid.next() else {
        debug!(month, year, "no roster days inside the month, empty grid");
        return MonthGrid::empty(year, month);
    };
    // Keys come from a BTreeMap, so the last valid key is the maximum.
    let last = valid.last().unwrap_or(first);

    let (Some(first_date), Some(last_date)) = (
        NaiveDate::from_ymd_opt(year, month, first),
        NaiveDate::from_ymd_opt(year, month, last),
    ) else {
        return MonthGrid::empty(year, month);
    };

    let lead = Duration::days(first_date.weekday().num_days_from_monday() as i64);
    let tail = Duration::days(6 - last_date.weekday().num_days_from_monday() as i64);
    let (Some(start), Some(end)) = (
        first_date.checked_sub_signed(lead),
        last_date.checked_add_signed(tail),
    ) else {
        return MonthGrid::empty(year, month);
    };

    let days: Vec<NaiveDate> = start.iter_days().take_while(|d| *d <= end).collect();
    let weeks = days
        .chunks_exact(7)
        .filter_map(|chunk| <[NaiveDate; 7]>::try_from(chunk).ok())
        .map(CalendarWeek)
        .collect();

    MonthGrid { year, month, weeks }
}

impl MonthGrid {
    /// Grid for the month and year written in the roster's own header cells.
    pub fn for_shift_data(data: &ShiftData) -> Result<MonthGrid, ParseError> {
        let month =
            month_from_name(&data.month).ok_or_else(|| ParseError::UnknownMonth(data.month.clone()))?;
        let year: i32 = data
            .year
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidYear(data.year.clone()))?;
        Ok(build_month_grid(data, month, year))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn shift_data(days: impl IntoIterator<Item = u32>) -> ShiftData {
        ShiftData {
            dates: days.into_iter().map(|d| (d, i64::from(d))).collect(),
            ..ShiftData::default()
        }
    }

    fn assert_well_formed(grid: &MonthGrid, first: NaiveDate, last: NaiveDate) {
        assert!(!grid.weeks.is_empty());
        let dates: Vec<NaiveDate> = grid.weeks.iter().flat_map(|week| week.0).collect();
        assert_eq!(dates.len(), grid.weeks.len() * 7);
        for pair in dates.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        for week in &grid.weeks {
            assert_eq!(week.first().weekday(), Weekday::Mon);
            assert_eq!(week.last().weekday(), Weekday::Sun);
        }
        assert!(grid.weeks[0].contains(first));
        assert!(grid.weeks[grid.weeks.len() - 1].contains(last));
    }

    #[test]
    fn test_full_months_are_well_formed() {
        for year in 2023..=2026 {
            for month in 1..=12 {
                let last = days_in_month(year, month).unwrap();
                let grid = build_month_grid(&shift_data(1..=last), month, year);
                assert_well_formed(
                    &grid,
                    NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
                    NaiveDate::from_ymd_opt(year, month, last).unwrap(),
                );
            }
        }
    }

    #[test]
    fn test_partial_month() {
        // 2024-10-10 is a Thursday, 2024-10-15 a Tuesday.
        let grid = build_month_grid(&shift_data([10, 12, 15]), 10, 2024);
        assert_eq!(grid.weeks.len(), 2);
        assert_eq!(grid.weeks[0].first(), NaiveDate::from_ymd_opt(2024, 10, 7).unwrap());
        assert_eq!(grid.weeks[1].last(), NaiveDate::from_ymd_opt(2024, 10, 20).unwrap());
    }

    #[test]
    fn test_sunday_edges() {
        // 2024-09-01 and 2024-09-08 are Sundays.
        let grid = build_month_grid(&shift_data([1, 8]), 9, 2024);
        assert_eq!(grid.weeks[0].first(), NaiveDate::from_ymd_opt(2024, 8, 26).unwrap());
        assert_eq!(grid.weeks[1].last(), NaiveDate::from_ymd_opt(2024, 9, 8).unwrap());
        assert!(!grid.is_current_month(grid.weeks[0].first()));
        assert!(grid.is_current_month(grid.weeks[1].last()));
    }

    #[test]
    fn test_days_outside_month_are_ignored() {
        let grid = build_month_grid(&shift_data([0, 30, 31]), 2, 2025);
        assert!(grid.is_empty());
        let grid = build_month_grid(&shift_data([28, 31]), 2, 2025);
        assert_eq!(grid.weeks.len(), 1);
    }

    #[test]
    fn test_empty_and_invalid_month() {
        assert!(build_month_grid(&shift_data(Vec::new()), 5, 2025).is_empty());
        assert!(build_month_grid(&shift_data([1, 2]), 13, 2025).is_empty());
    }

    #[test]
    fn test_for_shift_data() {
        let mut data = shift_data([1, 2, 3]);
        data.month = "March".to_string();
        data.year = "2025".to_string();
        let grid = MonthGrid::for_shift_data(&data).unwrap();
        assert_eq!((grid.year, grid.month), (2025, 3));

        data.month = "Marzo".to_string();
        assert_eq!(
            MonthGrid::for_shift_data(&data).unwrap_err(),
            ParseError::UnknownMonth("Marzo".to_string())
        );

        data.month = "March".to_string();
        data.year = "twenty".to_string();
        assert!(matches!(
            MonthGrid::for_shift_data(&data),
            Err(ParseError::InvalidYear(_))
        ));
    }

    #[test]
    fn test_out_of_range_years_give_empty_grid() {
        let mut data = shift_data([1, 2, 3]);
        data.month = "December".to_string();
        data.year = i32::MAX.to_string();
        assert!(MonthGrid::for_shift_data(&data).unwrap().is_empty());

        data.month = "January".to_string();
        data.year = i32::MIN.to_string();
        assert!(MonthGrid::for_shift_data(&data).unwrap().is_empty());
    }
}
