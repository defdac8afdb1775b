use std::collections::BTreeMap;

use tracing::debug;

use crate::csv::tokenize;
use crate::model::file_type::FileShape;
use crate::model::working_hours::{DayNight, WHData, WHLayout, WHRow};
use crate::parser::layout::{
    SheetLayout, WH_DATE_ROW, WH_DAY_NIGHT_COL, WH_LABELLED, WH_MAX_DAY, WH_TRAILING,
    WH_WEEKDAY_ROW,
};
use crate::parser::{cell, ParseError, Sheet};
use crate::time::parse_leading_int;

/// Where the three summary cells of an hours row live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SummaryColumns {
    total_hours: Option<usize>,
    sum: Option<usize>,
    holiday: Option<usize>,
}

/// A header cell reading `sum` marks the labelled export.
pub fn detect_layout(header: &[String]) -> WHLayout {
    if header.iter().any(|h| h.trim().eq_ignore_ascii_case("sum")) {
        WHLayout::Labelled
    } else {
        WHLayout::Trailing
    }
}

fn sheet_layout(layout: WHLayout) -> SheetLayout {
    match layout {
        WHLayout::Labelled => WH_LABELLED,
        WHLayout::Trailing => WH_TRAILING,
    }
}

fn summary_columns(layout: WHLayout, header: &[String]) -> SummaryColumns {
    match layout {
        WHLayout::Labelled => {
            let find = |pred: &dyn Fn(&str) -> bool| {
                header.iter().position(|h| pred(&h.to_lowercase()))
            };
            SummaryColumns {
                total_hours: find(&|h: &str| h.contains("total")),
                sum: find(&|h: &str| h.trim() == "sum"),
                holiday: find(&|h: &str| h.contains("holiday")),
            }
        }
        WHLayout::Trailing => {
            let start = WH_TRAILING.summary_start(header.len());
            SummaryColumns {
                total_hours: start,
                sum: start.map(|s| s + 1),
                holiday: start.map(|s| s + 2),
            }
        }
    }
}

fn wh_day(header: &str) -> Option<u32> {
    parse_leading_int(header)
        .filter(|n| (1..=WH_MAX_DAY).contains(n))
        .map(|n| n as u32)
}

pub fn parse_wh_data_csv(text: &str) -> Result<WHData, ParseError> {
    parse_wh_data(&tokenize(text))
}

/// Decode a Dealer_WH or SM_WH export.
///
/// Only rows labelled `Day hours` or `Night hours` are kept. A row with a
/// blank name belongs to the last named person above it, which is how the
/// night row of each pair is written.
pub fn parse_wh_data(rows: &[Vec<String>]) -> Result<WHData, ParseError> {
    let sheet = Sheet::new(rows, FileShape::WorkingHours)?;
    let header = sheet.header();
    let wh_layout = detect_layout(header);
    let layout = sheet_layout(wh_layout);
    let summary = summary_columns(wh_layout, header);
    debug!(?wh_layout, ?summary, "working hours layout");

    let day_columns: Vec<(usize, u32)> = layout
        .data_columns(header.len())
        .filter_map(|col| wh_day(&header[col]).map(|day| (col, day)))
        .collect();

    let mut dates = BTreeMap::new();
    let mut weekdays = BTreeMap::new();
    for &(col, day) in &day_columns {
        let date = parse_leading_int(sheet.cell(WH_DATE_ROW, col))
            .filter(|n| *n != 0)
            .unwrap_or(i64::from(day));
        dates.insert(day, date);
        weekdays.insert(day, sheet.cell(WH_WEEKDAY_ROW, col).to_string());
    }

    let read = |row: &[String], col: Option<usize>| {
        col.map(|c| cell(row, c).to_string()).unwrap_or_default()
    };

    let mut current_person = String::new();
    let mut skipped = 0;
    let mut hours_rows = Vec::new();
    for (_, row) in sheet.people() {
        let Some(day_night) = DayNight::from_cell(cell(row, WH_DAY_NIGHT_COL)) else {
            skipped += 1;
            continue;
        };

        let name = cell(row, layout.name_col).trim();
        if !name.is_empty() {
            current_person = name.to_string();
        }

        hours_rows.push(WHRow {
            name_surname: current_person.clone(),
            day_night,
            hours: day_columns
                .iter()
                .map(|&(col, day)| (day, cell(row, col).to_string()))
                .collect(),
            total_hours: read(row, summary.total_hours),
            sum: read(row, summary.sum),
            holiday: read(row, summary.holiday),
        });
    }
    debug!(rows = hours_rows.len(), skipped, "parsed working hours");

    Ok(WHData {
        month: sheet.cell(layout.month.row, layout.month.col).to_string(),
        year: sheet.cell(layout.year.row, layout.year.col).to_string(),
        dates,
        weekdays,
        layout: wh_layout,
        rows: hours_rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_detect_layout() {
        assert_eq!(detect_layout(&header(&["Name", "1", "Total Hours", "Sum"])), WHLayout::Labelled);
        assert_eq!(detect_layout(&header(&["Name", "1", " SUM "])), WHLayout::Labelled);
        assert_eq!(detect_layout(&header(&["Name", "1", "Total", "Summary"])), WHLayout::Trailing);
    }

    #[test]
    fn test_labelled_summary_columns() {
        let h = header(&["No", "Id", "Name", "D/N", "1", "Total Hours", "Sum", "Holiday hours"]);
        let cols = summary_columns(WHLayout::Labelled, &h);
        assert_eq!(cols.total_hours, Some(5));
        assert_eq!(cols.sum, Some(6));
        assert_eq!(cols.holiday, Some(7));
    }

    #[test]
    fn test_trailing_summary_columns() {
        let h = header(&["No", "Id", "Name", "D/N", "1", "2", "a", "b", "c"]);
        let cols = summary_columns(WHLayout::Trailing, &h);
        assert_eq!(cols.total_hours, Some(6));
        assert_eq!(cols.sum, Some(7));
        assert_eq!(cols.holiday, Some(8));
        assert_eq!(
            summary_columns(WHLayout::Trailing, &header(&["a", "b"])).total_hours,
            None
        );
    }

    #[test]
    fn test_day_range() {
        assert_eq!(wh_day("1"), Some(1));
        assert_eq!(wh_day("31"), Some(31));
        assert_eq!(wh_day("0"), None);
        assert_eq!(wh_day("32"), None);
    }

    #[test]
    fn test_labelled_layout_rows() {
        let csv = "\
No,Id,Name,D/N,1,2,Total,Sum,Holiday
,,November,,1,2,,,
,,2024,,Fri,Sat,,,
1,5,Ana Lee,Day hours,6,6,12,20,0
,,,Night hours,4,4,8,,2
,,///,,,,,,
2,6,Bo Kim,Day hours,7.5,,7.5,7.5,
";
        let data = parse_wh_data_csv(csv).unwrap();
        assert_eq!(data.layout, WHLayout::Labelled);
        assert_eq!(data.month, "November");
        assert_eq!(data.year, "2024");
        assert_eq!(data.dates.keys().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(data.rows.len(), 3);

        let night = &data.rows[1];
        assert_eq!(night.name_surname, "Ana Lee");
        assert_eq!(night.day_night, DayNight::NightHours);
        assert_eq!(night.total_hours, "8");
        assert_eq!(night.holiday, "2");
        assert_eq!(data.rows[2].hours_on(1), "7.5");
        assert_eq!(data.rows[2].hours_on(2), "");
    }

    #[test]
    fn test_positional_summary_without_sum_header() {
        let csv = "\
No,Id,Name,D/N,1,2,3,Total hours,,Holiday
,,March,,1,2,3,,,
,,2025,,Sat,Sun,Mon,,,
1,5,Ana Lee,Day hours,6,,6,12,12,1
";
        let data = parse_wh_data_csv(csv).unwrap();
        assert_eq!(data.layout, WHLayout::Trailing);
        let row = &data.rows[0];
        assert_eq!(row.hours.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(row.total_hours, "12");
        assert_eq!(row.sum, "12");
        assert_eq!(row.holiday, "1");
    }
}
