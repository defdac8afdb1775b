use std::collections::BTreeMap;

use tracing::debug;

use crate::csv::tokenize;
use crate::model::daily_stats::{DailyStatsData, DailyStatsRow};
use crate::model::file_type::FileShape;
use crate::parser::layout::{
    DAILY_NICKNAME_COL, DAILY_SERIAL_ROW, DAILY_STATS, DAILY_TOTAL_COL, DAILY_TOTAL_ROW,
};
use crate::parser::{cell, day_number, person_name, ParseError, Sheet};
use crate::time::{display_date, excel_serial_to_date, parse_leading_int, weekday_abbrev};

pub fn parse_daily_stats_csv(text: &str) -> Result<DailyStatsData, ParseError> {
    parse_daily_stats(&tokenize(text))
}

/// Decode a Daily_Stats export.
///
/// Row 1 holds serial dates under each day column, row 2 the totals; every
/// later row with a real name is one person.
pub fn parse_daily_stats(rows: &[Vec<String>]) -> Result<DailyStatsData, ParseError> {
    let sheet = Sheet::new(rows, FileShape::DailyStats)?;
    let layout = DAILY_STATS;

    let day_columns: Vec<(usize, u32)> = layout
        .data_columns(sheet.header_len())
        .filter_map(|col| day_number(&sheet.header()[col]).map(|day| (col, day)))
        .collect();

    let mut dates = BTreeMap::new();
    let mut weekdays = BTreeMap::new();
    for &(col, day) in &day_columns {
        let date = parse_leading_int(sheet.cell(DAILY_SERIAL_ROW, col))
            .filter(|serial| *serial > 0)
            .and_then(excel_serial_to_date);
        match date {
            Some(date) => {
                dates.insert(day, display_date(date));
                weekdays.insert(day, weekday_abbrev(date).to_string());
            }
            None => debug!(day, col, "daily stats: no serial date for day column"),
        }
    }

    let read_row = |row: &[String], name: &str| DailyStatsRow {
        name_surname: name.to_string(),
        nickname: cell(row, DAILY_NICKNAME_COL).to_string(),
        total: cell(row, DAILY_TOTAL_COL).to_string(),
        days: day_columns
            .iter()
            .map(|&(col, day)| (day, cell(row, col).to_string()))
            .collect(),
    };

    let total_source = sheet.row(DAILY_TOTAL_ROW);
    let total_row = read_row(total_source, cell(total_source, layout.name_col));

    let mut skipped = 0;
    let mut people = Vec::new();
    for (_, row) in sheet.people() {
        match person_name(cell(row, layout.name_col)) {
            Some(name) => people.push(read_row(row, name)),
            None => skipped += 1,
        }
    }
    debug!(people = people.len(), skipped, "parsed daily stats");

    Ok(DailyStatsData {
        month: sheet.cell(layout.month.row, layout.month.col).to_string(),
        year: sheet.cell(layout.year.row, layout.year.col).to_string(),
        dates,
        weekdays,
        total_row,
        rows: people,
    })
}
