use std::collections::BTreeMap;

use tracing::debug;

use crate::csv::tokenize;
use crate::model::file_type::FileShape;
use crate::model::shift::{ShiftData, ShiftRow};
use crate::parser::layout::{SHIFT, SHIFT_DATE_ROW, SHIFT_WEEKDAY_ROW};
use crate::parser::{cell, day_number, person_name, ParseError, Sheet};
use crate::time::parse_leading_int;

pub fn parse_shift_data_csv(text: &str) -> Result<ShiftData, ParseError> {
    parse_shift_data(&tokenize(text))
}

/// Decode a Dealer_Shift or SM_Shift export.
///
/// The header's last four columns hold each row's total, day, night and
/// by-call counts, read by position whatever their headers say.
pub fn parse_shift_data(rows: &[Vec<String>]) -> Result<ShiftData, ParseError> {
    let sheet = Sheet::new(rows, FileShape::Shift)?;
    let layout = SHIFT;
    let header_len = sheet.header_len();

    let day_columns: Vec<(usize, u32)> = layout
        .data_columns(header_len)
        .filter_map(|col| day_number(&sheet.header()[col]).map(|day| (col, day)))
        .collect();

    let mut dates = BTreeMap::new();
    let mut weekdays = BTreeMap::new();
    for &(col, day) in &day_columns {
        let date = parse_leading_int(sheet.cell(SHIFT_DATE_ROW, col))
            .filter(|n| *n != 0)
            .unwrap_or(i64::from(day));
        dates.insert(day, date);
        weekdays.insert(day, sheet.cell(SHIFT_WEEKDAY_ROW, col).to_string());
    }

    let summary_start = layout.summary_start(header_len);
    let summary = |row: &[String], offset: usize| {
        summary_start
            .map(|start| cell(row, start + offset).to_string())
            .unwrap_or_default()
    };

    let mut skipped = 0;
    let mut people = Vec::new();
    for (_, row) in sheet.people() {
        let Some(name) = person_name(cell(row, layout.name_col)) else {
            skipped += 1;
            continue;
        };

        people.push(ShiftRow {
            name_surname: name.to_string(),
            shifts: day_columns
                .iter()
                .map(|&(col, day)| (day, cell(row, col).to_string()))
                .collect(),
            total_shifts: summary(row, 0),
            day_shifts: summary(row, 1),
            night_shifts: summary(row, 2),
            by_call: summary(row, 3),
        });
    }
    debug!(people = people.len(), skipped, days = day_columns.len(), "parsed shift roster");

    Ok(ShiftData {
        month: sheet.cell(layout.month.row, layout.month.col).to_string(),
        year: sheet.cell(layout.year.row, layout.year.col).to_string(),
        dates,
        weekdays,
        rows: people,
    })
}
