use std::collections::BTreeMap;

use tracing::debug;

use crate::classify::category_of;
use crate::csv::tokenize;
use crate::model::file_type::FileShape;
use crate::model::mistake_stats::{MistakeCategories, MistakeStatsData, MistakeStatsRow};
use crate::parser::layout::{
    MISTAKE_DESCRIPTION_ROW, MISTAKE_NICKNAME_COL, MISTAKE_STATS, MISTAKE_TOTAL_COL,
    MISTAKE_TOTAL_ROW,
};
use crate::parser::{cell, person_name, ParseError, Sheet};

pub fn parse_mistake_stats_csv(text: &str) -> Result<MistakeStatsData, ParseError> {
    parse_mistake_stats(&tokenize(text))
}

/// Decode a Dealer_Stats export: one column per error code.
pub fn parse_mistake_stats(rows: &[Vec<String>]) -> Result<MistakeStatsData, ParseError> {
    let sheet = Sheet::new(rows, FileShape::MistakeStats)?;
    let layout = MISTAKE_STATS;

    let mut code_columns: Vec<(usize, String)> = Vec::new();
    let mut error_codes = BTreeMap::new();
    let mut categories = MistakeCategories::default();
    for col in layout.data_columns(sheet.header_len()) {
        let code = sheet.header()[col].trim();
        if code.is_empty() || error_codes.contains_key(code) {
            continue;
        }
        let description = sheet.cell(MISTAKE_DESCRIPTION_ROW, col).to_string();
        error_codes.insert(code.to_string(), description);
        categories.push(category_of(code), code.to_string());
        code_columns.push((col, code.to_string()));
    }

    let read_row = |row: &[String], name: &str| MistakeStatsRow {
        name_surname: name.to_string(),
        nickname: cell(row, MISTAKE_NICKNAME_COL).to_string(),
        total: cell(row, MISTAKE_TOTAL_COL).to_string(),
        mistakes: code_columns
            .iter()
            .map(|(col, code)| (code.clone(), cell(row, *col).to_string()))
            .collect(),
    };

    let total_source = sheet.row(MISTAKE_TOTAL_ROW);
    let total_row = read_row(total_source, cell(total_source, layout.name_col));

    let mut skipped = 0;
    let mut people = Vec::new();
    for (_, row) in sheet.people() {
        match person_name(cell(row, layout.name_col)) {
            Some(name) => people.push(read_row(row, name)),
            None => skipped += 1,
        }
    }
    debug!(
        codes = code_columns.len(),
        other = categories.category_other.len(),
        people = people.len(),
        skipped,
        "parsed mistake stats"
    );

    Ok(MistakeStatsData {
        month: sheet.cell(layout.month.row, layout.month.col).to_string(),
        year: sheet.cell(layout.year.row, layout.year.col).to_string(),
        codes: code_columns.into_iter().map(|(_, code)| code).collect(),
        error_codes,
        categories,
        total_row,
        rows: people,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
No,Id,Name Surname,Nickname,Total,101,102,201,310,405,501,A1,
,,October,2024,,Wrong payout,Late call,Chip count,Shuffle,Procedure,Other,Misc,
,,Total,,11,2,1,3,0,1,4,0,
1,3,Ana Lee,Ana,5,1,0,2,0,1,1,0,
2,4,0,,0,0,0,0,0,0,0,0,
3,5,Bo Kim,Bo,6,1,1,1,0,0,3,0,
";

    #[test]
    fn test_codes_and_descriptions() {
        let data = parse_mistake_stats_csv(SAMPLE).unwrap();
        assert_eq!(data.month, "October");
        assert_eq!(data.year, "2024");
        assert_eq!(data.codes, vec!["101", "102", "201", "310", "405", "501", "A1"]);
        assert_eq!(data.description("102"), "Late call");
        assert_eq!(data.description("999"), "");
    }

    #[test]
    fn test_categories_partition_codes() {
        let data = parse_mistake_stats_csv(SAMPLE).unwrap();
        let c = &data.categories;
        assert_eq!(c.category1, vec!["101", "102"]);
        assert_eq!(c.category2, vec!["201"]);
        assert_eq!(c.category3, vec!["310"]);
        assert_eq!(c.category4, vec!["405"]);
        assert_eq!(c.category_other, vec!["501", "A1"]);

        let mut union: Vec<&String> = c.iter().flat_map(|(_, codes)| codes.iter()).collect();
        union.sort();
        let mut all: Vec<&String> = data.codes.iter().collect();
        all.sort();
        assert_eq!(union, all);
    }

    #[test]
    fn test_rows() {
        let data = parse_mistake_stats_csv(SAMPLE).unwrap();
        assert_eq!(data.total_row.total, "11");
        assert_eq!(data.total_row.count("501"), "4");
        assert_eq!(data.rows.len(), 2);
        assert_eq!(data.rows[0].count("201"), "2");
        assert_eq!(data.rows[1].name_surname, "Bo Kim");
        assert_eq!(data.rows[1].count("501"), "3");
    }

    #[test]
    fn test_duplicate_codes_kept_once() {
        let csv = "a,b,c,d,e,101,101\n,,May,2025,,x,y\n,,Total,,,,\n";
        let data = parse_mistake_stats_csv(csv).unwrap();
        assert_eq!(data.codes, vec!["101"]);
        assert_eq!(data.categories.category1, vec!["101"]);
        assert_eq!(data.description("101"), "x");
    }
}
