pub mod daily_stats;
pub mod layout;
pub mod mistake_stats;
pub mod shift;
pub mod working_hours;


use thiserror::Error;

use crate::model::file_type::FileShape;
use crate::time::parse_leading_int;

pub use daily_stats::parse_daily_stats;
pub use mistake_stats::parse_mistake_stats;
pub use shift::parse_shift_data;
pub use working_hours::parse_wh_data;

/// Every shape carries a header row and two metadata rows before the people.
pub const HEADER_ROWS: usize = 3;

/// Structural problems that leave nothing sensible to return. Data-quality
/// issues inside an otherwise well-formed sheet never produce an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{shape} file has no rows")]
    Empty { shape: FileShape },
    #[error("{shape} file has {found} rows, expected at least 3 header rows")]
    MissingHeaderRows { shape: FileShape, found: usize },
    #[error("unknown month '{0}'")]
    UnknownMonth(String),
    #[error("invalid year '{0}'")]
    InvalidYear(String),
}

/// Read-only view over tokenized rows where out-of-range cells read as `""`.
#[derive(Debug, Clone, Copy)]
pub struct Sheet<'a> {
    rows: &'a [Vec<String>],
}

impl<'a> Sheet<'a> {
    pub fn new(rows: &'a [Vec<String>], shape: FileShape) -> Result<Self, ParseError> {
        match rows.len() {
            0 => Err(ParseError::Empty { shape }),
            found if found < HEADER_ROWS => Err(ParseError::MissingHeaderRows { shape, found }),
            _ => Ok(Self { rows }),
        }
    }

    pub fn header(&self) -> &'a [String] {
        &self.rows[0]
    }

    pub fn header_len(&self) -> usize {
        self.rows[0].len()
    }

    pub fn row(&self, index: usize) -> &'a [String] {
        self.rows.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn cell(&self, row: usize, col: usize) -> &'a str {
        cell(self.row(row), col)
    }

    /// Rows after the header block, with their sheet index.
    pub fn people(&self) -> impl Iterator<Item = (usize, &'a [String])> + 'a {
        self.rows
            .iter()
            .enumerate()
            .skip(HEADER_ROWS)
            .map(|(i, row)| (i, row.as_slice()))
    }
}

pub fn cell(row: &[String], col: usize) -> &str {
    row.get(col).map(String::as_str).unwrap_or("")
}

/// Day number of a header cell, by its integer prefix.
pub fn day_number(header: &str) -> Option<u32> {
    parse_leading_int(header).and_then(|n| u32::try_from(n).ok())
}

/// Trimmed name of a person row; blank and `0` mark filler rows.
pub fn person_name(cell: &str) -> Option<&str> {
    match cell.trim() {
        "" | "0" => None,
        name => Some(name),
    }
}
