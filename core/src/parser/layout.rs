//! Column layouts of the roster exports.
//!
//! Each shape is a header row, two metadata rows and then one row per person
//! (two for working hours). Per-day or per-code columns start at a fixed
//! index; some shapes reserve summary columns at the end of the row.

use std::ops::Range;

/// Position of a single metadata cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

const fn at(row: usize, col: usize) -> CellRef {
    CellRef { row, col }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub month: CellRef,
    pub year: CellRef,
    pub name_col: usize,
    /// First per-day (or per-code) column.
    pub first_data_col: usize,
    /// Summary columns reserved at the end of every row.
    pub trailing_cols: usize,
}

impl SheetLayout {
    /// Per-day columns for a header of `header_len` cells; empty when the
    /// header is too short to hold any.
    pub fn data_columns(&self, header_len: usize) -> Range<usize> {
        let end = header_len.saturating_sub(self.trailing_cols);
        self.first_data_col..end.max(self.first_data_col)
    }

    /// Index of the first reserved summary column, `None` when the header is
    /// narrower than the summary block itself.
    pub fn summary_start(&self, header_len: usize) -> Option<usize> {
        header_len.checked_sub(self.trailing_cols)
    }
}

/// Daily mistakes: month and year on the serial-date row, nickname and total
/// beside the name.
pub const DAILY_STATS: SheetLayout = SheetLayout {
    month: at(1, 2),
    year: at(1, 3),
    name_col: 2,
    first_data_col: 5,
    trailing_cols: 0,
};
pub const DAILY_NICKNAME_COL: usize = 3;
pub const DAILY_TOTAL_COL: usize = 4;
pub const DAILY_SERIAL_ROW: usize = 1;
pub const DAILY_TOTAL_ROW: usize = 2;

/// Shift roster: total, day, night and by-call counts in the last four columns.
pub const SHIFT: SheetLayout = SheetLayout {
    month: at(1, 2),
    year: at(2, 2),
    name_col: 2,
    first_data_col: 3,
    trailing_cols: 4,
};
pub const SHIFT_DATE_ROW: usize = 1;
pub const SHIFT_WEEKDAY_ROW: usize = 2;

/// Working hours, trailing variant: total, sum and holiday in the last three
/// columns.
pub const WH_TRAILING: SheetLayout = SheetLayout {
    month: at(1, 2),
    year: at(2, 2),
    name_col: 2,
    first_data_col: 4,
    trailing_cols: 3,
};

/// Working hours, labelled variant: summary columns sit among the headers and
/// are found by name.
pub const WH_LABELLED: SheetLayout = SheetLayout {
    trailing_cols: 0,
    ..WH_TRAILING
};
pub const WH_DAY_NIGHT_COL: usize = 3;
pub const WH_DATE_ROW: usize = 1;
pub const WH_WEEKDAY_ROW: usize = 2;
pub const WH_MAX_DAY: i64 = 31;

/// Mistake statistics: one column per error code, descriptions on the first
/// metadata row, totals on the second.
pub const MISTAKE_STATS: SheetLayout = SheetLayout {
    month: at(1, 2),
    year: at(1, 3),
    name_col: 2,
    first_data_col: 5,
    trailing_cols: 0,
};
pub const MISTAKE_NICKNAME_COL: usize = 3;
pub const MISTAKE_TOTAL_COL: usize = 4;
pub const MISTAKE_DESCRIPTION_ROW: usize = 1;
pub const MISTAKE_TOTAL_ROW: usize = 2;
