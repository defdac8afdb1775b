use anyhow::{anyhow, Context, Result};
use tracing::debug;

use crate::model::calendar::MonthGrid;
use crate::model::daily_stats::DailyStatsData;
use crate::model::file_type::{CsvFileType, Role};
use crate::model::mistake_stats::MistakeStatsData;
use crate::model::shift::ShiftData;
use crate::model::working_hours::WHData;
use crate::model::Named;
use crate::parser::daily_stats::parse_daily_stats_csv;
use crate::parser::mistake_stats::parse_mistake_stats_csv;
use crate::parser::shift::parse_shift_data_csv;
use crate::parser::working_hours::parse_wh_data_csv;
use crate::repository::RosterRepository;
use crate::service::grouping::{drop_placeholders, filter_by_person};

/// Shift data together with the week grid it is rendered on.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftCalendar {
    pub data: ShiftData,
    pub grid: MonthGrid,
}

/// Parsed roster files as one role sees them.
///
/// Dealers and shift managers given a name only get their own rows back, and
/// only the operation role gets the totals row. Every `Ok(None)` means the
/// file for that month has not been published.
pub struct RosterView<'a, R: RosterRepository> {
    repo: &'a R,
    role: Role,
    person: Option<String>,
}

impl<'a, R: RosterRepository> RosterView<'a, R> {
    pub fn new(repo: &'a R, role: Role, person: Option<&str>) -> Self {
        Self {
            repo,
            role,
            person: person
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    fn fetch(&self, country: &str, file_type: CsvFileType, month: &str) -> Result<Option<String>> {
        if !self.role.can_read(file_type) {
            return Err(anyhow!("Role {:?} cannot view {} files", self.role, file_type));
        }
        self.repo.load(country, file_type, month)
    }

    fn scope<T: Named>(&self, rows: Vec<T>) -> Vec<T> {
        let rows = drop_placeholders(rows);
        match (&self.person, self.role.is_personal()) {
            (Some(person), true) => filter_by_person(rows, person),
            _ => rows,
        }
    }

    pub fn daily_stats(&self, country: &str, month: &str) -> Result<Option<DailyStatsData>> {
        let file_type = CsvFileType::DailyStats;
        let Some(text) = self.fetch(country, file_type, month)? else {
            return Ok(None);
        };
        let mut data = parse_daily_stats_csv(&text)
            .with_context(|| format!("Failed to parse {}", file_type.file_name(month)))?;
        data.rows = self.scope(data.rows);
        if !self.role.shows_total_row() {
            data.total_row = Default::default();
        }
        debug!(rows = data.rows.len(), "daily stats view");
        Ok(Some(data))
    }

    /// Dealer roster, or the shift managers' one when `manager` is set.
    pub fn shifts(&self, country: &str, month: &str, manager: bool) -> Result<Option<ShiftData>> {
        let file_type = if manager {
            CsvFileType::SMShift
        } else {
            CsvFileType::DealerShift
        };
        let Some(text) = self.fetch(country, file_type, month)? else {
            return Ok(None);
        };
        let mut data = parse_shift_data_csv(&text)
            .with_context(|| format!("Failed to parse {}", file_type.file_name(month)))?;
        data.rows = self.scope(data.rows);
        debug!(rows = data.rows.len(), %file_type, "shift view");
        Ok(Some(data))
    }

    pub fn calendar(&self, country: &str, month: &str, manager: bool) -> Result<Option<ShiftCalendar>> {
        let Some(data) = self.shifts(country, month, manager)? else {
            return Ok(None);
        };
        let grid = MonthGrid::for_shift_data(&data)?;
        Ok(Some(ShiftCalendar { data, grid }))
    }

    pub fn working_hours(&self, country: &str, month: &str, manager: bool) -> Result<Option<WHData>> {
        let file_type = if manager {
            CsvFileType::SMWH
        } else {
            CsvFileType::DealerWH
        };
        let Some(text) = self.fetch(country, file_type, month)? else {
            return Ok(None);
        };
        let mut data = parse_wh_data_csv(&text)
            .with_context(|| format!("Failed to parse {}", file_type.file_name(month)))?;
        data.rows = self.scope(data.rows);
        debug!(rows = data.rows.len(), layout = ?data.layout, "working hours view");
        Ok(Some(data))
    }

    pub fn mistake_stats(&self, country: &str, month: &str) -> Result<Option<MistakeStatsData>> {
        let file_type = CsvFileType::DealerStats;
        let Some(text) = self.fetch(country, file_type, month)? else {
            return Ok(None);
        };
        let mut data = parse_mistake_stats_csv(&text)
            .with_context(|| format!("Failed to parse {}", file_type.file_name(month)))?;
        data.rows = self.scope(data.rows);
        if !self.role.shows_total_row() {
            data.total_row = Default::default();
        }
        Ok(Some(data))
    }
}
