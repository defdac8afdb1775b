pub mod classify;
pub mod config;
pub mod csv;
pub mod input;
pub mod model;
pub mod parser;
pub mod repository;
pub mod service;
pub mod time;
pub mod usecase;

pub use classify::{category_of, classify_shift, shift_type, ShiftType};
pub use config::VisibleMonthsConfig;
pub use csv::tokenize;
pub use input::{expand_key, expand_month};
pub use model::calendar::{CalendarWeek, MonthGrid};
pub use model::color::{Rgb, ShiftColor};
pub use model::daily_stats::{DailyStatsData, DailyStatsRow};
pub use model::file_type::{CsvFileType, Role, Section};
pub use model::mistake_stats::{MistakeCategory, MistakeStatsData, MistakeStatsRow};
pub use model::shift::{ShiftData, ShiftRow};
pub use model::working_hours::{DayNight, WHData, WHLayout, WHRow};
pub use model::Named;
pub use parser::{parse_daily_stats, parse_mistake_stats, parse_shift_data, parse_wh_data, ParseError};
pub use repository::{CachedRosterRepository, FileRosterRepository, RosterRepository};
pub use service::{build_month_grid, drop_placeholders, filter_by_person, pair_working_hours, WHPair};
pub use usecase::roster_view::{RosterView, ShiftCalendar};
