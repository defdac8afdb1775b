pub mod calendar;
pub mod color;
pub mod daily_stats;
pub mod file_type;
pub mod mistake_stats;
pub mod shift;
pub mod working_hours;

/// A parsed row that belongs to one person.
pub trait Named {
    fn name_surname(&self) -> &str;
}
