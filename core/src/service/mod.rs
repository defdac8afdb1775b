pub mod calendar;
pub mod grouping;

pub use calendar::build_month_grid;
pub use grouping::{drop_placeholders, filter_by_person, pair_working_hours, WHPair};
