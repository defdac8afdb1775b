use std::collections::BTreeSet;

use rosterview_core::time::{is_weekend_abbrev, month_name};
use rosterview_core::{
    classify_shift, pair_working_hours, shift_type, CsvFileType, DailyStatsData, MistakeCategory,
    MistakeStatsData, MistakeStatsRow, Section, ShiftCalendar, ShiftColor, ShiftData, WHData,
};
use chrono::Datelike;
use tabled::builder::Builder;
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};
use unicode_width::UnicodeWidthStr;

const CELL_WIDTH: usize = 6;
const RESET: &str = "\x1b[0m";
const HEADING: &str = "\x1b[1;36m";
const DIM: &str = "\x1b[2m";

fn finish(mut table: Table) -> Table {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table
}

/// Day column header, weekends marked with `*`.
fn day_header(day: u32, weekday: Option<&String>) -> String {
    match weekday {
        Some(w) if is_weekend_abbrev(w) => format!("{}\n{}*", day, w),
        Some(w) => format!("{}\n{}", day, w),
        None => day.to_string(),
    }
}

pub fn print_no_data(country: &str, month: &str) {
    println!("No data published for {} {}.", country, month);
}

/// Visible months with the files published for each.
pub fn print_months(country: &str, section: Section, months: &[(String, Vec<CsvFileType>)]) {
    println!("{}{} ({:?}){}", HEADING, country, section, RESET);
    if months.is_empty() {
        println!("  no months available");
    }
    for (month, files) in months {
        let files: Vec<&str> = files.iter().map(|f| f.stem()).collect();
        println!("  {:<10} {}", month, files.join(", "));
    }
}

pub fn print_daily_stats(data: &DailyStatsData) {
    println!("{}Daily mistakes, {} {}{}", HEADING, data.month, data.year, RESET);

    let days: BTreeSet<u32> = std::iter::once(&data.total_row)
        .chain(data.rows.iter())
        .flat_map(|r| r.days.keys().copied())
        .collect();

    let mut builder = Builder::default();
    let mut header = vec!["Name".to_string(), "Nickname".to_string(), "Total".to_string()];
    header.extend(days.iter().map(|day| day_header(*day, data.weekdays.get(day))));
    builder.push_record(header);

    let total = &data.total_row;
    let rows = std::iter::once(total)
        .filter(|r| !r.name_surname.is_empty())
        .chain(data.rows.iter());
    for row in rows {
        let mut record = vec![row.name_surname.clone(), row.nickname.clone(), row.total.clone()];
        record.extend(days.iter().map(|day| row.days.get(day).cloned().unwrap_or_default()));
        builder.push_record(record);
    }

    println!("{}", finish(builder.build()));
}

pub fn print_shifts(data: &ShiftData) {
    println!("{}Shifts, {} {}{}", HEADING, data.month, data.year, RESET);

    let days: Vec<u32> = data.dates.keys().copied().collect();
    let mut builder = Builder::default();
    let mut header = vec!["Name".to_string()];
    header.extend(days.iter().map(|day| day_header(*day, data.weekdays.get(day))));
    header.extend(["Total", "Day", "Night", "By call"].map(String::from));
    builder.push_record(header);

    for row in &data.rows {
        let mut record = vec![row.name_surname.clone()];
        record.extend(days.iter().map(|day| row.shift_on(*day).to_string()));
        record.extend([
            row.total_shifts.clone(),
            row.day_shifts.clone(),
            row.night_shifts.clone(),
            row.by_call.clone(),
        ]);
        builder.push_record(record);
    }

    println!("{}", finish(builder.build()));
}

/// Center `text` in `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    if used >= width {
        return text.to_string();
    }
    let left = (width - used) / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(width - used - left))
}

fn paint(text: &str, color: Option<ShiftColor>) -> String {
    let Some(color) = color else {
        return text.to_string();
    };
    let bg = color.background;
    let fg = match color.text {
        Some(fg) => format!("\x1b[38;2;{};{};{}m", fg.0, fg.1, fg.2),
        None => "\x1b[30m".to_string(),
    };
    format!("\x1b[48;2;{};{};{}m{}{}{}", bg.0, bg.1, bg.2, fg, text, RESET)
}

pub fn print_calendar(calendar: &ShiftCalendar) {
    let grid = &calendar.grid;
    let title = month_name(grid.month).unwrap_or("");
    println!("{}{} {}{}", HEADING, title, grid.year, RESET);
    if grid.is_empty() {
        println!("  no days in this roster");
        return;
    }

    let weekday_header: String = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
        .iter()
        .map(|w| pad(w, CELL_WIDTH))
        .collect();

    for row in &calendar.data.rows {
        println!();
        println!(
            "{}{}{}  total {} | day {} | night {} | by call {}",
            HEADING, row.name_surname, RESET, row.total_shifts, row.day_shifts, row.night_shifts, row.by_call
        );
        println!("{}", weekday_header);

        for week in &grid.weeks {
            let mut dates = String::new();
            let mut codes = String::new();
            for date in week.days() {
                if grid.is_current_month(*date) {
                    dates.push_str(&pad(&date.day().to_string(), CELL_WIDTH));
                    let code = row.shift_on(date.day());
                    codes.push_str(&paint(&pad(code, CELL_WIDTH), classify_shift(code)));
                } else {
                    dates.push_str(&format!("{}{}{}", DIM, pad(&date.day().to_string(), CELL_WIDTH), RESET));
                    codes.push_str(&pad("", CELL_WIDTH));
                }
            }
            println!("{}", dates);
            println!("{}", codes);
        }
    }
}

pub fn print_working_hours(data: &WHData) {
    println!("{}Working hours, {} {}{}", HEADING, data.month, data.year, RESET);

    let days: Vec<u32> = data.dates.keys().copied().collect();
    let mut builder = Builder::default();
    let mut header = vec!["Name".to_string(), "".to_string()];
    header.extend(days.iter().map(|day| day_header(*day, data.weekdays.get(day))));
    header.extend(["Total", "Sum", "Holiday", "Day + Night"].map(String::from));
    builder.push_record(header);

    for pair in pair_working_hours(&data.rows) {
        let mut day_record = vec![pair.name.to_string(), pair.day.day_night.label().to_string()];
        day_record.extend(days.iter().map(|day| pair.day.hours_on(*day).to_string()));
        day_record.extend([
            pair.day.total_hours.clone(),
            pair.day.sum.clone(),
            pair.day.holiday.clone(),
            format!("{:.1}", pair.combined_total()),
        ]);
        builder.push_record(day_record);

        if let Some(night) = pair.night {
            let mut night_record = vec![String::new(), night.day_night.label().to_string()];
            night_record.extend(days.iter().map(|day| night.hours_on(*day).to_string()));
            night_record.extend([
                night.total_hours.clone(),
                night.sum.clone(),
                night.holiday.clone(),
                String::new(),
            ]);
            builder.push_record(night_record);
        }
    }

    println!("{}", finish(builder.build()));
}

/// One table per non-empty category, code columns headed by their
/// description.
fn category_tables(data: &MistakeStatsData) -> Vec<(MistakeCategory, Table)> {
    let people: Vec<&MistakeStatsRow> = std::iter::once(&data.total_row)
        .filter(|r| !r.name_surname.is_empty())
        .chain(data.rows.iter())
        .collect();

    data.categories
        .iter()
        .map(|(category, codes)| {
            let mut builder = Builder::default();
            let mut header = vec!["Name".to_string(), "Nickname".to_string(), "Total".to_string()];
            header.extend(codes.iter().map(|code| match data.description(code) {
                "" => code.clone(),
                description => format!("{}\n{}", code, description),
            }));
            builder.push_record(header);

            for row in &people {
                let mut record = vec![row.name_surname.clone(), row.nickname.clone(), row.total.clone()];
                record.extend(codes.iter().map(|code| row.count(code).to_string()));
                builder.push_record(record);
            }
            (category, finish(builder.build()))
        })
        .collect()
}

pub fn print_mistake_stats(data: &MistakeStatsData) {
    println!("{}Mistake statistics, {} {}{}", HEADING, data.month, data.year, RESET);

    let tables = category_tables(data);
    if tables.is_empty() {
        println!("  no error codes in this file");
    }
    for (category, table) in tables {
        println!();
        println!("{}{}{}", HEADING, category.label(), RESET);
        println!("{}", table);
    }
}

#[derive(Tabled)]
struct ClassifiedRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Background")]
    background: String,
    #[tabled(rename = "Text")]
    text: String,
    #[tabled(rename = "Shift")]
    shift: String,
    #[tabled(rename = "Day h")]
    day_hours: String,
    #[tabled(rename = "Night h")]
    night_hours: String,
}

fn classified_row(code: &str) -> ClassifiedRow {
    let color = classify_shift(code);
    let known = shift_type(code);
    ClassifiedRow {
        code: code.to_string(),
        background: color.map(|c| c.background.to_hex()).unwrap_or_else(|| "-".to_string()),
        text: color
            .and_then(|c| c.text)
            .map(|t| t.to_hex())
            .unwrap_or_else(|| "-".to_string()),
        shift: known.map(|t| t.label.to_string()).unwrap_or_else(|| "-".to_string()),
        day_hours: known.map(|t| t.day_hours.to_string()).unwrap_or_else(|| "-".to_string()),
        night_hours: known.map(|t| t.night_hours.to_string()).unwrap_or_else(|| "-".to_string()),
    }
}

pub fn print_classified(codes: &[String]) {
    let rows: Vec<ClassifiedRow> = codes.iter().map(|code| classified_row(code)).collect();
    println!("{}", finish(Table::new(rows)));

    let swatches: Vec<String> = codes
        .iter()
        .map(|code| paint(&pad(code, CELL_WIDTH), classify_shift(code)))
        .collect();
    println!("{}", swatches.join(" "));
}
