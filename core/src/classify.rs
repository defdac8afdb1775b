use serde::Serialize;

use crate::model::color::{Rgb, ShiftColor};
use crate::model::mistake_stats::MistakeCategory;

const GOLD: Rgb = Rgb(247, 202, 67);
const ORANGE: Rgb = Rgb(255, 172, 99);
const LIGHT_GREEN: Rgb = Rgb(181, 230, 162);
const SKY_BLUE: Rgb = Rgb(122, 220, 255);
const NAVY: Rgb = Rgb(33, 92, 152);
const PALE_YELLOW: Rgb = Rgb(242, 240, 128);
const BLUE: Rgb = Rgb(0, 112, 192);
const MAGENTA: Rgb = Rgb(216, 109, 205);
const GREEN: Rgb = Rgb(142, 217, 115);
const DARK_GREEN: Rgb = Rgb(0, 176, 80);
const YELLOW: Rgb = Rgb(255, 255, 0);
const GRAY: Rgb = Rgb(191, 191, 191);
const RED: Rgb = Rgb(255, 0, 0);
const PINK: Rgb = Rgb(252, 144, 157);

fn exact_color(code: &str) -> Option<ShiftColor> {
    let color = match code {
        "08H" | "08H+" => ShiftColor::plain(GOLD),
        "14H" | "14F" => ShiftColor::plain(ORANGE),
        "16H" | "16F" => ShiftColor::plain(LIGHT_GREEN),
        "20H" => ShiftColor::plain(SKY_BLUE),
        "02H" => ShiftColor::with_text(NAVY, Rgb::WHITE),
        "08F" => ShiftColor::plain(PALE_YELLOW),
        "20F" => ShiftColor::with_text(BLUE, Rgb::WHITE),
        "R" => ShiftColor::plain(MAGENTA),
        "V" => ShiftColor::plain(GREEN),
        "AU" => ShiftColor::with_text(DARK_GREEN, Rgb::WHITE),
        _ => return None,
    };
    Some(color)
}

fn strip_markers(code: &str) -> String {
    code.chars().filter(|c| !matches!(c, '!' | '/')).collect()
}

/// Display color for a roster shift code, `None` to leave the cell unstyled.
///
/// Rules apply in order, first match wins:
/// 1. exact codes (`08H`, `14F`, `AU`, ...);
/// 2. prefixes, case-insensitive: `S` yellow, `/` gray, `X…` red, bare `X` pink;
/// 3. a trailing `!` marks a call-back: the stripped code's color if it has
///    one, magenta otherwise;
/// 4. the code with `!` and `/` removed, looked up exactly.
pub fn classify_shift(code: &str) -> Option<ShiftColor> {
    let code = code.trim();
    if code.is_empty() || code == "-" {
        return None;
    }

    if let Some(color) = exact_color(code) {
        return Some(color);
    }

    let first = code.chars().next()?.to_ascii_uppercase();
    match first {
        'S' => return Some(ShiftColor::plain(YELLOW)),
        '/' => return Some(ShiftColor::plain(GRAY)),
        'X' if code.len() > 1 => return Some(ShiftColor::with_text(RED, Rgb::WHITE)),
        'X' => return Some(ShiftColor::plain(PINK)),
        _ => {}
    }

    let base = strip_markers(code);
    if code.ends_with('!') {
        return Some(exact_color(&base).unwrap_or(ShiftColor::plain(MAGENTA)));
    }

    exact_color(&base)
}

/// Category from the code's leading digit: 1-4 map to themselves, 5 to Other.
pub fn category_of(code: &str) -> Option<MistakeCategory> {
    match code.chars().next()? {
        '1' => Some(MistakeCategory::One),
        '2' => Some(MistakeCategory::Two),
        '3' => Some(MistakeCategory::Three),
        '4' => Some(MistakeCategory::Four),
        '5' => Some(MistakeCategory::Other),
        _ => None,
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ShiftType {
    pub code: &'static str,
    pub label: &'static str,
    pub start: &'static str,
    pub end: &'static str,
    pub day_hours: f64,
    pub night_hours: f64,
}

const fn shift(
    code: &'static str,
    label: &'static str,
    start: &'static str,
    end: &'static str,
    day_hours: f64,
    night_hours: f64,
) -> ShiftType {
    ShiftType {
        code,
        label,
        start,
        end,
        day_hours,
        night_hours,
    }
}

pub const SHIFT_TYPES: [ShiftType; 14] = [
    shift("08F", "8:30–20:30", "08:30", "20:30", 12.0, 0.0),
    shift("08H", "8:30–14:30", "08:30", "14:30", 6.0, 0.0),
    shift("08H+", "8:30–16:00", "08:30", "16:00", 7.5, 0.0),
    shift("16H", "16:00–20:30", "16:00", "20:30", 4.5, 0.0),
    shift("16F", "16:00–02:30", "16:00", "02:30", 6.0, 4.5),
    shift("14H", "14:30–20:30", "14:30", "20:30", 6.0, 0.0),
    shift("14F", "14:30–02:30", "14:30", "02:30", 7.5, 4.5),
    shift("20F", "20:30–08:30", "20:30", "08:30", 1.5, 10.5),
    shift("20H", "20:30–02:30", "20:30", "02:30", 1.5, 4.5),
    shift("02H", "02:30–08:30", "02:30", "08:30", 3.5, 2.5),
    shift("X", "Day Off", "", "", 0.0, 0.0),
    shift("V", "Vacation", "", "", 0.0, 0.0),
    shift("/", "No Shift Available", "", "", 0.0, 0.0),
    shift("-", "Not Selected", "", "", 0.0, 0.0),
];

/// Working times of a known shift code.
pub fn shift_type(code: &str) -> Option<&'static ShiftType> {
    let code = code.trim();
    SHIFT_TYPES.iter().find(|t| t.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bg(code: &str) -> Option<Rgb> {
        classify_shift(code).map(|c| c.background)
    }

    #[test]
    fn test_exact_table() {
        assert_eq!(bg("08H"), Some(GOLD));
        assert_eq!(bg("08H+"), Some(GOLD));
        assert_eq!(bg("14F"), Some(ORANGE));
        assert_eq!(bg("16F"), Some(LIGHT_GREEN));
        assert_eq!(bg("08F"), Some(PALE_YELLOW));
        assert_eq!(bg("R"), Some(MAGENTA));
        assert_eq!(bg("V"), Some(GREEN));
        assert_eq!(classify_shift("02H"), Some(ShiftColor::with_text(NAVY, Rgb::WHITE)));
        assert_eq!(classify_shift("AU"), Some(ShiftColor::with_text(DARK_GREEN, Rgb::WHITE)));
        assert_eq!(classify_shift(" 20F "), Some(ShiftColor::with_text(BLUE, Rgb::WHITE)));
    }

    #[test]
    fn test_x_precedence() {
        assert_eq!(classify_shift("X"), Some(ShiftColor::plain(PINK)));
        assert_eq!(classify_shift("X1"), Some(ShiftColor::with_text(RED, Rgb::WHITE)));
        // Prefix rule fires before the call-back rule.
        assert_eq!(classify_shift("X!"), Some(ShiftColor::with_text(RED, Rgb::WHITE)));
        assert_eq!(classify_shift("x"), Some(ShiftColor::plain(PINK)));
    }

    #[test]
    fn test_prefixes() {
        assert_eq!(bg("S3"), Some(YELLOW));
        assert_eq!(bg("s1!"), Some(YELLOW));
        assert_eq!(bg("/08H"), Some(GRAY));
        assert_eq!(bg("/"), Some(GRAY));
    }

    #[test]
    fn test_call_back_marker() {
        assert_eq!(bg("08H!"), Some(GOLD));
        assert_eq!(bg("20F!"), Some(BLUE));
        assert_eq!(bg("12H!"), Some(MAGENTA));
    }

    #[test]
    fn test_stripped_lookup() {
        assert_eq!(bg("16H/"), Some(LIGHT_GREEN));
        assert_eq!(bg("Q"), None);
        assert_eq!(bg(""), None);
        assert_eq!(bg("-"), None);
        assert_eq!(bg("0"), None);
    }

    #[test]
    fn test_category_of() {
        assert_eq!(category_of("101"), Some(MistakeCategory::One));
        assert_eq!(category_of("2a"), Some(MistakeCategory::Two));
        assert_eq!(category_of("305"), Some(MistakeCategory::Three));
        assert_eq!(category_of("4"), Some(MistakeCategory::Four));
        assert_eq!(category_of("512"), Some(MistakeCategory::Other));
        assert_eq!(category_of("612"), None);
        assert_eq!(category_of("A1"), None);
        assert_eq!(category_of(""), None);
    }

    #[test]
    fn test_shift_type() {
        let t = shift_type("14F").unwrap();
        assert_eq!(t.day_hours + t.night_hours, 12.0);
        assert_eq!(shift_type("V").unwrap().label, "Vacation");
        assert!(shift_type("Z").is_none());
    }
}
