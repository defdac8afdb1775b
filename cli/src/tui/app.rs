use std::collections::BTreeMap;

use rosterview_core::{ShiftCalendar, ShiftRow};

/// Calendar viewer state: one person's month at a time.
pub struct CalendarApp {
    pub calendar: ShiftCalendar,
    pub selected: usize,
}

impl CalendarApp {
    pub fn new(calendar: ShiftCalendar) -> Self {
        Self { calendar, selected: 0 }
    }

    pub fn people(&self) -> &[ShiftRow] {
        &self.calendar.data.rows
    }

    pub fn current_row(&self) -> Option<&ShiftRow> {
        self.people().get(self.selected)
    }

    pub fn next_person(&mut self) {
        let count = self.people().len();
        if count == 0 {
            return;
        }
        self.selected = if self.selected >= count - 1 { 0 } else { self.selected + 1 };
    }

    pub fn previous_person(&mut self) {
        let count = self.people().len();
        if count == 0 {
            return;
        }
        self.selected = if self.selected == 0 { count - 1 } else { self.selected - 1 };
    }

    /// How often each shift code appears in the selected person's month.
    pub fn code_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        if let Some(row) = self.current_row() {
            for code in row.shifts.values() {
                let code = code.trim();
                if !code.is_empty() {
                    *counts.entry(code.to_string()).or_insert(0) += 1;
                }
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosterview_core::{MonthGrid, ShiftData};
    use std::collections::BTreeMap;

    fn app(names: &[&str]) -> CalendarApp {
        let rows = names
            .iter()
            .map(|name| ShiftRow {
                name_surname: name.to_string(),
                shifts: BTreeMap::from([
                    (1, "08H".to_string()),
                    (2, "X".to_string()),
                    (3, "08H".to_string()),
                    (4, " ".to_string()),
                ]),
                ..Default::default()
            })
            .collect();
        CalendarApp::new(ShiftCalendar {
            data: ShiftData { rows, ..Default::default() },
            grid: MonthGrid::empty(2024, 9),
        })
    }

    #[test]
    fn test_person_navigation_wraps() {
        let mut app = app(&["Ana Lee", "Bo Kim", "Cy Park"]);
        app.previous_person();
        assert_eq!(app.selected, 2);
        app.next_person();
        assert_eq!(app.selected, 0);
        app.next_person();
        assert_eq!(app.current_row().unwrap().name_surname, "Bo Kim");
    }

    #[test]
    fn test_empty_roster() {
        let mut app = app(&[]);
        app.next_person();
        app.previous_person();
        assert_eq!(app.selected, 0);
        assert!(app.current_row().is_none());
        assert!(app.code_counts().is_empty());
    }

    #[test]
    fn test_code_counts() {
        let app = app(&["Ana Lee"]);
        let counts = app.code_counts();
        assert_eq!(counts.get("08H"), Some(&2));
        assert_eq!(counts.get("X"), Some(&1));
        assert_eq!(counts.len(), 2);
    }
}
