use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
    Frame,
};
use rosterview_core::time::month_name;
use rosterview_core::{classify_shift, shift_type, Rgb, ShiftColor, ShiftRow};

use crate::tui::app::CalendarApp;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const MUTED: Color = Color::DarkGray;
const PRIMARY: Color = Color::Cyan;

fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.0, color.1, color.2)
}

fn cell_style(color: Option<ShiftColor>) -> Style {
    match color {
        Some(c) => Style::default()
            .bg(rgb(c.background))
            .fg(c.text.map(rgb).unwrap_or(Color::Black)),
        None => Style::default(),
    }
}

pub fn draw(f: &mut Frame, app: &CalendarApp) {
    let size = f.area();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(size);

    draw_header(f, app, main_chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Length(1), Constraint::Percentage(30)])
        .split(main_chunks[1]);

    if let Some(row) = app.current_row() {
        draw_grid(f, app, row, content_chunks[0]);
        draw_summary(f, app, row, content_chunks[2]);
    } else {
        f.render_widget(
            Paragraph::new("No data available").alignment(Alignment::Center),
            main_chunks[1],
        );
    }

    let help = Line::from(vec![
        Span::styled("PERSON: ", Style::default().fg(MUTED)),
        Span::styled("←/→ ", Style::default().fg(Color::White)),
        Span::raw("  "),
        Span::styled("QUIT: ", Style::default().fg(MUTED)),
        Span::styled("q", Style::default().fg(Color::White)),
    ]);
    f.render_widget(Paragraph::new(help).alignment(Alignment::Center), main_chunks[2]);
}

fn draw_header(f: &mut Frame, app: &CalendarApp, area: Rect) {
    let grid = &app.calendar.grid;
    let name = app
        .current_row()
        .map(|r| r.name_surname.as_str())
        .unwrap_or("-");
    let title = Line::from(vec![
        Span::styled(
            format!("{} {}", month_name(grid.month).unwrap_or(""), grid.year),
            Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(" < ", Style::default().fg(Color::White)),
        Span::styled(name.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(" > ", Style::default().fg(Color::White)),
        Span::styled(
            format!("  {}/{}", app.selected + 1, app.people().len()),
            Style::default().fg(MUTED),
        ),
    ]);
    let header = Paragraph::new(title).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(MUTED)),
    );
    f.render_widget(header, area);
}

fn draw_grid(f: &mut Frame, app: &CalendarApp, row: &ShiftRow, area: Rect) {
    let grid = &app.calendar.grid;

    let header = Row::new(WEEKDAYS.iter().enumerate().map(|(i, w)| {
        let style = if i >= 5 { Style::default().fg(Color::Yellow) } else { Style::default() };
        Cell::from(*w).style(style.add_modifier(Modifier::BOLD))
    }));

    let weeks = grid.weeks.iter().map(|week| {
        let cells = week.days().iter().map(|date| {
            if !grid.is_current_month(*date) {
                return Cell::from(date.day().to_string()).style(Style::default().fg(MUTED));
            }
            let code = row.shift_on(date.day());
            let text = Text::from(vec![Line::from(date.day().to_string()), Line::from(code.to_string())]);
            Cell::from(text).style(cell_style(classify_shift(code)))
        });
        Row::new(cells).height(2).bottom_margin(1)
    });

    let table = Table::new(weeks, [Constraint::Ratio(1, 7); 7])
        .header(header.bottom_margin(1))
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(MUTED))
                .title(" Shifts "),
        );
    f.render_widget(table, area);
}

fn draw_summary(f: &mut Frame, app: &CalendarApp, row: &ShiftRow, area: Rect) {
    let stat = |label: &str, value: &str| {
        Line::from(vec![
            Span::styled(format!("{:<9}", label), Style::default().fg(MUTED)),
            Span::styled(value.to_string(), Style::default().add_modifier(Modifier::BOLD)),
        ])
    };

    let mut lines = vec![
        stat("Total", &row.total_shifts),
        stat("Day", &row.day_shifts),
        stat("Night", &row.night_shifts),
        stat("By call", &row.by_call),
        Line::from(""),
    ];

    for (code, count) in app.code_counts() {
        let label = shift_type(&code).map(|t| t.label).unwrap_or("");
        lines.push(Line::from(vec![
            Span::styled(format!(" {:<5}", code), cell_style(classify_shift(&code))),
            Span::raw(format!(" x{:<3} ", count)),
            Span::styled(label.to_string(), Style::default().fg(MUTED)),
        ]));
    }

    let summary = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(MUTED))
            .title(" Summary "),
    );
    f.render_widget(summary, area);
}
