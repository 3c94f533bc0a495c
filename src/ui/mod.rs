use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use settings_rows::rows::Styled;

use crate::app::App;

pub fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();
    let theme = &app.env.theme;

    f.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Min(0),    // Rows
            Constraint::Length(1), // Status line
            Constraint::Length(1), // Footer
        ])
        .split(area);

    draw_header(f, app, chunks[0]);
    draw_rows(f, app, chunks[1]);
    draw_status_line(f, app, chunks[2]);
    draw_footer(f, app, chunks[3]);
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        app.config.app_name.as_str(),
        Style::default()
            .fg(app.env.theme.text)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

/// Stack rows top to bottom; once one row does not fit, the rest are hidden
fn draw_rows(f: &mut Frame, app: &mut App, area: Rect) {
    let mut areas = Vec::with_capacity(app.rows.len());
    let mut y = area.y;
    let mut overflowed = false;

    for (index, row) in app.rows.iter().enumerate() {
        let height = row.height(&app.env);
        if overflowed || y.saturating_add(height) > area.bottom() {
            overflowed = true;
            areas.push(Rect::new(area.x, y, 0, 0));
            continue;
        }

        let row_area = Rect::new(area.x, y, area.width, height);
        f.render_widget(
            Styled::new(&**row, &app.env).interaction(app.interaction(index)),
            row_area,
        );
        areas.push(row_area);
        y += height;
    }

    app.row_areas = areas;
}

fn draw_status_line(f: &mut Frame, app: &App, area: Rect) {
    let Some(status) = app.status_message() else {
        return;
    };
    let line = Paragraph::new(Span::styled(
        status,
        Style::default().fg(app.env.theme.accent),
    ))
    .alignment(Alignment::Center);
    f.render_widget(line, area);
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let key = Style::default().fg(app.env.theme.accent);
    let hint = Style::default().fg(app.env.theme.text_dim);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("↑↓", key),
        Span::styled(" move  ", hint),
        Span::styled("Enter", key),
        Span::styled(" open  ", hint),
        Span::styled("q", key),
        Span::styled(" quit", hint),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(footer, area);
}
