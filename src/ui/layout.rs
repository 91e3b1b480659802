//! Layout components (form panel, status bar)

use crate::app::App;
use crate::platform::{QUIT_SHORTCUT, RESET_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form panel and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let [content, status] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);
    (content, status)
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let theme = app.form().theme();
    let mut spans = vec![Span::styled(
        format!(" Tab:next  {SUBMIT_SHORTCUT}:submit  {RESET_SHORTCUT}:reset"),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.status_message {
        let color = if app.handle().errors().is_empty() {
            theme.accent
        } else {
            theme.error
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = format!(" {QUIT_SHORTCUT}:quit ");
    let width = quit_hint.len() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(width),
        y: area.y,
        width: width.min(area.width),
        height: area.height.min(1),
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
