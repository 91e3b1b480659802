//! Field rendering: optional label, the widget, optional error message

use crate::state::{ControlProps, Field};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw one field into `area`, stacking label, widget and error vertically
pub fn draw_field(frame: &mut Frame, area: Rect, field: &Field, control: ControlProps<'_>) {
    let theme = control.theme;
    let label = field.label();

    let [label_area, widget_area, error_area] = Layout::vertical([
        Constraint::Length(u16::from(label.is_some())),
        Constraint::Length(field.widget_height()),
        Constraint::Length(u16::from(control.error_message.is_some())),
    ])
    .areas(area);

    if let Some(label) = label {
        let line = Line::from(Span::styled(label, theme.label_style(control.is_active)));
        frame.render_widget(Paragraph::new(line), label_area);
    }

    field.render_widget(frame, widget_area, control);

    if let Some(message) = control.error_message {
        let line = Line::from(Span::styled(message, theme.error_style()));
        frame.render_widget(Paragraph::new(line), error_area);
    }
}
