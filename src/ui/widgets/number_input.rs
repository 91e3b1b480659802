//! Integer input widget

use super::{InputProps, InputWidget};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct NumberInputProps {
    pub min: Option<i64>,
    pub max: Option<i64>,
    /// Amount Up/Down add or subtract
    pub step: i64,
}

impl Default for NumberInputProps {
    fn default() -> Self {
        Self {
            min: None,
            max: None,
            step: 1,
        }
    }
}

impl NumberInputProps {
    pub fn bounded(min: i64, max: i64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::default()
        }
    }

    fn clamp(&self, n: i64) -> i64 {
        let n = self.min.map_or(n, |min| n.max(min));
        self.max.map_or(n, |max| n.min(max))
    }
}

/// Digits edit the number, `-` flips the sign, Up/Down step it.
/// Stepping clamps to the bounds; typing does not, so schemas can still
/// report out-of-range values. A fractional value is shown as-is; typing
/// replaces it with an integer and Backspace clears it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberInput;

/// Integer held by `value`. Fractional or out-of-range numbers are not
/// integers and yield `None`.
fn current(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl InputWidget for NumberInput {
    type Props = NumberInputProps;

    fn render(&self, frame: &mut Frame, area: Rect, input: InputProps<'_, NumberInputProps>) {
        let theme = input.theme;
        let style = theme.field_style(input.is_active);

        let display = match (current(input.value), input.value) {
            (Some(n), _) => n.to_string(),
            (None, Value::Number(n)) => n.to_string(),
            (None, _) if input.is_active => String::new(),
            (None, _) => theme.empty_placeholder.clone(),
        };

        let hint = match (input.props.min, input.props.max) {
            (Some(min), Some(max)) if input.is_active => format!("  ({min}..={max})"),
            _ => String::new(),
        };

        let line = Line::from(vec![
            Span::styled(display, style),
            Span::styled(
                theme.cursor(input.is_active).to_string(),
                Style::default().fg(theme.accent),
            ),
            Span::styled(hint, Style::default().fg(theme.muted)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style);

        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn handle_key(&self, key: KeyEvent, input: InputProps<'_, NumberInputProps>) -> bool {
        let props = input.props;
        let value = current(input.value);
        let next = match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let digit = i64::from(c.to_digit(10).unwrap_or(0));
                let n = value.unwrap_or(0);
                let signed = if n < 0 { -digit } else { digit };
                Some(n.saturating_mul(10).saturating_add(signed))
            }
            KeyCode::Char('-') => Some(value.unwrap_or(0).saturating_neg()),
            KeyCode::Backspace => match value {
                Some(n) if n / 10 != 0 => Some(n / 10),
                Some(_) => None,
                None if input.value.is_null() => return true,
                None => None,
            },
            KeyCode::Up => Some(props.clamp(value.unwrap_or(0).saturating_add(props.step))),
            KeyCode::Down => Some(props.clamp(value.unwrap_or(0).saturating_sub(props.step))),
            _ => return false,
        };

        match next {
            Some(n) => input.on_change.call(n),
            None => input.on_change.call(Value::Null),
        }
        true
    }
}
