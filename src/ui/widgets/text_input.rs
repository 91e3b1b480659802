//! Text input widget

use super::{display_text, InputProps, InputWidget};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Debug, Clone, Default)]
pub struct TextInputProps {
    /// Shown instead of the empty-value marker when the field is empty
    pub placeholder: Option<String>,
    /// Enter inserts a newline instead of being ignored
    pub is_multiline: bool,
    /// Rows of text visible for multi-line inputs
    pub rows: u16,
}

impl TextInputProps {
    pub fn placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            placeholder: Some(placeholder.into()),
            ..Self::default()
        }
    }

    pub fn multiline(rows: u16) -> Self {
        Self {
            is_multiline: true,
            rows,
            ..Self::default()
        }
    }
}

/// Bordered text box with a cursor glyph when focused
#[derive(Debug, Clone, Copy, Default)]
pub struct TextInput;

impl InputWidget for TextInput {
    type Props = TextInputProps;

    fn height(&self, props: &TextInputProps) -> u16 {
        if props.is_multiline {
            props.rows.max(1) + 2
        } else {
            3
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, input: InputProps<'_, TextInputProps>) {
        let theme = input.theme;
        let style = theme.field_style(input.is_active);
        let cursor = theme.cursor(input.is_active);
        let value = display_text(input.value);

        let display_value = if value.is_empty() && !input.is_active {
            input
                .props
                .placeholder
                .clone()
                .unwrap_or_else(|| theme.empty_placeholder.clone())
        } else {
            value
        };

        let content = if input.props.is_multiline {
            let mut lines: Vec<Line> = display_value
                .lines()
                .map(|l| Line::from(Span::styled(l.to_string(), style)))
                .collect();
            if input.is_active {
                let cursor_span = Span::styled(cursor.to_string(), Style::default().fg(theme.accent));
                match lines.last_mut() {
                    Some(last) if !display_value.ends_with('\n') => last.spans.push(cursor_span),
                    _ => lines.push(Line::from(cursor_span)),
                }
            }
            Paragraph::new(lines)
        } else {
            Paragraph::new(Line::from(vec![
                Span::styled(display_value, style),
                Span::styled(cursor.to_string(), Style::default().fg(theme.accent)),
            ]))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style);

        frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
    }

    fn handle_key(&self, key: KeyEvent, input: InputProps<'_, TextInputProps>) -> bool {
        let mut text = display_text(input.value);
        match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => text.clear(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                text.push(c)
            }
            KeyCode::Backspace => {
                if text.pop().is_none() {
                    return true;
                }
            }
            KeyCode::Enter if input.props.is_multiline => text.push('\n'),
            _ => return false,
        }
        input.on_change.call(text);
        true
    }
}
