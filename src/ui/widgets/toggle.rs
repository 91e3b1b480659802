//! Checkbox widget

use super::{InputProps, InputWidget};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use serde_json::Value;

#[derive(Debug, Clone, Default)]
pub struct ToggleProps {
    /// Text after the checkbox; falls back to the field label
    pub text: Option<String>,
}

impl ToggleProps {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }
}

/// `[x]` / `[ ]` box flipped with Space or Enter
#[derive(Debug, Clone, Copy, Default)]
pub struct Toggle;

impl InputWidget for Toggle {
    type Props = ToggleProps;

    fn render(&self, frame: &mut Frame, area: Rect, input: InputProps<'_, ToggleProps>) {
        let checked = input.value.as_bool().unwrap_or(false);
        let checkbox = if checked { "[x]" } else { "[ ]" };
        let text = input
            .props
            .text
            .as_deref()
            .or(input.label)
            .unwrap_or_default();
        let style = input.theme.field_style(input.is_active);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(style);

        let paragraph = Paragraph::new(format!("{checkbox} {text}"))
            .style(style)
            .block(block);
        frame.render_widget(paragraph, area);
    }

    fn handle_key(&self, key: KeyEvent, input: InputProps<'_, ToggleProps>) -> bool {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => {
                let checked = input.value.as_bool().unwrap_or(false);
                input.on_change.call(Value::Bool(!checked));
                true
            }
            _ => false,
        }
    }
}
