//! Input widgets
//!
//! Any type implementing [`InputWidget`] can back a form field:
//! - `text_input`: single or multi-line text
//! - `number_input`: integers with optional bounds
//! - `toggle`: boolean checkbox
//! - `from_fn`: adapts a plain render function

mod from_fn;
mod number_input;
mod text_input;
mod toggle;

use crate::state::OnChange;
use crate::ui::theme::Theme;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use serde_json::Value;

pub use from_fn::{from_fn, FnWidget};
pub use number_input::{NumberInput, NumberInputProps};
pub use text_input::{TextInput, TextInputProps};
pub use toggle::{Toggle, ToggleProps};

/// Everything a widget receives for one render or key event.
///
/// `props` are the fixed props from the field configuration. The remaining
/// fields are owned by the form and cannot be overridden by them.
pub struct InputProps<'a, P> {
    pub props: &'a P,
    pub value: &'a Value,
    pub on_change: OnChange<'a>,
    pub error_message: Option<&'a str>,
    pub label: Option<&'a str>,
    pub is_active: bool,
    pub theme: &'a Theme,
}

impl<P> Clone for InputProps<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for InputProps<'_, P> {}

/// An input widget usable as a form field
pub trait InputWidget: 'static {
    /// Fixed, widget-specific props
    type Props: 'static;

    /// Rows the widget occupies
    fn height(&self, _props: &Self::Props) -> u16 {
        3
    }

    fn render(&self, frame: &mut Frame, area: Rect, input: InputProps<'_, Self::Props>);

    /// React to a key while focused, reporting new values through
    /// `input.on_change`. Returns true when the key was consumed.
    fn handle_key(&self, _key: KeyEvent, _input: InputProps<'_, Self::Props>) -> bool {
        false
    }
}

/// Text shown for a value: strings as-is, `null` as empty, anything else as JSON
pub(crate) fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
