//! Field descriptors: one input widget plus its configuration

use super::form_state::OnChange;
use crate::schema::Schema;
use crate::ui::forms::field_renderer;
use crate::ui::theme::Theme;
use crate::ui::widgets::{InputProps, InputWidget};
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};
use serde_json::Value;
use std::fmt;

/// Configuration for one field: everything but the widget itself
pub struct FieldConfig<P> {
    pub label: Option<String>,
    pub default_value: Value,
    /// Fixed props handed to the widget on every render
    pub props: P,
    pub schema: Option<Box<dyn Schema>>,
}

impl<P> FieldConfig<P> {
    pub fn new(props: P) -> Self {
        Self {
            label: None,
            default_value: Value::Null,
            props,
            schema: None,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = value.into();
        self
    }

    pub fn schema(mut self, schema: impl Schema + 'static) -> Self {
        self.schema = Some(Box::new(schema));
        self
    }
}

impl<P: Default> Default for FieldConfig<P> {
    fn default() -> Self {
        Self::new(P::default())
    }
}

/// The generic contract every field is driven through
#[derive(Clone, Copy)]
pub struct ControlProps<'a> {
    pub value: &'a Value,
    pub on_change: OnChange<'a>,
    pub error_message: Option<&'a str>,
    pub is_active: bool,
    pub theme: &'a Theme,
}

/// Widget with its fixed props captured, so fields of different widget
/// types fit in one form
trait Template {
    fn height(&self) -> u16;
    fn render(&self, frame: &mut Frame, area: Rect, control: ControlProps<'_>, label: Option<&str>);
    fn handle_key(&self, key: KeyEvent, control: ControlProps<'_>, label: Option<&str>) -> bool;
}

struct Adapted<W: InputWidget> {
    widget: W,
    props: W::Props,
}

impl<W: InputWidget> Adapted<W> {
    /// Fixed props first, control props last so they always win
    fn input_props<'a>(
        &'a self,
        control: ControlProps<'a>,
        label: Option<&'a str>,
    ) -> InputProps<'a, W::Props> {
        InputProps {
            props: &self.props,
            value: control.value,
            on_change: control.on_change,
            error_message: control.error_message,
            label,
            is_active: control.is_active,
            theme: control.theme,
        }
    }
}

impl<W: InputWidget> Template for Adapted<W> {
    fn height(&self) -> u16 {
        self.widget.height(&self.props)
    }

    fn render(&self, frame: &mut Frame, area: Rect, control: ControlProps<'_>, label: Option<&str>) {
        self.widget
            .render(frame, area, self.input_props(control, label));
    }

    fn handle_key(&self, key: KeyEvent, control: ControlProps<'_>, label: Option<&str>) -> bool {
        self.widget
            .handle_key(key, self.input_props(control, label))
    }
}

/// A field descriptor. Immutable once built.
pub struct Field {
    label: Option<String>,
    default_value: Value,
    schema: Option<Box<dyn Schema>>,
    template: Box<dyn Template>,
}

impl Field {
    pub fn new<W: InputWidget>(widget: W, config: FieldConfig<W::Props>) -> Self {
        Self {
            label: config.label,
            default_value: config.default_value,
            schema: config.schema,
            template: Box::new(Adapted {
                widget,
                props: config.props,
            }),
        }
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn default_value(&self) -> &Value {
        &self.default_value
    }

    pub fn schema(&self) -> Option<&dyn Schema> {
        self.schema.as_deref()
    }

    /// Rows the field needs: label line, widget, error line
    pub fn height(&self, error_message: Option<&str>) -> u16 {
        let label = u16::from(self.label.is_some());
        let error = u16::from(error_message.is_some());
        label + self.template.height() + error
    }

    /// Draw label, widget and error message into `area`
    pub fn render(&self, frame: &mut Frame, area: Rect, control: ControlProps<'_>) {
        field_renderer::draw_field(frame, area, self, control);
    }

    pub(crate) fn widget_height(&self) -> u16 {
        self.template.height()
    }

    pub(crate) fn render_widget(&self, frame: &mut Frame, area: Rect, control: ControlProps<'_>) {
        self.template
            .render(frame, area, control, self.label.as_deref());
    }

    /// Forward a key to the widget; true when the widget consumed it
    pub fn handle_key(&self, key: KeyEvent, control: ControlProps<'_>) -> bool {
        self.template
            .handle_key(key, control, self.label.as_deref())
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("label", &self.label)
            .field("default_value", &self.default_value)
            .field("has_schema", &self.schema.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{self, MockSchema};
    use crate::state::forms::form_state::{FormUpdate, PendingUpdates};
    use crate::ui::widgets::{from_fn, TextInput, TextInputProps};
    use crossterm::event::{KeyCode, KeyModifiers};
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Extra {
        placeholder: &'static str,
    }

    fn control<'a>(
        value: &'a Value,
        pending: &'a PendingUpdates,
        theme: &'a Theme,
    ) -> ControlProps<'a> {
        ControlProps {
            value,
            on_change: OnChange::new("name", pending),
            error_message: Some("bad"),
            is_active: true,
            theme,
        }
    }

    #[test]
    fn test_config_builder() {
        let config = FieldConfig::new(TextInputProps::default())
            .label("Name")
            .default_value("test")
            .schema(schema::string().min(3));
        assert_eq!(config.label.as_deref(), Some("Name"));
        assert_eq!(config.default_value, json!("test"));
        assert!(config.schema.is_some());
    }

    #[test]
    fn test_field_keeps_configuration() {
        let field = Field::new(
            TextInput,
            FieldConfig::new(TextInputProps::default())
                .label("Name")
                .default_value("test"),
        );
        assert_eq!(field.label(), Some("Name"));
        assert_eq!(field.default_value(), &json!("test"));
        assert!(field.schema().is_none());
    }

    #[test]
    fn test_field_exposes_schema() {
        let mut mock = MockSchema::new();
        mock.expect_safe_parse().returning(|v| Ok(v.clone()));
        let field = Field::new(
            TextInput,
            FieldConfig::new(TextInputProps::default()).schema(mock),
        );
        let schema = field.schema().unwrap();
        assert_eq!(schema.safe_parse(&json!("x")), Ok(json!("x")));
    }

    #[test]
    fn test_height_adds_label_and_error_rows() {
        let bare = Field::new(TextInput, FieldConfig::default());
        assert_eq!(bare.height(None), 3);

        let labelled = Field::new(TextInput, FieldConfig::default().label("Name"));
        assert_eq!(labelled.height(None), 4);
        assert_eq!(labelled.height(Some("Too short")), 5);
    }

    #[test]
    fn test_widget_receives_control_props_and_fixed_props() {
        let seen: Rc<RefCell<Option<(Value, Option<String>, Option<String>, String)>>> =
            Rc::default();
        let sink = Rc::clone(&seen);
        let widget = from_fn::<Extra, _>(move |_frame, _area, input| {
            *sink.borrow_mut() = Some((
                input.value.clone(),
                input.error_message.map(str::to_string),
                input.label.map(str::to_string),
                input.props.placeholder.to_string(),
            ));
        });
        let field = Field::new(
            widget,
            FieldConfig::new(Extra {
                placeholder: "Type your name",
            })
            .label("Name"),
        );

        let pending = PendingUpdates::default();
        let theme = Theme::default();
        let value = json!("Ada");
        let backend = ratatui::backend::TestBackend::new(20, 5);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                field.render_widget(frame, area, control(&value, &pending, &theme));
            })
            .unwrap();

        assert_eq!(
            seen.borrow().clone(),
            Some((
                json!("Ada"),
                Some("bad".to_string()),
                Some("Name".to_string()),
                "Type your name".to_string(),
            ))
        );
    }

    #[test]
    fn test_handle_key_reports_change_through_on_change() {
        let field = Field::new(TextInput, FieldConfig::default());
        let pending = PendingUpdates::default();
        let theme = Theme::default();
        let value = json!("Ad");

        let consumed = field.handle_key(
            KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE),
            control(&value, &pending, &theme),
        );

        assert!(consumed);
        assert_eq!(
            pending.drain(),
            vec![FormUpdate::Set {
                name: "name".to_string(),
                value: json!("Ada"),
            }]
        );
    }

    #[test]
    fn test_debug_omits_widget() {
        let field = Field::new(TextInput, FieldConfig::default().label("Name"));
        let debug = format!("{field:?}");
        assert!(debug.contains("Field"));
        assert!(debug.contains("Name"));
    }
}
