//! Form assembly: the renderable form and its imperative handle

use super::field::{ControlProps, Field};
use super::focus::FocusCycle;
use super::form_state::{FormState, FormUpdate, OnChange, PendingUpdates};
use crate::error::FormError;
use crate::ui::forms::form_renderer;
use crate::ui::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::cell::{Ref, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

static NULL: Value = Value::Null;

/// Ordered field definitions plus the state they drive, shared by the form
/// and every handle
struct Shared {
    fields: Vec<(String, Field)>,
    state: RefCell<FormState>,
    pending: PendingUpdates,
}

impl Shared {
    fn defaults(&self) -> BTreeMap<String, Value> {
        self.fields
            .iter()
            .map(|(name, field)| (name.clone(), field.default_value().clone()))
            .collect()
    }

    fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|(n, _)| n == name)
    }
}

/// Collects named fields in declaration order
#[derive(Debug, Default)]
pub struct FormBuilder {
    fields: Vec<(String, Field)>,
    theme: Theme,
}

impl FormBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field. Re-using a name replaces the earlier field but keeps its
    /// position.
    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = field,
            None => self.fields.push((name, field)),
        }
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn build(self) -> Form {
        let defaults = self
            .fields
            .iter()
            .map(|(name, field)| (name.clone(), field.default_value().clone()))
            .collect();
        let shared = Shared {
            fields: self.fields,
            state: RefCell::new(FormState::new(defaults)),
            pending: PendingUpdates::default(),
        };
        tracing::debug!("Built form with {} field(s)", shared.fields.len());

        Form {
            shared: Rc::new(shared),
            active_field_index: 0,
            theme: self.theme,
        }
    }
}

/// A mounted form: owns focus and theme, renders every field, and routes
/// keys to the focused widget
pub struct Form {
    shared: Rc<Shared>,
    active_field_index: usize,
    theme: Theme,
}

impl Form {
    /// The imperative handle for reading, validating and resetting
    pub fn handle(&self) -> FormHandle {
        FormHandle {
            shared: Rc::clone(&self.shared),
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.shared.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Apply queued writes in order. Returns true if anything changed and
    /// the form should be redrawn.
    pub fn apply_pending(&mut self) -> bool {
        let updates = self.shared.pending.drain();
        if updates.is_empty() {
            return false;
        }

        let mut state = self.shared.state.borrow_mut();
        let mut changed = false;
        for update in updates {
            match update {
                FormUpdate::Set { name, value } => {
                    tracing::debug!("Setting field {name:?}");
                    changed |= state.set_value(&name, value);
                }
            }
        }
        changed
    }

    /// Rows needed to show every field with its current error state
    pub fn height(&self) -> u16 {
        let state = self.shared.state.borrow();
        self.shared
            .fields
            .iter()
            .map(|(name, field)| field.height(state.error(name)))
            .sum()
    }

    /// Draw every field, in declaration order, into `area`
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        form_renderer::draw_form(frame, area, self);
    }

    /// Handle a key: Tab/BackTab move focus, everything else goes to the
    /// focused widget first, then Up/Down move focus if it was not consumed.
    /// Writes are applied before returning.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        self.apply_pending();

        let handled = match key.code {
            KeyCode::Tab => {
                self.next_field();
                true
            }
            KeyCode::BackTab => {
                self.prev_field();
                true
            }
            _ => {
                let consumed = self.with_control(self.active_field_index, |field, control| {
                    field.handle_key(key, control)
                });
                match (consumed, key.code) {
                    (Some(true), _) => true,
                    (_, KeyCode::Down) => {
                        self.next_field();
                        true
                    }
                    (_, KeyCode::Up) => {
                        self.prev_field();
                        true
                    }
                    _ => false,
                }
            }
        };

        self.apply_pending();
        handled
    }

    /// Run `f` with field `index` and its control props
    pub(crate) fn with_control<R>(
        &self,
        index: usize,
        f: impl FnOnce(&Field, ControlProps<'_>) -> R,
    ) -> Option<R> {
        let (name, field) = self.shared.fields.get(index)?;
        let state = self.shared.state.borrow();
        let control = ControlProps {
            value: state.value(name).unwrap_or(&NULL),
            on_change: OnChange::new(name, &self.shared.pending),
            error_message: state.error(name),
            is_active: index == self.active_field_index,
            theme: &self.theme,
        };
        Some(f(field, control))
    }

    pub(crate) fn field_heights(&self) -> Vec<u16> {
        let state = self.shared.state.borrow();
        self.shared
            .fields
            .iter()
            .map(|(name, field)| field.height(state.error(name)))
            .collect()
    }
}

impl FocusCycle for Form {
    fn field_count(&self) -> usize {
        self.shared.fields.len()
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count().saturating_sub(1));
    }
}

/// Imperative handle onto a form's state. Cheap to clone; all clones see
/// the same form.
#[derive(Clone)]
pub struct FormHandle {
    shared: Rc<Shared>,
}

impl FormHandle {
    /// Live view over current values
    pub fn values(&self) -> Values<'_> {
        Values {
            shared: &self.shared,
        }
    }

    /// Validate every field that has a schema.
    ///
    /// Successes clear the field's error, failures record the first issue
    /// message. Resolves to the parsed values (raw values for fields without
    /// a schema) when nothing failed, `None` otherwise. Error state is
    /// updated either way. Overlapping calls are not coordinated: the last
    /// write per field wins.
    pub async fn check(&self) -> Option<FormValues> {
        // Schemas may read the form through a handle, so no borrow is held
        // while they run
        let values = self.shared.state.borrow().values().clone();
        let mut result = Map::new();
        let mut outcomes = Vec::new();

        for (name, field) in &self.shared.fields {
            let value = values.get(name).cloned().unwrap_or(Value::Null);
            match field.schema() {
                Some(schema) => match schema.safe_parse(&value) {
                    Ok(parsed) => {
                        outcomes.push((name.as_str(), None));
                        result.insert(name.clone(), parsed);
                    }
                    Err(err) => {
                        outcomes.push((name.as_str(), Some(err.first_message().to_string())));
                    }
                },
                None => {
                    result.insert(name.clone(), value);
                }
            }
        }

        let mut failed = Vec::new();
        let mut state = self.shared.state.borrow_mut();
        for (name, message) in outcomes {
            match message {
                Some(message) => {
                    state.set_error(name, message);
                    failed.push(name);
                }
                None => state.clear_error(name),
            }
        }
        drop(state);

        if failed.is_empty() {
            tracing::debug!("Form check passed");
            Some(FormValues(result))
        } else {
            tracing::debug!("Form check failed for {}", failed.join(", "));
            None
        }
    }

    /// Restore every value to its default and drop queued writes. Errors
    /// stay until the next [`check`](Self::check).
    pub fn reset(&self) {
        self.shared.pending.clear();
        self.shared.state.borrow_mut().reset(self.shared.defaults());
        tracing::debug!("Form reset to defaults");
    }

    pub fn error(&self, name: &str) -> Option<String> {
        self.shared.state.borrow().error(name).map(str::to_string)
    }

    pub fn errors(&self) -> BTreeMap<String, String> {
        self.shared.state.borrow().errors().clone()
    }

    /// True while writes are queued but not yet applied
    pub fn has_pending(&self) -> bool {
        !self.shared.pending.is_empty()
    }
}

/// Read/write view over a form's values
pub struct Values<'a> {
    shared: &'a Shared,
}

impl Values<'_> {
    /// Current value of `name`
    pub fn get(&self, name: &str) -> Option<Value> {
        self.shared.state.borrow().value(name).cloned()
    }

    /// Borrow the whole value map
    pub fn borrow(&self) -> Ref<'_, BTreeMap<String, Value>> {
        Ref::map(self.shared.state.borrow(), FormState::values)
    }

    pub fn snapshot(&self) -> BTreeMap<String, Value> {
        self.shared.state.borrow().values().clone()
    }

    /// Queue a write. It becomes visible once the form applies pending
    /// updates, which it does every frame.
    pub fn set(&self, name: &str, value: impl Into<Value>) -> Result<(), FormError> {
        if !self.shared.contains(name) {
            tracing::warn!("Rejected write to unknown field {name:?}");
            return Err(FormError::UnknownField(name.to_string()));
        }
        self.shared.pending.push(FormUpdate::Set {
            name: name.to_string(),
            value: value.into(),
        });
        Ok(())
    }
}

/// The result of a successful [`FormHandle::check`]: one entry per field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormValues(Map<String, Value>);

impl FormValues {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// Convert into a caller-defined type
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, FormError> {
        Ok(serde_json::from_value(Value::Object(self.0.clone()))?)
    }
}
