//! Value and error state of one form instance, plus the queue every value
//! write goes through before it lands in that state

use serde_json::Value;
use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};

/// A write waiting to be applied
#[derive(Debug, Clone, PartialEq)]
pub enum FormUpdate {
    Set { name: String, value: Value },
}

/// Current values and validation messages, keyed by field name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    values: BTreeMap<String, Value>,
    errors: BTreeMap<String, String>,
}

impl FormState {
    pub fn new(defaults: BTreeMap<String, Value>) -> Self {
        Self {
            values: defaults,
            errors: BTreeMap::new(),
        }
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Replace the value of an existing field. Unknown names are ignored so
    /// the key set never drifts from the form definition.
    pub fn set_value(&mut self, name: &str, value: Value) -> bool {
        match self.values.get_mut(name) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn set_error(&mut self, name: &str, message: impl Into<String>) {
        self.errors.insert(name.to_string(), message.into());
    }

    pub fn clear_error(&mut self, name: &str) {
        self.errors.remove(name);
    }

    /// Restore every value from `defaults`; errors are left as they are
    pub fn reset(&mut self, defaults: BTreeMap<String, Value>) {
        self.values = defaults;
    }
}

/// The central update path. Widgets and handle writes push here; the form
/// drains the queue once per frame.
#[derive(Debug, Default)]
pub struct PendingUpdates {
    queue: RefCell<VecDeque<FormUpdate>>,
}

impl PendingUpdates {
    pub fn push(&self, update: FormUpdate) {
        self.queue.borrow_mut().push_back(update);
    }

    pub fn drain(&self) -> Vec<FormUpdate> {
        self.queue.borrow_mut().drain(..).collect()
    }

    pub fn clear(&self) {
        self.queue.borrow_mut().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

/// Change callback bound to one field
#[derive(Debug, Clone, Copy)]
pub struct OnChange<'a> {
    name: &'a str,
    pending: &'a PendingUpdates,
}

impl<'a> OnChange<'a> {
    pub fn new(name: &'a str, pending: &'a PendingUpdates) -> Self {
        Self { name, pending }
    }

    pub fn name(&self) -> &str {
        self.name
    }

    /// Queue `value` as this field's new value
    pub fn call(&self, value: impl Into<Value>) {
        self.pending.push(FormUpdate::Set {
            name: self.name.to_string(),
            value: value.into(),
        });
    }
}
