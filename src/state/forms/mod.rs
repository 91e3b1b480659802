//! Form domain layer
//!
//! Field descriptors, the per-form value and error state, and the assembled
//! [`Form`] with its [`FormHandle`].

mod field;
mod focus;
mod form;
mod form_state;

pub use field::{ControlProps, Field, FieldConfig};
pub use focus::FocusCycle;
pub use form::{Form, FormBuilder, FormHandle, FormValues, Values};
pub use form_state::{FormState, FormUpdate, OnChange, PendingUpdates};
