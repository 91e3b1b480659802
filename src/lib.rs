//! Form Builder - declarative forms for Ratatui
//!
//! Declare named fields, each wrapping an input widget, assemble them into a
//! [`Form`], and drive it through a [`FormHandle`]: read and write values,
//! validate every field against its [`Schema`], and reset to defaults.
//!
//! ```ignore
//! use form_builder::prelude::*;
//!
//! let form = FormBuilder::new()
//!     .field(
//!         "name",
//!         Field::new(
//!             TextInput,
//!             FieldConfig::new(TextInputProps::placeholder("Type your name"))
//!                 .label("Name")
//!                 .default_value("")
//!                 .schema(schema::string().min(5)),
//!         ),
//!     )
//!     .build();
//!
//! let handle = form.handle();
//! let result = handle.check().await;
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod platform;
pub mod schema;
pub mod state;
pub mod ui;

pub use error::FormError;
pub use schema::{Issue, Schema, SchemaError};
pub use state::{Field, FieldConfig, Form, FormBuilder, FormHandle, FormValues, OnChange, Values};
pub use ui::widgets::{InputProps, InputWidget};

/// Everything needed to declare and drive a form
pub mod prelude {
    pub use crate::schema::{self, Schema};
    pub use crate::state::{Field, FieldConfig, Form, FormBuilder, FormHandle, FormValues};
    pub use crate::ui::theme::Theme;
    pub use crate::ui::widgets::{
        from_fn, InputProps, InputWidget, NumberInput, NumberInputProps, TextInput,
        TextInputProps, Toggle, ToggleProps,
    };
    pub use crate::FormError;
}
