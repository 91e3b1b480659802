//! Form rendering module
//!
//! - `field_renderer`: label, widget and error message of one field
//! - `form_renderer`: every field of a form, stacked in order

pub mod field_renderer;
pub mod form_renderer;

pub use field_renderer::draw_field;
pub use form_renderer::draw_form;
