//! Reusable UI components

mod dialog;

pub use dialog::{render_result_dialog, CheckOutcome};
