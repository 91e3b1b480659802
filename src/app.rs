//! Demo application: a sign-up form driven through its handle

use crate::platform::{is_shortcut, RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::schema;
use crate::state::{Field, FieldConfig, Form, FormBuilder, FormHandle};
use crate::ui::components::CheckOutcome;
use crate::ui::theme::Theme;
use crate::ui::widgets::{NumberInput, NumberInputProps, TextInput, TextInputProps, Toggle, ToggleProps};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Build the sign-up form shown by the binary
pub fn signup_form(theme: Theme) -> Form {
    FormBuilder::new()
        .theme(theme)
        .field(
            "name",
            Field::new(
                TextInput,
                FieldConfig::new(TextInputProps::placeholder("Type your name"))
                    .label("Name")
                    .default_value("")
                    .schema(schema::string().trim().min(2).max(60)),
            ),
        )
        .field(
            "email",
            Field::new(
                TextInput,
                FieldConfig::new(TextInputProps::placeholder("you@example.com"))
                    .label("Email")
                    .default_value("")
                    .schema(schema::string().trim().email()),
            ),
        )
        .field(
            "age",
            Field::new(
                NumberInput,
                FieldConfig::new(NumberInputProps::bounded(0, 120))
                    .label("Age")
                    .default_value(18)
                    .schema(schema::number().int().min(13.0).max(120.0)),
            ),
        )
        .field(
            "newsletter",
            Field::new(
                Toggle,
                FieldConfig::new(ToggleProps::text("Send me the newsletter"))
                    .default_value(false)
                    .schema(schema::boolean()),
            ),
        )
        .build()
}

/// Main application struct
pub struct App {
    form: Form,
    handle: FormHandle,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
    /// Outcome of the last submit, shown as a dialog until dismissed
    pub result: Option<CheckOutcome>,
    quit: bool,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self::with_form(signup_form(theme))
    }

    pub fn with_form(form: Form) -> Self {
        let handle = form.handle();
        Self {
            form,
            handle,
            status_message: None,
            result: None,
            quit: false,
        }
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn handle(&self) -> &FormHandle {
        &self.handle
    }

    /// Apply queued value writes; true if the screen needs a redraw
    pub fn apply_pending(&mut self) -> bool {
        self.form.apply_pending()
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.result.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.result = None;
            }
            return Ok(());
        }

        if key.code == KeyCode::Esc || is_shortcut(&key, 'c') {
            self.quit = true;
        } else if is_shortcut(&key, 's') {
            self.submit().await?;
        } else if is_shortcut(&key, 'r') {
            self.handle.reset();
            self.status_message = Some("Form reset to defaults".to_string());
        } else if self.form.handle_key(key) {
            self.status_message = None;
        }
        Ok(())
    }

    async fn submit(&mut self) -> Result<()> {
        self.apply_pending();
        match self.handle.check().await {
            Some(values) => {
                tracing::info!("Form submitted");
                let json = serde_json::to_string_pretty(&values)?;
                self.status_message = Some("Submitted".to_string());
                self.result = Some(CheckOutcome::Valid(json));
            }
            None => {
                let failed = self.handle.errors().len();
                tracing::info!("Form rejected with {failed} error(s)");
                self.status_message = Some(format!(
                    "Fix the highlighted fields and press {SUBMIT_SHORTCUT} again ({RESET_SHORTCUT} to start over)"
                ));
                self.result = Some(CheckOutcome::Invalid(failed));
            }
        }
        Ok(())
    }
}
