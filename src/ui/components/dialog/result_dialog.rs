//! Dialog showing the outcome of a form check

use super::base::{render_dialog, DialogConfig};
use crate::ui::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};

/// What the last check produced
#[derive(Debug, Clone, PartialEq)]
pub enum CheckOutcome {
    /// Validated values, pretty-printed
    Valid(String),
    /// Number of fields that failed
    Invalid(usize),
}

impl CheckOutcome {
    fn title(&self) -> &'static str {
        match self {
            Self::Valid(_) => "Form submitted",
            Self::Invalid(_) => "Form has errors",
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Valid(json) => json.clone(),
            Self::Invalid(1) => "1 field needs attention.".to_string(),
            Self::Invalid(n) => format!("{n} fields need attention."),
        }
    }
}

/// Render the check result centered on the screen
pub fn render_result_dialog(frame: &mut Frame, outcome: &CheckOutcome, theme: &Theme) {
    let color = match outcome {
        CheckOutcome::Valid(_) => theme.accent,
        CheckOutcome::Invalid(_) => theme.error,
    };
    let key_style = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);
    let hint = Line::from(vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ]);
    let message = outcome.message();

    render_dialog(
        frame,
        DialogConfig {
            title: outcome.title(),
            title_color: color,
            border_color: color,
            message: &message,
            hint: Some(hint),
            max_width: 60,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::test_support::lines;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(outcome: &CheckOutcome) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(50, 12)).unwrap();
        terminal
            .draw(|frame| render_result_dialog(frame, outcome, &Theme::default()))
            .unwrap();
        lines(terminal.backend().buffer())
    }

    #[test]
    fn test_valid_outcome_shows_values() {
        let json = serde_json::to_string_pretty(&serde_json::json!({ "name": "Ada" })).unwrap();
        let rows = draw(&CheckOutcome::Valid(json));
        assert!(rows.iter().any(|r| r.contains("Form submitted")));
        assert!(rows.iter().any(|r| r.contains("│  \"name\": \"Ada\"")));
        assert!(rows.iter().any(|r| r.contains("Press Enter or Esc to dismiss")));
    }

    #[test]
    fn test_invalid_outcome_counts_fields() {
        let rows = draw(&CheckOutcome::Invalid(2));
        assert!(rows.iter().any(|r| r.contains("Form has errors")));
        assert!(rows.iter().any(|r| r.contains("2 fields need attention.")));
    }

    #[test]
    fn test_single_invalid_field_is_singular() {
        assert_eq!(CheckOutcome::Invalid(1).message(), "1 field needs attention.");
    }
}
