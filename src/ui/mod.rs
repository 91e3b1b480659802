//! UI module for rendering the TUI

pub mod components;
pub mod forms;
mod layout;
pub mod theme;
pub mod widgets;

use crate::app::App;
use components::render_result_dialog;
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders},
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = layout::create_layout(frame.area());
    let theme = app.form().theme();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.field_style(false))
        .title(" Sign up ");
    let inner = block.inner(content_area);
    frame.render_widget(block, content_area);

    let form_area = Rect {
        height: inner.height.min(app.form().height()),
        ..inner
    };
    app.form().render(frame, form_area);

    layout::draw_status_bar(frame, status_area, app);

    if let Some(outcome) = &app.result {
        render_result_dialog(frame, outcome, theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::Theme;
    use crate::ui::widgets::test_support::lines;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use tokio_test::block_on;

    fn render(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(70, 24)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        lines(terminal.backend().buffer())
    }

    #[test]
    fn test_draws_every_field_and_status_bar() {
        let app = App::new(Theme::default());
        let rows = render(&app);
        let screen = rows.join("\n");
        for label in ["Sign up", "Name", "Email", "Age", "Send me the newsletter"] {
            assert!(screen.contains(label), "missing {label}");
        }
        assert!(rows[23].contains("Ctrl+S:submit"));
        assert!(rows[23].contains("Esc:quit"));
    }

    #[test]
    fn test_failed_submit_shows_dialog_and_messages() {
        let mut app = App::new(Theme::default());
        block_on(app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))).unwrap();
        let screen = render(&app).join("\n");
        assert!(screen.contains("Form has errors"));
        assert!(screen.contains("Invalid email"));
    }
}
