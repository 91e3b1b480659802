//! Form rendering: one container per field, in declaration order

use crate::state::Form;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};

/// Stack every field of `form` vertically inside `area`.
///
/// Each field gets exactly the rows it asks for; fields that no longer fit
/// are clipped by the layout.
pub fn draw_form(frame: &mut Frame, area: Rect, form: &Form) {
    let heights = form.field_heights();
    let constraints = heights
        .iter()
        .map(|h| Constraint::Length(*h))
        .chain(std::iter::once(Constraint::Min(0)));
    let areas = Layout::vertical(constraints).split(area);

    for (index, &field_area) in areas.iter().take(heights.len()).enumerate() {
        if field_area.height == 0 {
            continue;
        }
        form.with_control(index, |field, control| {
            field.render(frame, field_area, control);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;
    use crate::state::{Field, FieldConfig, FocusCycle, FormBuilder};
    use crate::ui::widgets::test_support::lines;
    use crate::ui::widgets::{TextInput, TextInputProps, Toggle, ToggleProps};
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(form: &Form, size: (u16, u16)) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(size.0, size.1)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw_form(frame, area, form);
            })
            .unwrap();
        lines(terminal.backend().buffer())
    }

    fn signup() -> Form {
        FormBuilder::new()
            .field(
                "name",
                Field::new(
                    TextInput,
                    FieldConfig::new(TextInputProps::default())
                        .label("Name")
                        .default_value("test")
                        .schema(schema::string().min(5)),
                ),
            )
            .field(
                "newsletter",
                Field::new(
                    Toggle,
                    FieldConfig::new(ToggleProps::text("News"))
                        .default_value(false),
                ),
            )
            .build()
    }

    #[test]
    fn test_fields_render_in_order() {
        let mut form = signup();
        form.set_active_field(1);
        let rows = draw(&form, (12, 8));
        assert_eq!(
            rows,
            vec![
                "Name        ".to_string(),
                "┌──────────┐".to_string(),
                "│test      │".to_string(),
                "└──────────┘".to_string(),
                "┌──────────┐".to_string(),
                "│[ ] News  │".to_string(),
                "└──────────┘".to_string(),
                "            ".to_string(),
            ]
        );
    }

    #[test]
    fn test_error_pushes_later_fields_down() {
        let mut form = signup();
        form.set_active_field(1);
        tokio_test::block_on(form.handle().check());

        let rows = draw(&form, (44, 8));
        assert_eq!(
            rows[4].trim_end(),
            "String must contain at least 5 character(s)"
        );
        assert!(rows[6].contains("[ ] News"));
    }

    #[test]
    fn test_reset_value_shows_on_next_draw() {
        let mut form = signup();
        let handle = form.handle();
        handle.values().set("name", "changed").unwrap();
        form.apply_pending();
        form.set_active_field(1);
        assert!(draw(&form, (12, 8))[2].contains("changed"));

        handle.reset();
        assert!(draw(&form, (12, 8))[2].contains("test"));
    }

    #[test]
    fn test_small_area_clips_trailing_fields() {
        let form = signup();
        let rows = draw(&form, (12, 3));
        assert_eq!(rows[0], "Name        ");
        assert!(!rows.iter().any(|r| r.contains("News")));
    }
}
