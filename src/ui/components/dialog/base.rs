//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Horizontal padding inside the border, both sides together
const PADDING: u16 = 4;

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    pub title_color: Color,
    pub border_color: Color,
    /// Message content, paragraphs separated by `\n`
    pub message: &'a str,
    /// Hint shown at the bottom (e.g. "Press Enter to dismiss")
    pub hint: Option<Line<'a>>,
    pub max_width: u16,
}

impl Default for DialogConfig<'_> {
    fn default() -> Self {
        Self {
            title: "Dialog",
            title_color: Color::White,
            border_color: Color::White,
            message: "",
            hint: None,
            max_width: 60,
        }
    }
}

/// Outer size of the dialog for `config`, before clamping to the screen
fn dialog_size(config: &DialogConfig, lines: &[String]) -> (u16, u16) {
    let widest_line = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let hint_width = config.hint.as_ref().map_or(0, Line::width);
    let content_width = widest_line
        .max(hint_width)
        .max(config.title.chars().count()) as u16;
    let width = (content_width + PADDING + 2).min(config.max_width);

    // title + blank + message + (blank + hint) + borders
    let hint_rows = if config.hint.is_some() { 2 } else { 0 };
    let height = (2 + lines.len() as u16 + hint_rows + 2).max(5);
    (width, height)
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    let text_width = config.max_width.saturating_sub(PADDING + 2) as usize;
    let lines = wrap_text(config.message, text_width);
    let (width, height) = dialog_size(&config, &lines);

    let dialog_area = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width: width.min(area.width),
        height: height.min(area.height),
    };

    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(lines.into_iter().map(Line::from));

    if let Some(hint) = config.hint {
        content.push(Line::from(""));
        content.push(hint);
    }

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.border_color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// Word-wrap `text` to `max_width` columns. Leading indentation of each
/// paragraph is kept, and repeated on its continuation lines.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let body = paragraph.trim_start();
        let indent = &paragraph[..paragraph.len() - body.len()];
        if body.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut line = indent.to_string();
        let mut has_word = false;
        for word in body.split_whitespace() {
            let width = line.chars().count();
            if has_word && width + 1 + word.chars().count() > max_width {
                lines.push(std::mem::replace(&mut line, indent.to_string()));
                has_word = false;
            }
            if has_word {
                line.push(' ');
            }
            line.push_str(word);
            has_word = true;
        }
        lines.push(line);
    }

    lines
}
