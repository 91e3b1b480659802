//! Colors and glyphs shared by the field renderer and the stock widgets

use crate::config::FormConfig;
use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub accent: Color,
    pub muted: Color,
    pub error: Color,
    pub empty_placeholder: String,
    pub cursor: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Cyan,
            muted: Color::DarkGray,
            error: Color::Red,
            empty_placeholder: "(empty)".to_string(),
            cursor: "▌".to_string(),
        }
    }
}

impl Theme {
    pub fn from_config(config: &FormConfig) -> Self {
        let defaults = Self::default();
        Self {
            accent: parse_color(config.accent_color.as_deref()).unwrap_or(defaults.accent),
            error: parse_color(config.error_color.as_deref()).unwrap_or(defaults.error),
            empty_placeholder: config
                .empty_placeholder
                .clone()
                .unwrap_or(defaults.empty_placeholder),
            cursor: config.cursor.clone().unwrap_or(defaults.cursor),
            muted: defaults.muted,
        }
    }

    /// Style for a widget's text and border, depending on focus
    pub fn field_style(&self, is_active: bool) -> Style {
        if is_active {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.muted)
        }
    }

    pub fn label_style(&self, is_active: bool) -> Style {
        if is_active {
            Style::default()
                .fg(self.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    }

    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Cursor glyph for the focused field, empty otherwise
    pub fn cursor(&self, is_active: bool) -> &str {
        if is_active {
            &self.cursor
        } else {
            ""
        }
    }
}

fn parse_color(name: Option<&str>) -> Option<Color> {
    let name = name?;
    match name.parse::<Color>() {
        Ok(color) => Some(color),
        Err(_) => {
            tracing::warn!("Ignoring unknown color {name:?} in config");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_default_config_matches_default() {
        assert_eq!(Theme::from_config(&FormConfig::default()), Theme::default());
    }

    #[test]
    fn test_from_config_overrides() {
        let config = FormConfig {
            accent_color: Some("yellow".to_string()),
            error_color: Some("magenta".to_string()),
            empty_placeholder: Some("-".to_string()),
            cursor: Some("_".to_string()),
            ..Default::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.accent, Color::Yellow);
        assert_eq!(theme.error, Color::Magenta);
        assert_eq!(theme.empty_placeholder, "-");
        assert_eq!(theme.cursor(true), "_");
    }

    #[test]
    fn test_unknown_color_falls_back() {
        let config = FormConfig {
            accent_color: Some("not-a-color".to_string()),
            ..Default::default()
        };
        assert_eq!(Theme::from_config(&config).accent, Color::Cyan);
    }

    #[test]
    fn test_cursor_only_when_active() {
        let theme = Theme::default();
        assert_eq!(theme.cursor(true), "▌");
        assert_eq!(theme.cursor(false), "");
    }
}
