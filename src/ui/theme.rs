use ratatui::style::{Color, Modifier, Style};
use std::sync::RwLock;

use crate::config::ThemeColors;

static ACTIVE_THEME: RwLock<ThemeColors> = RwLock::new(ThemeColors::TOKYO_NIGHT);

pub fn set_theme(colors: ThemeColors) {
    *ACTIVE_THEME.write().unwrap() = colors;
}

pub struct Theme;

impl Theme {
    pub fn header_bg() -> Color {
        ACTIVE_THEME.read().unwrap().header_bg
    }

    pub fn fg() -> Color {
        ACTIVE_THEME.read().unwrap().fg
    }

    pub fn fg_dim() -> Color {
        ACTIVE_THEME.read().unwrap().fg_dim
    }

    pub fn border_active() -> Color {
        ACTIVE_THEME.read().unwrap().border_active
    }

    pub fn border_warn() -> Color {
        ACTIVE_THEME.read().unwrap().border_warn
    }

    pub fn border_danger() -> Color {
        ACTIVE_THEME.read().unwrap().border_danger
    }

    pub fn border_ok() -> Color {
        ACTIVE_THEME.read().unwrap().border_ok
    }

    pub fn border_dim() -> Color {
        ACTIVE_THEME.read().unwrap().border_dim
    }

    pub fn overlay_bg() -> Color {
        ACTIVE_THEME.read().unwrap().overlay_bg
    }

    pub fn highlight_bg() -> Color {
        ACTIVE_THEME.read().unwrap().highlight_bg
    }

    pub fn title_style() -> Style {
        Style::default()
            .fg(Self::fg())
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(color: Color) -> Style {
        Style::default().fg(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_accessors_return_colors() {
        let _ = Theme::header_bg();
        let _ = Theme::fg();
        let _ = Theme::fg_dim();
        let _ = Theme::border_active();
        let _ = Theme::border_warn();
        let _ = Theme::border_danger();
        let _ = Theme::border_ok();
        let _ = Theme::border_dim();
        let _ = Theme::overlay_bg();
        let _ = Theme::highlight_bg();
    }

    #[test]
    fn title_style_is_bold() {
        let style = Theme::title_style();
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn border_style_applies_color() {
        let style = Theme::border_style(Color::Red);
        assert_eq!(style.fg, Some(Color::Red));
    }
}
