use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub enum ColorTheme {
    #[default]
    TokyoNight,
    Dracula,
    Nord,
}

impl ColorTheme {
    pub fn label(self) -> &'static str {
        match self {
            Self::TokyoNight => "Tokyo Night",
            Self::Dracula => "Dracula",
            Self::Nord => "Nord",
        }
    }

    pub fn colors(self) -> ThemeColors {
        match self {
            Self::TokyoNight => ThemeColors::TOKYO_NIGHT,
            Self::Dracula => ThemeColors::dracula(),
            Self::Nord => ThemeColors::nord(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    pub header_bg: Color,
    pub fg: Color,
    pub fg_dim: Color,
    pub border_active: Color,
    pub border_warn: Color,
    pub border_danger: Color,
    pub border_ok: Color,
    pub border_dim: Color,
    pub overlay_bg: Color,
    pub highlight_bg: Color,
}

impl ThemeColors {
    pub const TOKYO_NIGHT: Self = Self {
        header_bg: Color::Rgb(36, 40, 59),
        fg: Color::Rgb(192, 202, 245),
        fg_dim: Color::Rgb(115, 121, 148),
        border_active: Color::Rgb(125, 207, 255), // soft cyan
        border_warn: Color::Rgb(224, 175, 104),   // soft amber
        border_danger: Color::Rgb(247, 118, 142), // soft red
        border_ok: Color::Rgb(158, 206, 106),     // soft green
        border_dim: Color::Rgb(59, 66, 97),       // muted blue-gray
        overlay_bg: Color::Rgb(26, 27, 38),
        highlight_bg: Color::Rgb(40, 42, 64),
    };

    pub fn dracula() -> Self {
        Self {
            header_bg: Color::Rgb(40, 42, 54),
            fg: Color::Rgb(248, 248, 242),
            fg_dim: Color::Rgb(98, 114, 164),
            border_active: Color::Rgb(139, 233, 253),
            border_warn: Color::Rgb(241, 250, 140),
            border_danger: Color::Rgb(255, 85, 85),
            border_ok: Color::Rgb(80, 250, 123),
            border_dim: Color::Rgb(68, 71, 90),
            overlay_bg: Color::Rgb(33, 34, 44),
            highlight_bg: Color::Rgb(55, 57, 74),
        }
    }

    pub fn nord() -> Self {
        Self {
            header_bg: Color::Rgb(46, 52, 64),
            fg: Color::Rgb(216, 222, 233),
            fg_dim: Color::Rgb(107, 121, 142),
            border_active: Color::Rgb(136, 192, 208),
            border_warn: Color::Rgb(235, 203, 139),
            border_danger: Color::Rgb(191, 97, 106),
            border_ok: Color::Rgb(163, 190, 140),
            border_dim: Color::Rgb(76, 86, 106),
            overlay_bg: Color::Rgb(38, 44, 57),
            highlight_bg: Color::Rgb(59, 66, 82),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub color_theme: ColorTheme,
    pub debounce_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            color_theme: ColorTheme::TokyoNight,
            debounce_ms: 300,
        }
    }
}

impl AppConfig {
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("kvscope").join("config.toml"))
    }

    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_theme_labels_not_empty() {
        for theme in [ColorTheme::TokyoNight, ColorTheme::Dracula, ColorTheme::Nord] {
            assert!(!theme.label().is_empty(), "{:?} has empty label", theme);
        }
    }

    #[test]
    fn color_theme_default() {
        assert_eq!(ColorTheme::default(), ColorTheme::TokyoNight);
    }

    #[test]
    fn color_theme_colors_returns_valid_theme() {
        for theme in [ColorTheme::TokyoNight, ColorTheme::Dracula, ColorTheme::Nord] {
            let colors = theme.colors();
            assert!(!matches!(colors.fg, Color::Black));
        }
    }

    #[test]
    fn theme_colors_distinct_header_bg() {
        let backgrounds = [
            ColorTheme::TokyoNight.colors().header_bg,
            ColorTheme::Dracula.colors().header_bg,
            ColorTheme::Nord.colors().header_bg,
        ];
        for i in 0..backgrounds.len() {
            for j in (i + 1)..backgrounds.len() {
                assert_ne!(
                    format!("{:?}", backgrounds[i]),
                    format!("{:?}", backgrounds[j]),
                    "themes {} and {} share a header_bg",
                    i,
                    j
                );
            }
        }
    }

    #[test]
    fn app_config_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.color_theme, ColorTheme::TokyoNight);
        assert_eq!(config.debounce_ms, 300);
    }

    #[test]
    fn app_config_serialization_roundtrip() {
        let config = AppConfig {
            color_theme: ColorTheme::Nord,
            debounce_ms: 150,
        };

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed, config);
    }

    #[test]
    fn app_config_deserialize_with_missing_fields() {
        let toml_str = r#"
            debounce_ms = 500
        "#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.debounce_ms, 500);
        assert_eq!(config.color_theme, ColorTheme::TokyoNight);
    }

    #[test]
    fn app_config_deserialize_empty_string() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
