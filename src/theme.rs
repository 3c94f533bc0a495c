//! Light and dark palettes for the settings rows.
//!
//! The adaptive secondary background is the one colour that must flip
//! between appearances; everything else follows along so text stays
//! readable on top of it.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Display mode the palette is resolved for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    Light,
    #[default]
    Dark,
}

impl Appearance {
    /// Classify a background colour by relative luminance
    pub fn from_background(color: Color) -> Self {
        match color {
            Color::Rgb(r, g, b) => {
                let luma = 0.2126 * f32::from(r) + 0.7152 * f32::from(g) + 0.0722 * f32::from(b);
                if luma > 127.5 {
                    Appearance::Light
                } else {
                    Appearance::Dark
                }
            }
            Color::White | Color::Gray => Appearance::Light,
            _ => Appearance::Dark,
        }
    }
}

/// Theme colors for the rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub appearance: Appearance,
    pub accent: Color,               // Icons, focused chevron
    pub text: Color,                 // Titles and values
    pub text_dim: Color,             // Captions, idle chevron
    pub background: Color,           // Screen background behind the rows
    pub secondary_background: Color, // Row surface
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn light() -> Self {
        Self {
            appearance: Appearance::Light,
            accent: Color::Rgb(0, 122, 255),
            text: Color::Rgb(0, 0, 0),
            text_dim: Color::Rgb(110, 110, 115),
            background: Color::Rgb(255, 255, 255),
            secondary_background: Color::Rgb(242, 242, 247),
        }
    }

    pub fn dark() -> Self {
        Self {
            appearance: Appearance::Dark,
            accent: Color::Rgb(10, 132, 255),
            text: Color::Rgb(255, 255, 255),
            text_dim: Color::Rgb(152, 152, 157),
            background: Color::Rgb(0, 0, 0),
            secondary_background: Color::Rgb(28, 28, 30),
        }
    }

    pub fn for_appearance(appearance: Appearance) -> Self {
        match appearance {
            Appearance::Light => Self::light(),
            Appearance::Dark => Self::dark(),
        }
    }

    /// Detect the appearance from a kitty-format colour file and build the
    /// matching palette, keeping the file's accent when it has one.
    ///
    /// Falls back to the dark palette when the file is missing or has no
    /// `background` entry.
    pub fn detect(theme_file: &Path) -> Self {
        let Ok(content) = fs::read_to_string(theme_file) else {
            tracing::debug!("No colour theme at {}, using dark palette", theme_file.display());
            return Self::dark();
        };
        Self::from_kitty_conf(&content)
    }

    /// Build a palette from kitty.conf contents
    pub fn from_kitty_conf(content: &str) -> Self {
        let colors = Self::parse_kitty_conf(content);

        let Some(background) = colors.get("background").copied() else {
            return Self::dark();
        };

        let mut theme = Self::for_appearance(Appearance::from_background(background));
        theme.background = background;
        if let Some(accent) = colors.get("color4").or(colors.get("color12")) {
            theme.accent = *accent;
        }
        theme
    }

    /// Parse kitty.conf format: `key value` or `key #hexcolor`
    fn parse_kitty_conf(content: &str) -> HashMap<String, Color> {
        let mut colors = HashMap::new();

        for line in content.lines() {
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once(char::is_whitespace) {
                if let Some(color) = Self::parse_hex_color(value) {
                    colors.insert(key.trim().to_string(), color);
                }
            }
        }

        colors
    }

    /// Parse a hex color string (#RRGGBB or #RGB)
    fn parse_hex_color(s: &str) -> Option<Color> {
        let s = s.trim().trim_start_matches('#');
        if !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        if s.len() == 6 {
            let r = u8::from_str_radix(&s[0..2], 16).ok()?;
            let g = u8::from_str_radix(&s[2..4], 16).ok()?;
            let b = u8::from_str_radix(&s[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        } else if s.len() == 3 {
            let r = u8::from_str_radix(&s[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&s[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&s[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secondary_background_adapts() {
        assert_ne!(
            Theme::light().secondary_background,
            Theme::dark().secondary_background
        );
    }

    #[test]
    fn test_appearance_from_background() {
        assert_eq!(Appearance::from_background(Color::Rgb(250, 250, 250)), Appearance::Light);
        assert_eq!(Appearance::from_background(Color::Rgb(18, 18, 18)), Appearance::Dark);
    }

    #[test]
    fn test_from_kitty_conf() {
        let conf = "# comment\nforeground #101010\nbackground #fafafa\ncolor4 #abc\n";
        let theme = Theme::from_kitty_conf(conf);

        assert_eq!(theme.appearance, Appearance::Light);
        assert_eq!(theme.background, Color::Rgb(250, 250, 250));
        assert_eq!(theme.accent, Color::Rgb(170, 187, 204));
        assert_eq!(theme.secondary_background, Theme::light().secondary_background);
    }

    #[test]
    fn test_non_hex_colour_is_ignored() {
        assert_eq!(Theme::parse_hex_color("a€bc"), None);
        assert_eq!(Theme::parse_hex_color("#ééé"), None);
        assert_eq!(Theme::from_kitty_conf("background a€bc\n"), Theme::dark());
    }

    #[test]
    fn test_kitty_conf_without_background() {
        assert_eq!(Theme::from_kitty_conf("color1 #ff0000"), Theme::dark());
    }
}
