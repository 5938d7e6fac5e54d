use crate::color::Color;
use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Shades of one hue, darkest to lightest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    pub dark2: Color,
    pub dark1: Color,
    pub base: Color,
    pub light1: Color,
    pub light2: Color,
    pub light3: Color,
    pub light4: Color,
    pub light5: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    pub xxs: f32,
    pub xs: f32,
    pub s: f32,
    pub m: f32,
    pub l: f32,
    pub xl: f32,
    pub xxl: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontWeights {
    pub light: u16,
    pub normal: u16,
    pub medium: u16,
    pub bold: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub sizes: FontSizes,
    pub weights: FontWeights,
}

/// Design tokens every button reads its palette and metrics from.
///
/// Missing top-level keys in a theme file fall back to the light preset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub name: String,
    pub primary: ColorScale,
    pub secondary: ColorScale,
    pub grayscale: ColorScale,
    pub error: ColorScale,
    pub warning: ColorScale,
    pub success: ColorScale,
    pub info: ColorScale,
    /// Base spacing unit in logical pixels.
    pub grid_unit: f32,
    pub border_radius: f32,
    /// Seconds.
    pub transition_timing: f32,
    pub typography: Typography,
}

const TYPOGRAPHY: Typography = Typography {
    sizes: FontSizes {
        xxs: 9.0,
        xs: 10.0,
        s: 12.0,
        m: 14.0,
        l: 16.0,
        xl: 21.0,
        xxl: 28.0,
    },
    weights: FontWeights {
        light: 200,
        normal: 400,
        medium: 500,
        bold: 600,
    },
};

const PRIMARY: ColorScale = ColorScale {
    dark2: Color::hex(0x156378),
    dark1: Color::hex(0x1A85A0),
    base: Color::hex(0x20A7C9),
    light1: Color::hex(0x79CADE),
    light2: Color::hex(0xA5DAE9),
    light3: Color::hex(0xD2EDF4),
    light4: Color::hex(0xE9F6F9),
    light5: Color::hex(0xF3F8FA),
};

const SECONDARY: ColorScale = ColorScale {
    dark2: Color::hex(0x282E4A),
    dark1: Color::hex(0x363E63),
    base: Color::hex(0x444E7C),
    light1: Color::hex(0x8E94B0),
    light2: Color::hex(0xB4B8CA),
    light3: Color::hex(0xD9DBE4),
    light4: Color::hex(0xECEEF2),
    light5: Color::hex(0xF5F5F8),
};

const ERROR: ColorScale = ColorScale {
    dark2: Color::hex(0x6F212A),
    dark1: Color::hex(0xA7323F),
    base: Color::hex(0xE04355),
    light1: Color::hex(0xEFA1AA),
    light2: Color::hex(0xFAEDEE),
    light3: Color::hex(0xFCF3F4),
    light4: Color::hex(0xFDF8F9),
    light5: Color::hex(0xFFFCFC),
};

const WARNING: ColorScale = ColorScale {
    dark2: Color::hex(0x7F3F21),
    dark1: Color::hex(0xBF5E33),
    base: Color::hex(0xFF7F44),
    light1: Color::hex(0xFEC0A1),
    light2: Color::hex(0xFFF2EC),
    light3: Color::hex(0xFFF6F1),
    light4: Color::hex(0xFFF9F6),
    light5: Color::hex(0xFFFCFB),
};

const SUCCESS: ColorScale = ColorScale {
    dark2: Color::hex(0x2B6144),
    dark1: Color::hex(0x439066),
    base: Color::hex(0x5AC189),
    light1: Color::hex(0xACE1C4),
    light2: Color::hex(0xEEF8F3),
    light3: Color::hex(0xF3FAF6),
    light4: Color::hex(0xF8FCFA),
    light5: Color::hex(0xFBFDFC),
};

const INFO: ColorScale = ColorScale {
    dark2: Color::hex(0x315E7E),
    dark1: Color::hex(0x4D8CBE),
    base: Color::hex(0x66BCFE),
    light1: Color::hex(0xB3DEFE),
    light2: Color::hex(0xEFF8FE),
    light3: Color::hex(0xF3F9FE),
    light4: Color::hex(0xF8FCFF),
    light5: Color::hex(0xFBFDFF),
};

impl Theme {
    /// The stock dashboard palette.
    #[must_use]
    pub fn light() -> Self {
        Self {
            name: ThemeName::Light.to_string(),
            primary: PRIMARY,
            secondary: SECONDARY,
            grayscale: ColorScale {
                dark2: Color::hex(0x000000),
                dark1: Color::hex(0x323232),
                base: Color::hex(0x666666),
                light1: Color::hex(0xB2B2B2),
                light2: Color::hex(0xE0E0E0),
                light3: Color::hex(0xF0F0F0),
                light4: Color::hex(0xF7F7F7),
                light5: Color::hex(0xFFFFFF),
            },
            error: ERROR,
            warning: WARNING,
            success: SUCCESS,
            info: INFO,
            grid_unit: 4.0,
            border_radius: 4.0,
            transition_timing: 0.3,
            typography: TYPOGRAPHY,
        }
    }

    /// Same hues with the neutral scale inverted.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            name: ThemeName::Dark.to_string(),
            grayscale: ColorScale {
                dark2: Color::hex(0xFFFFFF),
                dark1: Color::hex(0xE6E6E6),
                base: Color::hex(0xA3A3A3),
                light1: Color::hex(0x5C5C5C),
                light2: Color::hex(0x3D3D3D),
                light3: Color::hex(0x2B2B2B),
                light4: Color::hex(0x1F1F1F),
                light5: Color::hex(0x141414),
            },
            ..Self::light()
        }
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let s = fs::read_to_string(path)?;
        Ok(toml::from_str(&s)?)
    }

    pub fn save_toml_file(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
/// Built-in palettes
pub enum ThemeName {
    #[default]
    /// `Dark` or `Light`, according to the OS preference
    Auto,
    Light,
    Dark,
}

impl ThemeName {
    pub const ALL: [Self; 3] = [Self::Auto, Self::Light, Self::Dark];

    #[must_use]
    pub fn theme(self) -> Theme {
        match self {
            Self::Light => Theme::light(),
            Self::Dark => Theme::dark(),
            Self::Auto => Self::os_preference().theme(),
        }
    }

    #[cfg(feature = "gui")]
    fn os_preference() -> Self {
        match dark_light::detect() {
            dark_light::Mode::Dark => Self::Dark,
            // If the mode can't be detected, fall back to light.
            dark_light::Mode::Light | dark_light::Mode::Default => Self::Light,
        }
    }

    #[cfg(not(feature = "gui"))]
    fn os_preference() -> Self {
        Self::Light
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Light => "Light",
                Self::Dark => "Dark",
                Self::Auto => "Auto (follow system theme)",
            }
        )
    }
}

#[must_use]
pub fn string_to_theme(theme: &str) -> ThemeName {
    match theme {
        t if t.eq_ignore_ascii_case("dark") => ThemeName::Dark,
        t if t.eq_ignore_ascii_case("light") => ThemeName::Light,
        // Auto uses `Display`, so it doesn't have a canonical repr
        t if t.to_ascii_lowercase().starts_with("auto") => ThemeName::Auto,
        _ => ThemeName::default(),
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette() {
        let t = Theme::light();
        assert_ne!(t.primary.base, t.primary.dark1);
        assert_eq!(t.grayscale.light5, Color::WHITE);
        assert_eq!(t.grayscale.dark2, Color::BLACK);
        assert!((t.grid_unit - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn dark_inverts_neutrals_only() {
        let light = Theme::light();
        let dark = Theme::dark();
        assert_eq!(dark.primary, light.primary);
        assert_eq!(dark.grayscale.dark2, light.grayscale.light5);
        assert_ne!(dark.grayscale, light.grayscale);
    }

    #[test]
    fn theme_names_roundtrip_through_display() {
        for name in ThemeName::ALL {
            assert_eq!(string_to_theme(&name.to_string()), name);
        }
        assert_eq!(string_to_theme("nope"), ThemeName::Auto);
    }

    #[test]
    fn partial_theme_file_falls_back_to_light() {
        let t: Theme = toml::from_str("grid_unit = 8.0\nname = \"roomy\"").unwrap();
        assert!((t.grid_unit - 8.0).abs() < f32::EPSILON);
        assert_eq!(t.name, "roomy");
        assert_eq!(t.primary, Theme::light().primary);
    }

    #[test]
    fn theme_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("theme.toml");
        Theme::dark().save_toml_file(&path).unwrap();
        assert_eq!(Theme::from_toml_file(&path).unwrap(), Theme::dark());
    }
}
