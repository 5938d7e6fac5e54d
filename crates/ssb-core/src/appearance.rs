//! Resolution of a (style, size) pair into concrete colors and metrics.

use crate::color::{mix, Color};
use crate::style::{ButtonSize, ButtonStyle, StyleCategory};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    None,
    Solid,
    Dashed,
}

impl fmt::Display for BorderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Solid => "solid",
            Self::Dashed => "dashed",
        })
    }
}

/// Fully resolved look of one button. Every field is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleAttributes {
    pub category: StyleCategory,
    pub danger: bool,
    pub height: f32,
    pub horizontal_padding: f32,
    pub background: Color,
    pub background_hover: Color,
    pub background_active: Color,
    pub background_disabled: Color,
    pub text: Color,
    pub text_hover: Color,
    pub text_disabled: Color,
    pub border_width: f32,
    pub border_style: BorderStyle,
    pub border: Color,
    pub border_hover: Color,
    pub border_disabled: Color,
    pub border_radius: f32,
    pub font_size: f32,
    pub font_weight: u16,
    pub line_height: f32,
    /// Seconds.
    pub transition_timing: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionState {
    Active,
    Hovered,
    Pressed,
    Focused,
    Disabled,
}

impl InteractionState {
    pub const ALL: [Self; 5] = [
        Self::Active,
        Self::Hovered,
        Self::Pressed,
        Self::Focused,
        Self::Disabled,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Hovered => "hovered",
            Self::Pressed => "pressed",
            Self::Focused => "focused",
            Self::Disabled => "disabled",
        }
    }
}

impl std::str::FromStr for InteractionState {
    type Err = crate::style::UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::style::UnknownName {
                kind: "interaction state",
                name: s.to_string(),
            })
    }
}

impl fmt::Display for InteractionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colors of a button in one interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateStyle {
    pub background: Color,
    pub text: Color,
    pub border: Color,
    pub border_width: f32,
    pub border_style: BorderStyle,
    /// `false` when pointer interaction is suppressed.
    pub interactive: bool,
}

pub const LINE_HEIGHT: f32 = 1.5715;

/// Colors the underlying widget draws for each category when nothing
/// overrides them.
struct Palette {
    background: Color,
    background_hover: Color,
    background_active: Color,
    text: Color,
    text_hover: Color,
    border: Color,
    border_hover: Color,
}

fn category_palette(category: StyleCategory, danger: bool, theme: &Theme) -> Palette {
    let gray = &theme.grayscale;
    match (category, danger) {
        (StyleCategory::Primary, false) => Palette {
            background: theme.primary.base,
            background_hover: theme.primary.dark1,
            background_active: theme.primary.dark2,
            text: gray.light5,
            text_hover: gray.light5,
            border: theme.primary.base,
            border_hover: theme.primary.dark1,
        },
        (StyleCategory::Primary, true) => Palette {
            background: theme.error.base,
            background_hover: theme.error.dark1,
            background_active: theme.error.dark2,
            text: gray.light5,
            text_hover: gray.light5,
            border: theme.error.base,
            border_hover: theme.error.dark1,
        },
        (StyleCategory::Default | StyleCategory::Dashed, _) => Palette {
            background: gray.light5,
            background_hover: gray.light5,
            background_active: gray.light4,
            text: gray.dark1,
            text_hover: theme.primary.base,
            border: gray.light2,
            border_hover: theme.primary.base,
        },
        (StyleCategory::Link, _) => Palette {
            background: Color::TRANSPARENT,
            background_hover: Color::TRANSPARENT,
            background_active: Color::TRANSPARENT,
            text: theme.primary.base,
            text_hover: theme.primary.dark1,
            border: Color::TRANSPARENT,
            border_hover: Color::TRANSPARENT,
        },
    }
}

/// Maps a semantic style and size onto concrete attributes.
///
/// Absent style resolves as `default`, absent size as the base size. Pure:
/// equal inputs always give equal outputs.
#[must_use]
pub fn resolve_button_appearance(
    style: Option<ButtonStyle>,
    size: Option<ButtonSize>,
    theme: &Theme,
) -> StyleAttributes {
    let style = style.unwrap_or_default();
    let (height, horizontal_padding) = size.unwrap_or_default().metrics();
    let category = style.category();
    let danger = style.is_danger();
    let gray = &theme.grayscale;
    let base = category_palette(category, danger, theme);

    let mut attrs = StyleAttributes {
        category,
        danger,
        height,
        horizontal_padding,
        background: base.background,
        background_hover: base.background_hover,
        background_active: base.background_active,
        background_disabled: gray.light2,
        text: base.text,
        text_hover: base.text_hover,
        text_disabled: gray.base,
        border_width: 0.0,
        border_style: BorderStyle::None,
        border: base.border,
        border_hover: base.border_hover,
        border_disabled: Color::TRANSPARENT,
        border_radius: theme.border_radius,
        font_size: theme.typography.sizes.s,
        font_weight: theme.typography.weights.bold,
        line_height: LINE_HEIGHT,
        transition_timing: theme.transition_timing,
    };

    match style {
        ButtonStyle::Tertiary | ButtonStyle::Dashed => {
            attrs.background = gray.light5;
            attrs.background_hover = gray.light5;
            attrs.background_active = gray.light5;
            attrs.background_disabled = gray.light5;
            attrs.border_width = 1.0;
            attrs.border_style = if style == ButtonStyle::Dashed {
                BorderStyle::Dashed
            } else {
                BorderStyle::Solid
            };
            attrs.border = theme.primary.dark1;
            attrs.border_hover = theme.primary.light1;
            attrs.border_disabled = gray.light2;
        }
        ButtonStyle::Danger => {
            attrs.text_hover = attrs.text;
        }
        ButtonStyle::Warning => {
            attrs.background = theme.warning.base;
            attrs.background_hover = mix(0.1, gray.dark2, theme.warning.base);
            attrs.background_active = mix(0.2, gray.dark2, theme.warning.base);
            attrs.text = gray.light5;
            attrs.text_hover = attrs.text;
        }
        ButtonStyle::Success => {
            attrs.background = theme.success.base;
            attrs.background_hover = mix(0.1, gray.light5, theme.success.base);
            attrs.background_active = mix(0.2, gray.dark2, theme.success.base);
            attrs.text = gray.light5;
            attrs.text_hover = attrs.text;
        }
        ButtonStyle::Link => {
            attrs.background = Color::TRANSPARENT;
            attrs.background_hover = Color::TRANSPARENT;
            attrs.background_active = Color::TRANSPARENT;
            attrs.text = theme.primary.dark1;
        }
        ButtonStyle::Default | ButtonStyle::Secondary | ButtonStyle::Primary => {}
    }

    attrs
}

impl StyleAttributes {
    /// Colors for one interaction state.
    ///
    /// Disabled buttons use the neutral disabled text, never take pointer
    /// input, and link buttons lose their background and border entirely.
    #[must_use]
    pub fn state(&self, state: InteractionState) -> StateStyle {
        let base = StateStyle {
            background: self.background,
            text: self.text,
            border: self.border,
            border_width: self.border_width,
            border_style: self.border_style,
            interactive: true,
        };

        match state {
            InteractionState::Active | InteractionState::Focused => base,
            InteractionState::Hovered => StateStyle {
                background: self.background_hover,
                text: self.text_hover,
                border: self.border_hover,
                ..base
            },
            InteractionState::Pressed => StateStyle {
                background: self.background_active,
                ..base
            },
            InteractionState::Disabled => {
                let link = self.category == StyleCategory::Link;
                StateStyle {
                    background: if link {
                        Color::TRANSPARENT
                    } else {
                        self.background_disabled
                    },
                    text: self.text_disabled,
                    border: if link {
                        Color::TRANSPARENT
                    } else {
                        self.border_disabled
                    },
                    interactive: false,
                    ..base
                }
            }
        }
    }
}
