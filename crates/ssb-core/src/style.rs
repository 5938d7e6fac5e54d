//! Semantic style and size names, and the toolkit categories they map onto.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Static class shared by every button.
pub const BASE_CLASS: &str = "superset-button";
pub const CTA_CLASS: &str = "cta";

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    Secondary,
    Tertiary,
    Success,
    Warning,
    Danger,
    #[default]
    Default,
    Link,
    Dashed,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    #[default]
    Default,
    Small,
    XSmall,
}

/// Visual family natively drawn by the underlying button widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleCategory {
    Primary,
    Default,
    Dashed,
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} `{name}`")]
pub struct UnknownName {
    pub kind: &'static str,
    pub name: String,
}

impl ButtonStyle {
    pub const ALL: [Self; 9] = [
        Self::Primary,
        Self::Secondary,
        Self::Tertiary,
        Self::Success,
        Self::Warning,
        Self::Danger,
        Self::Default,
        Self::Link,
        Self::Dashed,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Default => "default",
            Self::Link => "link",
            Self::Dashed => "dashed",
        }
    }

    #[must_use]
    pub const fn category(self) -> StyleCategory {
        match self {
            Self::Primary | Self::Danger | Self::Warning | Self::Success => StyleCategory::Primary,
            Self::Secondary | Self::Default | Self::Tertiary => StyleCategory::Default,
            Self::Dashed => StyleCategory::Dashed,
            Self::Link => StyleCategory::Link,
        }
    }

    /// Only `danger` turns on the widget's danger palette.
    #[must_use]
    pub const fn is_danger(self) -> bool {
        matches!(self, Self::Danger)
    }

    /// Lenient lookup: absent or unknown names fall back to `default`.
    #[must_use]
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(str::parse::<Self>) {
            Some(Ok(style)) => style,
            Some(Err(e)) => {
                debug!("{e}, using `default`");
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Marker class that embedding pages target to restyle one kind of button.
    ///
    /// An unset style keeps the historical `superset-button-undefined` marker.
    #[must_use]
    pub fn class_marker(style: Option<Self>) -> String {
        format!(
            "{BASE_CLASS}-{}",
            style.map_or("undefined", ButtonStyle::as_str)
        )
    }
}

impl ButtonSize {
    pub const ALL: [Self; 3] = [Self::Default, Self::Small, Self::XSmall];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Small => "small",
            Self::XSmall => "xsmall",
        }
    }

    /// `(height, horizontal padding)` in logical pixels.
    #[must_use]
    pub const fn metrics(self) -> (f32, f32) {
        match self {
            Self::XSmall => (22.0, 5.0),
            Self::Small => (30.0, 10.0),
            Self::Default => (32.0, 18.0),
        }
    }

    #[must_use]
    pub fn from_name(name: Option<&str>) -> Self {
        match name.map(str::parse::<Self>) {
            Some(Ok(size)) => size,
            Some(Err(e)) => {
                debug!("{e}, using `default`");
                Self::default()
            }
            None => Self::default(),
        }
    }
}

impl FromStr for ButtonStyle {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownName {
                kind: "button style",
                name: s.to_string(),
            })
    }
}

impl FromStr for ButtonSize {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownName {
                kind: "button size",
                name: s.to_string(),
            })
    }
}

impl fmt::Display for ButtonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ButtonSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for StyleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Primary => "primary",
            Self::Default => "default",
            Self::Dashed => "dashed",
            Self::Link => "link",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_table() {
        use ButtonStyle as S;
        for s in [S::Primary, S::Danger, S::Warning, S::Success] {
            assert_eq!(s.category(), StyleCategory::Primary);
        }
        for s in [S::Secondary, S::Default, S::Tertiary] {
            assert_eq!(s.category(), StyleCategory::Default);
        }
        assert_eq!(S::Dashed.category(), StyleCategory::Dashed);
        assert_eq!(S::Link.category(), StyleCategory::Link);
    }

    #[test]
    fn danger_flag_only_for_danger() {
        let flagged: Vec<_> = ButtonStyle::ALL.into_iter().filter(|s| s.is_danger()).collect();
        assert_eq!(flagged, vec![ButtonStyle::Danger]);
    }

    #[test]
    fn lenient_names() {
        assert_eq!(ButtonStyle::from_name(Some("WARNING")), ButtonStyle::Warning);
        assert_eq!(ButtonStyle::from_name(Some("fancy")), ButtonStyle::Default);
        assert_eq!(ButtonStyle::from_name(None), ButtonStyle::Default);
        assert_eq!(ButtonSize::from_name(Some("xsmall")), ButtonSize::XSmall);
        assert_eq!(ButtonSize::from_name(Some("huge")), ButtonSize::Default);
    }

    #[test]
    fn strict_parse_reports_name() {
        let err = "huge".parse::<ButtonSize>().unwrap_err();
        assert_eq!(err.to_string(), "unknown button size `huge`");
    }

    #[test]
    fn class_marker_contract() {
        assert_eq!(
            ButtonStyle::class_marker(Some(ButtonStyle::Danger)),
            "superset-button-danger"
        );
        assert_eq!(ButtonStyle::class_marker(None), "superset-button-undefined");
    }

    #[test]
    fn size_table() {
        assert_eq!(ButtonSize::XSmall.metrics(), (22.0, 5.0));
        assert_eq!(ButtonSize::Small.metrics(), (30.0, 10.0));
        assert_eq!(ButtonSize::Default.metrics(), (32.0, 18.0));
    }
}
