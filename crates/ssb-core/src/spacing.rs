//! Button content and the gap between a leading icon and its label.

use crate::theme::Theme;
use serde::{Deserialize, Serialize};

/// One piece of button content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "value")]
pub enum Child {
    /// Glyph from an icon font.
    Icon(String),
    Label(String),
    /// Transparent grouping of several children.
    Group(Vec<Child>),
    /// Renders nothing and takes no space.
    Empty,
}

impl Child {
    #[must_use]
    pub fn label(text: impl Into<String>) -> Self {
        Self::Label(text.into())
    }

    #[must_use]
    pub fn icon(glyph: impl Into<String>) -> Self {
        Self::Icon(glyph.into())
    }
}

/// Children that actually render, with one top-level group unwrapped.
#[must_use]
pub fn rendered_children(children: &[Child]) -> Vec<&Child> {
    let top = match children {
        [Child::Group(inner)] => inner.as_slice(),
        _ => children,
    };
    top.iter().filter(|c| **c != Child::Empty).collect()
}

/// Right margin of the first child: two grid units when more than one child
/// renders, zero otherwise or when the caller opted out.
#[must_use]
pub fn first_child_margin(children: &[Child], show_margin_right: bool, theme: &Theme) -> f32 {
    if show_margin_right && rendered_children(children).len() > 1 {
        theme.grid_unit * 2.0
    } else {
        0.0
    }
}
