//! Toolkit-neutral render tree for one button.
//!
//! [`render`] does everything except drawing: it resolves the appearance,
//! decides which props reach the button widget, and wraps the result in a
//! tooltip (and an inert hover target when disabled). The GUI crate turns the
//! tree into widgets.

use crate::appearance::{resolve_button_appearance, StyleAttributes};
use crate::spacing::{first_child_margin, Child};
use crate::style::{ButtonSize, ButtonStyle, BASE_CLASS, CTA_CLASS};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TooltipPlacement {
    #[default]
    Top,
    TopLeft,
    TopRight,
    Bottom,
    BottomLeft,
    BottomRight,
    Left,
    LeftTop,
    LeftBottom,
    Right,
    RightTop,
    RightBottom,
}

/// Side of the trigger a tooltip opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

impl TooltipPlacement {
    pub const ALL: [Self; 12] = [
        Self::Top,
        Self::TopLeft,
        Self::TopRight,
        Self::Bottom,
        Self::BottomLeft,
        Self::BottomRight,
        Self::Left,
        Self::LeftTop,
        Self::LeftBottom,
        Self::Right,
        Self::RightTop,
        Self::RightBottom,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::TopLeft => "topLeft",
            Self::TopRight => "topRight",
            Self::Bottom => "bottom",
            Self::BottomLeft => "bottomLeft",
            Self::BottomRight => "bottomRight",
            Self::Left => "left",
            Self::LeftTop => "leftTop",
            Self::LeftBottom => "leftBottom",
            Self::Right => "right",
            Self::RightTop => "rightTop",
            Self::RightBottom => "rightBottom",
        }
    }

    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Self::Top | Self::TopLeft | Self::TopRight => Side::Top,
            Self::Bottom | Self::BottomLeft | Self::BottomRight => Side::Bottom,
            Self::Left | Self::LeftTop | Self::LeftBottom => Side::Left,
            Self::Right | Self::RightTop | Self::RightBottom => Side::Right,
        }
    }
}

impl FromStr for TooltipPlacement {
    type Err = crate::style::UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| crate::style::UnknownName {
                kind: "tooltip placement",
                name: s.to_string(),
            })
    }
}

impl fmt::Display for TooltipPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything a caller can say about a button. `M` is the click message.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonProps<M> {
    pub style: Option<ButtonStyle>,
    pub size: Option<ButtonSize>,
    pub disabled: bool,
    pub tooltip: Option<String>,
    pub placement: TooltipPlacement,
    pub cta: bool,
    pub show_margin_right: bool,
    pub on_click: Option<M>,
    pub href: Option<String>,
    pub class_name: Option<String>,
    pub children: Vec<Child>,
    /// Forwarded to the button untouched.
    pub attributes: BTreeMap<String, String>,
}

impl<M> Default for ButtonProps<M> {
    fn default() -> Self {
        Self {
            style: None,
            size: None,
            disabled: false,
            tooltip: None,
            placement: TooltipPlacement::default(),
            cta: false,
            show_margin_right: true,
            on_click: None,
            href: None,
            class_name: None,
            children: Vec::new(),
            attributes: BTreeMap::new(),
        }
    }
}

impl<M> ButtonProps<M> {
    #[must_use]
    pub fn new(children: impl IntoIterator<Item = Child>) -> Self {
        Self {
            children: children.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Single text label.
    #[must_use]
    pub fn text(label: impl Into<String>) -> Self {
        Self::new([Child::Label(label.into())])
    }

    #[must_use]
    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }

    #[must_use]
    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn tooltip(mut self, content: impl Into<String>) -> Self {
        self.tooltip = Some(content.into());
        self
    }

    #[must_use]
    pub fn placement(mut self, placement: TooltipPlacement) -> Self {
        self.placement = placement;
        self
    }

    #[must_use]
    pub fn cta(mut self, cta: bool) -> Self {
        self.cta = cta;
        self
    }

    #[must_use]
    pub fn show_margin_right(mut self, show: bool) -> Self {
        self.show_margin_right = show;
        self
    }

    #[must_use]
    pub fn on_click(mut self, message: M) -> Self {
        self.on_click = Some(message);
        self
    }

    #[must_use]
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cursor {
    NotAllowed,
}

/// The button widget itself, with every prop already decided.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonNode<M> {
    pub class_names: Vec<String>,
    pub appearance: StyleAttributes,
    pub disabled: bool,
    /// Absent while disabled.
    pub href: Option<String>,
    /// Absent while disabled.
    #[serde(skip)]
    pub on_click: Option<M>,
    pub first_child_margin: f32,
    /// Gap to a directly preceding button.
    pub sibling_margin: f32,
    pub min_width: Option<f32>,
    pub min_height: Option<f32>,
    pub children: Vec<Child>,
    pub attributes: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase", tag = "node", bound(serialize = ""))]
pub enum ButtonTree<M> {
    Button(ButtonNode<M>),
    Tooltip {
        placement: TooltipPlacement,
        content: String,
        trigger: Box<ButtonTree<M>>,
    },
    /// Non-interactive hover target so a disabled button still shows its
    /// tooltip.
    Inert {
        cursor: Cursor,
        /// Left gap kept for a button inside the wrapper.
        sibling_margin: f32,
        child: Box<ButtonTree<M>>,
    },
}

impl<M> ButtonTree<M> {
    /// The button at the bottom of the tree.
    #[must_use]
    pub fn button(&self) -> &ButtonNode<M> {
        match self {
            Self::Button(node) => node,
            Self::Tooltip { trigger, .. } => trigger.button(),
            Self::Inert { child, .. } => child.button(),
        }
    }
}

/// Class list of the button: caller class, the shared base class, the style
/// marker and `cta` when set.
#[must_use]
pub fn class_names(class_name: Option<&str>, style: Option<ButtonStyle>, cta: bool) -> Vec<String> {
    let mut classes = Vec::with_capacity(4);
    if let Some(extra) = class_name.filter(|c| !c.trim().is_empty()) {
        classes.push(extra.trim().to_string());
    }
    classes.push(BASE_CLASS.to_string());
    classes.push(ButtonStyle::class_marker(style));
    if cta {
        classes.push(CTA_CLASS.to_string());
    }
    classes
}

/// Builds the render tree for one button.
#[must_use]
pub fn render<M>(props: ButtonProps<M>, theme: &Theme) -> ButtonTree<M> {
    let appearance = resolve_button_appearance(props.style, props.size, theme);
    let sibling_margin = theme.grid_unit * 2.0;

    let node = ButtonNode {
        class_names: class_names(props.class_name.as_deref(), props.style, props.cta),
        first_child_margin: first_child_margin(&props.children, props.show_margin_right, theme),
        disabled: props.disabled,
        href: props.href.filter(|_| !props.disabled),
        on_click: props.on_click.filter(|_| !props.disabled),
        sibling_margin,
        min_width: props.cta.then_some(theme.grid_unit * 36.0),
        min_height: props.cta.then_some(theme.grid_unit * 8.0),
        children: props.children,
        attributes: props.attributes,
        appearance,
    };
    let button = ButtonTree::Button(node);

    let Some(content) = props.tooltip.filter(|c| !c.is_empty()) else {
        return button;
    };

    let trigger = if props.disabled {
        ButtonTree::Inert {
            cursor: Cursor::NotAllowed,
            sibling_margin,
            child: Box::new(button),
        }
    } else {
        button
    };

    ButtonTree::Tooltip {
        placement: props.placement,
        content,
        trigger: Box::new(trigger),
    }
}
