//! Turns a [`ButtonTree`] into iced widgets.

use crate::style;
use iced::widget::text::LineHeight;
use iced::widget::{button, container, mouse_area, text, tooltip, Row, Text};
use iced::{alignment, font, mouse, Alignment, Element, Font, Length, Padding};
use ssb_core::render::{Cursor, Side};
use ssb_core::spacing::rendered_children;
use ssb_core::{ButtonNode, ButtonProps, ButtonTree, Child, StyleAttributes, Theme, TooltipPlacement};

#[must_use]
pub fn position(placement: TooltipPlacement) -> tooltip::Position {
    match placement.side() {
        Side::Top => tooltip::Position::Top,
        Side::Bottom => tooltip::Position::Bottom,
        Side::Left => tooltip::Position::Left,
        Side::Right => tooltip::Position::Right,
    }
}

#[must_use]
pub fn interaction(cursor: Cursor) -> mouse::Interaction {
    match cursor {
        Cursor::NotAllowed => mouse::Interaction::NotAllowed,
    }
}

/// Nearest face of a CSS numeric font weight.
#[must_use]
pub fn font_weight(weight: u16) -> font::Weight {
    match weight {
        0..=149 => font::Weight::Thin,
        150..=249 => font::Weight::ExtraLight,
        250..=349 => font::Weight::Light,
        350..=449 => font::Weight::Normal,
        450..=549 => font::Weight::Medium,
        550..=649 => font::Weight::Semibold,
        650..=749 => font::Weight::Bold,
        750..=849 => font::Weight::ExtraBold,
        _ => font::Weight::Black,
    }
}

fn label<'a>(s: &str, attrs: &StyleAttributes) -> Text<'a> {
    let font = Font {
        weight: font_weight(attrs.font_weight),
        ..Font::DEFAULT
    };
    text(s.to_owned())
        .size(attrs.font_size)
        .font(font)
        .line_height(LineHeight::Relative(attrs.line_height))
}

fn child_element<'a, M: 'a>(child: &Child, attrs: &StyleAttributes) -> Element<'a, M> {
    match child {
        Child::Icon(glyph) => label(glyph, attrs).into(),
        Child::Label(s) => label(s, attrs).into(),
        Child::Group(inner) => Row::with_children(
            inner
                .iter()
                .filter(|c| **c != Child::Empty)
                .map(|c| child_element(c, attrs)),
        )
        .align_y(Alignment::Center)
        .into(),
        Child::Empty => {
            let empty: Row<'a, M> = Row::new();
            empty.into()
        }
    }
}

fn button_widget<'a, M: Clone + 'a>(
    node: ButtonNode<M>,
    link: &dyn Fn(String) -> M,
) -> Element<'a, M> {
    let attrs = node.appearance;
    let margin = node.first_child_margin;
    let disabled = node.disabled;

    let items = rendered_children(&node.children)
        .into_iter()
        .enumerate()
        .map(|(i, child)| {
            let element = child_element(child, &attrs);
            if i == 0 && margin > 0.0 {
                let spaced: Element<'a, M> = container(element)
                    .padding(Padding {
                        right: margin,
                        ..Padding::ZERO
                    })
                    .into();
                spaced
            } else {
                element
            }
        })
        .collect::<Vec<Element<'a, M>>>();

    let content = container(Row::with_children(items).align_y(Alignment::Center))
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center);

    let on_press = node.on_click.or_else(|| node.href.map(link));
    let height = node.min_height.map_or(attrs.height, |min| attrs.height.max(min));
    let padding = Padding {
        top: 0.0,
        right: attrs.horizontal_padding,
        bottom: 0.0,
        left: attrs.horizontal_padding,
    };

    let mut widget = button(content)
        .padding(padding)
        .height(height)
        .on_press_maybe(on_press);
    if let Some(min_width) = node.min_width {
        widget = widget.width(min_width);
    }

    widget
        .style(move |_: &iced::Theme, status| style::Button::Resolved(&attrs, disabled, status))
        .into()
}

/// Renders a tree. `link` turns an `href` into the message emitted on press
/// when the button has no click message of its own.
pub fn view<'a, M: Clone + 'a>(
    tree: ButtonTree<M>,
    theme: &Theme,
    link: &dyn Fn(String) -> M,
) -> Element<'a, M> {
    match tree {
        ButtonTree::Button(node) => button_widget(node, link),
        ButtonTree::Tooltip {
            placement,
            content,
            trigger,
        } => {
            let body = container(text(content).size(theme.typography.sizes.s))
                .padding(theme.grid_unit * 2.0);
            let tooltip_style = style::Container::Tooltip(theme);
            tooltip(view(*trigger, theme, link), body, position(placement))
                .gap(theme.grid_unit)
                .style(move |_: &iced::Theme| tooltip_style)
                .into()
        }
        ButtonTree::Inert {
            cursor,
            sibling_margin,
            child,
        } => {
            let spaced = container(view(*child, theme, link)).padding(Padding {
                left: sibling_margin,
                ..Padding::ZERO
            });
            mouse_area(spaced).interaction(interaction(cursor)).into()
        }
    }
}

/// Renders props straight to a widget.
pub fn superset_button<'a, M: Clone + 'a>(
    props: ButtonProps<M>,
    theme: &Theme,
    link: &dyn Fn(String) -> M,
) -> Element<'a, M> {
    view(ssb_core::render(props, theme), theme, link)
}

fn has_inert_wrapper<M>(tree: &ButtonTree<M>) -> bool {
    match tree {
        ButtonTree::Button(_) => false,
        ButtonTree::Inert { .. } => true,
        ButtonTree::Tooltip { trigger, .. } => has_inert_wrapper(trigger),
    }
}

/// Left gap to put in front of each tree in a row. An inert wrapper already
/// pads its button, so it gets none here; every other button but the first
/// is pushed off its predecessor by its sibling margin.
#[must_use]
pub fn leading_gaps<M>(trees: &[ButtonTree<M>]) -> Vec<f32> {
    trees
        .iter()
        .enumerate()
        .map(|(i, tree)| {
            if i == 0 || has_inert_wrapper(tree) {
                0.0
            } else {
                tree.button().sibling_margin
            }
        })
        .collect()
}

/// Lays buttons out left to right, one sibling gap between neighbours.
pub fn button_row<'a, M: Clone + 'a>(
    buttons: Vec<ButtonProps<M>>,
    theme: &Theme,
    link: &dyn Fn(String) -> M,
) -> Element<'a, M> {
    let trees: Vec<ButtonTree<M>> = buttons
        .into_iter()
        .map(|props| ssb_core::render(props, theme))
        .collect();
    let gaps = leading_gaps(&trees);

    Row::with_children(trees.into_iter().zip(gaps).map(|(tree, gap)| {
        let element = view(tree, theme, link);
        if gap > 0.0 {
            let padded: Element<'a, M> = container(element)
                .padding(Padding {
                    left: gap,
                    ..Padding::ZERO
                })
                .into();
            padded
        } else {
            element
        }
    }))
    .align_y(Alignment::Center)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssb_core::ButtonStyle;

    #[derive(Debug, Clone, PartialEq)]
    enum Msg {
        Open(String),
    }

    fn trees(props: Vec<ButtonProps<Msg>>) -> Vec<ButtonTree<Msg>> {
        let theme = Theme::light();
        props
            .into_iter()
            .map(|p| ssb_core::render(p, &theme))
            .collect()
    }

    #[test]
    fn one_gap_between_neighbours() {
        let row = trees(vec![
            ButtonProps::text("a"),
            ButtonProps::text("b"),
            ButtonProps::text("c").tooltip("hint"),
        ]);
        assert_eq!(leading_gaps(&row), vec![0.0, 8.0, 8.0]);
    }

    #[test]
    fn inert_wrapper_is_not_spaced_twice() {
        let row = trees(vec![
            ButtonProps::text("a").disabled(true).tooltip("off"),
            ButtonProps::text("b").disabled(true).tooltip("off"),
            ButtonProps::text("c"),
        ]);
        assert_eq!(leading_gaps(&row), vec![0.0, 0.0, 8.0]);
        assert!(has_inert_wrapper(&row[1]));
        assert!(!has_inert_wrapper(&row[2]));
    }

    #[test]
    fn every_tree_shape_builds() {
        let theme = Theme::light();
        let link = |url: String| Msg::Open(url);
        let shapes = vec![
            ButtonProps::text("bare"),
            ButtonProps::new([Child::icon("+"), Child::label("icon")]),
            ButtonProps::new([Child::Group(vec![Child::Empty, Child::label("group")])]),
            ButtonProps::text("docs")
                .style(ButtonStyle::Link)
                .href("https://example.org"),
            ButtonProps::text("tip").tooltip("hint"),
            ButtonProps::text("off").disabled(true).tooltip("hint"),
            ButtonProps::text("cta").cta(true).style(ButtonStyle::Primary),
        ];
        for props in shapes.clone() {
            let _element: Element<'_, Msg> = superset_button(props, &theme, &link);
        }
        let _row: Element<'_, Msg> = button_row(shapes, &theme, &link);
    }

    #[test]
    fn placements_map_to_sides() {
        assert_eq!(position(TooltipPlacement::TopLeft), tooltip::Position::Top);
        assert_eq!(
            position(TooltipPlacement::BottomRight),
            tooltip::Position::Bottom
        );
        assert_eq!(position(TooltipPlacement::LeftTop), tooltip::Position::Left);
        assert_eq!(position(TooltipPlacement::Right), tooltip::Position::Right);
    }

    #[test]
    fn bold_token_is_semibold() {
        let theme = Theme::light();
        assert_eq!(
            font_weight(theme.typography.weights.bold),
            font::Weight::Semibold
        );
        assert_eq!(font_weight(theme.typography.weights.normal), font::Weight::Normal);
        assert_eq!(font_weight(900), font::Weight::Black);
    }

    #[test]
    fn not_allowed_cursor() {
        assert_eq!(
            interaction(Cursor::NotAllowed),
            mouse::Interaction::NotAllowed
        );
    }
}
