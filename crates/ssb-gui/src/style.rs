#![allow(
    non_snake_case,
    reason = "Style modules use PascalCase like iced's own style names"
)]
use iced::widget::{button, container};
use iced::{Background, Border, Shadow};
use ssb_core::{InteractionState, StyleAttributes, Theme};

#[must_use]
pub fn interaction_state(status: button::Status) -> InteractionState {
    match status {
        button::Status::Active => InteractionState::Active,
        button::Status::Hovered => InteractionState::Hovered,
        button::Status::Pressed => InteractionState::Pressed,
        button::Status::Disabled => InteractionState::Disabled,
    }
}

/// iced reports `Disabled` for any button without `on_press`; only a button
/// disabled through its props draws the disabled colors.
#[must_use]
pub fn status_state(disabled: bool, status: button::Status) -> InteractionState {
    match (disabled, status) {
        (true, _) => InteractionState::Disabled,
        (false, button::Status::Disabled) => InteractionState::Active,
        (false, status) => interaction_state(status),
    }
}

pub mod Button {
    use super::*;

    /// Applies resolved attributes for the widget's current status.
    ///
    /// iced draws every border solid, so `dashed` renders as `solid`.
    #[must_use]
    pub fn Resolved(
        attrs: &StyleAttributes,
        disabled: bool,
        status: button::Status,
    ) -> button::Style {
        let s = attrs.state(status_state(disabled, status));
        button::Style {
            background: Some(Background::Color(s.background.into())),
            text_color: s.text.into(),
            border: Border {
                color: s.border.into(),
                width: s.border_width,
                radius: attrs.border_radius.into(),
            },
            shadow: Shadow::default(),
            ..button::Style::default()
        }
    }
}

pub mod Container {
    use super::*;

    #[must_use]
    pub fn Tooltip(theme: &Theme) -> container::Style {
        let gray = &theme.grayscale;
        container::Style {
            background: Some(Background::Color(gray.dark1.into())),
            text_color: Some(gray.light5.into()),
            border: Border {
                color: gray.dark1.into(),
                width: 0.0,
                radius: theme.border_radius.into(),
            },
            ..container::Style::default()
        }
    }

    #[must_use]
    pub fn Background(theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(theme.grayscale.light5.into())),
            text_color: Some(theme.grayscale.dark1.into()),
            ..container::Style::default()
        }
    }

    #[must_use]
    pub fn Frame(theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(theme.grayscale.light4.into())),
            text_color: Some(theme.grayscale.dark1.into()),
            border: Border {
                color: theme.grayscale.light2.into(),
                width: 1.0,
                radius: theme.border_radius.into(),
            },
            ..container::Style::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssb_core::{resolve_button_appearance, ButtonStyle};

    #[test]
    fn status_mapping() {
        assert_eq!(
            interaction_state(button::Status::Hovered),
            InteractionState::Hovered
        );
        assert_eq!(
            interaction_state(button::Status::Disabled),
            InteractionState::Disabled
        );
    }

    #[test]
    fn enabled_button_without_message_keeps_its_colors() {
        assert_eq!(
            status_state(false, button::Status::Disabled),
            InteractionState::Active
        );
        assert_eq!(
            status_state(false, button::Status::Hovered),
            InteractionState::Hovered
        );
        assert_eq!(
            status_state(true, button::Status::Hovered),
            InteractionState::Disabled
        );

        let theme = Theme::light();
        let attrs = resolve_button_appearance(Some(ButtonStyle::Link), None, &theme);
        let style = Button::Resolved(&attrs, false, button::Status::Disabled);
        assert_eq!(style.text_color, iced::Color::from(attrs.text));
        assert_eq!(style.background, Some(Background::Color(attrs.background.into())));
    }

    #[test]
    fn disabled_link_is_invisible_chrome() {
        let attrs =
            resolve_button_appearance(Some(ButtonStyle::Link), None, &Theme::light());
        let style = Button::Resolved(&attrs, true, button::Status::Disabled);
        assert_eq!(
            style.background,
            Some(Background::Color(iced::Color::TRANSPARENT))
        );
        assert_eq!(style.border.color, iced::Color::TRANSPARENT);
    }

    #[test]
    fn tertiary_has_one_pixel_border() {
        let theme = Theme::light();
        let attrs = resolve_button_appearance(Some(ButtonStyle::Tertiary), None, &theme);
        let style = Button::Resolved(&attrs, false, button::Status::Active);
        assert!((style.border.width - 1.0).abs() < f32::EPSILON);
        assert_eq!(style.border.color, iced::Color::from(theme.primary.dark1));
    }
}
