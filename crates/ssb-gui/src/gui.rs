use crate::style;
use crate::widgets::button::{button_row, superset_button};
use iced::widget::{column, container, scrollable, text, Column};
use iced::{Element, Length, Task};
use log::{error, info};
use ssb_core::config::Config;
use ssb_core::theme::string_to_theme;
use ssb_core::utils::open_url;
use ssb_core::{ButtonProps, ButtonSize, ButtonStyle, Child, Theme, ThemeName, TooltipPlacement};

/// Icon-font-free glyph used in front of labels.
const PLUS: &str = "+";

#[derive(Debug, Clone)]
pub enum Message {
    ThemeSelected(ThemeName),
    ToggleDisabled,
    ToggleCta,
    ToggleTooltips,
    Clicked(ButtonStyle, ButtonSize),
    OpenUrl(String),
}

/// Every style and size side by side, with switches for the states a
/// dashboard author cares about.
pub struct Gallery {
    config: Config,
    theme_name: ThemeName,
    theme: Theme,
    disabled: bool,
    cta: bool,
    tooltips: bool,
    last_clicked: Option<(ButtonStyle, ButtonSize)>,
}

impl Gallery {
    pub fn start() -> iced::Result {
        iced::application(Self::new, Self::update, Self::view)
            .title(Self::title)
            .window_size((1100.0, 760.0))
            .run()
    }

    #[must_use]
    pub fn new() -> Self {
        let config = Config::load_configuration_file();
        let theme = config.theme();
        info!("Gallery started with theme `{}`", theme.name);
        Self {
            theme_name: string_to_theme(&config.general.theme),
            theme,
            config,
            disabled: false,
            cta: false,
            tooltips: true,
            last_clicked: None,
        }
    }

    #[must_use]
    pub fn title(&self) -> String {
        format!("Button gallery ({})", self.theme_name)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ThemeSelected(name) => {
                self.theme_name = name;
                self.config.general.theme = name.to_string();
                self.theme = self.config.theme();
                if let Err(e) = self.config.save_changes() {
                    error!("{e}");
                }
            }
            Message::ToggleDisabled => self.disabled = !self.disabled,
            Message::ToggleCta => self.cta = !self.cta,
            Message::ToggleTooltips => self.tooltips = !self.tooltips,
            Message::Clicked(style, size) => {
                info!("Clicked {style} ({size})");
                self.last_clicked = Some((style, size));
            }
            Message::OpenUrl(url) => open_url(&url),
        }
        Task::none()
    }

    fn toggle(label: &str, on: bool, message: Message) -> ButtonProps<Message> {
        ButtonProps::text(label)
            .style(if on {
                ButtonStyle::Primary
            } else {
                ButtonStyle::Tertiary
            })
            .size(ButtonSize::Small)
            .on_click(message)
    }

    fn toolbar(&self) -> Element<'_, Message> {
        let mut buttons: Vec<ButtonProps<Message>> = ThemeName::ALL
            .into_iter()
            .map(|name| {
                Self::toggle(
                    &name.to_string(),
                    name == self.theme_name,
                    Message::ThemeSelected(name),
                )
            })
            .collect();
        buttons.push(Self::toggle("Disabled", self.disabled, Message::ToggleDisabled));
        buttons.push(Self::toggle("CTA", self.cta, Message::ToggleCta));
        buttons.push(
            Self::toggle("Tooltips", self.tooltips, Message::ToggleTooltips)
                .tooltip("Hover a button to see its tooltip")
                .placement(TooltipPlacement::Bottom),
        );
        button_row(buttons, &self.theme, &Message::OpenUrl)
    }

    fn size_row(&self, size: ButtonSize) -> Element<'_, Message> {
        let buttons = ButtonStyle::ALL
            .into_iter()
            .map(|style| {
                let children = if size == ButtonSize::Default {
                    vec![Child::icon(PLUS), Child::label(style.as_str())]
                } else {
                    vec![Child::label(style.as_str())]
                };
                let mut props = ButtonProps::new(children)
                    .style(style)
                    .size(size)
                    .disabled(self.disabled)
                    .cta(self.cta)
                    .on_click(Message::Clicked(style, size));
                if self.tooltips {
                    props = props.tooltip(format!("superset-button-{style}"));
                }
                props
            })
            .collect();

        column![
            text(format!("size: {size}")).size(self.theme.typography.sizes.m),
            button_row(buttons, &self.theme, &Message::OpenUrl),
        ]
        .spacing(self.theme.grid_unit * 2.0)
        .into()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let docs = superset_button(
            ButtonProps::text("Read the docs")
                .style(ButtonStyle::Link)
                .disabled(self.disabled)
                .href("https://superset.apache.org/docs/intro")
                .tooltip("Opens in your browser"),
            &self.theme,
            &Message::OpenUrl,
        );

        let status = text(self.last_clicked.map_or_else(
            || "Nothing clicked yet".to_string(),
            |(style, size)| format!("Last clicked: {style} ({size})"),
        ))
        .size(self.theme.typography.sizes.s);

        let rows = Column::with_children(ButtonSize::ALL.into_iter().map(|s| self.size_row(s)))
            .spacing(self.theme.grid_unit * 6.0);

        let frame_style = style::Container::Frame(&self.theme);
        let content = column![
            self.toolbar(),
            container(rows)
                .padding(self.theme.grid_unit * 4.0)
                .style(move |_: &iced::Theme| frame_style),
            docs,
            status,
        ]
        .spacing(self.theme.grid_unit * 4.0)
        .padding(self.theme.grid_unit * 5.0);

        let background = style::Container::Background(&self.theme);
        container(scrollable(content))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_: &iced::Theme| background)
            .into()
    }
}

impl Default for Gallery {
    fn default() -> Self {
        Self::new()
    }
}
