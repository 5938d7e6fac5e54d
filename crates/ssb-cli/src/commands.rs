use clap::CommandFactory;
use clap_complete::{generate, Shell};
use log::{debug, info};
use ssb_core::config::Config;
use ssb_core::render::class_names;
use ssb_core::theme::string_to_theme;
use ssb_core::{
    render as render_tree, resolve_button_appearance, ButtonProps, ButtonSize, ButtonStyle, Child,
    InteractionState, Theme, ThemeName, TooltipPlacement,
};
use std::io::Write;

use crate::output::{describe_attributes, describe_state, describe_tree, OutputFormat};
use crate::{print_or_exit, println_or_exit, Cli, StyleArgs, ThemeArgs};

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Everything `ssb render` feeds into the props besides style and size.
#[derive(Debug, Clone, Default)]
pub struct RenderRequest {
    pub labels: Vec<String>,
    pub icon: Option<String>,
    pub disabled: bool,
    pub tooltip: Option<String>,
    pub placement: String,
    pub cta: bool,
    pub show_margin_right: bool,
    pub href: Option<String>,
    pub class_name: Option<String>,
    pub attrs: Vec<(String, String)>,
}

/// Parses `key=value`.
pub fn parse_attr(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(format!("expected key=value, got `{s}`")),
    }
}

/// Theme file first, then an explicit name, then the user's config.
pub fn select_theme(args: &ThemeArgs) -> Result<Theme, Box<dyn std::error::Error>> {
    if let Some(path) = &args.theme_file {
        info!("Loading theme from {}", path.display());
        return Ok(Theme::from_toml_file(path)?);
    }
    if let Some(name) = &args.theme {
        return Ok(string_to_theme(name).theme());
    }
    Ok(Config::load_configuration_file().theme())
}

fn style_and_size(args: &StyleArgs) -> (Option<ButtonStyle>, Option<ButtonSize>) {
    let style = args.style.as_deref().map(|s| ButtonStyle::from_name(Some(s)));
    let size = args.size.as_deref().map(|s| ButtonSize::from_name(Some(s)));
    debug!("style {style:?}, size {size:?}");
    (style, size)
}

pub fn resolve(
    style_args: &StyleArgs,
    theme_args: &ThemeArgs,
    state: Option<&str>,
    format: OutputFormat,
) -> CmdResult {
    let theme = select_theme(theme_args)?;
    let (style, size) = style_and_size(style_args);
    let attrs = resolve_button_appearance(style, size, &theme);

    if let Some(state) = state {
        let state: InteractionState = state.parse()?;
        match format {
            OutputFormat::Text => {
                print_or_exit!("{}", describe_state(&attrs, state));
            }
            OutputFormat::Json => {
                println_or_exit!("{}", serde_json::to_string_pretty(&attrs.state(state))?);
            }
            OutputFormat::Toml => {
                print_or_exit!("{}", toml::to_string(&attrs.state(state))?);
            }
        }
        return Ok(());
    }

    match format {
        OutputFormat::Text => {
            print_or_exit!("{}", describe_attributes(&attrs));
        }
        OutputFormat::Json => {
            println_or_exit!("{}", serde_json::to_string_pretty(&attrs)?);
        }
        OutputFormat::Toml => {
            print_or_exit!("{}", toml::to_string(&attrs)?);
        }
    }
    Ok(())
}

pub fn classes(style: Option<&str>, class_name: Option<&str>, cta: bool) {
    let style = style.map(|s| ButtonStyle::from_name(Some(s)));
    println_or_exit!("{}", class_names(class_name, style, cta).join(" "));
}

pub fn build_props(
    style: Option<ButtonStyle>,
    size: Option<ButtonSize>,
    request: RenderRequest,
) -> Result<ButtonProps<()>, Box<dyn std::error::Error>> {
    let placement: TooltipPlacement = request.placement.parse()?;
    let children = request
        .icon
        .map(Child::icon)
        .into_iter()
        .chain(request.labels.into_iter().map(Child::label));

    let mut props = ButtonProps::new(children)
        .disabled(request.disabled)
        .placement(placement)
        .cta(request.cta)
        .show_margin_right(request.show_margin_right)
        .on_click(());
    props.style = style;
    props.size = size;
    if let Some(tooltip) = request.tooltip {
        props = props.tooltip(tooltip);
    }
    if let Some(href) = request.href {
        props = props.href(href);
    }
    if let Some(class_name) = request.class_name {
        props = props.class_name(class_name);
    }
    for (key, value) in request.attrs {
        props = props.attribute(key, value);
    }
    Ok(props)
}

pub fn render(
    style_args: &StyleArgs,
    theme_args: &ThemeArgs,
    request: RenderRequest,
    format: OutputFormat,
) -> CmdResult {
    let theme = select_theme(theme_args)?;
    let (style, size) = style_and_size(style_args);
    let tree = render_tree(build_props(style, size, request)?, &theme);

    match format {
        OutputFormat::Text => {
            print_or_exit!("{}", describe_tree(&tree));
        }
        OutputFormat::Json => {
            println_or_exit!("{}", serde_json::to_string_pretty(&tree)?);
        }
        OutputFormat::Toml => {
            print_or_exit!("{}", toml::to_string(&tree)?);
        }
    }
    Ok(())
}

pub fn themes(dump: Option<&str>) -> CmdResult {
    if let Some(name) = dump {
        print_or_exit!("{}", toml::to_string(&string_to_theme(name).theme())?);
        return Ok(());
    }
    let current = Config::load_configuration_file();
    for name in ThemeName::ALL {
        let marker = if string_to_theme(&current.general.theme) == name {
            "*"
        } else {
            " "
        };
        println_or_exit!("{marker} {name}");
    }
    Ok(())
}

/// Generate shell completion script
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssb_core::ButtonTree;

    fn request(labels: &[&str]) -> RenderRequest {
        RenderRequest {
            labels: labels.iter().map(ToString::to_string).collect(),
            placement: "top".to_string(),
            show_margin_right: true,
            ..RenderRequest::default()
        }
    }

    #[test]
    fn attr_parsing() {
        assert_eq!(
            parse_attr("aria-label=Save it"),
            Ok(("aria-label".to_string(), "Save it".to_string()))
        );
        assert_eq!(parse_attr("k="), Ok(("k".to_string(), String::new())));
        assert!(parse_attr("=v").is_err());
        assert!(parse_attr("novalue").is_err());
    }

    #[test]
    fn icon_goes_first() {
        let mut req = request(&["Add"]);
        req.icon = Some("+".to_string());
        let props = build_props(None, None, req).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(props.children, vec![Child::icon("+"), Child::label("Add")]);
    }

    #[test]
    fn unknown_placement_is_an_error() {
        let mut req = request(&["x"]);
        req.placement = "middle".to_string();
        assert!(build_props(None, None, req).is_err());
    }

    #[test]
    fn disabled_render_drops_click_and_href() {
        let mut req = request(&["Docs"]);
        req.disabled = true;
        req.href = Some("https://example.org".to_string());
        let props = build_props(Some(ButtonStyle::Link), None, req).unwrap_or_else(|e| panic!("{e}"));
        let tree = render_tree(props, &Theme::light());
        let ButtonTree::Button(node) = tree else {
            panic!("no tooltip requested");
        };
        assert!(node.on_click.is_none());
        assert!(node.href.is_none());
    }

    #[test]
    fn theme_file_wins_over_name() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("{e}"));
        let path = dir.path().join("theme.toml");
        Theme::dark()
            .save_toml_file(&path)
            .unwrap_or_else(|e| panic!("{e}"));
        let args = ThemeArgs {
            theme: Some("light".to_string()),
            theme_file: Some(path),
        };
        let theme = select_theme(&args).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(theme, Theme::dark());
    }

    #[test]
    fn every_format_prints() {
        let theme = ThemeArgs {
            theme: Some("light".to_string()),
            theme_file: None,
        };
        let style = StyleArgs {
            style: Some("warning".to_string()),
            size: Some("small".to_string()),
        };
        for format in [OutputFormat::Text, OutputFormat::Json, OutputFormat::Toml] {
            let mut req = request(&["Save"]);
            req.disabled = true;
            req.tooltip = Some("Read only".to_string());
            assert!(render(&style, &theme, req, format).is_ok());
            assert!(resolve(&style, &theme, None, format).is_ok());
            assert!(resolve(&style, &theme, Some("hovered"), format).is_ok());
        }
    }

    #[test]
    fn named_theme() {
        let args = ThemeArgs {
            theme: Some("DARK".to_string()),
            theme_file: None,
        };
        assert_eq!(
            select_theme(&args).unwrap_or_else(|e| panic!("{e}")),
            Theme::dark()
        );
    }
}
