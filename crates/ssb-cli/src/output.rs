use clap::ValueEnum;
use fern::colors::{Color, ColoredLevelConfig};
use ssb_core::{ButtonTree, InteractionState, StyleAttributes};
use std::fmt::Write;

/// Helper macro to handle broken pipe errors gracefully
/// When piping to commands like `head`, we want to exit cleanly when the pipe closes
#[macro_export]
macro_rules! println_or_exit {
    () => {
        let _ = writeln!(std::io::stdout());
    };
    ($($arg:tt)*) => {
        let _ = writeln!(std::io::stdout(), $($arg)*);
    };
}

#[macro_export]
macro_rules! print_or_exit {
    ($($arg:tt)*) => {
        let _ = write!(std::io::stdout(), $($arg)*);
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Toml,
}

/// Stderr logger; stdout stays reserved for command output.
pub fn setup_logger(verbosity: u8) -> Result<(), fern::InitError> {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let colors = ColoredLevelConfig::new()
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
        .debug(Color::Blue)
        .trace(Color::BrightBlack);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} {} [{}] {}",
                chrono::Local::now().format("%H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ));
        })
        .level(log::LevelFilter::Off)
        .level_for("ssb_cli", level)
        .level_for("ssb_core", level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}

/// One `name: value` line per attribute.
#[must_use]
pub fn describe_attributes(attrs: &StyleAttributes) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "category: {}", attrs.category);
    let _ = writeln!(out, "danger: {}", attrs.danger);
    let _ = writeln!(out, "height: {}", attrs.height);
    let _ = writeln!(out, "horizontal-padding: {}", attrs.horizontal_padding);
    let _ = writeln!(out, "background: {}", attrs.background);
    let _ = writeln!(out, "background-hover: {}", attrs.background_hover);
    let _ = writeln!(out, "background-active: {}", attrs.background_active);
    let _ = writeln!(out, "background-disabled: {}", attrs.background_disabled);
    let _ = writeln!(out, "text: {}", attrs.text);
    let _ = writeln!(out, "text-hover: {}", attrs.text_hover);
    let _ = writeln!(out, "text-disabled: {}", attrs.text_disabled);
    let _ = writeln!(out, "border: {} {}", attrs.border_width, attrs.border_style);
    let _ = writeln!(out, "border-color: {}", attrs.border);
    let _ = writeln!(out, "border-hover: {}", attrs.border_hover);
    let _ = writeln!(out, "border-disabled: {}", attrs.border_disabled);
    let _ = writeln!(out, "border-radius: {}", attrs.border_radius);
    let _ = writeln!(out, "font: {} / {}", attrs.font_size, attrs.font_weight);
    let _ = writeln!(out, "line-height: {}", attrs.line_height);
    let _ = writeln!(out, "transition: {}s", attrs.transition_timing);
    out
}

#[must_use]
pub fn describe_state(attrs: &StyleAttributes, state: InteractionState) -> String {
    let s = attrs.state(state);
    let mut out = String::new();
    let _ = writeln!(out, "state: {state}");
    let _ = writeln!(out, "background: {}", s.background);
    let _ = writeln!(out, "text: {}", s.text);
    let _ = writeln!(out, "border: {} {} {}", s.border_width, s.border_style, s.border);
    let _ = writeln!(out, "interactive: {}", s.interactive);
    out
}

/// Indented outline of a render tree, outermost node first.
#[must_use]
pub fn describe_tree<M>(tree: &ButtonTree<M>) -> String {
    let mut out = String::new();
    write_tree(&mut out, tree, 0);
    out
}

fn write_tree<M>(out: &mut String, tree: &ButtonTree<M>, depth: usize) {
    let pad = "  ".repeat(depth);
    match tree {
        ButtonTree::Tooltip {
            placement,
            content,
            trigger,
        } => {
            let _ = writeln!(out, "{pad}tooltip ({placement}): {content:?}");
            write_tree(out, trigger, depth + 1);
        }
        ButtonTree::Inert {
            sibling_margin,
            child,
            ..
        } => {
            let _ = writeln!(out, "{pad}inert (cursor: not-allowed, margin-left: {sibling_margin})");
            write_tree(out, child, depth + 1);
        }
        ButtonTree::Button(node) => {
            let classes: Vec<String> = node.class_names.iter().map(|c| format!(".{c}")).collect();
            let _ = writeln!(out, "{pad}button {}", classes.join(" "));
            let _ = writeln!(out, "{pad}  disabled: {}", node.disabled);
            if let Some(href) = &node.href {
                let _ = writeln!(out, "{pad}  href: {href}");
            }
            let _ = writeln!(out, "{pad}  size: {}x{}", node.appearance.height, node.appearance.horizontal_padding);
            let _ = writeln!(out, "{pad}  first-child margin: {}", node.first_child_margin);
            if let Some(w) = node.min_width {
                let _ = writeln!(out, "{pad}  min-width: {w}");
            }
            if let Some(h) = node.min_height {
                let _ = writeln!(out, "{pad}  min-height: {h}");
            }
            for (key, value) in &node.attributes {
                let _ = writeln!(out, "{pad}  {key}={value:?}");
            }
            let children = serde_json::to_string(&node.children).unwrap_or_default();
            let _ = writeln!(out, "{pad}  children: {children}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssb_core::{resolve_button_appearance, render, ButtonProps, ButtonStyle, Theme};

    #[test]
    fn attributes_list_every_color() {
        let attrs = resolve_button_appearance(Some(ButtonStyle::Warning), None, &Theme::light());
        let text = describe_attributes(&attrs);
        assert!(text.contains("category: primary"));
        assert!(text.contains(&format!("background: {}", attrs.background)));
        assert_eq!(text.lines().count(), 19);
    }

    #[test]
    fn disabled_state_is_not_interactive() {
        let attrs = resolve_button_appearance(None, None, &Theme::light());
        let text = describe_state(&attrs, InteractionState::Disabled);
        assert!(text.contains("state: disabled"));
        assert!(text.contains("interactive: false"));
    }

    #[test]
    fn disabled_tooltip_outline() {
        let props: ButtonProps<()> = ButtonProps::text("Save")
            .style(ButtonStyle::Primary)
            .disabled(true)
            .tooltip("No rights");
        let outline = describe_tree(&render(props, &Theme::light()));
        let lines: Vec<&str> = outline.lines().collect();
        assert_eq!(lines[0], "tooltip (top): \"No rights\"");
        assert!(lines[1].starts_with("  inert"));
        assert_eq!(lines[2], "    button .superset-button .superset-button-primary");
        assert_eq!(lines[3], "      disabled: true");
    }
}
