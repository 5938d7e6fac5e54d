use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

mod commands;
mod output;

use output::OutputFormat;

#[derive(Parser)]
#[command(name = "ssb")]
#[command(about = "Inspect semantic button styles - resolved colors, classes and render trees", long_about = None)]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ThemeArgs {
    /// Built-in theme (light, dark, auto); defaults to the config file choice
    #[arg(short, long)]
    theme: Option<String>,

    /// TOML theme file; takes precedence over --theme
    #[arg(long)]
    theme_file: Option<PathBuf>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct StyleArgs {
    /// Button style; unknown names fall back to `default`
    #[arg(short, long)]
    style: Option<String>,

    /// Button size (default, small, xsmall); unknown names fall back to `default`
    #[arg(short = 'z', long)]
    size: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved style attributes of a style/size pair
    Resolve {
        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        theme: ThemeArgs,

        /// Only print the colors of one interaction state
        #[arg(long)]
        state: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the class list a button carries
    Classes {
        /// Button style; omit to see the marker of an unset style
        #[arg(short, long)]
        style: Option<String>,

        /// Extra caller class
        #[arg(long)]
        class_name: Option<String>,

        #[arg(long)]
        cta: bool,
    },

    /// Print the render tree of a fully specified button
    Render {
        #[command(flatten)]
        style: StyleArgs,

        #[command(flatten)]
        theme: ThemeArgs,

        /// Text labels, in order
        #[arg(short, long = "label")]
        labels: Vec<String>,

        /// Icon glyph placed before the labels
        #[arg(short, long)]
        icon: Option<String>,

        #[arg(short, long)]
        disabled: bool,

        /// Tooltip content
        #[arg(long)]
        tooltip: Option<String>,

        /// Tooltip placement (top, topLeft, ..., rightBottom)
        #[arg(long, default_value = "top")]
        placement: String,

        #[arg(long)]
        cta: bool,

        /// Do not separate the first child from the rest
        #[arg(long)]
        no_margin_right: bool,

        #[arg(long)]
        href: Option<String>,

        #[arg(long)]
        class_name: Option<String>,

        /// Pass-through attribute as key=value (repeatable)
        #[arg(short, long = "attr", value_parser = commands::parse_attr)]
        attrs: Vec<(String, String)>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List built-in themes or dump one as TOML
    Themes {
        /// Theme to print as a TOML theme file
        #[arg(long)]
        dump: Option<String>,
    },

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    output::setup_logger(cli.verbose)?;

    match cli.command {
        Commands::Resolve {
            style,
            theme,
            state,
            format,
        } => commands::resolve(&style, &theme, state.as_deref(), format)?,
        Commands::Classes {
            style,
            class_name,
            cta,
        } => commands::classes(style.as_deref(), class_name.as_deref(), cta),
        Commands::Render {
            style,
            theme,
            labels,
            icon,
            disabled,
            tooltip,
            placement,
            cta,
            no_margin_right,
            href,
            class_name,
            attrs,
            format,
        } => {
            let request = commands::RenderRequest {
                labels,
                icon,
                disabled,
                tooltip,
                placement,
                cta,
                show_margin_right: !no_margin_right,
                href,
                class_name,
                attrs,
            };
            commands::render(&style, &theme, request, format)?;
        }
        Commands::Themes { dump } => commands::themes(dump.as_deref())?,
        Commands::Completions { shell } => commands::generate_completions(shell),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_resolve() {
        let cli = Cli::try_parse_from([
            "ssb", "resolve", "--style", "warning", "-z", "small", "--format", "json",
        ])
        .unwrap_or_else(|e| panic!("{e}"));
        let Commands::Resolve { style, format, .. } = cli.command else {
            panic!("expected resolve");
        };
        assert_eq!(style.style.as_deref(), Some("warning"));
        assert_eq!(style.size.as_deref(), Some("small"));
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn parses_render_flags() {
        let cli = Cli::try_parse_from([
            "ssb",
            "-vv",
            "render",
            "--label",
            "Save",
            "--icon",
            "+",
            "--disabled",
            "--tooltip",
            "nope",
            "--attr",
            "data-test=save",
        ])
        .unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(cli.verbose, 2);
        let Commands::Render {
            labels,
            icon,
            disabled,
            attrs,
            placement,
            ..
        } = cli.command
        else {
            panic!("expected render");
        };
        assert_eq!(labels, vec!["Save"]);
        assert_eq!(icon.as_deref(), Some("+"));
        assert!(disabled);
        assert_eq!(attrs, vec![("data-test".to_string(), "save".to_string())]);
        assert_eq!(placement, "top");
    }

    #[test]
    fn rejects_malformed_attr() {
        assert!(Cli::try_parse_from(["ssb", "render", "--attr", "novalue"]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
