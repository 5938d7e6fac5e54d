#![windows_subsystem = "windows"]

use fern::{
    colors::{Color, ColoredLevelConfig},
    FormatCallback,
};
use log::Record;
use ssb_core::config::Config;
use ssb_core::CACHE_DIR;
use std::{fmt::Arguments, fs::OpenOptions};

use ssb_gui::gui::Gallery;

fn main() -> iced::Result {
    let level = Config::load_configuration_file().log_level();
    if let Err(e) = setup_logger(level) {
        eprintln!("Logging disabled: {e}");
    }
    Gallery::start()
}

/// Crates whose records pass the configured level; everything else is held
/// at `Warn`.
const OWN_TARGETS: [&str; 2] = ["ssb_gui", "ssb_core"];

/// Stdout only shows problems; the full configured level lands in the file.
fn sink_levels(level: log::LevelFilter) -> (log::LevelFilter, log::LevelFilter) {
    (level, level.min(log::LevelFilter::Warn))
}

fn sink(level: log::LevelFilter, use_colors: bool) -> fern::Dispatch {
    let colors = ColoredLevelConfig::new().info(Color::Green);
    let own = OWN_TARGETS
        .into_iter()
        .fold(fern::Dispatch::new().level(log::LevelFilter::Warn), |d, target| {
            d.level_for(target, level)
        });

    own.format(
        move |out: FormatCallback, message: &Arguments, record: &Record| {
            let tag = if use_colors {
                format!("{:5}", colors.color(record.level()))
            } else {
                format!("{:5}", record.level())
            };
            out.finish(format_args!(
                "{} {tag} [{}] {message}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.target(),
            ));
        },
    )
}

/// Gallery logs go to `ssb.log` in the cache dir at the configured level and
/// to stdout at `Warn` and above.
fn setup_logger(level: log::LevelFilter) -> Result<(), fern::InitError> {
    #[cfg(target_os = "windows")]
    {
        attach_windows_console();
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(CACHE_DIR.join("ssb.log"))?;
    let (file_level, stdout_level) = sink_levels(level);

    fern::Dispatch::new()
        .chain(sink(stdout_level, true).chain(std::io::stdout()))
        .chain(sink(file_level, false).chain(log_file))
        .apply()?;

    Ok(())
}

/// (Windows) Allow the application to display logs to the terminal
/// regardless if it was compiled with `windows_subsystem = "windows"`.
///
/// This is excluded on non-Windows targets.
#[cfg(target_os = "windows")]
fn attach_windows_console() {
    use win32console::console::WinConsole;

    const ATTACH_PARENT_PROCESS: u32 = 0xFFFFFFFF;
    let _ = WinConsole::attach_console(ATTACH_PARENT_PROCESS);
}

#[cfg(test)]
mod tests {
    use super::*;
    #[test]
    fn stdout_never_gets_chattier_than_warn() {
        use log::LevelFilter;
        assert_eq!(
            sink_levels(LevelFilter::Debug),
            (LevelFilter::Debug, LevelFilter::Warn)
        );
        assert_eq!(
            sink_levels(LevelFilter::Error),
            (LevelFilter::Error, LevelFilter::Error)
        );
    }

    #[test]
    fn init_logger() {
        match setup_logger(log::LevelFilter::Debug) {
            Ok(()) => (),
            Err(error) => panic!("Error: {error}"),
        }
    }
}
