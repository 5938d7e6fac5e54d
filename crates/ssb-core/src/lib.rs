#![allow(
    clippy::missing_errors_doc,
    clippy::float_cmp,
    reason = "Style tables compare exact token values"
)]

pub mod appearance;
pub mod color;
pub mod config;
pub mod render;
pub mod spacing;
pub mod style;
pub mod theme;
pub mod utils;

pub use appearance::{resolve_button_appearance, InteractionState, StateStyle, StyleAttributes};
pub use color::Color;
pub use render::{render, ButtonNode, ButtonProps, ButtonTree, TooltipPlacement};
pub use spacing::Child;
pub use style::{ButtonSize, ButtonStyle, StyleCategory};
pub use theme::{Theme, ThemeName};

use std::path::PathBuf;
use std::sync::LazyLock;
pub static CONFIG_DIR: LazyLock<PathBuf> = LazyLock::new(|| {
    utils::setup_ssb_dir(&dirs::config_dir().unwrap_or_else(std::env::temp_dir))
});
pub static CACHE_DIR: LazyLock<PathBuf> = LazyLock::new(|| {
    utils::setup_ssb_dir(&dirs::cache_dir().unwrap_or_else(std::env::temp_dir))
});
