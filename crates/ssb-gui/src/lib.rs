#![allow(
    clippy::missing_errors_doc,
    reason = "Short-circuit doc lint to keep CI green"
)]

pub mod gui;
pub mod style;
pub mod widgets;
