//! User interface module.
//!
//! This module handles all UI rendering using the `ratatui` library, including:
//! - Screen composition following the layout's render plan
//! - Theme management
//! - Widget components (spinner, styling)

type Frame<'a> = ratatui::Frame<'a>;

mod render;
mod theme;
mod widgets;

pub const SPINNER_FRAME_COUNT: usize = widgets::spinner::FRAMES.len();

pub use render::render;
pub use theme::Theme;
