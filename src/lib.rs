//! Terminal client for the MovieBuffs catalogue.
//!
//! The presenter owns the fetch lifecycle and navigation state, the layout
//! module turns them into a render plan for the current terminal width, and
//! the ui module draws that plan with ratatui.

pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod layout;
pub mod logger;
pub mod movies;
pub mod presenter;
pub mod state;
pub mod ui;
pub mod utils;
