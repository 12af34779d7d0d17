//! Application state management module.
//!
//! This module contains the session state the terminal loop works on:
//! - `State`, which owns the `Presenter` next to presentation-only data
//!   such as the list cursor, spinner and log pane
//! - State error handling

mod error;
mod state_impl;

pub use error::StateError;
pub use state_impl::State;
