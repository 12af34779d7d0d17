//! Remote fetch lifecycle.

use crate::movies::MovieItem;

/// Lifecycle of the movie collection fetch. Exactly one variant is active at
/// any time and a new value replaces the old one wholesale.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DataState {
    #[default]
    Loading,
    Loaded(Vec<MovieItem>),
    Failed,
}

impl DataState {
    pub fn is_loading(&self) -> bool {
        matches!(self, DataState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, DataState::Loaded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, DataState::Failed)
    }

    /// Returns the loaded movies, or None while loading or after a failure.
    ///
    pub fn items(&self) -> Option<&[MovieItem]> {
        match self {
            DataState::Loaded(items) => Some(items),
            _ => None,
        }
    }

    /// Short name used in log output.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            DataState::Loading => "loading",
            DataState::Loaded(_) => "loaded",
            DataState::Failed => "failed",
        }
    }
}
