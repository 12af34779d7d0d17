//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// The movie list is not on screen
    #[error("Movies are not loaded")]
    MoviesNotLoaded,

    /// The list is empty or nothing is highlighted
    #[error("No movie is highlighted")]
    NothingHighlighted,
}
