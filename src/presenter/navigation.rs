//! Navigation-related state types.
//!
//! This module contains the page enum and the list/detail navigation record.

use crate::movies::MovieItem;

/// Specifying the different logical pages.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Page {
    List,
    Detail,
}

/// Which page is active and which movie, if any, was last selected.
///
/// Fields are private: the only way onto `Page::Detail` is `select_item`,
/// so a detail page always carries a movie.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct NavigationState {
    page: Page,
    selected: Option<MovieItem>,
}

impl Default for NavigationState {
    fn default() -> Self {
        NavigationState {
            page: Page::List,
            selected: None,
        }
    }
}

impl NavigationState {
    /// Return the active page.
    ///
    pub fn page(&self) -> Page {
        self.page
    }

    /// Return the selected movie. Still set after returning to the list.
    ///
    pub fn selected(&self) -> Option<&MovieItem> {
        self.selected.as_ref()
    }

    /// Return the state showing the detail page for the given movie.
    ///
    pub fn select_item(&self, item: MovieItem) -> NavigationState {
        NavigationState {
            page: Page::Detail,
            selected: Some(item),
        }
    }

    /// Return the state showing the list page, keeping the selection.
    ///
    pub fn return_to_list(&self) -> NavigationState {
        NavigationState {
            page: Page::List,
            selected: self.selected.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::{Fake, Faker};

    #[test]
    fn test_page() {
        assert_eq!(Page::List, Page::List);
        assert_eq!(Page::Detail, Page::Detail);
        assert_ne!(Page::List, Page::Detail);
    }

    #[test]
    fn initial_state() {
        let state = NavigationState::default();
        assert_eq!(state.page(), Page::List);
        assert!(state.selected().is_none());
    }

    #[test]
    fn select_item() {
        let movie: MovieItem = Faker.fake();
        let state = NavigationState::default().select_item(movie.to_owned());
        assert_eq!(state.page(), Page::Detail);
        assert_eq!(state.selected(), Some(&movie));
    }

    #[test]
    fn select_item_replaces_previous_selection() {
        let first: MovieItem = Faker.fake();
        let second: MovieItem = Faker.fake();
        let state = NavigationState::default()
            .select_item(first)
            .select_item(second.to_owned());
        assert_eq!(state.selected(), Some(&second));
    }

    #[test]
    fn return_to_list_keeps_selection() {
        let movie: MovieItem = Faker.fake();
        let state = NavigationState::default()
            .select_item(movie.to_owned())
            .return_to_list();
        assert_eq!(state.page(), Page::List);
        assert_eq!(state.selected(), Some(&movie));
    }

    #[test]
    fn return_to_list_is_idempotent() {
        let movie: MovieItem = Faker.fake();
        let once = NavigationState::default()
            .select_item(movie)
            .return_to_list();
        let twice = once.return_to_list();
        assert_eq!(once, twice);
    }
}
