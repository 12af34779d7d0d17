//! Presentation state management module.
//!
//! This module contains the state holders behind the list/detail screens:
//! - `DataState`, the lifecycle of the remote movie fetch
//! - `NavigationState`, the active page and selected movie
//! - `Presenter`, which owns both and is the only place either is replaced

mod data;
mod navigation;

pub use data::DataState;
pub use navigation::{NavigationState, Page};

use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::movies::{MovieItem, MoviesError};
use log::*;
use std::error::Error;

/// Identifies one fetch attempt. Strictly increasing per presenter.
///
pub type Generation = u64;

/// Which state holder was replaced.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Change {
    Data,
    Navigation,
}

/// Owned copy of both state holders at one version.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Snapshot {
    pub data: DataState,
    pub navigation: NavigationState,
    pub version: u64,
}

/// Callback told about every state replacement.
///
pub type Listener = Box<dyn Fn(Change, &DataState, &NavigationState) + Send>;

/// Owns the fetch lifecycle and navigation state for one session.
///
pub struct Presenter {
    net_sender: Option<NetworkEventSender>,
    data: DataState,
    navigation: NavigationState,
    generation: Generation,
    version: u64,
    listeners: Vec<Listener>,
}

impl Presenter {
    /// Return a new presenter with the first fetch already started.
    ///
    /// Without a sender the fetch is only recorded as in flight; its result
    /// has to be delivered through `complete_fetch`.
    ///
    pub fn new(net_sender: Option<NetworkEventSender>) -> Self {
        let mut presenter = Presenter {
            net_sender,
            data: DataState::Loading,
            navigation: NavigationState::default(),
            generation: 0,
            version: 0,
            listeners: vec![],
        };
        presenter.start_fetch();
        presenter
    }

    /// Returns the current fetch lifecycle state.
    ///
    pub fn data_state(&self) -> &DataState {
        &self.data
    }

    /// Returns the current navigation state.
    ///
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    /// Returns the number of state replacements so far.
    ///
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Returns the generation of the most recently started fetch.
    ///
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Returns an owned copy of both state holders.
    ///
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            data: self.data.clone(),
            navigation: self.navigation.clone(),
            version: self.version,
        }
    }

    /// Register a listener called after every state replacement.
    ///
    pub fn subscribe(&mut self, listener: Listener) -> &mut Self {
        self.listeners.push(listener);
        self
    }

    /// Start fetching the movie collection. The state is `Loading` before
    /// this returns; the outcome arrives later through `complete_fetch`.
    /// A fetch that cannot be handed to the network thread fails at once.
    ///
    pub fn start_fetch(&mut self) -> Generation {
        self.generation += 1;
        let generation = self.generation;
        debug!("Starting movie fetch #{}...", generation);
        self.set_data(DataState::Loading);
        if !self.dispatch(NetworkEvent::FetchMovies { generation }) {
            self.set_data(DataState::Failed);
        }
        generation
    }

    /// Start a fresh fetch, superseding any fetch still in flight.
    ///
    pub fn retry(&mut self) -> Generation {
        info!("Retrying movie fetch...");
        self.start_fetch()
    }

    /// Apply the outcome of fetch `generation`. Outcomes of superseded
    /// fetches are dropped and false is returned.
    ///
    pub fn complete_fetch(
        &mut self,
        generation: Generation,
        result: Result<Vec<MovieItem>, MoviesError>,
    ) -> bool {
        if generation != self.generation {
            debug!(
                "Dropping result of superseded fetch #{} (latest is #{}).",
                generation, self.generation
            );
            return false;
        }
        match result {
            Ok(items) => {
                info!("Received {} movies.", items.len());
                self.set_data(DataState::Loaded(items));
            }
            Err(e) => {
                error!("Failed to fetch movies: {}", e);
                let mut source = e.source();
                while let Some(err) = source {
                    error!("  Caused by: {}", err);
                    source = err.source();
                }
                self.set_data(DataState::Failed);
            }
        }
        true
    }

    /// Show the detail page for the given movie.
    ///
    pub fn select_item(&mut self, item: MovieItem) -> &mut Self {
        debug!("Selecting movie '{}'.", item.title);
        let navigation = self.navigation.select_item(item);
        self.set_navigation(navigation);
        self
    }

    /// Show the list page. The selected movie is kept.
    ///
    pub fn return_to_list(&mut self) -> &mut Self {
        if self.navigation.page() == Page::List {
            return self;
        }
        let navigation = self.navigation.return_to_list();
        self.set_navigation(navigation);
        self
    }

    fn set_data(&mut self, data: DataState) {
        self.data = data;
        self.notify(Change::Data);
    }

    fn set_navigation(&mut self, navigation: NavigationState) {
        self.navigation = navigation;
        self.notify(Change::Navigation);
    }

    fn notify(&mut self, change: Change) {
        self.version += 1;
        for listener in &self.listeners {
            listener(change, &self.data, &self.navigation);
        }
    }

    /// Dispatches an asynchronous network event. Returns false if the
    /// network thread is gone.
    ///
    fn dispatch(&self, event: NetworkEvent) -> bool {
        match &self.net_sender {
            Some(net_sender) => match net_sender.send(event) {
                Ok(_) => true,
                Err(err) => {
                    error!("Received error from network dispatch: {}", err);
                    false
                }
            },
            None => true,
        }
    }
}
