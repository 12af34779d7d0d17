//! MovieBuffs service access.
//!
//! This module owns everything that knows about the remote catalogue: the
//! HTTP client, the wire model and the `MovieSource` seam through which the
//! presenter receives its data.

mod client;
mod error;
mod resource;

pub use client::Client;
pub use error::MoviesError;
pub use resource::*;

use log::*;
use serde::Deserialize;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Future returned by a `MovieSource` fetch.
///
pub type FetchFuture = Pin<Box<dyn Future<Output = Result<Vec<MovieItem>, MoviesError>> + Send>>;

/// Anything able to produce the complete, ordered movie collection.
///
/// The presenter never reaches for a global client; it is handed one of these
/// so it can be driven by a fake in tests.
///
pub trait MovieSource: Send + Sync {
    fn fetch(&self) -> FetchFuture;
}

/// Record shape as served by the MovieBuffs endpoint.
///
#[derive(Debug, Deserialize)]
struct MovieRecord {
    id: String,
    title: String,
    #[serde(default)]
    img_src: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    date: String,
    #[serde(default)]
    rating: String,
    #[serde(rename = "reviewScore", default)]
    review_score: String,
    #[serde(default)]
    length: String,
}

impl From<MovieRecord> for MovieItem {
    fn from(record: MovieRecord) -> Self {
        MovieItem {
            id: record.id,
            title: record.title,
            poster_url: record.img_src,
            synopsis: record.description,
            release_date: record.date,
            rating: record.rating,
            review_score: record.review_score,
            runtime: record.length,
        }
    }
}

/// Responsible for asynchronous interaction with the MovieBuffs API including
/// transformation of response data into explicitly-defined types.
///
#[derive(Clone)]
pub struct MovieBuffs {
    client: Client,
    movies_path: String,
}

impl MovieBuffs {
    /// Returns a new instance for the given service location.
    ///
    pub fn new(base_url: &str, movies_path: &str, timeout: Duration) -> Result<Self, MoviesError> {
        debug!(
            "Initializing MovieBuffs client for {}/{}...",
            base_url, movies_path
        );
        Ok(MovieBuffs {
            client: Client::new(base_url, timeout)?,
            movies_path: movies_path.to_owned(),
        })
    }

    /// Returns the full movie collection in service order.
    ///
    pub async fn movies(&self) -> Result<Vec<MovieItem>, MoviesError> {
        debug!("Requesting movie collection...");
        let data: Vec<MovieRecord> = self.client.get_list(&self.movies_path).await?;
        debug!("Retrieved {} movies", data.len());
        Ok(data.into_iter().map(MovieItem::from).collect())
    }
}

impl MovieSource for MovieBuffs {
    fn fetch(&self) -> FetchFuture {
        let api = self.clone();
        Box::pin(async move { api.movies().await })
    }
}
