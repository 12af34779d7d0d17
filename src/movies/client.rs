//! HTTP client for MovieBuffs API requests.
//!
//! This module provides a low-level HTTP client wrapper for making requests
//! to the MovieBuffs service and conforming response bodies to wire models.

use super::MoviesError;
use reqwest::{Method, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Makes requests to MovieBuffs and tries to conform response data to the
/// given model.
///
#[derive(Clone)]
pub struct Client {
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL and request timeout.
    ///
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, MoviesError> {
        Ok(Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder().timeout(timeout).build()?,
        })
    }

    /// Return the vector of model data found at the path, in the order the
    /// service sent it.
    ///
    pub async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, MoviesError> {
        let response = self.call(Method::GET, path).await?;
        let status = response.status();

        // Check status before trying to deserialize
        if !status.is_success() {
            let response_text = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("Unable to read response"));
            log::error!(
                "API request failed with status {}: {}",
                status,
                response_text
            );
            return Err(MoviesError::ApiError {
                status: status.as_u16(),
                message: response_text,
            });
        }

        let response_bytes = response.bytes().await?;
        match serde_json::from_slice::<Vec<T>>(&response_bytes) {
            Ok(data) => {
                log::debug!("Fetched {} records from '{}'", data.len(), path);
                Ok(data)
            }
            Err(e) => {
                log::error!(
                    "Failed to deserialize API response: {}. Response body: {}",
                    e,
                    String::from_utf8_lossy(&response_bytes)
                );
                Err(e.into())
            }
        }
    }

    /// Make request and return the raw response or error.
    ///
    async fn call(&self, method: Method, path: &str) -> Result<Response, MoviesError> {
        let request_url = format!("{}/{}", &self.base_url, path.trim_start_matches('/'));
        log::trace!("{} {}", method, request_url);
        Ok(self.http_client.request(method, &request_url).send().await?)
    }
}
