//! HTTP client for seed-list requests.
//!
//! This module provides a low-level HTTP client wrapper for fetching the
//! published item-name lists, handling status checking and response parsing.

use super::error::GrailError;

/// Fetches published name lists and conforms them to string vectors.
///
pub struct Client {
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created. This should never happen
    /// in practice as reqwest::Client::builder().build() only fails on
    /// invalid configuration, which we don't use.
    pub fn new(base_url: &str) -> Self {
        Client {
            base_url: base_url.to_owned(),
            http_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client - this should never happen"),
        }
    }

    /// Return the item-name list published under the given resource stem,
    /// or an error when the resource is unreachable or not a name list.
    ///
    pub async fn names(&self, resource: &str) -> Result<Vec<String>, GrailError> {
        let url = format!("{}/{}.json", self.base_url, resource);
        let response = self.http_client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            log::error!("Seed request for '{}' failed with status {}", resource, status);
            return Err(GrailError::ResourceStatus {
                resource: resource.to_owned(),
                status: status.as_u16(),
            });
        }

        let response_bytes = response.bytes().await?;
        match serde_json::from_slice::<Vec<String>>(&response_bytes) {
            Ok(names) => {
                log::debug!("Fetched {} names from '{}'", names.len(), resource);
                Ok(names)
            }
            Err(e) => {
                log::error!(
                    "Failed to parse seed resource '{}' as a name list: {}. Response body: {}",
                    resource,
                    e,
                    String::from_utf8_lossy(&response_bytes)
                );
                Err(GrailError::Unparseable {
                    resource: resource.to_owned(),
                    message: e.to_string(),
                })
            }
        }
    }
}
