//! HTTP client for the remote product catalog.
//!
//! Two read-only operations, each issuing exactly one GET: the default
//! listing page and a single item by identifier. Non-success statuses become
//! [`CatalogError::Fetch`]; bodies are decoded into the typed remote shape
//! and validated before normalization, so a malformed body surfaces as
//! [`CatalogError::Parse`] and never as a partial result.
//!
//! There are no retries and no caching. The request timeout is whatever
//! `reqwest` defaults to.

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use storefront_core::{AppConfig, CatalogItem};

use crate::error::{CatalogError, ITEM_NOT_FOUND_MESSAGE, LIST_FAILED_MESSAGE};
use crate::normalize::{normalize_envelope, normalize_item};
use crate::types::{RemoteEnvelope, RemoteItem};

const DEFAULT_BASE_URL: &str = "https://dummyjson.com/";

/// Client for the remote catalog API.
///
/// Holds no mutable state; share it by reference across concurrent calls.
/// Use [`CatalogClient::new`] for the public catalog or
/// [`CatalogClient::with_base_url`] to point at a mock server in tests.
pub struct CatalogClient {
    client: Client,
    base_url: Url,
}

impl CatalogClient {
    /// Creates a client pointed at the public catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(user_agent: &str) -> Result<Self, CatalogError> {
        Self::with_base_url(user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a client from application configuration.
    ///
    /// # Errors
    ///
    /// See [`CatalogClient::with_base_url`].
    pub fn from_config(config: &AppConfig) -> Result<Self, CatalogError> {
        Self::with_base_url(&config.user_agent, &config.catalog_base_url)
    }

    /// Creates a client with a custom base URL.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`CatalogError::InvalidBaseUrl`] if
    /// `base_url` is not an absolute URL that can carry a path.
    pub fn with_base_url(user_agent: &str, base_url: &str) -> Result<Self, CatalogError> {
        let client = Client::builder().user_agent(user_agent).build()?;

        // One trailing slash so appended segments land under the base path.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let parsed = Url::parse(&normalised).map_err(|e| CatalogError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: e.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(CatalogError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: "URL cannot carry a path".to_owned(),
            });
        }

        Ok(Self {
            client,
            base_url: parsed,
        })
    }

    /// Lists the catalog's default first page, in upstream order.
    ///
    /// Sends `GET <base>/products` with no query parameters. An empty
    /// `products` array yields an empty `Vec`, not an error.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Fetch`] ("could not retrieve items") on a non-2xx status.
    /// - [`CatalogError::Parse`] if the body is not a valid envelope.
    /// - [`CatalogError::Http`] on network failure.
    pub async fn list_items(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        let url = self.endpoint(&["products"]);

        let envelope = self
            .request_json::<RemoteEnvelope>(&url, LIST_FAILED_MESSAGE)
            .await
            .and_then(|envelope| {
                envelope.validate().map_err(|reason| CatalogError::Parse {
                    context: url.to_string(),
                    reason,
                })?;
                Ok(envelope)
            })
            .inspect_err(|e| log_failure("list_items", &url, e))?;

        let total = envelope.total;
        let items = normalize_envelope(envelope);
        tracing::debug!(url = %url, count = items.len(), total, "listed catalog items");
        Ok(items)
    }

    /// Fetches a single item by its identifier.
    ///
    /// Sends `GET <base>/products/{id}`.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::Fetch`] ("item not found") on any non-2xx status, 404 included.
    /// - [`CatalogError::Parse`] if the body is not a valid item.
    /// - [`CatalogError::Http`] on network failure.
    pub async fn get_item(&self, id: u64) -> Result<CatalogItem, CatalogError> {
        let id_segment = id.to_string();
        let url = self.endpoint(&["products", &id_segment]);

        let item = self
            .request_json::<RemoteItem>(&url, ITEM_NOT_FOUND_MESSAGE)
            .await
            .and_then(|item| {
                item.validate().map_err(|reason| CatalogError::Parse {
                    context: url.to_string(),
                    reason,
                })?;
                Ok(item)
            })
            .inspect_err(|e| log_failure("get_item", &url, e))?;

        tracing::debug!(url = %url, id, "fetched catalog item");
        Ok(normalize_item(item))
    }

    /// Appends path segments to the base URL.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in the constructor: the base URL can always carry a path.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends a GET request, maps a non-2xx status to [`CatalogError::Fetch`]
    /// carrying `failure_message`, and decodes the body as `T`.
    async fn request_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        failure_message: &str,
    ) -> Result<T, CatalogError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(CatalogError::Fetch {
                message: failure_message.to_owned(),
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| CatalogError::Parse {
            context: url.to_string(),
            reason: e.to_string(),
        })
    }
}

fn log_failure(operation: &str, url: &Url, err: &CatalogError) {
    match err {
        CatalogError::Fetch { status, .. } => {
            tracing::error!(operation, url = %url, status, error = %err, "catalog request failed");
        }
        _ => tracing::error!(operation, url = %url, error = %err, "catalog request failed"),
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
