use thiserror::Error;

/// Message carried by [`CatalogError::Fetch`] when the listing endpoint fails.
pub const LIST_FAILED_MESSAGE: &str = "could not retrieve items";

/// Message carried by [`CatalogError::Fetch`] when a single-item lookup fails.
pub const ITEM_NOT_FOUND_MESSAGE: &str = "item not found";

/// Errors returned by [`crate::CatalogClient`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The remote catalog answered with a non-success HTTP status.
    #[error("{message} (HTTP {status} from {url})")]
    Fetch {
        message: String,
        status: u16,
        url: String,
    },

    /// The response body is not JSON, does not match the expected shape, or
    /// carries values the catalog does not allow.
    #[error("could not parse response from {context}: {reason}")]
    Parse { context: String, reason: String },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}
