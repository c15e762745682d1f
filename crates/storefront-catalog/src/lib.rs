pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use normalize::{normalize_envelope, normalize_item};
pub use types::{RemoteEnvelope, RemoteItem};
