use std::fmt::Display;

/// Shown when the catalog listing cannot be loaded.
pub const LIST_FAILED: &str = "Could not load products.";

/// Shown when a product detail page cannot be loaded.
pub const DETAIL_FAILED: &str = "Could not load the product.";

/// Local state of one rendered page.
#[derive(Debug)]
pub enum PageState<T> {
    Loading,
    /// Fixed user-facing message; the underlying error is only logged.
    Error(String),
    Loaded(T),
}

impl<T> PageState<T> {
    /// Settles a page from a fetch result, logging the error if there was one.
    pub fn from_result<E: Display>(result: Result<T, E>, failure_message: &str) -> Self {
        match result {
            Ok(value) => PageState::Loaded(value),
            Err(err) => {
                tracing::error!(error = %err, "{failure_message}");
                PageState::Error(failure_message.to_owned())
            }
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PageState::Error(_))
    }
}
