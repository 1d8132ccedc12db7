// crates/feed-builder/src/error.rs
//! Error types for feed building

use podfeed_xml::XmlError;
use thiserror::Error;

/// Result type for feed builder operations
pub type FeedResult<T> = Result<T, FeedError>;

/// Errors that can occur while assembling a feed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The element tree rejected a name or could not be rendered
    #[error("XML error: {0}")]
    Xml(#[from] XmlError),

    /// Duration text is not `H:MM:SS`, `M:SS` or whole seconds
    #[error("Invalid duration: {0:?}")]
    InvalidDuration(String),
}
