//! Error types for tree construction and rendering

use thiserror::Error;

/// Result type for XML tree operations
pub type XmlResult<T> = Result<T, XmlError>;

/// Errors that can occur while building or rendering a tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XmlError {
    /// Rendering was requested before a root element was set
    #[error("Document has no root element")]
    MissingRoot,

    /// Element name is empty or not a valid XML name
    #[error("Invalid element name: {0:?}")]
    InvalidNodeName(String),

    /// Attribute name is empty or not a valid XML name
    #[error("Invalid attribute name: {0:?}")]
    InvalidAttributeName(String),

    /// Text or attribute value contains a character XML 1.0 forbids
    #[error("Character {0:?} is not allowed in XML")]
    InvalidCharacter(char),
}
