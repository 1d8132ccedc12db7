// crates/xml/src/lib.rs
//! Minimal XML element tree and serializer used to build podcast feeds
//!
//! The tree supports exactly what feed generation needs:
//! - Appending children (new elements or pre-built subtrees)
//! - Finding a direct child by name and attribute values
//! - Rendering the whole document to a string
//!
//! Output is deterministic: attributes keep insertion order, every element
//! gets an explicit closing tag and nesting is indented by four spaces.
//!
//! # Example
//!
//! ```rust
//! use podfeed_xml::XmlDocument;
//!
//! let mut document = XmlDocument::with_root_attributes(&[("version", "2.0")])?;
//! let channel = document.set_root("rss")?.add_child("channel")?;
//! channel.add_text_child("title", "My Podcast")?;
//!
//! let xml = document.render()?;
//! assert!(xml.contains("    <channel>\n        <title>My Podcast</title>\n    </channel>"));
//! # Ok::<(), podfeed_xml::XmlError>(())
//! ```

mod document;
mod error;
pub mod escape;
mod node;

pub use document::{XmlDocument, XML_DECLARATION};
pub use error::{XmlError, XmlResult};
pub use node::{Attributes, XmlNode, XmlText, INDENT_UNIT};
