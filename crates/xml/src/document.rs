//! Single-root document with optional XML declaration

use crate::error::{XmlError, XmlResult};
use crate::escape::is_valid_name;
use crate::node::{Attributes, XmlNode};

/// Declaration line written ahead of the root element
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// A document: root attributes plus exactly one root element.
///
/// Document-level attributes are written on the root element ahead of the
/// root node's own attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    declaration: bool,
    root_attributes: Attributes,
    root: Option<XmlNode>,
}

impl XmlDocument {
    /// Creates an empty document that renders a declaration line
    pub fn new() -> Self {
        Self {
            declaration: true,
            root_attributes: Attributes::new(),
            root: None,
        }
    }

    /// Creates an empty document whose root carries `attributes`, in order
    pub fn with_root_attributes(attributes: &[(&str, &str)]) -> XmlResult<Self> {
        let mut document = Self::new();
        for (key, value) in attributes {
            document.set_root_attribute(*key, *value)?;
        }
        Ok(document)
    }

    /// Sets a document-level attribute for the root element
    pub fn set_root_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> XmlResult<()> {
        let key = key.into();
        if !is_valid_name(&key) {
            return Err(XmlError::InvalidAttributeName(key));
        }
        self.root_attributes.insert(key, value.into());
        Ok(())
    }

    /// Returns the document-level root attributes
    pub fn root_attributes(&self) -> &Attributes {
        &self.root_attributes
    }

    /// Enables or disables the declaration line
    pub fn set_declaration(&mut self, enabled: bool) {
        self.declaration = enabled;
    }

    /// Returns true if a declaration line is rendered
    pub fn has_declaration(&self) -> bool {
        self.declaration
    }

    /// Creates the root element, replacing any previous root
    pub fn set_root(&mut self, name: &str) -> XmlResult<&mut XmlNode> {
        let node = XmlNode::new(name)?;
        Ok(self.set_root_node(node))
    }

    /// Installs a pre-built root element, replacing any previous root
    pub fn set_root_node(&mut self, node: XmlNode) -> &mut XmlNode {
        self.root.insert(node)
    }

    /// Returns the root element
    pub fn root(&self) -> Option<&XmlNode> {
        self.root.as_ref()
    }

    /// Returns the root element for modification
    pub fn root_mut(&mut self) -> Option<&mut XmlNode> {
        self.root.as_mut()
    }

    /// Renders the whole document, ending with a single newline
    pub fn render(&self) -> XmlResult<String> {
        let root = self.root.as_ref().ok_or(XmlError::MissingRoot)?;

        let mut out = String::new();
        if self.declaration {
            out.push_str(XML_DECLARATION);
            out.push('\n');
        }
        root.write_into(&mut out, 0, &self.root_attributes);
        out.push('\n');

        log::trace!("Rendered <{}> document ({} bytes)", root.name(), out.len());
        Ok(out)
    }
}

impl Default for XmlDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_root_fails() {
        let document = XmlDocument::new();
        assert_eq!(document.render(), Err(XmlError::MissingRoot));
    }

    #[test]
    fn test_failed_render_leaves_document_usable() {
        let mut document = XmlDocument::new();
        assert!(document.render().is_err());

        document.set_root("rss").unwrap();
        assert!(document.render().is_ok());
    }

    #[test]
    fn test_render_with_declaration() {
        let mut document = XmlDocument::new();
        document.set_root("rss").unwrap();
        assert_eq!(
            document.render().unwrap(),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<rss></rss>\n"
        );
    }

    #[test]
    fn test_render_without_declaration() {
        let mut document = XmlDocument::new();
        document.set_declaration(false);
        document.set_root("rss").unwrap();
        assert_eq!(document.render().unwrap(), "<rss></rss>\n");
    }

    #[test]
    fn test_root_attributes_precede_node_attributes() {
        let mut document =
            XmlDocument::with_root_attributes(&[("xmlns:itunes", "i"), ("version", "2.0")])
                .unwrap();
        document.set_declaration(false);
        let root = document.set_root("rss").unwrap();
        root.set_attribute("extra", "1").unwrap();
        root.set_attribute("version", "ignored").unwrap();

        assert_eq!(
            document.render().unwrap(),
            "<rss xmlns:itunes=\"i\" version=\"2.0\" extra=\"1\"></rss>\n"
        );
    }

    #[test]
    fn test_root_attributes_not_copied_onto_node() {
        let mut document = XmlDocument::with_root_attributes(&[("version", "2.0")]).unwrap();
        document.set_root("rss").unwrap();
        assert!(document.root().unwrap().attributes().is_empty());
    }

    #[test]
    fn test_single_trailing_newline() {
        let mut document = XmlDocument::new();
        let root = document.set_root("rss").unwrap();
        root.add_child("channel").unwrap();

        let rendered = document.render().unwrap();
        assert!(rendered.ends_with("</rss>\n"));
        assert!(!rendered.ends_with("\n\n"));
    }

    #[test]
    fn test_set_root_replaces_previous_root() {
        let mut document = XmlDocument::new();
        document.set_root("first").unwrap();
        document.set_root("second").unwrap();
        assert_eq!(document.root().map(XmlNode::name), Some("second"));
    }

    #[test]
    fn test_invalid_root_attribute_rejected() {
        assert!(XmlDocument::with_root_attributes(&[("bad key", "x")]).is_err());
    }
}
