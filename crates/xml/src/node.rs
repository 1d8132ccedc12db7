//! Ordered element tree

use crate::error::{XmlError, XmlResult};
use crate::escape::{escape_attribute, escape_text, find_invalid_char, is_valid_name, wrap_cdata};
use indexmap::IndexMap;

/// Indentation emitted per nesting level
pub const INDENT_UNIT: &str = "    ";

/// Attribute map; iteration follows insertion order
pub type Attributes = IndexMap<String, String>;

/// Text content of an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlText {
    /// Escaped character data
    Plain(String),
    /// Emitted verbatim inside a CDATA section
    CData(String),
}

impl XmlText {
    /// Creates plain (escaped) text
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Plain(text.into())
    }

    /// Creates CDATA text
    pub fn cdata(text: impl Into<String>) -> Self {
        Self::CData(text.into())
    }

    /// Returns the unescaped text
    pub fn as_str(&self) -> &str {
        match self {
            Self::Plain(text) | Self::CData(text) => text,
        }
    }

    /// Returns true for CDATA text
    pub fn is_cdata(&self) -> bool {
        matches!(self, Self::CData(_))
    }

    fn check(&self) -> XmlResult<()> {
        check_chars(self.as_str())
    }

    fn write_into(&self, out: &mut String) {
        match self {
            Self::Plain(text) => out.push_str(&escape_text(text)),
            Self::CData(text) => out.push_str(&wrap_cdata(text)),
        }
    }
}

fn check_chars(text: &str) -> XmlResult<()> {
    match find_invalid_char(text) {
        Some(c) => Err(XmlError::InvalidCharacter(c)),
        None => Ok(()),
    }
}

impl From<&str> for XmlText {
    fn from(text: &str) -> Self {
        Self::Plain(text.to_string())
    }
}

impl From<String> for XmlText {
    fn from(text: String) -> Self {
        Self::Plain(text)
    }
}

/// A single element: tag name, optional text, attributes and owned children.
///
/// Nodes are only ever created through [`XmlNode::new`] or the `add_*`
/// methods of a parent, so every tag name in a tree has been validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    name: String,
    value: Option<XmlText>,
    attributes: Attributes,
    children: Vec<XmlNode>,
}

impl XmlNode {
    /// Creates a detached element
    pub fn new(name: impl Into<String>) -> XmlResult<Self> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(XmlError::InvalidNodeName(name));
        }

        Ok(Self {
            name,
            value: None,
            attributes: Attributes::new(),
            children: Vec::new(),
        })
    }

    /// Sets the text content, consuming and returning the node
    pub fn with_value(mut self, value: impl Into<XmlText>) -> XmlResult<Self> {
        self.set_value(Some(value.into()))?;
        Ok(self)
    }

    /// Sets an attribute, consuming and returning the node
    pub fn with_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> XmlResult<Self> {
        self.set_attribute(key, value)?;
        Ok(self)
    }

    /// Returns the tag name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the text content, if any
    pub fn value(&self) -> Option<&XmlText> {
        self.value.as_ref()
    }

    /// Replaces the text content. Characters XML 1.0 forbids are rejected.
    pub fn set_value(&mut self, value: Option<XmlText>) -> XmlResult<()> {
        if let Some(text) = &value {
            text.check()?;
        }
        self.value = value;
        Ok(())
    }

    /// Returns all attributes in insertion order
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns a single attribute value
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Sets an attribute. An existing key keeps its position.
    pub fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> XmlResult<()> {
        let key = key.into();
        if !is_valid_name(&key) {
            return Err(XmlError::InvalidAttributeName(key));
        }
        let value = value.into();
        check_chars(&value)?;
        self.attributes.insert(key, value);
        Ok(())
    }

    /// Returns the direct children in document order
    pub fn children(&self) -> &[XmlNode] {
        &self.children
    }

    /// Returns the direct children with the given tag name
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlNode> + 'a {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// Appends an empty child element and returns it
    pub fn add_child(&mut self, name: &str) -> XmlResult<&mut XmlNode> {
        self.add_child_with(name, None, &[])
    }

    /// Appends a child element holding plain text and returns it
    pub fn add_text_child(
        &mut self,
        name: &str,
        value: impl Into<XmlText>,
    ) -> XmlResult<&mut XmlNode> {
        self.add_child_with(name, Some(value.into()), &[])
    }

    /// Appends a child element with the given text and attributes.
    ///
    /// Always appends: an existing sibling with the same name and attributes
    /// is left alone and a second element is created.
    pub fn add_child_with(
        &mut self,
        name: &str,
        value: Option<XmlText>,
        attributes: &[(&str, &str)],
    ) -> XmlResult<&mut XmlNode> {
        let mut child = XmlNode::new(name)?;
        child.set_value(value)?;
        for (key, attr_value) in attributes {
            child.set_attribute(*key, *attr_value)?;
        }
        Ok(self.append_child(child))
    }

    /// Appends an already built subtree as the last child
    pub fn append_child(&mut self, child: XmlNode) -> &mut XmlNode {
        let index = self.children.len();
        self.children.push(child);
        &mut self.children[index]
    }

    /// Returns true if this node has the given name and carries every
    /// supplied attribute with an equal value
    pub fn matches(&self, name: &str, attributes: &[(&str, &str)]) -> bool {
        self.name == name
            && attributes
                .iter()
                .all(|(key, value)| self.attribute(key) == Some(*value))
    }

    /// Returns true if any direct child matches
    pub fn has_child(&self, name: &str, attributes: &[(&str, &str)]) -> bool {
        self.children
            .iter()
            .any(|child| child.matches(name, attributes))
    }

    /// Returns the first matching direct child
    pub fn get_child(&self, name: &str, attributes: &[(&str, &str)]) -> Option<&XmlNode> {
        self.children
            .iter()
            .find(|child| child.matches(name, attributes))
    }

    /// Returns the first matching direct child for modification
    pub fn get_child_mut(
        &mut self,
        name: &str,
        attributes: &[(&str, &str)],
    ) -> Option<&mut XmlNode> {
        self.children
            .iter_mut()
            .find(|child| child.matches(name, attributes))
    }

    /// Returns the first matching direct child, appending a new one with
    /// exactly `attributes` when none exists
    pub fn find_or_add_child(
        &mut self,
        name: &str,
        attributes: &[(&str, &str)],
    ) -> XmlResult<&mut XmlNode> {
        match self
            .children
            .iter()
            .position(|child| child.matches(name, attributes))
        {
            Some(index) => Ok(&mut self.children[index]),
            None => self.add_child_with(name, None, attributes),
        }
    }

    /// Renders this subtree, starting `indent` levels deep.
    ///
    /// The result has no trailing newline.
    pub fn render(&self, indent: usize) -> String {
        let mut out = String::new();
        self.write_into(&mut out, indent, &Attributes::new());
        out
    }

    /// Writes the subtree, emitting `leading` attributes before the node's own.
    /// Own attributes whose key appears in `leading` are skipped.
    pub(crate) fn write_into(&self, out: &mut String, depth: usize, leading: &Attributes) {
        let pad = INDENT_UNIT.repeat(depth);

        out.push_str(&pad);
        out.push('<');
        out.push_str(&self.name);
        let own = self
            .attributes
            .iter()
            .filter(|(key, _)| !leading.contains_key(*key));
        for (key, value) in leading.iter().chain(own) {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            out.push_str(&escape_attribute(value));
            out.push('"');
        }
        out.push('>');

        if let Some(value) = &self.value {
            value.write_into(out);
        }

        if !self.children.is_empty() {
            for child in &self.children {
                out.push('\n');
                child.write_into(out, depth + 1, &Attributes::new());
            }
            out.push('\n');
            out.push_str(&pad);
        }

        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
    }
}
