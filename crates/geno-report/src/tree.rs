//! Navigable XML section tree.
//!
//! The report is small (tens of kilobytes), so it is read once into an owned
//! element tree and navigated from there. Lookups follow document order:
//! `descendant` returns the first match in a pre-order walk, which is how
//! report fields are located regardless of intermediate wrapper elements.
//! Namespace prefixes are dropped, so `rr:ResultsReport` is `ResultsReport`.
//!
//! Text is stored as written. [`XmlElement::require_text`] and
//! [`XmlElement::require_child_text`] trim it for structured fields;
//! [`XmlElement::require_child_verbatim`] keeps narrative text untouched.

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::error::ReportError;

/// One XML element with its attributes, concatenated text, and children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    /// Parse a whole document and return its root element.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Xml`] for syntax errors,
    /// [`ReportError::UnclosedElement`] if the input ends inside an element, and
    /// [`ReportError::EmptyDocument`] if there is no root element.
    pub fn parse(xml: &str) -> Result<Self, ReportError> {
        let mut reader = Reader::from_str(xml);

        let mut stack: Vec<Self> = Vec::new();
        let mut root: Option<Self> = None;

        loop {
            match reader.read_event()? {
                Event::Start(start) => stack.push(Self::from_start(&start)?),
                Event::Empty(start) => {
                    let element = Self::from_start(&start)?;
                    attach(&mut stack, &mut root, element);
                }
                Event::End(_) => {
                    if let Some(element) = stack.pop() {
                        attach(&mut stack, &mut root, element);
                    }
                }
                Event::Text(text) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&text.unescape()?);
                    }
                }
                Event::CData(data) => {
                    if let Some(current) = stack.last_mut() {
                        current.text.push_str(&String::from_utf8_lossy(&data));
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(open) = stack.pop() {
            return Err(ReportError::UnclosedElement(open.name));
        }
        root.ok_or(ReportError::EmptyDocument)
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, ReportError> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }

    /// First direct child named `name`.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children named `name`, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Self> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// First descendant (excluding `self`) named `name`, in document order.
    #[must_use]
    pub fn descendant(&self, name: &str) -> Option<&Self> {
        for child in &self.children {
            if child.name == name {
                return Some(child);
            }
            if let Some(found) = child.descendant(name) {
                return Some(found);
            }
        }
        None
    }

    /// Every descendant named `name`, in document order.
    #[must_use]
    pub fn descendants(&self, name: &str) -> Vec<&Self> {
        let mut found = Vec::new();
        self.collect_descendants(name, &mut found);
        found
    }

    fn collect_descendants<'a>(&'a self, name: &str, found: &mut Vec<&'a Self>) {
        for child in &self.children {
            if child.name == name {
                found.push(child);
            }
            child.collect_descendants(name, found);
        }
    }

    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// # Errors
    ///
    /// Returns [`ReportError::MissingField`] naming this element as the section.
    pub fn require_descendant(&self, name: &str) -> Result<&Self, ReportError> {
        self.descendant(name)
            .ok_or_else(|| ReportError::missing(&self.name, name))
    }

    /// Trimmed text of the first descendant named `name`. An empty element
    /// yields `""`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingField`] if no such descendant exists.
    pub fn require_text(&self, name: &str) -> Result<String, ReportError> {
        self.require_descendant(name).map(|el| el.text.trim().to_string())
    }

    /// # Errors
    ///
    /// Returns [`ReportError::MissingField`] if there is no direct child `name`.
    pub fn require_child(&self, name: &str) -> Result<&Self, ReportError> {
        self.child(name)
            .ok_or_else(|| ReportError::missing(&self.name, name))
    }

    /// Trimmed text of the direct child `name`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingField`] if there is no direct child `name`.
    pub fn require_child_text(&self, name: &str) -> Result<String, ReportError> {
        self.require_child(name).map(|el| el.text.trim().to_string())
    }

    /// Text of the direct child `name` exactly as written.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::MissingField`] if there is no direct child `name`.
    pub fn require_child_verbatim(&self, name: &str) -> Result<String, ReportError> {
        self.require_child(name).map(|el| el.text.clone())
    }

    /// # Errors
    ///
    /// Returns [`ReportError::MissingField`] if the attribute is absent.
    pub fn require_attr(&self, name: &str) -> Result<&str, ReportError> {
        self.attr(name)
            .ok_or_else(|| ReportError::missing(&self.name, name))
    }
}

fn attach(stack: &mut [XmlElement], root: &mut Option<XmlElement>, element: XmlElement) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => {
            if root.is_none() {
                *root = Some(element);
            } else {
                tracing::warn!(element = %element.name, "ignoring second top-level element");
            }
        }
    }
}
