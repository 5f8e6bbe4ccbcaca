//! Structured export of money values.
//!
//! Values opt in by implementing [`Exportable`]; sinks implement
//! [`ExportSink`]. An [`XmlExporter`] is provided.

pub mod xml;

use std::borrow::Cow;

use crate::money::Money;

pub use xml::XmlExporter;

/// A value that can write itself into an export sink.
pub trait Exportable {
    /// Writes `self` into `sink`.
    fn export(&self, sink: &mut dyn ExportSink);
}

/// Value handed to [`ExportSink::add_text`].
pub enum ExportValue<'a> {
    /// Plain text content.
    Text(Cow<'a, str>),
    /// A value exporting itself inside a section.
    Nested(&'a dyn Exportable),
}

impl<'a> ExportValue<'a> {
    /// Wraps an exportable value.
    pub fn nested(value: &'a dyn Exportable) -> Self {
        Self::Nested(value)
    }
}

impl<'a> From<&'a str> for ExportValue<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(Cow::Borrowed(text))
    }
}

impl From<String> for ExportValue<'_> {
    fn from(text: String) -> Self {
        Self::Text(Cow::Owned(text))
    }
}

impl From<i64> for ExportValue<'_> {
    fn from(value: i64) -> Self {
        Self::Text(Cow::Owned(value.to_string()))
    }
}

/// A structured document builder.
pub trait ExportSink {
    /// Adds a node named `key`.
    ///
    /// Text becomes the node content (no content when empty); nested
    /// values export themselves inside a section named `key`. Keys are
    /// written as element names and must be valid XML names.
    fn add_text(&mut self, key: &str, value: ExportValue<'_>);

    /// Sets an attribute on the node added most recently.
    fn add_attribute(&mut self, key: &str, value: &str);

    /// Adds a node named `key` and runs `block` with it as the insertion
    /// point, restoring the previous one afterwards.
    fn enter_section(&mut self, key: &str, block: &mut dyn FnMut(&mut dyn ExportSink));

    /// Serializes the document. `None` renders the compact form.
    fn render(&self, indent: Option<usize>) -> String;
}

impl Exportable for Money {
    /// Emits `<money currency='CAD'>1000</money>`.
    fn export(&self, sink: &mut dyn ExportSink) {
        sink.add_text("money", self.cents().into());
        sink.add_attribute("currency", self.currency().as_str());
    }
}
