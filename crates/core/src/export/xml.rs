//! XML export sink.

use std::fmt;

use tracing::warn;

use super::{ExportSink, ExportValue};

const DOCUMENT: usize = 0;

#[derive(Debug, Clone, Default)]
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<usize>,
}

/// Builds an XML document from exported values.
///
/// ```
/// use centavo_core::{Exportable, ExportSink, Money, XmlExporter};
///
/// let mut xml = XmlExporter::new();
/// Money::ca_dollar(1000).export(&mut xml);
/// assert_eq!(xml.render(None), "<money currency='CAD'>1000</money>");
/// ```
#[derive(Debug, Clone)]
pub struct XmlExporter {
    elements: Vec<Element>,
    parent: usize,
    last: usize,
}

impl XmlExporter {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: vec![Element::default()],
            parent: DOCUMENT,
            last: DOCUMENT,
        }
    }

    /// Adds a node named `key` and runs `block` inside it.
    ///
    /// Afterwards both the insertion point and the attribute target go
    /// back to the enclosing node.
    pub fn section<F: FnOnce(&mut Self)>(&mut self, key: &str, block: F) {
        let old = self.parent;
        let section = self.add_element(key);
        self.parent = section;
        self.last = section;
        block(self);
        self.parent = old;
        self.last = old;
    }

    fn add_element(&mut self, name: &str) -> usize {
        debug_assert!(is_xml_name(name), "invalid XML element name: {name:?}");
        let index = self.elements.len();
        self.elements.push(Element {
            name: name.to_string(),
            ..Element::default()
        });
        self.elements[self.parent].children.push(index);
        index
    }

    fn write_element(&self, index: usize, indent: Option<usize>, depth: usize, out: &mut String) {
        let element = &self.elements[index];
        let pad = indent.map_or(0, |width| width * depth);
        out.extend(std::iter::repeat_n(' ', pad));

        out.push('<');
        out.push_str(&element.name);
        for (key, value) in &element.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("='");
            out.push_str(&escape_attribute(value));
            out.push('\'');
        }

        if element.text.is_none() && element.children.is_empty() {
            out.push_str("/>");
            return;
        }
        out.push('>');

        if let Some(text) = &element.text {
            out.push_str(&escape_text(text));
        }

        if !element.children.is_empty() {
            for &child in &element.children {
                if indent.is_some() {
                    out.push('\n');
                }
                self.write_element(child, indent, depth + 1, out);
            }
            if indent.is_some() {
                out.push('\n');
                out.extend(std::iter::repeat_n(' ', pad));
            }
        }

        out.push_str("</");
        out.push_str(&element.name);
        out.push('>');
    }
}

impl Default for XmlExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportSink for XmlExporter {
    fn add_text(&mut self, key: &str, value: ExportValue<'_>) {
        match value {
            ExportValue::Nested(nested) => self.section(key, |xml| nested.export(xml)),
            ExportValue::Text(text) => {
                let element = self.add_element(key);
                if !text.is_empty() {
                    self.elements[element].text = Some(text.into_owned());
                }
                self.last = element;
            }
        }
    }

    fn add_attribute(&mut self, key: &str, value: &str) {
        if self.last == DOCUMENT {
            warn!(key, "Attribute dropped: no element to attach it to");
            return;
        }
        let attributes = &mut self.elements[self.last].attributes;
        match attributes.iter_mut().find(|(name, _)| name == key) {
            Some((_, existing)) => *existing = value.to_string(),
            None => attributes.push((key.to_string(), value.to_string())),
        }
    }

    fn enter_section(&mut self, key: &str, block: &mut dyn FnMut(&mut dyn ExportSink)) {
        self.section(key, |xml| {
            let sink: &mut dyn ExportSink = xml;
            block(sink);
        });
    }

    fn render(&self, indent: Option<usize>) -> String {
        let mut out = String::new();
        for (position, &child) in self.elements[DOCUMENT].children.iter().enumerate() {
            if position > 0 && indent.is_some() {
                out.push('\n');
            }
            self.write_element(child, indent, 0, &mut out);
        }
        out
    }
}

impl fmt::Display for XmlExporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(None))
    }
}

/// Names are written unescaped, so they must already be valid XML names.
fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_alphabetic() || first == '_')
        && chars.all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | ':'))
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn escape_attribute(value: &str) -> String {
    escape_text(value)
        .replace('\'', "&apos;")
        .replace('"', "&quot;")
}
