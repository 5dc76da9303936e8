//! Element tree and HTML serialization.
//!
//! Pages are built as plain [`Element`] trees and serialized once per
//! request. Text and attribute values are escaped on output, so builders can
//! take arbitrary strings.

use std::fmt;

use super::class::cn;

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose text content is written without escaping
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Check whether a tag is a void element
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

/// Check whether a tag holds raw text
pub fn is_raw_text(tag: &str) -> bool {
    RAW_TEXT_ELEMENTS.contains(&tag)
}

/// A node in the element tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    /// Create a text node
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Borrow the element, if this is one
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    fn write_html(&self, out: &mut String, raw: bool) {
        match self {
            Node::Text(text) if raw => out.push_str(text),
            Node::Text(text) => escape_text(text, out),
            Node::Element(element) => element.write_html(out),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_html(&mut out, false);
        f.write_str(&out)
    }
}

/// An HTML element with ordered attributes and children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an empty element (tag names are lowercased)
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Set an attribute, replacing any previous value
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set a boolean attribute such as `disabled` or `required`
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.attr(name, "")
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Merge classes into the existing `class` attribute
    pub fn class(mut self, classes: &str) -> Self {
        let merged = cn([self.get_attr("class").unwrap_or(""), classes]);
        if !merged.is_empty() {
            self.set_attr("class", merged);
        }
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    /// Append a text child
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn push_child(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into().to_ascii_lowercase();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_some()
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let index = self.attrs.iter().position(|(n, _)| n.eq_ignore_ascii_case(name))?;
        Some(self.attrs.remove(index).1)
    }

    /// Attributes in insertion order
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Concatenated text of all descendants
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }

    /// Serialize this element and its subtree
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if !value.is_empty() {
                out.push_str("=\"");
                escape_attr(value, out);
                out.push('"');
            }
        }
        out.push('>');

        if is_void(&self.tag) {
            return;
        }

        let raw = is_raw_text(&self.tag);
        for child in &self.children {
            child.write_html(out, raw);
        }

        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}

/// Serialize a root `<html>` element as a complete document
pub fn render_document(root: &Element) -> String {
    let mut out = String::from("<!DOCTYPE html>\n");
    root.write_html(&mut out);
    out
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_nested_elements() {
        let el = Element::new("div")
            .class("flex")
            .child(Element::new("span").text("Hi"));
        assert_eq!(el.to_html(), r#"<div class="flex"><span>Hi</span></div>"#);
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let el = Element::new("a")
            .attr("title", r#"Say "hi" & <wave>"#)
            .text("Travel & Tour <b>");
        assert_eq!(
            el.to_html(),
            r#"<a title="Say &quot;hi&quot; &amp; &lt;wave&gt;">Travel &amp; Tour &lt;b&gt;</a>"#
        );
    }

    #[test]
    fn test_void_and_boolean_attributes() {
        let el = Element::new("input").attr("type", "email").flag("required");
        assert_eq!(el.to_html(), r#"<input type="email" required>"#);
    }

    #[test]
    fn test_class_merges() {
        let el = Element::new("div").class("p-6").class("pt-0 p-6");
        assert_eq!(el.get_attr("class"), Some("p-6 pt-0"));
    }

    #[test]
    fn test_set_attr_replaces_in_place() {
        let mut el = Element::new("button").attr("type", "button").attr("class", "x");
        el.set_attr("type", "submit");
        let attrs: Vec<_> = el.attrs().collect();
        assert_eq!(attrs, vec![("type", "submit"), ("class", "x")]);
        assert_eq!(el.remove_attr("class"), Some("x".to_string()));
        assert!(!el.has_attr("class"));
    }

    #[test]
    fn test_text_content_and_document() {
        let root = Element::new("html").child(
            Element::new("body")
                .child(Element::new("p").text("Hello, "))
                .child(Element::new("p").text("world")),
        );
        assert_eq!(root.text_content(), "Hello, world");
        assert!(render_document(&root).starts_with("<!DOCTYPE html>\n<html>"));
    }

    #[test]
    fn test_raw_text_is_not_escaped() {
        let el = Element::new("style").text("a > b { color: red; }");
        assert_eq!(el.to_html(), "<style>a > b { color: red; }</style>");
    }
}
