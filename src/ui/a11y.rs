//! Accessibility queries over a rendered tree.
//!
//! [`Screen`] indexes an element tree and answers the questions assistive
//! technology would ask: which role an element has, what it is called, what
//! labels it, whether it is disabled or hidden. Queries skip `<head>` and
//! hidden subtrees.

use std::collections::HashMap;

use regex::Regex;
use thiserror::Error;

use super::node::{Element, Node};

/// Tags that can carry a native `disabled` state
const DISABLEABLE: &[&str] = &[
    "button", "fieldset", "input", "optgroup", "option", "select", "textarea",
];

/// Tags a `<label>` can point at
const LABELABLE: &[&str] = &["button", "input", "meter", "output", "progress", "select", "textarea"];

/// Roles whose accessible name comes from their content
const NAME_FROM_CONTENT: &[&str] = &[
    "button", "cell", "checkbox", "columnheader", "heading", "link", "listitem", "menuitem",
    "option", "radio", "row", "rowheader", "switch", "tab", "tooltip",
];

/// Text matcher used by every query
#[derive(Debug, Clone)]
pub enum TextMatch {
    /// Whole normalized text equals the string
    Exact(String),
    /// Normalized text contains the string, ignoring case
    Contains(String),
    Pattern(Regex),
}

impl TextMatch {
    pub fn matches(&self, text: &str) -> bool {
        let text = normalize(text);
        match self {
            TextMatch::Exact(expected) => text == normalize(expected),
            TextMatch::Contains(needle) => text.to_lowercase().contains(&needle.to_lowercase()),
            TextMatch::Pattern(re) => re.is_match(&text),
        }
    }
}

impl std::fmt::Display for TextMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TextMatch::Exact(s) => write!(f, "\"{s}\""),
            TextMatch::Contains(s) => write!(f, "/{s}/i"),
            TextMatch::Pattern(re) => write!(f, "/{re}/"),
        }
    }
}

impl From<&str> for TextMatch {
    fn from(text: &str) -> Self {
        TextMatch::Exact(text.to_string())
    }
}

impl From<String> for TextMatch {
    fn from(text: String) -> Self {
        TextMatch::Exact(text)
    }
}

impl From<Regex> for TextMatch {
    fn from(re: Regex) -> Self {
        TextMatch::Pattern(re)
    }
}

/// Case-insensitive substring matcher
pub fn ignore_case(needle: &str) -> TextMatch {
    TextMatch::Contains(needle.to_string())
}

/// Query failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("unable to find an element {0}")]
    NotFound(String),

    #[error("found {count} elements {query}, expected one")]
    Multiple { query: String, count: usize },
}

#[derive(Debug)]
struct Entry<'a> {
    element: &'a Element,
    parent: Option<usize>,
    /// Hidden by itself or an ancestor
    hidden: bool,
    in_head: bool,
}

/// Indexed view of a rendered tree
#[derive(Debug)]
pub struct Screen<'a> {
    entries: Vec<Entry<'a>>,
    ids: HashMap<&'a str, usize>,
}

impl<'a> Screen<'a> {
    /// Index a list of root nodes (for example a parsed document)
    pub fn new(nodes: &'a [Node]) -> Self {
        let mut screen = Self {
            entries: Vec::new(),
            ids: HashMap::new(),
        };
        for element in nodes.iter().filter_map(Node::as_element) {
            screen.collect(element, None, false, false);
        }
        screen
    }

    /// Index a single root element
    pub fn from_element(root: &'a Element) -> Self {
        let mut screen = Self {
            entries: Vec::new(),
            ids: HashMap::new(),
        };
        screen.collect(root, None, false, false);
        screen
    }

    /// Scope queries to the subtree of `element`
    pub fn within(&self, element: &'a Element) -> Screen<'a> {
        Screen::from_element(element)
    }

    fn collect(&mut self, element: &'a Element, parent: Option<usize>, hidden: bool, in_head: bool) {
        let hidden = hidden || hides_itself(element);
        let in_head = in_head || element.tag() == "head";
        let index = self.entries.len();
        self.entries.push(Entry {
            element,
            parent,
            hidden,
            in_head,
        });
        if let Some(id) = element.get_attr("id") {
            self.ids.entry(id).or_insert(index);
        }
        for child in element.child_elements() {
            self.collect(child, Some(index), hidden, in_head);
        }
    }

    fn index_of(&self, element: &Element) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| std::ptr::eq(entry.element, element))
    }

    fn ancestors(&self, index: usize) -> impl Iterator<Item = &Entry<'a>> + '_ {
        let mut next = self.entries[index].parent;
        std::iter::from_fn(move || {
            let entry = &self.entries[next?];
            next = entry.parent;
            Some(entry)
        })
    }

    fn queryable(&self) -> impl Iterator<Item = &Entry<'a>> + '_ {
        self.entries
            .iter()
            .filter(|entry| !entry.hidden && !entry.in_head)
    }

    /// Text of the document `<title>`, if any
    pub fn title(&self) -> Option<String> {
        self.entries
            .iter()
            .find(|entry| entry.element.tag() == "title")
            .map(|entry| normalize(&entry.element.text_content()))
    }

    /// Accessible name of an element in this screen
    pub fn accessible_name(&self, element: &Element) -> String {
        if let Some(label) = element.get_attr("aria-label").map(normalize) {
            if !label.is_empty() {
                return label;
            }
        }

        if let Some(ids) = element.get_attr("aria-labelledby") {
            let text: Vec<String> = ids
                .split_whitespace()
                .filter_map(|id| self.ids.get(id))
                .map(|&i| normalize(&self.entries[i].element.text_content()))
                .collect();
            if !text.is_empty() {
                return text.join(" ");
            }
        }

        if LABELABLE.contains(&element.tag()) {
            let labels = self.label_texts(element);
            if !labels.is_empty() {
                return labels.join(" ");
            }
            if element.tag() == "input" && role_of(element) == Some("button") {
                if let Some(value) = element.get_attr("value") {
                    return normalize(value);
                }
            }
        }

        if role_of(element).is_some_and(|role| NAME_FROM_CONTENT.contains(&role)) {
            let text = normalize(&element.text_content());
            if !text.is_empty() {
                return text;
            }
        }

        element.get_attr("title").map(normalize).unwrap_or_default()
    }

    fn label_texts(&self, element: &Element) -> Vec<String> {
        let mut texts = Vec::new();
        if let Some(id) = element.get_attr("id") {
            texts.extend(
                self.entries
                    .iter()
                    .filter(|e| e.element.tag() == "label" && e.element.get_attr("for") == Some(id))
                    .map(|e| normalize(&e.element.text_content())),
            );
        }
        if let Some(index) = self.index_of(element) {
            texts.extend(
                self.ancestors(index)
                    .filter(|e| e.element.tag() == "label" && !e.element.has_attr("for"))
                    .map(|e| normalize(&e.element.text_content())),
            );
        }
        texts.retain(|t| !t.is_empty());
        texts
    }

    /// All elements with `role`, optionally filtered by accessible name
    pub fn all_by_role(&self, role: &str, name: Option<&TextMatch>) -> Vec<&'a Element> {
        self.queryable()
            .filter(|entry| role_of(entry.element) == Some(role))
            .filter(|entry| name.map_or(true, |m| m.matches(&self.accessible_name(entry.element))))
            .map(|entry| entry.element)
            .collect()
    }

    pub fn get_by_role(&self, role: &str, name: Option<&TextMatch>) -> Result<&'a Element, QueryError> {
        let query = match name {
            Some(m) => format!("with role \"{role}\" and name {m}"),
            None => format!("with role \"{role}\""),
        };
        single(query, self.all_by_role(role, name))
    }

    /// Form controls whose label (or `aria-label`) matches
    pub fn all_by_label(&self, matcher: &TextMatch) -> Vec<&'a Element> {
        let mut found: Vec<&'a Element> = Vec::new();
        let mut push = |element: &'a Element| {
            if !found.iter().any(|f| std::ptr::eq(*f, element)) {
                found.push(element);
            }
        };

        for (index, entry) in self.entries.iter().enumerate() {
            if entry.in_head {
                continue;
            }
            let element = entry.element;
            if element.tag() == "label" {
                if !matcher.matches(&element.text_content()) {
                    continue;
                }
                let target = match element.get_attr("for") {
                    Some(id) => self.ids.get(id).copied(),
                    None => self.first_labelable_descendant(index),
                };
                if let Some(target) = target {
                    push(self.entries[target].element);
                }
            } else if element
                .get_attr("aria-label")
                .is_some_and(|label| matcher.matches(label))
            {
                push(element);
            }
        }

        found
    }

    pub fn get_by_label(&self, matcher: &TextMatch) -> Result<&'a Element, QueryError> {
        single(format!("with label {matcher}"), self.all_by_label(matcher))
    }

    fn first_labelable_descendant(&self, index: usize) -> Option<usize> {
        (index + 1..self.entries.len())
            .take_while(|&i| self.is_descendant(i, index))
            .find(|&i| LABELABLE.contains(&self.entries[i].element.tag()))
    }

    fn is_descendant(&self, index: usize, ancestor: usize) -> bool {
        let mut next = self.entries[index].parent;
        while let Some(parent) = next {
            if parent == ancestor {
                return true;
            }
            next = self.entries[parent].parent;
        }
        false
    }

    /// Elements whose own text nodes match, in document order
    pub fn all_by_text(&self, matcher: &TextMatch) -> Vec<&'a Element> {
        self.queryable()
            .filter(|entry| !matches!(entry.element.tag(), "script" | "style"))
            .filter(|entry| {
                let own = own_text(entry.element);
                !own.is_empty() && matcher.matches(&own)
            })
            .map(|entry| entry.element)
            .collect()
    }

    pub fn get_by_text(&self, matcher: &TextMatch) -> Result<&'a Element, QueryError> {
        single(format!("with text {matcher}"), self.all_by_text(matcher))
    }

    /// Disabled natively, through a disabled fieldset, or via `aria-disabled`
    pub fn is_disabled(&self, element: &Element) -> bool {
        if aria_disabled(element) {
            return true;
        }
        let native = DISABLEABLE.contains(&element.tag());
        if native && element.has_attr("disabled") {
            return true;
        }
        let Some(index) = self.index_of(element) else {
            return false;
        };
        self.ancestors(index).any(|entry| {
            aria_disabled(entry.element)
                || (native && entry.element.tag() == "fieldset" && entry.element.has_attr("disabled"))
        })
    }

    /// Not hidden by itself or an ancestor and not part of `<head>`
    pub fn is_visible(&self, element: &Element) -> bool {
        self.index_of(element)
            .map(|index| {
                let entry = &self.entries[index];
                !entry.hidden && !entry.in_head
            })
            .unwrap_or(false)
    }
}

/// Role of an element: explicit `role` attribute first, then the implicit one
pub fn role_of(element: &Element) -> Option<&str> {
    if let Some(role) = element.get_attr("role") {
        return role.split_whitespace().next();
    }

    let role = match element.tag() {
        "button" => "button",
        "a" | "area" if element.has_attr("href") => "link",
        "nav" => "navigation",
        "main" => "main",
        "header" => "banner",
        "footer" => "contentinfo",
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => "heading",
        "form" => "form",
        "ul" | "ol" => "list",
        "li" => "listitem",
        "p" => "paragraph",
        "textarea" => "textbox",
        "select" => "combobox",
        "img" if element.get_attr("alt").is_some_and(|alt| !alt.is_empty()) => "img",
        "input" => match element.get_attr("type").unwrap_or("text").to_ascii_lowercase().as_str() {
            "button" | "submit" | "reset" | "image" => "button",
            "checkbox" => "checkbox",
            "radio" => "radio",
            "search" => "searchbox",
            "number" => "spinbutton",
            "range" => "slider",
            "text" | "email" | "tel" | "url" => "textbox",
            _ => return None,
        },
        _ => return None,
    };
    Some(role)
}

fn hides_itself(element: &Element) -> bool {
    if element.has_attr("hidden") {
        return true;
    }
    if element.tag() == "input" && element.get_attr("type") == Some("hidden") {
        return true;
    }
    element.get_attr("style").is_some_and(|style| {
        style
            .split(';')
            .filter_map(|decl| decl.split_once(':'))
            .any(|(prop, value)| {
                let prop = prop.trim();
                let value = value.trim();
                (prop == "display" && value == "none") || (prop == "visibility" && value == "hidden")
            })
    })
}

fn aria_disabled(element: &Element) -> bool {
    element.get_attr("aria-disabled") == Some("true")
}

/// Joined text of an element's direct text children
fn own_text(element: &Element) -> String {
    let text: String = element
        .child_nodes()
        .iter()
        .filter_map(|node| match node {
            Node::Text(text) => Some(text.as_str()),
            Node::Element(_) => None,
        })
        .collect();
    normalize(&text)
}

/// Trim and collapse whitespace runs to single spaces
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn single<'a>(query: String, mut found: Vec<&'a Element>) -> Result<&'a Element, QueryError> {
    match found.len() {
        0 => Err(QueryError::NotFound(query)),
        1 => Ok(found.remove(0)),
        count => Err(QueryError::Multiple { query, count }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> Element {
        Element::new("form")
            .child(Element::new("label").attr("for", "email").text("Email"))
            .child(Element::new("input").attr("type", "email").id("email"))
            .child(
                Element::new("label")
                    .text("Password ")
                    .child(Element::new("input").attr("type", "password")),
            )
            .child(Element::new("input").attr("type", "search").attr("aria-label", "Search tours"))
            .child(
                Element::new("fieldset")
                    .flag("disabled")
                    .child(Element::new("button").text("Inside")),
            )
            .child(Element::new("p").attr("hidden", "").text("Secret"))
    }

    #[test]
    fn test_implicit_roles() {
        assert_eq!(role_of(&Element::new("a").attr("href", "/")), Some("link"));
        assert_eq!(role_of(&Element::new("a")), None);
        assert_eq!(role_of(&Element::new("nav")), Some("navigation"));
        assert_eq!(role_of(&Element::new("input")), Some("textbox"));
        assert_eq!(role_of(&Element::new("input").attr("type", "password")), None);
        assert_eq!(role_of(&Element::new("input").attr("type", "submit")), Some("button"));
        assert_eq!(role_of(&Element::new("div").attr("role", "alert status")), Some("alert"));
    }

    #[test]
    fn test_label_queries() {
        let root = form();
        let screen = Screen::from_element(&root);

        let email = screen.get_by_label(&ignore_case("email")).unwrap();
        assert_eq!(email.get_attr("id"), Some("email"));

        let password = screen.get_by_label(&ignore_case("password")).unwrap();
        assert_eq!(password.get_attr("type"), Some("password"));

        let search = screen.get_by_label(&"Search tours".into()).unwrap();
        assert_eq!(screen.accessible_name(search), "Search tours");
        assert_eq!(screen.accessible_name(email), "Email");
    }

    #[test]
    fn test_disabled_through_fieldset() {
        let root = form();
        let screen = Screen::from_element(&root);
        let button = screen.get_by_role("button", Some(&"Inside".into())).unwrap();
        assert!(screen.is_disabled(button));
    }

    #[test]
    fn test_hidden_elements_are_skipped() {
        let root = form();
        let screen = Screen::from_element(&root);
        assert_eq!(
            screen.get_by_text(&"Secret".into()),
            Err(QueryError::NotFound("with text \"Secret\"".to_string()))
        );
    }

    #[test]
    fn test_multiple_matches_error() {
        let root = Element::new("div")
            .child(Element::new("button").text("Save"))
            .child(Element::new("button").text("Save draft"));
        let screen = Screen::from_element(&root);
        let err = screen.get_by_role("button", Some(&ignore_case("save"))).unwrap_err();
        assert!(matches!(err, QueryError::Multiple { count: 2, .. }));
        assert!(screen.get_by_role("button", Some(&"Save".into())).is_ok());
    }

    #[test]
    fn test_regex_matcher() {
        let matcher = TextMatch::from(Regex::new("^Travel & Tour").unwrap());
        assert!(matcher.matches("  Travel &   Tour SaaS "));
        assert!(!matcher.matches("The Travel & Tour"));
    }

    #[test]
    fn test_text_uses_own_text_nodes() {
        let root = Element::new("p")
            .text("Don't have an account? ")
            .child(Element::new("a").attr("href", "/signup").text("Sign up"));
        let screen = Screen::from_element(&root);
        assert!(screen.get_by_text(&"Don't have an account?".into()).is_ok());
        assert_eq!(screen.get_by_text(&"Sign up".into()).unwrap().tag(), "a");
    }
}
