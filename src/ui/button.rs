//! Button primitive.
//!
//! Renders its own `<button>` by default. With [`Button::as_child`] it
//! renders the supplied element instead, merging the button classes and
//! attributes onto it, so a link can look like a button while keeping the
//! `link` role.

use super::class::cn;
use super::node::{Element, Node};

const BASE_CLASSES: &str = "inline-flex items-center justify-center whitespace-nowrap rounded-md \
    text-sm font-medium ring-offset-background transition-colors focus-visible:outline-none \
    focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 \
    disabled:pointer-events-none disabled:opacity-50";

/// Visual variants
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonVariant::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            ButtonVariant::Destructive => {
                "bg-destructive text-destructive-foreground hover:bg-destructive/90"
            }
            ButtonVariant::Outline => {
                "border border-input bg-background hover:bg-accent hover:text-accent-foreground"
            }
            ButtonVariant::Secondary => {
                "bg-secondary text-secondary-foreground hover:bg-secondary/80"
            }
            ButtonVariant::Ghost => "hover:bg-accent hover:text-accent-foreground",
            ButtonVariant::Link => "text-primary underline-offset-4 hover:underline",
        }
    }
}

/// Size presets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonSize {
    pub fn classes(self) -> &'static str {
        match self {
            ButtonSize::Default => "h-10 px-4 py-2",
            ButtonSize::Sm => "h-9 rounded-md px-3",
            ButtonSize::Lg => "h-11 rounded-md px-8",
            ButtonSize::Icon => "h-10 w-10",
        }
    }
}

/// Full class list for a variant and size
pub fn button_variants(variant: ButtonVariant, size: ButtonSize) -> String {
    cn([BASE_CLASSES, variant.classes(), size.classes()])
}

#[derive(Debug, Clone)]
enum Content {
    Own(Vec<Node>),
    Delegate(Element),
}

/// Button builder
#[derive(Debug, Clone)]
pub struct Button {
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    class: String,
    attrs: Vec<(String, String)>,
    content: Content,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            class: String::new(),
            attrs: Vec::new(),
            content: Content::Own(Vec::new()),
        }
    }
}

impl Button {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Extra classes, appended after the variant classes
    pub fn class(mut self, classes: &str) -> Self {
        self.class = cn([self.class.as_str(), classes]);
        self
    }

    /// Extra attribute forwarded to the rendered element.
    ///
    /// `class` is merged like [`Button::class`] rather than replacing the
    /// variant classes.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if name == "class" {
            return self.class(&value);
        }
        self.attrs.push((name, value));
        self
    }

    /// Add a child to whichever element ends up rendered
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        match &mut self.content {
            Content::Own(children) => children.push(node.into()),
            Content::Delegate(element) => element.push_child(node),
        }
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Render `element` in place of the button's own `<button>`.
    ///
    /// Replaces any children added so far.
    pub fn as_child(mut self, element: Element) -> Self {
        self.content = Content::Delegate(element);
        self
    }

    pub fn render(self) -> Element {
        let classes = cn([
            button_variants(self.variant, self.size).as_str(),
            self.class.as_str(),
        ]);

        match self.content {
            Content::Own(children) => {
                let mut button = Element::new("button").attr("type", "button").class(&classes);
                for (name, value) in self.attrs {
                    button.set_attr(name, value);
                }
                if self.disabled {
                    button.set_attr("disabled", "");
                }
                button.children(children)
            }
            Content::Delegate(mut element) => {
                let own_class = element.remove_attr("class").unwrap_or_default();
                element.set_attr("class", cn([classes.as_str(), own_class.as_str()]));
                for (name, value) in self.attrs {
                    if !element.has_attr(&name) {
                        element.set_attr(name, value);
                    }
                }
                if self.disabled {
                    if element.tag() == "button" {
                        element.set_attr("disabled", "");
                    } else {
                        element.set_attr("aria-disabled", "true");
                        element.set_attr("tabindex", "-1");
                        element = element.class(DISABLED_DELEGATE_CLASSES);
                    }
                }
                element
            }
        }
    }
}

/// Non-button delegates have no `disabled` state for the base classes to key on
const DISABLED_DELEGATE_CLASSES: &str = "pointer-events-none opacity-50";

impl From<Button> for Node {
    fn from(button: Button) -> Self {
        Node::Element(button.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_renders_button_element() {
        let el = Button::new().text("Click me").render();
        assert_eq!(el.tag(), "button");
        assert_eq!(el.get_attr("type"), Some("button"));
        assert!(!el.has_attr("disabled"));
        assert!(el.get_attr("class").unwrap_or("").contains("bg-primary"));
    }

    #[test]
    fn test_variant_and_size_classes() {
        let el = Button::new()
            .variant(ButtonVariant::Ghost)
            .size(ButtonSize::Sm)
            .class("w-full")
            .render();
        let class = el.get_attr("class").unwrap_or("");
        assert!(class.contains("hover:bg-accent"));
        assert!(class.contains("h-9"));
        assert!(class.ends_with("w-full"));
        assert!(!class.contains("bg-primary"));
    }

    #[test]
    fn test_attrs_override_type() {
        let el = Button::new().attr("type", "submit").text("Go").render();
        assert_eq!(el.get_attr("type"), Some("submit"));
    }

    #[test]
    fn test_as_child_merges_classes_child_last() {
        let anchor = Element::new("a").attr("href", "/test").class("underline");
        let el = Button::new().as_child(anchor).text("Link Button").render();
        assert_eq!(el.tag(), "a");
        assert_eq!(el.get_attr("href"), Some("/test"));
        let class = el.get_attr("class").unwrap_or("");
        assert!(class.starts_with("inline-flex"));
        assert!(class.ends_with("underline"));
        assert_eq!(el.text_content(), "Link Button");
    }

    #[test]
    fn test_as_child_keeps_child_attributes() {
        let anchor = Element::new("a").attr("href", "/a").attr("data-state", "child");
        let el = Button::new()
            .attr("data-state", "button")
            .attr("data-size", "sm")
            .as_child(anchor)
            .render();
        assert_eq!(el.get_attr("data-state"), Some("child"));
        assert_eq!(el.get_attr("data-size"), Some("sm"));
    }

    #[test]
    fn test_disabled_delegate_is_aria_disabled() {
        let el = Button::new()
            .disabled(true)
            .as_child(Element::new("a").attr("href", "/x"))
            .render();
        assert_eq!(el.get_attr("aria-disabled"), Some("true"));
        assert_eq!(el.get_attr("tabindex"), Some("-1"));
        assert!(!el.has_attr("disabled"));
        let class = el.get_attr("class").unwrap_or("");
        assert!(class.split_whitespace().any(|c| c == "pointer-events-none"));
    }

    #[test]
    fn test_enabled_delegate_keeps_pointer_events() {
        let el = Button::new()
            .as_child(Element::new("a").attr("href", "/x"))
            .render();
        let class = el.get_attr("class").unwrap_or("");
        assert!(!class.split_whitespace().any(|c| c == "pointer-events-none"));
    }

    #[test]
    fn test_class_attr_merges_with_variant_classes() {
        let el = Button::new().attr("class", "mine").text("x").render();
        let class = el.get_attr("class").unwrap_or("");
        assert!(class.starts_with("inline-flex"));
        assert!(class.contains("bg-primary"));
        assert!(class.ends_with("mine"));
    }

    #[test]
    fn test_class_attr_merges_on_delegate() {
        let el = Button::new()
            .attr("class", "mine")
            .as_child(Element::new("a").attr("href", "/x").class("underline"))
            .render();
        let class = el.get_attr("class").unwrap_or("");
        assert!(class.starts_with("inline-flex"));
        assert!(class.contains("mine"));
        assert!(class.ends_with("underline"));
    }

    #[test]
    fn test_as_child_replaces_earlier_children() {
        let el = Button::new()
            .text("dropped")
            .as_child(Element::new("a").attr("href", "/x").text("kept"))
            .render();
        assert_eq!(el.text_content(), "kept");
    }
}
