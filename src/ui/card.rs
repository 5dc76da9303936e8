//! Card primitives.
//!
//! Each constructor returns a pre-classed element; add more classes with
//! [`Element::class`] and content with [`Element::child`].

use super::node::Element;

pub fn card() -> Element {
    Element::new("div").class("rounded-lg border bg-card text-card-foreground shadow-sm")
}

pub fn card_header() -> Element {
    Element::new("div").class("flex flex-col space-y-1.5 p-6")
}

pub fn card_title() -> Element {
    Element::new("h3").class("text-2xl font-semibold leading-none tracking-tight")
}

pub fn card_description() -> Element {
    Element::new("p").class("text-sm text-muted-foreground")
}

pub fn card_content() -> Element {
    Element::new("div").class("p-6 pt-0")
}

pub fn card_footer() -> Element {
    Element::new("div").class("flex items-center p-6 pt-0")
}
