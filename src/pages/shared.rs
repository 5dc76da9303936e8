//! Pieces shared by several pages.

use crate::config::BRAND_LABEL;
use crate::ui::card::{card, card_description, card_header, card_title};
use crate::ui::Element;

/// Brand link pointing at `href`
pub(crate) fn brand_link(href: &str) -> Element {
    Element::new("a")
        .attr("href", href)
        .class("mr-6 flex items-center space-x-2")
        .child(Element::new("span").class("font-bold").text(BRAND_LABEL))
}

/// Centered card layout used by the login and signup pages
pub(crate) fn auth_shell(title: &str, description: &str, form: Element) -> Element {
    Element::new("div")
        .class("flex min-h-screen flex-col items-center justify-center gap-6 px-4")
        .child(brand_link("/"))
        .child(
            card()
                .class("w-full max-w-sm")
                .child(
                    card_header()
                        .child(card_title().text(title))
                        .child(card_description().text(description)),
                )
                .child(form),
        )
}

/// Footer line with a link, e.g. "Already have an account? Login"
pub(crate) fn switch_prompt(prompt: &str, link_text: &str, href: &str) -> Element {
    Element::new("p")
        .class("text-center text-sm text-muted-foreground")
        .text(format!("{prompt} "))
        .child(
            Element::new("a")
                .attr("href", href)
                .class("underline underline-offset-4")
                .text(link_text),
        )
}
