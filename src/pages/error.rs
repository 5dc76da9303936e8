//! Error page rendered for failed requests.

use super::layout::{self, Metadata};
use super::{home, shared::brand_link};
use crate::ui::{Button, ButtonVariant, Element};

/// Content of an error page
pub fn content(status: u16, heading: &str, message: &str) -> Element {
    Element::new("div")
        .class("flex min-h-screen flex-col items-center justify-center gap-4 px-4 text-center")
        .child(brand_link(home::PATH))
        .child(
            Element::new("p")
                .class("text-sm font-medium text-muted-foreground")
                .text(status.to_string()),
        )
        .child(Element::new("h1").class("text-3xl font-bold").text(heading))
        .child(
            Element::new("p")
                .class("text-muted-foreground")
                .text(message),
        )
        .child(
            Button::new()
                .variant(ButtonVariant::Outline)
                .as_child(Element::new("a").attr("href", home::PATH).text("Back to home")),
        )
}

pub fn document(status: u16, heading: &str, message: &str) -> Element {
    layout::bare_page(
        &Metadata {
            title: Some(heading),
            description: Some(message),
        },
        content(status, heading, message),
    )
}

pub fn render(status: u16, heading: &str, message: &str) -> String {
    layout::render(&document(status, heading, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Screen;

    #[test]
    fn test_error_page() {
        let root = document(404, "Page not found", "Nothing lives at this address.");
        let screen = Screen::from_element(&root);
        assert_eq!(
            screen.title().as_deref(),
            Some("Page not found | Travel & Tour SaaS")
        );
        assert!(screen.get_by_role("heading", Some(&"Page not found".into())).is_ok());
        assert!(screen.get_by_text(&"404".into()).is_ok());
        let back = screen.get_by_role("link", Some(&"Back to home".into())).unwrap();
        assert_eq!(back.get_attr("href"), Some("/"));
    }
}
