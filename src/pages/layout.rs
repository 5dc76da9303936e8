//! Root layout - document shell and page metadata.

use crate::config::{SiteConfig, SITE_NAME};
use crate::ui::{render_document, Element, Node};

/// Per-page metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metadata<'a> {
    /// Page title; `None` uses the bare site name
    pub title: Option<&'a str>,
    /// Meta description; `None` uses the site description
    pub description: Option<&'a str>,
}

impl<'a> Metadata<'a> {
    pub const fn new(title: &'a str, description: &'a str) -> Self {
        Self {
            title: Some(title),
            description: Some(description),
        }
    }

    /// Site-level defaults
    pub const fn site() -> Self {
        Self {
            title: None,
            description: None,
        }
    }
}

/// Document title from the `"{page} | {site}"` template
pub fn page_title(title: Option<&str>) -> String {
    match title {
        Some(title) => format!("{title} | {SITE_NAME}"),
        None => SITE_NAME.to_string(),
    }
}

fn meta(name_attr: &str, name: &str, content: &str) -> Element {
    Element::new("meta")
        .attr(name_attr, name)
        .attr("content", content)
}

/// `<head>` without social tags
fn base_head(title: &str, description: &str) -> Element {
    Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(meta("name", "viewport", "width=device-width, initial-scale=1"))
        .child(Element::new("title").text(title))
        .child(meta("name", "description", description))
}

/// `<head>` with Open Graph and Twitter tags derived from the site record
pub fn head(site: &SiteConfig, metadata: &Metadata<'_>, path: &str) -> Element {
    let title = page_title(metadata.title);
    let description = metadata.description.unwrap_or(site.description.as_str());

    base_head(&title, description)
        .child(
            Element::new("link")
                .attr("rel", "canonical")
                .attr("href", site.absolute_url(path)),
        )
        .child(meta("property", "og:type", "website"))
        .child(meta("property", "og:title", &title))
        .child(meta("property", "og:description", description))
        .child(meta("property", "og:url", &site.absolute_url(path)))
        .child(meta("property", "og:site_name", &site.name))
        .child(meta("property", "og:image", &site.og_image_url()))
        .child(meta("name", "twitter:card", "summary_large_image"))
}

/// Wrap a head and page content into an `<html>` element
pub fn document(head: Element, content: impl Into<Node>) -> Element {
    Element::new("html").attr("lang", "en").child(head).child(
        Element::new("body")
            .class("min-h-screen bg-background font-sans antialiased")
            .child(content),
    )
}

/// Full page document for a route
pub fn page(
    site: &SiteConfig,
    metadata: &Metadata<'_>,
    path: &str,
    content: impl Into<Node>,
) -> Element {
    document(head(site, metadata, path), content)
}

/// Page document without site-specific tags, for error responses
pub fn bare_page(metadata: &Metadata<'_>, content: impl Into<Node>) -> Element {
    let title = page_title(metadata.title);
    let description = metadata.description.unwrap_or(crate::config::SITE_DESCRIPTION);
    document(base_head(&title, description), content)
}

/// Serialize a page document
pub fn render(root: &Element) -> String {
    render_document(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Screen;

    #[test]
    fn test_title_template() {
        assert_eq!(page_title(None), "Travel & Tour SaaS");
        assert_eq!(page_title(Some("Dashboard")), "Dashboard | Travel & Tour SaaS");
    }

    #[test]
    fn test_head_metadata() {
        let site = SiteConfig::new("https://tours.example.com");
        let root = page(
            &site,
            &Metadata::new("Login", "Sign in"),
            "/login",
            Element::new("main"),
        );
        let screen = Screen::from_element(&root);

        assert_eq!(screen.title().as_deref(), Some("Login | Travel & Tour SaaS"));

        let head = root.child_elements().next().unwrap();
        let content = |property: &str| {
            head.child_elements()
                .find(|el| el.get_attr("property") == Some(property))
                .and_then(|el| el.get_attr("content"))
        };
        assert_eq!(content("og:url"), Some("https://tours.example.com/login"));
        assert_eq!(content("og:image"), Some("https://tours.example.com/og.png"));
        assert_eq!(content("og:description"), Some("Sign in"));
        assert_eq!(content("og:site_name"), Some("Travel & Tour SaaS"));
    }

    #[test]
    fn test_site_defaults() {
        let site = SiteConfig::new("http://localhost:3000");
        let root = page(&site, &Metadata::site(), "/", Element::new("main"));
        let html = render(&root);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Travel &amp; Tour SaaS</title>"));
        assert!(html.contains("A modern travel and tour management platform"));
    }
}
