//! Landing page.

use super::layout::{self, Metadata};
use super::shared::brand_link;
use super::{login, signup};
use crate::config::SiteConfig;
use crate::ui::card::{card, card_description, card_header, card_title};
use crate::ui::{Button, ButtonSize, ButtonVariant, Element};

pub const PATH: &str = "/";

pub const METADATA: Metadata<'static> = Metadata::site();

/// Feature highlights: (title, description)
const FEATURES: [(&str, &str); 3] = [
    (
        "Bookings",
        "Track reservations for every departure in one place.",
    ),
    (
        "Tours",
        "Publish itineraries, schedules and pricing for your catalogue.",
    ),
    (
        "Customers",
        "Keep traveller details and history close at hand.",
    ),
];

fn link(href: &str, text: &str) -> Element {
    Element::new("a").attr("href", href).text(text)
}

fn site_header() -> Element {
    Element::new("header")
        .class("sticky top-0 z-50 w-full border-b bg-background/95 backdrop-blur")
        .child(
            Element::new("div")
                .class("container flex h-14 items-center")
                .child(brand_link(PATH))
                .child(
                    Element::new("nav")
                        .class("flex flex-1 items-center justify-end space-x-2")
                        .child(
                            Button::new()
                                .variant(ButtonVariant::Ghost)
                                .size(ButtonSize::Sm)
                                .as_child(link(login::PATH, "Login")),
                        )
                        .child(
                            Button::new()
                                .size(ButtonSize::Sm)
                                .as_child(link(signup::PATH, "Get started")),
                        ),
                ),
        )
}

fn hero(site: &SiteConfig) -> Element {
    Element::new("section")
        .class("container flex flex-col items-center gap-6 py-24 text-center")
        .child(
            Element::new("h1")
                .class("text-4xl font-bold tracking-tight sm:text-5xl")
                .text("Plan, manage and sell your tours"),
        )
        .child(
            Element::new("p")
                .class("max-w-2xl text-lg text-muted-foreground")
                .text(site.description.as_str()),
        )
        .child(
            Element::new("div")
                .class("flex gap-4")
                .child(
                    Button::new()
                        .size(ButtonSize::Lg)
                        .as_child(link(signup::PATH, "Start free trial")),
                )
                .child(
                    Button::new()
                        .variant(ButtonVariant::Outline)
                        .size(ButtonSize::Lg)
                        .as_child(link(login::PATH, "Sign in")),
                ),
        )
}

fn features() -> Element {
    Element::new("section")
        .class("container grid gap-4 pb-24 md:grid-cols-3")
        .children(FEATURES.iter().map(|(title, description)| {
            card().child(
                card_header()
                    .child(card_title().class("text-lg").text(*title))
                    .child(card_description().text(*description)),
            )
        }))
}

fn site_footer(site: &SiteConfig) -> Element {
    Element::new("footer").class("border-t py-6").child(
        Element::new("div")
            .class("container flex items-center justify-between text-sm text-muted-foreground")
            .child(Element::new("p").text(site.name.as_str()))
            .child(
                Element::new("a")
                    .attr("href", site.links.github.as_str())
                    .attr("rel", "noreferrer")
                    .class("underline underline-offset-4")
                    .text("GitHub"),
            ),
    )
}

/// Content of the landing page
pub fn content(site: &SiteConfig) -> Element {
    Element::new("div")
        .class("relative flex min-h-screen flex-col")
        .child(site_header())
        .child(
            Element::new("main")
                .class("flex-1")
                .child(hero(site))
                .child(features()),
        )
        .child(site_footer(site))
}

pub fn document(site: &SiteConfig) -> Element {
    layout::page(site, &METADATA, PATH, content(site))
}

pub fn render(site: &SiteConfig) -> String {
    layout::render(&document(site))
}
