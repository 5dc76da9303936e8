//! Dashboard page.
//!
//! Static placeholder: every metric card shows a zero figure.

use super::layout::{self, Metadata};
use super::shared::brand_link;
use crate::config::SiteConfig;
use crate::ui::card::{card, card_content, card_header, card_title};
use crate::ui::{Button, ButtonSize, ButtonVariant, Element};

pub const PATH: &str = "/dashboard";

pub const METADATA: Metadata<'static> = Metadata::new("Dashboard", "Your dashboard");

/// A metric card's fixed content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metric {
    pub title: &'static str,
    pub value: &'static str,
    pub caption: &'static str,
}

pub const METRICS: [Metric; 4] = [
    Metric {
        title: "Total Bookings",
        value: "0",
        caption: "No bookings yet",
    },
    Metric {
        title: "Active Tours",
        value: "0",
        caption: "No active tours",
    },
    Metric {
        title: "Total Revenue",
        value: "$0",
        caption: "No revenue yet",
    },
    Metric {
        title: "Customers",
        value: "0",
        caption: "No customers yet",
    },
];

fn header() -> Element {
    Element::new("header")
        .class("sticky top-0 z-50 w-full border-b bg-background/95 backdrop-blur")
        .child(
            Element::new("div")
                .class("container flex h-14 items-center")
                .child(Element::new("div").class("mr-4 flex").child(brand_link(PATH)))
                .child(
                    Element::new("div")
                        .class("flex flex-1 items-center justify-end space-x-2")
                        .child(
                            Button::new()
                                .variant(ButtonVariant::Ghost)
                                .size(ButtonSize::Sm)
                                .text("Logout"),
                        ),
                ),
        )
}

fn metric_card(metric: &Metric) -> Element {
    card()
        .child(
            card_header()
                .class("flex flex-row items-center justify-between space-y-0 pb-2")
                .child(card_title().class("text-sm font-medium").text(metric.title)),
        )
        .child(
            card_content()
                .child(Element::new("div").class("text-2xl font-bold").text(metric.value))
                .child(
                    Element::new("p")
                        .class("text-xs text-muted-foreground")
                        .text(metric.caption),
                ),
        )
}

pub fn content() -> Element {
    Element::new("div")
        .class("flex min-h-screen flex-col")
        .child(header())
        .child(
            Element::new("main").class("flex-1 container py-6").child(
                Element::new("div")
                    .class("flex flex-col gap-4")
                    .child(
                        Element::new("h1")
                            .class("text-3xl font-bold")
                            .text("Dashboard"),
                    )
                    .child(
                        Element::new("p")
                            .class("text-muted-foreground")
                            .text("Welcome to your dashboard. This is a placeholder page."),
                    )
                    .child(
                        Element::new("div")
                            .class("grid gap-4 md:grid-cols-2 lg:grid-cols-4")
                            .children(METRICS.iter().map(metric_card)),
                    ),
            ),
        )
}

pub fn document(site: &SiteConfig) -> Element {
    layout::page(site, &METADATA, PATH, content())
}

pub fn render(site: &SiteConfig) -> String {
    layout::render(&document(site))
}
