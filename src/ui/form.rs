//! Form primitives.

use super::node::Element;

const INPUT_CLASSES: &str = "flex h-10 w-full rounded-md border border-input bg-background px-3 \
    py-2 text-sm ring-offset-background placeholder:text-muted-foreground \
    focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring \
    focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";

const LABEL_CLASSES: &str = "text-sm font-medium leading-none \
    peer-disabled:cursor-not-allowed peer-disabled:opacity-70";

/// Text-like input of the given type
pub fn input(input_type: &str) -> Element {
    Element::new("input")
        .attr("type", input_type)
        .class(INPUT_CLASSES)
}

/// Label bound to the control with id `for_id`
pub fn label(for_id: &str, text: &str) -> Element {
    Element::new("label")
        .attr("for", for_id)
        .class(LABEL_CLASSES)
        .text(text)
}

/// Labelled input stacked in a grid cell.
///
/// The input's `id` and `name` are both set to `id`.
pub fn field(id: &str, label_text: &str, control: Element) -> Element {
    Element::new("div")
        .class("grid gap-2")
        .child(label(id, label_text))
        .child(control.id(id).attr("name", id))
}
