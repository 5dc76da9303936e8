//! Signup page.
//!
//! Renders the registration form only; submitting it is not handled.

use super::layout::{self, Metadata};
use super::login;
use super::shared::{auth_shell, switch_prompt};
use crate::config::SiteConfig;
use crate::ui::card::{card_content, card_footer};
use crate::ui::form::{field, input};
use crate::ui::{Button, Element};

pub const PATH: &str = "/signup";

pub const METADATA: Metadata<'static> = Metadata::new("Sign up", "Create your account");

pub fn content() -> Element {
    let form = Element::new("form")
        .attr("method", "post")
        .attr("action", PATH)
        .child(
            card_content()
                .class("grid gap-4")
                .child(field(
                    "name",
                    "Full name",
                    input("text")
                        .attr("placeholder", "Jane Doe")
                        .attr("autocomplete", "name")
                        .flag("required"),
                ))
                .child(field(
                    "email",
                    "Email",
                    input("email")
                        .attr("placeholder", "m@example.com")
                        .attr("autocomplete", "email")
                        .flag("required"),
                ))
                .child(field(
                    "password",
                    "Password",
                    input("password")
                        .attr("autocomplete", "new-password")
                        .flag("required"),
                )),
        )
        .child(
            card_footer()
                .class("flex-col gap-4")
                .child(
                    Button::new()
                        .attr("type", "submit")
                        .class("w-full")
                        .text("Create account"),
                )
                .child(switch_prompt("Already have an account?", "Login", login::PATH)),
        );

    auth_shell(
        "Create an account",
        "Enter your details below to create your account",
        form,
    )
}

pub fn document(site: &SiteConfig) -> Element {
    layout::page(site, &METADATA, PATH, content())
}

pub fn render(site: &SiteConfig) -> String {
    layout::render(&document(site))
}
