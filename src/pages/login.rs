//! Login page.
//!
//! Renders the sign-in form only; submitting it is not handled.

use super::layout::{self, Metadata};
use super::shared::{auth_shell, switch_prompt};
use super::signup;
use crate::config::SiteConfig;
use crate::ui::card::{card_content, card_footer};
use crate::ui::form::{field, input};
use crate::ui::{Button, Element};

pub const PATH: &str = "/login";

pub const METADATA: Metadata<'static> = Metadata::new("Login", "Login to your account");

pub fn content() -> Element {
    let form = Element::new("form")
        .attr("method", "post")
        .attr("action", PATH)
        .child(
            card_content()
                .class("grid gap-4")
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
                        .attr("autocomplete", "current-password")
                        .flag("required"),
                )),
        )
        .child(
            card_footer()
                .class("flex-col gap-4")
                .child(Button::new().attr("type", "submit").class("w-full").text("Login"))
                .child(switch_prompt("Don't have an account?", "Sign up", signup::PATH)),
        );

    auth_shell(
        "Login",
        "Enter your email below to login to your account",
        form,
    )
}

pub fn document(site: &SiteConfig) -> Element {
    layout::page(site, &METADATA, PATH, content())
}

pub fn render(site: &SiteConfig) -> String {
    layout::render(&document(site))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{ignore_case, Screen};

    #[test]
    fn test_form_fields() {
        let root = document(&SiteConfig::new("http://localhost:3000"));
        let screen = Screen::from_element(&root);

        let email = screen.get_by_label(&ignore_case("email")).unwrap();
        assert_eq!(email.get_attr("type"), Some("email"));
        let password = screen.get_by_label(&ignore_case("password")).unwrap();
        assert_eq!(password.get_attr("type"), Some("password"));

        let submit = screen.get_by_role("button", Some(&ignore_case("login"))).unwrap();
        assert_eq!(submit.get_attr("type"), Some("submit"));
        assert!(!screen.is_disabled(submit));
    }

    #[test]
    fn test_login_text_first_is_title() {
        let root = content();
        let screen = Screen::from_element(&root);
        let found = screen.all_by_text(&"Login".into());
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].tag(), "h3");
        assert!(screen.is_visible(found[0]));
    }
}
