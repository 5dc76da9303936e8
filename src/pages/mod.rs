//! Page templates.
//!
//! Every page exposes its route `PATH`, its [`Metadata`] and a `document`
//! function returning the full `<html>` tree; `render` serializes it.

pub mod dashboard;
pub mod error;
pub mod home;
pub mod layout;
pub mod login;
pub mod signup;

mod shared;

pub use layout::Metadata;
