//! Application configuration module
//!
//! Handles environment variables, the static site record and
//! application-wide constants.

mod constants;
mod settings;
mod site;

pub use constants::*;
pub use settings::Config;
pub use site::{SiteConfig, SiteLinks};
