//! Static site record consumed by page metadata.

use serde::Serialize;

use super::constants::{SITE_DESCRIPTION, SITE_GITHUB_URL, SITE_NAME, SITE_OG_IMAGE};
use super::Config;

/// External links shown on the site
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteLinks {
    pub github: String,
}

/// Immutable site configuration.
///
/// Built once at startup and shared behind an `Arc`; nothing mutates it
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteConfig {
    pub name: String,
    pub description: String,
    /// Public base URL, without trailing slash
    pub url: String,
    pub og_image: String,
    pub links: SiteLinks,
}

impl SiteConfig {
    /// Create the site record for the given public base URL.
    pub fn new(url: impl Into<String>) -> Self {
        let url: String = url.into();
        Self {
            name: SITE_NAME.to_string(),
            description: SITE_DESCRIPTION.to_string(),
            url: url.trim_end_matches('/').to_string(),
            og_image: SITE_OG_IMAGE.to_string(),
            links: SiteLinks {
                github: SITE_GITHUB_URL.to_string(),
            },
        }
    }

    /// Derive the site record from application configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.app_url.as_str())
    }

    /// Join a site-relative path onto the public base URL.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }

    /// Absolute URL of the Open Graph image
    pub fn og_image_url(&self) -> String {
        self.absolute_url(&self.og_image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_site_record() {
        let site = SiteConfig::from_config(&Config::default());
        assert_eq!(site.name, "Travel & Tour SaaS");
        assert_eq!(site.url, "http://localhost:3000");
        assert_eq!(site.og_image, "/og.png");
        assert!(site.links.github.starts_with("https://github.com/"));
    }

    #[test]
    fn test_absolute_urls() {
        let site = SiteConfig::new("https://tours.example.com/");
        assert_eq!(site.url, "https://tours.example.com");
        assert_eq!(site.og_image_url(), "https://tours.example.com/og.png");
        assert_eq!(site.absolute_url("/login"), "https://tours.example.com/login");
        assert_eq!(
            site.absolute_url("https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
    }
}
