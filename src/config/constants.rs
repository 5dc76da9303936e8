//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Site
// =============================================================================

/// Site display name, also the base of every page title
pub const SITE_NAME: &str = "Travel & Tour SaaS";

/// Default meta description
pub const SITE_DESCRIPTION: &str = "A modern travel and tour management platform";

/// Open Graph image path, relative to the public URL
pub const SITE_OG_IMAGE: &str = "/og.png";

/// Source repository link shown in the footer
pub const SITE_GITHUB_URL: &str = "https://github.com/your-username/travel-and-tour-saas-app";

/// Short brand label used in page headers
pub const BRAND_LABEL: &str = "Travel & Tour";

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

/// Public base URL used when `PUBLIC_APP_URL` is unset or empty
pub const DEFAULT_APP_URL: &str = "http://localhost:3000";

// =============================================================================
// Environment
// =============================================================================

/// Environment variable holding the public base URL
pub const ENV_APP_URL: &str = "PUBLIC_APP_URL";

/// Environment variable holding the bind host
pub const ENV_SERVER_HOST: &str = "SERVER_HOST";

/// Environment variable holding the bind port
pub const ENV_SERVER_PORT: &str = "SERVER_PORT";

// =============================================================================
// Generated Schema
// =============================================================================

/// Version tag of a schema artifact that has not been generated yet
pub const PLACEHOLDER_SCHEMA_VERSION: u32 = 0;

/// Default output path of `generate schema`
pub const DEFAULT_SCHEMA_PATH: &str = "schema/database.json";
