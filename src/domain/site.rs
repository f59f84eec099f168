//! Site-wide constants substituted into generated tags

use serde::{Deserialize, Serialize};

const DEFAULT_LOCALE: &str = "en_IN";
const DEFAULT_PRIMARY_PAGE: &str = "index.html";

/// Geo targeting values, emitted on the primary page only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoTags {
    pub region: String,
    pub placename: String,
    /// `lat;lon`
    pub position: String,
    /// `lat, lon`
    pub icbm: String,
}

/// Fixed configuration values shared by every page of the site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteProfile {
    pub domain: String,
    pub site_name: String,
    pub og_image: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    pub instagram_username: String,
    pub registration_url: String,
    pub support_email: String,
    pub keywords: String,
    pub author: String,
    #[serde(default = "default_primary_page")]
    pub primary_page: String,
    pub geo: GeoTags,
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_primary_page() -> String {
    DEFAULT_PRIMARY_PAGE.to_string()
}

impl SiteProfile {
    /// Absolute URL for a site-relative path
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.domain.trim_end_matches('/'), path)
    }

    /// The site root URL, without trailing slash
    pub fn base_url(&self) -> &str {
        self.domain.trim_end_matches('/')
    }

    pub fn instagram_url(&self) -> String {
        format!("https://instagram.com/{}", self.instagram_username)
    }

    /// Handle used for `twitter:site` and `twitter:creator`
    pub fn social_handle(&self) -> String {
        format!("@{}", self.instagram_username)
    }

    /// Exact match against the designated primary page path
    pub fn is_primary_page(&self, relative_path: &str) -> bool {
        relative_path == self.primary_page
    }
}
