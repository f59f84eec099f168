//! Configuration management

use crate::domain::{EventDetails, PageEntry, SiteProfile};
use crate::error::{Result, SeoError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the per-site override file
pub const CONFIG_FILE_NAME: &str = "seo.toml";

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Page table plus site and event constants, fixed for the whole run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoConfig {
    pub site: SiteProfile,
    pub event: EventDetails,
    pub pages: Vec<PageEntry>,
}

/// Where a configuration was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Builtin,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Builtin => write!(f, "built-in"),
        }
    }
}

impl SeoConfig {
    /// The page table compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_toml(DEFAULT_CONFIG)
    }

    /// Parse and validate a TOML document
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: SeoConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit file path
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SeoError::Config(format!("Config file not found: {}", path.display()))
            } else {
                SeoError::Io(e)
            }
        })?;

        Self::from_toml(&contents).map_err(|e| match e {
            SeoError::TomlDeserialize(err) => {
                SeoError::Config(format!("Failed to parse {}: {}", path.display(), err))
            }
            other => other,
        })
    }

    /// Load `<root>/seo.toml` if present, otherwise the built-in table
    pub fn load_from_dir(root: &Path) -> Result<(Self, ConfigSource)> {
        let path = root.join(CONFIG_FILE_NAME);
        if path.is_file() {
            let config = Self::load_from_file(&path)?;
            Ok((config, ConfigSource::File(path)))
        } else {
            Ok((Self::builtin()?, ConfigSource::Builtin))
        }
    }

    /// An explicit `--config` path wins over the site directory lookup
    pub fn resolve(root: &Path, explicit: Option<&Path>) -> Result<(Self, ConfigSource)> {
        match explicit {
            Some(path) => {
                let config = Self::load_from_file(path)?;
                Ok((config, ConfigSource::File(path.to_path_buf())))
            }
            None => Self::load_from_dir(root),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.site.domain.starts_with("https://") || self.site.domain.starts_with("http://")) {
            return Err(SeoError::Config(format!(
                "Invalid domain '{}': must start with http:// or https://",
                self.site.domain
            )));
        }

        if self.pages.is_empty() {
            return Err(SeoError::Config("No pages configured".to_string()));
        }

        let mut seen = HashSet::new();
        for page in &self.pages {
            if !seen.insert(page.path.as_str()) {
                return Err(SeoError::Config(format!(
                    "Duplicate page path: {}",
                    page.path
                )));
            }

            if page.path.starts_with('/') || page.path.split('/').any(|part| part == "..") {
                return Err(SeoError::Config(format!(
                    "Page path must be relative to the site root: {}",
                    page.path
                )));
            }

            if !page.path.ends_with(".html") {
                return Err(SeoError::Config(format!(
                    "Page path must name an .html file: {}",
                    page.path
                )));
            }

            if !page.canonical.starts_with('/') {
                return Err(SeoError::Config(format!(
                    "Canonical path for {} must start with '/': {}",
                    page.path, page.canonical
                )));
            }
        }

        self.event.validate()
    }

    /// Look up a page by its relative path
    pub fn page(&self, path: &str) -> Option<&PageEntry> {
        self.pages.iter().find(|p| p.path == path)
    }

    pub fn is_configured(&self, path: &str) -> bool {
        self.page(path).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"
[site]
domain = "https://example.org"
site_name = "Example"
og_image = "/og.png"
instagram_username = "example"
registration_url = "https://tickets.example.com"
support_email = "help@example.org"
keywords = "a, b"
author = "Example Org"

[site.geo]
region = "IN-KA"
placename = "Bengaluru"
position = "1;2"
icbm = "1, 2"

[event]
name = "Fest"
description = "A fest"
start_date = "2026-02-19T09:00:00+05:30"
end_date = "2026-02-20T09:00:00+05:30"
organizer = "Example Org"
currency = "INR"
valid_from = "2025-12-01T00:00:00+05:30"

[[event.locations]]
name = "Bengaluru"
region = "KA"
country = "IN"

[[pages]]
path = "index.html"
title = "Home"
description = "Home page"
canonical = "/"
structured_data = true
"#;

    #[test]
    fn test_builtin_config_is_valid() {
        let config = SeoConfig::builtin().unwrap();

        assert_eq!(config.site.domain, "https://rift.pwioi.club");
        assert_eq!(config.pages.len(), 6);
        assert_eq!(config.pages[0].path, "index.html");
        assert!(config.pages[0].structured_data);
        assert!(config.pages[1..].iter().all(|p| !p.structured_data));
        assert_eq!(config.event.locations.len(), 4);
        assert_eq!(config.site.primary_page, "index.html");
    }

    #[test]
    fn test_builtin_keeps_table_order() {
        let config = SeoConfig::builtin().unwrap();
        let paths: Vec<&str> = config.pages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "index.html",
                "agenda/page.html",
                "speakers/page.html",
                "contact/page.html",
                "venue/page.html",
                "terms-and-conditions/page.html",
            ]
        );
    }

    #[test]
    fn test_defaults_applied() {
        let config = SeoConfig::from_toml(MINIMAL).unwrap();

        assert_eq!(config.site.locale, "en_IN");
        assert_eq!(config.site.primary_page, "index.html");
        assert_eq!(config.event.price, "0");
        assert_eq!(config.event.status, "https://schema.org/EventScheduled");
        assert_eq!(config.pages[0].metadata().og_title, "Home");
    }

    #[test]
    fn test_duplicate_page_rejected() {
        let doubled = format!(
            "{}\n[[pages]]\npath = \"index.html\"\ntitle = \"x\"\ndescription = \"y\"\ncanonical = \"/\"\n",
            MINIMAL
        );
        let err = SeoConfig::from_toml(&doubled).unwrap_err();
        assert!(err.to_string().contains("Duplicate page path"));
    }

    #[test]
    fn test_bad_canonical_rejected() {
        let bad = MINIMAL.replace("canonical = \"/\"", "canonical = \"agenda\"");
        let err = SeoConfig::from_toml(&bad).unwrap_err();
        assert!(err.to_string().contains("must start with '/'"));
    }

    #[test]
    fn test_escaping_page_path_rejected() {
        let bad = MINIMAL.replace("path = \"index.html\"", "path = \"../index.html\"");
        assert!(SeoConfig::from_toml(&bad).is_err());
    }

    #[test]
    fn test_bad_domain_rejected() {
        let bad = MINIMAL.replace("https://example.org\"", "example.org\"");
        let err = SeoConfig::from_toml(&bad).unwrap_err();
        assert!(err.to_string().contains("Invalid domain"));
    }

    #[test]
    fn test_missing_field_is_toml_error() {
        let bad = MINIMAL.replace("author = \"Example Org\"\n", "");
        match SeoConfig::from_toml(&bad).unwrap_err() {
            SeoError::TomlDeserialize(_) => {}
            other => panic!("Expected TomlDeserialize error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_from_dir_prefers_site_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), MINIMAL).unwrap();

        let (config, source) = SeoConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.pages.len(), 1);
        assert_eq!(source, ConfigSource::File(temp.path().join(CONFIG_FILE_NAME)));
    }

    #[test]
    fn test_load_from_dir_falls_back_to_builtin() {
        let temp = TempDir::new().unwrap();

        let (config, source) = SeoConfig::load_from_dir(temp.path()).unwrap();
        assert_eq!(config.pages.len(), 6);
        assert_eq!(source, ConfigSource::Builtin);
    }

    #[test]
    fn test_explicit_missing_file() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope.toml");

        let err = SeoConfig::resolve(temp.path(), Some(&missing)).unwrap_err();
        match err {
            SeoError::Config(msg) => assert!(msg.contains("not found")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_error_names_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("broken.toml");
        fs::write(&path, "[site\n").unwrap();

        let err = SeoConfig::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_page_lookup() {
        let config = SeoConfig::builtin().unwrap();
        assert!(config.is_configured("agenda/page.html"));
        assert!(!config.is_configured("agenda/index.html"));
        assert_eq!(config.page("venue/page.html").unwrap().canonical, "/venue");
    }
}
