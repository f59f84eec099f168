//! Error types for seoinject

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for seoinject
#[derive(Debug, Error)]
pub enum SeoError {
    #[error("Not a site directory: {0}")]
    NotSiteDirectory(PathBuf),

    #[error("Unknown page: {0}")]
    UnknownPage(String),

    #[error("{0} file(s) failed to process")]
    FilesFailed(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SeoError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SeoError::NotSiteDirectory(_) => 2,
            SeoError::FilesFailed(_) => 3,
            SeoError::UnknownPage(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SeoError::NotSiteDirectory(path) => {
                format!(
                    "Not a site directory: {}\n\n\
                    Suggestions:\n\
                    • Pass the directory that contains your built HTML pages\n\
                    • Check the path for typos",
                    path.display()
                )
            }
            SeoError::UnknownPage(page) => {
                format!(
                    "No page configured for '{}'\n\n\
                    Suggestions:\n\
                    • Run 'seoinject pages' to see the configured pages\n\
                    • Page paths are relative to the site root (e.g., agenda/page.html)",
                    page
                )
            }
            SeoError::FilesFailed(count) => {
                format!(
                    "{} file(s) failed to process\n\n\
                    Suggestions:\n\
                    • Check file permissions in the site directory\n\
                    • Make sure the files are valid UTF-8",
                    count
                )
            }
            SeoError::Config(_) | SeoError::TomlDeserialize(_) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Run 'seoinject pages' to check the resolved configuration\n\
                    • Fix or remove seo.toml to fall back to the built-in pages",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using SeoError
pub type Result<T> = std::result::Result<T, SeoError>;
