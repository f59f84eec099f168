//! Per-page metadata records

use serde::{Deserialize, Serialize};

/// Metadata injected into a single page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    /// Site-relative, e.g. `/agenda`
    pub canonical_path: String,
    pub og_title: String,
    pub og_description: String,
    pub include_structured_data: bool,
}

/// One row of the page table, keyed by the page's path relative to the site root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageEntry {
    pub path: String,
    pub title: String,
    pub description: String,
    pub canonical: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub og_description: Option<String>,
    #[serde(default)]
    pub structured_data: bool,
}

impl PageEntry {
    /// Build the metadata record, falling back to title/description for OG fields
    pub fn metadata(&self) -> PageMetadata {
        PageMetadata {
            title: self.title.clone(),
            description: self.description.clone(),
            canonical_path: self.canonical.clone(),
            og_title: self.og_title.clone().unwrap_or_else(|| self.title.clone()),
            og_description: self
                .og_description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            include_structured_data: self.structured_data,
        }
    }
}
