//! Infrastructure layer - Configuration and file system access

pub mod config;
pub mod site_tree;

pub use config::{ConfigSource, SeoConfig, CONFIG_FILE_NAME};
pub use site_tree::SiteTree;
