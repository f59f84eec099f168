//! seoinject - SEO tag injection for static sites
//!
//! Rewrites the `<head>` of a fixed set of static HTML pages so each carries
//! its title, description, canonical link, Open Graph and Twitter Card tags,
//! and (on the primary page) geo tags and schema.org JSON-LD. Running it
//! again leaves already-processed pages untouched.

pub mod logger;

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::SeoError;
