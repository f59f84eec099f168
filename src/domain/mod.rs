//! Domain layer - Page metadata, site constants and head rewriting

pub mod html;
pub mod page;
pub mod site;
pub mod structured_data;

pub use html::TagRewriter;
pub use page::{PageEntry, PageMetadata};
pub use site::{GeoTags, SiteProfile};
pub use structured_data::{EventDetails, EventLocation};
