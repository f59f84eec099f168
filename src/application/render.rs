//! Render use case: preview one page's rewrite without writing it

use crate::domain::TagRewriter;
use crate::error::{Result, SeoError};
use crate::infrastructure::SeoConfig;

/// Rewrite `html` as the configured page `page` would be rewritten by `apply`
pub fn render_page(config: &SeoConfig, page: &str, html: &str) -> Result<String> {
    let entry = config
        .page(page)
        .ok_or_else(|| SeoError::UnknownPage(page.to_string()))?;

    let rewriter = TagRewriter::new(&config.site, &config.event)?;
    let is_primary = config.site.is_primary_page(&entry.path);

    Ok(rewriter.rewrite(html, &entry.metadata(), is_primary))
}
