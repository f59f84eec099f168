//! Apply use case: normalize, then rewrite every configured page

use crate::application::normalize::{normalize, sibling_alias, NormalizeReport};
use crate::domain::{PageEntry, TagRewriter};
use crate::error::Result;
use crate::infrastructure::{SeoConfig, SiteTree};

#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyOptions {
    pub dry_run: bool,
    pub skip_normalize: bool,
}

/// Result for a single page
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Tags written (or would be, in a dry run)
    Rewritten,
    /// Tags already up to date
    Unchanged,
    /// Configured but not on disk
    Missing,
    /// On disk but not in the page table
    Unconfigured,
    /// Read or write failed
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResult {
    pub page: String,
    pub outcome: PageOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplyReport {
    pub normalize: Option<NormalizeReport>,
    pub pages: Vec<PageResult>,
    pub dry_run: bool,
}

impl ApplyReport {
    pub fn processed(&self) -> usize {
        self.count(|o| matches!(o, PageOutcome::Rewritten | PageOutcome::Unchanged))
    }

    pub fn rewritten(&self) -> usize {
        self.count(|o| matches!(o, PageOutcome::Rewritten))
    }

    /// Missing, unconfigured and failed pages
    pub fn skipped(&self) -> usize {
        self.pages.len() - self.processed()
    }

    /// Failed pages plus files the normalizer could not handle
    pub fn failed(&self) -> usize {
        let normalize_failed = self.normalize.as_ref().map_or(0, |n| n.failed.len());
        self.count(|o| matches!(o, PageOutcome::Failed(_))) + normalize_failed
    }

    fn count(&self, pred: impl Fn(&PageOutcome) -> bool) -> usize {
        self.pages.iter().filter(|r| pred(&r.outcome)).count()
    }
}

/// Run the whole pipeline over a site directory.
///
/// A failure on one page is recorded and the remaining pages still run.
pub fn apply(site: &SiteTree, config: &SeoConfig, options: ApplyOptions) -> Result<ApplyReport> {
    let normalize_report = if options.skip_normalize {
        None
    } else {
        Some(normalize(site, options.dry_run))
    };

    let rewriter = TagRewriter::new(&config.site, &config.event)?;
    let mut pages = Vec::with_capacity(config.pages.len());

    for entry in &config.pages {
        let outcome = if site.page_exists(&entry.path) {
            let is_primary = rewriter.site().is_primary_page(&entry.path);
            match rewrite_page(site, &rewriter, entry, is_primary, options.dry_run) {
                Ok(true) => {
                    crate::log!("rewrite"; "{}", entry.path);
                    PageOutcome::Rewritten
                }
                Ok(false) => {
                    crate::debug!("rewrite"; "{} (unchanged)", entry.path);
                    PageOutcome::Unchanged
                }
                Err(e) => {
                    crate::log!("error"; "{}: {}", entry.path, e);
                    PageOutcome::Failed(e.to_string())
                }
            }
        } else {
            crate::log!("skip"; "{} (file not found)", entry.path);
            PageOutcome::Missing
        };

        pages.push(PageResult {
            page: entry.path.clone(),
            outcome,
        });
    }

    for page in unconfigured_pages(site, config) {
        crate::log!("skip"; "{} (no configuration found)", page);
        pages.push(PageResult {
            page,
            outcome: PageOutcome::Unconfigured,
        });
    }

    Ok(ApplyReport {
        normalize: normalize_report,
        pages,
        dry_run: options.dry_run,
    })
}

/// Returns whether the page text changed
fn rewrite_page(
    site: &SiteTree,
    rewriter: &TagRewriter,
    entry: &PageEntry,
    is_primary: bool,
    dry_run: bool,
) -> Result<bool> {
    let html = site.read_page(&entry.path)?;
    let rewritten = rewriter.rewrite(&html, &entry.metadata(), is_primary);

    if rewritten == html {
        return Ok(false);
    }

    if !dry_run {
        site.write_page_atomic(&entry.path, &rewritten)?;
    }
    Ok(true)
}

/// HTML files on disk with no table entry. A `page.html`/`index.html` whose
/// sibling is configured is a normalizer copy and not reported.
fn unconfigured_pages(site: &SiteTree, config: &SeoConfig) -> Vec<String> {
    site.html_files()
        .into_iter()
        .filter(|page| !config.is_configured(page))
        .filter(|page| {
            sibling_alias(page).is_none_or(|alias| !config.is_configured(&alias))
        })
        .collect()
}
