//! Page file normalization: `page.html` -> `index.html`

use crate::error::Result;
use crate::infrastructure::SiteTree;

const PAGE_FILE: &str = "page.html";
const INDEX_FILE: &str = "index.html";

/// What happened to the root `page.html`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootRename {
    /// `page.html` was renamed to `index.html`
    Renamed,
    /// Both existed; `page.html` was removed and `index.html` kept
    RemovedDuplicate,
    /// No root `page.html`
    NotFound,
    /// The rename or removal failed; see `NormalizeReport::failed`
    Failed,
}

/// A file the normalizer could not rename, remove or copy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeFailure {
    pub page: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeReport {
    pub root: RootRename,
    /// `index.html` files created from a sibling `page.html`, e.g. `agenda/index.html`
    pub created: Vec<String>,
    pub failed: Vec<NormalizeFailure>,
    pub dry_run: bool,
}

/// Rename the root page and give every subdirectory page an `index.html`.
///
/// Each file is handled on its own: a failure is recorded and the rest still run.
pub fn normalize(site: &SiteTree, dry_run: bool) -> NormalizeReport {
    let mut failed = Vec::new();

    let root = match normalize_root(site, dry_run) {
        Ok(root) => root,
        Err(e) => {
            crate::log!("error"; "{}: {}", PAGE_FILE, e);
            failed.push(NormalizeFailure {
                page: PAGE_FILE.to_string(),
                reason: e.to_string(),
            });
            RootRename::Failed
        }
    };

    let dirs = match site.subdirectories() {
        Ok(dirs) => dirs,
        Err(e) => {
            crate::log!("error"; "{}: {}", site.root().display(), e);
            failed.push(NormalizeFailure {
                page: site.root().display().to_string(),
                reason: e.to_string(),
            });
            Vec::new()
        }
    };

    let mut created = Vec::new();
    for dir in dirs {
        let page = format!("{}/{}", dir, PAGE_FILE);
        let index = format!("{}/{}", dir, INDEX_FILE);

        if !site.page_exists(&page) || site.page_exists(&index) {
            continue;
        }

        if !dry_run {
            if let Err(e) = site.copy_page(&page, &index) {
                crate::log!("error"; "{}: {}", index, e);
                failed.push(NormalizeFailure {
                    page: index,
                    reason: e.to_string(),
                });
                continue;
            }
        }
        crate::debug!("normalize"; "created {}", index);
        created.push(index);
    }

    NormalizeReport {
        root,
        created,
        failed,
        dry_run,
    }
}

fn normalize_root(site: &SiteTree, dry_run: bool) -> Result<RootRename> {
    if !site.page_exists(PAGE_FILE) {
        return Ok(RootRename::NotFound);
    }

    if site.page_exists(INDEX_FILE) {
        if !dry_run {
            site.remove_page(PAGE_FILE)?;
        }
        return Ok(RootRename::RemovedDuplicate);
    }

    if !dry_run {
        site.rename_page(PAGE_FILE, INDEX_FILE)?;
    }
    Ok(RootRename::Renamed)
}

/// The `index.html`/`page.html` counterpart in the same directory
pub fn sibling_alias(page: &str) -> Option<String> {
    let (dir, file) = match page.rsplit_once('/') {
        Some((dir, file)) => (Some(dir), file),
        None => (None, page),
    };

    let other = match file {
        PAGE_FILE => INDEX_FILE,
        INDEX_FILE => PAGE_FILE,
        _ => return None,
    };

    Some(match dir {
        Some(dir) => format!("{}/{}", dir, other),
        None => other.to_string(),
    })
}
