//! File system access for a static site directory

use crate::error::{Result, SeoError};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A built static site rooted at a directory.
///
/// Page paths are relative to the root and use `/` separators.
#[derive(Debug, Clone)]
pub struct SiteTree {
    pub root: PathBuf,
}

impl SiteTree {
    pub fn new(root: PathBuf) -> Self {
        SiteTree { root }
    }

    /// Open an existing site directory
    pub fn open(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(SeoError::NotSiteDirectory(root.to_path_buf()));
        }
        Ok(SiteTree::new(root.to_path_buf()))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_of(&self, page: &str) -> PathBuf {
        self.root.join(page)
    }

    /// Check if a page file exists
    pub fn page_exists(&self, page: &str) -> bool {
        self.path_of(page).is_file()
    }

    /// Read a page as UTF-8
    pub fn read_page(&self, page: &str) -> Result<String> {
        fs::read_to_string(self.path_of(page)).map_err(SeoError::Io)
    }

    /// Write page content using a best-effort atomic replace:
    /// write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we remove the destination first.
    pub fn write_page_atomic(&self, page: &str, content: &str) -> Result<()> {
        let path = self.path_of(page);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.seoinject-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("page.html"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        if let Err(e) = fs::write(&tmp_path, content) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        let replaced = if cfg!(windows) && path.exists() {
            fs::remove_file(&path).and_then(|_| fs::rename(&tmp_path, &path))
        } else {
            fs::rename(&tmp_path, &path)
        };

        if let Err(e) = replaced {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        Ok(())
    }

    /// Move (rename) a page within the site; the destination must not exist.
    pub fn rename_page(&self, from: &str, to: &str) -> Result<()> {
        let from_path = self.path_of(from);
        let to_path = self.path_of(to);

        if !from_path.exists() {
            return Err(SeoError::Config(format!(
                "Cannot move missing file: {}",
                from_path.display()
            )));
        }

        if to_path.exists() {
            return Err(SeoError::Config(format!(
                "Destination already exists: {}",
                to_path.display()
            )));
        }

        fs::rename(from_path, to_path)?;
        Ok(())
    }

    /// Copy a page within the site, preserving permissions
    pub fn copy_page(&self, from: &str, to: &str) -> Result<()> {
        let from_path = self.path_of(from);
        if !from_path.exists() {
            return Err(SeoError::Config(format!(
                "Cannot copy missing file: {}",
                from_path.display()
            )));
        }

        fs::copy(from_path, self.path_of(to))?;
        Ok(())
    }

    pub fn remove_page(&self, page: &str) -> Result<()> {
        fs::remove_file(self.path_of(page)).map_err(SeoError::Io)
    }

    /// Immediate subdirectories, skipping dot-directories, sorted by name
    pub fn subdirectories(&self) -> Result<Vec<String>> {
        let mut dirs = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.path().is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if name.starts_with('.') {
                continue;
            }
            dirs.push(name);
        }

        dirs.sort();
        Ok(dirs)
    }

    /// All `.html` files under the root, skipping dot-directories, sorted
    pub fn html_files(&self) -> Vec<String> {
        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        let mut pages = Vec::new();
        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(rel) = entry.path().strip_prefix(&self.root) else {
                continue;
            };
            let Some(page) = Self::normalize_relative_path(rel) else {
                continue;
            };
            if page.ends_with(".html") {
                pages.push(page);
            }
        }

        pages.sort();
        pages
    }

    fn normalize_relative_path(path: &Path) -> Option<String> {
        let parts: Vec<&str> = path
            .iter()
            .map(|part| part.to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }
}
