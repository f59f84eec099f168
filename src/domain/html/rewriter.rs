//! Idempotent SEO tag injection.
//!
//! A rewrite is purge, patch title, locate anchor, build block, splice. The
//! purge removes everything a previous run wrote (whole lines where the tag
//! sits alone on its line), so the output of one run is a fixed point of the
//! next.

use super::patterns::{head_close, injected_tags, insertion_anchors, title_element};
use super::tags::{title_element as render_title, TagBlock};
use crate::domain::structured_data::{render_event_json, EventDetails};
use crate::domain::{PageMetadata, SiteProfile};
use crate::error::Result;
use regex::Regex;
use std::ops::Range;

const ROBOTS: &str = "index, follow";
const OG_TYPE: &str = "website";
const TWITTER_CARD: &str = "summary_large_image";

/// Injects the site's tag block into page heads.
///
/// Holds the site constants and the JSON-LD text, both fixed for a run.
#[derive(Debug, Clone)]
pub struct TagRewriter {
    site: SiteProfile,
    event_json: String,
}

impl TagRewriter {
    pub fn new(site: &SiteProfile, event: &EventDetails) -> Result<Self> {
        Ok(TagRewriter {
            site: site.clone(),
            event_json: render_event_json(site, event)?,
        })
    }

    pub fn site(&self) -> &SiteProfile {
        &self.site
    }

    /// Return `html` with the tag block for `meta` present exactly once.
    ///
    /// Geo tags and JSON-LD are only written when `is_primary_page` is set;
    /// JSON-LD additionally requires `meta.include_structured_data`.
    pub fn rewrite(&self, html: &str, meta: &PageMetadata, is_primary_page: bool) -> String {
        let purged = purge_injected(html);
        let (text, title) = patch_title(&purged, &meta.title);

        let mut insert_at = insertion_point(&text);
        if let Some(range) = &title {
            // Keep an existing title ahead of the block when it sits at the anchor.
            if range.start >= insert_at && text[insert_at..range.start].trim().is_empty() {
                insert_at = range.end;
            }
        }

        let newline = line_ending(&text);
        let mut block = self.build_block(meta, is_primary_page, title.is_none());
        if newline != "\n" {
            block = block.replace('\n', newline);
        }
        splice(&text, insert_at, &block, newline)
    }

    fn build_block(&self, meta: &PageMetadata, is_primary_page: bool, with_title: bool) -> String {
        let site = &self.site;
        let canonical = site.url_for(&meta.canonical_path);
        let handle = site.social_handle();

        let mut block = TagBlock::new();
        if with_title {
            block.title(&meta.title);
        }

        block
            .name("description", &meta.description)
            .name("robots", ROBOTS)
            .link("canonical", &canonical);

        if is_primary_page {
            block
                .name("geo.region", &site.geo.region)
                .name("geo.placename", &site.geo.placename)
                .name("geo.position", &site.geo.position)
                .name("ICBM", &site.geo.icbm);
        }

        block
            .property("og:type", OG_TYPE)
            .property("og:title", &meta.og_title)
            .property("og:description", &meta.og_description)
            .property("og:image", &site.og_image)
            .property("og:url", &canonical)
            .property("og:site_name", &site.site_name)
            .property("og:locale", &site.locale);

        block
            .name("twitter:card", TWITTER_CARD)
            .name("twitter:title", &meta.og_title)
            .name("twitter:description", &meta.og_description)
            .name("twitter:image", &site.og_image)
            .name("twitter:site", &handle)
            .name("twitter:creator", &handle);

        block
            .name("keywords", &site.keywords)
            .name("author", &site.author);

        if is_primary_page && meta.include_structured_data {
            block.json_ld(&self.event_json);
        }

        block.into_string()
    }
}

fn purge_injected(html: &str) -> String {
    injected_tags()
        .iter()
        .fold(html.to_string(), |text, re| remove_matches(&text, re, 0))
}

/// Replace the first `<title>` in the head and drop any others.
///
/// Returns the patched text and the new title element's range, if one existed.
fn patch_title(text: &str, title: &str) -> (String, Option<Range<usize>>) {
    let head_end = head_close()
        .find(text)
        .map_or(text.len(), |m| m.start());

    let Some(found) = title_element().find(&text[..head_end]) else {
        return (text.to_string(), None);
    };

    // Later titles are removed; the first keeps its offsets.
    let head = remove_matches(&text[..head_end], title_element(), 1);
    let element = render_title(title);

    let mut patched = String::with_capacity(text.len() + element.len());
    patched.push_str(&head[..found.start()]);
    patched.push_str(&element);
    patched.push_str(&head[found.end()..]);
    patched.push_str(&text[head_end..]);

    let range = found.start()..found.start() + element.len();
    (patched, Some(range))
}

/// End of the first anchor found in priority order, else 0
fn insertion_point(text: &str) -> usize {
    insertion_anchors()
        .iter()
        .find_map(|re| re.find(text))
        .map_or(0, |m| m.end())
}

/// The document's first line break decides the ending used for the block
fn line_ending(text: &str) -> &'static str {
    match text.find('\n') {
        Some(i) if text[..i].ends_with('\r') => "\r\n",
        _ => "\n",
    }
}

fn splice(text: &str, at: usize, block: &str, newline: &str) -> String {
    let (before, after) = text.split_at(at);
    // The block ends with its own line break.
    let after = after
        .strip_prefix("\r\n")
        .or_else(|| after.strip_prefix('\n'))
        .unwrap_or(after);

    let mut out = String::with_capacity(text.len() + block.len() + newline.len());
    out.push_str(before);
    out.push_str(newline);
    out.push_str(block);
    out.push_str(after);
    out
}

/// Remove every match after the first `skip`, taking the whole line when the
/// match is the only thing on it.
fn remove_matches(text: &str, re: &Regex, skip: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    for m in re.find_iter(text).skip(skip) {
        let range = line_extent(text, m.range());
        let start = range.start.max(cursor);
        out.push_str(&text[cursor..start]);
        cursor = range.end.max(cursor);
    }

    out.push_str(&text[cursor..]);
    out
}

fn line_extent(text: &str, range: Range<usize>) -> Range<usize> {
    let line_start = text[..range.start].rfind('\n').map_or(0, |i| i + 1);
    let line_end = text[range.end..]
        .find('\n')
        .map_or(text.len(), |i| range.end + i + 1);

    let alone = text[line_start..range.start].trim().is_empty()
        && text[range.end..line_end].trim().is_empty();

    if alone {
        line_start..line_end
    } else {
        range
    }
}
