//! Compiled regexes for head surgery.

use regex::Regex;
use std::sync::OnceLock;

/// Values of `name` on meta tags the rewriter owns
const OWNED_META_NAMES: &str =
    r"description|robots|keywords|author|icbm|geo\.[^'\x22]*|twitter:[^'\x22]*";

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| panic!("invalid built-in pattern {}: {}", pattern, e))
}

/// Attribute text up to the closing `>`; a `>` inside a quoted value does not end the tag
const TAG_TAIL: &str = r#"(?:[^>"']|"[^"]*"|'[^']*')*"#;

/// Opening tag carrying `attr` with one of `values`, attributes in any order
fn attr_tag(element: &str, attr: &str, values: &str) -> String {
    format!(r#"(?i)<{element}\s(?:{TAG_TAIL}?\s)?{attr}\s*=\s*["'](?:{values})["']{TAG_TAIL}>"#)
}

/// Every tag category written by a previous run.
///
/// JSON-LD comes first so markup quoted inside its body is never matched by
/// the meta patterns.
pub fn injected_tags() -> &'static [Regex] {
    static REGEXES: OnceLock<Vec<Regex>> = OnceLock::new();
    REGEXES.get_or_init(|| {
        vec![
            compile(&format!(
                r"(?s){}.*?</script\s*>",
                attr_tag("script", "type", r"application/ld\+json")
            )),
            compile(&attr_tag("meta", "name", OWNED_META_NAMES)),
            compile(&attr_tag("meta", "property", r"og:[^'\x22]*")),
            compile(&attr_tag("link", "rel", "canonical")),
        ]
    })
}

pub fn title_element() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| compile(r"(?is)<title\b[^>]*>.*?</title\s*>"))
}

/// End of the head region
pub fn head_close() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| compile(r"(?i)</head\s*>"))
}

/// Insertion anchors in priority order: generator, viewport, charset, `<head>`
pub fn insertion_anchors() -> &'static [Regex] {
    static REGEXES: OnceLock<Vec<Regex>> = OnceLock::new();
    REGEXES.get_or_init(|| {
        vec![
            compile(&attr_tag("meta", "name", "generator")),
            compile(&attr_tag("meta", "name", "viewport")),
            compile(&format!(r"(?i)<meta\s(?:{TAG_TAIL}?\s)?charset\s*={TAG_TAIL}>")),
            compile(r"(?i)<head(?:\s[^>]*)?>"),
        ]
    })
}
