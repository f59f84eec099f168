//! HTML head rewriting
//!
//! Text-level surgery on the `<head>` block: no DOM is built, so markup the
//! rewriter does not own is left byte-for-byte as it was.

pub mod patterns;
pub mod rewriter;
pub mod tags;

pub use rewriter::TagRewriter;

use std::borrow::Cow;

/// Escape a value for a double-quoted attribute.
///
/// Single pass over the input, so `&` introduced by `&quot;` is never
/// escaped again. An already-escaped `&amp;` in the input becomes `&amp;amp;`.
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '"']) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
