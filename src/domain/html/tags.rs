//! Formatting of the injected tag lines

use super::escape_attr;

const INDENT: &str = "    ";

/// Accumulates injected tags, one indented line per tag
#[derive(Debug, Default)]
pub struct TagBlock {
    out: String,
}

impl TagBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, text: &str) -> &mut Self {
        self.line(&title_element(text))
    }

    /// `<meta name=".." content="..">`
    pub fn name(&mut self, name: &str, content: &str) -> &mut Self {
        self.line(&format!(
            r#"<meta name="{}" content="{}">"#,
            name,
            escape_attr(content)
        ))
    }

    /// `<meta property=".." content="..">`
    pub fn property(&mut self, property: &str, content: &str) -> &mut Self {
        self.line(&format!(
            r#"<meta property="{}" content="{}">"#,
            property,
            escape_attr(content)
        ))
    }

    pub fn link(&mut self, rel: &str, href: &str) -> &mut Self {
        self.line(&format!(r#"<link rel="{}" href="{}">"#, rel, escape_attr(href)))
    }

    /// JSON body starts at column zero; the closing tag is indented
    pub fn json_ld(&mut self, json: &str) -> &mut Self {
        self.line(&format!(
            "<script type=\"application/ld+json\">\n{}\n{}</script>",
            json, INDENT
        ))
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn line(&mut self, tag: &str) -> &mut Self {
        self.out.push_str(INDENT);
        self.out.push_str(tag);
        self.out.push('\n');
        self
    }
}

/// `<title>..</title>` with the text attribute-escaped
pub fn title_element(text: &str) -> String {
    format!("<title>{}</title>", escape_attr(text))
}
