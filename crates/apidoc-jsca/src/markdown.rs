//! Markdown rendering for JSCA free text
//!
//! Summaries, descriptions and examples are authored in markdown and shipped
//! to the IDE as HTML. The IDE strips tags before display, so bracketed type
//! references such as `<Titanium.UI.View>` must not survive as tag-like
//! tokens or their text would be lost. After rendering, any `<X>` (or its
//! escaped form `&lt;X&gt;`) is rewritten to a bare `X` when `X` starts with
//! `Titanium` or names a registered type. Text inside `<code>` elements is
//! left as rendered.

use apidoc_model::{Deprecation, TypeRegistry};
use comrak::{markdown_to_html, Options};
use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    /// Tag-like token, literal or HTML-escaped
    static ref TAG_LIKE: Regex = Regex::new(r"(?:<|&lt;)([^<>&\s]+)(?:>|&gt;)").unwrap();
    /// Inline or block code element
    static ref CODE_ELEMENT: Regex = Regex::new(r"(?s)<code\b[^>]*>.*?</code>").unwrap();
}

/// Renders markdown to HTML against a type registry
pub struct MarkdownRenderer<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> MarkdownRenderer<'a> {
    /// Create a renderer resolving type references against `registry`
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// Render markdown to HTML, unwrapping bracketed type references
    pub fn render(&self, source: &str) -> String {
        let mut options = Options::default();
        options.render.unsafe_ = true;
        options.extension.table = true;
        options.extension.strikethrough = true;

        let html = markdown_to_html(source, &options);
        self.unwrap_type_references(html.trim_end_matches('\n'))
    }

    /// Render an optional summary, appending the deprecation notice
    ///
    /// Returns an empty string when there is no summary.
    pub fn description(&self, summary: Option<&str>, deprecation: Option<&Deprecation>) -> String {
        let Some(summary) = summary else {
            return String::new();
        };
        match deprecation.and_then(deprecation_message) {
            Some(notice) => self.render(&format!("{}{}", summary, notice)),
            None => self.render(summary),
        }
    }

    fn unwrap_type_references(&self, html: &str) -> String {
        let mut out = String::with_capacity(html.len());
        let mut last = 0;
        for code in CODE_ELEMENT.find_iter(html) {
            out.push_str(&self.unwrap_text(&html[last..code.start()]));
            out.push_str(code.as_str());
            last = code.end();
        }
        out.push_str(&self.unwrap_text(&html[last..]));
        out
    }

    fn unwrap_text(&self, text: &str) -> String {
        TAG_LIKE
            .replace_all(text, |caps: &Captures<'_>| {
                let name = &caps[1];
                if name.starts_with("Titanium") || self.registry.contains(name) {
                    name.to_string()
                } else {
                    caps[0].to_string()
                }
            })
            .into_owned()
    }
}

/// Markdown deprecation notice appended to a summary
///
/// Returns `None` when the notice carries no information.
pub fn deprecation_message(deprecation: &Deprecation) -> Option<String> {
    if deprecation.is_empty() {
        return None;
    }
    let mut message = String::from("  **Deprecated");
    if let Some(since) = &deprecation.since {
        message.push_str(&format!(" since {}.", since));
    }
    if let Some(removed) = &deprecation.removed {
        message.push_str(&format!(" Removed in {}.", removed));
    }
    if let Some(notes) = &deprecation.notes {
        message.push_str(&format!(" {}", notes));
    }
    message.push_str("**");
    Some(message)
}
