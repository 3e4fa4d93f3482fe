use regex::Regex;
use std::sync::OnceLock;

use crate::store::FileStore;

/// Canonical import target names — import only overwrites these, never creates
const MARKUP_TARGET: &str = "index.html";
const STYLE_TARGET: &str = "style.css";
const SCRIPT_TARGET: &str = "script.js";

/// Which canonical files an import actually updated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOutcome {
    pub markup: bool,
    pub style: bool,
    pub script: bool,
}

impl ImportOutcome {
    /// Returns true if the import changed anything at all
    pub fn any(&self) -> bool {
        self.markup || self.style || self.script
    }
}

/// Import a single HTML document into the canonical project files.
///
/// The first `<style>` element's text becomes the new `style.css` content,
/// the inline (non-external) `<script>` elements' text — each trimmed, joined
/// with newlines — becomes the new `script.js` content, and the body markup
/// with style/script elements stripped becomes the new `index.html` content.
/// A target file that does not exist in the store is silently skipped; no
/// file is ever created by import. There is no validation: a document with no
/// recognizable pieces degrades to empty replacements, not an error.
pub fn import_document(store: &mut FileStore, html: &str) -> ImportOutcome {
    let extracted = extract(html);
    ImportOutcome {
        markup: update_if_present(store, MARKUP_TARGET, &extracted.markup),
        style: update_if_present(store, STYLE_TARGET, &extracted.style),
        script: update_if_present(store, SCRIPT_TARGET, &extracted.script),
    }
}

struct Extracted {
    markup: String,
    style: String,
    script: String,
}

fn style_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<style[^>]*>(.*?)</style>").unwrap())
}

fn script_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<script([^>]*)>(.*?)</script>").unwrap())
}

fn body_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<body[^>]*>(.*?)</body>").unwrap())
}

fn src_attr_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)\bsrc\s*=").unwrap())
}

fn extract(html: &str) -> Extracted {
    // First style element only, matching the original tool's behavior
    let style = style_regex()
        .captures(html)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_default();

    // Inline scripts only; external ones (src=...) are skipped
    let mut script = String::new();
    for captures in script_regex().captures_iter(html) {
        if src_attr_regex().is_match(&captures[1]) {
            continue;
        }
        script.push_str(captures[2].trim());
        script.push('\n');
    }

    let body = body_regex()
        .captures(html)
        .map(|c| c[1].to_string())
        .unwrap_or_else(|| html.to_string());
    let without_style = style_regex().replace_all(&body, "");
    let markup = script_regex()
        .replace_all(&without_style, "")
        .trim()
        .to_string();

    Extracted {
        markup,
        style,
        script,
    }
}

fn update_if_present(store: &mut FileStore, name: &str, content: &str) -> bool {
    match store.find_by_name(name).map(|f| f.id) {
        Some(id) => store.update_content(id, content).is_ok(),
        None => false,
    }
}
