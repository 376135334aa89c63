//! Cleanup of raw model output before it reaches the widget.
//!
//! The model is prompted with `input:`/`output:` training pairs and sometimes
//! echoes that format back, or invents `[User]:`/`[Chatbot]:` markers. Every
//! reply goes through [`normalize_reply`] and then [`render_markdown`]; the
//! widget injects the rendered HTML directly.

use once_cell::sync::Lazy;
use regex::Regex;

/// Shown when the model returns an empty or whitespace-only reply.
pub const FALLBACK_REPLY: &str =
    "I'm currently unavailable. Please try sending your message again in a moment.";

static LEADING_INPUT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*input:\s*").unwrap()
});
static LEADING_OUTPUT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*output:\s*").unwrap()
});
static OUTPUT_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\boutput:").unwrap()
});
static STRAY_LABEL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:input|output):").unwrap()
});
static ROLE_MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\[(?:user|chatbot)\]:\s*").unwrap()
});
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"https?://[^\s\[\]()]+").unwrap()
});

/// Removes leaked training-format labels from model text.
///
/// A reply that opens with an echoed `input: …` line is cut down to whatever
/// follows the next `output:` label (the actual answer). Any later stray
/// label means the model kept going in its training format, so everything
/// from that label onward is dropped.
pub fn strip_training_labels(raw: &str) -> String {
    let mut text = raw.trim_start();

    if let Some(leading) = LEADING_INPUT_RE.find(text) {
        text = match OUTPUT_LABEL_RE.find(text) {
            Some(m) => &text[m.end()..],
            None => &text[leading.end()..],
        };
        text = text.trim_start();
    } else if let Some(m) = LEADING_OUTPUT_RE.find(text) {
        text = &text[m.end()..];
    }

    let mut text = match STRAY_LABEL_RE.find(text) {
        Some(m) => text[..m.start()].to_string(),
        None => text.to_string(),
    };

    if ROLE_MARKER_RE.is_match(&text) {
        text = ROLE_MARKER_RE.replace_all(&text, "").into_owned();
    }

    text.trim().to_string()
}

/// Full pre-render pipeline: label stripping, empty-reply fallback, URL
/// linking. Idempotent: normalizing an already-normalized reply is a no-op.
pub fn normalize_reply(raw: &str) -> String {
    let text = strip_training_labels(raw);
    if text.is_empty() {
        return FALLBACK_REPLY.to_string();
    }
    link_urls(&text)
}

/// Wraps every bare URL as a markdown link, exactly once. URLs already in
/// `[…](…)` position are left alone so re-running the pass cannot double-wrap.
fn link_urls(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for m in URL_RE.find_iter(text) {
        out.push_str(&text[last..m.start()]);
        let before = &text[..m.start()];
        let after = &text[m.end()..];
        // Only genuine markdown-link positions are skipped: the target of a
        // `](…)` or a label immediately followed by one. A URL in ordinary
        // parentheses or brackets still gets wrapped.
        let is_link_target = before.ends_with("](");
        let is_link_label = before.ends_with('[') && after.starts_with("](");
        if is_link_target || is_link_label {
            out.push_str(m.as_str());
        } else {
            out.push('[');
            out.push_str(m.as_str());
            out.push_str("](");
            out.push_str(m.as_str());
            out.push(')');
        }
        last = m.end();
    }
    out.push_str(&text[last..]);
    out
}

/// Markdown → HTML for the widget. The presentation shell trusts this output
/// and injects it without further escaping.
pub fn render_markdown(text: &str) -> String {
    let parser = pulldown_cmark::Parser::new(text);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    html
}

/// Everything a successful upstream reply goes through before hitting the wire.
pub fn render_reply(raw: &str) -> String {
    render_markdown(&normalize_reply(raw))
}
