//! HTML escaping
//!
//! One table, applied to every text and attribute emission. Nothing else
//! is transformed.

use org_parser::TextBuffer;

/// Append `text` to `out` with the five HTML specials replaced.
pub fn escape_into(out: &mut TextBuffer, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

/// Escape into a fresh string.
pub fn escape(text: &str) -> String {
    let mut out = TextBuffer::with_capacity(text.len());
    escape_into(&mut out, text);
    out.into_string()
}
