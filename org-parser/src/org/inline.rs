//! Inline link and image scanning inside paragraph text
//!
//!     Paragraph text is scanned left to right for the two-character
//!     marker `[[`. Literal text between markers becomes [Inline::Text]
//!     children; a `[[path]]` or `[[path][description]]` construct becomes
//!     a [Inline::Link] or, for local image targets, an [Inline::Image].
//!
//!     Malformed markers are never an error. When a `[[` has no closing
//!     bracket the scan advances a single character and keeps going, which
//!     can re-match part of the original marker as a new, unrelated
//!     occurrence; the unscanned tail is flushed as literal text at the
//!     end. Blockquote bodies intentionally bypass this scanner.

use crate::org::ast::{Inline, LinkKind};

/// Recognized image file extensions (matched ASCII-case-insensitively).
const IMAGE_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp", ".bmp", ".tiff",
];

/// Parse paragraph text into inline children.
///
/// Total: every input yields at least one child (empty text yields a
/// single empty text node, so a paragraph always renders as `<p></p>`).
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut children = Vec::new();
    if text.is_empty() {
        children.push(Inline::Text(String::new()));
        return children;
    }

    let bytes = text.as_bytes();
    let mut start = 0;
    let mut pos = 0;
    while pos < bytes.len() {
        if bytes[pos] == b'[' && bytes.get(pos + 1) == Some(&b'[') {
            if start < pos {
                children.push(Inline::Text(text[start..pos].to_string()));
            }
            pos = scan_link(text, pos, &mut start, &mut children);
        } else {
            pos += 1;
        }
    }

    if start < pos {
        children.push(Inline::Text(text[start..bytes.len()].to_string()));
    }

    children
}

/// Scan one bracket construct beginning at `pos` (which points at `[[`).
///
/// On success the link/image node is pushed, `start` moves past the
/// construct, and the new scan position is returned. Without a closing
/// bracket the scan resumes one character further and `start` is left
/// alone, degrading the construct to literal text.
fn scan_link(text: &str, pos: usize, start: &mut usize, children: &mut Vec<Inline>) -> usize {
    let link_start = pos + 2;
    let Some(path_end) = find_byte(text, link_start, b']') else {
        return pos + 1;
    };

    let description = extract_description(text, path_end);
    let desc_end = if description.is_some() {
        find_byte(text, path_end + 2, b']')
    } else {
        None
    };

    let path = collapse_whitespace(&text[link_start..path_end]);
    children.push(make_node(path, description));

    // Resume after the construct; clamp because a `]` that ends the text
    // leaves nothing to skip over, and when the skipped byte lands inside
    // a multibyte character, step forward to the next char boundary.
    let mut resume = desc_end.map_or(path_end + 2, |end| end + 2).min(text.len());
    while !text.is_char_boundary(resume) {
        resume += 1;
    }
    *start = resume;
    *start
}

/// Description between `[` and `]` immediately after the path's closing
/// bracket, if both are present.
fn extract_description(text: &str, path_end: usize) -> Option<String> {
    if text.as_bytes().get(path_end + 1) != Some(&b'[') {
        return None;
    }
    let desc_start = path_end + 2;
    let desc_end = find_byte(text, desc_start, b']')?;
    Some(text[desc_start..desc_end].to_string())
}

fn make_node(path: String, description: Option<String>) -> Inline {
    let kind = LinkKind::classify(&path);
    if kind == LinkKind::File && is_image_path(&path) {
        Inline::Image { path, description }
    } else {
        Inline::Link {
            path,
            kind,
            description,
        }
    }
}

/// Whether the path's extension is in the recognized image set.
fn is_image_path(path: &str) -> bool {
    let Some(dot) = path.rfind('.') else {
        return false;
    };
    let ext = &path[dot..];
    IMAGE_EXTENSIONS
        .iter()
        .any(|image_ext| ext.eq_ignore_ascii_case(image_ext))
}

/// Collapse internal whitespace runs (space, tab, newline) to single
/// spaces and trim the ends.
fn collapse_whitespace(path: &str) -> String {
    let mut collapsed = String::with_capacity(path.len());
    let mut in_whitespace = false;
    for ch in path.chars() {
        if ch == ' ' || ch == '\t' || ch == '\n' {
            if !in_whitespace {
                collapsed.push(' ');
                in_whitespace = true;
            }
        } else {
            collapsed.push(ch);
            in_whitespace = false;
        }
    }
    collapsed.trim_matches(' ').to_string()
}

fn find_byte(text: &str, from: usize, needle: u8) -> Option<usize> {
    if from >= text.len() {
        return None;
    }
    text.as_bytes()[from..]
        .iter()
        .position(|&b| b == needle)
        .map(|i| from + i)
}
