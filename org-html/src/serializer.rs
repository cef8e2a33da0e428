//! Depth-first tree-to-HTML serialization, one case per node variant
//!
//!     Headings shift one level down (`* ` becomes `<h2>`) so the page
//!     template keeps `<h1>` for the document title; the shifted level is
//!     clamped to the `h1`..`h6` range. Metadata nodes emit zero bytes.
//!     Block-level tags end with a newline so fragments diff cleanly;
//!     inline tags do not.

use crate::escape::escape_into;
use org_parser::{Block, Document, Inline, ListItem, TextBuffer};

/// Render every child of the document, metadata included (metadata
/// renders as nothing, so the bytes match [render_body] today).
pub fn render_document(doc: &Document) -> String {
    let mut out = TextBuffer::with_capacity(1024);
    for block in &doc.children {
        render_block(block, &mut out);
    }
    out.into_string()
}

/// Render the embeddable body fragment, skipping the document's direct
/// metadata children.
pub fn render_body(doc: &Document) -> String {
    let mut out = TextBuffer::with_capacity(1024);
    for block in &doc.children {
        if !matches!(block, Block::Metadata { .. }) {
            render_block(block, &mut out);
        }
    }
    out.into_string()
}

fn render_block(block: &Block, out: &mut TextBuffer) {
    match block {
        Block::Heading { level, text } => render_heading(*level, text, out),
        Block::Metadata { .. } => {}
        Block::Paragraph { children } => {
            out.push_str("<p>");
            render_inlines(children, out);
            out.push_str("</p>\n");
        }
        Block::CodeBlock { language, code } => render_code_block(language.as_deref(), code, out),
        Block::Blockquote { children } => {
            out.push_str("<blockquote>");
            render_inlines(children, out);
            out.push_str("</blockquote>\n");
        }
        Block::List { items } => {
            out.push_str("<ul>");
            for item in items {
                render_list_item(item, out);
            }
            out.push_str("</ul>\n");
        }
    }
}

fn render_heading(level: u8, text: &str, out: &mut TextBuffer) {
    let shifted = (level as i32 + 1).clamp(1, 6);
    out.push_str("<h");
    out.push((b'0' + shifted as u8) as char);
    out.push('>');
    escape_into(out, text);
    out.push_str("</h");
    out.push((b'0' + shifted as u8) as char);
    out.push_str(">\n");
}

fn render_code_block(language: Option<&str>, code: &str, out: &mut TextBuffer) {
    out.push_str("<pre><code");
    if let Some(language) = language {
        out.push_str(" class=\"language-");
        escape_into(out, language);
        out.push('"');
    }
    out.push('>');
    escape_into(out, code);
    out.push_str("</code></pre>\n");
}

fn render_list_item(item: &ListItem, out: &mut TextBuffer) {
    out.push_str("<li>");
    escape_into(out, &item.text);
    out.push_str("</li>");
}

fn render_inlines(children: &[Inline], out: &mut TextBuffer) {
    for child in children {
        render_inline(child, out);
    }
}

fn render_inline(inline: &Inline, out: &mut TextBuffer) {
    match inline {
        Inline::Text(text) => escape_into(out, text),
        Inline::Link {
            path, description, ..
        } => {
            out.push_str("<a href=\"");
            escape_into(out, path);
            out.push_str("\">");
            if let Some(description) = description {
                escape_into(out, description);
            }
            out.push_str("</a>");
        }
        Inline::Image { path, .. } => {
            // the file: scheme prefix is a source-side artifact; the
            // emitted src must be a plain path
            let src = path.strip_prefix("file:").unwrap_or(path);
            out.push_str("<img src=\"");
            escape_into(out, src);
            out.push_str("\">");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use org_parser::LinkKind;

    fn doc(children: Vec<Block>) -> Document {
        Document { children }
    }

    #[test]
    fn heading_levels_shift_and_clamp() {
        for (level, tag) in [(1u8, "h2"), (2, "h3"), (3, "h4"), (4, "h5"), (5, "h6"), (6, "h6")] {
            let html = render_body(&doc(vec![Block::Heading {
                level,
                text: "T".into(),
            }]));
            assert_eq!(html, format!("<{tag}>T</{tag}>\n"));
        }
    }

    #[test]
    fn metadata_renders_as_nothing_in_both_variants() {
        let tree = doc(vec![Block::Metadata {
            key: "title".into(),
            value: "T".into(),
        }]);
        assert_eq!(render_document(&tree), "");
        assert_eq!(render_body(&tree), "");
    }

    #[test]
    fn code_block_language_class() {
        let html = render_body(&doc(vec![Block::CodeBlock {
            language: Some("python".into()),
            code: "print(1)\n".into(),
        }]));
        assert_eq!(
            html,
            "<pre><code class=\"language-python\">print(1)\n</code></pre>\n"
        );
    }

    #[test]
    fn code_block_without_language_has_no_class() {
        let html = render_body(&doc(vec![Block::CodeBlock {
            language: None,
            code: "x\n".into(),
        }]));
        assert_eq!(html, "<pre><code>x\n</code></pre>\n");
    }

    #[test]
    fn code_content_is_escaped() {
        let html = render_body(&doc(vec![Block::CodeBlock {
            language: None,
            code: "if a < b && c > d {}\n".into(),
        }]));
        assert!(html.contains("a &lt; b &amp;&amp; c &gt; d"));
    }

    #[test]
    fn link_href_keeps_the_file_prefix() {
        let html = render_body(&doc(vec![Block::Paragraph {
            children: vec![Inline::Link {
                path: "file:notes.org".into(),
                kind: LinkKind::File,
                description: Some("notes".into()),
            }],
        }]));
        assert_eq!(html, "<p><a href=\"file:notes.org\">notes</a></p>\n");
    }

    #[test]
    fn link_without_description_has_empty_content() {
        let html = render_body(&doc(vec![Block::Paragraph {
            children: vec![Inline::Link {
                path: "https://x.com".into(),
                kind: LinkKind::Https,
                description: None,
            }],
        }]));
        assert_eq!(html, "<p><a href=\"https://x.com\"></a></p>\n");
    }

    #[test]
    fn image_src_strips_the_file_prefix() {
        let html = render_body(&doc(vec![Block::Paragraph {
            children: vec![Inline::Image {
                path: "file:./cat.png".into(),
                description: Some("ignored".into()),
            }],
        }]));
        assert_eq!(html, "<p><img src=\"./cat.png\"></p>\n");
    }

    #[test]
    fn href_is_attribute_escaped() {
        let html = render_body(&doc(vec![Block::Paragraph {
            children: vec![Inline::Link {
                path: "https://x.com/?a=1&b=\"q\"".into(),
                kind: LinkKind::Https,
                description: None,
            }],
        }]));
        assert!(html.contains("href=\"https://x.com/?a=1&amp;b=&quot;q&quot;\""));
    }

    #[test]
    fn blockquote_wraps_children() {
        let html = render_body(&doc(vec![Block::Blockquote {
            children: vec![
                Inline::Text("a".into()),
                Inline::Text(" ".into()),
                Inline::Text("b".into()),
            ],
        }]));
        assert_eq!(html, "<blockquote>a b</blockquote>\n");
    }

    #[test]
    fn list_items_have_no_trailing_newline_between_them() {
        let html = render_body(&doc(vec![Block::List {
            items: vec![ListItem { text: "a".into() }, ListItem { text: "b".into() }],
        }]));
        assert_eq!(html, "<ul><li>a</li><li>b</li></ul>\n");
    }

    #[test]
    fn rendering_is_idempotent_over_the_same_tree() {
        let tree = doc(vec![
            Block::Heading {
                level: 1,
                text: "H & more".into(),
            },
            Block::Paragraph {
                children: vec![Inline::Text("body".into())],
            },
        ]);
        assert_eq!(render_body(&tree), render_body(&tree));
        assert_eq!(render_document(&tree), render_document(&tree));
    }
}
