//! AST definitions for the org markup subset
//!
//!     The tree is a plain owned hierarchy: a [Document] owns an ordered
//!     sequence of [Block]s, and the two block kinds with inline content
//!     (paragraphs and blockquotes) own ordered sequences of [Inline]s.
//!     Ownership is exclusively parent-to-child, which keeps the tree
//!     acyclic by construction; there are no back-references.
//!
//! Typed containers
//!
//!     Each node variant carries only its relevant payload: only headings
//!     have a level, only metadata has a key, only code blocks have a
//!     language. Lists hold [ListItem]s rather than general nodes because
//!     this grammar never nests content under an item, and paragraph
//!     children are [Inline]s, so invalid nesting (a list inside a link,
//!     a heading inside a paragraph) is unrepresentable.
//!
//! Lifecycle
//!
//!     A document is built once per parse, handed complete and immutable
//!     to the renderer, and dropped as a whole afterwards. Nothing is
//!     shared across documents.

/// Root of a parsed document.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Document {
    pub children: Vec<Block>,
}

impl Document {
    /// Top-level metadata nodes as `(key, value)` pairs, in source order.
    ///
    /// Metadata interpretation (title, date, tags) belongs to the
    /// consumer; the tree only exposes the pairs.
    pub fn metadata(&self) -> impl Iterator<Item = (&str, &str)> {
        self.children.iter().filter_map(|block| match block {
            Block::Metadata { key, value } => Some((key.as_str(), value.as_str())),
            _ => None,
        })
    }

    /// Heading nodes as `(level, text)` pairs, in source order.
    ///
    /// Table-of-contents assembly walks this same sequence, so anchor
    /// derivation stays consistent with the rendered body.
    pub fn headings(&self) -> impl Iterator<Item = (u8, &str)> {
        self.children.iter().filter_map(|block| match block {
            Block::Heading { level, text } => Some((*level, text.as_str())),
            _ => None,
        })
    }
}

/// A block-level node: one direct child of the document.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Block {
    /// A heading line; `level` is the star-run length (1-6).
    Heading { level: u8, text: String },
    /// A `#+key: value` line.
    Metadata { key: String, value: String },
    /// One or more contiguous text lines, inline-parsed.
    Paragraph { children: Vec<Inline> },
    /// A fenced `#+begin_src` block, captured verbatim.
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    /// A `#+begin_quote` block. Quote bodies are plain text lines and are
    /// deliberately not run through inline link scanning.
    Blockquote { children: Vec<Inline> },
    /// A run of list item lines.
    List { items: Vec<ListItem> },
}

/// A single list item; the text has its leading marker stripped.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ListItem {
    pub text: String,
}

/// An inline node inside paragraph or blockquote content.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Inline {
    /// A literal text run.
    Text(String),
    /// A `[[path][description]]` link.
    Link {
        path: String,
        kind: LinkKind,
        description: Option<String>,
    },
    /// A `[[path]]` whose target is a local image file.
    Image {
        path: String,
        description: Option<String>,
    },
}

/// Classification of a link path, decided in priority order.
///
/// The kind is kept on the node so downstream consumers (site assembly,
/// id resolution) can act on it; the renderer itself only distinguishes
/// links from images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LinkKind {
    Https,
    Http,
    File,
    Id,
    CustomId,
    Fuzzy,
}

impl LinkKind {
    /// Classify a trimmed link path. First match wins.
    pub fn classify(path: &str) -> LinkKind {
        if path.starts_with("https:") {
            LinkKind::Https
        } else if path.starts_with("http:") {
            LinkKind::Http
        } else if path.starts_with("file:") {
            LinkKind::File
        } else if path.starts_with("id:") {
            LinkKind::Id
        } else if path.starts_with('#') {
            LinkKind::CustomId
        } else if path.starts_with(['/', '.', '~']) {
            LinkKind::File
        } else {
            LinkKind::Fuzzy
        }
    }
}
