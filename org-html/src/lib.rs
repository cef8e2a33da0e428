//! HTML serialization (org tree → HTML fragment)
//!
//!     Converts a parsed [Document](org_parser::Document) into an escaped
//!     HTML body fragment: no doctype, no head, no body wrapper. The
//!     consumer (a templating layer) embeds the fragment into a page
//!     shell; metadata interpretation and index assembly stay outside.
//!
//!     Serialization is a pure function of the tree: rendering the same
//!     unmodified tree twice yields byte-identical output. It cannot
//!     fail; every tree renders to some string.
//!
//!     The file structure:
//!     .
//!     ├── escape.rs      # the escaping table
//!     ├── serializer.rs  # one case per node variant
//!     └── lib.rs

pub mod escape;
pub mod serializer;

pub use escape::{escape, escape_into};
pub use serializer::{render_body, render_document};

use org_parser::parse_str;

/// One-call conversion: parse a source string and render the body
/// fragment (document-level metadata excluded).
pub fn org_to_html(source: &str) -> String {
    render_body(&parse_str(source))
}
