//! # org-parser
//!
//! A parser for a line-oriented subset of the org markup format.
//!
//! The pipeline is pull-based and total: a [Lexer](org::lexing::Lexer)
//! classifies one physical line per call into a token, a single-lookahead
//! recursive-descent [Parser](org::parsing::Parser) builds an owned
//! [Document](org::ast::Document) tree, and any input, however malformed,
//! yields some tree. Unterminated blocks run to end of input; stray inline
//! markers degrade to literal text. Only loading a source from disk can
//! fail, and that failure belongs to the [loader](org::loader).
//!
//! Rendering the tree lives in a separate crate (`org-html`) so that other
//! consumers (templating, feed assembly, index extraction) can walk the
//! same tree without pulling in HTML concerns.

pub mod org;

pub use org::ast::{Block, Document, Inline, LinkKind, ListItem};
pub use org::lexing::Lexer;
pub use org::loader::{DocumentLoader, LoaderError};
pub use org::parsing::Parser;
pub use org::text::TextBuffer;
pub use org::token::{Token, TokenKind};

/// Parse a full source string into a document tree.
///
/// This is the one-call entry point; it cannot fail.
pub fn parse_str(source: &str) -> Document {
    Parser::from_source(source).parse()
}
