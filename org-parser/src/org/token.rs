//! Token types produced by the line lexer
//!
//!     The grammar is line-oriented: one physical source line becomes
//!     exactly one token, and the token kind is decided by a priority
//!     ordered classification of that line (see
//!     [classify](crate::org::lexing) for the ordering). There is no
//!     intra-line tokenization at this stage; inline constructs inside
//!     paragraph text are handled later by the parser's inline scanner.

use std::fmt;

/// The classified kind of one physical source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TokenKind {
    /// Terminal sentinel; returned forever once the source is exhausted.
    EndOfInput,
    /// A `*`-run heading line (run length 1-6).
    Heading,
    /// A `#+key: value` line.
    Metadata,
    /// Any line not matching a more specific rule.
    Text,
    /// A line starting with `#+begin_src`.
    CodeBlockStart,
    /// A line starting with `#+end_src`.
    CodeBlockEnd,
    /// A line starting with `#+begin_quote`.
    BlockquoteStart,
    /// A line starting with `#+end_quote`.
    BlockquoteEnd,
    /// A line whose first non-space character is `-` or a digit.
    ListItem,
    /// An empty line.
    Newline,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::EndOfInput => "end-of-input",
            TokenKind::Heading => "heading",
            TokenKind::Metadata => "metadata",
            TokenKind::Text => "text",
            TokenKind::CodeBlockStart => "code-block-start",
            TokenKind::CodeBlockEnd => "code-block-end",
            TokenKind::BlockquoteStart => "blockquote-start",
            TokenKind::BlockquoteEnd => "blockquote-end",
            TokenKind::ListItem => "list-item",
            TokenKind::Newline => "newline",
        };
        f.write_str(name)
    }
}

/// One classified source line.
///
/// `text` carries the payload the parser needs: the heading title for
/// headings, the raw line for metadata/list/text lines, and the full
/// marker line for block delimiters (the parser extracts the code block
/// language from it). `level` is meaningful only for headings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub level: u8,
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            level: 0,
            line,
        }
    }

    pub fn heading(level: u8, text: impl Into<String>, line: u32) -> Self {
        Self {
            kind: TokenKind::Heading,
            text: text.into(),
            level,
            line,
        }
    }

    pub fn end_of_input(line: u32) -> Self {
        Self::new(TokenKind::EndOfInput, "", line)
    }
}
