//! Line lexer
//!
//!     Pulls one physical line per call from the source and classifies it
//!     into a single [Token]. The lexer is stateless across calls apart
//!     from the line cursor and line counter, and it is total: once the
//!     source is exhausted, every further call returns the
//!     [EndOfInput](TokenKind::EndOfInput) sentinel.
//!
//! Line discipline
//!
//!     A line ends at `\n` (stripped), and one trailing `\r` is stripped
//!     after that, so CRLF sources lex identically to LF sources. A final
//!     line without a terminator still counts as a line; an empty source
//!     produces no lines at all.
//!
//! Classification order
//!
//!     First match wins: blank, heading, code block start/end, blockquote
//!     start/end, metadata, list item, plain text. The order matters:
//!     `#+begin_src` lines would otherwise also satisfy the metadata rule
//!     whenever a language parameter contains a colon.

use crate::org::token::{Token, TokenKind};

/// Pull-based lexer over a borrowed source string.
///
/// Also usable as an `Iterator<Item = Token>`: the iterator yields the
/// `EndOfInput` sentinel exactly once and is fused afterwards, giving a
/// lazy, finite, non-restartable token sequence.
pub struct Lexer<'a> {
    lines: std::str::SplitInclusive<'a, char>,
    line: u32,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            lines: source.split_inclusive('\n'),
            line: 0,
            finished: false,
        }
    }

    /// Current 1-based line number (0 before the first line is read).
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Read and classify the next physical line.
    ///
    /// Callable indefinitely; after exhaustion every call returns
    /// `EndOfInput`.
    pub fn next_token(&mut self) -> Token {
        let Some(raw) = self.lines.next() else {
            return Token::end_of_input(self.line);
        };
        self.line += 1;

        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);

        if line.is_empty() {
            return Token::new(TokenKind::Newline, "", self.line);
        }

        if let Some(level) = heading_level(line) {
            let text = heading_text(line, level);
            return Token::heading(level, text, self.line);
        }

        let kind = if line.starts_with("#+begin_src") {
            TokenKind::CodeBlockStart
        } else if line.starts_with("#+end_src") {
            TokenKind::CodeBlockEnd
        } else if line.starts_with("#+begin_quote") {
            TokenKind::BlockquoteStart
        } else if line.starts_with("#+end_quote") {
            TokenKind::BlockquoteEnd
        } else if is_metadata(line) {
            TokenKind::Metadata
        } else if is_list_item(line) {
            TokenKind::ListItem
        } else {
            TokenKind::Text
        };

        Token::new(kind, line, self.line)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.kind == TokenKind::EndOfInput {
            self.finished = true;
        }
        Some(token)
    }
}

/// Heading: a run of 1-6 `*` followed by a space or end of line.
fn heading_level(line: &str) -> Option<u8> {
    let stars = line.bytes().take_while(|&b| b == b'*').count();
    if stars == 0 || stars > 6 {
        return None;
    }
    match line.as_bytes().get(stars) {
        None | Some(b' ') => Some(stars as u8),
        Some(_) => None,
    }
}

/// Title text after the star run and one separating space.
///
/// A bare star run (`"**"`) has no title and yields the empty string.
fn heading_text(line: &str, level: u8) -> &str {
    let stars = level as usize;
    if stars == line.len() {
        ""
    } else {
        &line[stars + 1..]
    }
}

/// Metadata: `#+` prefix with a colon somewhere in the line.
fn is_metadata(line: &str) -> bool {
    line.len() > 2 && line.starts_with("#+") && line.contains(':')
}

/// List item: first non-space character is `-` or an ASCII digit.
fn is_list_item(line: &str) -> bool {
    match line.trim_start_matches(' ').as_bytes().first() {
        Some(&b) => b == b'-' || b.is_ascii_digit(),
        None => false,
    }
}
