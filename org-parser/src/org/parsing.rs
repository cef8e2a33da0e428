//! Recursive-descent parser over the line token stream
//!
//!     The parser holds the lexer plus exactly one buffered lookahead
//!     token. Every grammar decision is made on that single token: a
//!     heading or metadata line maps to one node, block delimiters open
//!     an accumulation loop that runs to the matching end marker or to
//!     end of input, and contiguous text lines fold into one paragraph.
//!
//!     The parser is total. Malformed input is never an error: an
//!     unterminated code block or quote simply runs to end of input, and
//!     unknown or bare newline tokens are consumed and discarded.

use crate::org::ast::{Block, Document, Inline, ListItem};
use crate::org::inline::parse_inline;
use crate::org::lexing::Lexer;
use crate::org::text::TextBuffer;
use crate::org::token::{Token, TokenKind};

/// Single-token-lookahead parser.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    peek: Token,
}

impl<'a> Parser<'a> {
    pub fn new(mut lexer: Lexer<'a>) -> Self {
        let peek = lexer.next_token();
        Self { lexer, peek }
    }

    pub fn from_source(source: &'a str) -> Self {
        Self::new(Lexer::new(source))
    }

    fn peek(&self) -> &Token {
        &self.peek
    }

    /// Return the buffered token and refill the lookahead.
    fn advance(&mut self) -> Token {
        std::mem::replace(&mut self.peek, self.lexer.next_token())
    }

    /// Consume the whole token stream into a document tree.
    pub fn parse(&mut self) -> Document {
        let mut children = Vec::new();
        while self.peek().kind != TokenKind::EndOfInput {
            match self.peek().kind {
                TokenKind::Heading => children.push(self.heading()),
                TokenKind::Metadata => children.push(self.metadata()),
                TokenKind::CodeBlockStart => children.push(self.code_block()),
                TokenKind::BlockquoteStart => children.push(self.blockquote()),
                TokenKind::ListItem => children.push(self.list()),
                TokenKind::Text => children.push(self.paragraph()),
                // bare newlines and stray end markers produce no node
                _ => {
                    self.advance();
                }
            }
        }
        Document { children }
    }

    fn heading(&mut self) -> Block {
        let token = self.advance();
        Block::Heading {
            level: token.level,
            text: token.text,
        }
    }

    /// `#+key: value`: key between the `#+` prefix and the first colon,
    /// trimmed of surrounding spaces; value after the colon with leading
    /// spaces trimmed (possibly empty).
    fn metadata(&mut self) -> Block {
        let token = self.advance();
        let raw = token.text.trim_start_matches(' ');
        let raw = raw.strip_prefix("#+").unwrap_or(raw);
        let (key, value) = match raw.split_once(':') {
            Some((key, value)) => (
                key.trim_matches(' ').to_string(),
                value.trim_start_matches(' ').to_string(),
            ),
            // classification guarantees a colon, but stay total
            None => (raw.trim_matches(' ').to_string(), String::new()),
        };
        Block::Metadata { key, value }
    }

    /// Fenced code block. The language is the non-empty remainder after
    /// the first space of the start line. Every following line except
    /// blank ones is captured verbatim with an injected `\n`, until the
    /// end marker or end of input.
    fn code_block(&mut self) -> Block {
        let start = self.advance();
        let language = start
            .text
            .split_once(' ')
            .map(|(_, rest)| rest.trim_start_matches(' '))
            .filter(|language| !language.is_empty())
            .map(str::to_string);

        let mut code = TextBuffer::with_capacity(1024);
        loop {
            let token = self.advance();
            match token.kind {
                TokenKind::CodeBlockEnd | TokenKind::EndOfInput => break,
                TokenKind::Newline => {}
                _ => {
                    code.push_str(&token.text);
                    code.push('\n');
                }
            }
        }

        Block::CodeBlock {
            language,
            code: code.into_string(),
        }
    }

    /// Quote block. Text lines become text children joined by synthetic
    /// single-space children; no inline link scanning happens here.
    fn blockquote(&mut self) -> Block {
        self.advance();

        let mut children: Vec<Inline> = Vec::new();
        loop {
            let token = self.advance();
            match token.kind {
                TokenKind::BlockquoteEnd | TokenKind::EndOfInput => break,
                TokenKind::Text => {
                    if !children.is_empty() {
                        children.push(Inline::Text(" ".to_string()));
                    }
                    children.push(Inline::Text(token.text));
                }
                _ => {}
            }
        }

        Block::Blockquote { children }
    }

    /// A run of list item lines; blank lines inside the run are skipped.
    fn list(&mut self) -> Block {
        let mut items = Vec::new();
        while matches!(self.peek().kind, TokenKind::ListItem | TokenKind::Newline) {
            let token = self.advance();
            if token.kind == TokenKind::ListItem {
                items.push(ListItem {
                    text: strip_list_marker(&token.text).to_string(),
                });
            }
        }
        Block::List { items }
    }

    /// Contiguous text lines joined with single spaces, then inline-parsed.
    fn paragraph(&mut self) -> Block {
        let first = self.advance();
        let mut text = TextBuffer::with_capacity(first.text.len() + 64);
        text.push_str(&first.text);

        while self.peek().kind == TokenKind::Text {
            let token = self.advance();
            if !text.is_empty() {
                text.push(' ');
            }
            text.push_str(&token.text);
        }

        Block::Paragraph {
            children: parse_inline(text.as_str()),
        }
    }
}

/// Strip a list item's leading marker: any run of spaces, `-`, and `.`,
/// then any further spaces. Digit markers (`1.`) are left in place.
fn strip_list_marker(line: &str) -> &str {
    line.trim_start_matches([' ', '-', '.'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::org::ast::LinkKind;

    fn parse(source: &str) -> Document {
        Parser::from_source(source).parse()
    }

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    #[test]
    fn heading_then_paragraph() {
        let doc = parse("* Hello\n\nWorld");
        assert_eq!(
            doc.children,
            vec![
                Block::Heading {
                    level: 1,
                    text: "Hello".to_string()
                },
                Block::Paragraph {
                    children: vec![text("World")]
                },
            ]
        );
    }

    #[test]
    fn metadata_key_and_value_are_trimmed() {
        let doc = parse("#+ title :  My Post");
        assert_eq!(
            doc.children,
            vec![Block::Metadata {
                key: "title".to_string(),
                value: "My Post".to_string(),
            }]
        );
    }

    #[test]
    fn metadata_value_may_be_empty() {
        let doc = parse("#+draft:");
        assert_eq!(
            doc.children,
            vec![Block::Metadata {
                key: "draft".to_string(),
                value: String::new(),
            }]
        );
    }

    #[test]
    fn code_block_with_language() {
        let doc = parse("#+begin_src python\nprint(1)\n#+end_src");
        assert_eq!(
            doc.children,
            vec![Block::CodeBlock {
                language: Some("python".to_string()),
                code: "print(1)\n".to_string(),
            }]
        );
    }

    #[test]
    fn code_block_without_language() {
        let doc = parse("#+begin_src\ncode\n#+end_src");
        assert_eq!(
            doc.children,
            vec![Block::CodeBlock {
                language: None,
                code: "code\n".to_string(),
            }]
        );
    }

    #[test]
    fn code_block_preserves_line_order_and_drops_blanks() {
        let doc = parse("#+begin_src sh\nfirst\n\nsecond\n#+end_src");
        assert_eq!(
            doc.children,
            vec![Block::CodeBlock {
                language: Some("sh".to_string()),
                code: "first\nsecond\n".to_string(),
            }]
        );
    }

    #[test]
    fn unterminated_code_block_runs_to_end_of_input() {
        let doc = parse("#+begin_src c\nint x;\nint y;");
        assert_eq!(
            doc.children,
            vec![Block::CodeBlock {
                language: Some("c".to_string()),
                code: "int x;\nint y;\n".to_string(),
            }]
        );
    }

    #[test]
    fn code_lines_keep_indentation_and_markers() {
        let doc = parse("#+begin_src org\n- raw item\n  indented\n#+k: v\n#+end_src");
        assert_eq!(
            doc.children,
            vec![Block::CodeBlock {
                language: Some("org".to_string()),
                code: "- raw item\n  indented\n#+k: v\n".to_string(),
            }]
        );
    }

    #[test]
    fn blockquote_joins_lines_with_synthetic_spaces() {
        let doc = parse("#+begin_quote\nfirst line\nsecond line\n#+end_quote");
        assert_eq!(
            doc.children,
            vec![Block::Blockquote {
                children: vec![text("first line"), text(" "), text("second line")],
            }]
        );
    }

    #[test]
    fn blockquote_does_not_scan_inline_links() {
        let doc = parse("#+begin_quote\nsee [[https://x.com]]\n#+end_quote");
        assert_eq!(
            doc.children,
            vec![Block::Blockquote {
                children: vec![text("see [[https://x.com]]")],
            }]
        );
    }

    #[test]
    fn unterminated_blockquote_runs_to_end_of_input() {
        let doc = parse("#+begin_quote\nonly line");
        assert_eq!(
            doc.children,
            vec![Block::Blockquote {
                children: vec![text("only line")],
            }]
        );
    }

    #[test]
    fn list_items_lose_their_markers() {
        let doc = parse("- a\n- b\n");
        assert_eq!(
            doc.children,
            vec![Block::List {
                items: vec![
                    ListItem {
                        text: "a".to_string()
                    },
                    ListItem {
                        text: "b".to_string()
                    },
                ],
            }]
        );
    }

    #[test]
    fn list_tolerates_blank_lines_inside() {
        let doc = parse("- a\n\n- b\n\n- c");
        match &doc.children[0] {
            Block::List { items } => {
                assert_eq!(items.len(), 3);
            }
            other => panic!("expected list, got {:?}", other),
        }
        assert_eq!(doc.children.len(), 1);
    }

    #[test]
    fn numbered_items_keep_their_digits() {
        let doc = parse("1. first\n2. second");
        assert_eq!(
            doc.children,
            vec![Block::List {
                items: vec![
                    ListItem {
                        text: "1. first".to_string()
                    },
                    ListItem {
                        text: "2. second".to_string()
                    },
                ],
            }]
        );
    }

    #[test]
    fn list_stops_at_non_list_token() {
        let doc = parse("- a\nplain paragraph");
        assert_eq!(doc.children.len(), 2);
        assert!(matches!(doc.children[0], Block::List { .. }));
        assert!(matches!(doc.children[1], Block::Paragraph { .. }));
    }

    #[test]
    fn paragraph_lines_join_with_single_spaces() {
        let doc = parse("one\ntwo\nthree");
        assert_eq!(
            doc.children,
            vec![Block::Paragraph {
                children: vec![text("one two three")],
            }]
        );
    }

    #[test]
    fn paragraphs_split_on_blank_lines() {
        let doc = parse("one\n\ntwo");
        assert_eq!(doc.children.len(), 2);
    }

    #[test]
    fn paragraph_with_link_and_surrounding_text() {
        let doc = parse("Check [[https://x.com][X]] now");
        assert_eq!(
            doc.children,
            vec![Block::Paragraph {
                children: vec![
                    text("Check "),
                    Inline::Link {
                        path: "https://x.com".to_string(),
                        kind: LinkKind::Https,
                        description: Some("X".to_string()),
                    },
                    text(" now"),
                ],
            }]
        );
    }

    #[test]
    fn link_split_across_joined_lines() {
        // the newline inside the path collapses to a space during joining
        let doc = parse("see [[https://x.com][a\ndescription]] here");
        match &doc.children[0] {
            Block::Paragraph { children } => {
                assert_eq!(
                    children[1],
                    Inline::Link {
                        path: "https://x.com".to_string(),
                        kind: LinkKind::Https,
                        description: Some("a description".to_string()),
                    }
                );
            }
            other => panic!("expected paragraph, got {:?}", other),
        }
    }

    #[test]
    fn empty_input_yields_empty_document() {
        assert_eq!(parse("").children, Vec::new());
    }

    #[test]
    fn blank_lines_alone_yield_no_nodes() {
        assert_eq!(parse("\n\n\n").children, Vec::new());
    }

    #[test]
    fn mixed_document_order_is_preserved() {
        let doc = parse("#+title: T\n* H\npara\n- item\n");
        let kinds: Vec<&str> = doc
            .children
            .iter()
            .map(|block| match block {
                Block::Metadata { .. } => "metadata",
                Block::Heading { .. } => "heading",
                Block::Paragraph { .. } => "paragraph",
                Block::List { .. } => "list",
                Block::CodeBlock { .. } => "code",
                Block::Blockquote { .. } => "quote",
            })
            .collect();
        assert_eq!(kinds, vec!["metadata", "heading", "paragraph", "list"]);
    }
}
