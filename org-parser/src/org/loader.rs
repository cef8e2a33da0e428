//! Document loading utilities
//!
//! This module provides `DocumentLoader` - a utility for loading source
//! text from files or strings and running the pipeline on it. Reading the
//! source is the only operation in the whole pipeline that can fail;
//! lexing and parsing are total. The file handle is scoped to the load
//! call and closed on both the success and failure paths.
//!
//! # Example
//!
//! ```rust
//! use org_parser::org::loader::DocumentLoader;
//!
//! // From file
//! let doc = DocumentLoader::from_path("post.org").unwrap().parse();
//!
//! // From string
//! let doc = DocumentLoader::from_string("* Hello\n").parse();
//! ```

use crate::org::ast::Document;
use crate::org::lexing::Lexer;
use crate::org::parsing::Parser;
use crate::org::token::Token;
use std::fs;
use std::path::Path;

/// Error that can occur when loading documents
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading the source file
    Io(String),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::Io(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Io(err.to_string())
    }
}

/// Loads source text and runs the lexing/parsing pipeline on it.
#[derive(Debug)]
pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    /// Load from a file path.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoaderError> {
        let source = fs::read_to_string(path)?;
        Ok(Self { source })
    }

    /// Load from an in-memory string.
    pub fn from_string(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Run only the lexer, collecting the finite token sequence (the
    /// terminal sentinel included).
    pub fn tokenize(&self) -> Vec<Token> {
        Lexer::new(&self.source).collect()
    }

    /// Run the full pipeline to a document tree.
    pub fn parse(&self) -> Document {
        Parser::from_source(&self.source).parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::org::token::TokenKind;

    #[test]
    fn missing_file_is_an_io_error() {
        let err = DocumentLoader::from_path("/nonexistent/nowhere.org").unwrap_err();
        assert!(matches!(err, LoaderError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }

    #[test]
    fn tokenize_includes_the_sentinel() {
        let tokens = DocumentLoader::from_string("* H\n").tokenize();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].kind, TokenKind::Heading);
        assert_eq!(tokens[1].kind, TokenKind::EndOfInput);
    }

    #[test]
    fn parse_from_string() {
        let doc = DocumentLoader::from_string("hello").parse();
        assert_eq!(doc.children.len(), 1);
    }
}
