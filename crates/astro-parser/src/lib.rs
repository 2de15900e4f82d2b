//! Astro component parser for astro-tsx.
//!
//! This crate provides an error-tolerant parser for `.astro` components:
//! - Lexer (tokenizer) using `logos`
//! - Frontmatter detection
//! - Recursive descent parser for the markup body
//! - AST types with byte spans into the source
//!
//! Malformed markup never stops the parser. Unclosed tags, stray closing
//! tags and unterminated expressions are reported in
//! [`ParseResult::errors`] while the tree keeps the partial nodes.
//!
//! # Example
//!
//! ```
//! use astro_parser::parse;
//!
//! let source = r#"---
//! const greeting = "hello";
//! ---
//! <h1 class="title">{greeting}</h1>
//! "#;
//!
//! let result = parse(source).unwrap();
//! assert!(result.document.frontmatter.is_some());
//! assert!(result.errors.is_empty());
//! ```

mod ast;
mod error;
mod lexer;
mod parser;
mod scan;

pub use ast::*;
pub use error::{ParseError, ParseErrorKind};
pub use lexer::{Lexer, Token, TokenKind};
pub use source_map::Span;

/// Options for parsing Astro files.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Whether to emit `trace` events for every parsed node.
    pub trace: bool,
}

/// The result of parsing an Astro file.
#[derive(Debug)]
pub struct ParseResult {
    /// The parsed document.
    pub document: AstroDocument,
    /// Errors recovered from during parsing.
    pub errors: Vec<ParseError>,
}

/// Parses an Astro source file into an AST.
///
/// Recoverable problems are collected in [`ParseResult::errors`]. The only
/// failure is a source too large for 32-bit offsets.
pub fn parse(source: &str) -> Result<ParseResult, ParseError> {
    parse_with_options(source, ParseOptions::default())
}

/// Parses an Astro source file with custom options.
pub fn parse_with_options(source: &str, options: ParseOptions) -> Result<ParseResult, ParseError> {
    if u32::try_from(source.len()).is_err() {
        return Err(ParseError::new(
            ParseErrorKind::SourceTooLarge { len: source.len() },
            Span::default(),
        ));
    }
    Ok(parser::Parser::new(source, options).parse())
}
