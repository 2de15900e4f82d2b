//! Astro markup lexer using logos.
//!
//! Only the punctuation that shapes tags is tokenized. Text, attribute
//! values and expressions are read straight from the source by the parser,
//! which restarts the lexer wherever it needs the next token.

use logos::Logos;
use source_map::Span;

/// A token produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The span of the token in the source.
    pub span: Span,
}

/// Token kinds for Astro markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Logos, Default)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    /// `<`
    #[token("<")]
    LAngle,

    /// `</`
    #[token("</")]
    LAngleSlash,

    /// `<!`
    #[token("<!")]
    LAngleBang,

    /// `<!--`
    #[token("<!--")]
    CommentOpen,

    /// `>`
    #[token(">")]
    RAngle,

    /// `/>`
    #[token("/>")]
    SlashRAngle,

    /// `=`
    #[token("=")]
    Eq,

    /// `{`
    #[token("{")]
    LBrace,

    /// Newline
    #[token("\n")]
    Newline,

    /// A tag or attribute name. Anything up to whitespace or markup
    /// punctuation, so `@click`, `x-on:keyup.shift.enter` and `myMarkdown.`
    /// each lex as one name.
    #[regex(r#"[^\s"'`<>/=\{\}]+"#)]
    Name,

    /// End of file
    Eof,

    /// Invalid/unknown token
    #[default]
    Error,
}

impl TokenKind {
    /// Returns true if this token begins markup (a tag, comment or doctype).
    pub fn starts_markup(&self) -> bool {
        matches!(
            self,
            TokenKind::LAngle
                | TokenKind::LAngleSlash
                | TokenKind::LAngleBang
                | TokenKind::CommentOpen
        )
    }
}

/// A lexer for Astro source code.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
    source: &'src str,
    /// Absolute offset of the start of `inner`'s input.
    base: usize,
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    pub fn new(source: &'src str) -> Self {
        Self::at(source, 0)
    }

    /// Creates a lexer that starts at `offset`, reporting absolute spans.
    ///
    /// An offset past the end or off a character boundary yields only `Eof`.
    pub fn at(source: &'src str, offset: usize) -> Self {
        let (rest, base) = match source.get(offset..) {
            Some(rest) => (rest, offset),
            None => ("", source.len()),
        };
        Self {
            inner: TokenKind::lexer(rest),
            source,
            base,
            finished: false,
        }
    }

    fn span(&self) -> Span {
        let range = self.inner.span();
        Span::from_usize(self.base + range.start, self.base + range.end)
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.inner.next() {
            Some(Ok(kind)) => Some(Token {
                kind,
                span: self.span(),
            }),
            Some(Err(())) => Some(Token {
                kind: TokenKind::Error,
                span: self.span(),
            }),
            None => {
                self.finished = true;
                Some(Token {
                    kind: TokenKind::Eof,
                    span: Span::empty(source_map::offset(self.source.len())),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokenize(source: &str) -> Vec<TokenKind> {
        Lexer::new(source)
            .map(|t| t.kind)
            .filter(|k| *k != TokenKind::Eof)
            .collect()
    }

    #[test]
    fn test_simple_tag() {
        assert_eq!(
            tokenize("<div>"),
            vec![TokenKind::LAngle, TokenKind::Name, TokenKind::RAngle]
        );
    }

    #[test]
    fn test_self_closing_tag() {
        assert_eq!(
            tokenize("<br/>"),
            vec![TokenKind::LAngle, TokenKind::Name, TokenKind::SlashRAngle]
        );
    }

    #[test]
    fn test_closing_tag() {
        assert_eq!(
            tokenize("</div>"),
            vec![TokenKind::LAngleSlash, TokenKind::Name, TokenKind::RAngle]
        );
    }

    #[test]
    fn test_comment_and_doctype() {
        assert_eq!(tokenize("<!-- x -->")[0], TokenKind::CommentOpen);
        assert_eq!(tokenize("<!DOCTYPE html>")[0], TokenKind::LAngleBang);
    }

    #[test]
    fn test_attribute_names_lex_whole() {
        let source = "<div @click x-on:keyup.shift.enter :class 丽dfds_fsfdsfs>";
        let names: Vec<_> = Lexer::new(source)
            .filter(|t| t.kind == TokenKind::Name)
            .map(|t| t.span.slice(source))
            .collect();
        assert_eq!(
            names,
            vec!["div", "@click", "x-on:keyup.shift.enter", ":class", "丽dfds_fsfdsfs"]
        );
    }

    #[test]
    fn test_attribute_with_value() {
        assert_eq!(
            tokenize("name=value"),
            vec![TokenKind::Name, TokenKind::Eq, TokenKind::Name]
        );
    }

    #[test]
    fn test_value_punctuation_is_not_tokenized() {
        // quotes and closing braces are read by the parser, not the lexer
        assert_eq!(tokenize("\""), vec![TokenKind::Error]);
        assert_eq!(tokenize("}"), vec![TokenKind::Error]);
    }

    #[test]
    fn test_lexer_at_offset() {
        let source = "<p>hi</p>";
        let token = Lexer::at(source, 5).next().unwrap();
        assert_eq!(token.kind, TokenKind::LAngleSlash);
        assert_eq!(token.span, Span::from_usize(5, 7));
    }

    #[test]
    fn test_eof_span() {
        let tokens: Vec<_> = Lexer::new("<a").collect();
        let eof = tokens.last().unwrap();
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!(eof.span, Span::from_usize(2, 2));
        assert_eq!(Lexer::at("<a", 99).next().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn test_skips_whitespace() {
        assert_eq!(tokenize("  \t<"), vec![TokenKind::LAngle]);
    }
}
