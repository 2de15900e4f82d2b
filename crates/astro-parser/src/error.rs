//! Parse error types.

use source_map::Span;
use thiserror::Error;

/// An error that occurred during parsing.
#[derive(Debug, Clone, Error)]
#[error("{kind}")]
pub struct ParseError {
    /// The kind of error.
    pub kind: ParseErrorKind,
    /// The location in the source where the error occurred.
    pub span: Span,
}

impl ParseError {
    /// Creates a new parse error.
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns true if no tree can be produced for this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self.kind, ParseErrorKind::SourceTooLarge { .. })
    }
}

/// The kind of parse error.
#[derive(Debug, Clone, Error)]
pub enum ParseErrorKind {
    /// An element was never closed.
    #[error("unclosed tag: <{tag_name}>")]
    UnclosedTag {
        /// The name of the unclosed element.
        tag_name: String,
    },

    /// A start tag reached the end of its input before `>`.
    #[error("unclosed start tag: <{tag_name}")]
    UnclosedStartTag {
        /// The name of the element.
        tag_name: String,
    },

    /// A closing tag did not match the open element.
    #[error("mismatched closing tag: expected </{expected}>, found </{found}>")]
    MismatchedClosingTag {
        /// The expected tag name.
        expected: String,
        /// The found tag name.
        found: String,
    },

    /// A closing tag with no open element.
    #[error("unexpected closing tag: </{tag_name}>")]
    StrayClosingTag {
        /// The name in the closing tag.
        tag_name: String,
    },

    /// An expression `{...}` was never closed.
    #[error("unclosed expression")]
    UnclosedExpression,

    /// A comment `<!--` was never closed.
    #[error("unclosed comment")]
    UnclosedComment,

    /// An opening `---` fence without a closing one.
    #[error("unclosed frontmatter")]
    UnclosedFrontmatter,

    /// The source does not fit in 32-bit offsets.
    #[error("source is too large: {len} bytes")]
    SourceTooLarge {
        /// The source length in bytes.
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use text_size::TextSize;

    #[test]
    fn test_error_display() {
        let error = ParseError::new(
            ParseErrorKind::MismatchedClosingTag {
                expected: "div".to_string(),
                found: "span".to_string(),
            },
            Span::new(TextSize::from(0), TextSize::from(7)),
        );
        assert_eq!(
            error.to_string(),
            "mismatched closing tag: expected </div>, found </span>"
        );
        assert!(!error.is_fatal());
    }

    #[test]
    fn test_unclosed_start_tag_display() {
        let error = ParseError::new(
            ParseErrorKind::UnclosedStartTag {
                tag_name: "components.".to_string(),
            },
            Span::new(TextSize::from(0), TextSize::from(12)),
        );
        assert_eq!(error.to_string(), "unclosed start tag: <components.");
    }
}
