//! Output buffer that records a source mapping for every chunk it appends.

use source_map::{SourceMap, SourceMapBuilder, Span};

/// Append-only TSX output paired with its position mapping.
///
/// Every write goes through one of three methods, so the mapping cursor can
/// never drift from the length of the generated text.
pub(crate) struct Emitter<'src> {
    source: &'src str,
    code: String,
    map: SourceMapBuilder,
}

impl<'src> Emitter<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            source,
            code: String::with_capacity(source.len() + source.len() / 4 + 128),
            map: SourceMapBuilder::new(),
        }
    }

    /// Returns the source text covered by `span`.
    pub(crate) fn text(&self, span: Span) -> &'src str {
        span.slice(self.source)
    }

    /// Copies the source text covered by `span` verbatim.
    pub(crate) fn source(&mut self, span: Span) {
        let text = span.slice(self.source);
        self.code.push_str(text);
        self.map.add_source(span.start, text);
    }

    /// Appends rewritten text that originates from `span`.
    pub(crate) fn transformed(&mut self, span: Span, text: &str) {
        self.code.push_str(text);
        self.map.add_transformed(span, text);
    }

    /// Appends synthetic text with no origin in the source.
    pub(crate) fn generated(&mut self, text: &str) {
        self.code.push_str(text);
        self.map.add_generated(text);
    }

    pub(crate) fn finish(self) -> (String, SourceMap) {
        (self.code, self.map.build())
    }
}
