//! Source map builder for tracking position mappings during emission.

use crate::{ByteOffset, Span};

/// A single correspondence between a generated span and an original span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mapping {
    /// The span in the generated output.
    pub generated: Span,
    /// The span in the original source.
    pub original: Span,
}

impl Mapping {
    /// Returns true if the generated text is a byte-for-byte copy of the
    /// original text, so offsets inside the span translate 1:1.
    #[inline]
    pub fn is_verbatim(&self) -> bool {
        self.generated.len() == self.original.len()
    }
}

/// A finished source map, ordered by generated position.
///
/// Generated and original spans live in two parallel vectors; entry `i` of
/// one corresponds to entry `i` of the other.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceMap {
    generated: Vec<Span>,
    original: Vec<Span>,
}

impl SourceMap {
    /// Creates a new empty source map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of mappings in this source map.
    #[inline]
    pub fn len(&self) -> usize {
        self.generated.len()
    }

    /// Returns true if this source map has no mappings.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.generated.is_empty()
    }

    /// Returns all mappings in emission order.
    pub fn mappings(&self) -> impl Iterator<Item = Mapping> + '_ {
        self.generated
            .iter()
            .zip(&self.original)
            .map(|(&generated, &original)| Mapping {
                generated,
                original,
            })
    }

    /// Finds the original position corresponding to a generated position.
    ///
    /// The position keeps its offset into the mapping while that offset fits
    /// inside the original span, so verbatim mappings translate exactly. Past
    /// the original's length it resolves to the start of the original span.
    /// Returns `None` for synthetic output.
    pub fn original_position(&self, generated: ByteOffset) -> Option<ByteOffset> {
        let idx = self.find_generated(generated)?;
        let (gen, orig) = (self.generated[idx], self.original[idx]);
        let delta = generated - gen.start;
        if delta < orig.len() {
            Some(orig.start + delta)
        } else {
            Some(orig.start)
        }
    }

    /// Finds the first generated position corresponding to an original position.
    ///
    /// Offsets carry over the same way as in [`SourceMap::original_position`].
    /// Returns `None` if no mapping covers the given position.
    pub fn generated_position(&self, original: ByteOffset) -> Option<ByteOffset> {
        // Mappings are ordered by generated offset, so this is a linear scan.
        self.mappings()
            .find(|m| m.original.contains(original))
            .map(|m| {
                let delta = original - m.original.start;
                if delta < m.generated.len() {
                    m.generated.start + delta
                } else {
                    m.generated.start
                }
            })
    }

    /// Index of the mapping whose generated span contains `generated`.
    fn find_generated(&self, generated: ByteOffset) -> Option<usize> {
        // Generated spans are non-empty and never overlap.
        let upper = self.generated.partition_point(|span| span.start <= generated);
        let idx = upper.checked_sub(1)?;
        self.generated[idx].contains(generated).then_some(idx)
    }
}

/// A builder for constructing source maps during emission.
///
/// Every chunk of output must be reported, mapped or not, so the builder's
/// cursor stays in step with the output buffer.
#[derive(Debug, Default)]
pub struct SourceMapBuilder {
    generated: Vec<Span>,
    original: Vec<Span>,
    /// Current position in the generated output.
    generated_offset: ByteOffset,
}

impl SourceMapBuilder {
    /// Creates a new source map builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current generated offset.
    #[inline]
    pub fn generated_offset(&self) -> ByteOffset {
        self.generated_offset
    }

    /// Returns the number of mappings recorded so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.generated.len()
    }

    /// Returns true if nothing has been mapped yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.generated.is_empty()
    }

    /// Adds verbatim source text, creating a 1:1 mapping.
    pub fn add_source(&mut self, original_start: ByteOffset, text: &str) {
        let len = crate::span::offset(text.len());
        self.add_transformed(Span::new(original_start, original_start + len), text);
    }

    /// Adds rewritten text that still originates from `original`.
    ///
    /// The generated and original lengths may differ.
    pub fn add_transformed(&mut self, original: Span, generated_text: &str) {
        let start = self.generated_offset;
        let end = start + crate::span::offset(generated_text.len());
        if start != end {
            self.generated.push(Span::new(start, end));
            self.original.push(original);
        }
        self.generated_offset = end;
    }

    /// Adds generated text without a corresponding original position.
    pub fn add_generated(&mut self, text: &str) {
        self.generated_offset += crate::span::offset(text.len());
    }

    /// Builds the final source map.
    ///
    /// Entries are already in emission order, which is generated order.
    pub fn build(self) -> SourceMap {
        SourceMap {
            generated: self.generated,
            original: self.original,
        }
    }
}
