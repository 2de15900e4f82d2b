//! Byte spans into component source and generated code.

use text_size::TextSize;

/// A byte position in either the component source or the generated TSX.
pub type ByteOffset = TextSize;

/// A half-open byte range `[start, end)`.
///
/// Spans are plain positions and do not borrow the text they index, so the
/// same span type serves the parser's tree and both sides of a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Span {
    /// First byte of the range.
    pub start: ByteOffset,
    /// One past the last byte of the range.
    pub end: ByteOffset,
}

impl Span {
    #[inline]
    pub fn new(start: impl Into<ByteOffset>, end: impl Into<ByteOffset>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Builds a span from slice indices.
    ///
    /// Indices past `u32::MAX` saturate; the parser rejects such inputs
    /// before any span is built.
    #[inline]
    pub fn from_usize(start: usize, end: usize) -> Self {
        Self::new(offset(start), offset(end))
    }

    /// A zero-width span at `at`.
    #[inline]
    pub fn empty(at: impl Into<ByteOffset>) -> Self {
        let at = at.into();
        Self::new(at, at)
    }

    #[inline]
    pub fn len(&self) -> ByteOffset {
        self.end - self.start
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether `at` falls inside the span. The end is exclusive.
    #[inline]
    pub fn contains(&self, at: ByteOffset) -> bool {
        (self.start..self.end).contains(&at)
    }

    #[inline]
    pub fn start_usize(&self) -> usize {
        u32::from(self.start) as usize
    }

    #[inline]
    pub fn end_usize(&self) -> usize {
        u32::from(self.end) as usize
    }

    /// The text under this span.
    ///
    /// Yields `""` rather than panicking when the span runs past the text or
    /// splits a multi-byte character, which can happen while an editor is
    /// mid-edit and spans from an older parse are still around.
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        text.get(self.start_usize()..self.end_usize()).unwrap_or("")
    }
}

/// Converts a slice index to a [`ByteOffset`], saturating at `u32::MAX`.
#[inline]
pub fn offset(index: usize) -> ByteOffset {
    TextSize::from(u32::try_from(index).unwrap_or(u32::MAX))
}
