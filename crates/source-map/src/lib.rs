//! Source position tracking for template-to-TSX conversion.
//!
//! Records which spans of the generated TSX came from which spans of the
//! original component source, and encodes that record as a v3 sourcemap.

mod builder;
mod line_index;
mod span;
mod v3;

pub use builder::{Mapping, SourceMap, SourceMapBuilder};
pub use line_index::{LineCol, LineIndex};
pub use span::{offset, ByteOffset, Span};
pub use v3::DEFAULT_SOURCE_NAME;
