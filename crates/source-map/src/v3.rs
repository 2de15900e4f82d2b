//! Encoding into the standard sourcemap v3 format.

use crate::{LineCol, LineIndex, SourceMap};

/// Source name used when the caller has no filename.
pub const DEFAULT_SOURCE_NAME: &str = "<stdin>";

impl SourceMap {
    /// Encodes this map as a v3 sourcemap.
    ///
    /// One token is emitted at the start of every mapping. Verbatim mappings
    /// that span several lines also get a token at each line start they
    /// cover, so consumers can resolve positions anywhere inside copied text.
    /// Columns are counted in UTF-16 code units.
    pub fn to_v3(
        &self,
        generated_text: &str,
        source_name: &str,
        source_text: &str,
    ) -> oxc_sourcemap::SourceMap {
        let generated_index = LineIndex::new(generated_text);
        let source_index = LineIndex::new(source_text);

        let mut builder = oxc_sourcemap::SourceMapBuilder::default();
        let source_id = builder.set_source_and_content(source_name, source_text);

        let mut push = |generated: LineCol, original: LineCol| {
            builder.add_token(
                generated.line,
                generated.col,
                original.line,
                original.col,
                Some(source_id),
                None,
            );
        };

        for mapping in self.mappings() {
            let (Some(generated), Some(original)) = (
                generated_index.line_col_utf16(generated_text, mapping.generated.start),
                source_index.line_col_utf16(source_text, mapping.original.start),
            ) else {
                continue;
            };
            push(generated, original);

            if !mapping.is_verbatim() {
                continue;
            }
            for line_start in
                source_index.line_starts_within(mapping.original.start, mapping.original.end)
            {
                let generated_offset =
                    mapping.generated.start + (line_start - mapping.original.start);
                let (Some(generated), Some(original)) = (
                    generated_index.line_col(generated_offset),
                    source_index.line_col(line_start),
                ) else {
                    continue;
                };
                push(generated, original);
            }
        }

        builder.into_sourcemap()
    }
}
