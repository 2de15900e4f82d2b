//! Main conversion logic.

use crate::component::{component_name_from_path, export_declaration};
use crate::emitter::Emitter;
use crate::error::ConvertError;
use crate::frontmatter::emit_frontmatter;
use crate::markup::emit_nodes;
use crate::options::ConvertOptions;
use astro_parser::{AstroDocument, TemplateNode};
use source_map::{ByteOffset, Mapping, SourceMap, Span, DEFAULT_SOURCE_NAME};

/// Opens the wrapper that lets sibling root nodes form one expression.
const WRAPPER_OPEN: &str = "<Fragment>\n";
const WRAPPER_CLOSE: &str = "\n</Fragment>\n";
/// Keeps the wrapper from continuing an unterminated frontmatter statement.
const DISAMBIGUATOR: &str = "\"\";";

/// Result of converting a component.
#[derive(Debug)]
pub struct ConvertResult {
    /// The generated TSX code.
    pub code: String,
    /// The position mapping, when the sourcemap mode returns one.
    pub map: Option<SourceMapArtifact>,
}

/// The position mapping of one conversion.
///
/// Carries both the exact byte-level correspondences and their encoding as
/// a standard v3 sourcemap.
#[derive(Debug)]
pub struct SourceMapArtifact {
    map: SourceMap,
    v3: oxc_sourcemap::SourceMap,
}

impl SourceMapArtifact {
    fn new(map: SourceMap, code: &str, source_name: &str, source: &str) -> Self {
        let v3 = map.to_v3(code, source_name, source);
        Self { map, v3 }
    }

    /// Returns the byte-level mapping.
    pub fn source_map(&self) -> &SourceMap {
        &self.map
    }

    /// Returns the correspondences in emission order.
    pub fn mappings(&self) -> impl Iterator<Item = Mapping> + '_ {
        self.map.mappings()
    }

    /// Maps a byte offset in the generated code back to the source.
    pub fn original_position(&self, generated: ByteOffset) -> Option<ByteOffset> {
        self.map.original_position(generated)
    }

    /// Maps a byte offset in the source to the generated code.
    pub fn generated_position(&self, original: ByteOffset) -> Option<ByteOffset> {
        self.map.generated_position(original)
    }

    /// Returns the v3 sourcemap.
    pub fn v3(&self) -> &oxc_sourcemap::SourceMap {
        &self.v3
    }

    /// Serializes the v3 sourcemap to JSON.
    pub fn to_json_string(&self) -> String {
        self.v3.to_json_string()
    }

    /// Serializes the v3 sourcemap to a base64 `data:` URL.
    pub fn to_data_url(&self) -> String {
        self.v3.to_data_url()
    }
}

/// Parses and converts an Astro component to TSX.
///
/// Recoverable parse errors never fail the conversion; the affected markup
/// is passed through as written.
pub fn convert(source: &str, options: &ConvertOptions) -> Result<ConvertResult, ConvertError> {
    let parsed = astro_parser::parse(source)?;
    for error in &parsed.errors {
        tracing::trace!(
            start = u32::from(error.span.start),
            end = u32::from(error.span.end),
            %error,
            "recovered from parse error"
        );
    }
    Ok(convert_document(&parsed.document, source, options))
}

/// Converts an already parsed document.
///
/// `source` must be the text `doc` was parsed from.
pub fn convert_document(doc: &AstroDocument, source: &str, options: &ConvertOptions) -> ConvertResult {
    let mut out = Emitter::new(source);

    let disambiguate = doc
        .frontmatter
        .as_ref()
        .is_some_and(|frontmatter| emit_frontmatter(&mut out, frontmatter));

    // Leading whitespace stays outside the wrapper.
    let fragment = &doc.fragment;
    let leading = fragment
        .nodes
        .iter()
        .take_while(|node| matches!(node, TemplateNode::Text(text) if text.is_whitespace))
        .count();
    let body_start = fragment.nodes[..leading]
        .last()
        .map_or(fragment.span.start, |node| node.span().end);
    out.source(Span::new(fragment.span.start, body_start));

    if disambiguate {
        out.generated(DISAMBIGUATOR);
    }
    out.generated(WRAPPER_OPEN);
    emit_nodes(&mut out, &fragment.nodes[leading..], body_start, fragment.span.end);
    out.generated(WRAPPER_CLOSE);

    let component_name = options
        .filename
        .as_deref()
        .map(component_name_from_path)
        .unwrap_or_default();
    out.generated(&export_declaration(&component_name));

    let (mut code, map) = out.finish();

    tracing::debug!(
        input_len = source.len(),
        has_frontmatter = doc.frontmatter.is_some(),
        disambiguated = disambiguate,
        mappings = map.len(),
        "converted component"
    );

    if !options.sourcemap.is_enabled() {
        return ConvertResult { code, map: None };
    }

    let source_name = options.filename.as_deref().unwrap_or(DEFAULT_SOURCE_NAME);
    let artifact = SourceMapArtifact::new(map, &code, source_name, source);
    if options.sourcemap.embeds_map() {
        code.push_str("\n//# sourceMappingURL=");
        code.push_str(&artifact.to_data_url());
    }

    ConvertResult {
        code,
        map: options.sourcemap.returns_map().then_some(artifact),
    }
}
