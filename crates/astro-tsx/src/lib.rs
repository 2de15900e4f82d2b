//! Astro to TSX conversion for type-checking.
//!
//! This crate turns an Astro component into TypeScript JSX that a standard
//! type checker can analyze, together with a mapping from generated
//! positions back to the component source. It handles:
//! - Emitting the frontmatter script verbatim
//! - Wrapping the markup in a single `<Fragment>` root
//! - Rewriting attributes that are not valid JSX
//! - Appending a default export that anchors the component
//!
//! Malformed markup never fails a conversion; it is passed through as
//! written so editors can keep checking half-typed files.
//!
//! # Example
//!
//! ```
//! use astro_tsx::{convert, ConvertOptions, SourceMapMode};
//!
//! let source = r#"---
//! const { title } = Astro.props;
//! ---
//!
//! <h1 {title} @click={() => {}}>{title}</h1>
//! "#;
//!
//! let options = ConvertOptions::new()
//!     .with_filename("src/components/Card.astro")
//!     .with_sourcemap(SourceMapMode::External);
//! let result = convert(source, &options).unwrap();
//!
//! assert!(result.code.contains(r#"<h1 title={title} {...{"@click":(() => {})}}>"#));
//! assert!(result.code.ends_with("export default function Card__AstroComponent_(_props: Record<string, any>): any {}"));
//! assert!(result.map.is_some());
//! ```

mod attributes;
mod component;
mod emitter;
mod error;
mod frontmatter;
mod identifier;
mod markup;
mod options;
mod transform;

pub use component::{component_name_from_path, COMPONENT_SUFFIX};
pub use error::ConvertError;
pub use identifier::{classify_attribute_name, NameClass};
pub use options::{ConvertOptions, SourceMapMode, UnknownSourceMapMode};
pub use transform::{convert, convert_document, ConvertResult, SourceMapArtifact};
