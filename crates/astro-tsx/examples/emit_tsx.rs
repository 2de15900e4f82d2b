//! Prints the TSX generated for an Astro component.
//!
//! ```text
//! RUST_LOG=astro_tsx=trace cargo run -p astro-tsx --example emit_tsx -- src/pages/index.astro [none|external|inline|both]
//! ```
//!
//! Reads the component from stdin when no path is given.

use astro_tsx::{convert, ConvertOptions, SourceMapMode};
use std::io::Read;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().filter(|arg| arg != "-");
    let mode = match args.next() {
        Some(mode) => mode.parse::<SourceMapMode>()?,
        None => SourceMapMode::None,
    };

    let source = match &path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            source
        }
    };

    let mut options = ConvertOptions::new().with_sourcemap(mode);
    if let Some(path) = path {
        options = options.with_filename(path);
    }

    let result = convert(&source, &options)?;
    println!("{}", result.code);
    if let Some(map) = result.map {
        eprintln!("{}", map.to_json_string());
    }
    Ok(())
}
