//! Conversion options.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How the source map is delivered with the generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum SourceMapMode {
    /// No source map.
    #[default]
    None,
    /// Returned alongside the code.
    External,
    /// Appended to the code as a `sourceMappingURL` data URL comment.
    Inline,
    /// Both returned and appended.
    Both,
}

impl SourceMapMode {
    /// Returns the option string for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            SourceMapMode::None => "none",
            SourceMapMode::External => "external",
            SourceMapMode::Inline => "inline",
            SourceMapMode::Both => "both",
        }
    }

    /// Returns true if a source map is produced at all.
    pub fn is_enabled(self) -> bool {
        self != SourceMapMode::None
    }

    /// Returns true if the map is handed back to the caller.
    pub fn returns_map(self) -> bool {
        matches!(self, SourceMapMode::External | SourceMapMode::Both)
    }

    /// Returns true if the map is embedded in the code.
    pub fn embeds_map(self) -> bool {
        matches!(self, SourceMapMode::Inline | SourceMapMode::Both)
    }
}

impl fmt::Display for SourceMapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown source map mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sourcemap mode `{0}`, expected one of: none, external, inline, both")]
pub struct UnknownSourceMapMode(pub String);

impl FromStr for SourceMapMode {
    type Err = UnknownSourceMapMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(SourceMapMode::None),
            "external" => Ok(SourceMapMode::External),
            "inline" => Ok(SourceMapMode::Inline),
            "both" => Ok(SourceMapMode::Both),
            other => Err(UnknownSourceMapMode(other.to_string())),
        }
    }
}

/// Options for converting a component to TSX.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ConvertOptions {
    /// Path of the component. Names the generated component function and
    /// the source in the source map.
    pub filename: Option<String>,
    /// Source map delivery.
    pub sourcemap: SourceMapMode,
}

impl ConvertOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filename.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Set the source map delivery mode.
    #[must_use]
    pub fn with_sourcemap(mut self, mode: SourceMapMode) -> Self {
        self.sourcemap = mode;
        self
    }
}
