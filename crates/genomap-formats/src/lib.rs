pub mod detect;
pub mod genbank;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Malformed header: {0}")]
    MalformedHeader(String),
    #[error("No SOURCE section with an organism name found")]
    MissingSourceSection,
    #[error("Malformed feature at line {line}: {reason}")]
    MalformedFeature { line: usize, reason: String },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    GenBank,
    Unknown,
}

/// What to do with a gene whose location is not a plain or complemented range
/// (e.g. `join(...)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LocationPolicy {
    /// Abort the parse with [`ParseError::MalformedFeature`].
    #[default]
    Reject,
    /// Log a warning and leave the gene out.
    Skip,
}

/// Parser configuration.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub unsupported_locations: LocationPolicy,
    /// Accept `<`/`>` partial-boundary markers and drop them. When false they
    /// are treated like any other unsupported location.
    pub allow_partial_bounds: bool,
}

impl ParseOptions {
    pub fn lenient() -> Self {
        Self {
            unsupported_locations: LocationPolicy::Skip,
            ..Self::default()
        }
    }
}
