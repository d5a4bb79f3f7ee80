// WHY: typed errors at the library seam so callers can tell a bad path from a failed engine
// The binary wraps these in anyhow for context and reporting

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure inside a segmentation engine
#[derive(Debug, Error)]
pub enum SegmentationError {
    /// Rule table could not be parsed
    #[error("invalid rule table: {0}")]
    Rules(#[from] toml::de::Error),

    /// Rule table parsed but is unusable
    #[error("invalid rule table: {0}")]
    InvalidRules(String),

    /// Boundary pattern failed to compile
    #[error("failed to compile boundary pattern: {0}")]
    Pattern(#[from] regex_automata::meta::BuildError),

    /// Engine-specific failure
    #[error("segmentation failed: {0}")]
    Engine(String),
}

/// Fatal error for a single driver run
#[derive(Debug, Error)]
pub enum DriverError {
    /// Input path missing, unreadable, a directory, or not UTF-8
    #[error("cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Segmentation(#[from] SegmentationError),

    /// Writing a sentence to the output failed
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}

pub type Result<T, E = DriverError> = std::result::Result<T, E>;
