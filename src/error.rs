//! Error type shared by every stage of the pipeline.
//!
//! Nothing here is recoverable: the first error aborts the run before any
//! image is written.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MindmapError {
    /// The catalogue path does not resolve to a file.
    #[error("{} not found. Run from the repo root.", .0.display())]
    MissingSourceFile(PathBuf),

    /// A category, subcategory or paper record lacks a required field,
    /// or two records would map to the same node identity.
    #[error("malformed input at {location}: {reason}")]
    MalformedInput { location: String, reason: String },

    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("render failed: {0}")]
    Render(String),
}

impl MindmapError {
    pub fn malformed(location: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            location: location.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MindmapError>;

// ─── Tests ───────────────────────────────────────────────────────────────────
