//! Error types for base16-build.

use std::path::PathBuf;

use thiserror::Error;

use base16_core::ParseError;
use base16_renderer::{RenderError, ValidationError};

/// All errors that can arise while rendering schemes to disk. Every one of
/// them ends the build.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The working directory could not be listed.
    #[error("failed to list scheme files under {path}: {source}")]
    Discover {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A scheme file is not valid YAML or not a flat mapping.
    #[error("error parsing yaml file: {0}")]
    Parse(#[from] ParseError),

    /// A scheme file lacks a required field.
    #[error("error making context for {path}: {source}")]
    Validation {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },

    /// A template could not be rendered for a scheme.
    #[error("error rendering {scheme}: {source}")]
    Render {
        scheme: PathBuf,
        #[source]
        source: RenderError,
    },

    /// An output file could not be written.
    #[error("error writing {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`BuildError::Write`].
pub(crate) fn write_err(path: impl Into<PathBuf>, source: std::io::Error) -> BuildError {
    BuildError::Write {
        path: path.into(),
        source,
    }
}
