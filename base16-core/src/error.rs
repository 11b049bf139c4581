//! Error types for base16-core.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading the template configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document does not exist.
    #[error("template config not found at {path}")]
    NotFound { path: PathBuf },

    /// The configuration document exists but could not be read.
    #[error("failed to read template config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed YAML, or a document that is not a mapping of
    /// `name -> {extension, output}`.
    #[error("failed to parse template config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// One template entry lacks `extension`/`output` or has the wrong shape.
    #[error("invalid entry for template '{name}' in {path}: {source}")]
    InvalidEntry {
        path: PathBuf,
        name: String,
        #[source]
        source: serde_yaml::Error,
    },

    /// A top-level key that is not a plain string.
    #[error("invalid template name {name} in {path}: names must be strings")]
    InvalidName { path: PathBuf, name: String },
}

/// Errors raised while decoding a scheme definition file.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The scheme file could not be read.
    #[error("failed to read scheme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed YAML, or a document that is not a flat string mapping.
    #[error("failed to parse scheme file {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ParseError {
    /// Path of the offending scheme file.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ParseError::Io { path, .. } | ParseError::Yaml { path, .. } => path,
        }
    }
}
