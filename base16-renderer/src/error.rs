//! Error types for base16-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// A scheme document lacks a required field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing \"{0}\" in scheme")]
    MissingField(String),
}

/// All errors that can arise from compiling or rendering templates.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template body could not be read.
    #[error("template io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The body uses mustache syntax outside the supported subset, or is
    /// structurally broken (unclosed tag, empty key).
    #[error("failed to parse template '{template}' ({path}): {message}")]
    Syntax {
        template: String,
        path: PathBuf,
        message: String,
    },

    /// Tera rejected the lowered template source.
    #[error("failed to compile template '{template}': {source}")]
    Compile {
        template: String,
        #[source]
        source: tera::Error,
    },

    /// Rendering failed, typically because the body references a key the
    /// scheme context does not define.
    #[error("failed to render template '{template}': {source}")]
    Render {
        template: String,
        #[source]
        source: tera::Error,
    },

    /// The requested template was never compiled.
    #[error("unknown template '{0}'")]
    UnknownTemplate(String),
}
