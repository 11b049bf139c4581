//! base16 core library — domain types, YAML document loading, template config.
//!
//! - [`types`] — templates, scheme sources, scheme documents, layouts
//! - [`error`] — [`ConfigError`] and [`ParseError`]
//! - [`config`] — load the template registry from `templates/config.yaml`
//! - [`document`] — decode scheme files into [`SchemeDocument`]s

pub mod config;
pub mod document;
pub mod error;
pub mod types;

pub use error::{ConfigError, ParseError};
pub use types::{SchemeDocument, SchemeLayout, SchemeSource, Template, SCHEME_SUFFIX};
