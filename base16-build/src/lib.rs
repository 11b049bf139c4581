//! # base16-build
//!
//! Render/emit stage: discovers scheme files in a working directory and
//! writes one output per `(template, scheme)` pair.
//!
//! Call [`pipeline::run`] once the working directory is populated and the
//! templates are compiled.

pub mod discover;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use discover::{discover_schemes, scheme_name};
pub use error::BuildError;
pub use pipeline::{run, BuildSummary};
pub use writer::EmittedFile;
