//! # base16-renderer
//!
//! Validates scheme documents into [`SchemeContext`]s and renders them
//! through a precompiled [`TemplateSet`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::path::Path;
//! use base16_core::{config, document};
//! use base16_renderer::{SchemeContext, TemplateSet};
//!
//! fn render_one(root: &Path, scheme: &Path) -> Result<(), Box<dyn std::error::Error>> {
//!     let templates = config::load_templates_at(root)?;
//!     let set = TemplateSet::compile(&config::templates_dir_at(root), templates)?;
//!     let ctx = SchemeContext::build(&document::read_scheme_document(scheme)?)?;
//!     for template in set.templates() {
//!         let text = set.render(&template.name, &ctx)?;
//!         println!("{}: {} bytes", template.name, text.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;
pub mod syntax;

pub use context::SchemeContext;
pub use engine::TemplateSet;
pub use error::{RenderError, ValidationError};
