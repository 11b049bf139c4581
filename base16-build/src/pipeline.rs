//! Render/emit pipeline: every scheme file through every template.

use std::path::Path;

use base16_core::{document, SchemeLayout};
use base16_renderer::{SchemeContext, TemplateSet};

use crate::discover::{discover_schemes, scheme_name};
use crate::error::BuildError;
use crate::writer::{write_output, EmittedFile};

/// Outcome of a completed build.
#[derive(Debug, Default)]
pub struct BuildSummary {
    /// Number of scheme files rendered.
    pub schemes: usize,
    /// Every file written, in write order.
    pub files: Vec<EmittedFile>,
}

/// Render every scheme under `workdir` through every template in `templates`.
///
/// Schemes are processed in discovery order and templates in configuration
/// order. The first error stops the build; files written before it stay on
/// disk.
pub fn run(
    workdir: &Path,
    layout: SchemeLayout,
    templates: &TemplateSet,
) -> Result<BuildSummary, BuildError> {
    let sources = discover_schemes(workdir, layout)?;
    let mut summary = BuildSummary::default();
    for source in &sources {
        build_scheme(source, templates, &mut summary.files)?;
        summary.schemes += 1;
    }
    Ok(summary)
}

/// Parse, validate and render one scheme file, appending each written file
/// to `files`.
pub fn build_scheme(
    source: &Path,
    templates: &TemplateSet,
    files: &mut Vec<EmittedFile>,
) -> Result<(), BuildError> {
    let doc = document::read_scheme_document(source)?;
    let ctx = SchemeContext::build(&doc).map_err(|e| BuildError::Validation {
        path: source.to_path_buf(),
        source: e,
    })?;

    let scheme = scheme_name(source);
    for template in templates.templates() {
        let rendered = templates
            .render(&template.name, &ctx)
            .map_err(|e| BuildError::Render {
                scheme: source.to_path_buf(),
                source: e,
            })?;
        let path = template.output_path(&scheme);
        write_output(&path, &rendered)?;
        files.push(EmittedFile {
            template: template.name.clone(),
            scheme: scheme.clone(),
            path,
        });
    }
    Ok(())
}
