//! Scheme file discovery inside a working directory.

use std::path::{Path, PathBuf};

use base16_core::{SchemeLayout, SCHEME_SUFFIX};

use crate::error::BuildError;

/// List every `*.yaml` file at the depth `layout` names, sorted by path.
///
/// `Flat` looks at `<workdir>/*.yaml`, `Nested` at `<workdir>/*/*.yaml`.
/// Files at any other depth are ignored.
pub fn discover_schemes(workdir: &Path, layout: SchemeLayout) -> Result<Vec<PathBuf>, BuildError> {
    let mut found = Vec::new();
    match layout {
        SchemeLayout::Flat => collect_schemes(workdir, &mut found)?,
        SchemeLayout::Nested => {
            for dir in entries(workdir)?.into_iter().filter(|p| p.is_dir()) {
                collect_schemes(&dir, &mut found)?;
            }
        }
    }
    found.sort();
    tracing::debug!(
        "discovered {} scheme files under {} ({layout})",
        found.len(),
        workdir.display()
    );
    Ok(found)
}

/// Scheme name used in output file names: the file name without `.yaml`.
pub fn scheme_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match file_name.strip_suffix(SCHEME_SUFFIX) {
        Some(stem) => stem.to_string(),
        None => file_name,
    }
}

fn collect_schemes(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), BuildError> {
    for path in entries(dir)? {
        let is_scheme = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(SCHEME_SUFFIX));
        if is_scheme && path.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn entries(dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
    let discover_err = |source| BuildError::Discover {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(discover_err)? {
        paths.push(entry.map_err(discover_err)?.path());
    }
    Ok(paths)
}
