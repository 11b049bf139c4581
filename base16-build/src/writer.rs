//! Output writer.
//!
//! ## `write_output` — write protocol
//!
//! 1. Create the output directory if needed.
//! 2. Write the rendered text to `<path>.base16.tmp`.
//! 3. Rename over the final path, replacing any existing file.

use std::path::{Path, PathBuf};

use crate::error::{write_err, BuildError};

/// One rendered `(template, scheme)` output on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedFile {
    pub template: String,
    pub scheme: String,
    pub path: PathBuf,
}

/// Write `content` to `path`, silently replacing an existing file.
pub(crate) fn write_output(path: &Path, content: &str) -> Result<(), BuildError> {
    let tmp = PathBuf::from(format!("{}.base16.tmp", path.display()));
    write_output_with_tmp(path, content, &tmp)
}

fn write_output_with_tmp(path: &Path, content: &str, tmp: &Path) -> Result<(), BuildError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| write_err(parent, e))?;
    }

    std::fs::write(tmp, content).map_err(|e| write_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(write_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(())
}
