//! Template registry: `templates/config.yaml` plus one body per template.
//!
//! # Layout
//!
//! ```text
//! <root>/
//!   templates/
//!     config.yaml          (name -> {extension, output})
//!     <name>.mustache      (one body per configured template)
//! ```
//!
//! Every loader has two forms, following the same pattern throughout the
//! workspace:
//! - `fn_at(root: &Path, …)` — explicit root; used in tests with `TempDir`
//! - `fn(…)` — uses the current directory, delegates to `_at`

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::error::ConfigError;
use crate::types::Template;

/// Directory holding the config document and the template bodies.
pub const TEMPLATES_DIR: &str = "templates";

/// File name of the config document inside [`TEMPLATES_DIR`].
pub const CONFIG_FILE: &str = "config.yaml";

// ---------------------------------------------------------------------------
// 1. Path helpers
// ---------------------------------------------------------------------------

/// `<root>/templates/` — pure, no I/O.
pub fn templates_dir_at(root: &Path) -> PathBuf {
    root.join(TEMPLATES_DIR)
}

/// `<root>/templates/config.yaml` — pure, no I/O.
pub fn config_path_at(root: &Path) -> PathBuf {
    templates_dir_at(root).join(CONFIG_FILE)
}

// ---------------------------------------------------------------------------
// 2. Load
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct TemplateEntry {
    extension: String,
    output: PathBuf,
}

/// Load every configured template from `<root>/templates/config.yaml`.
///
/// Templates come back in document order. Relative `output` directories are
/// resolved against `root`; absolute ones are kept as-is.
///
/// Returns `ConfigError::NotFound` if the document is absent and
/// `ConfigError::Parse` / `ConfigError::InvalidEntry` if it is malformed.
pub fn load_templates_at(root: &Path) -> Result<Vec<Template>, ConfigError> {
    let path = config_path_at(root);
    if !path.exists() {
        return Err(ConfigError::NotFound { path });
    }
    let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let mapping: Mapping = serde_yaml::from_str(&contents).map_err(|source| {
        ConfigError::Parse {
            path: path.clone(),
            source,
        }
    })?;

    let mut templates = Vec::with_capacity(mapping.len());
    for (key, value) in mapping {
        let name = match key {
            Value::String(name) => name,
            other => {
                return Err(ConfigError::InvalidName {
                    path,
                    name: describe_key(&other),
                })
            }
        };
        let entry: TemplateEntry =
            serde_yaml::from_value(value).map_err(|source| ConfigError::InvalidEntry {
                path: path.clone(),
                name: name.clone(),
                source,
            })?;
        tracing::debug!("configured template '{}' -> {}", name, entry.output.display());
        templates.push(Template {
            name,
            extension: entry.extension,
            output: root.join(entry.output),
        });
    }
    Ok(templates)
}

/// `load_templates_at` convenience wrapper rooted at the current directory.
pub fn load_templates() -> Result<Vec<Template>, ConfigError> {
    load_templates_at(Path::new("."))
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn describe_key(key: &Value) -> String {
    serde_yaml::to_string(key)
        .map(|s| s.trim_end().to_string())
        .unwrap_or_else(|_| format!("{key:?}"))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
