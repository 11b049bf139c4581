//! Domain types for the base16 builder.
//!
//! All path fields use `PathBuf`; never `&str` or `String` for filesystem paths.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File suffix of scheme definition files.
pub const SCHEME_SUFFIX: &str = ".yaml";

/// File suffix of template bodies inside the templates directory.
pub const TEMPLATE_SUFFIX: &str = ".mustache";

/// Prefix of every rendered output file name.
pub const OUTPUT_PREFIX: &str = "base16-";

/// Raw key/value data decoded from one scheme file.
pub type SchemeDocument = BTreeMap<String, String>;

// ---------------------------------------------------------------------------
// Template
// ---------------------------------------------------------------------------

/// One configured output template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Key in the config document; also the template body's file stem.
    pub name: String,
    /// Suffix appended to every output file name (e.g. `.conf`).
    pub extension: String,
    /// Destination directory for rendered files.
    pub output: PathBuf,
}

impl Template {
    /// `<templates_dir>/<name>.mustache` — pure, no I/O.
    pub fn source_path(&self, templates_dir: &Path) -> PathBuf {
        templates_dir.join(format!("{}{}", self.name, TEMPLATE_SUFFIX))
    }

    /// `<output>/base16-<scheme><extension>` — pure, no I/O.
    pub fn output_path(&self, scheme: &str) -> PathBuf {
        self.output
            .join(format!("{OUTPUT_PREFIX}{scheme}{}", self.extension))
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// SchemeSource
// ---------------------------------------------------------------------------

/// One scheme family and the repository it is fetched from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemeSource {
    pub name: String,
    pub repository: String,
}

impl SchemeSource {
    pub fn new(name: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            repository: repository.into(),
        }
    }
}

impl fmt::Display for SchemeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.name.fmt(f)
    }
}

// ---------------------------------------------------------------------------
// SchemeLayout
// ---------------------------------------------------------------------------

/// Where scheme files sit inside a working directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemeLayout {
    /// `<workdir>/*.yaml` — one aggregate repository.
    Flat,
    /// `<workdir>/*/*.yaml` — one subdirectory per scheme source.
    #[default]
    Nested,
}

impl SchemeLayout {
    /// Directory depth, relative to the working directory, at which scheme
    /// files are found.
    pub fn depth(self) -> usize {
        match self {
            SchemeLayout::Flat => 1,
            SchemeLayout::Nested => 2,
        }
    }
}

impl fmt::Display for SchemeLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SchemeLayout::Flat => "flat",
            SchemeLayout::Nested => "nested",
        };
        f.write_str(s)
    }
}
