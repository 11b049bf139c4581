use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Error surface for scheme acquisition: registry download, git, worker pool.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("working directory {path} does not exist or is not a directory")]
    MissingWorkdir { path: PathBuf },

    #[error("unexpected status code {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("failed to parse scheme registry from {url}: {source}")]
    Registry {
        url: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to launch {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error while cloning {repository}: git exited with {status}")]
    Clone {
        repository: String,
        status: ExitStatus,
    },

    #[error("fetch workers exited after {completed} of {expected} clones")]
    WorkersExited { completed: usize, expected: usize },

    #[error("fetch runtime error: {0}")]
    Runtime(#[source] std::io::Error),
}

pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> FetchError {
    FetchError::Io {
        path: path.into(),
        source,
    }
}
