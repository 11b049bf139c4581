//! The fetch seam: [`Fetcher`] and its git implementation.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::FetchError;

/// Materialises one repository at `dest`.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, repository: &str, dest: &Path) -> Result<(), FetchError>;
}

/// Shallow, quiet `git clone`.
#[derive(Debug, Clone)]
pub struct GitFetcher {
    program: PathBuf,
}

impl GitFetcher {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific git executable instead of the one on `PATH`.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        GitFetcher {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for GitFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Fetcher for GitFetcher {
    async fn fetch(&self, repository: &str, dest: &Path) -> Result<(), FetchError> {
        let status = Command::new(&self.program)
            .args(["clone", "--quiet", "--depth=1"])
            .arg(repository)
            .arg(dest)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .status()
            .await
            .map_err(|source| FetchError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !status.success() {
            return Err(FetchError::Clone {
                repository: repository.to_string(),
                status,
            });
        }
        tracing::info!("cloned {} into {}", repository, dest.display());
        Ok(())
    }
}
