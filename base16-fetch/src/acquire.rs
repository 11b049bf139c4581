//! Scheme source acquisition: directory mode and the two fetch strategies.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use base16_core::{SchemeLayout, SchemeSource};

use crate::error::{io_err, FetchError};
use crate::git::{Fetcher, GitFetcher};
use crate::pool::{FetchPool, DEFAULT_WORKERS};
use crate::registry::{self, SCHEMES_URL};

/// Aggregate repository holding every scheme file at its root.
pub const SCHEMES_REPO: &str = "https://github.com/base16-project/base16-schemes";

/// Prefix of freshly created working directories.
pub const WORKDIR_PREFIX: &str = "base16.build.";

/// How a fresh working directory gets populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStrategy {
    /// Read the registry at `registry_url`, then clone every listed
    /// repository into its own subdirectory.
    FanOut { registry_url: String },
    /// Clone one aggregate repository straight into the working directory.
    Bulk { repository: String },
}

impl FetchStrategy {
    pub fn fan_out() -> Self {
        FetchStrategy::FanOut {
            registry_url: SCHEMES_URL.to_string(),
        }
    }

    pub fn bulk() -> Self {
        FetchStrategy::Bulk {
            repository: SCHEMES_REPO.to_string(),
        }
    }

    /// On-disk layout this strategy produces.
    pub fn layout(&self) -> SchemeLayout {
        match self {
            FetchStrategy::FanOut { .. } => SchemeLayout::Nested,
            FetchStrategy::Bulk { .. } => SchemeLayout::Flat,
        }
    }
}

impl Default for FetchStrategy {
    fn default() -> Self {
        Self::fan_out()
    }
}

/// Where scheme files come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acquisition {
    /// An already-populated directory; nothing is fetched.
    Directory(PathBuf),
    /// A fresh temporary directory filled by `FetchStrategy`.
    Fetch(FetchStrategy),
}

/// Progress events reported while acquiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress<'a> {
    /// The temporary working directory was created.
    WorkdirCreated(&'a Path),
    /// One source finished cloning; `done` counts completions from 1.
    Fetched {
        done: usize,
        total: usize,
        name: &'a str,
    },
}

/// Populates working directories through a [`Fetcher`].
pub struct Acquirer<F> {
    fetcher: Arc<F>,
    workers: usize,
}

impl Acquirer<GitFetcher> {
    /// Acquirer backed by `git` on `PATH`.
    pub fn git() -> Self {
        Self::new(GitFetcher::new())
    }
}

impl<F: Fetcher + 'static> Acquirer<F> {
    pub fn new(fetcher: F) -> Self {
        Acquirer {
            fetcher: Arc::new(fetcher),
            workers: DEFAULT_WORKERS,
        }
    }

    /// Size of the fan-out worker pool (clamped to at least one).
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Resolve `acquisition` to a populated working directory.
    ///
    /// Directory mode only checks that the directory exists. Fetch mode
    /// creates a new temporary directory, which is kept after the process
    /// exits so it can be fed back in directory mode.
    pub fn acquire<P>(
        &self,
        acquisition: &Acquisition,
        mut on_progress: P,
    ) -> Result<PathBuf, FetchError>
    where
        P: FnMut(Progress<'_>),
    {
        match acquisition {
            Acquisition::Directory(dir) => {
                if !dir.is_dir() {
                    return Err(FetchError::MissingWorkdir { path: dir.clone() });
                }
                Ok(dir.clone())
            }
            Acquisition::Fetch(strategy) => {
                let workdir = create_workdir()?;
                on_progress(Progress::WorkdirCreated(&workdir));
                match strategy {
                    FetchStrategy::FanOut { registry_url } => {
                        let sources = registry::fetch_registry(registry_url)?;
                        self.fan_out(&workdir, sources, on_progress)?;
                    }
                    FetchStrategy::Bulk { repository } => {
                        self.bulk(&workdir, repository, on_progress)?;
                    }
                }
                Ok(workdir)
            }
        }
    }

    /// Clone every source into `<workdir>/<name>/` with the worker pool.
    pub fn fan_out<P>(
        &self,
        workdir: &Path,
        sources: Vec<SchemeSource>,
        mut on_progress: P,
    ) -> Result<(), FetchError>
    where
        P: FnMut(Progress<'_>),
    {
        let pool = FetchPool::new(Arc::clone(&self.fetcher), self.workers);
        runtime(self.workers)?.block_on(pool.run(workdir, sources, |done, total, source| {
            on_progress(Progress::Fetched {
                done,
                total,
                name: &source.name,
            })
        }))
    }

    /// Clone `repository` directly into `workdir`.
    pub fn bulk<P>(
        &self,
        workdir: &Path,
        repository: &str,
        mut on_progress: P,
    ) -> Result<(), FetchError>
    where
        P: FnMut(Progress<'_>),
    {
        runtime(1)?.block_on(self.fetcher.fetch(repository, workdir))?;
        on_progress(Progress::Fetched {
            done: 1,
            total: 1,
            name: repository,
        });
        Ok(())
    }
}

fn create_workdir() -> Result<PathBuf, FetchError> {
    let dir = tempfile::Builder::new()
        .prefix(WORKDIR_PREFIX)
        .keep(true)
        .tempdir()
        .map_err(|e| io_err(std::env::temp_dir(), e))?;
    Ok(dir.path().to_path_buf())
}

fn runtime(workers: usize) -> Result<tokio::runtime::Runtime, FetchError> {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(workers.max(1))
        .enable_all()
        .build()
        .map_err(FetchError::Runtime)
}
