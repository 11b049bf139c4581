//! Fixed-size worker pool for fan-out acquisition.
//!
//! ```text
//!  dispatcher ──work queue──▶ worker 1..W ──completion queue──▶ dispatcher
//! ```
//!
//! The dispatcher enqueues every source, then blocks until it has received
//! exactly one completion per source. Workers clone into disjoint
//! `<workdir>/<name>/` directories, so no other synchronisation is needed.
//! The first failed fetch ends the run; dropping the `JoinSet` aborts the
//! remaining workers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinSet;

use base16_core::SchemeSource;

use crate::error::FetchError;
use crate::git::Fetcher;

/// Pool size used when nothing else is configured.
pub const DEFAULT_WORKERS: usize = 4;

type Completion = Result<SchemeSource, FetchError>;

/// Clones many scheme sources concurrently with a fixed number of workers.
pub struct FetchPool<F> {
    fetcher: Arc<F>,
    workers: usize,
}

impl<F: Fetcher + 'static> FetchPool<F> {
    /// `workers` is clamped to at least one.
    pub fn new(fetcher: Arc<F>, workers: usize) -> Self {
        FetchPool {
            fetcher,
            workers: workers.max(1),
        }
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Fetch every source into `<workdir>/<name>/`.
    ///
    /// `on_fetched(done, total, source)` runs once per completed fetch, in
    /// completion order, with `done` counting up from 1.
    pub async fn run<P>(
        &self,
        workdir: &Path,
        sources: Vec<SchemeSource>,
        mut on_fetched: P,
    ) -> Result<(), FetchError>
    where
        P: FnMut(usize, usize, &SchemeSource),
    {
        let total = sources.len();
        let (work_tx, work_rx) = mpsc::unbounded_channel::<SchemeSource>();
        let (done_tx, mut done_rx) = mpsc::unbounded_channel::<Completion>();
        let work_rx = Arc::new(Mutex::new(work_rx));

        let mut pool = JoinSet::new();
        for id in 0..self.workers.min(total.max(1)) {
            pool.spawn(worker(
                id,
                Arc::clone(&self.fetcher),
                Arc::clone(&work_rx),
                done_tx.clone(),
                workdir.to_path_buf(),
            ));
        }
        drop(done_tx);

        for source in sources {
            // Fails only once every worker has exited; the loop below reports it.
            if work_tx.send(source).is_err() {
                break;
            }
        }
        drop(work_tx);

        let mut done = 0;
        while done < total {
            match done_rx.recv().await {
                Some(Ok(source)) => {
                    done += 1;
                    on_fetched(done, total, &source);
                }
                Some(Err(err)) => {
                    tracing::debug!("fetch failed, aborting remaining workers: {err}");
                    pool.abort_all();
                    return Err(err);
                }
                None => {
                    return Err(FetchError::WorkersExited {
                        completed: done,
                        expected: total,
                    })
                }
            }
        }

        while pool.join_next().await.is_some() {}
        Ok(())
    }
}

async fn worker<F: Fetcher>(
    id: usize,
    fetcher: Arc<F>,
    queue: Arc<Mutex<mpsc::UnboundedReceiver<SchemeSource>>>,
    done: mpsc::UnboundedSender<Completion>,
    workdir: PathBuf,
) {
    loop {
        let next = queue.lock().await.recv().await;
        let Some(source) = next else { break };

        tracing::debug!("worker {id} fetching {} from {}", source.name, source.repository);
        let dest = workdir.join(&source.name);
        let outcome = fetcher
            .fetch(&source.repository, &dest)
            .await
            .map(|()| source);
        if done.send(outcome).is_err() {
            break;
        }
    }
}
