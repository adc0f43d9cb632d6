//! Public pool API: `Pool::new`, `add`, `wait`.

use crate::jinfo;
use crate::worker;
use jobpool_core::constants::{MAX_NB_JOB_DEPENDENCIES, MAX_NB_THREADS};
use jobpool_core::error::{PoolError, PoolResult};
use jobpool_core::id::JobId;
use jobpool_core::job::JobRecord;
use jobpool_core::store::JobStore;
use std::sync::{Arc, Condvar, Mutex};
use std::thread::JoinHandle;

/// Everything the pool's single mutex protects: the job store and the
/// one-shot "submitter is done" flag. The thread handles themselves
/// are owned by `Pool`, outside this lock.
pub(crate) struct PoolState {
    pub(crate) store: JobStore,
    pub(crate) all_supplied: bool,
}

/// State shared between `Pool` and its worker threads via `Arc`.
pub(crate) struct Shared {
    pub(crate) state: Mutex<PoolState>,
    pub(crate) cond: Condvar,
}

/// A fixed-size pool of worker threads executing jobs under an explicit
/// predecessor DAG.
///
/// `add` appends a job and returns its dense id immediately (it never
/// waits for the job to run); a job becomes eligible to run only once
/// every id in its predecessor list has finished; `wait` tells the pool
/// no further jobs are coming and blocks until every worker has
/// drained and exited.
pub struct Pool {
    shared: Arc<Shared>,
    threads: Vec<JoinHandle<()>>,
    sealed: bool,
}

impl Pool {
    /// Spawn a pool with `n_threads` workers (`1..=64`).
    pub fn new(n_threads: usize) -> PoolResult<Pool> {
        if n_threads == 0 || n_threads > MAX_NB_THREADS {
            return Err(PoolError::InvalidThreadCount { requested: n_threads, max: MAX_NB_THREADS });
        }

        let shared = Arc::new(Shared {
            state: Mutex::new(PoolState { store: JobStore::new(), all_supplied: false }),
            cond: Condvar::new(),
        });

        let mut threads = Vec::with_capacity(n_threads);
        for worker_id in 0..n_threads {
            let shared = shared.clone();
            let spawned = std::thread::Builder::new()
                .name(format!("jobpool-worker-{worker_id}"))
                .spawn(move || worker::run(worker_id as u32, shared));
            match spawned {
                Ok(handle) => threads.push(handle),
                Err(_) => {
                    // Partial-init cleanup: seal and wake whatever
                    // workers already started so they can exit, then
                    // join them before reporting failure.
                    let mut pool = Pool { shared, threads, sealed: false };
                    pool.wait();
                    return Err(PoolError::WorkerSpawnFailed);
                }
            }
        }

        jinfo!("pool created with {n_threads} workers");
        Ok(Pool { shared, threads, sealed: false })
    }

    /// Append a job that must not start until every id in `preds` has
    /// finished. Thread-safe; may be called concurrently with running
    /// jobs. Returns the new job's dense id.
    ///
    /// `preds` is copied by value into the job record, so the caller
    /// may reuse or drop its buffer immediately after this returns.
    pub fn add<F>(&self, f: F, preds: &[JobId]) -> PoolResult<JobId>
    where
        F: FnOnce() + Send + 'static,
    {
        if preds.len() > MAX_NB_JOB_DEPENDENCIES {
            return Err(PoolError::TooManyPredecessors {
                requested: preds.len(),
                max: MAX_NB_JOB_DEPENDENCIES,
            });
        }

        let mut guard = self.shared.state.lock().unwrap();
        if guard.all_supplied {
            return Err(PoolError::PoolSealed);
        }

        let record = JobRecord::new(Box::new(f), preds);
        let id = guard.store.append(record)?;
        drop(guard);

        // A newly added job may itself be immediately ready (e.g. no
        // predecessors), so wake at least one waiter.
        self.shared.cond.notify_one();
        Ok(id)
    }

    /// Tell the pool no more jobs are coming, then block until every
    /// worker has drained the DAG and exited. Idempotent: calling it
    /// more than once is a no-op after the first call.
    ///
    /// There is no separate call to release the pool's resources:
    /// `Pool`'s `Drop` impl calls `wait()` itself if the caller never
    /// did, and the backing memory is reclaimed when `Pool` goes out of
    /// scope.
    pub fn wait(&mut self) {
        if self.sealed {
            return;
        }
        {
            let mut guard = self.shared.state.lock().unwrap();
            guard.all_supplied = true;
        }
        self.shared.cond.notify_all();
        for handle in self.threads.drain(..) {
            let _ = handle.join();
        }
        self.sealed = true;
        jinfo!("pool wait() returned, all workers joined");
    }
}

impl Drop for Pool {
    fn drop(&mut self) {
        self.wait();
    }
}
