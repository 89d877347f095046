//! Fixed-size worker pool consuming a single [`Fifo`] job queue under a
//! mutex + condvar protocol.
//!
//! Ported from `threadpool.c`/`threadpool.h` (Sebastian Rautila, Andreas
//! Widmark) in the original C mandelpool sources:
//!
//! `threadpool_create`  → [`WorkerPool::new`]
//! `threadpool_enqueue` → [`WorkerPool::enqueue`]
//! `threadpool_destroy` → `Drop for WorkerPool`
//!
//! Where the C code stores a raw `void(*)(void*)` function pointer plus a
//! `void*` argument per job, this pool stores a single
//! `Box<dyn FnOnce() + Send>` — the closure has already captured its
//! argument, so there is no `void*` to decode on the worker side and no
//! separate "job destructor" to register: dropping an unexecuted job runs
//! whatever `Drop` impls its captures have, which is exactly what the C
//! `jobDestructor` did for the malloc'd `job` struct (see the open-questions
//! resolution in DESIGN.md for the enqueue-after-shutdown case).

use std::panic::{self, AssertUnwindSafe};
use std::sync::{Condvar, Mutex};
use std::thread::{self, JoinHandle};

use crate::config;
use crate::displaylevel;
use crate::error::{Error, Result};
use crate::fifo::Fifo;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// The mutex-guarded queue plus the pool's `running` flag. Corresponds to
/// `jobQueue` (the `fifo*` + `pthread_mutex_t` + `pthread_cond_t` bundle) in
/// the C source, with `running` folded in from the enclosing `threadpool`
/// struct so a single mutex guards both.
struct QueueState {
    jobs: Fifo<Job>,
    running: bool,
}

/// Shared state cloned into every worker thread via `Arc`.
struct Shared {
    queue: Mutex<QueueState>,
    not_empty: Condvar,
}

/// A fixed-size set of worker threads draining one shared job queue.
///
/// `WorkerPool::new(n)` spawns exactly `n` threads for the pool's entire
/// lifetime (no dynamic resizing — see spec Non-goals). Dropping the pool
/// performs the same graceful shutdown as `threadpool_destroy`: refuse new
/// enqueues, wake every waiter, then join every worker after it has drained
/// whatever was already queued.
pub struct WorkerPool {
    shared: std::sync::Arc<Shared>,
    workers: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// `threadpool_create(numThreads)`. Fails with
    /// [`Error::ConfigInvalid`] if `n_threads` is below 1 or above
    /// [`config::NB_WORKERS_MAX`], or [`Error::ResourceUnavailable`] if a
    /// worker thread cannot be spawned (any already-spawned workers are shut
    /// down cleanly before returning).
    pub fn new(n_threads: usize) -> Result<Self> {
        if n_threads < 1 || n_threads > config::NB_WORKERS_MAX {
            return Err(Error::config_invalid(format!(
                "worker count must be between 1 and {}, got {n_threads}",
                config::NB_WORKERS_MAX
            )));
        }

        let shared = std::sync::Arc::new(Shared {
            queue: Mutex::new(QueueState {
                jobs: Fifo::new(),
                running: true,
            }),
            not_empty: Condvar::new(),
        });

        let mut workers = Vec::with_capacity(n_threads);
        for id in 0..n_threads {
            let shared = std::sync::Arc::clone(&shared);
            let spawned = thread::Builder::new()
                .name(format!("mandelpool-worker-{id}"))
                .spawn(move || worker_loop(shared));
            match spawned {
                Ok(handle) => workers.push(handle),
                Err(e) => {
                    // Shut down whatever we already spawned before bailing out,
                    // so no threads are leaked on the failure path.
                    let pool = WorkerPool { shared, workers };
                    drop(pool);
                    return Err(Error::resource_unavailable(format!(
                        "failed to spawn worker thread {id}: {e}"
                    )));
                }
            }
        }

        Ok(WorkerPool { shared, workers })
    }

    /// `threadpool_enqueue(pool, routine, arg)`.
    ///
    /// If the pool has already been shut down, `routine` is dropped without
    /// running (the Rust analogue of a disposer call — see DESIGN.md). If
    /// the queue transitions from empty to non-empty, exactly one waiter is
    /// signaled.
    pub fn enqueue<F>(&self, routine: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let job: Job = Box::new(routine);
        let mut state = self.shared.queue.lock().unwrap();
        if !state.running {
            // Shut down: drop the job under no lock to avoid holding the
            // mutex across arbitrary `Drop` impls in the caller's captures.
            drop(state);
            drop(job);
            return;
        }
        let was_empty = state.jobs.is_empty();
        state.jobs.enqueue(job);
        if was_empty {
            self.shared.not_empty.notify_one();
        }
    }

    /// Number of worker threads in this pool. Constant for the pool's
    /// lifetime.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Test-only seam: flips `running` to `false` and wakes every waiter
    /// without joining workers, so tests can observe `enqueue`'s
    /// shutdown-rejection behavior while the pool handle is still alive (the
    /// public API otherwise only exposes shutdown through `Drop`, which
    /// consumes the pool).
    #[cfg(test)]
    fn test_mark_shutdown(&self) {
        let mut state = self.shared.queue.lock().unwrap();
        state.running = false;
        drop(state);
        self.shared.not_empty.notify_all();
    }
}

/// Per-worker loop body. Mirrors `doWork` in threadpool.c line for line:
/// acquire the lock, wait while running and the queue is empty, exit once
/// shutdown has been requested and the queue has drained, otherwise dequeue
/// one job, release the lock, and run it without holding the mutex.
fn worker_loop(shared: std::sync::Arc<Shared>) {
    loop {
        let job = {
            let mut state = shared.queue.lock().unwrap();
            while state.running && state.jobs.is_empty() {
                state = shared.not_empty.wait(state).unwrap();
            }
            if !state.running && state.jobs.is_empty() {
                return;
            }
            state.jobs.dequeue()
        };

        if let Some(job) = job {
            run_job(job);
        }
    }
}

#[cfg(feature = "panic-recovery")]
fn run_job(job: Job) {
    // A panicking routine must not take down a worker thread and shrink the
    // pool below its fixed size; catch it at this boundary and keep looping.
    if panic::catch_unwind(AssertUnwindSafe(job)).is_err() {
        displaylevel!(1, "mandelpool: a job panicked; worker continuing");
    }
}

#[cfg(not(feature = "panic-recovery"))]
fn run_job(job: Job) {
    job();
}

impl Drop for WorkerPool {
    /// `threadpool_destroy`: set `running = false` and broadcast under the
    /// mutex (refusing further enqueues strictly before shutdown is
    /// visible to any worker), then join every worker thread. Workers drain
    /// whatever was already queued before observing `running == false` with
    /// an empty queue, so no explicit post-join drain step is needed here —
    /// see the "destroy with pending jobs" resolution in DESIGN.md.
    fn drop(&mut self) {
        {
            let mut state = self.shared.queue.lock().unwrap();
            state.running = false;
        }
        self.shared.not_empty.notify_all();

        for worker in self.workers.drain(..) {
            let _ = worker.join();
        }
    }
}
