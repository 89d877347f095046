//! Integration tests for [`mandelpool::WorkerPool`], covering properties that
//! span multiple operations (creation, many enqueues, shutdown) rather than
//! the single-call unit tests already in `src/threadpool.rs`.

use mandelpool::WorkerPool;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::time::Duration;

#[test]
fn new_rejects_zero_threads() {
    assert!(WorkerPool::new(0).is_err());
}

#[test]
fn new_rejects_worker_count_above_max() {
    assert!(WorkerPool::new(mandelpool::config::NB_WORKERS_MAX + 1).is_err());
}

#[test]
fn pool_conservation_every_job_runs_exactly_once() {
    let pool = WorkerPool::new(4).expect("valid pool");
    const N: usize = 500;
    let counts: Vec<Arc<AtomicUsize>> = (0..N).map(|_| Arc::new(AtomicUsize::new(0))).collect();

    for c in &counts {
        let c = Arc::clone(c);
        pool.enqueue(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
    }

    drop(pool);

    for (i, c) in counts.iter().enumerate() {
        assert_eq!(c.load(Ordering::SeqCst), 1, "job {i} did not run exactly once");
    }
}

#[test]
fn drop_waits_for_all_in_flight_jobs() {
    let flags: Vec<Arc<AtomicUsize>> = (0..8).map(|_| Arc::new(AtomicUsize::new(0))).collect();
    {
        let pool = WorkerPool::new(4).expect("valid pool");
        for f in &flags {
            let f = Arc::clone(f);
            pool.enqueue(move || {
                std::thread::sleep(Duration::from_millis(20));
                f.store(1, Ordering::SeqCst);
            });
        }
    }
    for f in &flags {
        assert_eq!(f.load(Ordering::SeqCst), 1);
    }
}

#[test]
fn jobs_run_concurrently_across_workers() {
    const N: usize = 6;
    let pool = WorkerPool::new(N).expect("valid pool");
    let barrier = Arc::new(Barrier::new(N));
    let counter = Arc::new(AtomicUsize::new(0));

    for _ in 0..N {
        let b = Arc::clone(&barrier);
        let c = Arc::clone(&counter);
        pool.enqueue(move || {
            b.wait(); // would deadlock with fewer than N live workers
            c.fetch_add(1, Ordering::SeqCst);
        });
    }

    drop(pool);
    assert_eq!(counter.load(Ordering::SeqCst), N);
}

#[test]
fn many_jobs_on_a_small_pool_all_complete() {
    let pool = WorkerPool::new(2).expect("valid pool");
    let counter = Arc::new(AtomicUsize::new(0));
    const N: usize = 1000;

    for _ in 0..N {
        let c = Arc::clone(&counter);
        pool.enqueue(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
    }

    drop(pool);
    assert_eq!(counter.load(Ordering::SeqCst), N);
}

#[test]
fn a_panicking_job_does_not_prevent_later_jobs_from_running() {
    let pool = WorkerPool::new(2).expect("valid pool");
    let counter = Arc::new(AtomicUsize::new(0));

    for i in 0..20 {
        let c = Arc::clone(&counter);
        pool.enqueue(move || {
            if i % 5 == 0 {
                panic!("job {i} exploding on purpose");
            }
            c.fetch_add(1, Ordering::SeqCst);
        });
    }

    drop(pool);
    assert_eq!(counter.load(Ordering::SeqCst), 16);
}
