//! Tile dispatch: partitions a render into jobs and drives them through a
//! [`WorkerPool`].
//!
//! Ported from `mandel_render` (synchronous) and `mandel_renderUnfinished`
//! (asynchronous, via `threadFunc`) in mandelbrot.c. The C `mandelJob`
//! wrapper that decodes a `void*` back into `(calcLocation, data)` has no
//! Rust counterpart — [`render`] just moves an `Arc<RenderSession>` and a
//! [`Region`] into each job closure directly.

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::config;
use crate::error::{Error, Result};
use crate::kernel::{self, Region};
use crate::session::RenderSession;
use crate::threadpool::WorkerPool;

/// `mandel_render(m, numthreads, split)`: render every tile of `session`
/// using a pool of `workers` threads, blocking until the whole image is
/// complete. Fails with [`Error::ConfigInvalid`] if `split` is below 1 or
/// above [`config::SPLIT_MAX`]; nothing is allocated in that case.
pub fn render(session: &Arc<RenderSession>, workers: usize, split: usize) -> Result<()> {
    if split < 1 || split > config::SPLIT_MAX {
        return Err(Error::config_invalid(format!(
            "split factor must be between 1 and {}, got {split}",
            config::SPLIT_MAX
        )));
    }

    let pool = WorkerPool::new(workers)?;
    dispatch_tiles(&pool, session, split);
    // Dropping the pool here blocks until every enqueued tile has drained,
    // mirroring `threadpool_destroy`'s join loop in `mandel_render`.
    drop(pool);
    Ok(())
}

/// A handle to a render running on a driver thread. Corresponds to
/// `renderThread` in mandelbrot.h: the image is visible (and safe to read,
/// partially rendered) through the shared [`RenderSession`] before the
/// handle is joined.
pub struct RenderHandle {
    thread: JoinHandle<Result<()>>,
    session: Arc<RenderSession>,
}

impl RenderHandle {
    /// The session being rendered into. Reading its pixels before [`RenderHandle::join`]
    /// returns an in-progress snapshot, exactly like reading
    /// `renderThread.image` before joining `renderThread.thread` in the C
    /// source.
    pub fn session(&self) -> &Arc<RenderSession> {
        &self.session
    }

    /// Whether the driver thread has finished dispatching and draining all
    /// tiles.
    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Blocks until the render completes, then returns the finished
    /// session. Propagates a pool-creation failure from the driver thread,
    /// and turns a driver-thread panic into [`crate::error::Error::ResourceUnavailable`].
    pub fn join(self) -> Result<Arc<RenderSession>> {
        match self.thread.join() {
            Ok(result) => result.map(|()| self.session),
            Err(_) => Err(crate::error::Error::resource_unavailable(
                "render driver thread panicked",
            )),
        }
    }
}

/// `mandel_renderUnfinished(m, numthreads, split)`: spawn a driver thread
/// that creates a pool, dispatches every tile, and drains it, returning
/// immediately with a handle whose session is already readable.
pub fn render_async(session: Arc<RenderSession>, workers: usize, split: usize) -> RenderHandle {
    let driver_session = Arc::clone(&session);
    let thread = thread::Builder::new()
        .name("mandelpool-render-driver".to_string())
        .spawn(move || render(&driver_session, workers, split))
        .expect("failed to spawn render driver thread");

    RenderHandle { thread, session }
}

fn dispatch_tiles(pool: &WorkerPool, session: &Arc<RenderSession>, split: usize) {
    let tiles: Vec<Region> = kernel::divide_region(session.region(), split);
    for tile in tiles {
        let job_session = Arc::clone(session);
        pool.enqueue(move || {
            kernel::render_tile(tile, &job_session);
        });
    }
}
