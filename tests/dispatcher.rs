//! Integration tests for [`mandelpool::render`] / [`mandelpool::render_async`]
//! covering the testable properties named in the render session spec: tile
//! disjointness, determinism across worker/split factors, and the async
//! completion-handle contract.

use mandelpool::{render, render_async, Palette, RenderSession};
use std::sync::Arc;

fn build(width: usize, height: usize) -> Arc<RenderSession> {
    Arc::new(RenderSession::new(64, -2.5, -1.25, 1.0, 1.25, width, height, Palette::fire()).unwrap())
}

#[test]
fn single_pixel_render_of_the_origin_is_opaque_black() {
    // Origin is inside the set, so the lone output pixel must be opaque
    // black regardless of palette.
    let session = Arc::new(
        RenderSession::new(1000, -2.0, -1.5, 1.0, 1.5, 1, 1, Palette::classic()).unwrap(),
    );
    render(&session, 1, 1).unwrap();
    let pixel = session.pixel(0, 0);
    assert_eq!(pixel >> 24, 255);
    assert_eq!(pixel & 0x00FF_FFFF, 0);
}

#[test]
fn render_is_deterministic_across_worker_and_split_factors() {
    let a = build(32, 24);
    render(&a, 1, 1).unwrap();

    let b = build(32, 24);
    render(&b, 8, 8).unwrap();

    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn every_pixel_is_written_by_at_most_one_tile() {
    // Tiles are dispatched one at a time (a single-worker pool) so that a
    // per-pixel before/after diff unambiguously attributes each write to the
    // tile that caused it; overlapping tiles would show some pixel touched
    // more than once.
    use std::sync::atomic::{AtomicU32, Ordering};

    let width = 20;
    let height = 20;
    let counters: Vec<AtomicU32> = (0..width * height).map(|_| AtomicU32::new(0)).collect();
    let counters = Arc::new(counters);

    let session = build(width, height);
    let pool = mandelpool::WorkerPool::new(1).unwrap();
    for tile in mandelpool::kernel::divide_region(session.region(), 5) {
        let session = Arc::clone(&session);
        let counters = Arc::clone(&counters);
        pool.enqueue(move || {
            let before = session.snapshot();
            mandelpool::kernel::render_tile(tile, &session);
            let after = session.snapshot();
            for (i, (b, a)) in before.iter().zip(after.iter()).enumerate() {
                if b != a {
                    counters[i].fetch_add(1, Ordering::SeqCst);
                }
            }
        });
    }
    drop(pool);

    for c in counters.iter() {
        assert!(c.load(Ordering::SeqCst) <= 1);
    }
}

#[test]
fn async_render_matches_synchronous_render() {
    let sync_session = build(40, 30);
    render(&sync_session, 4, 4).unwrap();

    let async_session = build(40, 30);
    let handle = render_async(Arc::clone(&async_session), 4, 4);
    let finished = handle.join().unwrap();

    assert_eq!(finished.snapshot(), sync_session.snapshot());
}

#[test]
fn render_rejects_zero_split() {
    let session = build(16, 16);
    assert!(render(&session, 2, 0).is_err());
}

#[test]
fn render_rejects_split_above_max() {
    let session = build(4, 4);
    assert!(render(&session, 2, mandelpool::config::SPLIT_MAX + 1).is_err());
}

#[test]
fn split_factor_finer_than_image_resolution_still_fills_every_pixel() {
    // A split factor this far above the pixel grid produces tiles narrower
    // than one screen pixel; every pixel must still end up opaque rather
    // than left at its zero-initialized, alpha=0 state.
    let session = build(16, 16);
    render(&session, 4, 20).unwrap();
    for color in session.snapshot() {
        assert_eq!(color >> 24, 255);
    }
}

#[test]
fn async_render_image_is_readable_before_join() {
    let session = build(200, 150);
    let handle = render_async(Arc::clone(&session), 2, 16);
    // Reading mid-flight must not panic or race; it may be partially black.
    let _ = session.snapshot();
    handle.join().unwrap();
    for color in session.snapshot() {
        assert_eq!(color >> 24, 255);
    }
}
