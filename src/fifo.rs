//! A generic First-In-First-Out queue with owned payloads.
//!
//! Ported from `fifo.c`/`fifo.h` (Sebastian Rautila) in the original C
//! mandelpool sources: a singly-linked list with `head`/`last` pointers and an
//! explicit `payloadDestructor` invoked on any payload still queued at
//! destroy time.
//!
//! The C queue type-erases its payload behind `void*` plus a caller-supplied
//! destructor function pointer. Rust has no need for that erasure: `Fifo<T>`
//! is parameterized directly over the owned payload type, and "the
//! destructor" is just `T`'s own `Drop` impl, which runs automatically when a
//! residual payload is dropped during teardown. No disposer callback needs to
//! be threaded through by hand.
//!
//! This queue provides no synchronization of its own — ordering under
//! concurrent access is the caller's responsibility (the worker pool in
//! `crate::threadpool` supplies a mutex).

use std::collections::VecDeque;

/// An ordered sequence of owned payloads of type `T`.
///
/// `enqueue` is O(1) amortized at the tail; `dequeue` is O(1) at the head.
/// Dropping a non-empty `Fifo<T>` drops every remaining payload in FIFO
/// order, matching `fifo_destroy`'s drain loop.
#[derive(Debug)]
pub struct Fifo<T> {
    items: VecDeque<T>,
}

impl<T> Fifo<T> {
    /// `fifo_create` — returns an empty queue.
    pub fn new() -> Self {
        Fifo {
            items: VecDeque::new(),
        }
    }

    /// `fifo_isempty` — whether the queue currently holds zero payloads.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The number of payloads currently queued.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `fifo_enqueue` — append `payload` at the tail, transferring ownership
    /// to the queue.
    pub fn enqueue(&mut self, payload: T) {
        self.items.push_back(payload);
    }

    /// `fifo_dequeue` — remove and return the head payload, or `None` if the
    /// queue is empty (the C sentinel `NULL` return).
    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Drain every remaining payload, in FIFO order, dropping each. Used by
    /// pool teardown to run `fifo_destroy`'s semantics explicitly rather than
    /// relying on `Fifo`'s own `Drop` — callers that want to *count* drained
    /// payloads (for the "pool conservation" testable property) use this
    /// instead of letting the queue simply go out of scope.
    pub fn drain(&mut self) -> impl Iterator<Item = T> + '_ {
        self.items.drain(..)
    }
}

impl<T> Default for Fifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn empty_queue_has_zero_length() {
        let q: Fifo<i32> = Fifo::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
    }

    #[test]
    fn fifo_ordering_preserved() {
        let mut q = Fifo::new();
        for i in 0..5 {
            q.enqueue(i);
        }
        assert_eq!(q.len(), 5);
        for i in 0..5 {
            assert_eq!(q.dequeue(), Some(i));
        }
        assert_eq!(q.dequeue(), None);
        assert!(q.is_empty());
    }

    #[test]
    fn dequeue_on_empty_returns_none() {
        let mut q: Fifo<i32> = Fifo::new();
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn is_empty_tracks_length_exactly() {
        let mut q = Fifo::new();
        assert!(q.is_empty());
        q.enqueue(1);
        assert!(!q.is_empty());
        q.dequeue();
        assert!(q.is_empty());
    }

    #[test]
    fn dropping_residual_payloads_runs_their_destructors() {
        let counter = Arc::new(AtomicUsize::new(0));

        struct DropCounter(Arc<AtomicUsize>);
        impl Drop for DropCounter {
            fn drop(&mut self) {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        {
            let mut q = Fifo::new();
            for _ in 0..3 {
                q.enqueue(DropCounter(Arc::clone(&counter)));
            }
            // queue dropped here with 3 residual payloads
        }

        assert_eq!(counter.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn drain_yields_payloads_in_fifo_order() {
        let mut q = Fifo::new();
        for i in 0..4 {
            q.enqueue(i);
        }
        let drained: Vec<_> = q.drain().collect();
        assert_eq!(drained, vec![0, 1, 2, 3]);
        assert!(q.is_empty());
    }
}
