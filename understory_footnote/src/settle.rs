// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deferral of settle steps.
//!
//! ## Overview
//!
//! Every transition finishes with exactly one deferred [`Settle`] step. The
//! coordinator hands it to a [`Defer`] implementation, and the host delivers it
//! back through [`Coordinator::settle`](crate::coordinator::Coordinator::settle)
//! once the current synchronous work (and its visual transition) is over.
//!
//! - Single-threaded event loops use [`SettleQueue`] and drain it with
//!   [`Coordinator::run_settles`](crate::coordinator::Coordinator::run_settles)
//!   from the next macro-task.
//! - Threaded hosts can implement [`Defer`] by posting the step over a channel
//!   to the thread that owns the coordinator.
//!
//! Scheduled steps are never cancelled. The readiness guard on each footnote
//! rejects new transitions until its step has been delivered.

use alloc::collections::VecDeque;

use crate::types::Settle;

/// Schedules a settle step to run once, after the current synchronous work.
pub trait Defer<K> {
    /// Schedule `task`. Delivery order must be FIFO by schedule time.
    fn defer(&mut self, task: Settle<K>);
}

/// FIFO queue of pending settle steps.
///
/// ```
/// use understory_footnote::settle::{Defer, SettleQueue};
/// use understory_footnote::types::{Settle, SettleStep};
///
/// let mut q = SettleQueue::new();
/// q.defer(Settle { id: "a", step: SettleStep::Ready });
/// q.defer(Settle { id: "b", step: SettleStep::Remove });
/// assert_eq!(q.len(), 2);
/// let batch: Vec<_> = q.take_batch().into_iter().map(|s| s.id).collect();
/// assert_eq!(batch, ["a", "b"]);
/// assert!(q.is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SettleQueue<K> {
    pending: VecDeque<Settle<K>>,
}

impl<K> SettleQueue<K> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// Number of steps waiting for delivery.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` when nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Pop the oldest pending step.
    pub fn pop(&mut self) -> Option<Settle<K>> {
        self.pending.pop_front()
    }

    /// Take every step scheduled so far, leaving the queue empty.
    ///
    /// Steps scheduled while the batch is being delivered land in the next batch.
    pub fn take_batch(&mut self) -> VecDeque<Settle<K>> {
        core::mem::take(&mut self.pending)
    }
}

impl<K> Default for SettleQueue<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Defer<K> for SettleQueue<K> {
    fn defer(&mut self, task: Settle<K>) {
        self.pending.push_back(task);
    }
}
