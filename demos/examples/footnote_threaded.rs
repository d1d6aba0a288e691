// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Settle steps timed by a worker thread and posted back to the owning thread.
//!
//! The coordinator stays on the main thread. Its `Defer` implementation stamps
//! each step with a due time and queues it to a single worker, which waits for
//! the visual transition and sends the step back over a channel. One worker
//! fed by one queue delivers steps in the order they were scheduled.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_footnote_demos --example footnote_threaded`

use std::sync::mpsc::{Receiver, Sender, channel};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::warn;
use tracing_subscriber::EnvFilter;
use understory_footnote::adapters::surface::SurfacePresentation;
use understory_footnote::coordinator::{Adapter, Coordinator};
use understory_footnote::footnote::Footnote;
use understory_footnote::settings::Settings;
use understory_footnote::settle::Defer;
use understory_footnote::types::{Settle, SettleStep};

const TRANSITION: Duration = Duration::from_millis(25);

/// Queues settle steps to the timer thread.
#[derive(Debug)]
struct Posted(Sender<(Instant, Settle<u32>)>);

impl Defer<u32> for Posted {
    fn defer(&mut self, task: Settle<u32>) {
        if let Err(err) = self.0.send((Instant::now() + TRANSITION, task)) {
            let (_, task) = err.0;
            warn!(id = task.id, step = ?task.step, "timer thread gone; settle step dropped");
        }
    }
}

/// Start the timer thread: steps come in on one channel and go back out on the
/// other, each no earlier than its due time and never out of order.
fn spawn_timer() -> (Posted, Receiver<Settle<u32>>, JoinHandle<()>) {
    let (work_tx, work_rx) = channel::<(Instant, Settle<u32>)>();
    let (done_tx, done_rx) = channel();
    let worker = thread::spawn(move || {
        for (due, task) in work_rx {
            thread::sleep(due.saturating_duration_since(Instant::now()));
            if done_tx.send(task).is_err() {
                break;
            }
        }
    });
    (Posted(work_tx), done_rx, worker)
}

fn deliver(
    notes: &mut Coordinator<u32, SurfacePresentation, Posted>,
    rx: &Receiver<Settle<u32>>,
    n: usize,
) -> Vec<(u32, SettleStep)> {
    let mut delivered = Vec::with_capacity(n);
    for task in rx.iter().take(n) {
        println!("  settle {:?} for #{}", task.step, task.id);
        delivered.push((task.id, task.step));
        notes.settle(task);
    }
    delivered
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let (posted, rx, worker) = spawn_timer();
    let adapter = Adapter::new(vec![
        Footnote::new(1, SurfacePresentation::new(10, 11)),
        Footnote::new(2, SurfacePresentation::new(20, 21)),
    ]);
    let mut notes = Coordinator::with_defer(adapter, Settings::default(), posted);

    println!("== Open #1 ==");
    notes.activate(&1);
    // Rejected until #1 settles.
    notes.toggle(&1);
    deliver(&mut notes, &rx, 1);
    assert!(notes.is_active(&1));

    println!("== Open #2 (closes #1) ==");
    notes.activate(&2);
    let order = deliver(&mut notes, &rx, 2);
    assert_eq!(order, [(1, SettleStep::Remove), (2, SettleStep::Ready)]);
    assert!(!notes.is_active(&1));
    assert!(notes.is_active(&2));

    // Dropping the coordinator drops the sender, which ends the worker loop.
    notes.unmount();
    if worker.join().is_err() {
        warn!("timer thread panicked");
    }
}
