// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-open footnotes with activation callbacks.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_footnote_demos --example footnote_basics`

use std::rc::Rc;

use tracing_subscriber::EnvFilter;
use understory_footnote::adapters::surface::SurfacePresentation;
use understory_footnote::coordinator::{Adapter, Coordinator};
use understory_footnote::footnote::Footnote;
use understory_footnote::settings::Settings;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let settings = Settings::<u32>::default()
        .with_activate_callback(Rc::new(|popover: &u32, button: &u32| {
            println!("  opened popover #{popover} from button #{button}");
        }))
        .with_dismiss_callback(Rc::new(|popover: &u32, _: &u32| {
            println!("  closed popover #{popover}");
        }));

    let adapter: Adapter<&str, _> = ["fn:1", "fn:2", "fn:3"]
        .into_iter()
        .zip(0_u32..)
        .map(|(id, n)| Footnote::new(id, SurfacePresentation::new(2 * n, 2 * n + 1)))
        .collect();
    let mut notes: Coordinator<_, _> = Coordinator::new(adapter, settings);

    println!("== Activate fn:1 ==");
    notes.activate("fn:1");
    println!("  pending settles: {}", notes.pending_settles());
    notes.run_settles();

    println!("== Activate fn:2 (fn:1 closes first) ==");
    notes.activate("fn:2");
    notes.run_settles();

    for note in notes.footnotes() {
        println!("  {} → {:?}", note.id(), note.state());
    }
    assert!(!notes.is_active("fn:1"));
    assert!(notes.is_active("fn:2"));

    println!("== Toggle fn:2 twice in one tick (second is dropped) ==");
    notes.toggle("fn:2");
    notes.toggle("fn:2");
    notes.run_settles();
    assert!(!notes.is_active("fn:2"));

    notes.unmount();
}
