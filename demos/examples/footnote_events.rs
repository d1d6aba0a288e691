// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events and viewport changes driving popover geometry.
//!
//! Run:
//! - `cargo run -p understory_footnote_demos --example footnote_events`

use kurbo::Size;
use understory_footnote::adapters::surface::{PopoverFlags, SharedViewport, SurfacePresentation};
use understory_footnote::coordinator::Adapter;
use understory_footnote::events::InputEvent;
use understory_footnote::footnote::Footnote;
use understory_footnote::footnotes::Footnotes;
use understory_footnote::settings::Settings;

fn main() {
    let viewport = SharedViewport::new(Size::new(1200.0, 900.0));
    let adapter = Adapter::new(vec![
        Footnote::new(
            String::from("short"),
            SurfacePresentation::new(1, 2)
                .with_viewport(viewport.clone())
                .with_content(Size::new(400.0, 80.0)),
        ),
        Footnote::new(
            String::from("long"),
            SurfacePresentation::new(3, 4)
                .with_viewport(viewport.clone())
                .with_content(Size::new(400.0, 700.0)),
        ),
    ])
    .with_teardown(|| println!("== Teardown: listeners removed =="));

    let mut notes: Footnotes<String, _> = Footnotes::new(adapter, Settings::default());

    notes
        .actions()
        .handle(InputEvent::ButtonPress(String::from("long")));
    notes.actions().run_settles();
    report(&notes, "after opening `long`");

    viewport.set(Size::new(600.0, 500.0));
    notes.actions().handle(InputEvent::Resize);
    report(&notes, "after shrinking the window");

    notes.actions().handle(InputEvent::DocumentPress);
    notes.actions().run_settles();
    report(&notes, "after pressing outside");

    notes.unmount();
}

fn report(notes: &Footnotes<String, SurfacePresentation>, label: &str) {
    println!("== {label} ==");
    for note in notes.coordinator().footnotes() {
        let surface = note.presentation();
        println!(
            "  {:<6} {:?} frame={:?} scrollable={}",
            note.id(),
            note.state(),
            surface.layout().map(|l| l.frame),
            surface.popover_flags().contains(PopoverFlags::SCROLLABLE),
        );
    }
}
