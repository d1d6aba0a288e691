// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Randomized action sequences against the coordinator's invariants.

use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;
use understory_footnote::adapters::surface::SurfacePresentation;
use understory_footnote::coordinator::{Adapter, Coordinator};
use understory_footnote::events::InputEvent;
use understory_footnote::footnote::{Footnote, Presentation};
use understory_footnote::settings::Settings;
use understory_footnote::types::{ActionCallback, ActivationState};

const IDS: [u8; 4] = [0, 1, 2, 3];

#[derive(Clone, Debug)]
enum Action {
    Activate(u8),
    Dismiss(u8),
    Toggle(u8),
    DismissAll,
    TouchOutside,
    Input(InputEvent<u8>),
}

fn action() -> impl Strategy<Value = Action> {
    // Ids 0..=4; 4 is never mounted.
    let id = 0_u8..5;
    prop_oneof![
        id.clone().prop_map(Action::Activate),
        id.clone().prop_map(Action::Dismiss),
        id.clone().prop_map(Action::Toggle),
        Just(Action::DismissAll),
        Just(Action::TouchOutside),
        id.prop_map(|id| Action::Input(InputEvent::ButtonPress(id))),
        Just(Action::Input(InputEvent::Scroll)),
        Just(Action::Input(InputEvent::Resize)),
    ]
}

struct Harness {
    notes: Coordinator<u8, SurfacePresentation>,
    activations: Rc<Cell<usize>>,
    dismissals: Rc<Cell<usize>>,
}

fn counter(count: &Rc<Cell<usize>>) -> ActionCallback<u32> {
    let count = count.clone();
    Rc::new(move |_: &u32, _: &u32| count.set(count.get() + 1))
}

fn harness(allow_multiple: bool, touch: bool) -> Harness {
    let activations = Rc::new(Cell::new(0));
    let dismissals = Rc::new(Cell::new(0));
    let settings = Settings::default()
        .with_allow_multiple(allow_multiple)
        .with_dismiss_on_document_touch(touch)
        .with_activate_callback(counter(&activations))
        .with_dismiss_callback(counter(&dismissals));
    let adapter: Adapter<u8, _> = IDS
        .iter()
        .map(|&id| {
            let n = u32::from(id);
            Footnote::new(id, SurfacePresentation::new(2 * n, 2 * n + 1))
        })
        .collect();
    Harness {
        notes: Coordinator::new(adapter, settings),
        activations,
        dismissals,
    }
}

impl Harness {
    fn apply(&mut self, action: &Action) {
        match action {
            Action::Activate(id) => self.notes.activate(id),
            Action::Dismiss(id) => self.notes.dismiss(id),
            Action::Toggle(id) => self.notes.toggle(id),
            Action::DismissAll => self.notes.dismiss_all(),
            Action::TouchOutside => self.notes.touch_outside(),
            Action::Input(event) => self.notes.handle(event.clone()),
        }
    }

    fn states(&self) -> Vec<ActivationState> {
        self.notes.footnotes().iter().map(Footnote::state).collect()
    }

    fn callbacks(&self) -> usize {
        self.activations.get() + self.dismissals.get()
    }
}

proptest! {
    #[test]
    fn states_are_consistent(
        allow_multiple in any::<bool>(),
        touch in any::<bool>(),
        actions in prop::collection::vec(action(), 0..64),
        settle_mask in prop::collection::vec(any::<bool>(), 64),
    ) {
        let mut h = harness(allow_multiple, touch);
        for (action, settle) in actions.iter().zip(&settle_mask) {
            h.apply(action);
            for note in h.notes.footnotes() {
                let state = note.state();
                prop_assert_eq!(note.is_active(), state.is_active());
                prop_assert_eq!(note.is_ready(), state.is_ready());
                // Mounted exactly while the popover is shown, showing, or closing.
                prop_assert_eq!(
                    note.presentation().is_mounted(),
                    state != ActivationState::Inactive
                );
            }
            // One pending settle per footnote mid-transition.
            let changing = h.states().iter().filter(|s| !s.is_ready()).count();
            prop_assert_eq!(h.notes.pending_settles(), changing);
            if *settle {
                h.notes.run_settles();
            }
        }
    }

    #[test]
    fn single_open_holds_after_settle(
        actions in prop::collection::vec(action(), 0..64),
    ) {
        let mut h = harness(false, true);
        for action in &actions {
            h.apply(action);
            h.notes.run_settles();
            let open = h.notes.footnotes().iter().filter(|n| n.is_active()).count();
            prop_assert!(open <= 1, "{} footnotes open after {:?}", open, action);
            prop_assert_eq!(h.notes.pending_settles(), 0);
        }
    }

    #[test]
    fn unknown_ids_change_nothing(
        prefix in prop::collection::vec(action(), 0..32),
        allow_multiple in any::<bool>(),
    ) {
        let mut h = harness(allow_multiple, true);
        for action in &prefix {
            h.apply(action);
        }
        let states = h.states();
        let callbacks = h.callbacks();
        let pending = h.notes.pending_settles();
        h.notes.activate(&42);
        h.notes.dismiss(&42);
        h.notes.toggle(&42);
        h.notes.handle(InputEvent::ButtonPress(42));
        prop_assert_eq!(h.states(), states);
        prop_assert_eq!(h.callbacks(), callbacks);
        prop_assert_eq!(h.notes.pending_settles(), pending);
    }

    #[test]
    fn disabled_outside_touch_changes_nothing(
        prefix in prop::collection::vec(action(), 0..32),
    ) {
        let mut h = harness(true, false);
        for action in &prefix {
            h.apply(action);
        }
        let states = h.states();
        let callbacks = h.callbacks();
        h.notes.touch_outside();
        h.notes.handle(InputEvent::DocumentPress);
        prop_assert_eq!(h.states(), states);
        prop_assert_eq!(h.callbacks(), callbacks);
    }
}
