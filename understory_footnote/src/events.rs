// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Default mapping from input events to coordinator actions.
//!
//! ## Usage
//!
//! A host translates its raw input (clicks, taps, key presses, window
//! notifications) into [`InputEvent`] values and feeds them to
//! [`Coordinator::handle`]. Hosts with different needs can skip this module and
//! call the actions directly; the coordinator does not care which physical
//! event triggered an action.
//!
//! | Event | Action |
//! |---|---|
//! | [`ButtonPress`](InputEvent::ButtonPress) | [`toggle`](Coordinator::toggle) |
//! | [`PopoverPress`](InputEvent::PopoverPress) | nothing |
//! | [`DocumentPress`](InputEvent::DocumentPress) | [`touch_outside`](Coordinator::touch_outside) |
//! | [`Escape`](InputEvent::Escape) | [`dismiss_all`](Coordinator::dismiss_all) |
//! | [`Scroll`](InputEvent::Scroll) | [`reposition_all`](Coordinator::reposition_all) |
//! | [`Resize`](InputEvent::Resize) | [`resize_all`](Coordinator::resize_all) |

use core::fmt::Debug;

use crate::coordinator::Coordinator;
use crate::footnote::Presentation;
use crate::settle::Defer;

/// Input relevant to footnotes, already resolved to a footnote id where it applies.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum InputEvent<K> {
    /// Click, tap, or keyboard activation of a footnote's button.
    ButtonPress(K),
    /// Press inside an open popover.
    PopoverPress,
    /// Press anywhere outside every button and popover.
    DocumentPress,
    /// Escape key.
    Escape,
    /// The document or viewport scrolled.
    Scroll,
    /// The viewport changed size.
    Resize,
}

impl<K, P, D> Coordinator<K, P, D>
where
    K: Ord + Clone + Debug,
    P: Presentation,
    D: Defer<K>,
{
    /// Apply the default action for `event`.
    pub fn handle(&mut self, event: InputEvent<K>) {
        match event {
            InputEvent::ButtonPress(id) => self.toggle(&id),
            InputEvent::PopoverPress => {}
            InputEvent::DocumentPress => self.touch_outside(),
            InputEvent::Escape => self.dismiss_all(),
            InputEvent::Scroll => self.reposition_all(),
            InputEvent::Resize => self.resize_all(),
        }
    }
}
