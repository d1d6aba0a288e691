// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single footnote: one reference button paired with one popover.
//!
//! ## Overview
//!
//! [`Footnote`] owns its [`Presentation`] and walks the
//! [`ActivationState`] machine. It knows nothing about other footnotes; the
//! [coordinator](crate::coordinator) enforces every cross-instance rule.
//!
//! Each transition is split in two halves:
//! - a synchronous half ([`Footnote::activate`], [`Footnote::dismiss`]) that
//!   engages or disengages the visuals and invokes the optional callback;
//! - a deferred half ([`Footnote::ready`], [`Footnote::remove`]) that runs once
//!   the visual transition has settled.
//!
//! ## Minimal example
//!
//! ```
//! use understory_footnote::adapters::surface::SurfacePresentation;
//! use understory_footnote::footnote::Footnote;
//! use understory_footnote::types::ActivationState;
//!
//! let mut note = Footnote::new("fn1", SurfacePresentation::new(1, 2));
//! assert!(note.activate(None));
//! assert_eq!(note.state(), ActivationState::Activating);
//! assert!(!note.is_ready());
//! note.ready();
//! assert_eq!(note.state(), ActivationState::Active);
//! assert!(note.dismiss(None));
//! note.remove();
//! assert_eq!(note.state(), ActivationState::Inactive);
//! ```

use tracing::{debug, trace};

use crate::types::ActivationState;

/// Presentation collaborator owned by a single [`Footnote`].
///
/// Implemented by the layer that builds and styles the button/popover nodes
/// (a DOM binding, a retained scene, a terminal UI). The footnote calls these
/// hooks at fixed points of its lifecycle and never inspects the handles.
pub trait Presentation {
    /// Opaque handle passed to caller-supplied transition callbacks.
    type Handle;

    /// Handle of the popover node.
    fn popover(&self) -> &Self::Handle;

    /// Handle of the reference button.
    fn button(&self) -> &Self::Handle;

    /// Mark the button engaged and attach the popover next to it.
    fn engage(&mut self);

    /// Mark the button and popover disengaged; the popover stays attached
    /// until [`Presentation::detach`] so a closing transition can play.
    fn disengage(&mut self);

    /// Reveal the popover once its opening transition has settled.
    fn reveal(&mut self);

    /// Detach the popover after its closing transition. Must be idempotent.
    fn detach(&mut self);

    /// Returns `true` while the popover is attached to the presentation surface.
    fn is_mounted(&self) -> bool;

    /// Recompute placement. Only called while mounted.
    fn reposition(&mut self);

    /// Recompute size. Only called while mounted.
    fn resize(&mut self);

    /// Release everything this presentation owns.
    fn destroy(&mut self);
}

/// One footnote and its lifecycle state.
///
/// The state only changes through [`activate`](Self::activate),
/// [`ready`](Self::ready), [`dismiss`](Self::dismiss), and
/// [`remove`](Self::remove). Requests that do not apply to the current state
/// are dropped and reported as `false` (or ignored for the settle halves).
#[derive(Clone, Debug)]
pub struct Footnote<K, P> {
    id: K,
    state: ActivationState,
    presentation: P,
}

impl<K: core::fmt::Debug, P: Presentation> Footnote<K, P> {
    /// Create an inactive footnote that owns `presentation`.
    pub fn new(id: K, presentation: P) -> Self {
        Self {
            id,
            state: ActivationState::Inactive,
            presentation,
        }
    }

    /// Identifier of this footnote.
    pub fn id(&self) -> &K {
        &self.id
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ActivationState {
        self.state
    }

    /// Shared access to the owned presentation.
    pub fn presentation(&self) -> &P {
        &self.presentation
    }

    /// Returns `true` when the popover is shown or showing.
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Returns `true` when no transition is in flight.
    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    /// Start opening: `Inactive → Activating`.
    ///
    /// Engages the presentation, then invokes `on_activate(popover, button)`
    /// exactly once. Returns `false` without side effects from any other state.
    pub fn activate(&mut self, on_activate: Option<&dyn Fn(&P::Handle, &P::Handle)>) -> bool {
        if self.state != ActivationState::Inactive {
            trace!(id = ?self.id, state = ?self.state, "activate dropped");
            return false;
        }
        self.state = ActivationState::Activating;
        self.presentation.engage();
        if let Some(callback) = on_activate {
            callback(self.presentation.popover(), self.presentation.button());
        }
        debug!(id = ?self.id, "activating");
        true
    }

    /// Start closing: `Activating | Active → Dismissing`.
    ///
    /// Disengages the presentation, then invokes `on_dismiss(popover, button)`
    /// exactly once. Returns `false` without side effects from any other state.
    pub fn dismiss(&mut self, on_dismiss: Option<&dyn Fn(&P::Handle, &P::Handle)>) -> bool {
        if !self.state.is_active() {
            trace!(id = ?self.id, state = ?self.state, "dismiss dropped");
            return false;
        }
        self.state = ActivationState::Dismissing;
        self.presentation.disengage();
        if let Some(callback) = on_dismiss {
            callback(self.presentation.popover(), self.presentation.button());
        }
        debug!(id = ?self.id, "dismissing");
        true
    }

    /// Finish opening: `Activating → Active`. No-op from any other state.
    pub fn ready(&mut self) {
        if self.state != ActivationState::Activating {
            trace!(id = ?self.id, state = ?self.state, "ready ignored");
            return;
        }
        self.presentation.reveal();
        self.state = ActivationState::Active;
        debug!(id = ?self.id, "active");
    }

    /// Finish closing: detach the popover and return to `Inactive`.
    ///
    /// Idempotent. Ignored while the footnote is shown or showing, so a stale
    /// cleanup can never tear down a popover that was reopened.
    pub fn remove(&mut self) {
        if self.state.is_active() {
            trace!(id = ?self.id, state = ?self.state, "remove ignored");
            return;
        }
        self.presentation.detach();
        if self.state == ActivationState::Dismissing {
            self.state = ActivationState::Inactive;
            debug!(id = ?self.id, "inactive");
        }
    }

    /// Recompute placement if the popover is mounted. Safe in any state.
    pub fn reposition(&mut self) {
        if self.presentation.is_mounted() {
            self.presentation.reposition();
        }
    }

    /// Recompute size if the popover is mounted. Safe in any state.
    pub fn resize(&mut self) {
        if self.presentation.is_mounted() {
            self.presentation.resize();
        }
    }

    /// Release the owned presentation unconditionally.
    ///
    /// Used at teardown, not as part of a dismissal.
    pub fn destroy(mut self) {
        self.presentation.destroy();
        debug!(id = ?self.id, "destroyed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    use crate::adapters::surface::{ButtonFlags, PopoverFlags, SurfacePresentation};

    fn note() -> Footnote<&'static str, SurfacePresentation> {
        Footnote::new("a", SurfacePresentation::new(10, 20))
    }

    #[test]
    fn full_cycle_walks_all_states() {
        let mut n = note();
        assert!(n.activate(None));
        assert_eq!(n.state(), ActivationState::Activating);
        n.ready();
        assert_eq!(n.state(), ActivationState::Active);
        assert!(n.dismiss(None));
        assert_eq!(n.state(), ActivationState::Dismissing);
        n.remove();
        assert_eq!(n.state(), ActivationState::Inactive);
    }

    #[test]
    fn activate_engages_before_callback() {
        let mut n = note();
        let seen = Cell::new(None);
        let cb = |popover: &u32, button: &u32| {
            seen.set(Some((*popover, *button)));
        };
        assert!(n.activate(Some(&cb)));
        assert_eq!(seen.get(), Some((10, 20)));
        let s = n.presentation();
        assert!(s.is_mounted());
        assert!(s.button_flags().contains(ButtonFlags::ACTIVE | ButtonFlags::CHANGING));
    }

    #[test]
    fn activate_from_non_inactive_is_dropped() {
        let mut n = note();
        let calls = Cell::new(0);
        let cb = |_: &u32, _: &u32| calls.set(calls.get() + 1);
        assert!(n.activate(Some(&cb)));
        assert!(!n.activate(Some(&cb)));
        n.ready();
        assert!(!n.activate(Some(&cb)));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn dismiss_from_inactive_is_dropped() {
        let mut n = note();
        let calls = Cell::new(0);
        let cb = |_: &u32, _: &u32| calls.set(calls.get() + 1);
        assert!(!n.dismiss(Some(&cb)));
        assert_eq!(n.state(), ActivationState::Inactive);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn dismiss_while_activating_is_allowed() {
        let mut n = note();
        n.activate(None);
        assert!(n.dismiss(None));
        assert_eq!(n.state(), ActivationState::Dismissing);
        // A late ready from the earlier activation must not resurrect it.
        n.ready();
        assert_eq!(n.state(), ActivationState::Dismissing);
    }

    #[test]
    fn ready_reveals_popover() {
        let mut n = note();
        n.ready();
        assert_eq!(n.state(), ActivationState::Inactive);
        n.activate(None);
        n.ready();
        let s = n.presentation();
        assert!(s.popover_flags().contains(PopoverFlags::ACTIVE));
        assert!(!s.button_flags().contains(ButtonFlags::CHANGING));
    }

    #[test]
    fn remove_is_idempotent() {
        let mut n = note();
        n.activate(None);
        n.ready();
        n.dismiss(None);
        n.remove();
        n.remove();
        assert_eq!(n.state(), ActivationState::Inactive);
        assert!(!n.presentation().is_mounted());
        assert!(n.is_ready());
    }

    #[test]
    fn remove_never_detaches_a_shown_popover() {
        let mut n = note();
        n.activate(None);
        n.ready();
        n.remove();
        assert_eq!(n.state(), ActivationState::Active);
        assert!(n.presentation().is_mounted());
    }

    #[test]
    fn geometry_only_while_mounted() {
        let mut n = note();
        n.reposition();
        n.resize();
        assert_eq!(n.presentation().layout(), None);
        n.activate(None);
        n.reposition();
        assert!(n.presentation().layout().is_some());
    }
}
