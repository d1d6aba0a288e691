// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the footnote lifecycle: activation states, settle steps, and callbacks.
//!
//! ## Overview
//!
//! These types describe the lifecycle protocol shared by a single
//! [`Footnote`](crate::footnote::Footnote) and the
//! [`Coordinator`](crate::coordinator::Coordinator) that drives many of them.

use alloc::rc::Rc;

/// Lifecycle state of a single footnote.
///
/// ```text
/// Inactive ──activate──▶ Activating ──ready──▶ Active
///     ▲                      │                   │
///     │                      └─────dismiss───────┤
///     │                                          ▼
///     └───────────────remove─────────────── Dismissing
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum ActivationState {
    /// Popover hidden and detached.
    #[default]
    Inactive,
    /// Popover engaged and waiting for its opening transition to settle.
    Activating,
    /// Popover shown and settled.
    Active,
    /// Popover disengaged and waiting for its closing transition to settle.
    Dismissing,
}

impl ActivationState {
    /// Returns `true` when the popover is shown or showing.
    #[inline]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Activating | Self::Active)
    }

    /// Returns `true` when no transition is in flight.
    ///
    /// This is the readiness guard: a new transition may only be requested
    /// while this holds.
    #[inline]
    pub const fn is_ready(self) -> bool {
        !matches!(self, Self::Activating | Self::Dismissing)
    }
}

/// The deferred half of a transition.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum SettleStep {
    /// Completes an activation: `Activating → Active`.
    Ready,
    /// Completes a dismissal: final cleanup, `Dismissing → Inactive`.
    Remove,
}

/// A settle step addressed to one footnote.
///
/// Produced by the [coordinator](crate::coordinator::Coordinator) and handed to
/// a [`Defer`](crate::settle::Defer) implementation. Once delivered back via
/// [`Coordinator::settle`](crate::coordinator::Coordinator::settle) it completes
/// the transition that scheduled it.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Settle<K> {
    /// Footnote the step belongs to.
    pub id: K,
    /// Which transition to complete.
    pub step: SettleStep,
}

/// Caller-supplied side effect invoked during a transition.
///
/// Receives the `(popover, button)` handles of the footnote being activated or
/// dismissed, after the footnote's own visual update.
pub type ActionCallback<H> = Rc<dyn Fn(&H, &H)>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_covers_activating_and_active() {
        assert!(!ActivationState::Inactive.is_active());
        assert!(ActivationState::Activating.is_active());
        assert!(ActivationState::Active.is_active());
        assert!(!ActivationState::Dismissing.is_active());
    }

    #[test]
    fn ready_excludes_changing_states() {
        assert!(ActivationState::Inactive.is_ready());
        assert!(!ActivationState::Activating.is_ready());
        assert!(ActivationState::Active.is_ready());
        assert!(!ActivationState::Dismissing.is_ready());
    }

    #[test]
    fn default_is_inactive() {
        assert_eq!(ActivationState::default(), ActivationState::Inactive);
    }
}
