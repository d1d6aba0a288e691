// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinator implementation.
//!
//! ## Overview
//!
//! Owns the ordered collection of footnotes and mediates every state change.
//! It is the only place that enforces rules spanning several footnotes.
//!
//! ## Guards
//!
//! - Unknown ids are dropped silently.
//! - A footnote with a transition in flight (not [ready](crate::footnote::Footnote::is_ready))
//!   ignores further requests until its settle step is delivered. There is no
//!   preemption and no queuing.
//! - With [`Settings::allow_multiple`] off, activating a footnote first dismisses
//!   every other ready footnote.
//!
//! ## Settling
//!
//! Each accepted transition schedules exactly one [`Settle`] step through the
//! coordinator's [`Defer`] implementation: [`SettleStep::Ready`] after an
//! activation, [`SettleStep::Remove`] after a dismissal. Deliver it back with
//! [`Coordinator::settle`], or call [`Coordinator::run_settles`] when using the
//! built-in [`SettleQueue`].
//!
//! ## See Also
//!
//! [`events`](crate::events) for mapping input events onto these actions.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt::Debug;

use tracing::{debug, trace, warn};

use crate::error::SettingsError;
use crate::footnote::{Footnote, Presentation};
use crate::settings::{SettingKey, SettingValue, Settings};
use crate::settle::{Defer, SettleQueue};
use crate::types::{Settle, SettleStep};

/// Everything the presentation layer hands to the coordinator at setup.
///
/// Footnotes are listed in document order. The optional teardown runs once, on
/// [`Coordinator::unmount`], after every footnote has been destroyed; use it to
/// remove listeners or other process-wide state the presentation layer installed.
pub struct Adapter<K, P> {
    footnotes: Vec<Footnote<K, P>>,
    teardown: Option<Box<dyn FnOnce()>>,
}

impl<K, P> Adapter<K, P> {
    /// Bundle the discovered footnotes.
    pub fn new(footnotes: Vec<Footnote<K, P>>) -> Self {
        Self {
            footnotes,
            teardown: None,
        }
    }

    /// Run `teardown` when the coordinator is unmounted.
    pub fn with_teardown(mut self, teardown: impl FnOnce() + 'static) -> Self {
        self.teardown = Some(Box::new(teardown));
        self
    }
}

impl<K, P> FromIterator<Footnote<K, P>> for Adapter<K, P> {
    fn from_iter<I: IntoIterator<Item = Footnote<K, P>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<K: Debug, P> Debug for Adapter<K, P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Adapter")
            .field("footnotes", &self.footnotes.len())
            .field("teardown", &self.teardown.is_some())
            .finish()
    }
}

/// Coordinates activation and dismissal across a fixed set of footnotes.
///
/// ## Usage
///
/// - Construct with [`Coordinator::new`] (default [`Defer`], usually
///   [`SettleQueue`]) or [`Coordinator::with_defer`].
/// - Drive it with [`activate`](Self::activate), [`dismiss`](Self::dismiss),
///   [`toggle`](Self::toggle), [`dismiss_all`](Self::dismiss_all),
///   [`touch_outside`](Self::touch_outside), [`reposition_all`](Self::reposition_all),
///   and [`resize_all`](Self::resize_all).
/// - Deliver settle steps after the current synchronous work.
/// - Finish with [`unmount`](Self::unmount).
///
/// The collection never changes after construction. Ids must be unique; a
/// footnote whose id is already taken is destroyed at construction.
pub struct Coordinator<K, P: Presentation, D = SettleQueue<K>> {
    footnotes: Vec<Footnote<K, P>>,
    index: BTreeMap<K, usize>,
    settings: Settings<P::Handle>,
    defer: D,
    teardown: Option<Box<dyn FnOnce()>>,
}

impl<K: Debug, P: Presentation, D: Debug> Debug for Coordinator<K, P, D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Coordinator")
            .field("footnotes", &self.footnotes.len())
            .field("settings", &self.settings)
            .field("defer", &self.defer)
            .finish_non_exhaustive()
    }
}

impl<K, P, D> Coordinator<K, P, D>
where
    K: Ord + Clone + Debug,
    P: Presentation,
    D: Defer<K> + Default,
{
    /// Create a coordinator with a default-constructed [`Defer`].
    pub fn new(adapter: Adapter<K, P>, settings: Settings<P::Handle>) -> Self {
        Self::with_defer(adapter, settings, D::default())
    }
}

impl<K, P, D> Coordinator<K, P, D>
where
    K: Ord + Clone + Debug,
    P: Presentation,
    D: Defer<K>,
{
    /// Create a coordinator that schedules settle steps through `defer`.
    pub fn with_defer(adapter: Adapter<K, P>, settings: Settings<P::Handle>, defer: D) -> Self {
        let Adapter {
            footnotes: discovered,
            teardown,
        } = adapter;
        let mut footnotes = Vec::with_capacity(discovered.len());
        let mut index: BTreeMap<K, usize> = BTreeMap::new();
        for footnote in discovered {
            if index.contains_key(footnote.id()) {
                warn!(id = ?footnote.id(), "duplicate footnote id; destroying");
                footnote.destroy();
                continue;
            }
            index.insert(footnote.id().clone(), footnotes.len());
            footnotes.push(footnote);
        }
        debug!(count = footnotes.len(), "coordinator mounted");
        Self {
            footnotes,
            index,
            settings,
            defer,
            teardown,
        }
    }

    /// Footnotes in document order.
    pub fn footnotes(&self) -> &[Footnote<K, P>] {
        &self.footnotes
    }

    /// Look up a footnote by id.
    pub fn footnote<Q>(&self, id: &Q) -> Option<&Footnote<K, P>>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.index.get(id).map(|&i| &self.footnotes[i])
    }

    /// Returns `true` if the footnote exists and is shown or showing.
    pub fn is_active<Q>(&self, id: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.footnote(id).is_some_and(Footnote::is_active)
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings<P::Handle> {
        &self.settings
    }

    /// Mutable settings; changes apply from the next action.
    pub fn settings_mut(&mut self) -> &mut Settings<P::Handle> {
        &mut self.settings
    }

    /// Read one setting by key.
    pub fn get_setting(&self, key: SettingKey) -> SettingValue<P::Handle> {
        self.settings.get(key)
    }

    /// Write one setting by key.
    pub fn update_setting(
        &mut self,
        key: SettingKey,
        value: SettingValue<P::Handle>,
    ) -> Result<(), SettingsError> {
        self.settings.update(key, value)
    }

    /// The settle scheduler.
    pub fn scheduler(&self) -> &D {
        &self.defer
    }

    /// Mutable access to the settle scheduler.
    pub fn scheduler_mut(&mut self) -> &mut D {
        &mut self.defer
    }

    /// Open a footnote.
    ///
    /// In single-open mode every other ready footnote is dismissed first. The
    /// target is then activated if ready, positioned and sized immediately, and
    /// its [`SettleStep::Ready`] is scheduled.
    pub fn activate<Q>(&mut self, id: &Q)
    where
        K: Borrow<Q>,
        Q: Ord + Debug + ?Sized,
    {
        match self.index.get(id) {
            Some(&i) => self.activate_at(i),
            None => trace!(?id, "activate: unknown id"),
        }
    }

    /// Close a footnote if it is ready, scheduling its [`SettleStep::Remove`].
    pub fn dismiss<Q>(&mut self, id: &Q)
    where
        K: Borrow<Q>,
        Q: Ord + Debug + ?Sized,
    {
        match self.index.get(id) {
            Some(&i) => {
                self.dismiss_at(i);
            }
            None => trace!(?id, "dismiss: unknown id"),
        }
    }

    /// Dismiss when shown or showing, activate otherwise.
    pub fn toggle<Q>(&mut self, id: &Q)
    where
        K: Borrow<Q>,
        Q: Ord + Debug + ?Sized,
    {
        let Some(&i) = self.index.get(id) else {
            trace!(?id, "toggle: unknown id");
            return;
        };
        if self.footnotes[i].is_active() {
            self.dismiss_at(i);
        } else {
            self.activate_at(i);
        }
    }

    /// Dismiss every ready footnote. Footnotes mid-transition are skipped, not queued.
    ///
    /// Footnotes that were never opened are left alone, so the dismiss callback
    /// fires only for popovers that were actually shown.
    pub fn dismiss_all(&mut self) {
        for i in 0..self.footnotes.len() {
            self.dismiss_at(i);
        }
    }

    /// A press landed outside every footnote.
    ///
    /// Same as [`dismiss_all`](Self::dismiss_all) when
    /// [`Settings::dismiss_on_document_touch`] is on, otherwise nothing.
    pub fn touch_outside(&mut self) {
        if self.settings.dismiss_on_document_touch {
            self.dismiss_all();
        } else {
            trace!("touch outside ignored");
        }
    }

    /// Recompute placement of every mounted popover.
    pub fn reposition_all(&mut self) {
        for footnote in &mut self.footnotes {
            footnote.reposition();
        }
    }

    /// Recompute size of every mounted popover.
    pub fn resize_all(&mut self) {
        for footnote in &mut self.footnotes {
            footnote.resize();
        }
    }

    /// Complete a transition with a delivered settle step.
    ///
    /// Steps for unknown ids are dropped.
    pub fn settle(&mut self, task: Settle<K>) {
        let Some(&i) = self.index.get(&task.id) else {
            trace!(id = ?task.id, "settle: unknown id");
            return;
        };
        let footnote = &mut self.footnotes[i];
        match task.step {
            SettleStep::Ready => footnote.ready(),
            SettleStep::Remove => footnote.remove(),
        }
    }

    /// Destroy every footnote, then run the adapter's teardown.
    ///
    /// Pending settle steps are discarded with the coordinator.
    pub fn unmount(self) {
        let Self {
            footnotes,
            teardown,
            ..
        } = self;
        let count = footnotes.len();
        for footnote in footnotes {
            footnote.destroy();
        }
        if let Some(teardown) = teardown {
            teardown();
        }
        debug!(count, "coordinator unmounted");
    }

    fn activate_at(&mut self, i: usize) {
        if !self.settings.allow_multiple {
            for j in 0..self.footnotes.len() {
                if j != i {
                    self.dismiss_at(j);
                }
            }
        }

        let footnote = &mut self.footnotes[i];
        if !footnote.is_ready() {
            trace!(id = ?footnote.id(), "activate: not ready");
            return;
        }
        if footnote.activate(self.settings.activate_callback.as_deref()) {
            footnote.reposition();
            footnote.resize();
            self.defer.defer(Settle {
                id: footnote.id().clone(),
                step: SettleStep::Ready,
            });
        }
    }

    fn dismiss_at(&mut self, i: usize) -> bool {
        let footnote = &mut self.footnotes[i];
        if !footnote.is_ready() {
            trace!(id = ?footnote.id(), "dismiss: not ready");
            return false;
        }
        if !footnote.dismiss(self.settings.dismiss_callback.as_deref()) {
            return false;
        }
        self.defer.defer(Settle {
            id: footnote.id().clone(),
            step: SettleStep::Remove,
        });
        true
    }
}

impl<K, P> Coordinator<K, P, SettleQueue<K>>
where
    K: Ord + Clone + Debug,
    P: Presentation,
{
    /// Number of settle steps waiting in the queue.
    pub fn pending_settles(&self) -> usize {
        self.defer.len()
    }

    /// Deliver every settle step queued so far, in FIFO order.
    ///
    /// Call this from the macro-task after the one that triggered the
    /// transitions. Returns the number of steps delivered.
    pub fn run_settles(&mut self) -> usize {
        let batch = self.defer.take_batch();
        let delivered = batch.len();
        for task in batch {
            self.settle(task);
        }
        delivered
    }
}
