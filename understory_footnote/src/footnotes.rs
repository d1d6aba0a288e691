// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The public handle for an embedded set of footnotes.
//!
//! [`Footnotes`] is what a page or document hands out to its scripts: open or
//! close by id, read and change settings, and unmount. Event wiring goes
//! through [`Footnotes::actions`], which exposes the full
//! [`Coordinator`] surface; [`Footnotes::coordinator`] is the read-only view.

use core::borrow::Borrow;
use core::fmt::Debug;

use crate::coordinator::{Adapter, Coordinator};
use crate::error::SettingsError;
use crate::footnote::Presentation;
use crate::settings::{SettingKey, SettingValue, Settings};
use crate::settle::{Defer, SettleQueue};

/// A mounted set of footnotes.
///
/// ```
/// use understory_footnote::adapters::surface::SurfacePresentation;
/// use understory_footnote::coordinator::Adapter;
/// use understory_footnote::footnote::Footnote;
/// use understory_footnote::footnotes::Footnotes;
/// use understory_footnote::settings::Settings;
///
/// let adapter = Adapter::new(vec![
///     Footnote::new(String::from("fn1"), SurfacePresentation::new(0, 1)),
///     Footnote::new(String::from("fn2"), SurfacePresentation::new(2, 3)),
/// ]);
/// let mut notes: Footnotes<String, _> = Footnotes::new(adapter, Settings::default());
/// notes.activate("fn1");
/// notes.actions().run_settles();
/// assert!(notes.coordinator().is_active("fn1"));
/// notes.dismiss::<str>(None);
/// notes.actions().run_settles();
/// assert!(!notes.coordinator().is_active("fn1"));
/// notes.unmount();
/// ```
#[derive(Debug)]
pub struct Footnotes<K, P: Presentation, D = SettleQueue<K>> {
    coordinator: Coordinator<K, P, D>,
}

impl<K, P, D> Footnotes<K, P, D>
where
    K: Ord + Clone + Debug,
    P: Presentation,
    D: Defer<K> + Default,
{
    /// Mount `adapter` with `settings`.
    pub fn new(adapter: Adapter<K, P>, settings: Settings<P::Handle>) -> Self {
        Self {
            coordinator: Coordinator::new(adapter, settings),
        }
    }
}

impl<K, P, D> Footnotes<K, P, D>
where
    K: Ord + Clone + Debug,
    P: Presentation,
    D: Defer<K>,
{
    /// Mount `adapter` with `settings`, scheduling settle steps through `defer`.
    pub fn with_defer(adapter: Adapter<K, P>, settings: Settings<P::Handle>, defer: D) -> Self {
        Self {
            coordinator: Coordinator::with_defer(adapter, settings, defer),
        }
    }

    /// Open the footnote `id`.
    pub fn activate<Q>(&mut self, id: &Q)
    where
        K: Borrow<Q>,
        Q: Ord + Debug + ?Sized,
    {
        self.coordinator.activate(id);
    }

    /// Close the footnote `id`, or every footnote when `id` is `None`.
    pub fn dismiss<Q>(&mut self, id: Option<&Q>)
    where
        K: Borrow<Q>,
        Q: Ord + Debug + ?Sized,
    {
        match id {
            Some(id) => self.coordinator.dismiss(id),
            None => self.coordinator.dismiss_all(),
        }
    }

    /// Read one setting.
    pub fn get_setting(&self, key: SettingKey) -> SettingValue<P::Handle> {
        self.coordinator.get_setting(key)
    }

    /// Change one setting; applies from the next action.
    pub fn update_setting(
        &mut self,
        key: SettingKey,
        value: SettingValue<P::Handle>,
    ) -> Result<(), SettingsError> {
        self.coordinator.update_setting(key, value)
    }

    /// Read-only view of the coordinator, for inspecting footnote state.
    pub fn coordinator(&self) -> &Coordinator<K, P, D> {
        &self.coordinator
    }

    /// Full action surface, for event wiring and settle delivery.
    pub fn actions(&mut self) -> &mut Coordinator<K, P, D> {
        &mut self.coordinator
    }

    /// Destroy every footnote and run the adapter's teardown.
    pub fn unmount(self) {
        self.coordinator.unmount();
    }
}
