// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_footnote --heading-base-level=0

//! Understory Footnote: a deterministic, `no_std` lifecycle core for footnote popovers.
//!
//! ## Overview
//!
//! A footnote is a reference button paired with a popover. This crate decides
//! when popovers open and close; it does not render, lay out a document, or
//! listen for input. Those jobs belong to a presentation layer that implements
//! [`Presentation`](crate::footnote::Presentation) for each footnote and hands
//! the discovered set to a [`Coordinator`](crate::coordinator::Coordinator).
//!
//! ## Lifecycle
//!
//! Each [`Footnote`](crate::footnote::Footnote) walks
//! `Inactive → Activating → Active → Dismissing → Inactive`
//! (see [`ActivationState`](crate::types::ActivationState)).
//! Every transition has a synchronous half, which engages or disengages the
//! visuals, and a deferred settle half, which runs after the visual transition.
//! Between the two halves the footnote is not ready and rejects new requests.
//! Readiness is the only mutual-exclusion primitive; nothing is locked,
//! queued, or cancelled.
//!
//! ## Coordination
//!
//! The [`Coordinator`](crate::coordinator::Coordinator) owns the collection and
//! enforces the rules that span footnotes:
//! - unknown ids and not-ready footnotes are dropped silently;
//! - in single-open mode (the default), activating one footnote dismisses every other ready one;
//! - a press outside all footnotes dismisses them when
//!   [`dismiss_on_document_touch`](crate::settings::Settings::dismiss_on_document_touch) is set.
//!
//! ## Settling
//!
//! Settle steps are values ([`Settle`](crate::types::Settle)) handed to a
//! [`Defer`](crate::settle::Defer) implementation. Single-threaded hosts use
//! [`SettleQueue`](crate::settle::SettleQueue) and call
//! [`Coordinator::run_settles`](crate::coordinator::Coordinator::run_settles) on
//! the next tick. Threaded hosts can post steps back to the owning thread and
//! deliver them with [`Coordinator::settle`](crate::coordinator::Coordinator::settle).
//!
//! ## Workflow
//!
//! 1) Discover footnotes and build one presentation per footnote
//!    (for example [`SurfacePresentation`](crate::adapters::surface::SurfacePresentation)).
//! 2) Mount: [`Footnotes::new`](crate::footnotes::Footnotes::new) or
//!    [`Coordinator::new`](crate::coordinator::Coordinator::new).
//! 3) Feed input through [`Coordinator::handle`](crate::coordinator::Coordinator::handle)
//!    (see [`events`](crate::events)) or call actions directly.
//! 4) Deliver settle steps after each tick.
//! 5) Unmount.
//!
//! ```
//! use understory_footnote::adapters::surface::SurfacePresentation;
//! use understory_footnote::coordinator::{Adapter, Coordinator};
//! use understory_footnote::events::InputEvent;
//! use understory_footnote::footnote::Footnote;
//! use understory_footnote::settings::Settings;
//!
//! let adapter: Adapter<&str, _> = ["a", "b", "c"]
//!     .into_iter()
//!     .zip(0_u32..)
//!     .map(|(id, n)| Footnote::new(id, SurfacePresentation::new(2 * n, 2 * n + 1)))
//!     .collect();
//! let mut footnotes: Coordinator<_, _> = Coordinator::new(adapter, Settings::default());
//!
//! footnotes.handle(InputEvent::ButtonPress("a"));
//! footnotes.run_settles();
//! footnotes.handle(InputEvent::ButtonPress("b"));
//! footnotes.run_settles();
//! assert!(!footnotes.is_active("a"));
//! assert!(footnotes.is_active("b"));
//!
//! footnotes.handle(InputEvent::Escape);
//! footnotes.run_settles();
//! assert!(!footnotes.is_active("b"));
//! footnotes.unmount();
//! ```
//!
//! Transitions log through [`tracing`]: `debug` for accepted transitions,
//! `trace` for dropped requests.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod adapters;
pub mod coordinator;
pub mod error;
pub mod events;
pub mod footnote;
pub mod footnotes;
pub mod settings;
pub mod settle;
pub mod types;
