// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation-side helpers that plug into the core.
//!
//! The core only talks to the [`Presentation`](crate::footnote::Presentation)
//! trait. These modules provide a Kurbo-based popover [`layout`] and a
//! headless [`surface`] presentation built on it.

pub mod layout;
pub mod surface;
