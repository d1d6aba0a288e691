// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless presentation: visual markers and geometry without a renderer.
//!
//! ## Notes
//!
//! [`SurfacePresentation`] records the same markers a DOM binding would toggle
//! as classes and attributes (engaged, changing, expanded, revealed,
//! scrollable) plus the popover's attachment and computed
//! [`PopoverLayout`]. A renderer (or a test) reads them back after each action.
//!
//! All surfaces of one document share a [`SharedViewport`]; update it when the
//! window changes, then call
//! [`Coordinator::resize_all`](crate::coordinator::Coordinator::resize_all).

use alloc::rc::Rc;
use core::cell::Cell;

use kurbo::Size;

use super::layout::PopoverLayout;
use crate::footnote::Presentation;

bitflags::bitflags! {
    /// Markers on the reference button.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ButtonFlags: u8 {
        /// Popover is shown or showing.
        const ACTIVE   = 0b0000_0001;
        /// A transition is in flight.
        const CHANGING = 0b0000_0010;
        /// Accessibility: the button's popover is expanded.
        const EXPANDED = 0b0000_0100;
    }
}

bitflags::bitflags! {
    /// Markers on the popover.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct PopoverFlags: u8 {
        /// Opening transition has settled; popover fully shown.
        const ACTIVE     = 0b0000_0001;
        /// Content overflows the viewport and scrolls.
        const SCROLLABLE = 0b0000_0010;
    }
}

/// Viewport size shared by every surface of a document.
#[derive(Clone, Debug)]
pub struct SharedViewport(Rc<Cell<Size>>);

impl SharedViewport {
    /// Create a viewport of the given size.
    pub fn new(size: Size) -> Self {
        Self(Rc::new(Cell::new(size)))
    }

    /// Current size.
    pub fn get(&self) -> Size {
        self.0.get()
    }

    /// Replace the size. Takes effect on the next reposition/resize.
    pub fn set(&self, size: Size) {
        self.0.set(size);
    }
}

impl Default for SharedViewport {
    fn default() -> Self {
        Self::new(Size::new(1280.0, 800.0))
    }
}

/// Node handle type used by [`SurfacePresentation`].
pub type SurfaceHandle = u32;

/// A [`Presentation`] that keeps its visual state in memory.
#[derive(Clone, Debug)]
pub struct SurfacePresentation {
    popover: SurfaceHandle,
    button: SurfaceHandle,
    button_flags: ButtonFlags,
    popover_flags: PopoverFlags,
    mounted: bool,
    destroyed: bool,
    viewport: SharedViewport,
    content: Size,
    layout: Option<PopoverLayout>,
}

impl SurfacePresentation {
    /// Create a detached surface for the given popover and button handles.
    pub fn new(popover: SurfaceHandle, button: SurfaceHandle) -> Self {
        Self {
            popover,
            button,
            button_flags: ButtonFlags::empty(),
            popover_flags: PopoverFlags::empty(),
            mounted: false,
            destroyed: false,
            viewport: SharedViewport::default(),
            content: Size::new(320.0, 120.0),
            layout: None,
        }
    }

    /// Use `viewport` for geometry.
    pub fn with_viewport(mut self, viewport: SharedViewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set the natural size of the popover content.
    pub fn with_content(mut self, content: Size) -> Self {
        self.content = content;
        self
    }

    /// Markers currently set on the button.
    pub fn button_flags(&self) -> ButtonFlags {
        self.button_flags
    }

    /// Markers currently set on the popover.
    pub fn popover_flags(&self) -> PopoverFlags {
        self.popover_flags
    }

    /// Last computed layout, if the popover was ever placed while mounted.
    pub fn layout(&self) -> Option<PopoverLayout> {
        self.layout
    }

    /// Returns `true` once [`Presentation::destroy`] ran.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    fn relayout(&mut self) {
        let layout = PopoverLayout::compute(self.viewport.get(), self.content);
        self.popover_flags
            .set(PopoverFlags::SCROLLABLE, layout.is_scrollable());
        self.layout = Some(layout);
    }
}

impl Presentation for SurfacePresentation {
    type Handle = SurfaceHandle;

    fn popover(&self) -> &SurfaceHandle {
        &self.popover
    }

    fn button(&self) -> &SurfaceHandle {
        &self.button
    }

    fn engage(&mut self) {
        self.button_flags
            .insert(ButtonFlags::ACTIVE | ButtonFlags::CHANGING | ButtonFlags::EXPANDED);
        self.mounted = true;
    }

    fn disengage(&mut self) {
        self.button_flags.remove(ButtonFlags::ACTIVE | ButtonFlags::EXPANDED);
        self.button_flags.insert(ButtonFlags::CHANGING);
        self.popover_flags.remove(PopoverFlags::ACTIVE);
    }

    fn reveal(&mut self) {
        self.popover_flags.insert(PopoverFlags::ACTIVE);
        self.button_flags.remove(ButtonFlags::CHANGING);
    }

    fn detach(&mut self) {
        self.mounted = false;
        self.button_flags.remove(ButtonFlags::CHANGING);
    }

    fn is_mounted(&self) -> bool {
        self.mounted
    }

    fn reposition(&mut self) {
        self.relayout();
    }

    fn resize(&mut self) {
        self.relayout();
    }

    fn destroy(&mut self) {
        self.button_flags = ButtonFlags::empty();
        self.popover_flags = PopoverFlags::empty();
        self.mounted = false;
        self.layout = None;
        self.destroyed = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engage_then_disengage_markers() {
        let mut s = SurfacePresentation::new(1, 2);
        s.engage();
        assert!(s.is_mounted());
        assert_eq!(
            s.button_flags(),
            ButtonFlags::ACTIVE | ButtonFlags::CHANGING | ButtonFlags::EXPANDED
        );
        s.reveal();
        assert_eq!(s.popover_flags(), PopoverFlags::ACTIVE);
        s.disengage();
        assert_eq!(s.button_flags(), ButtonFlags::CHANGING);
        assert!(s.popover_flags().is_empty());
        assert!(s.is_mounted());
        s.detach();
        assert!(!s.is_mounted());
        assert!(s.button_flags().is_empty());
    }

    #[test]
    fn shared_viewport_drives_layout() {
        let viewport = SharedViewport::new(Size::new(800.0, 600.0));
        let mut s = SurfacePresentation::new(1, 2)
            .with_viewport(viewport.clone())
            .with_content(Size::new(300.0, 400.0));
        s.resize();
        assert!(!s.popover_flags().contains(PopoverFlags::SCROLLABLE));
        viewport.set(Size::new(800.0, 300.0));
        s.resize();
        assert!(s.popover_flags().contains(PopoverFlags::SCROLLABLE));
        assert_eq!(s.layout().and_then(|l| l.content_max_height), Some(280.0));
    }

    #[test]
    fn destroy_clears_everything() {
        let mut s = SurfacePresentation::new(1, 2);
        s.engage();
        s.resize();
        s.destroy();
        assert!(s.is_destroyed());
        assert!(!s.is_mounted());
        assert!(s.button_flags().is_empty());
        assert_eq!(s.layout(), None);
    }
}
