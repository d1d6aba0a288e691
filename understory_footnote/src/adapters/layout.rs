// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Popover geometry.
//!
//! ## Notes
//!
//! The popover is docked to the bottom-left corner of the viewport, inset by
//! [`EDGE_INSET`]. Its width follows the viewport up to [`MAX_WIDTH`], keeping
//! [`HORIZONTAL_MARGIN`] free. Its height follows the content; content taller
//! than the viewport (minus [`VERTICAL_MARGIN`]) is capped and scrolls.
//!
//! All inputs are assumed finite. Negative available space clamps to zero.

use kurbo::{Point, Rect, Size};

/// Widest the popover may grow, in viewport units.
pub const MAX_WIDTH: f64 = 1000.0;
/// Horizontal space left free beside the popover.
pub const HORIZONTAL_MARGIN: f64 = 40.0;
/// Vertical space left free above a capped popover.
pub const VERTICAL_MARGIN: f64 = 20.0;
/// Distance between the popover and the viewport's left and bottom edges.
pub const EDGE_INSET: f64 = 1.0;

/// Computed placement of one popover.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PopoverLayout {
    /// Popover frame in viewport coordinates (y grows downward).
    pub frame: Rect,
    /// Cap on the content height, set only when the content overflows.
    pub content_max_height: Option<f64>,
}

impl PopoverLayout {
    /// Compute the layout for `content` inside `viewport`.
    ///
    /// ```
    /// use kurbo::Size;
    /// use understory_footnote::adapters::layout::PopoverLayout;
    ///
    /// let l = PopoverLayout::compute(Size::new(800.0, 600.0), Size::new(300.0, 100.0));
    /// assert_eq!(l.frame.width(), 760.0);
    /// assert_eq!(l.frame.height(), 100.0);
    /// assert!(!l.is_scrollable());
    /// ```
    pub fn compute(viewport: Size, content: Size) -> Self {
        let width = MAX_WIDTH.min(viewport.width - HORIZONTAL_MARGIN).max(0.0);
        let max_height = (viewport.height - VERTICAL_MARGIN).max(0.0);
        let (height, content_max_height) = if content.height > max_height {
            (max_height, Some(max_height))
        } else {
            (content.height.max(0.0), None)
        };
        let bottom = viewport.height - EDGE_INSET;
        let origin = Point::new(EDGE_INSET, bottom - height);
        Self {
            frame: Rect::from_origin_size(origin, Size::new(width, height)),
            content_max_height,
        }
    }

    /// Returns `true` when the content overflows and must scroll.
    pub fn is_scrollable(&self) -> bool {
        self.content_max_height.is_some()
    }
}
