// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The live selection rectangle spanned by a drag.

use kurbo::{Point, Rect};

/// The rubber band: the rectangle spanned by the drag origin and the latest
/// pointer position.
///
/// A band is anchored at drag start, has its free corner moved on every drag
/// move, and is discarded at release. [`RubberBand::rect`] is always
/// normalized (left ≤ right and top ≤ bottom) no matter which direction the
/// pointer traveled, so a drag toward the upper-left spans the same rectangle
/// as the reverse drag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RubberBand {
    origin: Point,
    current: Point,
}

impl RubberBand {
    /// Anchors a new band at the drag origin.
    ///
    /// The band starts out zero-sized; it only gains area once
    /// [`RubberBand::update`] moves the free corner away from the origin.
    #[must_use]
    pub fn new(origin: Point) -> Self {
        Self {
            origin,
            current: origin,
        }
    }

    /// Moves the free corner to the latest pointer position.
    pub fn update(&mut self, pos: Point) {
        self.current = pos;
    }

    /// The pointer position recorded at drag start.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// The most recently recorded pointer position.
    #[must_use]
    pub fn current(&self) -> Point {
        self.current
    }

    /// The normalized axis-aligned rectangle spanning origin and current.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_points(self.origin, self.current)
    }
}
