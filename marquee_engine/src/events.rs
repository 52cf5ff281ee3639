// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer event surface consumed by the engine.
//!
//! These types are the thin shim between a host's raw input layer and the
//! engine's three operations. Hosts adapt whatever their windowing or DOM
//! layer produces into [`PointerEvent`] values and feed them to
//! [`SelectionEngine::on_event`](crate::SelectionEngine::on_event); the
//! engine never learns where events physically originate. In particular,
//! release events are commonly subscribed at a wider scope than the press
//! surface (a window or document rather than the container) so that a drag
//! ending outside the container still terminates; that subscription choice
//! lives entirely in the adapter.

use kurbo::Point;

bitflags::bitflags! {
    /// Modifier keys held at the time of a pointer event.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 1 << 0;
        /// Control key.
        const CTRL  = 1 << 1;
        /// Alt/option key.
        const ALT   = 1 << 2;
        /// Meta/command key.
        const META  = 1 << 3;
    }
}

/// Which pointer button a press carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// The primary button (usually left). Only primary presses start drags.
    Primary,
    /// The secondary button (usually right).
    Secondary,
    /// The auxiliary button (usually middle).
    Auxiliary,
}

/// A raw pointer event in the shared (page) coordinate space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// A button was pressed.
    Down {
        /// Pointer position.
        pos: Point,
        /// Button that went down.
        button: PointerButton,
        /// Modifier keys held at press time.
        modifiers: Modifiers,
    },
    /// The pointer moved.
    Move {
        /// Pointer position.
        pos: Point,
    },
    /// The primary button was released.
    Up {
        /// Pointer position at release.
        pos: Point,
    },
}
