// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=marquee_engine --heading-base-level=0

//! Marquee Engine: a rubber-band selection state machine with a collision pass.
//!
//! Press the primary button inside a container, drag, and every item whose
//! bounding box intersects the growing rectangle becomes selected; release
//! without having moved and the whole selection clears. This crate is the
//! engine behind that interaction:
//!
//! - [`SelectionEngine`]: the idle/dragging state machine. It anchors a
//!   [`RubberBand`] at press time, recomputes the normalized rectangle on
//!   every move, and runs the collision pass over the cached item geometry
//!   from [`marquee_items`].
//! - [`DragMode`]: the policy for items the rectangle does not cover. A plain
//!   drag replaces (items the band moves away from are unselected); a
//!   ctrl/meta drag is additive (untouched items keep their prior state).
//! - [`SelectionEvent`]: the notification surface. Each operation returns the
//!   transitions it caused (`Selected`, `Unselected`, `Cleared`), at most one
//!   per item per pass, so hosts can mirror selection state without diffing.
//! - [`PointerEvent`] and [`SelectionEngine::on_event`]: the thin adapter
//!   seam between a host input layer and the three engine operations.
//!
//! ## Collision semantics
//!
//! The collision test is closed-interval axis-aligned overlap: two rectangles
//! collide unless one lies strictly beside or strictly above/below the other.
//! Touching edges collide, and the test is symmetric in its arguments. The
//! band rectangle is always normalized, so dragging up-left selects exactly
//! what the mirror-image down-right drag selects.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::convert::Infallible;
//! use kurbo::{Point, Rect};
//! use marquee_engine::{
//!     EngineOptions, Modifiers, PointerButton, SelectionEngine, SelectionEvent,
//! };
//! use marquee_items::ItemProvider;
//!
//! // A provider over two fixed boxes, keyed by id.
//! struct Grid {
//!     boxes: Vec<(u32, Rect)>,
//!     selected: Vec<u32>,
//! }
//!
//! impl ItemProvider for Grid {
//!     type Handle = u32;
//!     type Error = Infallible;
//!
//!     fn items(&self) -> Vec<u32> {
//!         self.boxes.iter().map(|(id, _)| *id).collect()
//!     }
//!
//!     fn measure(&self, handle: &u32) -> Result<Rect, Infallible> {
//!         let (_, bounds) = self.boxes.iter().find(|(id, _)| id == handle).unwrap();
//!         Ok(*bounds)
//!     }
//!
//!     fn is_selected(&self, handle: &u32) -> bool {
//!         self.selected.contains(handle)
//!     }
//!
//!     fn set_selected(&mut self, handle: &u32, selected: bool) {
//!         if selected {
//!             if !self.selected.contains(handle) {
//!                 self.selected.push(*handle);
//!             }
//!         } else {
//!             self.selected.retain(|id| id != handle);
//!         }
//!     }
//! }
//!
//! let mut grid = Grid {
//!     boxes: vec![
//!         (1, Rect::new(0.0, 0.0, 10.0, 10.0)),
//!         (2, Rect::new(40.0, 40.0, 50.0, 50.0)),
//!     ],
//!     selected: Vec::new(),
//! };
//!
//! let mut engine = SelectionEngine::new(&grid, EngineOptions::default()).unwrap();
//!
//! // Primary press anchors the band; the drag grows over item 1 only.
//! engine
//!     .pointer_down(&grid, Point::new(0.0, 0.0), PointerButton::Primary, Modifiers::empty())
//!     .unwrap();
//! let events = engine.pointer_move(&mut grid, Point::new(12.0, 12.0));
//! assert_eq!(events, vec![SelectionEvent::Selected(1)]);
//!
//! // Release away from the origin keeps the accumulated selection.
//! engine.pointer_up(&mut grid, Point::new(12.0, 12.0));
//! assert!(grid.selected.contains(&1));
//! assert!(!grid.selected.contains(&2));
//! ```
//!
//! ## Integration notes
//!
//! - The host's item set, its geometry, and its notion of a "selected"
//!   marker all live behind [`marquee_items::ItemProvider`]; the engine
//!   borrows the provider per operation and owns nothing of the host.
//! - The cached-vs-fresh geometry trade-off is chosen through
//!   [`marquee_items::RefreshPolicy`] on [`EngineOptions`].
//! - One engine instance per container is the intended shape; see
//!   `marquee_registry` for keyed per-container routing.
//! - Drawing the selection rectangle is a host concern: read
//!   [`SelectionEngine::band_rect`] and style it however you like.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod band;
mod engine;
mod events;

pub use band::RubberBand;
pub use engine::{DragMode, EngineOptions, SelectionEngine, SelectionEvent};
pub use events::{Modifiers, PointerButton, PointerEvent};
