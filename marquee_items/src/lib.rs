// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=marquee_items --heading-base-level=0

//! Marquee Items: the item provider seam and cached item geometry for marquee selection.
//!
//! Rubber-band selection needs two pieces of information about every selectable
//! item: its current axis-aligned bounding box and whether it currently carries
//! the host's "selected" marker. This crate owns both:
//!
//! - [`ItemProvider`]: the seam to the host application. The provider is the
//!   source of truth for the item set, its geometry, and the selected marker
//!   (whatever the host uses to mark selection; the core does not care).
//!   Items are referred to by opaque, cheaply clonable handles; the core
//!   never owns the underlying elements.
//! - [`ItemCache`]: an ordered collection of [`ItemBox`] records captured from
//!   a provider at a point in time. The engine runs its collision pass over
//!   these records rather than re-measuring on every pointer move.
//! - [`RefreshPolicy`]: when the cache is (re)captured, either once up front
//!   or at the start of every drag.
//!
//! ## Caching trade-off
//!
//! [`RefreshPolicy::Once`] measures each item exactly once and reuses those
//! boxes for every subsequent drag. This is correct only while the layout
//! stays static between drags; if items move, the cached boxes go stale and
//! collision results follow the old positions. [`RefreshPolicy::EveryDrag`]
//! re-measures at each drag start, which stays correct under dynamic layouts
//! at the cost of one measurement pass per item per drag. Callers pick the
//! policy; neither is silently upgraded.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::convert::Infallible;
//! use kurbo::Rect;
//! use marquee_items::{ItemCache, ItemProvider};
//!
//! // A provider over a fixed set of rectangles, keyed by index.
//! struct Fixed {
//!     boxes: Vec<Rect>,
//!     selected: Vec<bool>,
//! }
//!
//! impl ItemProvider for Fixed {
//!     type Handle = usize;
//!     type Error = Infallible;
//!
//!     fn items(&self) -> Vec<usize> {
//!         (0..self.boxes.len()).collect()
//!     }
//!
//!     fn measure(&self, handle: &usize) -> Result<Rect, Infallible> {
//!         Ok(self.boxes[*handle])
//!     }
//!
//!     fn is_selected(&self, handle: &usize) -> bool {
//!         self.selected[*handle]
//!     }
//!
//!     fn set_selected(&mut self, handle: &usize, selected: bool) {
//!         self.selected[*handle] = selected;
//!     }
//! }
//!
//! let provider = Fixed {
//!     boxes: vec![Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(20.0, 0.0, 30.0, 10.0)],
//!     selected: vec![false, true],
//! };
//!
//! let mut cache = ItemCache::new();
//! cache.rebuild(&provider).unwrap();
//!
//! assert_eq!(cache.len(), 2);
//! assert!(!cache.items()[0].selected);
//! assert!(cache.items()[1].selected);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use kurbo::Rect;

/// Source of selectable items: their handles, geometry, and selected marker.
///
/// The provider is the host-facing half of the selection core. It decides
/// what the item set is, how items are measured, and what "selected" means on
/// the host side (a CSS class, a widget flag, whatever marks selection).
/// Handles are opaque to the core; they only need to be clonable and
/// comparable so cached records can be matched back to live items.
///
/// Measurement is the one fallible operation. Failures are propagated to the
/// caller, never swallowed: a cache rebuild that hits a measurement error is
/// abandoned wholesale.
pub trait ItemProvider {
    /// Opaque reference to an underlying selectable element.
    ///
    /// The element itself stays owned by the host; the core holds handles only.
    type Handle: Clone + PartialEq;

    /// Failure reported by [`ItemProvider::measure`].
    type Error;

    /// Returns the current item set as an ordered sequence of handles.
    fn items(&self) -> Vec<Self::Handle>;

    /// Measures the item's current axis-aligned bounding box.
    ///
    /// Boxes are expected in a single shared coordinate space (typically page
    /// or viewport coordinates) so they can be compared against the selection
    /// rectangle without further conversion.
    fn measure(&self, handle: &Self::Handle) -> Result<Rect, Self::Error>;

    /// Returns whether the item currently carries the host's selected marker.
    fn is_selected(&self, handle: &Self::Handle) -> bool;

    /// Sets or removes the host's selected marker on the item.
    fn set_selected(&mut self, handle: &Self::Handle, selected: bool);
}

/// When item geometry is (re)captured from the provider.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RefreshPolicy {
    /// Measure once at engine construction and reuse the boxes for every drag.
    ///
    /// Assumes a static layout between drags. Items that move after the
    /// initial capture keep colliding at their old positions.
    #[default]
    Once,
    /// Re-measure the full item set at the start of every drag.
    EveryDrag,
}

/// One cached item record: handle, captured bounding box, and selection flag.
///
/// `selected` reflects the provider's marker as of the last
/// [`ItemCache::rebuild`] and is kept in sync by whoever mutates selection
/// afterwards (the engine does this during collision passes).
#[derive(Clone, Debug, PartialEq)]
pub struct ItemBox<H> {
    /// Handle of the underlying item.
    pub handle: H,
    /// Captured axis-aligned bounding box.
    pub bounds: Rect,
    /// Whether the item was carrying the selected marker.
    pub selected: bool,
}

/// Ordered collection of [`ItemBox`] records captured from a provider.
///
/// Record order always matches provider order. A rebuild is all-or-nothing:
/// the new records are assembled to the side and only replace the current
/// contents once every measurement has succeeded, so a failed rebuild leaves
/// the cache exactly as it was.
#[derive(Clone, Debug, Default)]
pub struct ItemCache<H> {
    items: Vec<ItemBox<H>>,
}

impl<H> ItemCache<H> {
    /// Creates an empty cache.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the cached records in provider order.
    #[must_use]
    pub fn items(&self) -> &[ItemBox<H>] {
        &self.items
    }

    /// Returns the cached records mutably, preserving order.
    pub fn items_mut(&mut self) -> &mut [ItemBox<H>] {
        &mut self.items
    }

    /// Returns the number of cached records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no records are cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns an iterator over the cached records.
    pub fn iter(&self) -> core::slice::Iter<'_, ItemBox<H>> {
        self.items.iter()
    }

    /// Clears the `selected` flag on every cached record.
    ///
    /// This only touches the cache; callers are responsible for keeping the
    /// provider's markers in step.
    pub fn mark_all_unselected(&mut self) {
        for item in &mut self.items {
            item.selected = false;
        }
    }

    /// Recaptures the full item set from `provider`.
    ///
    /// Every handle is measured in provider order and its current selected
    /// marker is read back, so selection state accumulated on the host side
    /// survives a rescan. The first measurement failure abandons the rebuild
    /// and is returned to the caller; the previous contents stay in place.
    pub fn rebuild<P>(&mut self, provider: &P) -> Result<(), P::Error>
    where
        P: ItemProvider<Handle = H>,
    {
        let handles = provider.items();
        let mut rebuilt = Vec::with_capacity(handles.len());
        for handle in handles {
            let bounds = provider.measure(&handle)?;
            let selected = provider.is_selected(&handle);
            rebuilt.push(ItemBox {
                handle,
                bounds,
                selected,
            });
        }
        self.items = rebuilt;
        Ok(())
    }
}
