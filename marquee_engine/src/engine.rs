// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state machine, collision pass, and selection events.

use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Point, Rect};
use marquee_items::{ItemCache, ItemProvider, RefreshPolicy};

use crate::band::RubberBand;
use crate::events::{Modifiers, PointerButton, PointerEvent};

/// Selection policy for items the rectangle does not cover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragMode {
    /// Items the rectangle moves away from are unselected.
    ///
    /// This is the default drag: the rectangle's current coverage *is* the
    /// selection being swept out.
    Replace,
    /// Items outside the rectangle keep their prior state.
    ///
    /// Entered by holding ctrl or meta at press time; the drag only ever adds
    /// to the existing selection.
    Additive,
}

impl DragMode {
    /// Maps the modifier set held at press time to a drag mode.
    #[must_use]
    pub fn from_modifiers(modifiers: Modifiers) -> Self {
        if modifiers.intersects(Modifiers::CTRL | Modifiers::META) {
            Self::Additive
        } else {
            Self::Replace
        }
    }
}

/// Engine configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EngineOptions {
    /// When item geometry is captured from the provider.
    pub refresh: RefreshPolicy,
    /// Suppresses all drag initiation while set.
    pub disabled: bool,
}

/// A selection state transition produced by a collision pass or a clear.
///
/// Operations report only actual transitions, at most one per item per pass.
/// Replaying an identical pointer position yields no further events, and an
/// item that stays covered while already selected yields nothing at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionEvent<H> {
    /// The item just transitioned unselected → selected.
    Selected(H),
    /// The item just transitioned selected → unselected.
    Unselected(H),
    /// The full selection was cleared.
    Cleared,
}

#[derive(Clone, Debug)]
enum DragPhase {
    Idle,
    Dragging { band: RubberBand, mode: DragMode },
}

/// The marquee selection engine.
///
/// `SelectionEngine` owns the drag state machine (idle → dragging → idle)
/// together with the live rubber-band rectangle and the cached item geometry
/// it collides against. The host's [`ItemProvider`] is borrowed per operation
/// rather than owned, so the engine composes with whatever owns the real item
/// set.
///
/// ## Event processing
///
/// All operations are synchronous and expect events in arrival order. The
/// engine is single-writer by construction: introducing real concurrency
/// around it requires serializing every call site onto one writer.
///
/// Wrong-state events are absorbed as no-ops: a move or release while idle
/// does nothing, and a second press during an active drag never starts a
/// second drag. Only measurement failures surface as errors, and only from
/// the operations that measure ([`SelectionEngine::new`] and, under
/// [`RefreshPolicy::EveryDrag`], [`SelectionEngine::pointer_down`]).
///
/// ## Lost releases
///
/// A drag ends only when a release arrives. If the release is never
/// delivered (for example the pointer left the tracked surface for good),
/// the engine stays in the dragging state indefinitely. Adapters mitigate
/// this by subscribing release events at a wider scope than the press
/// surface; the engine itself does not time out.
pub struct SelectionEngine<H> {
    options: EngineOptions,
    cache: ItemCache<H>,
    phase: DragPhase,
}

impl<H> core::fmt::Debug for SelectionEngine<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelectionEngine")
            .field("options", &self.options)
            .field("dragging", &self.is_dragging())
            .field("cached_items", &self.cache.len())
            .finish_non_exhaustive()
    }
}

impl<H> SelectionEngine<H> {
    /// Creates an engine over `provider`.
    ///
    /// With [`RefreshPolicy::Once`] the item set is measured here, exactly
    /// once, and those boxes serve every subsequent drag. With
    /// [`RefreshPolicy::EveryDrag`] no measurement happens until the first
    /// press. A measurement failure is propagated and no engine is built.
    pub fn new<P>(provider: &P, options: EngineOptions) -> Result<Self, P::Error>
    where
        P: ItemProvider<Handle = H>,
    {
        let mut cache = ItemCache::new();
        if options.refresh == RefreshPolicy::Once {
            cache.rebuild(provider)?;
        }
        Ok(Self {
            options,
            cache,
            phase: DragPhase::Idle,
        })
    }

    /// Handles a button press.
    ///
    /// Only a primary-button press while idle and not disabled starts a drag;
    /// any other press is a silent no-op. Ctrl or meta held at press time
    /// selects [`DragMode::Additive`]. Under [`RefreshPolicy::EveryDrag`] the
    /// item set is re-measured first; a measurement failure aborts the press
    /// with the engine still idle and no selection mutated.
    pub fn pointer_down<P>(
        &mut self,
        provider: &P,
        pos: Point,
        button: PointerButton,
        modifiers: Modifiers,
    ) -> Result<(), P::Error>
    where
        P: ItemProvider<Handle = H>,
    {
        if self.options.disabled || button != PointerButton::Primary || self.is_dragging() {
            return Ok(());
        }
        if self.options.refresh == RefreshPolicy::EveryDrag {
            self.cache.rebuild(provider)?;
        }
        self.phase = DragPhase::Dragging {
            band: RubberBand::new(pos),
            mode: DragMode::from_modifiers(modifiers),
        };
        Ok(())
    }

    /// Handles a pointer move.
    ///
    /// While dragging, moves the band's free corner and runs the collision
    /// pass over every cached item, returning the selection transitions that
    /// resulted. A move while idle is a no-op returning no events.
    pub fn pointer_move<P>(&mut self, provider: &mut P, pos: Point) -> Vec<SelectionEvent<H>>
    where
        P: ItemProvider<Handle = H>,
        H: Clone,
    {
        let DragPhase::Dragging { band, mode } = &mut self.phase else {
            return Vec::new();
        };
        band.update(pos);
        let rect = band.rect();
        let mode = *mode;
        Self::collision_pass(&mut self.cache, provider, rect, mode)
    }

    /// Handles a primary-button release.
    ///
    /// Ends the drag and discards the band. A release at exactly the origin
    /// coordinate (a click with zero drag distance) clears the full selection
    /// and returns the resulting [`SelectionEvent::Cleared`]; otherwise the
    /// accumulated selection is left untouched and no events are returned.
    /// A release while idle is a no-op.
    pub fn pointer_up<P>(&mut self, provider: &mut P, pos: Point) -> Vec<SelectionEvent<H>>
    where
        P: ItemProvider<Handle = H>,
    {
        let DragPhase::Dragging { band, .. } = &self.phase else {
            return Vec::new();
        };
        let origin = band.origin();
        self.phase = DragPhase::Idle;
        if pos == origin {
            self.clear(provider)
        } else {
            Vec::new()
        }
    }

    /// Clears the full selection.
    ///
    /// Callable in any state, independent of the drag machinery. Every item
    /// the provider currently reports (not just the cached records) has its
    /// selected marker removed, and exactly one [`SelectionEvent::Cleared`]
    /// is returned per call. Item-level events are never emitted from a
    /// clear, even when items were selected.
    pub fn clear<P>(&mut self, provider: &mut P) -> Vec<SelectionEvent<H>>
    where
        P: ItemProvider<Handle = H>,
    {
        for handle in provider.items() {
            provider.set_selected(&handle, false);
        }
        self.cache.mark_all_unselected();
        vec![SelectionEvent::Cleared]
    }

    /// Feeds one raw pointer event through the engine.
    ///
    /// This is the adapter entry point: it dispatches to
    /// [`SelectionEngine::pointer_down`], [`SelectionEngine::pointer_move`],
    /// or [`SelectionEngine::pointer_up`] and normalizes their results into
    /// one shape.
    pub fn on_event<P>(
        &mut self,
        provider: &mut P,
        event: PointerEvent,
    ) -> Result<Vec<SelectionEvent<H>>, P::Error>
    where
        P: ItemProvider<Handle = H>,
        H: Clone,
    {
        match event {
            PointerEvent::Down {
                pos,
                button,
                modifiers,
            } => {
                self.pointer_down(&*provider, pos, button, modifiers)?;
                Ok(Vec::new())
            }
            PointerEvent::Move { pos } => Ok(self.pointer_move(provider, pos)),
            PointerEvent::Up { pos } => Ok(self.pointer_up(provider, pos)),
        }
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// The current normalized band rectangle, if a drag is active.
    ///
    /// Hosts that draw a visual selection rectangle read it from here; the
    /// engine itself has no presentation concerns.
    #[must_use]
    pub fn band_rect(&self) -> Option<Rect> {
        match &self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging { band, .. } => Some(band.rect()),
        }
    }

    /// The mode of the active drag, if any.
    #[must_use]
    pub fn drag_mode(&self) -> Option<DragMode> {
        match &self.phase {
            DragPhase::Idle => None,
            DragPhase::Dragging { mode, .. } => Some(*mode),
        }
    }

    /// Returns the engine configuration.
    #[must_use]
    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Enables or disables drag initiation.
    ///
    /// Takes effect at the next press; an already-active drag is unaffected.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.options.disabled = disabled;
    }

    /// Read access to the cached item records.
    #[must_use]
    pub fn cache(&self) -> &ItemCache<H> {
        &self.cache
    }

    /// Runs one collision pass of `band` against every cached item.
    ///
    /// Collision is closed-interval axis-aligned overlap: two rectangles
    /// collide unless one lies strictly to the left, right, above, or below
    /// the other, so touching edges collide. Covered items become selected;
    /// uncovered items are unselected only in [`DragMode::Replace`]. Both
    /// directions mutate cache and provider together and report the
    /// transition exactly once.
    fn collision_pass<P>(
        cache: &mut ItemCache<H>,
        provider: &mut P,
        band: Rect,
        mode: DragMode,
    ) -> Vec<SelectionEvent<H>>
    where
        P: ItemProvider<Handle = H>,
        H: Clone,
    {
        let mut events = Vec::new();
        for item in cache.items_mut() {
            if band.overlaps(item.bounds) {
                if !item.selected {
                    item.selected = true;
                    provider.set_selected(&item.handle, true);
                    events.push(SelectionEvent::Selected(item.handle.clone()));
                }
            } else if mode == DragMode::Replace && item.selected {
                item.selected = false;
                provider.set_selected(&item.handle, false);
                events.push(SelectionEvent::Unselected(item.handle.clone()));
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_press_is_a_replacing_drag() {
        assert_eq!(DragMode::from_modifiers(Modifiers::empty()), DragMode::Replace);
        assert_eq!(DragMode::from_modifiers(Modifiers::SHIFT), DragMode::Replace);
        assert_eq!(
            DragMode::from_modifiers(Modifiers::SHIFT | Modifiers::ALT),
            DragMode::Replace
        );
    }

    #[test]
    fn ctrl_or_meta_press_is_additive() {
        assert_eq!(DragMode::from_modifiers(Modifiers::CTRL), DragMode::Additive);
        assert_eq!(DragMode::from_modifiers(Modifiers::META), DragMode::Additive);
        assert_eq!(
            DragMode::from_modifiers(Modifiers::CTRL | Modifiers::SHIFT),
            DragMode::Additive
        );
    }
}
