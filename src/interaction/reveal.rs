//! One-way visibility latches.

use crate::env::{ElementId, View};
use std::collections::HashSet;

/// Remembers which elements have been seen. Once triggered, an element stays
/// triggered.
#[derive(Clone, Debug, Default)]
pub struct RevealLatch {
    seen: HashSet<ElementId>,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` only for the first intersecting notification of
    /// `element`.
    pub fn trigger(&mut self, element: &ElementId, intersecting: bool) -> bool {
        intersecting && self.seen.insert(element.clone())
    }

    pub fn is_triggered(&self, element: &ElementId) -> bool {
        self.seen.contains(element)
    }
}

/// Class added to fade-in elements on first sight.
pub const VISIBLE_CLASS: &str = "visible";

/// Fade-in elements: add [`VISIBLE_CLASS`] the first time each one shows up.
#[derive(Clone, Debug, Default)]
pub struct FadeIns {
    latch: RevealLatch,
}

impl FadeIns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visibility_changed<V: View>(
        &mut self,
        view: &mut V,
        element: &ElementId,
        intersecting: bool,
    ) {
        if self.latch.trigger(element, intersecting) {
            view.add_class(element, VISIBLE_CLASS);
        }
    }
}
