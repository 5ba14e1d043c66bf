//! Item Partitioner
//!
//! Splits the candidate item list into the initially visible sequence and
//! the hidden overflow deque:
//!
//! 1. Disabled items are filtered out and never reappear.
//! 2. Link items get their `is_external` flag derived from the destination.
//! 3. Remaining items are grouped by `ALWAYS_HIDDEN`, order preserved.
//!
//! The hidden list is a deque on purpose: later layout demotions push to the
//! front and promotions pop from the front, so the `ALWAYS_HIDDEN` tail is
//! never reached by the layout algorithm.

use std::collections::VecDeque;

use crate::types::{NavItem, NavItemKind};

/// Derive per-item data that depends only on the item itself.
///
/// Currently this is the `is_external` flag on link items.
pub fn annotate(mut item: NavItem) -> NavItem {
    if let NavItemKind::Link { destination, is_external } = &mut item.kind {
        *is_external = destination.is_external();
    }
    item
}

/// Split items into (initially visible, initially hidden).
///
/// Disabled items are dropped. Order within each group matches the input
/// order. Pure: the caller's slice is untouched.
pub fn partition(items: &[NavItem]) -> (Vec<NavItem>, VecDeque<NavItem>) {
    let mut visible = Vec::new();
    let mut hidden = VecDeque::new();

    for item in items {
        if item.is_disabled() {
            continue;
        }
        let item = annotate(item.clone());
        if item.always_hidden() {
            hidden.push_back(item);
        } else {
            visible.push(item);
        }
    }

    (visible, hidden)
}

// =============================================================================
// TESTS
// =============================================================================
