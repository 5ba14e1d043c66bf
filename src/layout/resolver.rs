//! Layout Resolver
//!
//! The core overflow algorithm. Given the available width, the current
//! visible/hidden partition, and the break-width table, it moves boundary
//! items until the visible row fits:
//!
//! - Overflow: pop the last visible item and push it to the *front* of the
//!   hidden deque, repeating until the row fits or nothing is left.
//! - Spare room: if the table says one more item than currently shown would
//!   still leave room to spare, pop the *front* of the hidden deque and
//!   append it to the visible row. One promotion per invocation.
//!
//! Exact equality counts as fitting: a row needing exactly the available
//! width is not demoted, and an exact fit with the next item does not
//! trigger promotion.
//!
//! The promotion check reads one slot past the current visible count. When
//! everything measured is already visible that index is out of range, which
//! is treated as "no promotion possible" - this is also what keeps
//! `ALWAYS_HIDDEN` items pinned: they sit behind every layout-demoted item
//! in the deque and the table has no entries for them, so the check runs
//! dry before reaching them.

use std::collections::VecDeque;

use crate::types::NavItem;

use super::break_widths::required_space;

/// Membership changes made by one resolver invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Items moved from visible to hidden.
    pub demoted: usize,
    /// Items moved from hidden to visible (0 or 1).
    pub promoted: usize,
}

impl Resolution {
    /// Whether this invocation changed membership at all.
    pub fn changed(&self) -> bool {
        self.demoted > 0 || self.promoted > 0
    }
}

/// Re-balance the visible/hidden partition against `available` cells.
///
/// Deterministic and idempotent: once the width stabilizes and neither
/// condition holds, repeated calls return `Resolution::default()`.
pub fn resolve(
    available: u16,
    visible: &mut Vec<NavItem>,
    hidden: &mut VecDeque<NavItem>,
    break_widths: &[u16],
) -> Resolution {
    let mut resolution = Resolution::default();

    if required_space(break_widths, visible.len()) > available {
        // Not enough space: demote from the end until the row fits.
        while required_space(break_widths, visible.len()) > available {
            let Some(item) = visible.pop() else { break };
            log::trace!("demoting '{}' (available={available})", item.name);
            hidden.push_front(item);
            resolution.demoted += 1;
        }
    } else if break_widths.get(visible.len()).is_some_and(|&next| available > next) {
        // More than enough space: promote the first hidden item.
        if let Some(item) = hidden.pop_front() {
            log::trace!("promoting '{}' (available={available})", item.name);
            visible.push(item);
            resolution.promoted = 1;
        }
    }

    resolution
}

// =============================================================================
// TESTS
// =============================================================================
