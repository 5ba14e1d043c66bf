//! Break-Width Table
//!
//! `break_widths[i]` answers "how many cells do the first `i + 1` visible
//! items need". The table is a pure function of the measured widths of the
//! initially visible items and is rebuilt whenever those widths change
//! (items replaced, first render). Resize events reuse it: the widths of
//! items the resolver demoted are still in the table, one slot past the
//! current visible count.

/// Build the cumulative width table for the given item widths.
pub fn build_break_widths(widths: &[u16]) -> Vec<u16> {
    let mut total: u16 = 0;
    let mut breaks = Vec::with_capacity(widths.len());

    for width in widths {
        total = total.saturating_add(*width);
        breaks.push(total);
    }

    debug_assert!(breaks.windows(2).all(|w| w[0] <= w[1]), "break widths must be non-decreasing");
    breaks
}

/// Cells required by the first `visible_len` items.
///
/// Zero when nothing is visible. A count beyond the table (possible only if
/// the table was built for a smaller set) is treated as "always fits" so the
/// resolver never demotes on stale data.
pub fn required_space(break_widths: &[u16], visible_len: usize) -> u16 {
    if visible_len == 0 {
        return 0;
    }
    break_widths.get(visible_len - 1).copied().unwrap_or(0)
}

// =============================================================================
// TESTS
// =============================================================================
