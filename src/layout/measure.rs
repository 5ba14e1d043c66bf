//! Width Measurement
//!
//! The resolver treats item widths as a trusted oracle. In a terminal the
//! oracle is Unicode display width plus the item's horizontal padding; in
//! tests it is an injected width table. Both live behind [`WidthOracle`] so
//! the resolver stays a pure function of in-memory data.
//!
//! Display widths follow terminal cell semantics:
//! - ASCII printable: 1 cell
//! - CJK / fullwidth / most emoji: 2 cells
//! - Zero-width and control characters: 0 cells

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::types::NavItem;

/// Horizontal cells rendered around each item (padding plus separator).
pub const ITEM_PADDING: u16 = 4;

/// Source of rendered item widths.
pub trait WidthOracle {
    /// The rendered width of one item, in cells.
    fn item_width(&self, item: &NavItem) -> u16;

    /// Measure a whole visible row in input order.
    fn measure(&self, items: &[NavItem]) -> Vec<u16> {
        items.iter().map(|item| self.item_width(item)).collect()
    }
}

/// Production oracle: Unicode display width of the item text plus padding.
#[derive(Clone, Copy, Debug)]
pub struct TextWidths {
    pub padding: u16,
}

impl Default for TextWidths {
    fn default() -> Self {
        Self { padding: ITEM_PADDING }
    }
}

impl WidthOracle for TextWidths {
    fn item_width(&self, item: &NavItem) -> u16 {
        display_width(&item.name).saturating_add(self.padding)
    }
}

/// Test oracle: widths keyed by item name, in cells.
///
/// Items without an entry measure as `fallback`.
#[derive(Clone, Debug, Default)]
pub struct FixedWidths {
    pub widths: std::collections::HashMap<String, u16>,
    pub fallback: u16,
}

impl FixedWidths {
    pub fn new(entries: &[(&str, u16)]) -> Self {
        Self {
            widths: entries.iter().map(|(name, w)| (name.to_string(), *w)).collect(),
            fallback: 0,
        }
    }
}

impl WidthOracle for FixedWidths {
    fn item_width(&self, item: &NavItem) -> u16 {
        self.widths.get(&item.name).copied().unwrap_or(self.fallback)
    }
}

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(s)).unwrap_or(u16::MAX)
}

/// Truncate text to fit within `width` cells, appending an ellipsis when
/// anything was cut.
pub fn truncate_display(text: &str, width: u16) -> String {
    if width == 0 {
        return String::new();
    }

    if display_width(text) <= width {
        return text.to_string();
    }

    // Leave room for the ellipsis.
    let target = width.saturating_sub(1);
    let mut result = String::new();
    let mut current: u16 = 0;

    for c in text.chars() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0) as u16;
        if current + char_width > target {
            break;
        }
        result.push(c);
        current += char_width;
    }

    result.push('…');
    result
}

// =============================================================================
// TESTS
// =============================================================================
