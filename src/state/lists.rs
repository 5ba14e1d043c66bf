//! Visible/Hidden List Signals
//!
//! The engine's observable outputs. Both lists are plain signals: current
//! values are readable synchronously and any `effect` that reads them
//! re-runs when membership changes.
//!
//! Writes only happen when membership actually changed, so subscribers are
//! not re-notified by idle resize events.
//!
//! # Example
//!
//! ```ignore
//! use spark_signals::effect;
//!
//! let lists = nav.lists();
//! let stop = effect(move || {
//!     let visible = lists.visible();
//!     render_row(&visible);
//! });
//! ```

use std::collections::VecDeque;

use spark_signals::{Signal, signal};

use crate::types::NavItem;

/// The current visible/hidden partition, as a pair of signals.
#[derive(Clone)]
pub struct NavLists {
    visible: Signal<Vec<NavItem>>,
    hidden: Signal<Vec<NavItem>>,
}

impl NavLists {
    pub fn new() -> Self {
        Self {
            visible: signal(Vec::new()),
            hidden: signal(Vec::new()),
        }
    }

    /// Current visible row, in original relative order.
    pub fn visible(&self) -> Vec<NavItem> {
        self.visible.get()
    }

    /// Current hidden overflow list, front first.
    pub fn hidden(&self) -> Vec<NavItem> {
        self.hidden.get()
    }

    /// Number of currently visible items.
    ///
    /// Tracks the visible signal when called from a derived/effect.
    pub fn visible_len(&self) -> usize {
        self.visible.get().len()
    }

    /// Replace both lists (full recompute path).
    pub fn replace(&self, visible: Vec<NavItem>, hidden: &VecDeque<NavItem>) {
        self.visible.set(visible);
        self.hidden.set(hidden.iter().cloned().collect());
    }

    /// The visible signal, for direct reactive tracking.
    pub fn visible_signal(&self) -> Signal<Vec<NavItem>> {
        self.visible.clone()
    }

    /// The hidden signal, for direct reactive tracking.
    pub fn hidden_signal(&self) -> Signal<Vec<NavItem>> {
        self.hidden.clone()
    }
}

impl Default for NavLists {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
