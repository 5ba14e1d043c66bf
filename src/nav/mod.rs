//! Navigation Bar Driver
//!
//! [`NavBar`] wires the pieces together: it ingests items, measures them
//! through the width oracle, keeps the break-width table current, and
//! re-balances the visible/hidden lists on every trigger.
//!
//! Framework lifecycle hooks become explicit trigger functions:
//! - [`NavBar::set_items`] - the item input changed (full recompute)
//! - [`NavBar::on_view_ready`] - first measurement after the host rendered
//! - [`NavBar::on_resize`] - the viewport changed (incremental re-balance)
//!
//! The driver is lifecycle-agnostic; the host integration layer decides
//! when to call each trigger.
//!
//! # Example
//!
//! ```ignore
//! use responsive_nav::nav::NavBar;
//! use responsive_nav::state::viewport::set_viewport_size;
//!
//! let nav = NavBar::new();
//! nav.set_items(items);
//!
//! set_viewport_size(100, 24);
//! nav.on_resize();
//!
//! let row = nav.lists().visible();
//! ```

mod id;

pub use id::IdAllocator;

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use spark_signals::{Signal, signal};

use crate::items::partition;
use crate::layout::measure::{TextWidths, WidthOracle, truncate_display};
use crate::layout::{build_break_widths, resolve};
use crate::state::lists::NavLists;
use crate::state::viewport::viewport_width;
use crate::state::ActionEmitter;
use crate::types::{ActivationSource, Destination, NavConfig, NavItem, NavItemKind, NavPayload, User};

/// Cells reserved for the overflow trigger and row chrome.
pub const NAV_WIDTH_BUFFER: u16 = 10;

/// What activating the selected item did.
#[derive(Clone, Debug, PartialEq)]
pub enum Activated {
    /// An action item fired; subscribers were notified.
    Action,
    /// A link item; the host should navigate to the destination.
    Navigate(Destination),
}

/// The navigation bar engine.
///
/// Cheap to clone: clones share the same state and signals.
#[derive(Clone)]
pub struct NavBar {
    ids: IdAllocator,
    config: Rc<RefCell<NavConfig>>,
    user: Signal<Option<User>>,
    /// Enabled items in original order; replaced wholesale by `set_items`.
    pristine: Rc<RefCell<Vec<NavItem>>>,
    /// Host-facing element IDs, parallel to `pristine`.
    element_ids: Rc<RefCell<Vec<String>>>,
    break_widths: Rc<RefCell<Vec<u16>>>,
    lists: NavLists,
    /// Index into the visible row; -1 when nothing is selected.
    selected: Signal<i32>,
    emitter: ActionEmitter,
    oracle: Rc<dyn WidthOracle>,
}

impl NavBar {
    /// Engine with the production (Unicode cell width) oracle.
    pub fn new() -> Self {
        Self::with_oracle(TextWidths::default())
    }

    /// Engine with an injected width oracle (tests, non-terminal hosts).
    pub fn with_oracle(oracle: impl WidthOracle + 'static) -> Self {
        Self {
            ids: IdAllocator::default(),
            config: Rc::new(RefCell::new(NavConfig::default())),
            user: signal(None),
            pristine: Rc::new(RefCell::new(Vec::new())),
            element_ids: Rc::new(RefCell::new(Vec::new())),
            break_widths: Rc::new(RefCell::new(Vec::new())),
            lists: NavLists::new(),
            selected: signal(-1),
            emitter: ActionEmitter::new(),
            oracle: Rc::new(oracle),
        }
    }

    /// Builder-style display configuration.
    pub fn with_config(self, config: NavConfig) -> Self {
        *self.config.borrow_mut() = config;
        self
    }

    // =========================================================================
    // Triggers
    // =========================================================================

    /// Replace the full working set and recompute the layout.
    ///
    /// Disabled items are dropped here and never reach either list.
    pub fn set_items(&self, items: Vec<NavItem>) {
        let enabled: Vec<NavItem> = items.into_iter().filter(|item| !item.is_disabled()).collect();
        log::debug!("items replaced ({} enabled)", enabled.len());

        let ids: Vec<String> = enabled.iter().map(|_| self.ids.next_id()).collect();
        *self.element_ids.borrow_mut() = ids;
        *self.pristine.borrow_mut() = enabled;

        self.rebuild();
    }

    /// Re-measure and re-balance after the host's first render.
    pub fn on_view_ready(&self) {
        self.rebuild();
    }

    /// Re-balance against the current viewport width.
    ///
    /// Reuses the existing break-width table: widths of demoted items are
    /// still known from the initial measurement pass.
    pub fn on_resize(&self) {
        let available = self.available_space();
        let mut visible = self.lists.visible();
        let mut hidden: VecDeque<NavItem> = self.lists.hidden().into();

        let resolution = {
            let breaks = self.break_widths.borrow();
            resolve(available, &mut visible, &mut hidden, &breaks)
        };

        if resolution.changed() {
            log::debug!(
                "resize: {} demoted, {} promoted (available={available})",
                resolution.demoted,
                resolution.promoted,
            );
            self.lists.replace(visible, &hidden);
            self.clamp_selection();
        }
    }

    /// Full recompute: partition from pristine, measure, resolve.
    fn rebuild(&self) {
        let (mut visible, mut hidden) = partition(&self.pristine.borrow());

        let widths = self.oracle.measure(&visible);
        *self.break_widths.borrow_mut() = build_break_widths(&widths);

        {
            let breaks = self.break_widths.borrow();
            resolve(self.available_space(), &mut visible, &mut hidden, &breaks);
        }

        self.lists.replace(visible, &hidden);
        self.clamp_selection();
    }

    /// Cells available for the visible row.
    fn available_space(&self) -> u16 {
        viewport_width().saturating_sub(NAV_WIDTH_BUFFER)
    }

    // =========================================================================
    // Outputs
    // =========================================================================

    /// The visible/hidden list signals.
    pub fn lists(&self) -> NavLists {
        self.lists.clone()
    }

    /// The action event emitter.
    pub fn emitter(&self) -> ActionEmitter {
        self.emitter.clone()
    }

    /// Host-facing element IDs, parallel to the enabled item list.
    pub fn element_ids(&self) -> Vec<String> {
        self.element_ids.borrow().clone()
    }

    // =========================================================================
    // Selection & activation
    // =========================================================================

    /// Currently selected visible item, if any.
    pub fn selected_index(&self) -> Option<usize> {
        let selected = self.selected.get();
        (selected >= 0).then_some(selected as usize)
    }

    /// Move selection to the next visible item, wrapping.
    pub fn select_next(&self) {
        self.step_selection(1);
    }

    /// Move selection to the previous visible item, wrapping.
    pub fn select_previous(&self) {
        self.step_selection(-1);
    }

    fn step_selection(&self, direction: i32) {
        let len = self.lists.visible().len() as i32;
        if len == 0 {
            self.selected.set(-1);
            return;
        }

        let current = self.selected.get();
        let next = if current < 0 {
            if direction > 0 { 0 } else { len - 1 }
        } else {
            ((current + direction) % len + len) % len
        };
        self.selected.set(next);
    }

    /// Keep the selection inside the visible row after membership changes.
    fn clamp_selection(&self) {
        let len = self.lists.visible().len() as i32;
        let current = self.selected.get();
        if current >= len {
            self.selected.set(len - 1);
        }
    }

    /// Activate the currently selected item.
    pub fn activate(&self, source: ActivationSource) -> Option<Activated> {
        self.selected_index().and_then(|index| self.activate_at(index, source))
    }

    /// Activate the visible item at `index`.
    ///
    /// Action items notify subscribers; link items hand the destination back
    /// to the host for navigation.
    pub fn activate_at(&self, index: usize, source: ActivationSource) -> Option<Activated> {
        let item = self.lists.visible().get(index).cloned()?;
        match item.kind {
            NavItemKind::Action { action } => {
                self.emitter.emit(&NavPayload { source, action });
                Some(Activated::Action)
            }
            NavItemKind::Link { destination, .. } => Some(Activated::Navigate(destination)),
        }
    }

    // =========================================================================
    // User display
    // =========================================================================

    /// Set or clear the current user.
    pub fn set_user(&self, user: Option<User>) {
        self.user.set(user);
    }

    /// The user's full name, if one exists and is non-empty.
    pub fn users_full_name(&self) -> Option<String> {
        self.user.get().and_then(|user| {
            (!user.full_name.is_empty()).then_some(user.full_name)
        })
    }

    /// Welcome message truncated to the configured width.
    pub fn welcome_text(&self) -> String {
        let config = self.config.borrow();
        truncate_display(&config.welcome_message, config.welcome_msg_length)
    }

    /// User name truncated to the configured width.
    pub fn display_name(&self) -> Option<String> {
        let name = self.users_full_name()?;
        Some(truncate_display(&name, self.config.borrow().user_name_length))
    }

    /// Full greeting line ("Welcome, Jane Doe"), if a user is present.
    pub fn greeting(&self) -> Option<String> {
        let name = self.display_name()?;
        Some(format!("{}, {name}", self.welcome_text()))
    }
}

impl Default for NavBar {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
