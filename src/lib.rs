//! # responsive-nav
//!
//! Responsive navigation bar engine for reactive terminal UIs.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! The engine owns the full ordered item list and keeps it partitioned into
//! a visible row and a hidden overflow menu, re-balancing whenever the
//! viewport changes:
//!
//! ```text
//! items input → Partitioner → Width Oracle → Break-Width Table → Resolver
//!                                                                   │
//!                         visible_items / hidden_items signals ◄────┘
//! ```
//!
//! Membership moves are incremental: overflow demotes the last visible item
//! to the front of the hidden list; spare room promotes the front of the
//! hidden list back. `ALWAYS_HIDDEN` items live behind every demoted item
//! and are never promoted.
//!
//! ## Modules
//!
//! - [`types`] - Core types (NavItem, ItemFlags, Destination, ...)
//! - [`items`] - Item ingestion and partitioning
//! - [`layout`] - Break-width table, overflow resolver, width oracle
//! - [`state`] - Reactive lists, viewport signal, action emitter, input bridge
//! - [`nav`] - The NavBar driver tying it all together
//! - [`upload`] - File constraint validation

pub mod items;
pub mod layout;
pub mod nav;
pub mod state;
pub mod types;
pub mod upload;

// Re-export commonly used items
pub use types::*;

pub use items::partition;

pub use layout::{
    FixedWidths, Resolution, TextWidths, WidthOracle, build_break_widths, display_width,
    required_space, resolve, truncate_display,
};

pub use state::{
    ActionEmitter, InputEvent, NavKey, NavLists, convert_key_event, poll_event, read_event,
    route_event, set_viewport_size, sync_viewport_size, viewport_height, viewport_width,
};

pub use nav::{Activated, IdAllocator, NAV_WIDTH_BUFFER, NavBar};

pub use upload::{
    ConstraintError, FileConstraints, FileDescription, ImageDimensionConstraint, ImageRatio,
    Violation,
};
