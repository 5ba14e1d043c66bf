//! Core Types
//!
//! Plain data types shared across the engine:
//! - `NavItem` - A navigation entry (link or action)
//! - `ItemFlags` - Visibility/availability flags
//! - `Destination` - Link target (external URL or router segments)
//! - `NavAction` / `NavPayload` - Typed activation events
//! - `User` / `NavConfig` - Display data and configuration

use bitflags::bitflags;

// =============================================================================
// ITEM FLAGS
// =============================================================================

bitflags! {
    /// Per-item flags controlling how the layout engine treats an item.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct ItemFlags: u8 {
        /// Item only ever appears in the hidden overflow list.
        const ALWAYS_HIDDEN = 1 << 0;
        /// Item is excluded from both lists at ingestion time.
        const DISABLED = 1 << 1;
        /// Item is for admin functionality only.
        const ADMIN_ONLY = 1 << 2;
    }
}

// =============================================================================
// DESTINATIONS & ACTIONS
// =============================================================================

/// Where a link item points.
///
/// Single strings are used for external locations while a list of segments
/// is used for in-app routing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    /// A raw URL, opened outside the application.
    Url(String),
    /// Router segments resolved by the host application.
    Route(Vec<String>),
}

impl Destination {
    /// Whether this destination leaves the application.
    ///
    /// True iff the destination is a raw URL containing `http`.
    pub fn is_external(&self) -> bool {
        match self {
            Self::Url(url) => url.contains("http"),
            Self::Route(_) => false,
        }
    }
}

/// The typed action carried by an action item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavAction {
    /// Action discriminator consumed by the host (e.g. `"log-out"`).
    pub action_type: String,
}

impl NavAction {
    pub fn new(action_type: impl Into<String>) -> Self {
        Self { action_type: action_type.into() }
    }
}

// =============================================================================
// NAV ITEMS
// =============================================================================

/// What an item does when activated.
#[derive(Clone, Debug, PartialEq)]
pub enum NavItemKind {
    /// Navigates somewhere.
    Link {
        destination: Destination,
        /// Derived at ingestion from the destination; see [`Destination::is_external`].
        is_external: bool,
    },
    /// Emits a typed action event.
    Action { action: NavAction },
}

/// A single navigation entry.
#[derive(Clone, Debug, PartialEq)]
pub struct NavItem {
    /// The item's display text.
    pub name: String,
    /// Visibility/availability flags.
    pub flags: ItemFlags,
    /// Link or action behavior.
    pub kind: NavItemKind,
}

impl NavItem {
    /// Create a link item.
    pub fn link(name: impl Into<String>, destination: Destination) -> Self {
        Self {
            name: name.into(),
            flags: ItemFlags::empty(),
            kind: NavItemKind::Link { destination, is_external: false },
        }
    }

    /// Create an action item.
    pub fn action(name: impl Into<String>, action: NavAction) -> Self {
        Self {
            name: name.into(),
            flags: ItemFlags::empty(),
            kind: NavItemKind::Action { action },
        }
    }

    /// Builder-style flag setter.
    pub fn with_flags(mut self, flags: ItemFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn is_disabled(&self) -> bool {
        self.flags.contains(ItemFlags::DISABLED)
    }

    pub fn always_hidden(&self) -> bool {
        self.flags.contains(ItemFlags::ALWAYS_HIDDEN)
    }

    pub fn is_link(&self) -> bool {
        matches!(self.kind, NavItemKind::Link { .. })
    }
}

// =============================================================================
// ACTIVATION EVENTS
// =============================================================================

/// How an item was activated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActivationSource {
    /// A key press (the key name, e.g. `"Enter"`).
    Key(String),
    /// A pointer event at terminal cell coordinates.
    Pointer { x: u16, y: u16 },
    /// Direct API call.
    Programmatic,
}

/// Payload delivered to action subscribers when an action item is activated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavPayload {
    /// What triggered the activation.
    pub source: ActivationSource,
    /// The activated item's action.
    pub action: NavAction,
}

// =============================================================================
// USER & DISPLAY CONFIG
// =============================================================================

/// Display data for the current user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    /// The user's full name.
    pub full_name: String,
}

/// Default maximum display width for the user name, in cells.
pub const DEFAULT_USER_NAME_MAX_LENGTH: u16 = 20;

/// Default maximum display width for the welcome message, in cells.
pub const DEFAULT_WELCOME_MESSAGE_MAX_LENGTH: u16 = 20;

/// Display configuration for the navigation bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavConfig {
    /// Truncation width for the user name, in cells.
    pub user_name_length: u16,
    /// The welcome message shown next to the user name.
    pub welcome_message: String,
    /// Truncation width for the welcome message, in cells.
    pub welcome_msg_length: u16,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            user_name_length: DEFAULT_USER_NAME_MAX_LENGTH,
            welcome_message: "Welcome".to_string(),
            welcome_msg_length: DEFAULT_WELCOME_MESSAGE_MAX_LENGTH,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
