//! Reactive State
//!
//! Signals and event plumbing around the layout core:
//! - [`lists`] - The visible/hidden item signals
//! - [`viewport`] - Terminal size signal and crossterm size query
//! - [`actions`] - Action event emitter (subscribe/notify)
//! - [`input`] - Crossterm event bridge (resize/keys to engine triggers)

pub mod actions;
pub mod input;
pub mod lists;
pub mod viewport;

pub use actions::ActionEmitter;
pub use input::{InputEvent, NavKey, convert_key_event, poll_event, read_event, route_event};
pub use lists::NavLists;
pub use viewport::{set_viewport_size, sync_viewport_size, viewport_height, viewport_width};
