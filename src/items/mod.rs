//! Item Ingestion
//!
//! Turns the raw item list supplied by the host into the engine's working
//! set: disabled items dropped, link externality derived, and the remainder
//! split into the initially visible row and the hidden overflow deque.

mod partition;

pub use partition::{annotate, partition};
