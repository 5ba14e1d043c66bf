//! Instance-Scoped ID Allocator
//!
//! Generates stable per-instance element IDs (`nav-0`, `nav-1`, ...). Each
//! navigation bar owns its own allocator, so IDs are deterministic within an
//! instance and independent across instances and test runs.

use std::cell::Cell;
use std::rc::Rc;

/// Allocates unique IDs within one component instance.
#[derive(Clone)]
pub struct IdAllocator {
    prefix: Rc<str>,
    counter: Rc<Cell<usize>>,
}

impl IdAllocator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Rc::from(prefix.into()),
            counter: Rc::new(Cell::new(0)),
        }
    }

    /// Next unique ID for this instance.
    pub fn next_id(&self) -> String {
        let n = self.counter.get();
        self.counter.set(n + 1);
        format!("{}-{n}", self.prefix)
    }

    /// How many IDs have been handed out.
    pub fn allocated(&self) -> usize {
        self.counter.get()
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new("nav")
    }
}

// =============================================================================
// TESTS
// =============================================================================
