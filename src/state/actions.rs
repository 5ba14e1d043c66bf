//! Action Emitter
//!
//! Subscribe/notify contract for navigation action events. Each navigation
//! bar owns its own emitter, so handlers never leak across instances or
//! test runs.
//!
//! # Example
//!
//! ```ignore
//! let cleanup = nav.emitter().on(|payload| {
//!     println!("action: {}", payload.action.action_type);
//! });
//!
//! // ... later
//! cleanup();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::types::NavPayload;

type Handler = Rc<dyn Fn(&NavPayload)>;

struct HandlerRegistry {
    handlers: Vec<(usize, Handler)>,
    next_id: usize,
}

impl HandlerRegistry {
    fn new() -> Self {
        Self { handlers: Vec::new(), next_id: 0 }
    }
}

/// Instance-scoped action event emitter.
#[derive(Clone)]
pub struct ActionEmitter {
    registry: Rc<RefCell<HandlerRegistry>>,
}

impl ActionEmitter {
    pub fn new() -> Self {
        Self { registry: Rc::new(RefCell::new(HandlerRegistry::new())) }
    }

    /// Subscribe to action events. Returns a cleanup function.
    pub fn on<F>(&self, handler: F) -> impl FnOnce() + use<F>
    where
        F: Fn(&NavPayload) + 'static,
    {
        let id = {
            let mut reg = self.registry.borrow_mut();
            let id = reg.next_id;
            reg.next_id += 1;
            reg.handlers.push((id, Rc::new(handler)));
            id
        };

        let registry = self.registry.clone();
        move || {
            registry.borrow_mut().handlers.retain(|(handler_id, _)| *handler_id != id);
        }
    }

    /// Deliver a payload to every subscriber, in subscription order.
    ///
    /// Returns the number of handlers notified.
    pub fn emit(&self, payload: &NavPayload) -> usize {
        // Handlers may subscribe/unsubscribe from inside a callback, so the
        // registry borrow must not be held during dispatch.
        let handlers: Vec<Handler> = self
            .registry
            .borrow()
            .handlers
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();

        for handler in &handlers {
            handler(payload);
        }
        handlers.len()
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().handlers.len()
    }
}

impl Default for ActionEmitter {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ActivationSource, NavAction};
    use std::cell::Cell;

    fn payload(action_type: &str) -> NavPayload {
        NavPayload {
            source: ActivationSource::Programmatic,
            action: NavAction::new(action_type),
        }
    }

    #[test]
    fn test_subscribe_and_emit() {
        let emitter = ActionEmitter::new();
        let count = Rc::new(Cell::new(0));

        let count_clone = count.clone();
        let _cleanup = emitter.on(move |p| {
            assert_eq!(p.action.action_type, "log-out");
            count_clone.set(count_clone.get() + 1);
        });

        assert_eq!(emitter.emit(&payload("log-out")), 1);
        assert_eq!(count.get(), 1);

        emitter.emit(&payload("log-out"));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_cleanup_unsubscribes() {
        let emitter = ActionEmitter::new();
        let count = Rc::new(Cell::new(0));

        let count_clone = count.clone();
        let cleanup = emitter.on(move |_| {
            count_clone.set(count_clone.get() + 1);
        });

        emitter.emit(&payload("x"));
        assert_eq!(count.get(), 1);

        cleanup();
        assert_eq!(emitter.subscriber_count(), 0);

        emitter.emit(&payload("x"));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_emitters_are_independent() {
        let a = ActionEmitter::new();
        let b = ActionEmitter::new();
        let count = Rc::new(Cell::new(0));

        let count_clone = count.clone();
        let _cleanup = a.on(move |_| {
            count_clone.set(count_clone.get() + 1);
        });

        b.emit(&payload("x"));
        assert_eq!(count.get(), 0);

        a.emit(&payload("x"));
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_handlers_called_in_order() {
        let emitter = ActionEmitter::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        let order_a = order.clone();
        let _c1 = emitter.on(move |_| order_a.borrow_mut().push("a"));
        let order_b = order.clone();
        let _c2 = emitter.on(move |_| order_b.borrow_mut().push("b"));

        emitter.emit(&payload("x"));
        assert_eq!(*order.borrow(), vec!["a", "b"]);
    }
}
