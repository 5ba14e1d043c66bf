//! Input Bridge - Crossterm event conversion and routing
//!
//! Connects crossterm's event stream to the engine's explicit triggers.
//! Resize events update the viewport signal and re-balance the bar; a small
//! key map drives selection and activation.
//!
//! # Example
//!
//! ```ignore
//! use responsive_nav::state::input::{poll_event, route_event};
//! use std::time::Duration;
//!
//! loop {
//!     if let Ok(Some(event)) = poll_event(Duration::from_millis(16)) {
//!         route_event(&nav, event);
//!     }
//! }
//! ```

use std::time::Duration;

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, poll, read};

use crate::nav::NavBar;
use crate::types::ActivationSource;

use super::viewport::set_viewport_size;

// =============================================================================
// EVENT TYPES
// =============================================================================

/// Keys the navigation bar reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavKey {
    /// Move selection forward (Right, Tab).
    Next,
    /// Move selection backward (Left, Shift+Tab via BackTab).
    Previous,
    /// Activate the selected item (Enter).
    Activate,
    /// Anything else; passed through untouched.
    Other(String),
}

/// Unified event type for the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputEvent {
    /// A key press.
    Key(NavKey),
    /// Terminal resize (new width, height).
    Resize(u16, u16),
    /// No event or an event type the engine ignores.
    None,
}

// =============================================================================
// CONVERSION
// =============================================================================

/// Map a crossterm key event onto the navigation key set.
///
/// Only press events map to navigation keys; repeats and releases are
/// ignored.
pub fn convert_key_event(event: KeyEvent) -> NavKey {
    if event.kind != KeyEventKind::Press {
        return NavKey::Other(String::new());
    }

    match event.code {
        KeyCode::Right | KeyCode::Tab => NavKey::Next,
        KeyCode::Left | KeyCode::BackTab => NavKey::Previous,
        KeyCode::Enter => NavKey::Activate,
        KeyCode::Char(c) => NavKey::Other(c.to_string()),
        other => NavKey::Other(format!("{other:?}")),
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout. Returns `None` if nothing arrived.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if poll(timeout)? {
        Ok(Some(read_event()?))
    } else {
        Ok(None)
    }
}

/// Read the next event (blocking).
pub fn read_event() -> std::io::Result<InputEvent> {
    match read()? {
        CrosstermEvent::Key(key) => Ok(InputEvent::Key(convert_key_event(key))),
        CrosstermEvent::Resize(w, h) => Ok(InputEvent::Resize(w, h)),
        _ => Ok(InputEvent::None),
    }
}

// =============================================================================
// ROUTING
// =============================================================================

/// Route an event to the navigation bar's triggers.
///
/// Returns true if the event was consumed.
pub fn route_event(nav: &NavBar, event: InputEvent) -> bool {
    match event {
        InputEvent::Resize(width, height) => {
            set_viewport_size(width, height);
            nav.on_resize();
            true
        }
        InputEvent::Key(NavKey::Next) => {
            nav.select_next();
            true
        }
        InputEvent::Key(NavKey::Previous) => {
            nav.select_previous();
            true
        }
        InputEvent::Key(NavKey::Activate) => {
            nav.activate(ActivationSource::Key("Enter".to_string())).is_some()
        }
        InputEvent::Key(NavKey::Other(_)) | InputEvent::None => false,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::measure::FixedWidths;
    use crate::types::{Destination, NavAction, NavItem, NavPayload};
    use crossterm::event::KeyModifiers;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_key_conversion() {
        assert_eq!(convert_key_event(press(KeyCode::Right)), NavKey::Next);
        assert_eq!(convert_key_event(press(KeyCode::Tab)), NavKey::Next);
        assert_eq!(convert_key_event(press(KeyCode::Left)), NavKey::Previous);
        assert_eq!(convert_key_event(press(KeyCode::BackTab)), NavKey::Previous);
        assert_eq!(convert_key_event(press(KeyCode::Enter)), NavKey::Activate);
        assert_eq!(convert_key_event(press(KeyCode::Char('q'))), NavKey::Other("q".to_string()));
    }

    #[test]
    fn test_resize_routing() {
        let nav = NavBar::with_oracle(FixedWidths::new(&[("A", 40), ("B", 40), ("C", 40)]));
        set_viewport_size(200, 24);
        nav.set_items(vec![
            NavItem::link("A", Destination::Route(vec!["/a".to_string()])),
            NavItem::link("B", Destination::Route(vec!["/b".to_string()])),
            NavItem::link("C", Destination::Route(vec!["/c".to_string()])),
        ]);
        assert_eq!(nav.lists().visible_len(), 3);

        // available = 100 - 10 buffer = 90; third item overflows.
        assert!(route_event(&nav, InputEvent::Resize(100, 24)));
        assert_eq!(nav.lists().visible_len(), 2);
        assert_eq!(nav.lists().hidden().len(), 1);
    }

    #[test]
    fn test_key_routing_selects_and_activates() {
        let nav = NavBar::with_oracle(FixedWidths::new(&[("Log out", 20)]));
        set_viewport_size(200, 24);
        nav.set_items(vec![NavItem::action("Log out", NavAction::new("log-out"))]);

        let seen: Rc<RefCell<Vec<NavPayload>>> = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();
        let _cleanup = nav.emitter().on(move |payload| {
            seen_clone.borrow_mut().push(payload.clone());
        });

        assert!(route_event(&nav, InputEvent::Key(NavKey::Next)));
        assert!(route_event(&nav, InputEvent::Key(NavKey::Activate)));

        let seen = seen.borrow();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].action.action_type, "log-out");
        assert_eq!(seen[0].source, ActivationSource::Key("Enter".to_string()));
    }

    #[test]
    fn test_unhandled_events_pass_through() {
        let nav = NavBar::new();
        assert!(!route_event(&nav, InputEvent::Key(NavKey::Other("q".to_string()))));
        assert!(!route_event(&nav, InputEvent::None));
        // Activate with nothing selected is a no-op.
        assert!(!route_event(&nav, InputEvent::Key(NavKey::Activate)));
    }
}
