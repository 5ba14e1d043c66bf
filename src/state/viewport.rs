//! Viewport Size Signal
//!
//! Thread-local signal holding the terminal size. The input bridge updates
//! it from resize events; hosts embedding the engine elsewhere can set it
//! directly. Anything reading the width from an effect re-runs on resize.

use spark_signals::{Signal, signal};

/// Fallback size when the terminal has not been queried yet.
const DEFAULT_SIZE: (u16, u16) = (80, 24);

thread_local! {
    static VIEWPORT_SIZE: Signal<(u16, u16)> = signal(DEFAULT_SIZE);
}

/// Current viewport width in cells.
pub fn viewport_width() -> u16 {
    VIEWPORT_SIZE.with(|s| s.get()).0
}

/// Current viewport height in cells.
pub fn viewport_height() -> u16 {
    VIEWPORT_SIZE.with(|s| s.get()).1
}

/// Update the viewport size (resize events, tests).
pub fn set_viewport_size(width: u16, height: u16) {
    VIEWPORT_SIZE.with(|s| s.set((width, height)));
}

/// Query the real terminal size and store it in the signal.
pub fn sync_viewport_size() -> std::io::Result<(u16, u16)> {
    let (width, height) = crossterm::terminal::size()?;
    set_viewport_size(width, height);
    Ok((width, height))
}

// =============================================================================
// TESTS
// =============================================================================
