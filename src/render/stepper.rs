//! Quantity stepper
//!
//! Stepper buttons act on the quantity currently on screen, read at click
//! time, so a burst of clicks walks from whatever the latest render showed.

/// Parse the quantity text a row is displaying. Anything unreadable is 0.
pub fn displayed_quantity(text: &str) -> u32 {
    text.trim().parse().unwrap_or(0)
}

/// Quantity requested by the decrement button.
pub fn decrement(displayed: u32) -> u32 {
    displayed.saturating_sub(1)
}

/// Quantity requested by the increment button.
pub fn increment(displayed: u32) -> u32 {
    displayed.saturating_add(1)
}
