//! Unified error type for lightremote.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // UI
    /// The controller was given a menu in which nothing can take focus.
    NoSelectableElements,

    // Display
    /// I²C transaction to the display failed during bring-up.
    Display,
}
