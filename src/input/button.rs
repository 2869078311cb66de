//! Edge-triggered push buttons.
//!
//! Buttons are active-low with internal pull-up: HIGH = released,
//! LOW = pressed. Sampling (`poll`, every tick) is kept apart from
//! consumption (`consume_release`, whenever the caller wants to know
//! whether a press-then-release completed since it last asked).

use embedded_hal::digital::InputPin;

/// Pin-independent release detector.
#[derive(Clone, Copy, Debug)]
pub struct ReleaseDetector {
    last_high: bool,
    released: bool,
}

impl ReleaseDetector {
    /// Starts in the released (high) level so boot does not report a release.
    pub const fn new() -> Self {
        Self {
            last_high: true,
            released: false,
        }
    }

    /// Record one level sample (`true` = high = released).
    pub fn update(&mut self, high: bool) {
        if !self.last_high && high {
            self.released = true;
        }
        self.last_high = high;
    }

    /// Returns `true` once per completed press-then-release.
    pub fn consume_release(&mut self) -> bool {
        core::mem::take(&mut self.released)
    }

    /// Current debounced level is "pressed".
    pub fn is_pressed(&self) -> bool {
        !self.last_high
    }
}

impl Default for ReleaseDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// A pulled-up push button on one GPIO input.
pub struct EdgeButton<P> {
    pin: P,
    detector: ReleaseDetector,
}

impl<P: InputPin> EdgeButton<P> {
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            detector: ReleaseDetector::new(),
        }
    }

    /// Sample the pin once. A failed read leaves the last level in place.
    pub fn poll(&mut self) {
        if let Ok(high) = self.pin.is_high() {
            self.detector.update(high);
        }
    }

    pub fn consume_release(&mut self) -> bool {
        self.detector.consume_release()
    }
}
