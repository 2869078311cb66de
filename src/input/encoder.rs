//! Quadrature decoding for the navigation knob.
//!
//! Both phase lines idle high (pulled up) and are *active* when held low.
//! One detent of a mechanical encoder walks through
//!
//! ```text
//! right: (A, B) = idle → A active → both active → B active → idle
//! left:  (A, B) = idle → B active → both active → A active → idle
//! ```
//!
//! The decoder only looks at the first line to go active and at the
//! moment both lines are inactive again. Everything in between, including
//! contact bounce, is absorbed without emitting anything.

use embedded_hal::digital::InputPin;

/// Where the knob is within a detent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Resting in a detent.
    Idle,
    /// Line A went active first; completes as +1.
    TurningRight,
    /// Line B went active first; completes as -1.
    TurningLeft,
}

/// Pin-independent decoder state machine.
#[derive(Clone, Copy, Debug)]
pub struct Quadrature {
    phase: Phase,
}

impl Quadrature {
    pub const fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Feed one sample of both lines (`true` = active).
    ///
    /// Returns +1 or -1 on the sample that completes a detent, 0 otherwise.
    pub fn update(&mut self, a: bool, b: bool) -> i8 {
        match (self.phase, a, b) {
            (Phase::Idle, true, false) => {
                self.phase = Phase::TurningRight;
                0
            }
            (Phase::Idle, false, true) => {
                self.phase = Phase::TurningLeft;
                0
            }
            (Phase::TurningRight, false, false) => {
                self.phase = Phase::Idle;
                1
            }
            (Phase::TurningLeft, false, false) => {
                self.phase = Phase::Idle;
                -1
            }
            _ => 0,
        }
    }

    /// True while a detent has started but not completed.
    pub fn is_turning(&self) -> bool {
        self.phase != Phase::Idle
    }
}

impl Default for Quadrature {
    fn default() -> Self {
        Self::new()
    }
}

/// A rotary encoder wired to two GPIO inputs.
pub struct QuadratureEncoder<A, B> {
    pin_a: A,
    pin_b: B,
    decoder: Quadrature,
}

impl<A: InputPin, B: InputPin> QuadratureEncoder<A, B> {
    pub fn new(pin_a: A, pin_b: B) -> Self {
        Self {
            pin_a,
            pin_b,
            decoder: Quadrature::new(),
        }
    }

    /// Sample both lines once. Returns -1, 0 or +1.
    ///
    /// A line that fails to read counts as inactive.
    pub fn poll(&mut self) -> i8 {
        let a = self.pin_a.is_low().unwrap_or(false);
        let b = self.pin_b.is_low().unwrap_or(false);
        self.decoder.update(a, b)
    }
}
