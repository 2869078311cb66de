//! Physical inputs - one rotary encoder and two push buttons.
//!
//! The firmware samples every line once per tick; [`Inputs::poll`] turns
//! that tick into the UI events it produced.

pub mod button;
pub mod encoder;

pub use button::{EdgeButton, ReleaseDetector};
pub use encoder::{Quadrature, QuadratureEncoder};

use crate::ui::InputEvent;
use embedded_hal::digital::InputPin;
use heapless::Vec;

/// Everything the operator can touch.
pub struct Inputs<A, B, P, S> {
    pub encoder: QuadratureEncoder<A, B>,
    /// Knob switch: interact / confirm.
    pub primary: EdgeButton<P>,
    /// Back button: confirm / cancel while an element holds capture.
    pub secondary: EdgeButton<S>,
}

impl<A, B, P, S> Inputs<A, B, P, S>
where
    A: InputPin,
    B: InputPin,
    P: InputPin,
    S: InputPin,
{
    pub fn new(encoder: QuadratureEncoder<A, B>, primary: EdgeButton<P>, secondary: EdgeButton<S>) -> Self {
        Self {
            encoder,
            primary,
            secondary,
        }
    }

    /// Sample all lines once and collect the resulting events, encoder first.
    pub fn poll(&mut self) -> Vec<InputEvent, 3> {
        let mut events = Vec::new();

        let step = self.encoder.poll();
        self.primary.poll();
        self.secondary.poll();

        // Capacity is 3 and at most 3 events are pushed.
        if step != 0 {
            let _ = events.push(InputEvent::Encoder(step));
        }
        if self.primary.consume_release() {
            let _ = events.push(InputEvent::Primary);
        }
        if self.secondary.consume_release() {
            let _ = events.push(InputEvent::Secondary);
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;
    use std::rc::Rc;

    /// In-memory input line; `true` = high.
    #[derive(Clone)]
    struct TestPin(Rc<Cell<bool>>);

    impl TestPin {
        fn high() -> Self {
            Self(Rc::new(Cell::new(true)))
        }

        fn set(&self, high: bool) {
            self.0.set(high);
        }
    }

    impl ErrorType for TestPin {
        type Error = Infallible;
    }

    impl InputPin for TestPin {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.0.get())
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(!self.0.get())
        }
    }

    struct Rig {
        a: TestPin,
        b: TestPin,
        primary: TestPin,
        secondary: TestPin,
        inputs: Inputs<TestPin, TestPin, TestPin, TestPin>,
    }

    fn rig() -> Rig {
        let (a, b, primary, secondary) = (TestPin::high(), TestPin::high(), TestPin::high(), TestPin::high());
        let inputs = Inputs::new(
            QuadratureEncoder::new(a.clone(), b.clone()),
            EdgeButton::new(primary.clone()),
            EdgeButton::new(secondary.clone()),
        );
        Rig {
            a,
            b,
            primary,
            secondary,
            inputs,
        }
    }

    #[test]
    fn quiet_tick_has_no_events() {
        let mut r = rig();
        assert!(r.inputs.poll().is_empty());
    }

    #[test]
    fn encoder_lines_are_active_low() {
        let mut r = rig();
        // A pulled low first: turning right.
        r.a.set(false);
        assert!(r.inputs.poll().is_empty());
        r.b.set(false);
        assert!(r.inputs.poll().is_empty());
        r.a.set(true);
        assert!(r.inputs.poll().is_empty());
        r.b.set(true);
        assert_eq!(r.inputs.poll().as_slice(), &[InputEvent::Encoder(1)]);
        assert!(r.inputs.poll().is_empty());
    }

    #[test]
    fn button_event_fires_on_release_not_press() {
        let mut r = rig();
        r.primary.set(false);
        assert!(r.inputs.poll().is_empty());
        assert!(r.inputs.poll().is_empty());
        r.primary.set(true);
        assert_eq!(r.inputs.poll().as_slice(), &[InputEvent::Primary]);
        assert!(r.inputs.poll().is_empty());
    }

    #[test]
    fn simultaneous_events_keep_order() {
        let mut r = rig();
        r.b.set(false);
        r.primary.set(false);
        r.secondary.set(false);
        assert!(r.inputs.poll().is_empty());
        r.b.set(true);
        r.primary.set(true);
        r.secondary.set(true);
        assert_eq!(
            r.inputs.poll().as_slice(),
            &[InputEvent::Encoder(-1), InputEvent::Primary, InputEvent::Secondary]
        );
    }
}
