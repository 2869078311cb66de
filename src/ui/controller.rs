//! Focus, capture and redraw for one screen of elements.
//!
//! Two modes:
//!
//! - **Navigating** - the encoder moves focus over the selectable elements
//!   (one step per [`ENCODER_DRAG`] ticks, wrapping around), the primary
//!   button calls `interact` on the focused element, the secondary button
//!   only refreshes the screen.
//! - **Captured(i)** - every input goes to element `i`'s capture handlers
//!   until one of them returns [`Capture::Release`]. Focus is frozen.
//!
//! Every dispatched event is followed by exactly one full redraw.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::Point;

use crate::config::{ENCODER_DRAG, FOCUS_MARGIN, TOOLTIP_LINE_HEIGHT, TOOLTIP_PANEL};
use crate::error::Error;
use crate::ui::command::CommandSink;
use crate::ui::element::{Capture, Element, Interaction};
use crate::ui::surface::Surface;
use crate::ui::tooltip::{self, NAVIGATION_HINT};
use crate::ui::{InputEvent, Mode};

pub struct UiController<D, S, const N: usize> {
    elements: [Element; N],
    surface: D,
    sink: S,
    /// Number of selectable elements, at least one.
    selectable: usize,
    /// Index into `elements`; always a selectable element.
    focus: usize,
    /// Encoder ticks, kept in `0..ENCODER_DRAG * selectable`.
    ticks: i32,
    mode: Mode,
}

impl<D: Surface, S: CommandSink, const N: usize> UiController<D, S, N> {
    /// Take ownership of the menu, the display and the command sink.
    ///
    /// Focus starts on the first selectable element. Nothing is drawn until
    /// the first [`render`](Self::render) or dispatched event.
    pub fn new(elements: [Element; N], surface: D, sink: S) -> Result<Self, Error> {
        let Some(focus) = elements.iter().position(Element::selectable) else {
            return Err(Error::NoSelectableElements);
        };
        let selectable = elements.iter().filter(|e| e.selectable()).count();

        Ok(Self {
            elements,
            surface,
            sink,
            selectable,
            focus,
            ticks: 0,
            mode: Mode::Navigating,
        })
    }

    /// Route one input event, redraw, and return the resulting mode.
    pub fn dispatch(&mut self, event: InputEvent) -> Mode {
        self.mode = match self.mode {
            Mode::Navigating => self.navigate(event),
            Mode::Captured(index) => self.forward(index, event),
        };
        self.render();
        self.mode
    }

    pub fn encoder_turned(&mut self, delta: i8) -> Mode {
        self.dispatch(InputEvent::Encoder(delta))
    }

    pub fn primary_released(&mut self) -> Mode {
        self.dispatch(InputEvent::Primary)
    }

    pub fn secondary_released(&mut self) -> Mode {
        self.dispatch(InputEvent::Secondary)
    }

    fn navigate(&mut self, event: InputEvent) -> Mode {
        match event {
            InputEvent::Encoder(delta) => {
                self.move_focus(delta);
                Mode::Navigating
            }
            InputEvent::Primary => match self.elements[self.focus].interact(&mut self.sink) {
                Interaction::Capture => Mode::Captured(self.focus),
                Interaction::Instant => Mode::Navigating,
            },
            InputEvent::Secondary => Mode::Navigating,
        }
    }

    fn forward(&mut self, index: usize, event: InputEvent) -> Mode {
        let element = &mut self.elements[index];
        let outcome = match event {
            InputEvent::Encoder(delta) => element.captured_encoder(i32::from(delta), &mut self.sink),
            InputEvent::Primary => element.captured_primary(&mut self.sink),
            InputEvent::Secondary => element.captured_secondary(&mut self.sink),
        };
        match outcome {
            Capture::Hold => Mode::Captured(index),
            Capture::Release => Mode::Navigating,
        }
    }

    fn move_focus(&mut self, delta: i8) {
        // Reduced modulo one full lap: same focus, no overflow.
        let lap = ENCODER_DRAG * self.selectable as i32;
        self.ticks = (self.ticks + i32::from(delta)).rem_euclid(lap);
        let step = (self.ticks / ENCODER_DRAG) as usize;

        if let Some(index) = self.nth_selectable(step) {
            self.focus = index;
        }
    }

    fn nth_selectable(&self, n: usize) -> Option<usize> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.selectable())
            .nth(n)
            .map(|(index, _)| index)
    }

    /// Redraw the whole screen and present it.
    pub fn render(&mut self) {
        self.surface.clear();

        // List order is draw order: later elements paint over earlier ones.
        for element in &self.elements {
            element.render(&mut self.surface);
        }

        let highlight = self.elements[self.focus].bounds().extend(FOCUS_MARGIN);
        self.surface.set_color(BinaryColor::On);
        self.surface.draw_frame(highlight);

        self.draw_tooltip();
        self.surface.present();
    }

    fn draw_tooltip(&mut self) {
        let text = match self.mode {
            Mode::Captured(index) => self.elements[index].capture_tooltip(),
            Mode::Navigating => NAVIGATION_HINT,
        };

        let panel = TOOLTIP_PANEL;
        self.surface.set_color(BinaryColor::Off);
        self.surface.draw_box(panel);
        self.surface.set_color(BinaryColor::On);
        self.surface.draw_line(
            Point::new(panel.x, panel.y),
            Point::new(panel.x, panel.y + panel.h - 1),
        );

        for (row, line) in tooltip::lines(text).enumerate() {
            let baseline = panel.y + TOOLTIP_LINE_HEIGHT * (row as i32 + 1);
            self.surface.draw_text(Point::new(panel.x + 2, baseline), &line);
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Index of the focused element in the menu.
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn selectable_count(&self) -> usize {
        self.selectable
    }

    pub fn elements(&self) -> &[Element; N] {
        &self.elements
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
