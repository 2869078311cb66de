//! Integration tests for lightremote host-testable logic.
//!
//! Drives the real menu end to end: pin levels → decoded input events →
//! controller → pixels in an in-memory 128×64 frame buffer.

use std::cell::{Cell, RefCell};
use std::convert::Infallible;
use std::rc::Rc;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_hal::digital::{ErrorType, InputPin};

use lightremote::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH, TOOLTIP_PANEL};
use lightremote::input::{EdgeButton, Inputs, QuadratureEncoder};
use lightremote::ui::command::Channel;
use lightremote::ui::menu::{remote_menu, ELEMENT_COUNT};
use lightremote::ui::{Command, FrameBuffer, GraphicsSurface, Mode, UiController};

const W: usize = DISPLAY_WIDTH as usize;
const H: usize = DISPLAY_HEIGHT as usize;

struct Oled {
    pixels: Box<[[bool; W]; H]>,
    presented: usize,
}

impl Oled {
    fn new() -> Self {
        Self {
            pixels: Box::new([[false; W]; H]),
            presented: 0,
        }
    }

    fn lit_in(&self, x0: usize, y0: usize, x1: usize, y1: usize) -> usize {
        (y0..y1)
            .flat_map(|y| (x0..x1).map(move |x| (x, y)))
            .filter(|&(x, y)| self.pixels[y][x])
            .count()
    }
}

impl OriginDimensions for Oled {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }
}

impl DrawTarget for Oled {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Infallible>
    where
        I: IntoIterator<Item = Pixel<BinaryColor>>,
    {
        for Pixel(p, color) in pixels {
            if (0..W as i32).contains(&p.x) && (0..H as i32).contains(&p.y) {
                self.pixels[p.y as usize][p.x as usize] = color.is_on();
            }
        }
        Ok(())
    }
}

impl FrameBuffer for Oled {
    fn present(&mut self) {
        self.presented += 1;
    }
}

#[derive(Clone)]
struct Line(Rc<Cell<bool>>);

impl Line {
    fn high() -> Self {
        Self(Rc::new(Cell::new(true)))
    }
}

impl ErrorType for Line {
    type Error = Infallible;
}

impl InputPin for Line {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(!self.0.get())
    }
}

type Sent = Rc<RefCell<Vec<Command>>>;

struct Remote {
    a: Line,
    b: Line,
    knob: Line,
    back: Line,
    inputs: Inputs<Line, Line, Line, Line>,
    ui: UiController<GraphicsSurface<Oled>, Box<dyn FnMut(Command)>, ELEMENT_COUNT>,
    sent: Sent,
}

impl Remote {
    fn new() -> Self {
        let (a, b, knob, back) = (Line::high(), Line::high(), Line::high(), Line::high());
        let inputs = Inputs::new(
            QuadratureEncoder::new(a.clone(), b.clone()),
            EdgeButton::new(knob.clone()),
            EdgeButton::new(back.clone()),
        );
        let sent: Sent = Rc::default();
        let log = sent.clone();
        let sink: Box<dyn FnMut(Command)> = Box::new(move |c| log.borrow_mut().push(c));
        let ui = UiController::new(remote_menu(), GraphicsSurface::new(Oled::new()), sink)
            .expect("menu has selectable elements");
        Self {
            a,
            b,
            knob,
            back,
            inputs,
            ui,
            sent,
        }
    }

    /// One firmware tick: sample, dispatch every event.
    fn tick(&mut self) {
        for event in self.inputs.poll() {
            self.ui.dispatch(event);
        }
    }

    /// Drive one line to a level and run a tick.
    fn set(&mut self, line: &Line, high: bool) {
        line.0.set(high);
        self.tick();
    }

    /// Walk the phase lines through one full detent.
    fn detent(&mut self, right: bool) {
        let (first, second) = if right {
            (self.a.clone(), self.b.clone())
        } else {
            (self.b.clone(), self.a.clone())
        };
        self.set(&first, false);
        self.set(&second, false);
        self.set(&first, true);
        self.set(&second, true);
    }

    fn turn(&mut self, detents: i32) {
        for _ in 0..detents.abs() {
            self.detent(detents > 0);
        }
    }

    fn press(&mut self, line: Line) {
        self.set(&line, false);
        self.set(&line, true);
    }

    fn press_knob(&mut self) {
        self.press(self.knob.clone());
    }

    fn press_back(&mut self) {
        self.press(self.back.clone());
    }

    fn oled(&self) -> &Oled {
        self.ui.surface().target()
    }
}

#[test]
fn idle_ticks_draw_nothing() {
    let mut r = Remote::new();
    for _ in 0..20 {
        r.tick();
    }
    assert_eq!(r.oled().presented, 0);
}

#[test]
fn toggling_front_channel_from_the_knob() {
    let mut r = Remote::new();
    r.press_knob();
    assert_eq!(
        *r.sent.borrow(),
        [Command::Toggle { channel: Channel::Front, enabled: false }]
    );
    assert_eq!(r.oled().presented, 1);
    // Disabled toggle is a solid block.
    assert!(r.oled().lit_in(5, 15, 38, 23) > 150);
}

#[test]
fn dimming_back_brightness() {
    let mut r = Remote::new();
    // Front toggle → back toggle → front bright → front warmth → back bright.
    r.turn(8);
    assert_eq!(r.ui.focus(), 10);
    r.press_knob();
    assert_eq!(r.ui.mode(), Mode::Captured(10));

    r.turn(-3);
    r.press_back();
    assert_eq!(r.ui.mode(), Mode::Navigating);

    let sent = r.sent.borrow();
    assert_eq!(
        *sent,
        [
            Command::Brightness { channel: Channel::Back, level: 123 },
            Command::Brightness { channel: Channel::Back, level: 118 },
            Command::Brightness { channel: Channel::Back, level: 113 },
        ]
    );
}

#[test]
fn arming_the_timer() {
    let mut r = Remote::new();
    r.turn(-2);
    r.press_knob();
    r.turn(2);
    assert!(r.sent.borrow().is_empty());
    r.press_knob();
    assert_eq!(*r.sent.borrow(), [Command::Timer { minutes: 10 }]);
}

#[test]
fn panel_is_redrawn_with_capture_hint() {
    let mut r = Remote::new();
    let panel = |r: &Remote| {
        let x = TOOLTIP_PANEL.x as usize + 1;
        let y = TOOLTIP_PANEL.y as usize;
        r.oled().lit_in(x, y, W, y + TOOLTIP_PANEL.h as usize)
    };

    r.press_back();
    let navigating = panel(&r);
    assert!(navigating > 0);

    r.turn(4);
    r.press_knob();
    let captured = panel(&r);
    // Six lines of slider hint against four of navigation hint.
    assert!(captured > navigating);

    r.press_back();
    assert_eq!(panel(&r), navigating);
}

#[test]
fn each_event_presents_one_frame() {
    let mut r = Remote::new();
    r.turn(3);
    r.press_knob();
    r.press_back();
    assert_eq!(r.oled().presented, 5);
}
