//! Menu elements.
//!
//! Every element supports the same set of operations; variants that have
//! nothing to do for an operation fall back to the default arm (draw
//! nothing, not selectable, empty box, never capture, release on any
//! captured input, no tooltip). The controller never branches on the
//! variant itself.

use core::fmt::Write;

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::Point;
use heapless::String;

use crate::config::{SLIDER_DEFAULT, SLIDER_STEP, TIMER_MAX_MINUTES, TIMER_STEP_MINUTES};
use crate::ui::command::{Channel, Command, CommandSink};
use crate::ui::geometry::Bounds;
use crate::ui::surface::Surface;

/// Outcome of pressing the primary button on a focused element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Interaction {
    /// Handled on the spot; stay in navigation.
    Instant,
    /// Route all further input to this element until it releases.
    Capture,
}

/// Outcome of an input delivered to the capturing element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Capture {
    Hold,
    Release,
}

/// Static text.
#[derive(Clone, Copy, Debug)]
pub struct Label {
    pub at: Point,
    pub text: &'static str,
}

/// On/off switch for one light channel.
#[derive(Clone, Copy, Debug)]
pub struct Toggle {
    pub at: Point,
    pub channel: Channel,
    pub enabled: bool,
}

/// Which level a slider controls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Level {
    Brightness,
    Warmth,
}

/// 0..=255 level for one light channel.
#[derive(Clone, Copy, Debug)]
pub struct Slider {
    pub at: Point,
    pub channel: Channel,
    pub level: Level,
    pub value: u8,
}

/// Clock glyph that arms the sleep timer.
#[derive(Clone, Copy, Debug)]
pub struct TimerLauncher {
    pub at: Point,
    /// Minutes last sent to the timer; 0 = off.
    pub armed: u16,
    /// Value being edited while captured.
    pub pending: u16,
    pub editing: bool,
}

#[derive(Clone, Copy, Debug)]
pub enum Element {
    Label(Label),
    Toggle(Toggle),
    Slider(Slider),
    Timer(TimerLauncher),
}

const TOGGLE_W: i32 = 35;
const TOGGLE_H: i32 = 10;
const SLIDER_W: i32 = 35;
const SLIDER_H: i32 = 6;
const TIMER_W: i32 = 36;
const TIMER_H: i32 = 12;

const SLIDER_TOOLTIP: &str = "turn knob\nto change\nvalue,\npress any\nbutton to\nconfirm";
const TIMER_TOOLTIP: &str = "turn knob\nto set,\npress to\nstart,\nback to\ncancel";

impl Element {
    pub const fn label(x: i32, y: i32, text: &'static str) -> Self {
        Element::Label(Label {
            at: Point::new(x, y),
            text,
        })
    }

    /// Channels power up enabled.
    pub const fn toggle(x: i32, y: i32, channel: Channel) -> Self {
        Element::Toggle(Toggle {
            at: Point::new(x, y),
            channel,
            enabled: true,
        })
    }

    pub const fn slider(x: i32, y: i32, channel: Channel, level: Level) -> Self {
        Element::Slider(Slider {
            at: Point::new(x, y),
            channel,
            level,
            value: SLIDER_DEFAULT,
        })
    }

    pub const fn timer(x: i32, y: i32) -> Self {
        Element::Timer(TimerLauncher {
            at: Point::new(x, y),
            armed: 0,
            pending: 0,
            editing: false,
        })
    }

    pub fn render<S: Surface>(&self, surface: &mut S) {
        match self {
            Element::Label(label) => {
                surface.set_color(BinaryColor::On);
                surface.draw_text(label.at, label.text);
            }
            Element::Toggle(toggle) => toggle.render(surface),
            Element::Slider(slider) => slider.render(surface),
            Element::Timer(timer) => timer.render(surface),
        }
    }

    pub fn selectable(&self) -> bool {
        match self {
            Element::Label(_) => false,
            Element::Toggle(_) | Element::Slider(_) | Element::Timer(_) => true,
        }
    }

    /// Area the focus frame is drawn around.
    pub fn bounds(&self) -> Bounds {
        match self {
            Element::Label(_) => Bounds::empty(),
            Element::Toggle(t) => Bounds::new(t.at.x, t.at.y, TOGGLE_W, TOGGLE_H),
            Element::Slider(s) => Bounds::new(s.at.x, s.at.y, SLIDER_W, SLIDER_H),
            Element::Timer(t) => Bounds::new(t.at.x, t.at.y, TIMER_W, TIMER_H),
        }
    }

    /// Primary button released while this element has focus.
    pub fn interact<C: CommandSink>(&mut self, sink: &mut C) -> Interaction {
        match self {
            Element::Toggle(toggle) => {
                toggle.enabled = !toggle.enabled;
                sink.send(Command::Toggle {
                    channel: toggle.channel,
                    enabled: toggle.enabled,
                });
                Interaction::Instant
            }
            Element::Slider(_) => Interaction::Capture,
            Element::Timer(timer) => {
                timer.pending = timer.armed;
                timer.editing = true;
                Interaction::Capture
            }
            Element::Label(_) => Interaction::Instant,
        }
    }

    pub fn captured_primary<C: CommandSink>(&mut self, sink: &mut C) -> Capture {
        match self {
            Element::Timer(timer) => {
                timer.armed = timer.pending;
                timer.editing = false;
                sink.send(Command::Timer {
                    minutes: timer.armed,
                });
                Capture::Release
            }
            _ => Capture::Release,
        }
    }

    pub fn captured_secondary<C: CommandSink>(&mut self, _sink: &mut C) -> Capture {
        match self {
            Element::Timer(timer) => {
                timer.pending = timer.armed;
                timer.editing = false;
                Capture::Release
            }
            _ => Capture::Release,
        }
    }

    /// Relative knob movement while captured.
    pub fn captured_encoder<C: CommandSink>(&mut self, delta: i32, sink: &mut C) -> Capture {
        match self {
            Element::Slider(slider) => {
                let next = i32::from(slider.value).saturating_add(delta.saturating_mul(SLIDER_STEP));
                slider.value = next.clamp(0, i32::from(u8::MAX)) as u8;
                sink.send(slider.command());
                Capture::Hold
            }
            Element::Timer(timer) => {
                let next = i32::from(timer.pending).saturating_add(delta.saturating_mul(TIMER_STEP_MINUTES));
                timer.pending = next.clamp(0, i32::from(TIMER_MAX_MINUTES)) as u16;
                Capture::Hold
            }
            _ => Capture::Release,
        }
    }

    /// Hint for the side panel while this element holds capture.
    pub fn capture_tooltip(&self) -> &'static str {
        match self {
            Element::Slider(_) => SLIDER_TOOLTIP,
            Element::Timer(_) => TIMER_TOOLTIP,
            _ => "",
        }
    }
}

impl Toggle {
    fn render<S: Surface>(&self, surface: &mut S) {
        let area = Bounds::new(self.at.x, self.at.y, TOGGLE_W, TOGGLE_H);
        if self.enabled {
            // Clear whatever is behind, then outline.
            surface.set_color(BinaryColor::Off);
            surface.draw_box(area);
            surface.set_color(BinaryColor::On);
            surface.draw_frame(area);
        } else {
            // Inverted: solid box, text punched out.
            surface.set_color(BinaryColor::On);
            surface.draw_box(area);
            surface.set_color(BinaryColor::Off);
        }
        let text = if self.enabled { "enabled" } else { "disabled" };
        surface.draw_text(Point::new(self.at.x + 2, self.at.y + 7), text);
    }
}

impl Slider {
    fn command(&self) -> Command {
        match self.level {
            Level::Brightness => Command::Brightness {
                channel: self.channel,
                level: self.value,
            },
            Level::Warmth => Command::Warmth {
                channel: self.channel,
                level: self.value,
            },
        }
    }

    /// Width of the filled part of the bar.
    pub fn fill_width(&self) -> i32 {
        i32::from(self.value) * SLIDER_W / i32::from(u8::MAX)
    }

    fn render<S: Surface>(&self, surface: &mut S) {
        let area = Bounds::new(self.at.x, self.at.y, SLIDER_W, SLIDER_H);
        surface.set_color(BinaryColor::Off);
        surface.draw_box(area);
        surface.set_color(BinaryColor::On);
        surface.draw_frame(area);
        surface.draw_box(Bounds::new(self.at.x, self.at.y, self.fill_width(), SLIDER_H));
    }
}

impl TimerLauncher {
    /// Minutes currently shown: the draft while editing, else the armed value.
    pub fn shown_minutes(&self) -> u16 {
        if self.editing {
            self.pending
        } else {
            self.armed
        }
    }

    fn caption(&self) -> String<8> {
        let mut caption = String::new();
        match self.shown_minutes() {
            0 => {
                let _ = caption.push_str("off");
            }
            minutes => {
                let _ = write!(caption, "{}m", minutes);
            }
        }
        caption
    }

    fn render<S: Surface>(&self, surface: &mut S) {
        let center = Point::new(self.at.x + 6, self.at.y + 6);
        surface.set_color(BinaryColor::On);
        surface.draw_circle(center, 5);
        surface.draw_line(center, Point::new(center.x, center.y - 3));
        surface.draw_line(center, Point::new(center.x + 2, center.y));
        surface.draw_text(Point::new(self.at.x + 14, self.at.y + 8), &self.caption());
    }
}
