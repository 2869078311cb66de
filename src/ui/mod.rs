//! User interface subsystem - OLED menu driven by a knob and two buttons.
//!
//! The [`UiController`] keeps a fixed list of [`Element`]s, tracks which one
//! has focus and whether one has *captured* the input, routes every
//! [`InputEvent`] accordingly and redraws the whole screen afterwards.
//!
//! ## Components
//!
//! - **Surface**: minimal drawing capability, backed by `embedded-graphics`
//! - **Elements**: label, toggle, slider, timer launcher
//! - **Controller**: navigation / capture state machine + rendering

pub mod command;
pub mod controller;
#[cfg(feature = "embedded")]
pub mod display;
pub mod element;
pub mod geometry;
pub mod menu;
pub mod surface;
pub mod tooltip;


pub use command::{Channel, Command, CommandSink};
pub use controller::UiController;
pub use element::{Capture, Element, Interaction};
pub use geometry::Bounds;
pub use surface::{FrameBuffer, GraphicsSurface, Surface};

/// Input events after decoding and edge detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputEvent {
    /// One or more encoder detents (signed).
    Encoder(i8),
    /// Knob switch released.
    Primary,
    /// Back button released.
    Secondary,
}

/// Who receives the next input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Encoder moves focus; primary interacts with the focused element.
    Navigating,
    /// All input goes to the element at this index until it releases.
    Captured(usize),
}
