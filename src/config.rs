//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and layout
//! constants live here so they can be tuned in one place.

use crate::ui::geometry::Bounds;

// Input

/// Encoder ticks needed to move focus to the next selectable element.
pub const ENCODER_DRAG: i32 = 2;

/// Firmware poll period (ms). Every encoder line and button is sampled
/// once per tick, so this must stay well below one detent's duration.
pub const POLL_INTERVAL_MS: u64 = 1;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Encoder A        → P0.03  (external pull-up, active-low)
//   Encoder B        → P0.04  (external pull-up, active-low)
//   Primary button   → P0.11  (knob switch, internal pull-up)
//   Secondary button → P0.12  (back button, internal pull-up)
//   I²C SDA          → P0.26
//   I²C SCL          → P0.27

// Widgets

/// Slider value change per encoder detent.
pub const SLIDER_STEP: i32 = 5;

/// Slider value at power-up (mid-scale).
pub const SLIDER_DEFAULT: u8 = 128;

/// Timer change per encoder detent (minutes).
pub const TIMER_STEP_MINUTES: i32 = 5;

/// Longest timer that can be armed (minutes).
pub const TIMER_MAX_MINUTES: u16 = 120;

/// Pixels the focus frame extends beyond the focused element.
pub const FOCUS_MARGIN: i32 = 3;

// Display

/// OLED panel size (SSD1306 / SSD1309, 128×64).
pub const DISPLAY_WIDTH: u32 = 128;
pub const DISPLAY_HEIGHT: u32 = 64;

/// Side panel the tooltip is drawn into.
pub const TOOLTIP_PANEL: Bounds = Bounds::new(88, 18, 40, 46);

/// Characters per tooltip line (4 px glyphs, 2 px left padding).
pub const TOOLTIP_COLUMNS: usize = 9;

/// Lines that fit into the tooltip panel.
pub const TOOLTIP_MAX_LINES: usize = 7;

/// Vertical distance between tooltip baselines (px).
pub const TOOLTIP_LINE_HEIGHT: i32 = 6;

// Lighting hand-off

/// Commands buffered between the UI loop and the lighting task.
pub const COMMAND_QUEUE_DEPTH: usize = 8;
