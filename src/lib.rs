//! Input decoding and menu logic for the lightremote handheld.
//!
//! Everything here is hardware-independent: pins come in through
//! `embedded-hal` traits, drawing goes out through `embedded-graphics`,
//! and lighting changes leave as [`ui::Command`]s. The library builds
//! and tests on the host.
//!
//! Usage: `cargo test`
//!
//! Note: The embedded binary (main.rs, `--features embedded`) wires this
//! library to the nRF52840 pins, the SSD1306 panel and the lighting task.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod error;
pub mod input;
pub mod ui;

pub use error::Error;
pub use input::{EdgeButton, Inputs, QuadratureEncoder};
pub use ui::{Command, InputEvent, Mode, UiController};
