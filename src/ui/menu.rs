//! The remote's single screen.
//!
//! ```text
//!  front      back         (clock) off
//! [enabled ] [enabled ]   +---------+
//!                          | tooltip |
//!  bright     bright       |  panel  |
//! [=====   ] [=====   ]    |         |
//!  warmth     warmth       |         |
//! [=====   ] [=====   ]    +---------+
//! ```
//!
//! Focus order follows list order: front toggle, back toggle, the four
//! sliders (front brightness, front warmth, back brightness, back warmth),
//! then the timer.

use crate::ui::command::Channel;
use crate::ui::element::{Element, Level};

pub const ELEMENT_COUNT: usize = 13;

pub fn remote_menu() -> [Element; ELEMENT_COUNT] {
    [
        Element::label(5, 9, "front"),
        Element::label(48, 9, "back"),
        Element::toggle(4, 14, Channel::Front),
        Element::toggle(47, 14, Channel::Back),
        Element::label(5, 32, "bright"),
        Element::label(48, 32, "bright"),
        Element::label(5, 50, "warmth"),
        Element::label(48, 50, "warmth"),
        Element::slider(4, 36, Channel::Front, Level::Brightness),
        Element::slider(4, 54, Channel::Front, Level::Warmth),
        Element::slider(47, 36, Channel::Back, Level::Brightness),
        Element::slider(47, 54, Channel::Back, Level::Warmth),
        Element::timer(90, 2),
    ]
}
