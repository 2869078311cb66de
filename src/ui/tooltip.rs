//! Tooltip text for the side panel.
//!
//! Lines break only at embedded `'\n'`; each line is cut or space-padded to
//! exactly [`TOOLTIP_COLUMNS`] characters and at most [`TOOLTIP_MAX_LINES`]
//! lines are produced. The source string is never modified, so the same
//! `&'static str` formats identically on every render pass.

use heapless::String;

use crate::config::{TOOLTIP_COLUMNS, TOOLTIP_MAX_LINES};

/// Shown in the side panel while nothing holds capture.
pub const NAVIGATION_HINT: &str = "turn knob\nto move,\npress to\nselect";

/// One formatted panel line.
pub type TooltipLine = String<TOOLTIP_COLUMNS>;

/// Split `text` into panel lines. Empty text yields no lines.
pub fn lines(text: &str) -> impl Iterator<Item = TooltipLine> + '_ {
    text.split('\n')
        .filter(move |_| !text.is_empty())
        .take(TOOLTIP_MAX_LINES)
        .map(fit)
}

fn fit(line: &str) -> TooltipLine {
    let mut out = TooltipLine::new();
    for c in line.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    while out.push(' ').is_ok() {}
    out
}
