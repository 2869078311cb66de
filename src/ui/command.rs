//! Notifications from the menu to the lighting and timer logic.

/// The two independently controlled light channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Front,
    Back,
}

/// A value the operator just changed. One-way, fire and forget.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Channel switched on or off.
    Toggle { channel: Channel, enabled: bool },
    /// Brightness level, 0..=255.
    Brightness { channel: Channel, level: u8 },
    /// Colour temperature level, 0..=255 (cold to warm).
    Warmth { channel: Channel, level: u8 },
    /// Timer armed for this many minutes; 0 disarms it.
    Timer { minutes: u16 },
}

/// Receiver for [`Command`]s, owned by the UI controller.
pub trait CommandSink {
    fn send(&mut self, command: Command);
}

impl<F: FnMut(Command)> CommandSink for F {
    fn send(&mut self, command: Command) {
        self(command)
    }
}
