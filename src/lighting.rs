//! Hand-off from the menu to the lighting logic.
//!
//! The UI loop must never block on the lights, so commands go through a
//! bounded channel. If the lighting side falls behind, new commands are
//! dropped; the next knob movement sends a fresh absolute value anyway.

use defmt::{info, warn};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use lightremote::config::COMMAND_QUEUE_DEPTH;
use lightremote::ui::{Command, CommandSink};

pub static COMMANDS: Channel<CriticalSectionRawMutex, Command, COMMAND_QUEUE_DEPTH> = Channel::new();

/// [`CommandSink`] that queues onto [`COMMANDS`].
pub struct QueueSink;

impl CommandSink for QueueSink {
    fn send(&mut self, command: Command) {
        if COMMANDS.try_send(command).is_err() {
            warn!("Lighting: queue full, dropped {}", command);
        }
    }
}

/// Drain the command queue. The channel drivers hook in here.
#[embassy_executor::task]
pub async fn lighting_task() -> ! {
    loop {
        let command = COMMANDS.receive().await;
        match command {
            Command::Toggle { channel, enabled } => {
                info!("Lighting: {} enabled={}", channel, enabled)
            }
            Command::Brightness { channel, level } => {
                info!("Lighting: {} brightness={}", channel, level)
            }
            Command::Warmth { channel, level } => {
                info!("Lighting: {} warmth={}", channel, level)
            }
            Command::Timer { minutes: 0 } => info!("Lighting: timer off"),
            Command::Timer { minutes } => info!("Lighting: timer {} min", minutes),
        }
    }
}
