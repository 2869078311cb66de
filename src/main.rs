//! lightremote firmware - nRF52840 + SSD1309 OLED + rotary encoder.
//!
//! One loop samples the knob and both buttons every tick, routes the
//! resulting events through the menu and redraws on each of them. Value
//! changes are queued to the lighting task.

#![no_std]
#![no_main]

mod lighting;

use defmt::{debug, info, unwrap};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Pull};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Duration, Ticker};
use {defmt_rtt as _, panic_probe as _};

use lightremote::config::POLL_INTERVAL_MS;
use lightremote::input::{EdgeButton, Inputs, QuadratureEncoder};
use lightremote::ui::{display, menu, GraphicsSurface, Mode, UiController};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("lightremote starting");

    // Encoder lines have external pull-ups; buttons use the internal ones.
    let mut inputs = Inputs::new(
        QuadratureEncoder::new(Input::new(p.P0_03, Pull::None), Input::new(p.P0_04, Pull::None)),
        EdgeButton::new(Input::new(p.P0_11, Pull::Up)),
        EdgeButton::new(Input::new(p.P0_12, Pull::Up)),
    );

    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let panel = unwrap!(display::init(i2c));

    let mut ui = unwrap!(UiController::new(
        menu::remote_menu(),
        GraphicsSurface::new(panel),
        lighting::QueueSink,
    ));
    info!("UI: {} selectable elements", ui.selectable_count());

    unwrap!(spawner.spawn(lighting::lighting_task()));

    ui.render();

    let mut ticker = Ticker::every(Duration::from_millis(POLL_INTERVAL_MS));
    loop {
        for event in inputs.poll() {
            let before = ui.mode();
            let after = ui.dispatch(event);
            match (before, after) {
                (Mode::Navigating, Mode::Captured(index)) => {
                    info!("UI: element {} captured input", index)
                }
                (Mode::Captured(index), Mode::Navigating) => {
                    info!("UI: element {} released input", index)
                }
                _ => debug!("UI: {} focus={}", event, ui.focus()),
            }
        }
        ticker.next().await;
    }
}
