//! SSD1306 OLED display wrapper.
//!
//! The remote's SSD1309 128×64 panel speaks the SSD1306 command set, so the
//! `ssd1306` driver in buffered-graphics mode serves as the frame buffer
//! behind [`GraphicsSurface`](crate::ui::GraphicsSurface).

use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

use crate::error::Error;
use crate::ui::surface::FrameBuffer;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(display)
}

impl<I2C> FrameBuffer for Display<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    fn present(&mut self) {
        // A failed flush leaves the old frame up until the next event.
        let _ = self.flush();
    }
}
