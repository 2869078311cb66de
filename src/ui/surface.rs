//! Minimal drawing capability the UI needs from a display.
//!
//! [`Surface`] mirrors a u8g2-style monochrome canvas: one current draw
//! colour, text, outlines, filled boxes, circles, lines. Drawing `Off` over
//! a region is how elements erase what lies behind them, which gives the
//! inverted "filled box with cleared text" style of a disabled toggle.
//!
//! [`GraphicsSurface`] implements it on top of any `embedded-graphics`
//! binary-colour draw target that can also present its buffer.

use embedded_graphics::mono_font::ascii::FONT_4X6;
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::ui::geometry::Bounds;

/// Drawing operations used by UI elements and the controller.
pub trait Surface {
    /// Blank the off-screen buffer.
    fn clear(&mut self);
    /// Colour used by every following draw call.
    fn set_color(&mut self, color: BinaryColor);
    /// Text with its baseline at `at.y`.
    fn draw_text(&mut self, at: Point, text: &str);
    /// One-pixel outline.
    fn draw_frame(&mut self, area: Bounds);
    /// Filled rectangle.
    fn draw_box(&mut self, area: Bounds);
    fn draw_circle(&mut self, center: Point, radius: u32);
    fn draw_line(&mut self, from: Point, to: Point);
    /// Push the off-screen buffer to the panel.
    fn present(&mut self);
}

/// A draw target backed by a buffer that is sent to the panel on demand.
pub trait FrameBuffer: DrawTarget<Color = BinaryColor> {
    fn present(&mut self);
}

/// [`Surface`] over an `embedded-graphics` frame buffer.
pub struct GraphicsSurface<D> {
    target: D,
    color: BinaryColor,
}

impl<D: FrameBuffer> GraphicsSurface<D> {
    pub fn new(target: D) -> Self {
        Self {
            target,
            color: BinaryColor::On,
        }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    fn stroke(&self) -> PrimitiveStyle<BinaryColor> {
        PrimitiveStyle::with_stroke(self.color, 1)
    }
}

// Draw errors are dropped: every event redraws the full frame anyway.
impl<D: FrameBuffer> Surface for GraphicsSurface<D> {
    fn clear(&mut self) {
        let _ = self.target.clear(BinaryColor::Off);
    }

    fn set_color(&mut self, color: BinaryColor) {
        self.color = color;
    }

    fn draw_text(&mut self, at: Point, text: &str) {
        let style = MonoTextStyle::new(&FONT_4X6, self.color);
        let _ = Text::new(text, at, style).draw(&mut self.target);
    }

    fn draw_frame(&mut self, area: Bounds) {
        let style = self.stroke();
        let _ = Rectangle::from(area).into_styled(style).draw(&mut self.target);
    }

    fn draw_box(&mut self, area: Bounds) {
        let style = PrimitiveStyle::with_fill(self.color);
        let _ = Rectangle::from(area).into_styled(style).draw(&mut self.target);
    }

    fn draw_circle(&mut self, center: Point, radius: u32) {
        let style = self.stroke();
        let _ = Circle::with_center(center, radius * 2 + 1)
            .into_styled(style)
            .draw(&mut self.target);
    }

    fn draw_line(&mut self, from: Point, to: Point) {
        let style = self.stroke();
        let _ = Line::new(from, to).into_styled(style).draw(&mut self.target);
    }

    fn present(&mut self) {
        self.target.present();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_graphics::Pixel;

    struct Panel {
        pixels: [[bool; 32]; 16],
        presented: usize,
    }

    impl Panel {
        fn new() -> Self {
            Self {
                pixels: [[false; 32]; 16],
                presented: 0,
            }
        }

        fn lit(&self) -> usize {
            self.pixels.iter().flatten().filter(|&&p| p).count()
        }

        fn at(&self, x: usize, y: usize) -> bool {
            self.pixels[y][x]
        }
    }

    impl OriginDimensions for Panel {
        fn size(&self) -> Size {
            Size::new(32, 16)
        }
    }

    impl DrawTarget for Panel {
        type Color = BinaryColor;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Infallible>
        where
            I: IntoIterator<Item = Pixel<BinaryColor>>,
        {
            for Pixel(p, color) in pixels {
                if (0..32).contains(&p.x) && (0..16).contains(&p.y) {
                    self.pixels[p.y as usize][p.x as usize] = color.is_on();
                }
            }
            Ok(())
        }
    }

    impl FrameBuffer for Panel {
        fn present(&mut self) {
            self.presented += 1;
        }
    }

    #[test]
    fn frame_draws_outline_only() {
        let mut s = GraphicsSurface::new(Panel::new());
        s.draw_frame(Bounds::new(2, 2, 4, 4));
        let panel = s.target();
        assert!(panel.at(2, 2));
        assert!(panel.at(5, 5));
        assert!(!panel.at(3, 3));
        assert_eq!(panel.lit(), 12);
    }

    #[test]
    fn off_box_erases_previous_content() {
        let mut s = GraphicsSurface::new(Panel::new());
        s.draw_box(Bounds::new(0, 0, 8, 8));
        assert_eq!(s.target().lit(), 64);
        s.set_color(BinaryColor::Off);
        s.draw_box(Bounds::new(0, 0, 4, 8));
        assert_eq!(s.target().lit(), 32);
    }

    #[test]
    fn clear_blanks_and_present_is_forwarded() {
        let mut s = GraphicsSurface::new(Panel::new());
        s.draw_line(Point::new(0, 0), Point::new(31, 0));
        s.draw_circle(Point::new(8, 8), 3);
        s.draw_text(Point::new(12, 10), "ab");
        assert!(s.target().lit() > 0);
        s.clear();
        assert_eq!(s.target().lit(), 0);
        s.present();
        assert_eq!(s.target().presented, 1);
    }

    #[test]
    fn drawing_off_panel_is_clipped() {
        let mut s = GraphicsSurface::new(Panel::new());
        s.draw_frame(Bounds::new(-3, -3, 8, 8));
        assert!(s.target().at(4, 0));
        assert!(!s.target().at(0, 0));
    }
}
