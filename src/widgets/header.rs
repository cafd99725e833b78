//! Header bar: latest-value readout, product label, on/off button, nav arrow.
//!
//! The header spans the top 40px of the screen and is shared by both pages.
//! Fixed positions are `const Point`s and the fill/stroke styles are const
//! `PrimitiveStyle`s, all computed at compile time.

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, PrimitiveStyle, Rectangle, Triangle},
    text::Text,
};
use heapless::String;

use crate::{
    colors::{BACKGROUND, GREEN, INK, RED},
    config::{BUTTON_CENTER_X, BUTTON_CENTER_Y, BUTTON_RADIUS, HEADER_HEIGHT, SCREEN_WIDTH},
    pages::Page,
    styles::{READOUT_STYLE, TOP_LEFT},
};

// =============================================================================
// Header Layout Constants
// =============================================================================

/// Top-left corner of the header strip.
const HEADER_RECT_POS: Point = Point::new(0, 0);

/// Size of the header strip (full width).
const HEADER_RECT_SIZE: Size = Size::new(SCREEN_WIDTH, HEADER_HEIGHT);

/// Cursor position of the "Latest: .. mN" readout.
const LATEST_POS: Point = Point::new(10, 10);

/// Cursor position of the product label.
const LABEL_POS: Point = Point::new(140, 10);

/// Center of the on/off button circle.
const BUTTON_CENTER: Point = Point::new(BUTTON_CENTER_X, BUTTON_CENTER_Y);

/// Tip of the forward (right-pointing) nav arrow.
const ARROW_FWD_TIP: Point = Point::new(290, 15);

/// Tip of the back (left-pointing) nav arrow.
const ARROW_BACK_TIP: Point = Point::new(10, 15);

/// Half-height of the arrow triangles.
const ARROW_HALF_H: i32 = 10;

/// Length of the arrow triangles along X.
const ARROW_LEN: i32 = 20;

/// Center of the reading-accepted blink indicator dot.
const BLINK_CENTER: Point = Point::new(306, 32);

/// Diameter of the blink indicator dot.
const BLINK_DIAMETER: u32 = 7;

// =============================================================================
// Pre-computed Primitive Styles
// =============================================================================

/// White fill used to clear the header strip and erase the blink dot.
const HEADER_FILL_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BACKGROUND);

/// Black fill for the nav arrow triangles.
const ARROW_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(INK);

// =============================================================================
// Drawing Functions
// =============================================================================

/// Draw the full header: readout, label, button, and the page's nav arrow.
pub fn draw_header<D>(display: &mut D, latest: i32, button_on: bool, page: Page)
where
    D: DrawTarget<Color = Rgb565>,
{
    // Clear the strip, then rebuild it left to right
    Rectangle::new(HEADER_RECT_POS, HEADER_RECT_SIZE)
        .into_styled(HEADER_FILL_STYLE)
        .draw(display)
        .ok();

    let mut readout: String<24> = String::new();
    let _ = write!(readout, "Latest: {latest} mN");
    Text::with_text_style(&readout, LATEST_POS, READOUT_STYLE, TOP_LEFT)
        .draw(display)
        .ok();

    Text::with_text_style("REVIVE", LABEL_POS, READOUT_STYLE, TOP_LEFT)
        .draw(display)
        .ok();

    draw_button(display, button_on);
    draw_nav_arrow(display, page);
}

/// Draw only the button circle. Used for toggle redraws, where repainting
/// the whole header would just flicker.
pub fn draw_button<D>(display: &mut D, on: bool)
where
    D: DrawTarget<Color = Rgb565>,
{
    let color = if on { GREEN } else { RED };
    Circle::with_center(BUTTON_CENTER, BUTTON_RADIUS * 2)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

/// Draw the nav arrow for the given page: a right-pointing triangle on the
/// graph page (the table is reachable by moving right), left-pointing on the
/// table page.
fn draw_nav_arrow<D>(display: &mut D, page: Page)
where
    D: DrawTarget<Color = Rgb565>,
{
    let arrow = match page {
        Page::Graph => Triangle::new(
            ARROW_FWD_TIP,
            Point::new(ARROW_FWD_TIP.x - ARROW_LEN, ARROW_FWD_TIP.y - ARROW_HALF_H),
            Point::new(ARROW_FWD_TIP.x - ARROW_LEN, ARROW_FWD_TIP.y + ARROW_HALF_H),
        ),
        Page::Table => Triangle::new(
            ARROW_BACK_TIP,
            Point::new(ARROW_BACK_TIP.x + ARROW_LEN, ARROW_BACK_TIP.y - ARROW_HALF_H),
            Point::new(ARROW_BACK_TIP.x + ARROW_LEN, ARROW_BACK_TIP.y + ARROW_HALF_H),
        ),
    };
    arrow.into_styled(ARROW_STYLE).draw(display).ok();
}

/// Draw or erase the reading-accepted indicator dot.
///
/// Pulsed briefly by the renderer each time a frame decodes, whichever page
/// is shown. Stands in for the activity LED on the original hardware.
pub fn draw_blink_indicator<D>(display: &mut D, lit: bool)
where
    D: DrawTarget<Color = Rgb565>,
{
    let color = if lit { RED } else { BACKGROUND };
    Circle::with_center(BLINK_CENTER, BLINK_DIAMETER)
        .into_styled(PrimitiveStyle::with_fill(color))
        .draw(display)
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics_simulator::SimulatorDisplay;

    use crate::config::SCREEN_HEIGHT;

    fn display() -> SimulatorDisplay<Rgb565> {
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT))
    }

    #[test]
    fn test_header_draws_on_both_pages() {
        // Smoke test: every header variant renders without panicking
        let mut display = display();
        draw_header(&mut display, 0, false, Page::Graph);
        draw_header(&mut display, 1500, true, Page::Table);
        draw_header(&mut display, -42, true, Page::Graph);
    }

    #[test]
    fn test_button_center_pixel_tracks_state() {
        let mut display = display();

        draw_button(&mut display, true);
        assert_eq!(display.get_pixel(BUTTON_CENTER), GREEN, "ON button is green");

        draw_button(&mut display, false);
        assert_eq!(display.get_pixel(BUTTON_CENTER), RED, "OFF button is red");
    }

    #[test]
    fn test_blink_indicator_erases_cleanly() {
        let mut display = display();
        display.clear(BACKGROUND).unwrap();

        draw_blink_indicator(&mut display, true);
        assert_eq!(display.get_pixel(BLINK_CENTER), RED, "lit dot is visible");

        draw_blink_indicator(&mut display, false);
        assert_eq!(display.get_pixel(BLINK_CENTER), BACKGROUND, "erased dot matches background");
    }
}
