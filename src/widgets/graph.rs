//! Graph page: fixed axes and the trend-colored rolling polyline.
//!
//! The axes never change: 0-1500 mN over 7 gridline ticks on Y, "Time" on X.
//! The series is plotted as 10 evenly spaced points joined by line segments,
//! and each point's marker encodes the trend against its predecessor -
//! rising green, falling red, unchanged neutral. Ties are neutral, never
//! lumped with either direction.

use core::fmt::Write;

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, Rectangle},
    text::Text,
};
use heapless::String;

use crate::{
    colors::{BACKGROUND, GREEN, INK, NEUTRAL, RED},
    config::{
        GRAPH_END_X, GRAPH_FORCE_MAX, GRAPH_ORIGIN_X, GRAPH_ORIGIN_Y, GRAPH_PLOT_HEIGHT, GRAPH_TICK_PIXELS,
        GRAPH_TICK_STEP, GRAPH_TOP_Y, GRAPH_X_STEP, SERIES_LEN,
    },
    readings::ReadingSeries,
    styles::{LABEL_STYLE, TOP_LEFT},
};

// =============================================================================
// Graph Layout Constants
// =============================================================================

/// Top-left corner of the plot region (cleared before each replot).
const PLOT_RECT_POS: Point = Point::new(GRAPH_ORIGIN_X, GRAPH_TOP_Y);

/// Size of the plot region.
const PLOT_RECT_SIZE: Size = Size::new((GRAPH_END_X - GRAPH_ORIGIN_X) as u32, GRAPH_PLOT_HEIGHT as u32);

/// Cursor position of the X-axis "Time" label (4 glyphs end flush with the
/// screen edge).
const TIME_LABEL_POS: Point = Point::new(296, 210);

/// Cursor position of the Y-axis "Force (mN)" label.
const FORCE_LABEL_POS: Point = Point::new(2, 28);

/// Diameter of the trend marker dots.
const MARKER_DIAMETER: u32 = 7;

/// Tick marks extend 2px either side of the Y axis.
const TICK_HALF_LEN: i32 = 2;

// =============================================================================
// Pre-computed Primitive Styles
// =============================================================================

/// White fill used to clear the plot region.
const PLOT_CLEAR_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BACKGROUND);

/// Black 1px stroke for the axes and tick marks.
const AXIS_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(INK, 1);

/// Red 1px stroke for the connecting line segments.
const SEGMENT_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(RED, 1);

// =============================================================================
// Drawing Functions
// =============================================================================

/// Redraw the graph page body: clear the plot region, draw axes, plot the
/// series. The header is drawn separately.
pub fn draw_graph_page<D>(display: &mut D, series: &ReadingSeries)
where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(PLOT_RECT_POS, PLOT_RECT_SIZE)
        .into_styled(PLOT_CLEAR_STYLE)
        .draw(display)
        .ok();
    draw_axes(display);
    plot_series(display, series);
}

/// Draw the fixed axes, tick marks, and axis labels.
fn draw_axes<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    // X axis with its label past the right end
    Line::new(Point::new(GRAPH_ORIGIN_X, GRAPH_ORIGIN_Y), Point::new(GRAPH_END_X, GRAPH_ORIGIN_Y))
        .into_styled(AXIS_STYLE)
        .draw(display)
        .ok();
    Text::with_text_style("Time", TIME_LABEL_POS, LABEL_STYLE, TOP_LEFT)
        .draw(display)
        .ok();

    // Y axis with its label above the top end
    Line::new(Point::new(GRAPH_ORIGIN_X, GRAPH_ORIGIN_Y), Point::new(GRAPH_ORIGIN_X, GRAPH_TOP_Y))
        .into_styled(AXIS_STYLE)
        .draw(display)
        .ok();
    Text::with_text_style("Force (mN)", FORCE_LABEL_POS, LABEL_STYLE, TOP_LEFT)
        .draw(display)
        .ok();

    // 7 gridline ticks: 0, 250, .. 1500 mN
    for i in 0..=6 {
        let y = GRAPH_ORIGIN_Y - i * GRAPH_TICK_PIXELS;
        Line::new(
            Point::new(GRAPH_ORIGIN_X - TICK_HALF_LEN, y),
            Point::new(GRAPH_ORIGIN_X + TICK_HALF_LEN, y),
        )
        .into_styled(AXIS_STYLE)
        .draw(display)
        .ok();

        let mut label: String<8> = String::new();
        let _ = write!(label, "{}", i * GRAPH_TICK_STEP);
        Text::with_text_style(&label, Point::new(2, y - 5), LABEL_STYLE, TOP_LEFT)
            .draw(display)
            .ok();
    }
}

/// Plot the series as connected segments with trend-colored markers.
fn plot_series<D>(display: &mut D, series: &ReadingSeries)
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut prev = Point::new(point_x(0), point_y(series.get(0)));

    for i in 1..SERIES_LEN {
        let current = Point::new(point_x(i), point_y(series.get(i)));

        Line::new(prev, current).into_styled(SEGMENT_STYLE).draw(display).ok();

        let color = trend_color(series.get(i - 1), series.get(i));
        Circle::with_center(current, MARKER_DIAMETER)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(display)
            .ok();

        prev = current;
    }
}

/// Marker color for a reading given its predecessor: strictly rising is
/// green, strictly falling is red, a tie is neutral.
pub const fn trend_color(prev: i32, current: i32) -> Rgb565 {
    if current > prev {
        GREEN
    } else if current < prev {
        RED
    } else {
        NEUTRAL
    }
}

/// Screen X of the i-th plotted point (evenly spaced from the origin).
const fn point_x(i: usize) -> i32 { GRAPH_ORIGIN_X + (i as i32) * GRAPH_X_STEP }

/// Screen Y for a force value on the fixed 0-1500 scale, clamped to the
/// plot region so out-of-range readings pin to the nearest axis edge.
const fn point_y(value: i32) -> i32 {
    let y = GRAPH_ORIGIN_Y - value * GRAPH_PLOT_HEIGHT / GRAPH_FORCE_MAX;
    if y < GRAPH_TOP_Y {
        GRAPH_TOP_Y
    } else if y > GRAPH_ORIGIN_Y {
        GRAPH_ORIGIN_Y
    } else {
        y
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics_simulator::SimulatorDisplay;

    use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

    // -------------------------------------------------------------------------
    // Trend Color Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_trend_color_three_way() {
        assert_eq!(trend_color(100, 200), GREEN, "rising reading gets the positive color");
        assert_eq!(trend_color(200, 50), RED, "falling reading gets the negative color");
        assert_eq!(trend_color(200, 200), NEUTRAL, "tie is neutral, not rising or falling");
    }

    #[test]
    fn test_trend_colors_for_reference_series() {
        // Series [100, 200, 200, 50]: markers at indices 1,2,3 must read
        // increase, neutral, decrease
        let series = [100, 200, 200, 50];
        let colors: Vec<Rgb565> = series.windows(2).map(|w| trend_color(w[0], w[1])).collect();
        assert_eq!(colors, vec![GREEN, NEUTRAL, RED]);
    }

    #[test]
    fn test_trend_color_negative_values() {
        assert_eq!(trend_color(-10, -5), GREEN, "less negative is still rising");
        assert_eq!(trend_color(-5, -10), RED, "more negative is still falling");
    }

    // -------------------------------------------------------------------------
    // Point Mapping Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_point_x_spacing() {
        assert_eq!(point_x(0), GRAPH_ORIGIN_X, "first point sits on the Y axis");
        assert_eq!(point_x(9), GRAPH_ORIGIN_X + 9 * GRAPH_X_STEP, "points are evenly spaced");
    }

    #[test]
    fn test_point_y_scale_endpoints() {
        assert_eq!(point_y(0), GRAPH_ORIGIN_Y, "zero force sits on the X axis");
        assert_eq!(point_y(GRAPH_FORCE_MAX), GRAPH_TOP_Y, "full scale reaches the axis top");
        assert_eq!(point_y(750), GRAPH_ORIGIN_Y - GRAPH_PLOT_HEIGHT / 2, "half scale sits mid-plot");
    }

    #[test]
    fn test_point_y_clamps_out_of_range() {
        assert_eq!(point_y(999_999), GRAPH_TOP_Y, "over-range readings pin to the top");
        assert_eq!(point_y(-500), GRAPH_ORIGIN_Y, "negative readings pin to the X axis");
    }

    // -------------------------------------------------------------------------
    // Render Smoke Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_graph_page_renders() {
        let mut display: SimulatorDisplay<Rgb565> =
            SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));

        let mut series = ReadingSeries::new();
        for v in [100, 200, 200, 50, 1500, 0, -20, 900_000, 750, 300] {
            series.record(v);
        }
        // Must handle over-range, negative, and flat values without panicking
        draw_graph_page(&mut display, &series);
    }
}
