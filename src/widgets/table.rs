//! Table page: the 10 windowed readings with their time labels.

use core::fmt::Write;

use embedded_graphics::{pixelcolor::Rgb565, prelude::*, text::Text};
use heapless::String;

use crate::{
    config::SERIES_LEN,
    readings::ReadingSeries,
    styles::{LABEL_STYLE, TOP_LEFT},
};

/// Cursor position of the table title.
const TITLE_POS: Point = Point::new(80, 50);

/// X cursor of every table row.
const ROW_X: i32 = 80;

/// Y cursor of the first row.
const ROW_Y0: i32 = 80;

/// Vertical spacing between rows.
const ROW_SPACING: i32 = 20;

/// Draw the table page body: title plus one row per windowed reading,
/// oldest first. Expects a cleared screen; the header is drawn separately.
pub fn draw_table_page<D>(display: &mut D, series: &ReadingSeries)
where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style("Force Values (mN)", TITLE_POS, LABEL_STYLE, TOP_LEFT)
        .draw(display)
        .ok();

    for i in 0..SERIES_LEN {
        let mut row: String<40> = String::new();
        let _ = write!(row, "Time {}: {} mN", series.time_label(i), series.get(i));
        Text::with_text_style(
            &row,
            Point::new(ROW_X, ROW_Y0 + (i as i32) * ROW_SPACING),
            LABEL_STYLE,
            TOP_LEFT,
        )
        .draw(display)
        .ok();
    }
}
