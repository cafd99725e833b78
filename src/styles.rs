//! Pre-computed static text styles to avoid per-redraw object construction.
//!
//! `MonoTextStyle` and `TextStyle` are const-constructible in
//! embedded-graphics 0.8, so every style the UI needs is computed at compile
//! time and stored in the binary's read-only data section. Draw code
//! references these directly; nothing builds a style at runtime.
//!
//! All text is cursor-positioned: the layout constants are top-left corners,
//! so the shared text style anchors at `Baseline::Top` instead of the
//! default alphabetic baseline.

use embedded_graphics::{
    mono_font::{MonoTextStyle, ascii::FONT_6X10},
    pixelcolor::Rgb565,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_12_POINT;

use crate::colors::INK;

/// Left-aligned, top-anchored text. Used for every positioned label on
/// both pages.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Small black text for axis labels, tick values, and table rows.
pub const LABEL_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, INK);

/// Larger black text for the header readout and the product label.
pub const READOUT_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_12_POINT, INK);
