//! Color constants for the force display.
//!
//! Uses the pre-defined `RgbColor` trait constants from `embedded_graphics`
//! where possible instead of hand-built `Rgb565::new(r, g, b)` values.
//! Rgb565 is native to the display panel, so no conversion happens on write.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Screen and header background. The whole UI draws on white.
pub const BACKGROUND: Rgb565 = Rgb565::WHITE;

/// Text, axes, and the nav arrow.
pub const INK: Rgb565 = Rgb565::BLACK;

/// Button circle when the output is ON; also the rising-trend marker color.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Button circle when the output is OFF; falling-trend markers and the
/// graph polyline.
pub const RED: Rgb565 = Rgb565::RED;

/// Flat-trend marker color. Matches the background: an unchanged reading
/// intentionally draws no visible dot, only the connecting line.
pub const NEUTRAL: Rgb565 = Rgb565::WHITE;
