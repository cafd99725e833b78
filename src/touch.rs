//! Touch coordinate mapping and hit-region classification.
//!
//! The touch controller reports points in its raw ADC space. A fixed linear
//! transform maps them onto the 320x240 logical screen, and the mapped point
//! is classified against the header's hit regions: the button circle and the
//! page-specific nav arrow strips. Everything else is a no-op.

use embedded_graphics::prelude::Point;

use crate::config::{
    ARROW_BACK_MAX_X, ARROW_FWD_MIN_X, ARROW_MAX_Y, BUTTON_CENTER_X, BUTTON_CENTER_Y, BUTTON_RADIUS,
    TOUCH_RAW_X_MAX, TOUCH_RAW_X_MIN, TOUCH_RAW_Y_MAX, TOUCH_RAW_Y_MIN, TOUCH_SCREEN_X_MAX,
    TOUCH_SCREEN_X_MIN, TOUCH_SCREEN_Y_MAX, TOUCH_SCREEN_Y_MIN,
};
use crate::pages::Page;

/// A touch sample in raw device coordinates.
#[derive(Clone, Copy, Debug)]
pub struct RawTouch {
    pub x: i32,
    pub y: i32,
}

/// Source of touch samples. The hardware driver (or the simulator's mouse
/// shim) sits behind this seam; the core only sees raw points.
pub trait TouchPanel {
    /// Take the pending touch sample, if one arrived since the last poll.
    fn poll(&mut self) -> Option<RawTouch>;
}

/// Discrete action a touch maps to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TouchAction {
    /// Inside the button circle: toggle the output state.
    ToggleButton,
    /// Inside the forward arrow strip while on the graph page.
    ShowTable,
    /// Inside the back arrow strip while on the table page.
    ShowGraph,
}

/// Linear range remap, extrapolating outside the input range.
const fn map_range(v: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    (v - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Map a raw touch sample onto logical screen coordinates.
pub const fn to_screen(raw: RawTouch) -> Point {
    Point::new(
        map_range(raw.x, TOUCH_RAW_X_MIN, TOUCH_RAW_X_MAX, TOUCH_SCREEN_X_MIN, TOUCH_SCREEN_X_MAX),
        map_range(raw.y, TOUCH_RAW_Y_MIN, TOUCH_RAW_Y_MAX, TOUCH_SCREEN_Y_MIN, TOUCH_SCREEN_Y_MAX),
    )
}

/// Classify a logical-screen touch point against the current page's regions.
///
/// The arrow strips only respond on the page they navigate away from, so a
/// stale tap on the vacated arrow position does nothing.
pub fn classify(point: Point, page: Page) -> Option<TouchAction> {
    if in_button_circle(point) {
        return Some(TouchAction::ToggleButton);
    }

    match page {
        Page::Graph if point.x > ARROW_FWD_MIN_X && point.y <= ARROW_MAX_Y => Some(TouchAction::ShowTable),
        Page::Table if point.x <= ARROW_BACK_MAX_X && point.y <= ARROW_MAX_Y => Some(TouchAction::ShowGraph),
        _ => None,
    }
}

/// True if the point lies inside the button's circular hit region.
fn in_button_circle(point: Point) -> bool {
    let dx = point.x - BUTTON_CENTER_X;
    let dy = point.y - BUTTON_CENTER_Y;
    let r = BUTTON_RADIUS as i32;
    dx * dx + dy * dy <= r * r
}

// =============================================================================
// Unit Tests
// =============================================================================
