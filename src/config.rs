//! Application configuration constants.
//!
//! Layout positions that never change at runtime (axis origin, tick spacing,
//! hit-region bounds) are computed at compile time as `const` and used
//! directly by the rendering and touch code instead of being recalculated
//! per redraw.

use std::time::Duration;

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ILI9341-class panel, landscape: 320x240)
pub const SCREEN_WIDTH: u32 = 320;

/// Display height in pixels
pub const SCREEN_HEIGHT: u32 = 240;

// =============================================================================
// Serial Frame Configuration
// =============================================================================

/// Frame terminator byte. Everything accumulated since the previous
/// terminator is decoded as one base-10 reading.
pub const FRAME_TERMINATOR: u8 = b'/';

/// Keep-alive byte sent periodically by the force sensor board.
/// Carries no payload and is dropped without touching the line buffer.
pub const KEEPALIVE_BYTE: u8 = b't';

/// Capacity of the frame line buffer. Bytes beyond this before a terminator
/// are dropped (truncated-prefix decode, counted by the decoder).
pub const FRAME_BUF_CAPACITY: usize = 100;

// =============================================================================
// Reading Series Configuration
// =============================================================================

/// Number of readings kept in the rolling window and plotted on the graph.
pub const SERIES_LEN: usize = 10;

/// Time counter advance per accepted reading. Only used to label the
/// table view's time column.
pub const TIME_STEP: i32 = 1;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Target frame time (~50 FPS). The main loop sleeps if a frame completes early.
pub const FRAME_TIME: Duration = Duration::from_millis(20);

/// Frames the reading-accepted blink indicator stays lit (~100ms at 50 FPS).
pub const BLINK_FRAMES: u32 = 5;

// =============================================================================
// Header Layout
// =============================================================================

/// Header bar height in pixels. The button, label, and nav arrow all live here.
pub const HEADER_HEIGHT: u32 = 40;

/// Center X of the on/off button circle.
pub const BUTTON_CENTER_X: i32 = 220;
/// Center Y of the on/off button circle.
pub const BUTTON_CENTER_Y: i32 = 20;
/// Radius of the on/off button circle; also its touch hit radius.
pub const BUTTON_RADIUS: u32 = 15;

// =============================================================================
// Graph Layout
// =============================================================================

/// X coordinate of the graph origin (bottom-left corner of the plot).
pub const GRAPH_ORIGIN_X: i32 = 40;
/// Y coordinate of the graph origin.
pub const GRAPH_ORIGIN_Y: i32 = 220;
/// X coordinate of the right end of the X axis.
pub const GRAPH_END_X: i32 = 300;
/// Y coordinate of the top end of the Y axis.
pub const GRAPH_TOP_Y: i32 = 40;

/// Horizontal spacing between consecutive plotted points.
/// 10 points spread over the 260px plot width.
pub const GRAPH_X_STEP: i32 = 26;

/// Full-scale force value. The Y axis spans 0..=1500 mN.
pub const GRAPH_FORCE_MAX: i32 = 1500;

/// Plot height in pixels (origin y minus top y).
pub const GRAPH_PLOT_HEIGHT: i32 = GRAPH_ORIGIN_Y - GRAPH_TOP_Y;

/// Force value per Y-axis gridline tick (7 ticks: 0, 250, .. 1500).
pub const GRAPH_TICK_STEP: i32 = 250;

/// Pixel spacing between Y-axis ticks.
pub const GRAPH_TICK_PIXELS: i32 = 30;

// =============================================================================
// Touch Calibration
// =============================================================================
//
// The resistive touch controller reports points in its own ADC range.
// These bounds map raw device coordinates onto the logical screen space
// with a fixed linear transform. The transform extrapolates outside the
// calibrated range rather than clamping.

/// Raw touch X at the left screen edge.
pub const TOUCH_RAW_X_MIN: i32 = 200;
/// Raw touch X at the right screen edge.
pub const TOUCH_RAW_X_MAX: i32 = 3700;
/// Raw touch Y at the top screen edge.
pub const TOUCH_RAW_Y_MIN: i32 = 240;
/// Raw touch Y at the bottom screen edge.
pub const TOUCH_RAW_Y_MAX: i32 = 3800;

/// Logical X value the raw X minimum maps onto.
pub const TOUCH_SCREEN_X_MIN: i32 = 1;
/// Logical X value the raw X maximum maps onto.
pub const TOUCH_SCREEN_X_MAX: i32 = 320;
/// Logical Y value the raw Y minimum maps onto.
pub const TOUCH_SCREEN_Y_MIN: i32 = 1;
/// Logical Y value the raw Y maximum maps onto.
pub const TOUCH_SCREEN_Y_MAX: i32 = 240;

// =============================================================================
// Hit Regions (logical screen coordinates)
// =============================================================================

/// Right edge of the back-arrow hit region (Table page only).
pub const ARROW_BACK_MAX_X: i32 = 60;
/// Left edge of the forward-arrow hit region (Graph page only).
pub const ARROW_FWD_MIN_X: i32 = 260;
/// Bottom edge of both arrow hit regions (the header strip).
pub const ARROW_MAX_Y: i32 = 40;
