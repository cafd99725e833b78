//! Event-driven redraw dispatch.
//!
//! The controller reports state changes as [`UiEvent`]s; this module turns
//! each event into the minimal redraw it needs. A button toggle repaints only
//! the button glyph, a page change clears and rebuilds the screen, and an
//! accepted reading repaints the header plus the active page body and arms
//! the blink indicator.
//!
//! [`RenderState`] holds the one piece of render-local state: the blink
//! countdown. Everything else is read from [`AppState`] on demand, so the
//! renderer can never observe a half-updated series - events are only
//! emitted after the controller commits.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};

use crate::{
    colors::BACKGROUND,
    config::BLINK_FRAMES,
    controller::UiEvent,
    pages::Page,
    state::AppState,
    widgets::{draw_blink_indicator, draw_button, draw_graph_page, draw_header, draw_table_page},
};

/// Render-local state: the blink indicator countdown.
pub struct RenderState {
    /// Frames the indicator dot stays lit; 0 means dark.
    blink_frames: u32,
}

impl RenderState {
    pub const fn new() -> Self { Self { blink_frames: 0 } }

    /// Whether the indicator dot is currently lit.
    #[inline]
    pub const fn blinking(&self) -> bool { self.blink_frames > 0 }

    /// Per-frame countdown. Erases the dot on the frame it expires.
    pub fn end_frame<D>(&mut self, display: &mut D)
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if self.blink_frames > 0 {
            self.blink_frames -= 1;
            if self.blink_frames == 0 {
                draw_blink_indicator(display, false);
            }
        }
    }
}

impl Default for RenderState {
    fn default() -> Self { Self::new() }
}

/// Full rebuild of the current page: clear, header, page body.
pub fn full_redraw<D>(display: &mut D, state: &AppState)
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BACKGROUND).ok();
    draw_header(display, state.series.latest(), state.button_on, state.page);
    match state.page {
        Page::Graph => draw_graph_page(display, &state.series),
        Page::Table => draw_table_page(display, &state.series),
    }
}

/// Apply one event's redraw.
pub fn handle_event<D>(display: &mut D, state: &AppState, render: &mut RenderState, event: UiEvent)
where
    D: DrawTarget<Color = Rgb565>,
{
    match event {
        UiEvent::ReadingAccepted(_) => {
            match state.page {
                Page::Graph => {
                    draw_header(display, state.series.latest(), state.button_on, state.page);
                    draw_graph_page(display, &state.series);
                }
                // Every table row shifts, so the page repaints from a clear
                Page::Table => full_redraw(display, state),
            }
            draw_blink_indicator(display, true);
            render.blink_frames = BLINK_FRAMES;
        }
        UiEvent::ButtonToggled(on) => draw_button(display, on),
        UiEvent::PageChanged(_) => full_redraw(display, state),
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

    fn display() -> SimulatorDisplay<Rgb565> {
        SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT))
    }

    #[test]
    fn test_full_redraw_both_pages() {
        let mut display = display();
        let mut state = AppState::new();

        full_redraw(&mut display, &state);
        state.page = Page::Table;
        full_redraw(&mut display, &state);
    }

    #[test]
    fn test_reading_event_arms_blink() {
        let mut display = display();
        let mut state = AppState::new();
        let mut render = RenderState::new();

        state.series.record(500);
        handle_event(&mut display, &state, &mut render, UiEvent::ReadingAccepted(500));
        assert!(render.blinking(), "an accepted reading lights the indicator");
    }

    #[test]
    fn test_blink_expires_after_countdown() {
        let mut display = display();
        let state = AppState::new();
        let mut render = RenderState::new();

        handle_event(&mut display, &state, &mut render, UiEvent::ReadingAccepted(0));
        for _ in 0..BLINK_FRAMES {
            render.end_frame(&mut display);
        }
        assert!(!render.blinking(), "indicator goes dark after the countdown");

        // Further frames are a no-op
        render.end_frame(&mut display);
        assert!(!render.blinking());
    }

    #[test]
    fn test_events_render_on_table_page() {
        let mut display = display();
        let mut state = AppState::new();
        let mut render = RenderState::new();
        state.page = Page::Table;

        handle_event(&mut display, &state, &mut render, UiEvent::ReadingAccepted(10));
        handle_event(&mut display, &state, &mut render, UiEvent::ButtonToggled(true));
        handle_event(&mut display, &state, &mut render, UiEvent::PageChanged(Page::Table));
    }
}
