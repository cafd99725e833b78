//! Interaction state machine and decode/update sequencing.
//!
//! The control loop pushes raw inputs through two entry points:
//! [`process_byte`] for the serial path and [`process_touch`] for the touch
//! path. Both mutate [`AppState`] first and then report what happened as a
//! [`UiEvent`], so the renderer always observes fully committed state - a
//! reading update and its redraw form one atomic step on the single loop.

use crate::frame::FrameDecoder;
use crate::pages::Page;
use crate::state::AppState;
use crate::touch::{RawTouch, TouchAction, classify, to_screen};

/// State change the renderer needs to reflect.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UiEvent {
    /// A frame decoded and the series was updated. Redraws the header and
    /// the active page, and pulses the blink indicator.
    ReadingAccepted(i32),

    /// The output button toggled. Redraws only the button glyph.
    ButtonToggled(bool),

    /// The active page changed. Full clear plus page redraw.
    PageChanged(Page),
}

/// Outbound side of the serial link. On toggle the new button state is
/// echoed back to the sender as a plain text line.
pub trait StatusSink {
    /// Write one status line (`"ON"` / `"OFF"`) to the transport.
    fn write_line(&mut self, line: &str);
}

/// Feed one serial byte; on a completed frame, commit the reading.
///
/// Returns the event for the renderer, or `None` while a frame is still
/// accumulating.
pub fn process_byte(decoder: &mut FrameDecoder, state: &mut AppState, byte: u8) -> Option<UiEvent> {
    let value = decoder.feed(byte)?;
    state.series.record(value);
    Some(UiEvent::ReadingAccepted(value))
}

/// Dispatch one raw touch sample.
///
/// Maps the point to screen space, classifies it against the current page's
/// hit regions, applies the matching transition, and echoes the button state
/// when it toggled. Touches outside every region return `None`.
pub fn process_touch(state: &mut AppState, raw: RawTouch, sink: &mut impl StatusSink) -> Option<UiEvent> {
    let action = classify(to_screen(raw), state.page)?;
    match action {
        TouchAction::ToggleButton => {
            state.button_on = !state.button_on;
            sink.write_line(if state.button_on { "ON" } else { "OFF" });
            Some(UiEvent::ButtonToggled(state.button_on))
        }
        TouchAction::ShowTable | TouchAction::ShowGraph => {
            state.page = state.page.toggle();
            Some(UiEvent::PageChanged(state.page))
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
