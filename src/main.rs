#![allow(clippy::cast_possible_truncation)] // Intentional f32->i32 casts for the synthetic signal
#![allow(clippy::cast_precision_loss)] // i32->f32 in signal generation

//! Force telemetry display simulator.
//!
//! Runs the display controller against `embedded-graphics-simulator`:
//! - a synthetic sender stands in for the force sensor board, serializing a
//!   sinusoidal 0-1500 mN signal as `/`-terminated ASCII frames with periodic
//!   `t` keep-alives, delivered a few bytes per frame so partial-frame
//!   accumulation is exercised the way a real UART would;
//! - mouse clicks stand in for the touch panel (inverse-mapped to raw device
//!   coordinates, so the controller's calibration transform runs for real);
//! - the `"ON"`/`"OFF"` echo lines go to stdout.
//!
//! # Controls
//!
//! | Input | Action |
//! |-------|--------|
//! | Click the header circle | Toggle the output, echo `ON`/`OFF` |
//! | Click the right arrow (graph page) | Switch to the table view |
//! | Click the left arrow (table page) | Switch back to the graph |

mod colors;
mod config;
mod controller;
mod frame;
mod pages;
mod readings;
mod render;
mod state;
mod styles;
mod touch;
mod widgets;

use core::fmt::Write as _;
use std::collections::VecDeque;
use std::io::Write as _;
use std::thread;
use std::time::Instant;

use config::{
    FRAME_TIME, SCREEN_HEIGHT, SCREEN_WIDTH, TOUCH_RAW_X_MAX, TOUCH_RAW_X_MIN, TOUCH_RAW_Y_MAX,
    TOUCH_RAW_Y_MIN, TOUCH_SCREEN_X_MAX, TOUCH_SCREEN_X_MIN, TOUCH_SCREEN_Y_MAX, TOUCH_SCREEN_Y_MIN,
};
use controller::{StatusSink, process_byte, process_touch};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use frame::FrameDecoder;
use render::{RenderState, full_redraw, handle_event};
use state::AppState;
use touch::{RawTouch, TouchPanel};

/// Frames between synthetic readings (~5 readings per second at 50 FPS).
const FRAMES_PER_READING: u32 = 10;

/// Frames between synthetic keep-alive bytes.
const FRAMES_PER_KEEPALIVE: u32 = 23;

/// Serial bytes delivered per frame (small on purpose: frames should span
/// several loop iterations like they do on the wire).
const BYTES_PER_FRAME: usize = 3;

fn main() {
    let mut display: SimulatorDisplay<Rgb565> = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("REVIVE Force Display", &output_settings);

    let mut state = AppState::new();
    let mut decoder = FrameDecoder::new();
    let mut render = RenderState::new();
    let mut sender = FakeSender::new();
    let mut panel = MouseTouchPanel::new();
    let mut status = StdoutLink;

    full_redraw(&mut display, &state);
    window.update(&display);

    let mut frame_count = 0u32;

    loop {
        let frame_start = Instant::now();

        // Window events: quit, and mouse clicks standing in for touch
        for ev in window.events() {
            match ev {
                SimulatorEvent::Quit => {
                    report_decoder_stats(&decoder);
                    return;
                }
                SimulatorEvent::MouseButtonDown { point, .. } => panel.press(point),
                _ => {}
            }
        }

        // Serial path: drain everything the wire delivered this frame,
        // committing one window update plus one page redraw per completed frame
        sender.pump(frame_count);
        for _ in 0..BYTES_PER_FRAME {
            let Some(byte) = sender.recv() else { break };
            if let Some(event) = process_byte(&mut decoder, &mut state, byte) {
                handle_event(&mut display, &state, &mut render, event);
            }
        }

        // Touch path: at most one transition per loop pass
        if let Some(raw) = panel.poll()
            && let Some(event) = process_touch(&mut state, raw, &mut status)
        {
            handle_event(&mut display, &state, &mut render, event);
        }

        render.end_frame(&mut display);
        window.update(&display);
        frame_count = frame_count.wrapping_add(1);

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }
}

/// Note dropped/garbled frames on exit so calibration problems on the
/// sender side stay visible.
fn report_decoder_stats(decoder: &FrameDecoder) {
    if decoder.truncated_frames > 0 || decoder.rejected_frames > 0 {
        eprintln!(
            "decoder: {} truncated, {} non-numeric frames",
            decoder.truncated_frames, decoder.rejected_frames
        );
    }
}

// =============================================================================
// Simulator Shims
// =============================================================================

/// Outbound status line sink writing to stdout.
struct StdoutLink;

impl StatusSink for StdoutLink {
    fn write_line(&mut self, line: &str) {
        println!("{line}");
        std::io::stdout().flush().ok();
    }
}

/// Touch panel shim: one pending mouse click, inverse-mapped to the raw
/// device coordinate space so the controller's forward map is exercised.
struct MouseTouchPanel {
    pending: Option<RawTouch>,
}

impl MouseTouchPanel {
    const fn new() -> Self { Self { pending: None } }

    /// Record a click at a logical screen point.
    fn press(&mut self, point: Point) {
        self.pending = Some(RawTouch {
            x: inverse_map(point.x, TOUCH_SCREEN_X_MIN, TOUCH_SCREEN_X_MAX, TOUCH_RAW_X_MIN, TOUCH_RAW_X_MAX),
            y: inverse_map(point.y, TOUCH_SCREEN_Y_MIN, TOUCH_SCREEN_Y_MAX, TOUCH_RAW_Y_MIN, TOUCH_RAW_Y_MAX),
        });
    }
}

impl TouchPanel for MouseTouchPanel {
    fn poll(&mut self) -> Option<RawTouch> { self.pending.take() }
}

/// Invert the calibration transform: screen coordinate back to raw.
const fn inverse_map(v: i32, out_min: i32, out_max: i32, in_min: i32, in_max: i32) -> i32 {
    (v - out_min) * (in_max - in_min) / (out_max - out_min) + in_min
}

/// Synthetic force sender: sinusoidal readings serialized the way the real
/// board sends them, leaked into the decoder a few bytes at a time.
struct FakeSender {
    /// Bytes queued but not yet "received".
    line: VecDeque<u8>,

    /// Signal time parameter, advanced per generated reading.
    t: f32,
}

impl FakeSender {
    fn new() -> Self {
        Self {
            line: VecDeque::new(),
            t: 0.0,
        }
    }

    /// Queue this frame's wire traffic: a reading every few frames, a
    /// keep-alive byte on its own cadence.
    fn pump(&mut self, frame_count: u32) {
        if frame_count % FRAMES_PER_READING == 0 {
            let force = fake_signal(self.t, 0.0, 1500.0, 0.9) as i32;
            self.t += 0.2;

            let mut text = heapless::String::<16>::new();
            let _ = write!(text, "{force}/");
            self.line.extend(text.as_bytes());
        }
        if frame_count % FRAMES_PER_KEEPALIVE == 0 {
            self.line.push_back(config::KEEPALIVE_BYTE);
        }
    }

    /// Take the next queued wire byte, if any.
    fn recv(&mut self) -> Option<u8> { self.line.pop_front() }
}

/// Sinusoidal signal oscillating between min and max.
fn fake_signal(t: f32, min: f32, max: f32, freq: f32) -> f32 {
    let normalized = (t * freq).sin().mul_add(0.5, 0.5);
    min + normalized * (max - min)
}
