//! Incremental frame decoder for the serial force stream.
//!
//! The sensor board sends readings as ASCII integer text terminated by `/`,
//! with a periodic `t` keep-alive byte mixed in. There is no fixed message
//! length, so the decoder is fed one byte at a time and accumulates into a
//! bounded line buffer until it sees the terminator.
//!
//! # Decode Policy
//!
//! The display must keep running on any input, so nothing here fails hard:
//! - a frame with no digits decodes to 0 (classic `atoi` contract),
//! - bytes past the buffer capacity are dropped, giving a deterministic
//!   truncated-prefix decode,
//! - both conditions bump a counter so they stay observable without
//!   affecting the decoded stream.

use heapless::Vec;

use crate::config::{FRAME_BUF_CAPACITY, FRAME_TERMINATOR, KEEPALIVE_BYTE};

/// Accumulates serial bytes and emits one reading per terminated frame.
///
/// Holds no state across frames beyond the line buffer and the diagnostic
/// counters. Feed it every available byte in arrival order.
pub struct FrameDecoder {
    /// Line buffer for the frame currently being received.
    buffer: Vec<u8, FRAME_BUF_CAPACITY>,

    /// True if the current frame overflowed the buffer and lost bytes.
    overflowed: bool,

    /// Frames that lost trailing bytes to the capacity limit.
    pub truncated_frames: u32,

    /// Frames that carried no digits and decoded to the fallback 0.
    pub rejected_frames: u32,
}

impl FrameDecoder {
    /// Create a decoder with an empty line buffer.
    pub const fn new() -> Self {
        Self {
            buffer: Vec::new(),
            overflowed: false,
            truncated_frames: 0,
            rejected_frames: 0,
        }
    }

    /// Consume one byte from the transport.
    ///
    /// Returns `Some(reading)` when the byte completes a frame, `None` while
    /// a frame is still accumulating. Never panics, whatever the input.
    pub fn feed(&mut self, byte: u8) -> Option<i32> {
        match byte {
            FRAME_TERMINATOR => {
                let value = parse_reading(&self.buffer);
                if value.is_none() && !self.buffer.is_empty() {
                    self.rejected_frames += 1;
                }
                if self.overflowed {
                    self.truncated_frames += 1;
                }
                self.buffer.clear();
                self.overflowed = false;
                Some(value.unwrap_or(0))
            }
            KEEPALIVE_BYTE => None,
            _ => {
                // Full buffer: drop the byte, keep the prefix already stored
                if self.buffer.push(byte).is_err() {
                    self.overflowed = true;
                }
                None
            }
        }
    }
}

impl Default for FrameDecoder {
    fn default() -> Self { Self::new() }
}

/// Parse the leading integer out of a frame payload, `atoi` style.
///
/// Skips leading ASCII whitespace, accepts one optional sign, then reads the
/// leading digit run; anything after the digits is ignored. Returns `None`
/// when no digits are present. Accumulation saturates at the `i32` bounds
/// instead of wrapping (the buffer admits up to 99 digits).
fn parse_reading(payload: &[u8]) -> Option<i32> {
    let mut rest = payload;
    while let [b, tail @ ..] = rest
        && b.is_ascii_whitespace()
    {
        rest = tail;
    }

    let negative = match rest {
        [b'-', tail @ ..] => {
            rest = tail;
            true
        }
        [b'+', tail @ ..] => {
            rest = tail;
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    let mut digits = 0usize;
    for &b in rest {
        if !b.is_ascii_digit() {
            break;
        }
        value = (value * 10 + i64::from(b - b'0')).min(i64::from(i32::MAX) + 1);
        digits += 1;
    }

    if digits == 0 {
        return None;
    }
    let signed = if negative { -value } else { value };
    Some(signed.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}

// =============================================================================
// Unit Tests
// =============================================================================
