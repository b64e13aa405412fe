//! Host serial command codec.
//!
//! Wire format (ASCII, one command per frame):
//! ```text
//! <id>,<arg0>,<arg1>;
//! ```
//!
//! `,` separates fields, `;` ends a frame and `/` escapes the next byte.
//! Whitespace between frames (CR/LF from a terminal) is skipped; inside
//! a frame it makes the frame malformed.  The decoder is fed
//! byte-by-byte, so partial reads and several frames in one read are
//! both fine.
//!
//! Anything malformed is dropped without a trace: non-numeric fields,
//! values out of range, or a frame longer than [`MAX_FRAME_LEN`].
//! Missing arguments decode as 0.  Leading zeros are collapsed, so
//! `0000512` reads as 512.
//!
//! Outbound telemetry is a plain text line, see [`encode_telemetry`].

use core::fmt::Write;

use crate::app::events::TelemetryRecord;

/// Longest frame accepted, separators included.
pub const MAX_FRAME_LEN: usize = 32;

const FIELD_SEP: u8 = b',';
const CMD_SEP: u8 = b';';
const ESCAPE: u8 = b'/';

/// Widest numeric field after leading zeros are collapsed: `-32768`.
const MAX_FIELD_LEN: usize = 6;

/// Command id plus its two integer arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostFrame {
    pub id: u16,
    pub args: [i16; 2],
}

/// Streaming command decoder.
pub struct CommandDecoder {
    field: heapless::Vec<u8, MAX_FIELD_LEN>,
    /// Fields completed so far: id, arg0, arg1.  Extras are ignored.
    values: heapless::Vec<i32, 3>,
    frame_len: usize,
    escaped: bool,
    /// Set once the current frame can no longer be valid; cleared at `;`.
    poisoned: bool,
}

impl CommandDecoder {
    pub fn new() -> Self {
        Self {
            field: heapless::Vec::new(),
            values: heapless::Vec::new(),
            frame_len: 0,
            escaped: false,
            poisoned: false,
        }
    }

    /// Feed a chunk of bytes; `on_frame` runs once per complete valid frame.
    pub fn feed(&mut self, data: &[u8], mut on_frame: impl FnMut(HostFrame)) {
        for &b in data {
            if let Some(frame) = self.push(b) {
                on_frame(frame);
            }
        }
    }

    /// Feed one byte.
    pub fn push(&mut self, byte: u8) -> Option<HostFrame> {
        if self.escaped {
            self.escaped = false;
            self.take_field_byte(byte);
            return None;
        }

        match byte {
            CMD_SEP => {
                let frame = self.finish_frame();
                self.reset();
                frame
            }
            FIELD_SEP => {
                self.count_byte();
                self.finish_field();
                None
            }
            ESCAPE => {
                self.count_byte();
                self.escaped = true;
                None
            }
            b' ' | b'\r' | b'\n' | b'\t' => {
                if self.frame_len > 0 {
                    self.count_byte();
                    self.poisoned = true;
                }
                None
            }
            _ => {
                self.take_field_byte(byte);
                None
            }
        }
    }

    /// Drop any partial frame (e.g. after the host link was reopened).
    pub fn reset(&mut self) {
        self.field.clear();
        self.values.clear();
        self.frame_len = 0;
        self.escaped = false;
        self.poisoned = false;
    }

    // ── Internal ──────────────────────────────────────────────

    fn count_byte(&mut self) {
        self.frame_len += 1;
        if self.frame_len > MAX_FRAME_LEN {
            self.poisoned = true;
        }
    }

    fn take_field_byte(&mut self, byte: u8) {
        self.count_byte();
        if self.poisoned {
            return;
        }
        // At most one leading zero is kept.
        if byte.is_ascii_digit() && matches!(self.field.as_slice(), [b'0'] | [b'-', b'0']) {
            self.field.pop();
        }
        if self.field.push(byte).is_err() {
            self.poisoned = true;
        }
    }

    fn finish_field(&mut self) {
        if self.poisoned {
            return;
        }
        let value = if self.field.is_empty() {
            // Empty id is invalid; empty argument reads as 0.
            if self.values.is_empty() {
                self.poisoned = true;
                return;
            }
            0
        } else {
            match core::str::from_utf8(&self.field)
                .ok()
                .and_then(|s| s.parse::<i32>().ok())
            {
                Some(v) => v,
                None => {
                    self.poisoned = true;
                    return;
                }
            }
        };
        self.field.clear();
        // Fields beyond the second argument are ignored.
        let _ = self.values.push(value);
    }

    fn finish_frame(&mut self) -> Option<HostFrame> {
        if self.frame_len == 0 && self.field.is_empty() {
            // Stray terminator.
            return None;
        }
        self.finish_field();
        if self.poisoned {
            return None;
        }

        let id = u16::try_from(*self.values.first()?).ok()?;
        let arg = |i: usize| -> Option<i16> {
            match self.values.get(i) {
                Some(&v) => i16::try_from(v).ok(),
                None => Some(0),
            }
        };
        Some(HostFrame {
            id,
            args: [arg(1)?, arg(2)?],
        })
    }
}

impl Default for CommandDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Telemetry line: `s <activity 0|1> <state code> <volume>\n`.
pub type TelemetryLine = heapless::String<24>;

/// Format a telemetry record for the host link.
pub fn encode_telemetry(record: &TelemetryRecord) -> TelemetryLine {
    let mut line = TelemetryLine::new();
    // Longest possible line is "s 1 255 255\n" (12 bytes); cannot overflow.
    let _ = writeln!(
        line,
        "s {} {} {}",
        u8::from(record.activity),
        record.state.code(),
        record.volume
    );
    line
}
