//! Host-link telemetry sink.
//!
//! Writes to any [`std::io::Write`] (the UART on target, stdout on the
//! bench).  Telemetry becomes the machine line `s A S V`.  Every other
//! event becomes a diagnostic line prefixed with `# `, which the host
//! skips, and is also handed to the console log.

use std::io::Write;

use log::warn;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::host::encode_telemetry;

use super::log_sink::log_event;

/// Marks a line the host must not parse as telemetry.
pub const DIAGNOSTIC_PREFIX: &str = "# ";

pub struct SerialTelemetrySink<W: Write> {
    out: W,
    lines_written: u64,
}

impl<W: Write> SerialTelemetrySink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            lines_written: 0,
        }
    }

    /// Telemetry lines successfully written.  Diagnostics are not counted.
    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_diagnostic(&mut self, event: &AppEvent) -> std::io::Result<()> {
        writeln!(self.out, "{DIAGNOSTIC_PREFIX}{event}")?;
        self.out.flush()
    }
}

impl<W: Write> EventSink for SerialTelemetrySink<W> {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(record) => {
                let line = encode_telemetry(record);
                match self
                    .out
                    .write_all(line.as_bytes())
                    .and_then(|()| self.out.flush())
                {
                    Ok(()) => self.lines_written += 1,
                    // Best-effort; the next interval retries.
                    Err(e) => warn!("telemetry write failed: {}", e),
                }
            }
            other => {
                log_event(other);
                if let Err(e) = self.write_diagnostic(other) {
                    warn!("diagnostic write failed: {}", e);
                }
            }
        }
    }
}
