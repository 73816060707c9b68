//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (console UART in production).  Complements the
//! [`SerialEventSink`](super::serial_sink::SerialEventSink), which carries
//! the host-facing subset of the same events.

use log::{debug, info};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Listening => info!("START | listening"),
            AppEvent::Alive => info!("LINK  | alive query answered"),
            AppEvent::FrameEcho(frame) => {
                debug!("FRAME | op={} payload={}", frame.opcode, frame.payload);
            }
            AppEvent::UnknownOpcode(op) => info!("FRAME | unknown opcode {}", op),
            AppEvent::RadarReport(scores) => info!("RADAR | scores={:?}", scores),
            AppEvent::ArmChanged { armed } => {
                info!("STATE | {}", if *armed { "armed" } else { "disarmed" });
            }
            AppEvent::RestartRequested => info!("STATE | restart requested"),
        }
    }
}
