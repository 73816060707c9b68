//! Serial event sink: writes host-facing lines back over the link.
//!
//! Only events with a wire rendering leave the device; everything else is
//! dropped here (pair this sink with [`LogEventSink`](super::log_sink::LogEventSink)
//! to keep them in the console log).

use log::warn;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;
use crate::protocol::report;
use crate::protocol::transport::Transport;

pub struct SerialEventSink<T> {
    link: T,
}

impl<T: Transport> SerialEventSink<T> {
    pub fn new(link: T) -> Self {
        Self { link }
    }

    pub fn link(&self) -> &T {
        &self.link
    }
}

impl<T: Transport> EventSink for SerialEventSink<T> {
    fn emit(&mut self, event: &AppEvent) {
        let Some(line) = report::render(event) else {
            return;
        };
        match self.link.write(line.as_bytes()) {
            Ok(n) if n < line.len() => {
                warn!("SerialSink: short write ({}/{} bytes)", n, line.len());
            }
            Ok(_) => {}
            Err(e) => {
                warn!("SerialSink: write failed: {:?}", e);
                return;
            }
        }
        // The host reads line by line; push each one out before the next cycle.
        if let Err(e) = self.link.flush() {
            warn!("SerialSink: flush failed: {:?}", e);
        }
    }
}
