//! Command decoder: polls the link and assembles one frame per call.
//!
//! The only place in a cycle that may wait.  Once the first byte of a frame
//! is in the UART FIFO, the remaining two are at most a couple of byte-times
//! away, so the decoder waits for them (bounded) instead of carrying a
//! half-frame across cycles.

use log::warn;

use super::frame::{CommandFrame, FRAME_LEN};
use super::transport::Transport;
use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

pub struct CommandDecoder {
    timeout_ms: u32,
}

impl CommandDecoder {
    pub fn new(timeout_ms: u32) -> Self {
        Self { timeout_ms }
    }

    /// Non-blocking poll.  Returns `None` when the link is quiet, when the
    /// frame tail never arrived, or when the transport failed; all three
    /// are treated as an idle cycle.
    pub fn poll<T: Transport>(
        &self,
        link: &mut T,
        sink: &mut impl EventSink,
    ) -> Option<CommandFrame> {
        if !link.available() {
            return None;
        }

        let mut buf = [0u8; FRAME_LEN];
        let head = match link.read(&mut buf[..1]) {
            Ok(n) => n,
            Err(e) => {
                warn!("Decoder: transport read failed: {:?}", e);
                return None;
            }
        };
        if head == 0 {
            return None;
        }
        let tail = match link.read_within(&mut buf[1..], self.timeout_ms) {
            Ok(n) => n,
            Err(e) => {
                warn!("Decoder: transport read failed: {:?}", e);
                return None;
            }
        };
        let n = head + tail;
        if n < FRAME_LEN {
            warn!("Decoder: short frame ({}/{} bytes) dropped", n, FRAME_LEN);
            return None;
        }

        let frame = CommandFrame::from_bytes(buf);
        if frame.is_echoed() {
            sink.emit(&AppEvent::FrameEcho(frame));
        }
        Some(frame)
    }
}
