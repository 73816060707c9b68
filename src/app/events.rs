//! Outbound application events.
//!
//! The control core emits these through the
//! [`EventSink`](super::ports::EventSink) port.  Adapters on the other side
//! decide what to do with them: write a text line to the show controller,
//! log to the console, or record them in a test.

use crate::pins::RADAR_CHANNELS;
use crate::protocol::frame::CommandFrame;

/// Structured events emitted by the control core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Boot complete, ready for frames.
    Listening,

    /// Reply to an IS_ALIVE query.
    Alive,

    /// Diagnostic echo of a received frame.
    FrameEcho(CommandFrame),

    /// A frame carried an opcode outside the table.
    UnknownOpcode(u8),

    /// Aggregated radar scores for one window, in channel order.
    RadarReport([u32; RADAR_CHANNELS]),

    /// The dispatcher was armed or disarmed.
    ArmChanged { armed: bool },

    /// A RESET frame was received; the runtime is about to restart.
    RestartRequested,
}
