//! Host-facing text lines.
//!
//! The show controller parses these verbatim, so spelling and separators
//! are part of the protocol:
//!
//! ```text
//! PapaGuy is listening.            boot
//! PapaGuy is listening, yes.       IS_ALIVE reply
//! MESSAGE: 4;512                   frame echo
//! UNKNOWN MESSAGE: 42              unknown opcode
//! RADAR!0;0;12;0;0;                aggregation report
//! ```

use core::fmt::Write;

use heapless::String;

use crate::app::events::AppEvent;

/// Longest line we ever render, terminator included.
pub const LINE_CAP: usize = 96;

pub const GREETING: &str = "PapaGuy is listening.";
pub const ALIVE_REPLY: &str = "PapaGuy is listening, yes.";
pub const RADAR_TAG: &str = "RADAR!";
pub const SCORE_DELIMITER: char = ';';
pub const LINE_END: &str = "\r\n";

/// Render the wire line for `event`, or `None` for events the host never sees.
pub fn render(event: &AppEvent) -> Option<String<LINE_CAP>> {
    let mut line = String::new();
    let ok = match event {
        AppEvent::Listening => line.push_str(GREETING).is_ok(),
        AppEvent::Alive => line.push_str(ALIVE_REPLY).is_ok(),
        AppEvent::FrameEcho(frame) => {
            write!(line, "MESSAGE: {};{}", frame.opcode, frame.payload).is_ok()
        }
        AppEvent::UnknownOpcode(op) => write!(line, "UNKNOWN MESSAGE: {op}").is_ok(),
        AppEvent::RadarReport(scores) => {
            let mut ok = line.push_str(RADAR_TAG).is_ok();
            for score in scores {
                ok &= write!(line, "{score}{SCORE_DELIMITER}").is_ok();
            }
            ok
        }
        AppEvent::ArmChanged { .. } | AppEvent::RestartRequested => return None,
    };
    (ok && line.push_str(LINE_END).is_ok()).then_some(line)
}
