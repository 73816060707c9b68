//! Fixed 3-byte command frame.
//!
//! Wire format:
//! ```text
//! ┌──────────┬──────────────────────┐
//! │ Opcode   │ Payload (2B)         │
//! │ u8       │ BE u16, high first   │
//! └──────────┴──────────────────────┘
//! ```
//!
//! There is no sync byte and no checksum: the link is a short, dedicated
//! cable and the host only ever writes whole frames.

use super::opcode::Opcode;

/// Bytes per frame on the wire.
pub const FRAME_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandFrame {
    /// Raw opcode byte.  Unknown values are kept, not rejected.
    pub opcode: u8,
    pub payload: u16,
}

impl CommandFrame {
    pub const fn new(opcode: u8, payload: u16) -> Self {
        Self { opcode, payload }
    }

    pub const fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        Self {
            opcode: bytes[0],
            payload: u16::from_be_bytes([bytes[1], bytes[2]]),
        }
    }

    pub const fn to_bytes(self) -> [u8; FRAME_LEN] {
        let [hi, lo] = self.payload.to_be_bytes();
        [self.opcode, hi, lo]
    }

    /// Decoded opcode, or the raw byte if it is not in the table.
    pub fn kind(&self) -> Result<Opcode, u8> {
        Opcode::try_from(self.opcode)
    }

    /// Whether the frame is worth echoing to the host.  Idle frames carry
    /// nothing and envelope frames arrive at audio rate.
    pub fn is_echoed(&self) -> bool {
        !matches!(self.kind(), Ok(Opcode::Idle | Opcode::Envelope))
    }
}
