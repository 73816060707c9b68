//! Opcode table.
//!
//! Numbering is shared with the show controller on the host side; never
//! renumber an existing entry.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Opcode {
    Idle = 0,
    BodyTilt = 1,
    Wings = 2,
    HeadTilt = 3,
    HeadRotate = 4,
    Beak = 5,
    Envelope = 17,
    Eyes = 20,
    Fog = 23,
    IsAlive = 63,
    EmulateRadars = 101,
    Deactivate = 125,
    Reactivate = 126,
    Reset = 127,
}

impl Opcode {
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(raw: u8) -> Result<Self, u8> {
        match raw {
            0 => Ok(Self::Idle),
            1 => Ok(Self::BodyTilt),
            2 => Ok(Self::Wings),
            3 => Ok(Self::HeadTilt),
            4 => Ok(Self::HeadRotate),
            5 => Ok(Self::Beak),
            17 => Ok(Self::Envelope),
            20 => Ok(Self::Eyes),
            23 => Ok(Self::Fog),
            63 => Ok(Self::IsAlive),
            101 => Ok(Self::EmulateRadars),
            125 => Ok(Self::Deactivate),
            126 => Ok(Self::Reactivate),
            127 => Ok(Self::Reset),
            other => Err(other),
        }
    }
}
