//! Inbound commands to the control core.
//!
//! A [`CommandFrame`] is the raw wire view; [`Command`] is what it means.
//! Unknown opcodes survive as [`Command::Unknown`] so the dispatcher can
//! report them.

use crate::motion::Axis;
use crate::protocol::frame::CommandFrame;
use crate::protocol::opcode::Opcode;

use super::ports::OutputId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Idle,
    /// Move one axis to a payload position.
    Move { axis: Axis, payload: u16 },
    /// Switch a binary output; high when the payload is non-zero.
    Switch { output: OutputId, payload: u16 },
    /// Audio envelope: beak, throttled wings, and eyes from one value.
    Envelope(u16),
    IsAlive,
    EmulateRadars,
    Deactivate,
    Reactivate,
    Reset,
    Unknown(u8),
}

impl From<CommandFrame> for Command {
    fn from(frame: CommandFrame) -> Self {
        let payload = frame.payload;
        let op = match frame.kind() {
            Ok(op) => op,
            Err(raw) => return Self::Unknown(raw),
        };
        let move_to = |axis| Self::Move { axis, payload };
        let switch = |output| Self::Switch { output, payload };
        match op {
            Opcode::Idle => Self::Idle,
            Opcode::BodyTilt => move_to(Axis::BodyTilt),
            Opcode::Wings => move_to(Axis::Wings),
            Opcode::HeadTilt => move_to(Axis::HeadTilt),
            Opcode::HeadRotate => move_to(Axis::HeadRotate),
            Opcode::Beak => move_to(Axis::Beak),
            Opcode::Envelope => Self::Envelope(payload),
            Opcode::Eyes => switch(OutputId::Eyes),
            Opcode::Fog => switch(OutputId::Fog),
            Opcode::IsAlive => Self::IsAlive,
            Opcode::EmulateRadars => Self::EmulateRadars,
            Opcode::Deactivate => Self::Deactivate,
            Opcode::Reactivate => Self::Reactivate,
            Opcode::Reset => Self::Reset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_become_commands() {
        assert_eq!(
            Command::from(CommandFrame::new(4, 512)),
            Command::Move {
                axis: Axis::HeadRotate,
                payload: 512
            }
        );
        assert_eq!(
            Command::from(CommandFrame::new(23, 1)),
            Command::Switch {
                output: OutputId::Fog,
                payload: 1
            }
        );
        assert_eq!(Command::from(CommandFrame::new(17, 9)), Command::Envelope(9));
        assert_eq!(Command::from(CommandFrame::new(127, 0)), Command::Reset);
        assert_eq!(Command::from(CommandFrame::new(200, 0)), Command::Unknown(200));
    }
}
