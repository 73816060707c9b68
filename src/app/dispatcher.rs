//! Command dispatcher: the armed/disarmed gate in front of the actuators.
//!
//! ```text
//!            DEACTIVATE
//!   ┌───────┐ ───────▶ ┌──────────┐
//!   │ Armed │          │ Disarmed │      RESET: restart from either state
//!   └───────┘ ◀─────── └──────────┘
//!            REACTIVATE
//! ```
//!
//! While disarmed every other command is dropped silently.  Nothing in here
//! can fail: unbound outputs and detached servos are skipped, payloads are
//! clamped by the mapper.

use log::{debug, info};

use crate::config::FirmwareConfig;
use crate::motion::{self, Axis};

use super::commands::Command;
use super::events::AppEvent;
use super::ports::{ActuatorPort, EventSink, OutputId, OutputPort};

/// Side effects the dispatcher cannot carry out itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Restart the whole firmware.
    Restart,
    /// Ask the signal engine to synthesise the next radar report.
    EnableEmulation,
}

/// Payloads the figure is driven to at boot.
pub const HOME_POSE: [(Axis, u16); 5] = [
    (Axis::HeadTilt, 512),
    (Axis::HeadRotate, 512),
    (Axis::BodyTilt, 0),
    (Axis::Beak, 0),
    (Axis::Wings, 0),
];

pub struct CommandDispatcher {
    armed: bool,
    envelope_wings_every: u32,
    envelope_light_threshold: f32,
}

impl CommandDispatcher {
    pub fn new(config: &FirmwareConfig) -> Self {
        Self {
            armed: true,
            envelope_wings_every: config.envelope_wings_every.max(1),
            envelope_light_threshold: config.envelope_light_threshold(),
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Drive every axis to its boot position.
    pub fn home(&self, hw: &mut impl ActuatorPort) {
        for (axis, payload) in HOME_POSE {
            move_axis(hw, axis, payload);
        }
    }

    /// Execute one command.  `cycle` is the current cycle counter, used to
    /// throttle the envelope's wing updates.
    pub fn dispatch(
        &mut self,
        cmd: Command,
        cycle: u32,
        hw: &mut (impl ActuatorPort + OutputPort),
        sink: &mut impl EventSink,
    ) -> Option<Effect> {
        // Honoured in any state.
        match cmd {
            Command::Reset => {
                info!("Dispatcher: reset requested");
                sink.emit(&AppEvent::RestartRequested);
                return Some(Effect::Restart);
            }
            Command::Reactivate => {
                self.set_armed(true, sink);
                return None;
            }
            _ => {}
        }

        if !self.armed {
            debug!("Dispatcher: disarmed, dropping {:?}", cmd);
            return None;
        }

        match cmd {
            Command::Move { axis, payload } => move_axis(hw, axis, payload),
            Command::Switch { output, payload } => switch(hw, output, payload > 0),
            Command::Envelope(payload) => {
                move_axis(hw, Axis::Beak, payload);
                if cycle % self.envelope_wings_every == 0 {
                    move_axis(hw, Axis::Wings, payload);
                }
                let lit = f32::from(payload) > self.envelope_light_threshold;
                switch(hw, OutputId::Eyes, lit);
            }
            Command::IsAlive => sink.emit(&AppEvent::Alive),
            Command::EmulateRadars => return Some(Effect::EnableEmulation),
            Command::Deactivate => self.set_armed(false, sink),
            Command::Unknown(op) => {
                info!("Dispatcher: unknown opcode {}", op);
                sink.emit(&AppEvent::UnknownOpcode(op));
            }
            Command::Idle | Command::Reset | Command::Reactivate => {}
        }
        None
    }

    fn set_armed(&mut self, armed: bool, sink: &mut impl EventSink) {
        if self.armed == armed {
            return;
        }
        self.armed = armed;
        info!("Dispatcher: {}", if armed { "armed" } else { "disarmed" });
        sink.emit(&AppEvent::ArmChanged { armed });
    }
}

fn move_axis(hw: &mut impl ActuatorPort, axis: Axis, payload: u16) {
    if !hw.attached(axis) {
        return;
    }
    hw.set_position(axis, motion::map(axis, payload));
}

fn switch(hw: &mut impl OutputPort, output: OutputId, high: bool) {
    if !hw.is_bound(output) {
        return;
    }
    hw.set_level(output, high);
}
