//! Hardware adapter: bridges real peripherals to domain port traits.
//!
//! Owns the servo bank, the switch outputs, the radar inputs and the RNG,
//! exposing them through [`ActuatorPort`], [`OutputPort`], [`RadarPort`] and
//! [`EntropyPort`].  Generic over the `embedded-hal` channel types so the
//! same adapter runs on LEDC/GPIO handles on device and on mocks in tests.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::app::ports::{ActuatorPort, EntropyPort, OutputId, OutputPort, RadarPort};
use crate::drivers::radar::RadarInputs;
use crate::drivers::servo::ServoBank;
use crate::drivers::switch::SwitchBank;
use crate::motion::{Axis, ServoAngle};

use super::entropy::HardwareEntropy;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<P, O> {
    servos: ServoBank<P>,
    outputs: SwitchBank<O>,
    radar: RadarInputs,
    entropy: HardwareEntropy,
}

impl<P: SetDutyCycle, O: OutputPin> HardwareAdapter<P, O> {
    pub fn new(servos: ServoBank<P>, outputs: SwitchBank<O>, radar: RadarInputs) -> Self {
        Self {
            servos,
            outputs,
            radar,
            entropy: HardwareEntropy::new(),
        }
    }

    pub fn servos(&self) -> &ServoBank<P> {
        &self.servos
    }

    pub fn outputs(&self) -> &SwitchBank<O> {
        &self.outputs
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<P: SetDutyCycle, O: OutputPin> ActuatorPort for HardwareAdapter<P, O> {
    fn set_position(&mut self, axis: Axis, angle: ServoAngle) {
        self.servos.set(axis, angle);
    }

    fn attached(&self, axis: Axis) -> bool {
        self.servos.is_attached(axis)
    }
}

// ── OutputPort implementation ─────────────────────────────────

impl<P: SetDutyCycle, O: OutputPin> OutputPort for HardwareAdapter<P, O> {
    fn set_level(&mut self, output: OutputId, high: bool) {
        self.outputs.set(output, high);
    }

    fn is_bound(&self, output: OutputId) -> bool {
        self.outputs.is_bound(output)
    }
}

// ── RadarPort implementation ──────────────────────────────────

impl<P: SetDutyCycle, O: OutputPin> RadarPort for HardwareAdapter<P, O> {
    fn has_input(&self, channel: usize) -> bool {
        self.radar.has_input(channel)
    }

    fn sample(&mut self, channel: usize) -> u16 {
        self.radar.sample(channel)
    }
}

// ── EntropyPort implementation ────────────────────────────────

impl<P: SetDutyCycle, O: OutputPin> EntropyPort for HardwareAdapter<P, O> {
    fn next_u32(&mut self) -> u32 {
        self.entropy.next_u32()
    }
}
