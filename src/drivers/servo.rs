//! Hobby-servo driver over any `embedded-hal` PWM channel.
//!
//! Standard 50 Hz servo framing: a 544–2400 µs pulse every 20 ms spans the
//! full 0–180 unit travel.  The driver remembers the last angle it wrote so
//! the bank can log a read-back after every move.

use embedded_hal::pwm::SetDutyCycle;
use heapless::FnvIndexMap;
use log::{debug, warn};

use crate::motion::{Axis, ServoAngle};
use crate::pins::{SERVO_MAX_PULSE_US, SERVO_MIN_PULSE_US, SERVO_PWM_FREQ_HZ};

/// PWM period at the servo frame rate.
pub const SERVO_PERIOD_US: u32 = 1_000_000 / SERVO_PWM_FREQ_HZ;

/// Pulse width for `angle`, linear across the servo's pulse range.
pub const fn pulse_width_us(angle: ServoAngle) -> u32 {
    let span = SERVO_MAX_PULSE_US - SERVO_MIN_PULSE_US;
    SERVO_MIN_PULSE_US + span * angle.units() as u32 / ServoAngle::MAX as u32
}

pub struct Servo<P> {
    pwm: P,
    angle: Option<ServoAngle>,
}

impl<P: SetDutyCycle> Servo<P> {
    pub fn new(pwm: P) -> Self {
        Self { pwm, angle: None }
    }

    pub fn write(&mut self, angle: ServoAngle) -> Result<(), P::Error> {
        self.pwm
            .set_duty_cycle_fraction(pulse_width_us(angle) as u16, SERVO_PERIOD_US as u16)?;
        self.angle = Some(angle);
        Ok(())
    }

    /// Last angle successfully written.
    pub fn read(&self) -> Option<ServoAngle> {
        self.angle
    }

    pub fn into_inner(self) -> P {
        self.pwm
    }
}

/// Axis → servo lookup, built once at boot.
pub struct ServoBank<P> {
    slots: FnvIndexMap<Axis, Servo<P>, 8>,
}

impl<P: SetDutyCycle> ServoBank<P> {
    pub fn new() -> Self {
        Self {
            slots: FnvIndexMap::new(),
        }
    }

    /// Attach a PWM channel to `axis`, replacing any previous binding.
    pub fn attach(&mut self, axis: Axis, pwm: P) {
        if self.slots.insert(axis, Servo::new(pwm)).is_err() {
            warn!("ServoBank: no slot left for {:?}", axis);
        }
    }

    pub fn is_attached(&self, axis: Axis) -> bool {
        self.slots.contains_key(&axis)
    }

    /// Drive `axis`; unattached axes are ignored.
    pub fn set(&mut self, axis: Axis, angle: ServoAngle) {
        let Some(servo) = self.slots.get_mut(&axis) else {
            return;
        };
        if let Err(e) = servo.write(angle) {
            warn!("ServoBank: {:?} write failed: {:?}", axis, e);
            return;
        }
        debug!(
            "servo {:?} <- {} units ({} us), reads {:?}",
            axis,
            angle.units(),
            pulse_width_us(angle),
            servo.read().map(ServoAngle::units)
        );
    }

    pub fn angle(&self, axis: Axis) -> Option<ServoAngle> {
        self.slots.get(&axis).and_then(Servo::read)
    }
}

impl<P: SetDutyCycle> Default for ServoBank<P> {
    fn default() -> Self {
        Self::new()
    }
}
