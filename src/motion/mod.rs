//! Position mapping: payload → calibrated servo angle.
//!
//! ```text
//!  raw payload ──clamp 0..1023──▶ calibration (interpolate + clamp)
//!              ──▶ physical 0..1023 ──rescale──▶ servo units 0..180
//! ```
//!
//! Everything here is pure.  A malformed frame can carry any `u16`; the
//! first clamp makes sure no interpolation ever sees it.

pub mod calibration;

use calibration::Calibration;

use crate::config::PAYLOAD_FULL_SCALE;

/// One independently driven degree of freedom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    BodyTilt,
    Wings,
    HeadTilt,
    HeadRotate,
    Beak,
}

impl Axis {
    pub const ALL: [Axis; 5] = [
        Axis::BodyTilt,
        Axis::Wings,
        Axis::HeadTilt,
        Axis::HeadRotate,
        Axis::Beak,
    ];

    pub const fn calibration(self) -> Calibration {
        calibration::for_axis(self)
    }
}

/// Servo command in the servo library's 0–180 unit scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ServoAngle(u8);

impl ServoAngle {
    pub const MAX: u8 = 180;

    /// Rescale a physical position (0–1023) into servo units.
    pub fn from_physical(physical: i32) -> Self {
        let p = physical.clamp(0, i32::from(PAYLOAD_FULL_SCALE));
        Self((p * i32::from(Self::MAX) / i32::from(PAYLOAD_FULL_SCALE)) as u8)
    }

    pub const fn units(self) -> u8 {
        self.0
    }
}

/// Calibrated physical position (0–1023 native scale) for `raw` on `axis`.
pub fn physical_position(axis: Axis, raw: u16) -> i32 {
    physical_with(&axis.calibration(), raw)
}

/// Physical position under an arbitrary calibration.
pub fn physical_with(cal: &Calibration, raw: u16) -> i32 {
    let x = i32::from(raw.min(PAYLOAD_FULL_SCALE));
    cal.physical(x)
}

/// Map a payload on `axis` to the servo command that realises it.
pub fn map(axis: Axis, raw: u16) -> ServoAngle {
    ServoAngle::from_physical(physical_position(axis, raw))
}

/// Fallback for channels without a calibration entry.
pub fn passthrough(raw: u16) -> ServoAngle {
    ServoAngle::from_physical(physical_with(&Calibration::Passthrough, raw))
}
