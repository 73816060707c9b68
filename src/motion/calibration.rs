//! Per-axis mechanical limits.
//!
//! Limits are given in servo-library native units (0–1023 spans the full
//! 0–180° throw).  Left/right are from the parrot's point of view.
//! Exceeding these limits can strip the gears or crack the shell.

use super::Axis;

pub const LIMIT_HEAD_ROTATE_RIGHT: i32 = 0;
pub const LIMIT_HEAD_ROTATE_LEFT: i32 = 1023;
pub const LIMIT_WINGS_SPREAD: i32 = 450;
pub const LIMIT_WINGS_RETRACTED: i32 = 800;
pub const LIMIT_BEAK_OPEN: i32 = 100;
pub const LIMIT_BEAK_CLOSED: i32 = 900;
pub const LIMIT_BODY_TILT_STRAIGHT: i32 = 750;
pub const LIMIT_BODY_TILT_BENT: i32 = 500;
pub const LIMIT_HEAD_TILT_LEFT: i32 = 200;
pub const LIMIT_HEAD_TILT_RIGHT: i32 = 1023;

/// Mechanical centre of the head tilt; also the input pivot.
pub const HEAD_TILT_CENTER: i32 = 512;
/// Head tilt only uses this share of its throw on either side of centre.
pub const HEAD_TILT_REDUCTION: f32 = 0.3;

pub const REDUCED_HEAD_TILT_LEFT: i32 = reduce_towards_center(LIMIT_HEAD_TILT_LEFT);
pub const REDUCED_HEAD_TILT_RIGHT: i32 = reduce_towards_center(LIMIT_HEAD_TILT_RIGHT);

const fn reduce_towards_center(limit: i32) -> i32 {
    (HEAD_TILT_CENTER as f32 + HEAD_TILT_REDUCTION * (limit - HEAD_TILT_CENTER) as f32) as i32
}

/// One linear input-domain → physical-range segment.
///
/// `range` may be declared in either order; a reversed range is how a
/// physically mirrored servo is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub domain: (i32, i32),
    pub range: (i32, i32),
}

impl Segment {
    pub const fn new(domain: (i32, i32), range: (i32, i32)) -> Self {
        Self { domain, range }
    }

    /// Interpolate, then clamp to the range bounds whichever way round they are.
    pub fn apply(&self, x: i32) -> i32 {
        let (in_lo, in_hi) = self.domain;
        let (out_a, out_b) = self.range;
        let mapped = if in_hi == in_lo {
            out_a
        } else {
            (x - in_lo) * (out_b - out_a) / (in_hi - in_lo) + out_a
        };
        mapped.clamp(out_a.min(out_b), out_a.max(out_b))
    }

    pub const fn is_inverted(&self) -> bool {
        self.range.1 < self.range.0
    }

    pub fn bounds(&self) -> (i32, i32) {
        (self.range.0.min(self.range.1), self.range.0.max(self.range.1))
    }
}

/// How an axis turns a payload into a physical position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calibration {
    /// Whole payload domain onto one range.
    Linear(Segment),
    /// Payloads below `pivot` use `below`, the rest use `above`.
    Pivot {
        pivot: i32,
        below: Segment,
        above: Segment,
    },
    /// No calibration: clamp the payload and use it as-is.
    Passthrough,
}

impl Calibration {
    pub fn physical(&self, x: i32) -> i32 {
        match self {
            Self::Linear(seg) => seg.apply(x),
            Self::Pivot { pivot, below, above } => {
                if x < *pivot {
                    below.apply(x)
                } else {
                    above.apply(x)
                }
            }
            Self::Passthrough => x.clamp(0, FULL_SCALE),
        }
    }

    /// Inclusive physical bounds this calibration can produce.
    pub fn bounds(&self) -> (i32, i32) {
        match self {
            Self::Linear(seg) => seg.bounds(),
            Self::Pivot { below, above, .. } => {
                let (a, b) = below.bounds();
                let (c, d) = above.bounds();
                (a.min(c), b.max(d))
            }
            Self::Passthrough => (0, FULL_SCALE),
        }
    }
}

const FULL_SCALE: i32 = 1023;

/// Build-time calibration table.
pub const fn for_axis(axis: Axis) -> Calibration {
    match axis {
        Axis::BodyTilt => Calibration::Linear(Segment::new(
            (0, FULL_SCALE),
            (LIMIT_BODY_TILT_STRAIGHT, LIMIT_BODY_TILT_BENT),
        )),
        Axis::Wings => Calibration::Linear(Segment::new(
            (0, FULL_SCALE),
            (LIMIT_WINGS_RETRACTED, LIMIT_WINGS_SPREAD),
        )),
        Axis::HeadTilt => Calibration::Pivot {
            pivot: HEAD_TILT_CENTER,
            below: Segment::new(
                (0, HEAD_TILT_CENTER - 1),
                (REDUCED_HEAD_TILT_LEFT, HEAD_TILT_CENTER),
            ),
            above: Segment::new(
                (HEAD_TILT_CENTER, FULL_SCALE),
                (HEAD_TILT_CENTER, REDUCED_HEAD_TILT_RIGHT),
            ),
        },
        Axis::HeadRotate => Calibration::Linear(Segment::new(
            (0, FULL_SCALE),
            (LIMIT_HEAD_ROTATE_RIGHT, LIMIT_HEAD_ROTATE_LEFT),
        )),
        Axis::Beak => Calibration::Linear(Segment::new(
            (0, FULL_SCALE),
            (LIMIT_BEAK_CLOSED, LIMIT_BEAK_OPEN),
        )),
    }
}
