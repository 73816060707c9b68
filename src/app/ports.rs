//! Port traits: the hexagonal boundary between the control core and the
//! outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ AppService (domain)
//! ```
//!
//! Driven adapters (servos, switches, radar inputs, entropy, event sinks)
//! implement these traits.  The [`AppService`](super::service::AppService)
//! consumes them via generics, so the domain core never touches hardware
//! directly.

use crate::motion::{Axis, ServoAngle};

// ───────────────────────────────────────────────────────────────
// Actuator port (domain → servos)
// ───────────────────────────────────────────────────────────────

pub trait ActuatorPort {
    /// Drive the servo bound to `axis` to `angle`.
    fn set_position(&mut self, axis: Axis, angle: ServoAngle);

    /// Whether a servo is bound to `axis` and currently attached.
    fn attached(&self, axis: Axis) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Output port (domain → binary outputs)
// ───────────────────────────────────────────────────────────────

/// Binary outputs the core knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputId {
    Eyes,
    Fog,
    /// On-board "radar currently detecting" LED.
    DetectIndicator,
}

pub trait OutputPort {
    /// Set `output` high or low.  Writing an unbound output is a no-op.
    fn set_level(&mut self, output: OutputId, high: bool);

    /// Whether `output` is wired to anything.
    fn is_bound(&self, output: OutputId) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Radar port (hardware → domain)
// ───────────────────────────────────────────────────────────────

pub trait RadarPort {
    /// Whether `channel` has a physical input.  Unbound channels are
    /// never sampled.
    fn has_input(&self, channel: usize) -> bool;

    /// Take one raw sample from `channel`.
    fn sample(&mut self, channel: usize) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Entropy port (radar emulation draws)
// ───────────────────────────────────────────────────────────────

pub trait EntropyPort {
    fn next_u32(&mut self) -> u32;

    /// Uniform-ish draw in `0..upper` (`upper` > 0).
    fn random_below(&mut self, upper: u32) -> u32 {
        self.next_u32() % upper.max(1)
    }

    /// Draw in `lo..hi`; returns `lo` when the range is empty.
    fn random_range(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        lo + self.random_below(hi - lo)
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (domain → host link / logging)
// ───────────────────────────────────────────────────────────────

/// The core emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

/// Fan one event out to two sinks, in order.
impl<A: EventSink, B: EventSink> EventSink for (A, B) {
    fn emit(&mut self, event: &super::events::AppEvent) {
        self.0.emit(event);
        self.1.emit(event);
    }
}
