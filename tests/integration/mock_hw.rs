//! Mock hardware, link and sink for integration tests.
//!
//! Records every actuator and output call so tests can assert on the full
//! command history without touching real LEDC/GPIO registers.

use std::collections::VecDeque;

use papaguy::app::events::AppEvent;
use papaguy::app::ports::{ActuatorPort, EntropyPort, EventSink, OutputId, OutputPort, RadarPort};
use papaguy::motion::{Axis, ServoAngle};
use papaguy::pins::RADAR_CHANNELS;
use papaguy::protocol::transport::Transport;

// ── Hardware call record ──────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwCall {
    Move(Axis, ServoAngle),
    Level(OutputId, bool),
}

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    pub calls: Vec<HwCall>,
    /// Level each radar channel reads back.
    pub radar: [u16; RADAR_CHANNELS],
    pub radar_bound: [bool; RADAR_CHANNELS],
    pub fog_bound: bool,
    /// Axes whose servo reports as not attached.
    pub detached: Vec<Axis>,
    /// Scripted entropy; 0 once exhausted.
    pub draws: VecDeque<u32>,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            radar: [0; RADAR_CHANNELS],
            radar_bound: [false; RADAR_CHANNELS],
            fog_bound: false,
            detached: Vec::new(),
            draws: VecDeque::new(),
        }
    }

    /// Bound the way the figure is wired: only channel 2 has a radar.
    pub fn wired() -> Self {
        let mut hw = Self::new();
        hw.radar_bound[2] = true;
        hw
    }

    pub fn moves(&self) -> Vec<(Axis, ServoAngle)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HwCall::Move(axis, angle) => Some((*axis, *angle)),
                HwCall::Level(..) => None,
            })
            .collect()
    }

    pub fn levels(&self, output: OutputId) -> Vec<bool> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HwCall::Level(o, high) if *o == output => Some(*high),
                _ => None,
            })
            .collect()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl ActuatorPort for MockHardware {
    fn set_position(&mut self, axis: Axis, angle: ServoAngle) {
        self.calls.push(HwCall::Move(axis, angle));
    }

    fn attached(&self, axis: Axis) -> bool {
        !self.detached.contains(&axis)
    }
}

impl OutputPort for MockHardware {
    fn set_level(&mut self, output: OutputId, high: bool) {
        self.calls.push(HwCall::Level(output, high));
    }

    fn is_bound(&self, output: OutputId) -> bool {
        output != OutputId::Fog || self.fog_bound
    }
}

impl RadarPort for MockHardware {
    fn has_input(&self, channel: usize) -> bool {
        self.radar_bound.get(channel).copied().unwrap_or(false)
    }

    fn sample(&mut self, channel: usize) -> u16 {
        self.radar[channel]
    }
}

impl EntropyPort for MockHardware {
    fn next_u32(&mut self) -> u32 {
        self.draws.pop_front().unwrap_or(0)
    }
}

// ── ScriptedLink ──────────────────────────────────────────────

/// In-memory link: tests push inbound bytes, read back what was written.
#[derive(Default)]
pub struct ScriptedLink {
    pub rx: VecDeque<u8>,
    pub tx: Vec<u8>,
}

#[allow(dead_code)]
impl ScriptedLink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, bytes: &[u8]) {
        self.rx.extend(bytes.iter().copied());
    }

    pub fn written(&self) -> &str {
        std::str::from_utf8(&self.tx).unwrap_or("<binary>")
    }
}

impl Transport for ScriptedLink {
    type Error = ();

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ()> {
        let mut n = 0;
        while n < buf.len() {
            let Some(b) = self.rx.pop_front() else { break };
            buf[n] = b;
            n += 1;
        }
        Ok(n)
    }

    fn read_within(&mut self, buf: &mut [u8], _timeout_ms: u32) -> Result<usize, ()> {
        self.read(buf)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, ()> {
        self.tx.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<(), ()> {
        Ok(())
    }

    fn available(&self) -> bool {
        !self.rx.is_empty()
    }
}

// ── RecordingSink ─────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<[u32; RADAR_CHANNELS]> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::RadarReport(s) => Some(*s),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
