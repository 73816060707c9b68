//! Radar signal engine: per-direction detection and windowed scoring.
//!
//! ```text
//!   RadarPort ──sample──▶ RadarChannel ×5 ──duration──▶ fold ──▶ scores
//!                              │                          ▲
//!                              └─ indicator LED           │
//!                                                 EntropyPort (emulation)
//! ```
//!
//! Sampling happens every cycle.  Every aggregation interval the service
//! asks the engine to fold closed events into scores; if anything scored
//! (or an emulated report is pending) a report goes out and the window
//! restarts.

pub mod channel;
pub mod history;

use log::{debug, trace};

use crate::app::ports::{EntropyPort, OutputId, OutputPort, RadarPort};
use crate::config::FirmwareConfig;
use crate::pins::RADAR_CHANNELS;

use channel::{DetectionParams, RadarChannel};

/// Emulation picks a channel from `0..EMULATION_DRAW_SPAN`; draws past the
/// last channel produce nothing.
pub const EMULATION_DRAW_SPAN: u32 = 100;
/// Score added to the hit channel, drawn from this half-open range.
pub const EMULATED_HIT: (u32, u32) = (1, 10);
/// Score added to each neighbour, drawn from this half-open range.
pub const EMULATED_SPILL: (u32, u32) = (0, 4);

pub struct SignalEngine {
    channels: [RadarChannel; RADAR_CHANNELS],
    params: DetectionParams,
    indicator_channel: usize,
    emulation_permitted: bool,
    emulating: bool,
}

impl SignalEngine {
    pub fn new(config: &FirmwareConfig) -> Self {
        Self {
            channels: core::array::from_fn(|_| RadarChannel::new()),
            params: DetectionParams::from(config),
            indicator_channel: config.indicator_channel,
            emulation_permitted: config.radar_emulation_enabled,
            emulating: false,
        }
    }

    /// Sample every bound channel once and drive the indicator output.
    pub fn measure(&mut self, hw: &mut (impl RadarPort + OutputPort)) {
        for (idx, ch) in self.channels.iter_mut().enumerate() {
            if !hw.has_input(idx) {
                continue;
            }
            let value = hw.sample(idx);
            let obs = ch.observe(value, &self.params);

            if idx == self.indicator_channel {
                trace!(
                    "radar[{}] x={} avg={:.1} dev={:.1} grad={} active={} dur={} score={}",
                    idx,
                    obs.value,
                    ch.average(),
                    obs.deviation,
                    obs.gradient,
                    ch.is_active(),
                    ch.duration(),
                    ch.score()
                );
                if hw.is_bound(OutputId::DetectIndicator) {
                    hw.set_level(OutputId::DetectIndicator, obs.detecting);
                }
            }
        }
    }

    /// Close the current window.  Returns `true` when a report is due.
    ///
    /// A pending emulation request that draws a hit replaces the measured
    /// scores with a synthetic one.  On a miss, or with no request, every
    /// closed event is folded into its channel's score.  Events still open
    /// keep accumulating into the next window.
    pub fn aggregate(&mut self, rng: &mut impl EntropyPort) -> bool {
        if self.emulating && self.emulate(rng) {
            return true;
        }
        let mut scored = false;
        for ch in &mut self.channels {
            scored |= ch.fold_closed_event();
        }
        scored
    }

    /// Arm a one-shot synthetic report.  Ignored when emulation is
    /// disabled in the configuration.
    pub fn request_emulation(&mut self) -> bool {
        if !self.emulation_permitted {
            debug!("SignalEngine: emulation disabled, request ignored");
            return false;
        }
        self.emulating = true;
        true
    }

    /// Clear scores and open durations after a report.
    pub fn reset_window(&mut self) {
        for ch in &mut self.channels {
            ch.reset_window();
        }
        self.emulating = false;
    }

    pub fn scores(&self) -> [u32; RADAR_CHANNELS] {
        core::array::from_fn(|i| self.channels[i].score())
    }

    pub fn channel(&self, idx: usize) -> Option<&RadarChannel> {
        self.channels.get(idx)
    }

    pub fn is_emulating(&self) -> bool {
        self.emulating
    }

    fn emulate(&mut self, rng: &mut impl EntropyPort) -> bool {
        let hit = rng.random_below(EMULATION_DRAW_SPAN) as usize;
        if hit >= RADAR_CHANNELS {
            return false;
        }
        self.channels[hit].add_score(rng.random_range(EMULATED_HIT.0, EMULATED_HIT.1));
        if hit > 0 {
            self.channels[hit - 1].add_score(rng.random_range(EMULATED_SPILL.0, EMULATED_SPILL.1));
        }
        if hit + 1 < RADAR_CHANNELS {
            self.channels[hit + 1].add_score(rng.random_range(EMULATED_SPILL.0, EMULATED_SPILL.1));
        }
        debug!("SignalEngine: emulated hit on channel {}", hit);
        true
    }
}
