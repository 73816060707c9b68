//! Per-direction radar signal detector.
//!
//! A Doppler radar module idles around some offset with occasional spikes.
//! A real approach shows up as a sustained excursion away from the long-run
//! average.  Detection uses two statistics per sample:
//!
//! - **deviation** `|x - avg|` opens (and extends) an event;
//! - **gradient** `x - oldest retained sample` closes it, once the signal
//!   has stopped moving.
//!
//! Between the two there is a dead band where an event stays open but its
//! duration does not grow; it keeps a brief dip from splitting one approach
//! into two events.

use crate::config::{FirmwareConfig, RADAR_HISTORY_LEN};

use super::history::SampleHistory;

/// Thresholds shared by every channel.
#[derive(Debug, Clone, Copy)]
pub struct DetectionParams {
    pub noise_threshold: f32,
    pub end_of_signal_gradient: u16,
    pub average_count_cap: u32,
    pub average_count_floor: u32,
}

impl From<&FirmwareConfig> for DetectionParams {
    fn from(c: &FirmwareConfig) -> Self {
        Self {
            noise_threshold: c.noise_threshold,
            end_of_signal_gradient: c.end_of_signal_gradient,
            average_count_cap: c.average_count_cap,
            average_count_floor: c.average_count_floor,
        }
    }
}

/// What one sample looked like to the detector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub value: u16,
    pub gradient: i32,
    pub deviation: f32,
    /// Deviation above the noise threshold on this sample.
    pub detecting: bool,
}

pub struct RadarChannel {
    history: SampleHistory<RADAR_HISTORY_LEN>,
    average: f32,
    /// Samples folded into `average`; saturates at the cap, restarts at the floor.
    samples: u32,
    active: bool,
    duration: u32,
    score: u32,
}

impl RadarChannel {
    pub fn new() -> Self {
        Self {
            history: SampleHistory::new(),
            average: 0.0,
            samples: 0,
            active: false,
            duration: 0,
            score: 0,
        }
    }

    /// Feed one raw sample through the detector.
    pub fn observe(&mut self, value: u16, p: &DetectionParams) -> Observation {
        self.history.push(value);

        let n = self.samples as f32;
        self.average = (n * self.average + f32::from(value)) / (n + 1.0);
        self.samples += 1;
        if self.samples >= p.average_count_cap {
            self.samples = p.average_count_floor;
        }

        let gradient = i32::from(value) - i32::from(self.history.oldest());
        let deviation = (f32::from(value) - self.average).abs();
        let detecting = deviation > p.noise_threshold;

        if detecting {
            if self.active {
                self.duration = self.duration.saturating_add(1);
            } else {
                self.active = true;
                self.duration = 1;
            }
        } else if self.active && gradient.unsigned_abs() < u32::from(p.end_of_signal_gradient) {
            // Duration is left for the aggregator to collect.
            self.active = false;
        }

        Observation {
            value,
            gradient,
            deviation,
            detecting,
        }
    }

    /// Move a finished event's duration into the score.  Returns whether
    /// anything was scored.
    pub fn fold_closed_event(&mut self) -> bool {
        if self.active || self.duration == 0 {
            return false;
        }
        self.score = self.score.saturating_add(self.duration);
        self.duration = 0;
        true
    }

    pub fn add_score(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    /// Clear the per-window counters.  Detection state and the running
    /// average carry over.
    pub fn reset_window(&mut self) {
        self.duration = 0;
        self.score = 0;
    }

    pub fn average(&self) -> f32 {
        self.average
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn sample_count(&self) -> u32 {
        self.samples
    }
}

impl Default for RadarChannel {
    fn default() -> Self {
        Self::new()
    }
}
