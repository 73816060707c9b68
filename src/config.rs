//! Firmware configuration parameters.
//!
//! All tunables of the control core, fixed at build time.  There is no
//! provisioning channel and nothing is persisted: the figure boots with
//! [`FirmwareConfig::default`] every time.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::pins;

/// Capacity of each radar channel's sample history.
pub const RADAR_HISTORY_LEN: usize = 20;

/// Full scale of a motion payload / ADC sample.
pub const PAYLOAD_FULL_SCALE: u16 = 1023;

/// Core firmware configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirmwareConfig {
    // --- Cadence ---
    /// Cycles between radar aggregation windows.
    pub aggregation_interval_cycles: u32,
    /// The envelope command moves the wings only every Nth cycle.
    pub envelope_wings_every: u32,
    /// Cycle counter wraps back by this amount (must be a multiple of both cadences).
    pub cycle_wrap: u32,

    // --- Envelope ---
    /// Fraction of full scale above which the envelope lights the eyes.
    pub envelope_light_fraction: f32,

    // --- Radar detection ---
    /// Deviation from the running average that counts as a signal.
    pub noise_threshold: f32,
    /// |gradient| below which an active signal is considered over.
    pub end_of_signal_gradient: u16,
    /// Sample counter saturates here ...
    pub average_count_cap: u32,
    /// ... and restarts from here.
    pub average_count_floor: u32,
    /// Channel that drives the on-board "detecting" indicator.
    pub indicator_channel: usize,
    /// Whether the EMULATE_RADARS command is honoured.
    pub radar_emulation_enabled: bool,

    // --- Link ---
    /// How long the decoder waits for the tail of a started frame (ms).
    pub frame_timeout_ms: u32,
    /// UART baud rate.
    pub serial_baud: u32,

    // --- Timing ---
    /// Device loop period (ms); yields to the RTOS between cycles.
    pub cycle_period_ms: u32,
}

impl Default for FirmwareConfig {
    fn default() -> Self {
        Self {
            // Cadence
            aggregation_interval_cycles: RADAR_HISTORY_LEN as u32,
            envelope_wings_every: 5,
            cycle_wrap: 10_000,

            // Envelope
            envelope_light_fraction: 0.6,

            // Radar
            noise_threshold: 500.0, // very rarely crossed by noise alone
            end_of_signal_gradient: 2,
            average_count_cap: 30_000,
            average_count_floor: 1_000,
            indicator_channel: 2,
            radar_emulation_enabled: true,

            // Link
            frame_timeout_ms: 1_000,
            serial_baud: 115_200,

            // Timing
            cycle_period_ms: 10,
        }
    }
}

impl FirmwareConfig {
    /// Reject combinations that would break cadence gating or the
    /// running-average bookkeeping.
    pub fn validate(&self) -> Result<()> {
        if self.aggregation_interval_cycles == 0 || self.envelope_wings_every == 0 {
            return Err(Error::Config("cadence divisors must be non-zero"));
        }
        if self.cycle_wrap % self.aggregation_interval_cycles != 0
            || self.cycle_wrap % self.envelope_wings_every != 0
        {
            return Err(Error::Config("cycle_wrap must be a multiple of every cadence"));
        }
        if self.average_count_floor == 0 || self.average_count_floor >= self.average_count_cap {
            return Err(Error::Config("average_count_floor must lie in 1..cap"));
        }
        if self.indicator_channel >= pins::RADAR_CHANNELS {
            return Err(Error::Config("indicator_channel out of range"));
        }
        if !(0.0..=1.0).contains(&self.envelope_light_fraction) {
            return Err(Error::Config("envelope_light_fraction must be within 0..=1"));
        }
        Ok(())
    }

    /// Envelope payload above which the eyes light up.
    pub fn envelope_light_threshold(&self) -> f32 {
        self.envelope_light_fraction * f32::from(PAYLOAD_FULL_SCALE)
    }
}
