//! Doppler radar inputs.
//!
//! Each radar module presents its signal as an analog level on one ADC1
//! channel.  Slots without a wired module carry `None` and are never read.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: oneshot ADC reads via hw_init.
//! On host/test: reads the levels injected with `hw_init::sim_set_adc1`.

use crate::drivers::hw_init::{self, ADC_SAMPLE_SHIFT};
use crate::pins::{self, RADAR_CHANNELS};

pub struct RadarInputs {
    adc: [Option<u32>; RADAR_CHANNELS],
}

impl RadarInputs {
    /// Inputs as wired in [`pins::RADAR_PINS`].
    pub fn from_pins() -> Self {
        Self::new(pins::RADAR_PINS.map(pins::radar_adc_channel))
    }

    /// Explicit ADC1 channel per radar slot.
    pub fn new(adc: [Option<u32>; RADAR_CHANNELS]) -> Self {
        Self { adc }
    }

    pub fn has_input(&self, channel: usize) -> bool {
        matches!(self.adc.get(channel), Some(Some(_)))
    }

    /// One sample scaled to 0..=1023; unbound slots read 0.
    pub fn sample(&self, channel: usize) -> u16 {
        match self.adc.get(channel) {
            Some(Some(adc)) => hw_init::adc1_read(*adc) >> ADC_SAMPLE_SHIFT,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_wired_slot_is_an_input() {
        let r = RadarInputs::from_pins();
        let bound: Vec<usize> = (0..RADAR_CHANNELS).filter(|&c| r.has_input(c)).collect();
        assert_eq!(bound, vec![2]);
        assert!(!r.has_input(RADAR_CHANNELS));
    }

    #[test]
    fn samples_scale_to_ten_bits() {
        let r = RadarInputs::new([None, None, Some(5), None, None]);
        hw_init::sim_set_adc1(5, 4095);
        assert_eq!(r.sample(2), 1023);
        assert_eq!(r.sample(0), 0);
    }
}
