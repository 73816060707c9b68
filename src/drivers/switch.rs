//! On/off outputs (eyes, fog machine, detection LED).

use embedded_hal::digital::{OutputPin, PinState};
use heapless::FnvIndexMap;
use log::warn;

use crate::app::ports::OutputId;

pub struct Switch<P> {
    pin: P,
    high: bool,
}

impl<P: OutputPin> Switch<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, high: false }
    }

    pub fn set(&mut self, high: bool) -> Result<(), P::Error> {
        self.pin.set_state(PinState::from(high))?;
        self.high = high;
        Ok(())
    }

    pub fn is_high(&self) -> bool {
        self.high
    }
}

pub struct SwitchBank<P> {
    slots: FnvIndexMap<OutputId, Switch<P>, 4>,
}

impl<P: OutputPin> SwitchBank<P> {
    pub fn new() -> Self {
        Self {
            slots: FnvIndexMap::new(),
        }
    }

    pub fn bind(&mut self, output: OutputId, pin: P) {
        if self.slots.insert(output, Switch::new(pin)).is_err() {
            warn!("SwitchBank: no slot left for {:?}", output);
        }
    }

    pub fn is_bound(&self, output: OutputId) -> bool {
        self.slots.contains_key(&output)
    }

    pub fn set(&mut self, output: OutputId, high: bool) {
        if let Some(sw) = self.slots.get_mut(&output) {
            if let Err(e) = sw.set(high) {
                warn!("SwitchBank: {:?} write failed: {:?}", output, e);
            }
        }
    }

    pub fn level(&self, output: OutputId) -> Option<bool> {
        self.slots.get(&output).map(Switch::is_high)
    }
}

impl<P: OutputPin> Default for SwitchBank<P> {
    fn default() -> Self {
        Self::new()
    }
}
