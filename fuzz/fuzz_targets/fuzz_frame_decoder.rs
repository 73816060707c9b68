//! Fuzz target: decoder + dispatcher
//!
//! Feeds arbitrary bytes through the UART-facing decoder and runs every
//! resulting command through a full control cycle.  Nothing in that path
//! may panic, and no servo may ever be driven past 180 units.
//!
//! cargo fuzz run fuzz_frame_decoder

#![no_main]

use std::collections::VecDeque;

use libfuzzer_sys::fuzz_target;
use papaguy::app::events::AppEvent;
use papaguy::app::ports::{ActuatorPort, EntropyPort, EventSink, OutputId, OutputPort, RadarPort};
use papaguy::app::service::AppService;
use papaguy::config::FirmwareConfig;
use papaguy::motion::{Axis, ServoAngle};
use papaguy::protocol::transport::Transport;

struct Bytes(VecDeque<u8>);

impl Transport for Bytes {
    type Error = ();

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, ()> {
        let mut n = 0;
        while n < buf.len() {
            let Some(b) = self.0.pop_front() else { break };
            buf[n] = b;
            n += 1;
        }
        Ok(n)
    }

    fn read_within(&mut self, buf: &mut [u8], _timeout_ms: u32) -> Result<usize, ()> {
        self.read(buf)
    }

    fn write(&mut self, data: &[u8]) -> Result<usize, ()> {
        Ok(data.len())
    }

    fn flush(&mut self) -> Result<(), ()> {
        Ok(())
    }

    fn available(&self) -> bool {
        !self.0.is_empty()
    }
}

struct Rig(u32);

impl ActuatorPort for Rig {
    fn set_position(&mut self, _axis: Axis, angle: ServoAngle) {
        assert!(angle.units() <= ServoAngle::MAX);
    }
    fn attached(&self, _axis: Axis) -> bool {
        true
    }
}

impl OutputPort for Rig {
    fn set_level(&mut self, _output: OutputId, _high: bool) {}
    fn is_bound(&self, _output: OutputId) -> bool {
        true
    }
}

impl RadarPort for Rig {
    fn has_input(&self, _channel: usize) -> bool {
        true
    }
    fn sample(&mut self, channel: usize) -> u16 {
        (self.0 as usize * 37 + channel * 101) as u16 % 1024
    }
}

impl EntropyPort for Rig {
    fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        self.0
    }
}

struct Discard;

impl EventSink for Discard {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    let mut app = AppService::new(FirmwareConfig::default());
    let mut rig = Rig(1);
    let mut link = Bytes(data.iter().copied().collect());
    app.start(&mut rig, &mut Discard);

    // One frame per cycle; a few extra cycles flush the aggregation window.
    for _ in 0..data.len() / 3 + 25 {
        if app.cycle(&mut rig, &mut link, &mut Discard).restart {
            break;
        }
    }
});
