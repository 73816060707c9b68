//! Application service: the hexagonal core.
//!
//! [`AppService`] owns the cycle clock, the radar signal engine and the
//! command dispatcher.  All I/O flows through port traits injected at call
//! sites, so the whole control loop runs under test with mock adapters.
//!
//! ```text
//!   RadarPort   ──▶ ┌─────────────────────────┐ ──▶ ActuatorPort
//!   Transport   ──▶ │        AppService        │ ──▶ OutputPort
//!   EntropyPort ──▶ │ clock · engine · gate   │ ──▶ EventSink
//!                   └─────────────────────────┘
//! ```
//!
//! One [`cycle`](AppService::cycle):
//!
//! 1. sample every bound radar channel
//! 2. on the aggregation cadence, fold events and emit a report if any scored
//! 3. poll the link for one frame and dispatch it
//! 4. advance the clock

use log::info;

use crate::config::FirmwareConfig;
use crate::protocol::decoder::CommandDecoder;
use crate::protocol::frame::CommandFrame;
use crate::protocol::transport::Transport;
use crate::scheduler::CycleClock;
use crate::sensors::SignalEngine;

use super::commands::Command;
use super::dispatcher::{CommandDispatcher, Effect};
use super::events::AppEvent;
use super::ports::{ActuatorPort, EntropyPort, EventSink, OutputPort, RadarPort};

/// What happened during one cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CycleOutcome {
    /// Frame received this cycle, if any.
    pub frame: Option<CommandFrame>,
    /// A radar report went out.
    pub reported: bool,
    /// The runtime must restart before the next cycle.
    pub restart: bool,
}

pub struct AppService {
    config: FirmwareConfig,
    clock: CycleClock,
    engine: SignalEngine,
    dispatcher: CommandDispatcher,
    decoder: CommandDecoder,
}

impl AppService {
    /// Build the service.  `config` is expected to have passed
    /// [`FirmwareConfig::validate`].
    pub fn new(config: FirmwareConfig) -> Self {
        Self {
            clock: CycleClock::new(config.cycle_wrap),
            engine: SignalEngine::new(&config),
            dispatcher: CommandDispatcher::new(&config),
            decoder: CommandDecoder::new(config.frame_timeout_ms),
            config,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Move the figure to its home pose and announce readiness.
    pub fn start(&mut self, hw: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        self.dispatcher.home(hw);
        self.engine.reset_window();
        sink.emit(&AppEvent::Listening);
        info!("AppService started, armed={}", self.dispatcher.is_armed());
    }

    // ── Per-cycle orchestration ───────────────────────────────

    /// Run one control cycle.
    ///
    /// `hw` carries every hardware port at once, which avoids a double
    /// mutable borrow while keeping the port boundary explicit.
    pub fn cycle<T: Transport>(
        &mut self,
        hw: &mut (impl RadarPort + ActuatorPort + OutputPort + EntropyPort),
        link: &mut T,
        sink: &mut impl EventSink,
    ) -> CycleOutcome {
        let mut outcome = CycleOutcome::default();

        self.engine.measure(hw);

        if self.clock.is_due(self.config.aggregation_interval_cycles) && self.engine.aggregate(hw) {
            sink.emit(&AppEvent::RadarReport(self.engine.scores()));
            self.engine.reset_window();
            outcome.reported = true;
        }

        if let Some(frame) = self.decoder.poll(link, sink) {
            outcome.frame = Some(frame);
            match self.dispatcher.dispatch(Command::from(frame), self.clock.step(), hw, sink) {
                Some(Effect::Restart) => outcome.restart = true,
                Some(Effect::EnableEmulation) => {
                    self.engine.request_emulation();
                }
                None => {}
            }
        }

        self.clock.advance();
        outcome
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn is_armed(&self) -> bool {
        self.dispatcher.is_armed()
    }

    /// Current cycle counter.
    pub fn step(&self) -> u32 {
        self.clock.step()
    }

    pub fn engine(&self) -> &SignalEngine {
        &self.engine
    }

    pub fn config(&self) -> &FirmwareConfig {
        &self.config
    }
}
