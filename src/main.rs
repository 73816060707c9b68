//! PapaGuy firmware: main entry point.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter            UartTransport     SerialEventSink  │
//! │  (Actuator+Output+Radar     (Transport)       + LogEventSink   │
//! │   +Entropy)                                   (EventSink)      │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              AppService (pure logic)                   │    │
//! │  │  CycleClock · SignalEngine · CommandDispatcher         │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! └────────────────────────────────────────────────────────────────┘
//! ```

use anyhow::Result;
use log::{error, info, warn};

use papaguy::adapters::hardware::HardwareAdapter;
use papaguy::adapters::log_sink::LogEventSink;
use papaguy::adapters::serial_sink::SerialEventSink;
use papaguy::adapters::uart::UartTransport;
use papaguy::app::ports::OutputId;
use papaguy::app::service::AppService;
use papaguy::config::FirmwareConfig;
use papaguy::drivers::hw_init::{self, GpioOutput, LedcChannel};
use papaguy::drivers::radar::RadarInputs;
use papaguy::drivers::servo::ServoBank;
use papaguy::drivers::switch::SwitchBank;
use papaguy::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  PapaGuy v{}                         ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = FirmwareConfig::default();
    config.validate()?;
    match serde_json::to_string(&config) {
        Ok(json) => info!("Config: {}", json),
        Err(e) => warn!("Config not serialisable: {}", e),
    }

    // ── 3. Peripherals ────────────────────────────────────────
    if let Err(e) = hw_init::init_peripherals(&config) {
        // Without servos or the link there is nothing useful to do.
        error!("HAL init failed: {}, halting", e);
        return Err(papaguy::error::Error::from(e).into());
    }

    let mut servos = ServoBank::new();
    for (slot, (axis, gpio)) in pins::SERVO_PINS.into_iter().enumerate() {
        if gpio != pins::NO_PIN {
            servos.attach(axis, LedcChannel::new(hw_init::ledc_servo_channel(slot)));
        }
    }

    let mut outputs = SwitchBank::new();
    for (output, gpio) in [
        (OutputId::Eyes, pins::EYE_GPIO),
        (OutputId::Fog, pins::FOG_GPIO),
        (OutputId::DetectIndicator, pins::INDICATOR_GPIO),
    ] {
        if gpio != pins::NO_PIN {
            outputs.bind(output, GpioOutput::new(gpio));
        }
    }

    let mut hw = HardwareAdapter::new(servos, outputs, RadarInputs::from_pins());
    let mut link = UartTransport::new(pins::HOST_UART_PORT);
    let mut sink = (SerialEventSink::new(link), LogEventSink::new());

    // ── 4. Control loop ───────────────────────────────────────
    let period_ms = config.cycle_period_ms;
    let mut app = AppService::new(config);
    app.start(&mut hw, &mut sink);

    loop {
        let outcome = app.cycle(&mut hw, &mut link, &mut sink);
        if outcome.restart {
            info!("Restarting");
            esp_idf_hal::delay::FreeRtos::delay_ms(100);
            // SAFETY: esp_restart never returns; no state needs flushing.
            unsafe { esp_idf_svc::sys::esp_restart() };
        }
        esp_idf_hal::delay::FreeRtos::delay_ms(period_ms);
    }
}
