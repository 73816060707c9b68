//! Radar aggregation through the full control cycle.

use crate::mock_hw::{MockHardware, RecordingSink, ScriptedLink};

use papaguy::adapters::serial_sink::SerialEventSink;
use papaguy::app::ports::OutputId;
use papaguy::app::service::AppService;
use papaguy::config::FirmwareConfig;

fn run(app: &mut AppService, hw: &mut MockHardware, sink: &mut RecordingSink, cycles: usize) -> Vec<usize> {
    let mut link = ScriptedLink::new();
    (0..cycles)
        .filter(|_| app.cycle(&mut *hw, &mut link, &mut *sink).reported)
        .collect()
}

#[test]
fn steady_radar_never_reports() {
    let mut app = AppService::new(FirmwareConfig::default());
    let mut hw = MockHardware::wired();
    let mut sink = RecordingSink::new();
    hw.radar[2] = 1023;

    assert!(run(&mut app, &mut hw, &mut sink, 400).is_empty());
    assert!(sink.reports().is_empty());
    assert!(hw.levels(OutputId::DetectIndicator).iter().all(|lit| !lit));
}

#[test]
fn approach_is_reported_once_at_the_next_window() {
    let mut app = AppService::new(FirmwareConfig::default());
    let mut hw = MockHardware::wired();
    let mut sink = RecordingSink::new();

    hw.radar[2] = 100;
    assert!(run(&mut app, &mut hw, &mut sink, 30).is_empty());

    // Opens at cycle 30, closes at 49 once the history is flat; the window
    // boundary at step 60 picks it up.
    hw.radar[2] = 830;
    let reported_at = run(&mut app, &mut hw, &mut sink, 70);
    assert_eq!(reported_at, vec![30]);
    assert_eq!(sink.reports(), vec![[0, 0, 13, 0, 0]]);

    let lit = hw.levels(OutputId::DetectIndicator);
    assert_eq!(lit.iter().filter(|l| **l).count(), 13);
}

#[test]
fn emulated_report_rides_the_next_window() {
    let mut app = AppService::new(FirmwareConfig::default());
    let mut hw = MockHardware::new();
    let mut link = ScriptedLink::new();
    let mut sink = SerialEventSink::new(ScriptedLink::new());

    // hit channel 3: +1 + 5 % 9 on ch3, +2 % 4 on ch2, +7 % 4 on ch4
    hw.draws.extend([3, 5, 2, 7]);
    link.push(&[101, 0, 0]);

    let reported: Vec<usize> = (0..41)
        .filter(|_| app.cycle(&mut hw, &mut link, &mut sink).reported)
        .collect();

    assert_eq!(reported, vec![20]);
    assert!(!app.engine().is_emulating());
    assert_eq!(
        sink.link().written(),
        "MESSAGE: 101;0\r\nRADAR!0;0;2;6;3;\r\n"
    );
}

#[test]
fn missed_emulation_draw_still_reports_real_events() {
    let mut app = AppService::new(FirmwareConfig::default());
    let mut hw = MockHardware::wired();
    let mut link = ScriptedLink::new();
    let mut sink = RecordingSink::new();

    hw.radar[2] = 100;
    for _ in 0..30 {
        app.cycle(&mut hw, &mut link, &mut sink);
    }

    // Every draw misses the five channels.
    hw.draws.extend([50; 8]);
    hw.radar[2] = 830;
    link.push(&[101, 0, 0]);
    let reported: Vec<usize> = (0..40)
        .filter(|_| app.cycle(&mut hw, &mut link, &mut sink).reported)
        .collect();

    assert_eq!(reported, vec![30]);
    assert_eq!(sink.reports(), vec![[0, 0, 13, 0, 0]]);
    assert!(!app.engine().is_emulating());
}

#[test]
fn emulation_request_is_dropped_while_disarmed() {
    let mut app = AppService::new(FirmwareConfig::default());
    let mut hw = MockHardware::new();
    let mut link = ScriptedLink::new();
    let mut sink = RecordingSink::new();
    hw.draws.extend([0, 0, 0]);
    link.push(&[125, 0, 0, 101, 0, 0]);

    for _ in 0..45 {
        app.cycle(&mut hw, &mut link, &mut sink);
    }
    assert!(sink.reports().is_empty());
}
