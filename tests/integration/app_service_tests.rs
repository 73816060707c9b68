//! Integration tests for the link → decoder → dispatcher → actuators path.
//!
//! These run on the host (x86_64) and drive whole control cycles through
//! `AppService` with scripted frames on a mock link.

use crate::mock_hw::{HwCall, MockHardware, RecordingSink, ScriptedLink};

use papaguy::adapters::serial_sink::SerialEventSink;
use papaguy::app::events::AppEvent;
use papaguy::app::ports::OutputId;
use papaguy::app::service::AppService;
use papaguy::config::FirmwareConfig;
use papaguy::motion::{self, Axis};
use papaguy::protocol::frame::CommandFrame;

fn make_app() -> (AppService, MockHardware, ScriptedLink, RecordingSink) {
    let mut app = AppService::new(FirmwareConfig::default());
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    app.start(&mut hw, &mut sink);
    hw.calls.clear();
    sink.events.clear();
    (app, hw, ScriptedLink::new(), sink)
}

// ── Motion ────────────────────────────────────────────────────

#[test]
fn head_rotate_frame_moves_exactly_one_servo() {
    let (mut app, mut hw, mut link, mut sink) = make_app();
    link.push(&[4, 0x02, 0x00]);

    let out = app.cycle(&mut hw, &mut link, &mut sink);

    assert_eq!(out.frame, Some(CommandFrame::new(4, 512)));
    let moves = hw.moves();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].0, Axis::HeadRotate);
    assert_eq!(moves[0].1.units(), 90);
    assert_eq!(sink.events, vec![AppEvent::FrameEcho(CommandFrame::new(4, 512))]);
}

#[test]
fn one_frame_per_cycle() {
    let (mut app, mut hw, mut link, mut sink) = make_app();
    link.push(&[1, 0x01, 0x00, 5, 0x03, 0xFF]);

    app.cycle(&mut hw, &mut link, &mut sink);
    assert_eq!(hw.moves().len(), 1);
    app.cycle(&mut hw, &mut link, &mut sink);
    assert_eq!(
        hw.moves().iter().map(|(a, _)| *a).collect::<Vec<_>>(),
        vec![Axis::BodyTilt, Axis::Beak]
    );
}

#[test]
fn envelope_drives_beak_wings_and_eyes_without_echo() {
    let (mut app, mut hw, mut link, mut sink) = make_app();
    // Cycle 0 is a wings cycle.
    link.push(&[17, 0x03, 0x00]);
    app.cycle(&mut hw, &mut link, &mut sink);

    let axes: Vec<Axis> = hw.moves().iter().map(|(a, _)| *a).collect();
    assert_eq!(axes, vec![Axis::Beak, Axis::Wings]);
    assert_eq!(hw.levels(OutputId::Eyes), vec![true]);
    assert!(sink.events.is_empty(), "envelope frames are not echoed");

    // Cycle 1 is not.
    link.push(&[17, 0x00, 0x64]);
    app.cycle(&mut hw, &mut link, &mut sink);
    let axes: Vec<Axis> = hw.moves().iter().map(|(a, _)| *a).collect();
    assert_eq!(axes, vec![Axis::Beak, Axis::Wings, Axis::Beak]);
    assert_eq!(hw.levels(OutputId::Eyes), vec![true, false]);
}

#[test]
fn fog_without_a_pin_is_a_no_op() {
    let (mut app, mut hw, mut link, mut sink) = make_app();
    link.push(&[23, 0, 1]);
    app.cycle(&mut hw, &mut link, &mut sink);
    assert!(hw.calls.is_empty());
    assert_eq!(sink.events, vec![AppEvent::FrameEcho(CommandFrame::new(23, 1))]);
}

#[test]
fn detached_servos_are_left_alone() {
    let (mut app, mut hw, mut link, mut sink) = make_app();
    hw.detached.extend([Axis::Beak, Axis::Wings]);
    // Cycle 0 would move both beak and wings for an envelope frame.
    link.push(&[17, 0x03, 0x00, 5, 0x01, 0x00]);
    app.cycle(&mut hw, &mut link, &mut sink);
    app.cycle(&mut hw, &mut link, &mut sink);

    assert!(hw.moves().is_empty());
    assert_eq!(hw.levels(OutputId::Eyes), vec![true]);
    assert_eq!(sink.events, vec![AppEvent::FrameEcho(CommandFrame::new(5, 256))]);
}

// ── Arming ────────────────────────────────────────────────────

#[test]
fn disarmed_figure_ignores_motion() {
    let (mut app, mut hw, mut link, mut sink) = make_app();
    link.push(&[125, 0, 0]);
    app.cycle(&mut hw, &mut link, &mut sink);
    link.push(&[1, 0x03, 0xFF]);
    app.cycle(&mut hw, &mut link, &mut sink);

    assert!(!app.is_armed());
    assert!(hw.moves().is_empty());
    assert!(sink.events.contains(&AppEvent::ArmChanged { armed: false }));
}

#[test]
fn reactivate_restores_motion() {
    let (mut app, mut hw, mut link, mut sink) = make_app();
    link.push(&[125, 0, 0, 126, 0, 0, 2, 0x01, 0x00]);
    for _ in 0..3 {
        app.cycle(&mut hw, &mut link, &mut sink);
    }
    assert!(app.is_armed());
    assert_eq!(hw.moves().len(), 1);
    assert_eq!(hw.moves()[0].0, Axis::Wings);
}

#[test]
fn reset_while_disarmed_requests_restart() {
    let (mut app, mut hw, mut link, mut sink) = make_app();
    link.push(&[125, 0, 0, 127, 0, 0]);
    assert!(!app.cycle(&mut hw, &mut link, &mut sink).restart);
    assert!(app.cycle(&mut hw, &mut link, &mut sink).restart);
    assert!(sink.events.contains(&AppEvent::RestartRequested));
}

#[test]
fn is_alive_is_dropped_while_disarmed() {
    let (mut app, mut hw, mut link, mut sink) = make_app();
    link.push(&[125, 0, 0, 63, 0, 0]);
    app.cycle(&mut hw, &mut link, &mut sink);
    app.cycle(&mut hw, &mut link, &mut sink);
    assert!(!sink.events.contains(&AppEvent::Alive));
}

// ── Host-facing text ──────────────────────────────────────────

#[test]
fn wire_transcript_for_boot_alive_and_unknown() {
    let mut app = AppService::new(FirmwareConfig::default());
    let mut hw = MockHardware::new();
    let mut link = ScriptedLink::new();
    let mut sink = SerialEventSink::new(ScriptedLink::new());

    app.start(&mut hw, &mut sink);
    link.push(&[63, 0, 0, 42, 0, 7, 125, 0, 0]);
    for _ in 0..3 {
        app.cycle(&mut hw, &mut link, &mut sink);
    }

    assert_eq!(
        sink.link().written(),
        "PapaGuy is listening.\r\n\
         MESSAGE: 63;0\r\n\
         PapaGuy is listening, yes.\r\n\
         MESSAGE: 42;7\r\n\
         UNKNOWN MESSAGE: 42\r\n\
         MESSAGE: 125;0\r\n"
    );
}

#[test]
fn short_frame_is_dropped() {
    let (mut app, mut hw, mut link, mut sink) = make_app();
    link.push(&[4, 0x02]);
    let out = app.cycle(&mut hw, &mut link, &mut sink);
    assert_eq!(out.frame, None);
    assert!(hw.calls.is_empty());
    assert!(sink.events.is_empty());
}

#[test]
fn boot_homes_every_axis() {
    let mut app = AppService::new(FirmwareConfig::default());
    let mut hw = MockHardware::new();
    let mut sink = RecordingSink::new();
    app.start(&mut hw, &mut sink);

    assert_eq!(sink.events, vec![AppEvent::Listening]);
    assert!(hw.calls.contains(&HwCall::Move(
        Axis::HeadTilt,
        motion::map(Axis::HeadTilt, 512)
    )));
    assert_eq!(hw.moves().len(), Axis::ALL.len());
}
