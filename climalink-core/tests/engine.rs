//! End-to-end behaviour of the protocol engine over a captured link

use climalink_core::{
    DispatchError, ProtocolEngine, ProtocolError, Rtdb, RxStatus, SensorBank, HISTORY_CAPACITY,
};
use climalink_hal::UartTx;
use climalink_protocol::{validate_checksum, Dialect, SensorId, UART_BUFFER_SIZE};

#[derive(Default)]
struct Capture {
    frames: Vec<Vec<u8>>,
}

impl UartTx for Capture {
    type Error = std::convert::Infallible;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.frames.push(data.to_vec());
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

fn frames<'a, const RX: usize, const TX: usize>(
    engine: &'a ProtocolEngine<'_, Capture, RX, TX>,
) -> &'a [Vec<u8>] {
    &engine.dispatcher().tx().frames
}

fn fill(sensors: &SensorBank, sensor: SensorId) {
    for _ in 0..HISTORY_CAPACITY {
        sensors.generate(sensor);
    }
}

#[test_log::test]
fn read_temperature_end_to_end() {
    let sensors = SensorBank::new();
    let rtdb = Rtdb::new();
    let mut engine: ProtocolEngine<'_, Capture> =
        ProtocolEngine::new(&sensors, &rtdb, Capture::default(), Dialect::Standard);

    assert_eq!(
        engine.receive_bytes(b"#PT025|059!"),
        Some(Ok(RxStatus::Dispatched))
    );
    assert_eq!(frames(&engine), [b"#PT+35|055!".to_vec()]);
}

#[test_log::test]
fn grammar_rejection_reads_no_sensor() {
    let sensors = SensorBank::new();
    let rtdb = Rtdb::new();
    let mut engine: ProtocolEngine<'_, Capture> =
        ProtocolEngine::new(&sensors, &rtdb, Capture::default(), Dialect::Standard);

    assert_eq!(
        engine.receive_bytes(b"#A1!"),
        Some(Err(ProtocolError::GrammarInvalid))
    );
    assert!(frames(&engine).is_empty());
    for sensor in SensorId::ALL {
        assert!(sensors.with(sensor, |h| h.is_empty()));
    }

    // The next read still starts at the head of the table
    engine.receive_bytes(b"#PT025|059!");
    assert_eq!(frames(&engine), [b"#PT+35|055!".to_vec()]);
}

#[test_log::test]
fn checksum_mismatch_is_dropped_silently() {
    let sensors = SensorBank::new();
    let rtdb = Rtdb::new();
    let mut engine: ProtocolEngine<'_, Capture> =
        ProtocolEngine::new(&sensors, &rtdb, Capture::default(), Dialect::Standard);

    assert_eq!(
        engine.receive_bytes(b"#PT025|163!"),
        Some(Err(ProtocolError::ChecksumMismatch))
    );
    assert!(frames(&engine).is_empty());
    assert!(sensors.with(SensorId::Temperature, |h| h.is_empty()));
}

#[test_log::test]
fn list_all_waits_for_every_history() {
    let sensors = SensorBank::new();
    let rtdb = Rtdb::new();
    let mut engine: ProtocolEngine<'_, Capture> =
        ProtocolEngine::new(&sensors, &rtdb, Capture::default(), Dialect::Standard);

    fill(&sensors, SensorId::Temperature);
    fill(&sensors, SensorId::Humidity);
    assert_eq!(
        engine.receive_bytes(b"#L000|220!"),
        Some(Err(ProtocolError::InsufficientHistory))
    );
    assert!(frames(&engine).is_empty());

    // A single full history can still be listed
    assert_eq!(
        engine.receive_bytes(b"#LT000|048!"),
        Some(Ok(RxStatus::Dispatched))
    );

    fill(&sensors, SensorId::Co2);
    assert_eq!(
        engine.receive_bytes(b"#L000|220!"),
        Some(Ok(RxStatus::Dispatched))
    );

    let listing = &frames(&engine)[1];
    assert!(listing.starts_with(b"#LR+35-29-2+54+31+32-42-15+24+9+23-10-0+14-18-27+7-40+36-43>+64+78"));
    assert_eq!(listing.iter().filter(|&&b| b == b'>').count(), 2);
    assert_eq!(validate_checksum(listing), Ok(()));
}

#[test_log::test]
fn list_one_keeps_the_newest_twenty() {
    let sensors = SensorBank::new();
    let rtdb = Rtdb::new();
    let mut engine: ProtocolEngine<'_, Capture> =
        ProtocolEngine::new(&sensors, &rtdb, Capture::default(), Dialect::Standard);

    for _ in 0..HISTORY_CAPACITY + 1 {
        sensors.generate(SensorId::Co2);
    }

    // "LC000" sums to 287 -> 031
    assert_eq!(
        engine.receive_bytes(b"#LC000|031!"),
        Some(Ok(RxStatus::Dispatched))
    );
    let listing = &frames(&engine)[0];
    assert!(listing.starts_with(b"#LC+6942+17760"));
    assert_eq!(validate_checksum(listing), Ok(()));
}

#[test_log::test]
fn reset_clears_without_response() {
    let sensors = SensorBank::new();
    let rtdb = Rtdb::new();
    let mut engine: ProtocolEngine<'_, Capture> =
        ProtocolEngine::new(&sensors, &rtdb, Capture::default(), Dialect::Standard);

    for sensor in SensorId::ALL {
        fill(&sensors, sensor);
    }

    assert_eq!(
        engine.receive_bytes(b"#RH000|042!"),
        Some(Ok(RxStatus::Dispatched))
    );
    assert!(!sensors.is_full(SensorId::Humidity));
    assert!(sensors.is_full(SensorId::Temperature));

    assert_eq!(
        engine.receive_bytes(b"#R000|226!"),
        Some(Ok(RxStatus::Dispatched))
    );
    for sensor in SensorId::ALL {
        assert!(!sensors.is_full(sensor));
    }
    assert!(frames(&engine).is_empty());

    // History lookups fail after the reset
    assert!(sensors
        .with(SensorId::Temperature, |h| h.get_history(1))
        .is_err());
}

#[test_log::test]
fn overflow_then_valid_frame() {
    let sensors = SensorBank::new();
    let rtdb = Rtdb::new();
    let mut engine: ProtocolEngine<'_, Capture, UART_BUFFER_SIZE> =
        ProtocolEngine::new(&sensors, &rtdb, Capture::default(), Dialect::Standard);

    let noise = vec![b'x'; UART_BUFFER_SIZE * 3];
    assert_eq!(engine.receive_bytes(&noise), None);
    assert_eq!(engine.stats().rx_overflows, 2);

    assert_eq!(
        engine.receive_bytes(b"#PT025|059!"),
        Some(Ok(RxStatus::Dispatched))
    );
    assert_eq!(frames(&engine), [b"#PT+35|055!".to_vec()]);
}

#[test_log::test]
fn partial_frame_is_discarded_by_start() {
    let sensors = SensorBank::new();
    let rtdb = Rtdb::new();
    let mut engine: ProtocolEngine<'_, Capture> =
        ProtocolEngine::new(&sensors, &rtdb, Capture::default(), Dialect::Standard);

    assert_eq!(engine.receive_bytes(b"#PH0#PT025|059!"), Some(Ok(RxStatus::Dispatched)));
    assert_eq!(frames(&engine), [b"#PT+35|055!".to_vec()]);
    assert!(sensors.with(SensorId::Humidity, |h| h.is_empty()));
}

#[test_log::test]
fn hardware_dialect_round_trip() {
    let sensors = SensorBank::new();
    let rtdb = Rtdb::new();
    let mut engine: ProtocolEngine<'_, Capture> =
        ProtocolEngine::new(&sensors, &rtdb, Capture::default(), Dialect::Hardware);

    // Switch LED 2 on, then read the LED block back
    assert_eq!(
        engine.receive_bytes(b"#O2001|018!"),
        Some(Ok(RxStatus::Dispatched))
    );
    assert_eq!(rtdb.led(2), Ok(true));

    engine.receive_bytes(b"#D000|212!");
    rtdb.set_button(0, true).unwrap();
    engine.receive_bytes(b"#B000|210!");

    let sent = frames(&engine);
    assert_eq!(sent.len(), 3);
    assert!(sent[0].starts_with(b"#O21|"));
    assert!(sent[1].starts_with(b"#D0010|"));
    assert!(sent[2].starts_with(b"#B1000|"));
    for frame in sent {
        assert_eq!(validate_checksum(frame), Ok(()));
    }
}

#[test]
fn letter_level_dispatch_reports_unknown_sensor() {
    let sensors = SensorBank::new();
    let rtdb = Rtdb::new();
    let mut engine: ProtocolEngine<'_, Capture> =
        ProtocolEngine::new(&sensors, &rtdb, Capture::default(), Dialect::Standard);

    let dispatcher = engine.dispatcher_mut();
    assert_eq!(
        dispatcher.read_sensor(b'W'),
        Err(DispatchError::UnknownSensor(b'W'))
    );
    assert_eq!(
        ProtocolError::from(DispatchError::UnknownSensor(b'W')),
        ProtocolError::UnknownSensor(b'W')
    );
    assert!(frames(&engine).is_empty());
}
