use climalink_protocol::frame::checksum_digits;
use climalink_protocol::{
    checksum, validate, validate_checksum, Command, Dialect, FrameReceiver, FrameSender,
    SensorId, ValidationError, FRAME_END, FRAME_START,
};
use proptest::prelude::*;

fn framed(body: &[u8], digits: [u8; 3]) -> Vec<u8> {
    let mut frame = vec![FRAME_START];
    frame.extend_from_slice(body);
    frame.push(b'|');
    frame.extend_from_slice(&digits);
    frame.push(FRAME_END);
    frame
}

proptest! {
    #[test]
    fn checksum_accepts_iff_field_matches(body in proptest::collection::vec(any::<u8>(), 0..64), field in 0u16..1000) {
        let sum = checksum(&body);
        let digits = [
            b'0' + (field / 100) as u8,
            b'0' + (field / 10 % 10) as u8,
            b'0' + (field % 10) as u8,
        ];
        let result = validate_checksum(&framed(&body, digits));

        if field == sum as u16 {
            prop_assert_eq!(result, Ok(()));
        } else {
            prop_assert_eq!(result, Err(ValidationError::Checksum));
        }
    }

    #[test]
    fn correct_checksum_always_validates(body in proptest::collection::vec(any::<u8>(), 0..64)) {
        let frame = framed(&body, checksum_digits(checksum(&body)));
        prop_assert_eq!(validate_checksum(&frame), Ok(()));
    }

    #[test]
    fn overflow_self_heals(noise in proptest::collection::vec(any::<u8>().prop_filter("no delimiters", |b| *b != FRAME_START && *b != FRAME_END), 0..200)) {
        let mut rx = FrameReceiver::<16>::new();
        for &byte in &noise {
            prop_assert!(rx.receive_byte(byte).is_none());
            prop_assert!(rx.buffered().len() <= 16);
            prop_assert_eq!(rx.buffered().last(), Some(&byte));
        }

        let mut completed = None;
        for &byte in b"#PT025|059!" {
            if let Some(frame) = rx.receive_byte(byte) {
                completed = Some(frame);
            }
        }

        let frame = completed.expect("frame after noise");
        prop_assert_eq!(&frame[..], &b"#PT025|059!"[..]);
        prop_assert_eq!(
            validate(&frame, Dialect::Standard).map(|r| r.command),
            Ok(Command::Read(SensorId::Temperature))
        );
    }

    #[test]
    fn send_number_matches_decimal(number in any::<u16>()) {
        let mut tx = FrameSender::<8>::new();
        tx.send_number(number);
        let expected = number.to_string();
        prop_assert_eq!(tx.buffered(), expected.as_bytes());
    }

    #[test]
    fn every_valid_target_is_accepted(target in 0u16..=255) {
        let body = format!("A{target:03}");
        let frame = framed(body.as_bytes(), checksum_digits(checksum(body.as_bytes())));
        let request = validate(&frame, Dialect::Standard);
        prop_assert_eq!(request.map(|r| r.target as u16), Ok(target));
    }

    #[test]
    fn out_of_range_targets_are_grammar_errors(target in 256u16..=999) {
        let body = format!("A{target:03}");
        let frame = framed(body.as_bytes(), checksum_digits(checksum(body.as_bytes())));
        prop_assert_eq!(validate(&frame, Dialect::Standard), Err(ValidationError::Grammar));
    }
}

#[test]
fn sender_output_passes_receiver_validation() {
    let mut tx = FrameSender::<64>::new();
    tx.send_bytes(b"#AR");
    tx.send_reading(SensorId::Temperature, 21);
    tx.send_bytes(b">");
    tx.send_reading(SensorId::Humidity, 78);
    tx.send_bytes(b">");
    tx.send_reading(SensorId::Co2, 6942);
    let frame = tx.finish().unwrap();

    assert_eq!(&frame[..frame.len() - 5], b"#AR-29>+78>+6942");
    assert_eq!(validate_checksum(&frame), Ok(()));
}
