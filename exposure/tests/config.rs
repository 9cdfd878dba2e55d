//! Meter construction from JSON configuration.

mod common;

use common::{daylight, init_tracing};
use exposure::{Error, Meter, MeterError, Priority, StopScale};

#[test]
fn test_meter_from_json() {
    init_tracing();
    let meter = Meter::from_json(
        r#"{
            "priority": "aperture",
            "iso": "200",
            "aperture": 56,
            "exposure_compensation": -4
        }"#,
    )
    .unwrap();
    assert_eq!(meter.config().priority, Priority::Aperture);
    assert_eq!(meter.iso().index(), 40);

    let reading = meter.read(&daylight());
    assert_eq!(reading.exposure_compensation_string(), "-1/2");
    assert_eq!(reading.aperture_string().unwrap(), "11");
    // Half a stop under EV 14 at ISO 200 and f/11 lands between 1/250
    // and 1/500.
    assert_eq!(reading.shutter_speed_string().unwrap(), "1/375");
}

#[test]
fn test_empty_json_is_default() {
    init_tracing();
    let meter = Meter::from_json("{}").unwrap();
    assert_eq!(meter.config().iso, "100");
    assert_eq!(meter.iso().index(), 32);
}

#[test]
fn test_malformed_json() {
    init_tracing();
    let err = Meter::from_json(r#"{ "priority": "program" }"#).unwrap_err();
    assert!(matches!(err, MeterError::Config(_)), "{err}");
    assert!(err.to_string().starts_with("invalid configuration"));
}

#[test]
fn test_invalid_iso_setting() {
    init_tracing();
    let cases = [
        ("", Error::Empty),
        ("ISO100", Error::InvalidDigit(b'I')),
        ("12345678", Error::TooManyDigits { len: 8, max: 7 }),
    ];
    for (iso, expected) in cases {
        let json = format!(r#"{{ "iso": "{iso}" }}"#);
        match Meter::from_json(&json) {
            Err(MeterError::Core(err)) => assert_eq!(err, expected, "ISO {iso:?}"),
            other => panic!("ISO {iso:?}: expected a parse error, got {other:?}"),
        }
    }
}
