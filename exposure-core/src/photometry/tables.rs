//! Packed display tables for shutter speeds and apertures.
//!
//! Both tables store characters as 4-bit symbol indices, two per byte, the
//! low nibble first. A zero nibble ends a string early.

/// Shutter speed symbols. `A` and `B` stand for the denominators 16 and 32.
pub(super) const SHUTTER_SPEED_SYMBOLS: [u8; 16] = [
    0, b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9', b'/', b'+', b'-', b'A', b'B',
];

/// Symbols per shutter speed entry.
pub(super) const SHUTTER_SPEED_SYMBOL_COUNT: usize = 5;

/// Five symbols per speed for indices 0 (one minute) to 160 (1/16000),
/// packed back to back. From 1/1000 on the trailing zeros are implied.
pub(super) const SHUTTER_SPEEDS: [u8; 403] = [
    0x02, 0x00, 0x60, 0x08, 0x00, 0x46, 0x00, 0x50, 0x0a, 0x00, 0x65, 0x00,
    0x50, 0x03, 0x00, 0x94, 0x00, 0x40, 0x05, 0x00, 0x14, 0x00, 0x30, 0x09,
    0x00, 0x73, 0x00, 0x30, 0x05, 0x00, 0x43, 0x00, 0x30, 0x02, 0x00, 0xa2,
    0x00, 0x20, 0x08, 0x00, 0x62, 0x00, 0x20, 0x06, 0x00, 0x52, 0x00, 0x20,
    0x04, 0x00, 0x32, 0x00, 0x20, 0x02, 0x00, 0x12, 0x00, 0xa0, 0x00, 0x00,
    0x09, 0x00, 0x90, 0xbd, 0x05, 0xc8, 0x3b, 0x80, 0x00, 0x00, 0x07, 0x00,
    0x60, 0xbc, 0x03, 0x06, 0x00, 0x50, 0xbc, 0x03, 0x05, 0x00, 0x40, 0xbc,
    0x03, 0xc4, 0x3b, 0x40, 0xbc, 0x05, 0x04, 0x00, 0x30, 0xbc, 0x05, 0xc3,
    0x3b, 0x30, 0xbc, 0x05, 0x03, 0x00, 0x30, 0x00, 0x00, 0xd3, 0x5b, 0x20,
    0xbc, 0x03, 0xc2, 0x3b, 0x20, 0xbc, 0x03, 0xc2, 0x5b, 0x20, 0xbc, 0x09,
    0x02, 0x00, 0x20, 0x00, 0x00, 0x02, 0x00, 0x20, 0x00, 0x00, 0xb4, 0x05,
    0x40, 0x5b, 0x00, 0xb4, 0x05, 0x40, 0x5b, 0x00, 0x3b, 0x00, 0xb0, 0x03,
    0x00, 0x3b, 0xbd, 0xbe, 0xc5, 0x9b, 0x5b, 0xbc, 0xb9, 0xc5, 0xeb, 0x5b,
    0xbc, 0xbe, 0x05, 0x00, 0x5b, 0x00, 0xb0, 0x05, 0x00, 0x9b, 0xbc, 0xbe,
    0xc9, 0xeb, 0x9b, 0xbc, 0xbe, 0xc9, 0xeb, 0x9b, 0xbc, 0xbf, 0x09, 0x00,
    0x9b, 0x00, 0xb0, 0x0a, 0x00, 0x2b, 0x01, 0xb0, 0x22, 0x00, 0x2b, 0x03,
    0xb0, 0x42, 0x00, 0x2b, 0x05, 0xb0, 0x62, 0x00, 0x2b, 0x06, 0xb0, 0x82,
    0x00, 0x2b, 0x0a, 0xb0, 0x23, 0x00, 0x3b, 0x04, 0xb0, 0x63, 0x00, 0x3b,
    0x08, 0xb0, 0x93, 0x00, 0x4b, 0x01, 0xb0, 0x54, 0x00, 0x4b, 0x09, 0xb0,
    0x35, 0x00, 0x5b, 0x06, 0xb0, 0xa5, 0x00, 0x6b, 0x04, 0xb0, 0x76, 0x00,
    0x7b, 0x01, 0xb0, 0x97, 0x00, 0x8b, 0x06, 0xb0, 0x49, 0x00, 0xab, 0x01,
    0xb0, 0x9a, 0x00, 0x2b, 0x61, 0xb0, 0x22, 0x04, 0x2b, 0x63, 0xb0, 0x52,
    0x02, 0x2b, 0x76, 0xb0, 0x82, 0x03, 0x2b, 0x99, 0xb0, 0x13, 0x05, 0x3b,
    0xa2, 0xb0, 0x43, 0x06, 0x3b, 0x16, 0xb0, 0x93, 0x02, 0x4b, 0x42, 0xb0,
    0x54, 0x05, 0x4b, 0x68, 0xb0, 0x15, 0x07, 0x5b, 0x94, 0xb0, 0x75, 0x0a,
    0x6b, 0x11, 0xb0, 0x76, 0x04, 0x7b, 0x63, 0xb0, 0x97, 0x09, 0x8b, 0x16,
    0xb0, 0x29, 0x04, 0x9b, 0x68, 0xb0, 0x4a, 0x09, 0x2b, 0x11, 0xb0, 0x22,
    0x01, 0x2b, 0x63, 0xb0, 0x42, 0x09, 0x2b, 0x16, 0xb0, 0x72, 0x04, 0x2b,
    0x68, 0xb0, 0x92, 0x09, 0x3b, 0x11, 0xb0, 0x33, 0x06, 0x3b, 0x16, 0xb0,
    0x83, 0x06, 0x4b, 0x11, 0xb0, 0x34, 0x06, 0x4b, 0x16, 0xb0, 0x84, 0x06,
    0x5b, 0x11, 0xb0, 0x65, 0x01, 0x6b, 0x11, 0xb0, 0x66, 0x01, 0x7b, 0x11,
    0xb0, 0x67, 0x01, 0x8b, 0x11, 0xb0, 0x68, 0x01, 0x9b, 0x11, 0xb0, 0x1a,
    0x01, 0x2b, 0x11, 0xb0, 0x22, 0x01, 0x2b, 0x13, 0xb0, 0x42, 0x01, 0x2b,
    0x15, 0xb0, 0x62, 0x01, 0x2b, 0x17, 0x00,
];

/// Aperture symbols.
pub(super) const APERTURE_SYMBOLS: [u8; 11] =
    [0, b'0', b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8', b'9'];

/// Two symbols per quarter stop from f/1 to f/32, without decimal points.
pub(super) const APERTURES: [u8; 41] = [
    0x12, 0x22, 0x32, 0x42, 0x52, 0x62, 0x82, 0x92, 0x03, 0x33, 0x53, 0x73,
    0x93, 0x24, 0x54, 0x84, 0x05, 0x55, 0x95, 0x36, 0x76, 0x37, 0x87, 0x48,
    0x09, 0x89, 0x6a, 0x12, 0x22, 0x32, 0x52, 0x62, 0x72, 0x82, 0xa2, 0x23,
    0x33, 0x53, 0x83, 0x14, 0x34,
];
