//! Compressed EV tables, one per amplifier stage.
//!
//! Generated from the photodiode model: light current proportional to
//! illuminance, amplifier output `I * R` against a 256-step reference,
//! readings from the voltage offset up, EV in eighths at ISO 100.

use super::EvTable;

/// 0.22 kΩ feedback.
pub(super) const EV_TABLE_X1: EvTable = EvTable {
    abs: [137, 147, 152, 155, 158, 160, 161, 163, 164, 165, 167, 168, 168, 169, 170, 171],
    diffs: [
        0x01, 0x23, 0x45, 0x67, 0x88, 0x9a, 0x74, 0x89,
        0x69, 0x79, 0x99, 0x99, 0xb9, 0xc9, 0x94, 0x99,
    ],
    bit_patterns: [
        0b01111010, 0b11010010, 0b00010010, 0b01001000, 0b00001000, 0b01000010, 0b00010000, 0b01000000,
        0b00000001, 0b00000000, 0b10000000, 0b00100000, 0b00000010, 0b00000000, 0b00000000, 0b00000000,
    ],
};

/// 2.2 kΩ feedback.
pub(super) const EV_TABLE_X10: EvTable = EvTable {
    abs: [112, 121, 126, 130, 132, 134, 136, 138, 139, 140, 141, 142, 143, 144, 145, 146],
    diffs: [
        0x01, 0x23, 0x45, 0x67, 0x88, 0x89, 0x7a, 0xb8,
        0xab, 0xcb, 0x7b, 0xcb, 0xab, 0xb9, 0xbb, 0xbb,
    ],
    bit_patterns: [
        0b01110110, 0b10101010, 0b01010010, 0b00100100, 0b01000100, 0b00100001, 0b00000100, 0b00010000,
        0b01000000, 0b00100000, 0b00000010, 0b00000000, 0b00001000, 0b00000000, 0b00000000, 0b00000000,
    ],
};

/// 22 kΩ feedback.
pub(super) const EV_TABLE_X100: EvTable = EvTable {
    abs: [87, 96, 101, 105, 107, 109, 111, 113, 114, 115, 116, 117, 118, 119, 120, 120],
    diffs: [
        0x01, 0x23, 0x34, 0x56, 0x47, 0x46, 0x89, 0x96,
        0x9a, 0xb9, 0xb9, 0x9c, 0x94, 0x9b, 0x99, 0x89,
    ],
    bit_patterns: [
        0b01101101, 0b10101001, 0b01001001, 0b00100010, 0b00010000, 0b00000010, 0b00001000, 0b00100000,
        0b00000100, 0b00000000, 0b01000000, 0b00000001, 0b10000000, 0b00000000, 0b00000000, 0b00000000,
    ],
};

/// 220 kΩ feedback.
pub(super) const EV_TABLE_X1000: EvTable = EvTable {
    abs: [62, 71, 76, 79, 82, 84, 86, 87, 89, 90, 91, 92, 93, 94, 94, 95],
    diffs: [
        0x01, 0x23, 0x45, 0x67, 0x55, 0x58, 0x9a, 0xbc,
        0x95, 0x9d, 0x9d, 0x95, 0x9c, 0x99, 0x59, 0x9d,
    ],
    bit_patterns: [
        0b01011101, 0b01010101, 0b00100100, 0b10010001, 0b00010001, 0b00001000, 0b01000001, 0b00000100,
        0b00000010, 0b00000000, 0b10000000, 0b00010000, 0b00000001, 0b00100000, 0b00000000, 0b00000000,
    ],
};
