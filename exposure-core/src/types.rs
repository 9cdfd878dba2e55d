//! Core types shared by the BCD engine, photometry and sensor lookup.

use core::fmt;
use core::ops::{Add, Neg, Sub};

use thiserror::Error;

use crate::limits;

/// Errors that can occur while reading decimal input.
///
/// Capacity violations inside the engine are programming errors and panic
/// instead; see the `# Panics` sections of the individual operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A digit value outside `0..=9` (or a non-digit ASCII byte).
    #[error("invalid decimal digit: {0:#04x}")]
    InvalidDigit(u8),

    /// The number has more significant digits than the buffer can hold.
    #[error("too many digits: {len} (maximum {max})")]
    TooManyDigits {
        /// Significant digits in the input.
        len: usize,
        /// Capacity of the destination buffer.
        max: usize,
    },

    /// No digits at all.
    #[error("empty digit string")]
    Empty,
}

/// Result type for exposure core operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Which quantity the photographer fixes when the meter solves an exposure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Priority {
    /// Report the EV only.
    None,
    /// Fixed shutter speed, solve the aperture.
    #[default]
    Shutter,
    /// Fixed aperture, solve the shutter speed.
    Aperture,
}

/// Display precision for stop fractions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PrecisionMode {
    /// Whole stops.
    Full,
    /// Half stops.
    Half,
    /// Third stops.
    Third,
    /// Quarter stops.
    Quarter,
    /// Eighth stops (the native table resolution).
    #[default]
    Eighth,
    /// Tenth stops.
    Tenth,
}

impl PrecisionMode {
    /// Number of steps per stop.
    pub const fn divisions(self) -> i32 {
        match self {
            PrecisionMode::Full => 1,
            PrecisionMode::Half => 2,
            PrecisionMode::Third => 3,
            PrecisionMode::Quarter => 4,
            PrecisionMode::Eighth => 8,
            PrecisionMode::Tenth => 10,
        }
    }

    /// Step size in [`EvWithFracs`] units.
    pub const fn step(self) -> i32 {
        EvWithFracs::UNITS_PER_STOP / self.divisions()
    }
}

// ============================================================================
// Fixed-point stops
// ============================================================================

/// Divide rounding half up (towards positive infinity on ties).
const fn div_round_half_up(value: i32, divisor: i32) -> i32 {
    (2 * value + divisor).div_euclid(2 * divisor)
}

/// A log2-domain photographic quantity in 1/120ths of a stop.
///
/// 120 is divisible by 8, 10 and 3, so eighth, tenth and third stop values
/// are all exact. As an EV, zero is EV 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct EvWithFracs(i32);

impl EvWithFracs {
    /// Units in one stop.
    pub const UNITS_PER_STOP: i32 = 120;
    /// Units in one eighth of a stop.
    pub const UNITS_PER_EIGHTH: i32 = 15;
    /// Units in one tenth of a stop.
    pub const UNITS_PER_TENTH: i32 = 12;

    /// Zero stops.
    pub const ZERO: Self = Self(0);

    /// Wrap a raw unit count.
    pub const fn from_units(units: i32) -> Self {
        Self(units)
    }

    /// Whole stops.
    pub const fn from_stops(stops: i32) -> Self {
        Self(stops * Self::UNITS_PER_STOP)
    }

    /// Eighths of a stop.
    pub const fn from_eighths(eighths: i32) -> Self {
        Self(eighths * Self::UNITS_PER_EIGHTH)
    }

    /// Tenths of a stop.
    pub const fn from_tenths(tenths: i32) -> Self {
        Self(tenths * Self::UNITS_PER_TENTH)
    }

    /// Raw unit count.
    pub const fn units(self) -> i32 {
        self.0
    }

    /// Value in eighths, rounded half up.
    pub const fn eighths(self) -> i32 {
        div_round_half_up(self.0, Self::UNITS_PER_EIGHTH)
    }

    /// Value in tenths, rounded half up.
    pub const fn tenths(self) -> i32 {
        div_round_half_up(self.0, Self::UNITS_PER_TENTH)
    }

    /// Whole stops, rounded towards negative infinity.
    pub const fn wholes(self) -> i32 {
        self.0.div_euclid(Self::UNITS_PER_STOP)
    }

    /// Fraction above [`wholes`](Self::wholes), in units (`0..120`).
    pub const fn fraction_units(self) -> i32 {
        self.0.rem_euclid(Self::UNITS_PER_STOP)
    }

    /// Round to the nearest step of `mode`, ties rounding up.
    pub const fn round_to(self, mode: PrecisionMode) -> Self {
        let step = mode.step();
        Self(div_round_half_up(self.0, step) * step)
    }

    /// Rounded mean of `values`, or `None` for an empty slice.
    pub fn average(values: &[EvWithFracs]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let sum: i64 = values.iter().map(|v| i64::from(v.0)).sum();
        let n = values.len() as i64;
        let mean = (2 * sum + n).div_euclid(2 * n);
        Some(Self(mean as i32))
    }
}

impl Add for EvWithFracs {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for EvWithFracs {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Neg for EvWithFracs {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

// ============================================================================
// Eighth-stop quantities
// ============================================================================

/// An exposure quantity stored as an eighth-stop index in a `u8`.
///
/// Constructors clamp to `0..=MAX`; values never wrap.
pub trait StopScale: Copy {
    /// Largest representable index.
    const MAX: u8;

    /// Eighths of a stop that index 0 sits above the zero of
    /// [`EvWithFracs`].
    const ZERO_EIGHTHS: i32 = 0;

    /// Build from an index, clamping to [`MAX`](Self::MAX).
    fn new(index: u8) -> Self;

    /// The eighth-stop index.
    fn index(self) -> u8;

    /// Build from a signed eighth-stop index, clamping to the valid range.
    fn clamped(eighths: i32) -> Self {
        Self::new(eighths.clamp(0, i32::from(Self::MAX)) as u8)
    }

    /// Convert to the shared fixed-point scale.
    fn to_fracs(self) -> EvWithFracs {
        EvWithFracs::from_eighths(i32::from(self.index()) - Self::ZERO_EIGHTHS)
    }

    /// Nearest index to `value`, clamped.
    fn from_fracs(value: EvWithFracs) -> Self {
        Self::clamped((value + EvWithFracs::from_eighths(Self::ZERO_EIGHTHS)).eighths())
    }
}

/// Aperture: 0 is f/1, each step an eighth stop, 80 is f/32.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Aperture(u8);

impl Aperture {
    /// f/1.
    pub const F1: Self = Self(0);
    /// f/2.8.
    pub const F2_8: Self = Self(24);
    /// f/8.
    pub const F8: Self = Self(48);
    /// f/9.5, the last aperture drawn with a decimal point.
    pub const F9_5: Self = Self(52);
    /// f/11.
    pub const F11: Self = Self(56);
    /// f/22.
    pub const F22: Self = Self(72);
    /// f/32.
    pub const F32: Self = Self(limits::APERTURE_MAX);
}

impl StopScale for Aperture {
    const MAX: u8 = limits::APERTURE_MAX;

    fn new(index: u8) -> Self {
        Self(index.min(Self::MAX))
    }

    fn index(self) -> u8 {
        self.0
    }
}

/// Shutter speed: 0 is one minute, each step an eighth stop faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ShutterSpeed(u8);

impl ShutterSpeed {
    /// One minute.
    pub const ONE_MINUTE: Self = Self(0);
    /// Eight seconds.
    pub const EIGHT_SECONDS: Self = Self(24);
    /// One second.
    pub const ONE_SECOND: Self = Self(48);
    /// 1/8 s.
    pub const EIGHTH: Self = Self(64);
    /// 1/15 s.
    pub const FIFTEENTH: Self = Self(80);
    /// 1/125 s.
    pub const S125TH: Self = Self(104);
    /// 1/1000 s.
    pub const THOUSANDTH: Self = Self(128);
    /// 1/8000 s.
    pub const S8000TH: Self = Self(152);
    /// 1/10000 s.
    pub const TEN_THOUSANDTH: Self = Self(154);
    /// 1/16000 s.
    pub const S16000TH: Self = Self(limits::SHUTTER_SPEED_MAX);
}

impl StopScale for ShutterSpeed {
    const MAX: u8 = limits::SHUTTER_SPEED_MAX;

    fn new(index: u8) -> Self {
        Self(index.min(Self::MAX))
    }

    fn index(self) -> u8 {
        self.0
    }
}

/// Film speed: 0 is ISO 6, each step an eighth stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IsoStops(u8);

impl IsoStops {
    /// ISO 6.
    pub const ISO_6: Self = Self(0);
    /// ISO 100.
    pub const ISO_100: Self = Self(32);
    /// ISO 1 600 000.
    pub const ISO_1600000: Self = Self(limits::ISO_MAX);
}

impl StopScale for IsoStops {
    const MAX: u8 = limits::ISO_MAX;

    fn new(index: u8) -> Self {
        Self(index.min(Self::MAX))
    }

    fn index(self) -> u8 {
        self.0
    }
}

/// EV at ISO 100 as stored by the sensor tables: 0 is EV -5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ev(u8);

impl Ev {
    /// Index of EV 0.
    pub const EV0_INDEX: u8 = 40;

    /// A whole EV, clamped.
    pub fn from_whole(ev: i32) -> Self {
        Self::clamped((ev + 5) * 8)
    }
}

impl StopScale for Ev {
    const MAX: u8 = limits::EV_MAX;
    const ZERO_EIGHTHS: i32 = Ev::EV0_INDEX as i32;

    fn new(index: u8) -> Self {
        Self(index.min(Self::MAX))
    }

    fn index(self) -> u8 {
        self.0
    }
}

// ============================================================================
// Output strings
// ============================================================================

/// Fixed-capacity ASCII string with an explicit length.
///
/// Display strings never need more than a handful of bytes, so they live on
/// the stack.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AsciiBuf<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> AsciiBuf<N> {
    /// Empty string.
    pub const fn new() -> Self {
        Self {
            bytes: [0; N],
            len: 0,
        }
    }

    /// Append one ASCII byte.
    ///
    /// # Panics
    ///
    /// If the buffer is full or `byte` is not ASCII.
    pub fn push(&mut self, byte: u8) {
        assert!(byte.is_ascii(), "non-ASCII byte {byte:#04x}");
        assert!(self.len < N, "string exceeds its {N}-byte capacity");
        self.bytes[self.len] = byte;
        self.len += 1;
    }

    /// Append every byte of `s`.
    ///
    /// # Panics
    ///
    /// As [`push`](Self::push).
    pub fn push_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.push(b);
        }
    }

    /// Append a decimal digit value (`0..=9`).
    pub fn push_digit(&mut self, digit: u8) {
        debug_assert!(digit < 10);
        self.push(b'0' + digit);
    }

    /// Append an unsigned integer in decimal.
    pub fn push_u32(&mut self, mut value: u32) {
        let mut tmp = [0u8; 10];
        let mut n = 0;
        loop {
            tmp[n] = (value % 10) as u8;
            n += 1;
            value /= 10;
            if value == 0 {
                break;
            }
        }
        for &d in tmp[..n].iter().rev() {
            self.push_digit(d);
        }
    }

    /// Bytes written so far.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// The string.
    pub fn as_str(&self) -> &str {
        // Only ASCII is ever pushed.
        core::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Capacity in bytes.
    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for AsciiBuf<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Debug for AsciiBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_str(), f)
    }
}

impl<const N: usize> fmt::Display for AsciiBuf<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl<const N: usize> PartialEq<str> for AsciiBuf<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl<const N: usize> PartialEq<&str> for AsciiBuf<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}
