//! The reciprocity law on the eighth-stop scales.
//!
//! A correct exposure satisfies `A + S = E + I + const`, where every term is
//! in stops: aperture above f/1, shutter speed faster than one minute, film
//! speed above ISO 6 and EV. The constant is pinned by a known exposure,
//! f/22 for one minute at ISO 100 being EV 3. Given any two of aperture,
//! shutter speed and ISO plus an EV, the third follows by addition.
//!
//! The arithmetic is done in [`EvWithFracs`] so that fractional EVs from
//! averaging are carried through, and the result is rounded to the nearest
//! eighth and clamped to its scale.

use crate::types::{Aperture, EvWithFracs, IsoStops, ShutterSpeed, StopScale};

const ANCHOR_APERTURE: Aperture = Aperture::F22;
const ANCHOR_SHUTTER_SPEED: ShutterSpeed = ShutterSpeed::ONE_MINUTE;
const ANCHOR_ISO: IsoStops = IsoStops::ISO_100;
const ANCHOR_EV: EvWithFracs = EvWithFracs::from_stops(3);

/// The quantity to solve for, with the two that are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unknown {
    /// Solve the aperture.
    Aperture {
        /// Known shutter speed.
        shutter_speed: ShutterSpeed,
        /// Known film speed.
        iso: IsoStops,
    },
    /// Solve the shutter speed.
    ShutterSpeed {
        /// Known aperture.
        aperture: Aperture,
        /// Known film speed.
        iso: IsoStops,
    },
    /// Solve the film speed.
    Iso {
        /// Known aperture.
        aperture: Aperture,
        /// Known shutter speed.
        shutter_speed: ShutterSpeed,
    },
}

/// A solved quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Solved {
    /// The aperture for the given shutter speed and ISO.
    Aperture(Aperture),
    /// The shutter speed for the given aperture and ISO.
    ShutterSpeed(ShutterSpeed),
    /// The film speed for the given aperture and shutter speed.
    Iso(IsoStops),
}

fn offset<T: StopScale>(value: T, anchor: T) -> EvWithFracs {
    value.to_fracs() - anchor.to_fracs()
}

/// `E + I - A - S` measured from the anchor exposure, with the unknown term
/// left out. This is what the aperture or shutter speed has to make up, and
/// what the film speed has to give back.
fn balance(
    ev: EvWithFracs,
    aperture: Option<Aperture>,
    shutter_speed: Option<ShutterSpeed>,
    iso: Option<IsoStops>,
) -> EvWithFracs {
    let mut balance = ev - ANCHOR_EV;
    if let Some(iso) = iso {
        balance = balance + offset(iso, ANCHOR_ISO);
    }
    if let Some(aperture) = aperture {
        balance = balance - offset(aperture, ANCHOR_APERTURE);
    }
    if let Some(shutter_speed) = shutter_speed {
        balance = balance - offset(shutter_speed, ANCHOR_SHUTTER_SPEED);
    }
    balance
}

/// Aperture for a shutter speed and ISO at `ev`.
pub fn aperture_given(shutter_speed: ShutterSpeed, iso: IsoStops, ev: EvWithFracs) -> Aperture {
    let balance = balance(ev, None, Some(shutter_speed), Some(iso));
    Aperture::from_fracs(ANCHOR_APERTURE.to_fracs() + balance)
}

/// Shutter speed for an aperture and ISO at `ev`.
pub fn shutter_speed_given(aperture: Aperture, iso: IsoStops, ev: EvWithFracs) -> ShutterSpeed {
    let balance = balance(ev, Some(aperture), None, Some(iso));
    ShutterSpeed::from_fracs(ANCHOR_SHUTTER_SPEED.to_fracs() + balance)
}

/// Film speed for an aperture and shutter speed at `ev`.
pub fn iso_given(aperture: Aperture, shutter_speed: ShutterSpeed, ev: EvWithFracs) -> IsoStops {
    let balance = balance(ev, Some(aperture), Some(shutter_speed), None);
    IsoStops::from_fracs(ANCHOR_ISO.to_fracs() - balance)
}

/// Solve for whichever quantity `unknown` names at the given EV.
pub fn solve(unknown: Unknown, ev: EvWithFracs) -> Solved {
    match unknown {
        Unknown::Aperture { shutter_speed, iso } => {
            Solved::Aperture(aperture_given(shutter_speed, iso, ev))
        }
        Unknown::ShutterSpeed { aperture, iso } => {
            Solved::ShutterSpeed(shutter_speed_given(aperture, iso, ev))
        }
        Unknown::Iso {
            aperture,
            shutter_speed,
        } => Solved::Iso(iso_given(aperture, shutter_speed, ev)),
    }
}
