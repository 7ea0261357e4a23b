//! Closed form geodesics on the sphere

use super::{Destination, Geodesic};
use crate::math::angular::{self, normalize_symmetric};
use crate::Coor2D;
use std::f64::consts::{PI, TAU};

/// The inverse problem on a sphere of the given radius.
///
/// The distance follows the haversine formulation, which, unlike the
/// spherical law of cosines, stays accurate for small separations.
pub(super) fn inverse(from: Coor2D, to: Coor2D, radius: f64) -> Geodesic {
    // Mean latitude, half the latitude difference, half the longitude difference
    let thm = 0.5 * (to[1] + from[1]);
    let dthm = 0.5 * (to[1] - from[1]);
    let dlamm = 0.5 * angular::difference(from[0], to[0]);

    let (sinthm, costhm) = thm.sin_cos();
    let (sindthm, cosdthm) = dthm.sin_cos();
    let sindlamm = dlamm.sin();

    let hav = sindthm * sindthm + (cosdthm * cosdthm - sinthm * sinthm) * sindlamm * sindlamm;
    let distance = 2. * radius * hav.clamp(0., 1.).sqrt().asin();

    // The azimuths follow from the half-angle formulae of the
    // spherical triangle pole-from-to
    let t = dlamm.tan();
    let u = sindthm.atan2(t * costhm);
    let v = cosdthm.atan2(t * sinthm);
    let azimuth = normalize_symmetric(TAU + v - u);
    let pointing_back = normalize_symmetric(TAU - v - u);

    Geodesic {
        azimuth,
        back_azimuth: normalize_symmetric(pointing_back + PI),
        distance,
        iterations: 0,
    }
}

/// The direct problem on the sphere: the azimuth dependent trigonometry,
/// computed once per geodesic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Setup {
    origin: Coor2D,
    radius: f64,
    sinphi: f64,
    cosphi: f64,
    sinazi: f64,
    cosazi: f64,
}

impl Setup {
    pub(super) fn new(origin: Coor2D, azimuth: f64, radius: f64) -> Setup {
        let (sinphi, cosphi) = origin[1].sin_cos();
        let (sinazi, cosazi) = normalize_symmetric(azimuth).sin_cos();
        Setup {
            origin,
            radius,
            sinphi,
            cosphi,
            sinazi,
            cosazi,
        }
    }

    pub(super) fn advance(&self, distance: f64) -> Destination {
        let (sind, cosd) = (distance / self.radius).sin_cos();

        // The sine of the arrival latitude, and its cosine split along and
        // across the meridian of the origin
        let x = self.cosphi * cosd - self.sinphi * sind * self.cosazi;
        let y = self.sinazi * sind;
        let sinphi2 = self.sinphi * cosd + self.cosphi * sind * self.cosazi;
        let latitude = sinphi2.atan2(x.hypot(y));

        let mut longitude = self.origin[0] + y.atan2(x);
        if longitude.abs() > PI {
            longitude -= TAU.copysign(longitude);
        }

        let back_azimuth = (self.sinazi * self.cosphi)
            .atan2(self.cosphi * cosd * self.cosazi - self.sinphi * sind);

        Destination {
            point: Coor2D::raw(normalize_symmetric(longitude), latitude),
            back_azimuth: normalize_symmetric(back_azimuth),
        }
    }
}

// ----- Tests ---------------------------------------------------------------------
