//! The direct geodesic problem on the ellipsoid, by the non-iterative
//! series expansion of [Thomas (1970)](crate::Bibliography::Tho70), as
//! arranged in the `geod_for` routine of the PROJ `geod` program.
//!
//! The azimuth dependent coefficients are computed once, by [`Setup::new`],
//! so points along the same geodesic come at the price of the series only.
//! Accuracy is at the centimeter level for intercontinental distances.

use super::Destination;
use crate::math::angular::normalize_symmetric;
use crate::{Coor2D, Ellipsoid};
use std::f64::consts::{FRAC_PI_2, PI};

/// Azimuths with a sine smaller than this are taken as meridional
const MERIDIAN_TOLERANCE: f64 = 1e-9;

/// The direct problem on the ellipsoid: the azimuth dependent part
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Setup {
    origin: Coor2D,
    // Normalized forward azimuth
    azimuth: f64,
    a: f64,
    onef: f64,
    // Heading south: the series runs backwards
    southbound: bool,
    meridian: bool,
    sinth1: f64,
    costh1: f64,
    sina: f64,
    cosa: f64,
    // Cosine of the latitude of the vertex, and the meridional component
    m: f64,
    n: f64,
    c1: f64,
    c2: f64,
    d: f64,
    p: f64,
    // Arc from the equator crossing to the origin, on the auxiliary sphere
    s1: f64,
}

impl Setup {
    #[allow(clippy::many_single_char_names)]
    pub(super) fn new(origin: Coor2D, azimuth: f64, ellps: &Ellipsoid) -> Setup {
        let f = ellps.flattening();
        let f4 = ellps.quarter_flattening();
        let onef = ellps.aspect_ratio();

        let azimuth = normalize_symmetric(azimuth);
        let southbound = azimuth.abs() > FRAC_PI_2;

        let th1 = ellps.reduced_latitude(origin[1]);
        let (sinth1, costh1) = th1.sin_cos();

        let mut sina = azimuth.sin();
        let meridian = sina.abs() < MERIDIAN_TOLERANCE;
        let (cosa, m) = if meridian {
            sina = 0.;
            (if southbound { -1. } else { 1. }, 0.)
        } else {
            (azimuth.cos(), costh1 * sina)
        };
        let n = costh1 * cosa;

        let (c1, c2, d, p) = if meridian {
            let c2 = f4;
            let d = (1. - c2) * (1. - c2);
            (0., c2, d, c2 / d)
        } else {
            let c1 = f * m;
            let c2 = f4 * (1. - m * m);
            let d = (1. - c2) * (1. - c2 - c1 * m);
            (c1, c2, d, (1. + 0.5 * c1 * m) * c2 / d)
        };

        // Arc from the vertex to the origin: acos(sin θ₁ / sin(acos M)), in a
        // form that keeps its precision near the poles
        let s1 = if meridian {
            FRAC_PI_2 - th1
        } else {
            n.abs().atan2(sinth1)
        };

        Setup {
            origin,
            azimuth,
            a: ellps.semimajor_axis(),
            onef,
            southbound,
            meridian,
            sinth1,
            costh1,
            sina,
            cosa,
            m,
            n,
            c1,
            c2,
            d,
            p,
            s1,
        }
    }

    pub(super) fn advance(&self, distance: f64) -> Destination {
        // Arc length on the auxiliary sphere, and its correction
        let mut d = distance / (self.d * self.a);
        if self.southbound {
            d = -d;
        }
        let u = 2. * (self.s1 - d);
        let v = (u + d).cos();
        let (sind, cosd) = d.sin_cos();
        let x = self.c2 * self.c2 * sind * cosd * (2. * v * v - 1.);
        let ds = d + x - 2. * self.p * v * (1. - 2. * self.p * u.cos()) * sind;
        let ss = self.s1 + self.s1 - ds;

        let (mut sinds, cosds) = ds.sin_cos();
        if self.southbound {
            sinds = -sinds;
        }

        // The azimuth at the destination, pointing back toward the origin
        let cosback = self.n * cosds - self.sinth1 * sinds;

        let (back, latitude, dlam) = if self.meridian {
            let lat = ((FRAC_PI_2 + self.s1 - ds).tan() / self.onef).atan();
            // Passing a pole flips the longitude by π
            match (cosback > 0., self.southbound) {
                (true, true) => (PI, lat, PI),
                (true, false) => (PI, -lat, 0.),
                (false, true) => (0., -lat, 0.),
                (false, false) => (0., lat, PI),
            }
        } else {
            let mut back = (self.m / cosback).atan();
            if back > 0. {
                back += PI;
            }
            if self.azimuth < 0. {
                back -= PI;
            }
            let back = normalize_symmetric(back);

            // Sine and cosine of the reduced latitude at the destination
            let sinth2 = self.sinth1 * cosds + self.n * sinds;
            let latitude = sinth2.atan2(self.onef * self.m.hypot(cosback));

            let de = (sinds * self.sina)
                .atan2(self.costh1 * cosds - self.sinth1 * sinds * self.cosa);
            let correction = if self.southbound {
                (1. - self.c2) * ds + self.c2 * sinds * ss.cos()
            } else {
                -((1. - self.c2) * ds - self.c2 * sinds * ss.cos())
            };
            (back, latitude, de + self.c1 * correction)
        };

        Destination {
            point: Coor2D::raw(normalize_symmetric(self.origin[0] + dlam), latitude),
            back_azimuth: normalize_symmetric(back + PI),
        }
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::angular;
    use float_eq::assert_float_eq;

    fn wgs84() -> Ellipsoid {
        Ellipsoid::new(6378137.0, 1. / 298.257223563).unwrap()
    }

    #[test]
    fn copenhagen_paris() {
        let ellps = Ellipsoid::default();
        let cph = Coor2D::gis(12., 55.);

        // Azimuth and distance from the inverse solution
        let azimuth = (-130.15406042072_f64).to_radians();
        let d = Setup::new(cph, azimuth, &ellps).advance(956066.231959);
        assert_float_eq!(d.point[0].to_degrees(), 2., abs <= 1e-8);
        assert_float_eq!(d.point[1].to_degrees(), 49., abs <= 1e-7);
        assert_float_eq!(d.back_azimuth.to_degrees(), -138.05257941874, abs <= 1e-7);
    }

    #[test]
    fn equator() {
        let ellps = wgs84();
        let expected = 8.983152841195215;

        let d = Setup::new(Coor2D::origin(), FRAC_PI_2, &ellps).advance(1e6);
        assert_float_eq!(d.point[0].to_degrees(), expected, abs <= 1e-9);
        assert_float_eq!(d.point[1], 0., abs <= 1e-14);
        assert_float_eq!(d.back_azimuth, FRAC_PI_2, abs <= 1e-14);

        let d = Setup::new(Coor2D::origin(), -FRAC_PI_2, &ellps).advance(1e6);
        assert_float_eq!(d.point[0].to_degrees(), -expected, abs <= 1e-9);
        assert_float_eq!(d.back_azimuth, -FRAC_PI_2, abs <= 1e-14);
    }

    #[test]
    fn meridians() {
        let ellps = wgs84();

        // North and south, symmetric about the equator
        let north = Setup::new(Coor2D::origin(), 0., &ellps).advance(5e6);
        assert_float_eq!(north.point[0], 0., abs <= 1e-15);
        assert_float_eq!(north.point[1].to_degrees(), 45.135473964080, abs <= 1e-9);
        assert_eq!(north.back_azimuth, 0.);

        let south = Setup::new(Coor2D::origin(), PI, &ellps).advance(5e6);
        assert_float_eq!(south.point[1], -north.point[1], abs <= 1e-14);
        assert_eq!(south.back_azimuth, PI);

        // The quarter meridian reaches the pole
        let pole = Setup::new(Coor2D::origin(), 0., &ellps).advance(10_001_965.729);
        assert_float_eq!(pole.point[1].to_degrees(), 90., abs <= 1e-6);

        // Across the pole, arriving southbound on the opposite meridian
        let from = Coor2D::geo(80., 10.);
        let d = Setup::new(from, 0., &ellps).advance(2233651.7147534117);
        assert_float_eq!(d.point[0].to_degrees(), -170., abs <= 1e-9);
        assert_float_eq!(d.point[1].to_degrees(), 80., abs <= 1e-6);
        assert_eq!(d.back_azimuth, PI);
    }

    #[test]
    fn polar_origins() {
        let ellps = wgs84();
        let arrival = 81.04623277225505;

        // From the south pole, azimuth α leads up the meridian λ₁ + α
        let d = Setup::new(Coor2D::geo(-90., 0.), 0.3, &ellps).advance(1e6);
        assert_float_eq!(d.point[0], 0.3, abs <= 1e-12);
        assert_float_eq!(d.point[1].to_degrees(), -arrival, abs <= 1e-9);
        assert_float_eq!(d.back_azimuth, 0., abs <= 1e-9);

        // From the north pole, down the meridian λ₁ + π - α
        let d = Setup::new(Coor2D::geo(90., 0.), -1.0, &ellps).advance(1e6);
        assert_float_eq!(d.point[0].to_degrees(), -122.70422048691768, abs <= 1e-9);
        assert_float_eq!(d.point[1].to_degrees(), arrival, abs <= 1e-9);
        assert!(angular::difference(d.back_azimuth, PI).abs() < 1e-9);

        let d = Setup::new(Coor2D::geo(90., 10.), 2.5, &ellps).advance(1e6);
        assert_float_eq!(d.point[0].to_degrees(), 46.760551217294186, abs <= 1e-9);
        assert_float_eq!(d.point[1].to_degrees(), arrival, abs <= 1e-9);

        // A hair's breadth from the pole, the result is continuous
        let d = Setup::new(Coor2D::geo(89.9999999, 10.), 2.5, &ellps).advance(1e6);
        assert_float_eq!(d.point[0].to_degrees(), 46.76055083741877, abs <= 1e-8);
        assert_float_eq!(d.point[1].to_degrees(), 81.04623269212107, abs <= 1e-8);
        let d = Setup::new(Coor2D::geo(-89.9999999, 0.), 0.3, &ellps).advance(1e6);
        assert_float_eq!(d.point[0].to_degrees(), 17.18873366634559, abs <= 1e-8);
        assert_float_eq!(d.point[1].to_degrees(), -81.046232676698, abs <= 1e-8);
    }
}
