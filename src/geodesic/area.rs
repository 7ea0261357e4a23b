//! Areas of geodesic polygons, following [Karney (2013)](crate::Bibliography::Kar13),
//! sections 6 and 7.
//!
//! The area of a polygon is the sum, over its edges, of the area between the
//! edge and the equator, corrected for edges crossing the prime meridian.

use super::Geodesic;
use crate::math::angular::normalize_symmetric;
use crate::math::series::{fourier, taylor};
use crate::{Coor2D, Ellipsoid};
use std::f64::consts::PI;

// The coefficients of the area series to sixth order (Karney 2013, eq. 63):
// per term, the numerators as polynomials in e'², and the common denominator,
// for ascending powers of k²
#[rustfmt::skip]
const C4: [&[(&[f64], f64)]; 6] = [
    &[
        (&[30030., -3003., 1716., -1144., 832., -640.], 45045.),
        (&[-3003., 1716., -1144., 832., -640.], 60060.),
        (&[429., -286., 208., -160.], 18018.),
        (&[-143., 104., -80.], 10296.),
        (&[13., -10.], 1430.),
        (&[-1.], 156.),
    ],
    &[
        (&[3003., -1716., 1144., -832., 640.], 540540.),
        (&[-429., 286., -208., 160.], 108108.),
        (&[143., -104., 80.], 51480.),
        (&[-13., 10.], 6435.),
        (&[5.], 3276.),
    ],
    &[
        (&[429., -286., 208., -160.], 900900.),
        (&[-143., 104., -80.], 257400.),
        (&[13., -10.], 25025.),
        (&[-1.], 2184.),
    ],
    &[
        (&[143., -104., 80.], 2522520.),
        (&[-13., 10.], 140140.),
        (&[5.], 45864.),
    ],
    &[
        (&[13., -10.], 1621620.),
        (&[-1.], 58968.),
    ],
    &[
        (&[1.], 792792.),
    ],
];

// The coefficients of the area series for a geodesic with parameter k²
fn coefficients(ep2: f64, k2: f64) -> [f64; 6] {
    let mut result = [0.; 6];
    let mut power = 1.;
    for (c, terms) in result.iter_mut().zip(C4) {
        let polynomial: Vec<f64> = terms
            .iter()
            .map(|(numerator, denominator)| taylor::horner(ep2, numerator) / denominator)
            .collect();
        *c = power * taylor::horner(k2, &polynomial);
        power *= k2;
    }
    result
}

// Sine and cosine of the reduced latitude
fn reduced(latitude: f64, ellps: &Ellipsoid) -> (f64, f64) {
    let (s, c) = latitude.sin_cos();
    let s = ellps.aspect_ratio() * s;
    let h = s.hypot(c);
    (s / h, c / h)
}

/// The signed area between the geodesic from `from` to `to` and the equator,
/// given the solution of the inverse problem, in units of the semimajor axis
/// squared.
#[must_use]
pub fn edge_area(from: Coor2D, to: Coor2D, geodesic: &Geodesic, ellps: &Ellipsoid) -> f64 {
    let (sbet1, cbet1) = reduced(from[1], ellps);
    let (sbet2, cbet2) = reduced(to[1], ellps);
    let (salp1, calp1) = geodesic.azimuth.sin_cos();
    let (salp2, calp2) = geodesic.back_azimuth.sin_cos();

    // The azimuth of the geodesic where it crosses the equator
    let salp0 = salp1 * cbet1;
    let calp0 = calp1.hypot(salp1 * sbet1);

    let es = ellps.eccentricity_squared();
    let mut area = 0.;
    if es != 0. && salp0 != 0. && calp0 != 0. {
        // The arcs from the equator crossing to the end points
        let (ssig1, csig1) = (sbet1, calp1 * cbet1);
        let (ssig2, csig2) = (sbet2, calp2 * cbet2);
        let (h1, h2) = (ssig1.hypot(csig1), ssig2.hypot(csig2));

        let ep2 = ellps.second_eccentricity_squared();
        let c = coefficients(ep2, calp0 * calp0 * ep2);
        let a = ellps.semimajor_axis();
        let b1 = fourier::odd_cos([ssig1 / h1, csig1 / h1], &c);
        let b2 = fourier::odd_cos([ssig2 / h2, csig2 / h2], &c);
        area = a * a * calp0 * salp0 * es * (b2 - b1);
    }

    // The change of azimuth along the geodesic
    let alp12 = (salp2 * calp1 - calp2 * salp1).atan2(calp2 * calp1 + salp2 * salp1);
    let r = ellps.authalic_radius();
    area + r * r * alp12
}

/// +1 for an edge crossing the prime meridian eastwards, -1 westwards,
/// otherwise 0. The antimeridian counts as west of it.
#[must_use]
pub fn transit(lon1: f64, lon2: f64) -> i32 {
    let west = |lon: f64| {
        let lon = normalize_symmetric(lon);
        lon < 0. || lon == PI
    };
    let dlon = normalize_symmetric(lon2 - lon1);
    if west(lon1) && !west(lon2) && dlon > 0. {
        return 1;
    }
    if west(lon2) && !west(lon1) && dlon < 0. {
        return -1;
    }
    0
}

/// The signed area of a polygon, counter-clockwise positive, from the sum of
/// the edge areas and the number of crossings of the prime meridian. Reduced
/// to (-A/2, A/2], where A is the area of the ellipsoid.
#[must_use]
pub fn polygon_area(edge_sum: f64, crossings: i32, ellps: &Ellipsoid) -> f64 {
    let r = ellps.authalic_radius();
    let total = 4. * PI * r * r;

    let mut area = edge_sum;
    if crossings % 2 != 0 {
        area += if area < 0. { total / 2. } else { -total / 2. };
    }

    // The edge areas accumulate clockwise
    area = -area;
    if area > total / 2. {
        area -= total;
    } else if area <= -total / 2. {
        area += total;
    }
    area
}

// ----- Tests ---------------------------------------------------------------------
