//! The inverse geodesic problem on the ellipsoid, following
//! [Vincenty (1975)](crate::Bibliography::Vin75), with the
//! [1976 update](crate::Bibliography::Vin76) of the series for A and B.
//!
//! The Vincenty algorithm is relatively simple to implement, but for
//! near-antipodal cases, it suffers from lack of convergence and loss of
//! accuracy. Hence the iteration is bounded by [`MAX_ITERATIONS`], and the
//! estimate at the cap is returned as the result.
//! [Karney (2013)](crate::Bibliography::Kar13) presents an algorithm which
//! converges everywhere.

use super::Geodesic;
use crate::math::angular::{self, normalize_symmetric};
use crate::{Coor2D, Ellipsoid, Error};
use log::{debug, trace};
use std::f64::consts::PI;

/// The maximum number of updates of the auxiliary longitude, λ. Most
/// geodesics converge in 3 to 6 iterations: the cap only bites for
/// near-antipodal points.
pub const MAX_ITERATIONS: usize = 7;

/// Stop criterion: an update of λ smaller than this
const CONVERGENCE_TOLERANCE: f64 = 1e-12;

#[allow(non_snake_case)] // make it possible to mimic math notation from original paper
pub(super) fn inverse(from: Coor2D, to: Coor2D, ellps: &Ellipsoid) -> Result<Geodesic, Error> {
    let f = ellps.flattening();
    let L = angular::difference(from[0], to[0]);

    // The latitudes of the points, projected onto the auxiliary sphere
    let (U1sin, U1cos) = ellps.reduced_latitude(from[1]).sin_cos();
    let (U2sin, U2cos) = ellps.reduced_latitude(to[1]).sin_cos();

    // Initial estimate for λ, the longitude difference on the auxiliary sphere
    let mut ll = L;

    let mut aacos2 = 0.;
    let mut ssmx2cos = 0.;
    let mut sscos = 0.;
    let mut sssin = 0.;
    let mut ss = 0.;
    let mut llsin = 0.;
    let mut llcos = 1.;

    let mut iterations = 0;
    let mut converged = false;

    for i in 1..=MAX_ITERATIONS {
        iterations = i;

        // σ, the angular separation between the points
        (llsin, llcos) = ll.sin_cos();
        let t1 = U2cos * llsin;
        let t2 = U1cos * U2sin - U2cos * U1sin * llcos;
        sssin = t1.hypot(t2);
        sscos = U1sin * U2sin + U1cos * U2cos * llcos;
        ss = sssin.atan2(sscos);

        // α, the forward azimuth of the geodesic at equator
        let aasin = U1cos * U2cos * llsin / sssin;
        aacos2 = 1. - aasin * aasin;

        // cosine of 2 times σ_m, the angular separation from the midpoint to
        // the equator. Undefined, and irrelevant, for equatorial lines.
        ssmx2cos = if aacos2 == 0. {
            0.
        } else {
            sscos - 2. * U1sin * U2sin / aacos2
        };

        let C = (4. + f * (4. - 3. * aacos2)) * f * aacos2 / 16.;
        let ll_next = L
            + (1. - C)
                * f
                * aasin
                * (ss + C * sssin * (ssmx2cos + C * sscos * (-1. + 2. * ssmx2cos * ssmx2cos)));
        let dl = (ll - ll_next).abs();
        ll = ll_next;
        if dl < CONVERGENCE_TOLERANCE {
            converged = true;
            break;
        }
    }

    // Along the equator, beyond (1 - f)π, the shortest path leaves the
    // equator, and λ oscillates between east and west bound estimates
    let equatorial = U1sin.abs() < CONVERGENCE_TOLERANCE && U2sin.abs() < CONVERGENCE_TOLERANCE;
    if converged {
        trace!("Vincenty: converged after {iterations} iterations");
    } else if equatorial && L.abs() > ellps.aspect_ratio() * PI {
        debug!(
            "Vincenty: equatorial near-antipodes {from:?} -> {to:?}, no convergence \
             after {iterations} iterations. Returning the last estimate"
        );
    } else {
        debug!("Vincenty: no convergence after {iterations} iterations, {from:?} -> {to:?}");
    }

    // A and B according to Vincenty's update (1976)
    let us = aacos2 * ellps.second_eccentricity_squared();
    let t = (1. + us).sqrt();
    let k1 = (t - 1.) / (t + 1.);
    let A = (1. + k1 * k1 / 4.) / (1. - k1);
    let B = k1 * (1. - 3. * k1 * k1 / 8.);

    // The difference between the dist on the aux sphere and on the ellipsoid.
    let t1 = -1. + 2. * ssmx2cos * ssmx2cos;
    let t2 = -3. + 4. * sssin * sssin;
    let t3 = -3. + 4. * ssmx2cos * ssmx2cos;
    let dss = B * sssin * (ssmx2cos + B / 4. * (sscos * t1 - B / 6. * ssmx2cos * t2 * t3));

    // Distance, forward azimuth, return azimuth
    let distance = ellps.semiminor_axis() * A * (ss - dss);
    let a1 = (U2cos * llsin).atan2(U1cos * U2sin - U1sin * U2cos * llcos);
    let a2 = (U1cos * llsin).atan2(-U1sin * U2cos + U1cos * U2sin * llcos);

    if !(distance.is_finite() && a1.is_finite() && a2.is_finite()) {
        return Err(Error::UndefinedGeodesic(format!(
            "no finite solution for {from:?} -> {to:?}"
        )));
    }

    Ok(Geodesic {
        azimuth: normalize_symmetric(a1),
        back_azimuth: normalize_symmetric(a2),
        distance: distance.abs(),
        iterations,
    })
}

// ----- Tests ---------------------------------------------------------------------
