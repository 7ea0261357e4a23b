//! Dispatch and validation for the direct and inverse geodesic problems.
//!
//! The solver family is selected here, and only here: a flattening of exactly
//! zero selects the closed form [spherical](sphere) solutions, anything else
//! the [Vincenty](vincenty) inverse and the [series](series) direct solutions.
//!
//! Back azimuths are returned in the *continuing* sense: the azimuth of the
//! geodesic at the far point, in the direction of travel. The azimuth pointing
//! back toward the origin differs from it by π, and is what [`Geod`](crate::Geod)
//! reports.

pub(crate) mod area;
mod series;
mod sphere;
mod vincenty;

pub use vincenty::MAX_ITERATIONS;

use crate::math::angular;
use crate::{Coor2D, Ellipsoid, Error};
use log::trace;
use std::f64::consts::{FRAC_PI_2, PI};

/// Differences in longitude and latitude below this are taken as zero
const COINCIDENCE_TOLERANCE: f64 = 1e-12;

/// Solution of the inverse problem
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geodesic {
    /// Forward azimuth at the origin, radians clockwise from north
    pub azimuth: f64,
    /// Azimuth at the destination, continuing sense
    pub back_azimuth: f64,
    /// Length of the geodesic, in the units of the semimajor axis
    pub distance: f64,
    /// Iterations spent by the ellipsoidal solver. Zero on the sphere,
    /// and for coincident points.
    pub iterations: usize,
}

/// Solution of the direct problem
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Destination {
    pub point: Coor2D,
    /// Azimuth at the destination, continuing sense
    pub back_azimuth: f64,
}

/// The working record of one geodesic computation: the caller fills in what
/// is known, [`solve_direct`] or [`solve_inverse`] fills in the rest.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeodesicLine {
    pub from: Option<Coor2D>,
    pub to: Option<Coor2D>,
    pub azimuth: f64,
    pub back_azimuth: f64,
    pub distance: f64,
    pub ellipsoid: Ellipsoid,
}

impl GeodesicLine {
    /// An empty line on the given ellipsoid
    #[must_use]
    pub fn new(ellipsoid: Ellipsoid) -> GeodesicLine {
        GeodesicLine {
            from: None,
            to: None,
            azimuth: 0.,
            back_azimuth: 0.,
            distance: 0.,
            ellipsoid,
        }
    }

    /// A line set up for the inverse problem
    #[must_use]
    pub fn between(from: Coor2D, to: Coor2D, ellipsoid: Ellipsoid) -> GeodesicLine {
        GeodesicLine {
            from: Some(from),
            to: Some(to),
            ..GeodesicLine::new(ellipsoid)
        }
    }

    /// A line set up for the direct problem
    #[must_use]
    pub fn heading(from: Coor2D, azimuth: f64, distance: f64, ellipsoid: Ellipsoid) -> GeodesicLine {
        GeodesicLine {
            from: Some(from),
            azimuth,
            distance,
            ..GeodesicLine::new(ellipsoid)
        }
    }
}

/// The azimuth-dependent part of the direct problem, prepared once, and
/// [advanced](DirectSetup::advance) to any number of distances along the
/// same geodesic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DirectSetup {
    Sphere(sphere::Setup),
    Ellipsoid(series::Setup),
}

impl DirectSetup {
    /// Prepare the geodesic leaving `from` in the direction `azimuth`
    #[must_use]
    pub fn new(from: Coor2D, azimuth: f64, ellipsoid: &Ellipsoid) -> DirectSetup {
        if ellipsoid.is_sphere() {
            return DirectSetup::Sphere(sphere::Setup::new(
                from,
                azimuth,
                ellipsoid.semimajor_axis(),
            ));
        }
        DirectSetup::Ellipsoid(series::Setup::new(from, azimuth, ellipsoid))
    }

    /// The point at `distance` from the origin, and the azimuth of arrival.
    /// Not validated: see [`direct`] for that.
    #[must_use]
    pub fn advance(&self, distance: f64) -> Destination {
        match self {
            DirectSetup::Sphere(setup) => setup.advance(distance),
            DirectSetup::Ellipsoid(setup) => setup.advance(distance),
        }
    }
}

fn finite(point: &Coor2D) -> bool {
    point[0].is_finite() && point[1].is_finite()
}

/// Solve the inverse geodesic problem: the distance between `from` and `to`,
/// the azimuth at `from`, and the (continuing) azimuth at `to`.
///
/// Coincident points give zero distance and zero azimuths. Antipodal points,
/// where the azimuth has no unique value, give [`Error::UndefinedGeodesic`].
pub fn inverse(from: Coor2D, to: Coor2D, ellipsoid: &Ellipsoid) -> Result<Geodesic, Error> {
    if !(finite(&from) && finite(&to)) {
        return Err(Error::InvalidArgument(format!(
            "non-finite coordinate in {from:?} -> {to:?}"
        )));
    }

    let dlam = angular::difference(from[0], to[0]);
    let dphi = to[1] - from[1];
    let polar = FRAC_PI_2 - from[1].abs() < COINCIDENCE_TOLERANCE;

    // Below the picometer level, we don't care about directions
    if dphi.abs() < COINCIDENCE_TOLERANCE && (dlam.abs() < COINCIDENCE_TOLERANCE || polar) {
        trace!("Coincident points: {from:?}");
        return Ok(Geodesic::default());
    }

    let mirrored = (from[1] + to[1]).abs() < COINCIDENCE_TOLERANCE;
    if mirrored && ((dlam.abs() - PI).abs() < COINCIDENCE_TOLERANCE || polar) {
        return Err(Error::UndefinedGeodesic(format!(
            "antipodal points {from:?} and {to:?}"
        )));
    }

    if ellipsoid.is_sphere() {
        return Ok(sphere::inverse(from, to, ellipsoid.semimajor_axis()));
    }
    vincenty::inverse(from, to, ellipsoid)
}

/// Solve the direct geodesic problem: the point reached by travelling
/// `distance` from `from`, initially in the direction `azimuth`.
pub fn direct(
    from: Coor2D,
    azimuth: f64,
    distance: f64,
    ellipsoid: &Ellipsoid,
) -> Result<Destination, Error> {
    if !(distance.is_finite() && distance > 0.) {
        return Err(Error::InvalidArgument(format!(
            "distance must be positive, got {distance}"
        )));
    }
    if !(finite(&from) && azimuth.is_finite()) {
        return Err(Error::InvalidArgument(format!(
            "non-finite origin or azimuth: {from:?}, {azimuth}"
        )));
    }
    Ok(DirectSetup::new(from, azimuth, ellipsoid).advance(distance))
}

/// Fill in `to` and `back_azimuth` of a line given `from`, `azimuth`
/// and `distance`
pub fn solve_direct(line: &mut GeodesicLine) -> Result<(), Error> {
    let Some(from) = line.from else {
        return Err(Error::InvalidArgument("direct problem without origin".into()));
    };
    let destination = direct(from, line.azimuth, line.distance, &line.ellipsoid)?;
    line.azimuth = angular::normalize_symmetric(line.azimuth);
    line.to = Some(destination.point);
    line.back_azimuth = destination.back_azimuth;
    Ok(())
}

/// Fill in `azimuth`, `back_azimuth` and `distance` of a line given
/// `from` and `to`
pub fn solve_inverse(line: &mut GeodesicLine) -> Result<(), Error> {
    let (Some(from), Some(to)) = (line.from, line.to) else {
        return Err(Error::InvalidArgument("inverse problem needs two points".into()));
    };
    let geodesic = inverse(from, to, &line.ellipsoid)?;
    line.azimuth = geodesic.azimuth;
    line.back_azimuth = geodesic.back_azimuth;
    line.distance = geodesic.distance;
    Ok(())
}

// ----- Tests ---------------------------------------------------------------------
