//! Batch geodesic computations over coordinate arrays.
//!
//! [`Geod`] applies the direct and inverse solvers row by row to parallel
//! slices of longitudes, latitudes, azimuths and distances, in place, in
//! degrees or radians. A row containing `NaN` comes out as `NaN`, so missing
//! data can be carried through a computation without special casing.
//!
//! Back azimuths reported by [`Geod`] point *back* toward the origin of the
//! geodesic, i.e. they differ by π from the continuing azimuths of the
//! [solvers](crate::inverse).

use crate::geodesic::{self, area, DirectSetup};
use crate::math::angular::normalize_symmetric;
use crate::{Coor2D, Ellipsoid, Error};
use log::{debug, warn};
use std::f64::consts::PI;

/// What to do with a row that has no solution, typically a pair of
/// antipodal points in [`Geod::inv`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OnUndefined {
    /// Fail the whole call, naming the offending row
    Raise,
    /// Fill the row with `NaN`, log a warning, and carry on
    #[default]
    Nan,
}

/// Geodesic computations on a given ellipsoid, for arrays of points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Geod {
    ellipsoid: Ellipsoid,
    on_undefined: OnUndefined,
}

/// WGS84 is the default ellipsoid
impl Default for Geod {
    fn default() -> Geod {
        Geod::new(Ellipsoid::wgs84())
    }
}

impl Geod {
    #[must_use]
    pub fn new(ellipsoid: Ellipsoid) -> Geod {
        Geod {
            ellipsoid,
            on_undefined: OnUndefined::default(),
        }
    }

    /// A `Geod` from an ellipsoid definition, e.g. `+ellps=clrk66`.
    /// See [`Ellipsoid::from_definition`].
    pub fn from_definition(definition: &str) -> Result<Geod, Error> {
        Ok(Geod::new(Ellipsoid::from_definition(definition)?))
    }

    /// Select the handling of rows without a solution
    #[must_use]
    pub fn on_undefined(mut self, policy: OnUndefined) -> Geod {
        self.on_undefined = policy;
        self
    }

    #[must_use]
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    #[must_use]
    pub fn is_sphere(&self) -> bool {
        self.ellipsoid.is_sphere()
    }

    /// The direct problem, row by row: given initial points (`lons`, `lats`),
    /// forward `azimuths` and `distances`, overwrite `lons`, `lats` and
    /// `azimuths` with the terminal points and the back azimuths.
    ///
    /// A zero distance leaves the point in place, and reverses the azimuth.
    /// Returns the number of rows successfully computed.
    ///
    /// # Errors
    ///
    /// Slices of different lengths. Under [`OnUndefined::Raise`], also a row
    /// without solution: the rows before it have then already been
    /// overwritten, the rest are left untouched.
    pub fn fwd(
        &self,
        lons: &mut [f64],
        lats: &mut [f64],
        azimuths: &mut [f64],
        distances: &[f64],
        radians: bool,
    ) -> Result<usize, Error> {
        let n = lons.len();
        same_length(n, &[lats.len(), azimuths.len(), distances.len()])?;
        let (input, output) = units(radians);

        let mut successes = 0_usize;
        for i in 0..n {
            let origin = Coor2D::raw(input(lons[i]), input(lats[i]));
            let azimuth = input(azimuths[i]);
            let distance = distances[i];

            if origin.is_nan() || azimuth.is_nan() || distance.is_nan() {
                (lons[i], lats[i], azimuths[i]) = (f64::NAN, f64::NAN, f64::NAN);
                continue;
            }

            if distance == 0. {
                lons[i] = output(normalize_symmetric(origin[0]));
                azimuths[i] = output(normalize_symmetric(azimuth + PI));
                successes += 1;
                continue;
            }

            match geodesic::direct(origin, azimuth, distance, &self.ellipsoid) {
                Ok(destination) => {
                    lons[i] = output(destination.point[0]);
                    lats[i] = output(destination.point[1]);
                    azimuths[i] = output(pointing_back(destination.back_azimuth));
                    successes += 1;
                }
                Err(e) => {
                    self.reject(i, e)?;
                    (lons[i], lats[i], azimuths[i]) = (f64::NAN, f64::NAN, f64::NAN);
                }
            }
        }

        debug!("fwd: {successes} of {n} rows");
        Ok(successes)
    }

    /// The inverse problem, row by row: given initial points (`lons1`,
    /// `lats1`) and terminal points (`lons2`, `lats2`), overwrite `lons1`,
    /// `lats1` and `lons2` with forward azimuths, back azimuths and
    /// distances.
    ///
    /// Returns the number of rows successfully computed.
    ///
    /// # Errors
    ///
    /// As for [`Geod::fwd`]: under [`OnUndefined::Raise`], the slices are
    /// partially written when a row without solution is met.
    pub fn inv(
        &self,
        lons1: &mut [f64],
        lats1: &mut [f64],
        lons2: &mut [f64],
        lats2: &[f64],
        radians: bool,
    ) -> Result<usize, Error> {
        let n = lons1.len();
        same_length(n, &[lats1.len(), lons2.len(), lats2.len()])?;
        let (input, output) = units(radians);

        let mut successes = 0_usize;
        for i in 0..n {
            let from = Coor2D::raw(input(lons1[i]), input(lats1[i]));
            let to = Coor2D::raw(input(lons2[i]), input(lats2[i]));

            if from.is_nan() || to.is_nan() {
                (lons1[i], lats1[i], lons2[i]) = (f64::NAN, f64::NAN, f64::NAN);
                continue;
            }

            match geodesic::inverse(from, to, &self.ellipsoid) {
                Ok(g) => {
                    // Coincident points have no direction to point back along
                    let back = if g.distance == 0. {
                        0.
                    } else {
                        pointing_back(g.back_azimuth)
                    };
                    lons1[i] = output(g.azimuth);
                    lats1[i] = output(back);
                    lons2[i] = g.distance;
                    successes += 1;
                }
                Err(e) => {
                    self.reject(i, e)?;
                    (lons1[i], lats1[i], lons2[i]) = (f64::NAN, f64::NAN, f64::NAN);
                }
            }
        }

        debug!("inv: {successes} of {n} rows");
        Ok(successes)
    }

    /// `n` equally spaced points along the geodesic from `from` to `to`,
    /// as (longitude, latitude) pairs, end points excluded.
    pub fn npts(
        &self,
        from: (f64, f64),
        to: (f64, f64),
        n: usize,
        radians: bool,
    ) -> Result<Vec<(f64, f64)>, Error> {
        let (input, output) = units(radians);
        let p1 = Coor2D::raw(input(from.0), input(from.1));
        let p2 = Coor2D::raw(input(to.0), input(to.1));

        let geodesic = geodesic::inverse(p1, p2, &self.ellipsoid)?;
        if geodesic.distance == 0. {
            return Ok(vec![from; n]);
        }

        let step = geodesic.distance / (n + 1) as f64;
        let setup = DirectSetup::new(p1, geodesic.azimuth, &self.ellipsoid);
        let points = (1..=n)
            .map(|i| setup.advance(i as f64 * step).point)
            .map(|p| (output(p[0]), output(p[1])))
            .collect();
        Ok(points)
    }

    /// The lengths of the segments of the line through the given points.
    /// One less than the number of points, or empty for fewer than two.
    ///
    /// # Errors
    ///
    /// Slices of different lengths, or, under [`OnUndefined::Raise`], a
    /// segment without solution. No partial result is returned.
    pub fn line_lengths(&self, lons: &[f64], lats: &[f64], radians: bool) -> Result<Vec<f64>, Error> {
        same_length(lons.len(), &[lats.len()])?;
        let (input, _) = units(radians);

        let points: Vec<Coor2D> = lons
            .iter()
            .zip(lats)
            .map(|(&lon, &lat)| Coor2D::raw(input(lon), input(lat)))
            .collect();

        let mut lengths = Vec::with_capacity(points.len().saturating_sub(1));
        for (i, pair) in points.windows(2).enumerate() {
            if pair[0].is_nan() || pair[1].is_nan() {
                lengths.push(f64::NAN);
                continue;
            }
            match geodesic::inverse(pair[0], pair[1], &self.ellipsoid) {
                Ok(g) => lengths.push(g.distance),
                Err(e) => {
                    self.reject(i, e)?;
                    lengths.push(f64::NAN);
                }
            }
        }
        Ok(lengths)
    }

    /// The total length of the line through the given points
    pub fn line_length(&self, lons: &[f64], lats: &[f64], radians: bool) -> Result<f64, Error> {
        Ok(self.line_lengths(lons, lats, radians)?.iter().sum())
    }

    /// The signed area, in square meters, and the perimeter of the polygon with
    /// the given vertices. Counter-clockwise polygons have positive area.
    /// The polygon closes itself: the first vertex is not to be repeated.
    /// Only simple polygons, without self intersections, are supported.
    ///
    /// Fewer than two vertices give zero area and perimeter, and a vertex
    /// with missing data gives `NaN` for both.
    ///
    /// # Errors
    ///
    /// As for [`Geod::line_lengths`].
    pub fn polygon_area_perimeter(
        &self,
        lons: &[f64],
        lats: &[f64],
        radians: bool,
    ) -> Result<(f64, f64), Error> {
        same_length(lons.len(), &[lats.len()])?;
        let (input, _) = units(radians);

        let vertices: Vec<Coor2D> = lons
            .iter()
            .zip(lats)
            .map(|(&lon, &lat)| Coor2D::raw(input(lon), input(lat)))
            .collect();
        if vertices.len() < 2 {
            return Ok((0., 0.));
        }
        if vertices.iter().any(Coor2D::is_nan) {
            return Ok((f64::NAN, f64::NAN));
        }

        let mut edge_sum = 0.;
        let mut perimeter = 0.;
        let mut crossings = 0;
        let closed = vertices.iter().cycle().skip(1);
        for (i, (&from, &to)) in vertices.iter().zip(closed).enumerate() {
            let g = match geodesic::inverse(from, to, &self.ellipsoid) {
                Ok(g) => g,
                Err(e) => {
                    self.reject(i, e)?;
                    return Ok((f64::NAN, f64::NAN));
                }
            };
            perimeter += g.distance;
            edge_sum += area::edge_area(from, to, &g, &self.ellipsoid);
            crossings += area::transit(from[0], to[0]);
        }

        let area = area::polygon_area(edge_sum, crossings, &self.ellipsoid);
        debug!("polygon: {} vertices, area {area}, perimeter {perimeter}", vertices.len());
        Ok((area, perimeter))
    }

    // Apply the policy to a row without solution
    fn reject(&self, row: usize, error: Error) -> Result<(), Error> {
        if self.on_undefined == OnUndefined::Nan {
            warn!("row {row}: {error}");
            return Ok(());
        }
        Err(match error {
            Error::UndefinedGeodesic(msg) => Error::UndefinedGeodesic(format!("row {row}: {msg}")),
            Error::InvalidArgument(msg) => Error::InvalidArgument(format!("row {row}: {msg}")),
            other => other,
        })
    }
}

// Unit conversions of angular input and output
fn units(radians: bool) -> (fn(f64) -> f64, fn(f64) -> f64) {
    if radians {
        return (identity, identity);
    }
    (f64::to_radians, f64::to_degrees)
}

fn identity(angle: f64) -> f64 {
    angle
}

fn pointing_back(continuing: f64) -> f64 {
    normalize_symmetric(continuing + PI)
}

fn same_length(n: usize, others: &[usize]) -> Result<(), Error> {
    if let Some(m) = others.iter().find(|&&m| m != n) {
        return Err(Error::InvalidArgument(format!(
            "input arrays differ in length: {n} vs. {m}"
        )));
    }
    Ok(())
}

// ----- Tests ---------------------------------------------------------------------
