//! *Direct and inverse geodesic computations on the ellipsoid and the sphere*.
//!
//! Given two points on a reference ellipsoid, the **inverse** problem asks for
//! the length of the geodesic between them, and its azimuths at both ends.
//! Given a point, an azimuth and a distance, the **direct** problem asks for
//! the point reached, and the azimuth of the geodesic on arrival.
//!
//! The ellipsoidal inverse problem is solved by the iterative method of
//! [Vincenty](crate::Bibliography::Vin75), the ellipsoidal direct problem by
//! a non-iterative series in the tradition of the PROJ `geod` program. On a
//! sphere (flattening exactly zero), closed form spherical trigonometry is
//! used throughout.
//!
//! All angles are in radians, azimuths clockwise from north. Longitudes and
//! azimuths returned are reduced to the interval (-π, π].
//!
//! ```rust
//! use geod::prelude::*;
//! # fn main() -> Result<(), geod::Error> {
//! let ellps = Ellipsoid::named("WGS84")?;
//! let boston = Coor2D::geo(42.25, -71.116_666_666_666_67);
//! let portland = Coor2D::geo(45.516_666_666_666_67, -123.683_333_333_333_33);
//!
//! let geodesic = inverse(boston, portland, &ellps)?;
//! assert!((geodesic.distance - 4_164_074.239).abs() < 1e-2);
//!
//! let arrival = direct(boston, geodesic.azimuth, geodesic.distance, &ellps)?;
//! assert!((arrival.point[0] - portland[0]).abs() < 1e-8);
//! assert!((arrival.point[1] - portland[1]).abs() < 1e-8);
//! # Ok(())
//! # }
//! ```

mod coordinate;
mod ellipsoid;
mod geod;
mod geodesic;
pub mod math;

pub use crate::coordinate::coor2d::Coor2D;
pub use crate::coordinate::AngularUnits;
pub use crate::ellipsoid::Ellipsoid;
pub use crate::geod::Geod;
pub use crate::geod::OnUndefined;
pub use crate::geodesic::direct;
pub use crate::geodesic::inverse;
pub use crate::geodesic::solve_direct;
pub use crate::geodesic::solve_inverse;
pub use crate::geodesic::Destination;
pub use crate::geodesic::DirectSetup;
pub use crate::geodesic::Geodesic;
pub use crate::geodesic::GeodesicLine;
pub use crate::geodesic::MAX_ITERATIONS;

/// The bread-and-butter, shrink-wrapped and ready to use
pub mod prelude {
    pub use crate::direct;
    pub use crate::inverse;
    pub use crate::AngularUnits;
    pub use crate::Coor2D;
    pub use crate::Ellipsoid;
    pub use crate::Error;
    pub use crate::Geod;
    pub use crate::Geodesic;
    pub use crate::GeodesicLine;
}

use thiserror::Error;

/// The error type of the crate. Every solver reports failure by returning one
/// of these, never by side channel.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    /// Semimajor axis not strictly positive, or flattening outside [0, 1)
    #[error("invalid ellipsoid: {0}")]
    InvalidEllipsoid(String),

    /// Non-positive distance, missing point, mismatched input lengths
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The azimuth of the geodesic has no unique value (e.g. antipodal points)
    #[error("undefined geodesic: {0}")]
    UndefinedGeodesic(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("missing required parameter {0}")]
    MissingParam(String),

    #[error("malformed value for parameter {0}: {1}")]
    BadParam(String, String),
}

/// Literature, that has been useful in designing and implementing this library.
pub enum Bibliography {
    /// B. R. Bowring (1983): *New equations for meridional distance*.
    /// Bull. Geodesique 57, 374–381.
    /// [DOI](https://doi.org/10.1007/BF02520940).
    Bow83,

    /// Charles F.F. Karney (2013) Algorithms for geodesics. Journal of Geodesy 87, 43–55.
    /// [DOI](https://doi.org/10.1007/s00190-012-0578-z)
    Kar13,

    /// Paul D. Thomas (1970): *Spheroidal geodesics, reference systems, and local geometry*.
    /// U.S. Naval Oceanographic Office, SP-138. The origin of the series
    /// used by the direct solver.
    Tho70,

    /// T. Vincenty (1975) Direct and Inverse Solutions of Geodesics on the Ellipsoid
    /// with application of nested equations.
    /// Survey Review, 23(176): 88-93.
    /// [pdf](https://www.ngs.noaa.gov/PUBS_LIB/inverse.pdf)
    /// (See also Wikipedia: [Vincenty's formulae](https://en.wikipedia.org/wiki/Vincenty's_formulae)).
    Vin75,

    /// T. Vincenty (1976). Correspondence. Survey Review. 23(180): 294.
    Vin76,
}
