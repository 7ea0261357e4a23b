use super::AngularUnits;
use crate::math::angular;
use std::ops::{Index, IndexMut};

/// A geographic point: longitude and latitude, in that order, in radians.
///
/// No invariant beyond being finite: the solvers accept any longitude, and
/// reduce the longitudes they return to (-π, π].
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct Coor2D(pub [f64; 2]);

impl Index<usize> for Coor2D {
    type Output = f64;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0[i]
    }
}

impl IndexMut<usize> for Coor2D {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.0[i]
    }
}

// ----- C O N S T R U C T O R S ---------------------------------------------

/// Constructors
impl Coor2D {
    /// A `Coor2D` from latitude/longitude, with the angular input in degrees.
    #[must_use]
    pub fn geo(latitude: f64, longitude: f64) -> Coor2D {
        Coor2D([longitude.to_radians(), latitude.to_radians()])
    }

    /// A `Coor2D` from longitude/latitude, with the angular input in degrees.
    #[must_use]
    pub fn gis(longitude: f64, latitude: f64) -> Coor2D {
        Coor2D([longitude.to_radians(), latitude.to_radians()])
    }

    /// A `Coor2D` from longitude/latitude, with the angular input in radians.
    #[must_use]
    pub fn raw(longitude: f64, latitude: f64) -> Coor2D {
        Coor2D([longitude, latitude])
    }

    /// A `Coor2D` consisting of 2 `NaN`s
    #[must_use]
    pub fn nan() -> Coor2D {
        Coor2D([f64::NAN, f64::NAN])
    }

    /// A `Coor2D` consisting of 2 `0`s
    #[must_use]
    pub fn origin() -> Coor2D {
        Coor2D([0., 0.])
    }
}

// ----- A C C E S S O R S ---------------------------------------------------

impl Coor2D {
    /// The longitude, in radians
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.0[0]
    }

    /// The latitude, in radians
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.0[1]
    }

    /// True if any of the elements is `NaN`
    #[must_use]
    pub fn is_nan(&self) -> bool {
        self.0[0].is_nan() || self.0[1].is_nan()
    }

    /// The same point, with its longitude reduced to (-π, π]
    #[must_use]
    pub fn normalized(&self) -> Coor2D {
        Coor2D([angular::normalize_symmetric(self.0[0]), self.0[1]])
    }
}

impl AngularUnits for Coor2D {
    fn to_radians(self) -> Self {
        Coor2D([self.0[0].to_radians(), self.0[1].to_radians()])
    }

    fn to_degrees(self) -> Self {
        Coor2D([self.0[0].to_degrees(), self.0[1].to_degrees()])
    }

    fn to_geo(self) -> Self {
        Coor2D([self.0[1].to_degrees(), self.0[0].to_degrees()])
    }
}

// ----- T E S T S ---------------------------------------------------
