use super::Ellipsoid;
use crate::geodesic::{self, Destination, Geodesic};
use crate::{Coor2D, Error};

// ----- Geodesics -------------------------------------------------------------
impl Ellipsoid {
    /// The distance, *M*, along a meridian from the equator to the given
    /// latitude is a special case of a geodesic length.
    ///
    /// This implementation follows the
    /// [remarkably simple algorithm](crate::Bibliography::Bow83) by Bowring (1983).
    ///
    /// See also
    /// [Wikipedia: Transverse Mercator](https://en.wikipedia.org/wiki/Transverse_Mercator:_Bowring_series).
    #[must_use]
    #[allow(non_snake_case)] // make it possible to mimic math notation from original paper
    pub fn meridian_distance(&self, latitude: f64) -> f64 {
        let n = self.third_flattening();
        let B = 9. * (1. - 3. * n * n / 8.0);
        let x = 1. + 13. / 12. * n * (2. * latitude).cos();
        let y = 0. + 13. / 12. * n * (2. * latitude).sin();
        let r = y.hypot(x);
        let v = y.atan2(x);
        let theta = latitude - B * r.powf(-2. / 13.) * (2. * v / 13.).sin();
        self.rectifying_radius() * theta
    }

    /// The latitude reached by travelling `distance` along a meridian,
    /// from the equator. The inverse of [`meridian_distance`](Self::meridian_distance).
    #[must_use]
    #[allow(non_snake_case)]
    pub fn meridian_latitude(&self, distance: f64) -> f64 {
        let n = self.third_flattening();
        let C = 1. - 9. * n * n / 16.;
        let theta = distance / self.rectifying_radius();
        let x = 1. - 155. / 84. * n * (2. * theta).cos();
        let y = 0. + 155. / 84. * n * (2. * theta).sin();
        let r = y.hypot(x);
        let v = y.atan2(x);
        theta + 63. / 4. * C * r.powf(8. / 155.) * (8. / 155. * v).sin()
    }

    /// The rectifying radius, *A*, truncated after the n⁴ term: the radius of
    /// the sphere with the same meridian length as the ellipsoid.
    #[must_use]
    pub fn rectifying_radius(&self) -> f64 {
        let n = self.third_flattening();
        let m = 1. + n * n / 8.;
        self.a * m * m / (1. + n)
    }

    /// The direct geodesic problem on this ellipsoid. See [`direct`](crate::direct).
    pub fn geodesic_fwd(
        &self,
        from: Coor2D,
        azimuth: f64,
        distance: f64,
    ) -> Result<Destination, Error> {
        geodesic::direct(from, azimuth, distance, self)
    }

    /// The inverse geodesic problem on this ellipsoid. See [`inverse`](crate::inverse).
    pub fn geodesic_inv(&self, from: Coor2D, to: Coor2D) -> Result<Geodesic, Error> {
        geodesic::inverse(from, to, self)
    }

    /// The distance between two points along the geodesic connecting them
    pub fn distance(&self, from: Coor2D, to: Coor2D) -> Result<f64, Error> {
        Ok(self.geodesic_inv(from, to)?.distance)
    }
}

// ----- Tests ---------------------------------------------------------------------
